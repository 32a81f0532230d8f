use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;

/// A classification of fault, arranged in a closed single-parent hierarchy.
///
/// Kinds are declared as `static` values so that method descriptors can hold
/// `&'static FaultKind` references:
///
/// ```
/// use farcall_core::{FaultKind, FAULT};
///
/// static NOT_FOUND: FaultKind = FaultKind::extends("NotFound", &FAULT);
///
/// assert!(NOT_FOUND.is_subkind_of(&FAULT));
/// assert!(!FAULT.is_subkind_of(&NOT_FOUND));
/// ```
///
/// A kind's identity is its address: two statics with the same name are
/// still distinct kinds. Declare kinds as `static`, never `const`.
#[derive(Debug)]
pub struct FaultKind {
    name: &'static str,
    parent: Option<&'static FaultKind>,
}

impl FaultKind {
    /// Declares a kind with no parent.
    pub const fn root(name: &'static str) -> Self {
        Self { name, parent: None }
    }

    /// Declares a kind directly below `parent`.
    pub const fn extends(name: &'static str, parent: &'static FaultKind) -> Self {
        Self {
            name,
            parent: Some(parent),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn parent(&self) -> Option<&'static FaultKind> {
        self.parent
    }

    /// Returns `true` if `self` is `other` or lies anywhere below it.
    pub fn is_subkind_of(&self, other: &FaultKind) -> bool {
        if self == other {
            return true;
        }
        let mut current = self.parent;
        while let Some(kind) = current {
            if kind == other {
                return true;
            }
            current = kind.parent;
        }
        false
    }

    /// Iterates from `self` up to the root of its hierarchy.
    pub fn lineage(&'static self) -> Lineage {
        Lineage { next: Some(self) }
    }
}

impl PartialEq for FaultKind {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for FaultKind {}

impl Hash for FaultKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self, state);
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Iterator returned by [`FaultKind::lineage`].
pub struct Lineage {
    next: Option<&'static FaultKind>,
}

impl Iterator for Lineage {
    type Item = &'static FaultKind;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent;
        Some(current)
    }
}

// ── Built-in kinds ────────────────────────────────────────────────

/// Root of every fault hierarchy shipped with farcall.
pub static FAULT: FaultKind = FaultKind::root("Fault");

/// Input/output failures.
pub static IO_FAULT: FaultKind = FaultKind::extends("IoFault", &FAULT);

/// The generic remote-failure kind raised by transports.
pub static REMOTE_FAULT: FaultKind = FaultKind::extends("RemoteFault", &IO_FAULT);

/// Faults no method signature has to declare.
pub static UNCHECKED_FAULT: FaultKind = FaultKind::extends("UncheckedFault", &FAULT);

/// A method is neither part of the remote contract nor of the local surface.
pub static UNSUPPORTED_OPERATION: FaultKind =
    FaultKind::extends("UnsupportedOperation", &UNCHECKED_FAULT);

/// A call was made with arguments its target cannot accept.
pub static ILLEGAL_ARGUMENT: FaultKind = FaultKind::extends("IllegalArgument", &UNCHECKED_FAULT);

/// Wrapper raised when the remote logic itself failed; the cause is the real fault.
pub static INVOCATION_TARGET: FaultKind = FaultKind::extends("InvocationTarget", &FAULT);
