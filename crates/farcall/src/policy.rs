//! Failure translation for the contract path.
//!
//! A fault coming back from the executor is first stripped of its
//! invocation-target wrapper, then matched against the method's declared
//! kinds:
//!
//! 1. the first declared kind that is a superkind of the fault's kind returns
//!    the fault unchanged;
//! 2. failing that, if any declared kind is a superkind of [`REMOTE_FAULT`]
//!    the fault is wrapped in a remote fault;
//! 3. otherwise it is wrapped in an unchecked fault.
//!
//! The caller therefore only ever sees a fault its signature permits, or an
//! unchecked one.

use crate::error::DispatchError;
use farcall_core::{
    Fault, FaultKind, INVOCATION_TARGET, MethodDescriptor, MethodSignature, REMOTE_FAULT,
    UNCHECKED_FAULT,
};

/// The decision reached for one fault kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation {
    /// Rethrow the fault as-is.
    Unchanged,
    /// Wrap in a [`REMOTE_FAULT`].
    Remote,
    /// Wrap in an [`UNCHECKED_FAULT`].
    Unchecked,
}

/// A method's declared fault kinds, in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct ExceptionPolicy<'a> {
    declared: &'a [&'static FaultKind],
}

impl<'a> ExceptionPolicy<'a> {
    pub fn new(declared: &'a [&'static FaultKind]) -> Self {
        Self { declared }
    }

    pub fn for_method(method: &'a MethodDescriptor) -> Self {
        Self::new(method.declared_faults())
    }

    pub fn decide(&self, kind: &FaultKind) -> Translation {
        let mut remote_tolerant = false;
        for declared in self.declared {
            if kind.is_subkind_of(declared) {
                return Translation::Unchanged;
            }
            if !remote_tolerant && REMOTE_FAULT.is_subkind_of(declared) {
                remote_tolerant = true;
            }
        }
        if remote_tolerant {
            Translation::Remote
        } else {
            Translation::Unchecked
        }
    }

    /// Applies [`decide`](Self::decide) to `fault`, raised by a call to `method`.
    pub fn translate(&self, method: &MethodSignature, fault: Fault) -> DispatchError {
        let method = method.clone();
        match self.decide(fault.kind()) {
            Translation::Unchanged => DispatchError::Contract { method, fault },
            Translation::Remote => DispatchError::Remote {
                method,
                fault: Fault::wrap(&REMOTE_FAULT, fault),
            },
            Translation::Unchecked => DispatchError::Unchecked {
                method,
                fault: Fault::wrap(&UNCHECKED_FAULT, fault),
            },
        }
    }
}

/// Strips one invocation-target wrapper, exposing the fault raised by the
/// remote logic. Any other fault is returned as-is.
pub fn unwrap_invocation_target(fault: Fault) -> Fault {
    if fault.kind() != &INVOCATION_TARGET {
        return fault;
    }
    match fault.into_parts() {
        (_, _, Some(target)) => target,
        (kind, message, None) => Fault::new(kind, message),
    }
}
