use crate::kind::{FaultKind, INVOCATION_TARGET};
use thiserror::Error;

/// A raised error: a kind, a message and an optional cause.
///
/// Faults are what the remote-execution step reports and what the
/// dispatcher hands back to callers. The cause chain is exposed through
/// [`std::error::Error::source`].
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind}: {message}")]
pub struct Fault {
    kind: &'static FaultKind,
    message: String,
    #[source]
    cause: Option<Box<Fault>>,
}

impl Fault {
    pub fn new(kind: &'static FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(kind: &'static FaultKind, message: impl Into<String>, cause: Fault) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Wraps `cause` in a fault of `kind`, carrying the cause's message.
    pub fn wrap(kind: &'static FaultKind, cause: Fault) -> Self {
        let message = cause.message.clone();
        Self::with_cause(kind, message, cause)
    }

    /// Marks `target` as a failure of the remote logic itself, as opposed to
    /// the plumbing that reached it.
    pub fn invocation_target(target: Fault) -> Self {
        Self::wrap(&INVOCATION_TARGET, target)
    }

    pub fn kind(&self) -> &'static FaultKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Fault> {
        self.cause.as_deref()
    }

    /// Takes the cause out of this fault, dropping the wrapper.
    pub fn into_cause(self) -> Option<Fault> {
        self.cause.map(|cause| *cause)
    }

    pub fn into_parts(self) -> (&'static FaultKind, String, Option<Fault>) {
        (self.kind, self.message, self.cause.map(|cause| *cause))
    }

    /// Returns `true` if this fault's kind is `kind` or lies below it.
    pub fn is(&self, kind: &FaultKind) -> bool {
        self.kind.is_subkind_of(kind)
    }

    /// The innermost fault of the cause chain.
    pub fn root_cause(&self) -> &Fault {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{FAULT, REMOTE_FAULT};
    use std::error::Error as _;

    static TIMEOUT: FaultKind = FaultKind::extends("Timeout", &FAULT);

    #[test]
    fn test_wrap_keeps_message_and_cause() {
        let inner = Fault::new(&TIMEOUT, "read timed out after 30s");
        let outer = Fault::wrap(&REMOTE_FAULT, inner.clone());

        assert_eq!(outer.kind(), &REMOTE_FAULT);
        assert_eq!(outer.message(), "read timed out after 30s");
        assert_eq!(outer.cause(), Some(&inner));
    }

    #[test]
    fn test_source_chain() {
        let inner = Fault::new(&TIMEOUT, "slow");
        let outer = Fault::wrap(&REMOTE_FAULT, inner);

        let source = outer.source().expect("wrapped fault exposes its cause");
        assert_eq!(source.to_string(), "Timeout: slow");
        assert!(source.source().is_none());
    }

    #[test]
    fn test_invocation_target_unwraps_to_target() {
        let target = Fault::new(&TIMEOUT, "boom");
        let wrapper = Fault::invocation_target(target.clone());

        assert_eq!(wrapper.kind(), &INVOCATION_TARGET);
        assert_eq!(wrapper.into_cause(), Some(target));
    }

    #[test]
    fn test_root_cause() {
        let root = Fault::new(&TIMEOUT, "root");
        let chain = Fault::wrap(&REMOTE_FAULT, Fault::invocation_target(root.clone()));
        assert_eq!(chain.root_cause(), &root);
        assert!(chain.is(&FAULT));
    }
}
