use farcall_core::{DescriptorError, Fault, FaultKind, MethodSignature, UNSUPPORTED_OPERATION};
use std::error::Error as StdError;
use thiserror::Error;

/// What a caller receives when a dispatch fails.
///
/// Every variant records the signature of the invoked method. All but
/// [`DispatchError::UnsupportedOperation`] also carry a [`Fault`];
/// contract-path variants are the outcome of the translation policy, so the
/// fault is always one the method's signature permits or an unchecked
/// wrapper.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchError {
    /// The method is neither declared by the interface nor on the local
    /// surface. Raised before anything runs.
    #[error("Unsupported operation on remote interface '{interface}': {method}")]
    UnsupportedOperation {
        interface: String,
        method: MethodSignature,
    },

    /// The executor's fault, unchanged, because the method declares its kind.
    #[error("{fault}")]
    Contract {
        method: MethodSignature,
        #[source]
        fault: Fault,
    },

    /// The executor's fault wrapped in a remote fault.
    #[error("{fault}")]
    Remote {
        method: MethodSignature,
        #[source]
        fault: Fault,
    },

    /// The executor's fault wrapped in an unchecked fault.
    #[error("{fault}")]
    Unchecked {
        method: MethodSignature,
        #[source]
        fault: Fault,
    },

    /// A local-surface operation failed. Never translated.
    #[error("{fault}")]
    Local {
        method: MethodSignature,
        #[source]
        fault: Fault,
    },
}

impl DispatchError {
    /// The signature of the call that failed.
    pub fn method(&self) -> &MethodSignature {
        match self {
            DispatchError::UnsupportedOperation { method, .. }
            | DispatchError::Contract { method, .. }
            | DispatchError::Remote { method, .. }
            | DispatchError::Unchecked { method, .. }
            | DispatchError::Local { method, .. } => method,
        }
    }

    /// The fault delivered to the caller, if the variant carries one.
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            DispatchError::UnsupportedOperation { .. } => None,
            DispatchError::Contract { fault, .. }
            | DispatchError::Remote { fault, .. }
            | DispatchError::Unchecked { fault, .. }
            | DispatchError::Local { fault, .. } => Some(fault),
        }
    }

    pub fn kind(&self) -> &'static FaultKind {
        match self.fault() {
            Some(f) => f.kind(),
            None => &UNSUPPORTED_OPERATION,
        }
    }

    /// Flattens any variant into a single [`Fault`].
    pub fn into_fault(self) -> Fault {
        match self {
            unsupported @ DispatchError::UnsupportedOperation { .. } => {
                Fault::new(&UNSUPPORTED_OPERATION, unsupported.to_string())
            }
            DispatchError::Contract { fault, .. }
            | DispatchError::Remote { fault, .. }
            | DispatchError::Unchecked { fault, .. }
            | DispatchError::Local { fault, .. } => fault,
        }
    }
}

/// Unified error type for applications built on farcall.
#[derive(Error, Debug)]
pub enum FarcallError {
    /// The interface could not be described.
    #[error("Descriptor error: {0}")]
    Descriptor(#[from] DescriptorError),

    /// A dispatched call failed.
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Telemetry could not be installed.
    #[error("Telemetry error: {0}")]
    Telemetry(#[source] Box<dyn StdError + Send + Sync>),
}

impl FarcallError {
    pub(crate) fn telemetry(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        FarcallError::Telemetry(err.into())
    }
}
