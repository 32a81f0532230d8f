//! farcall facade.
//!
//! A stand-in object hands every call it receives to a [`Dispatcher`]. The
//! dispatcher sends declared methods to a [`RemoteExecutor`], answers the
//! local surface (`equals`, `to_string`, `hash_code`) itself, and rejects
//! everything else. Faults from the executor are translated so the caller
//! only sees kinds the method declares, or an unchecked fault.
//!
//! [`RemoteExecutor`]: farcall_transport::RemoteExecutor

pub use farcall_core as core;
pub use farcall_transport as transport;

mod dispatcher;
mod error;
mod local;
mod policy;
pub mod telemetry;

pub use dispatcher::{DispatchOutcome, Dispatcher, Route};
pub use error::{DispatchError, FarcallError};
pub use local::LocalOp;
pub use policy::{ExceptionPolicy, Translation, unwrap_invocation_target};

/// Everything a stand-in implementation usually needs.
pub mod prelude {
    pub use crate::{DispatchError, DispatchOutcome, Dispatcher, FarcallError, LocalOp};
    pub use farcall_core::{
        Call, FAULT, Fault, FaultKind, HandleId, MethodSignature, REMOTE_FAULT, RemoteInterface,
        TypeToken, UNCHECKED_FAULT, Value,
    };
    pub use farcall_transport::{FnExecutor, LoopbackExecutor, RemoteExecutor};
}
