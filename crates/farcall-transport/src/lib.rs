mod executor;
mod loopback;

pub use executor::{FnExecutor, RemoteExecutor};
pub use loopback::LoopbackExecutor;

/// Re-exported so executors can be implemented without a direct dependency.
pub use async_trait::async_trait;
