use async_trait::async_trait;
use farcall_core::{Fault, MethodDescriptor, Value};
use std::sync::Arc;

/// The remote-execution step.
///
/// The dispatcher hands every contract call to exactly one
/// `execute_remote`. Network I/O, encoding and connection handling all live
/// behind this trait.
///
/// A failure inside the remote logic should be reported as
/// [`Fault::invocation_target`] wrapping the logic's fault; any other fault is
/// treated as a plumbing failure and translated as-is.
#[async_trait]
pub trait RemoteExecutor: Send + Sync {
    async fn execute_remote(
        &self,
        method: &MethodDescriptor,
        args: &[Value],
    ) -> Result<Value, Fault>;
}

#[async_trait]
impl<T: RemoteExecutor + ?Sized> RemoteExecutor for Arc<T> {
    async fn execute_remote(
        &self,
        method: &MethodDescriptor,
        args: &[Value],
    ) -> Result<Value, Fault> {
        (**self).execute_remote(method, args).await
    }
}

#[async_trait]
impl<T: RemoteExecutor + ?Sized> RemoteExecutor for Box<T> {
    async fn execute_remote(
        &self,
        method: &MethodDescriptor,
        args: &[Value],
    ) -> Result<Value, Fault> {
        (**self).execute_remote(method, args).await
    }
}

/// Adapts a synchronous closure into a [`RemoteExecutor`].
pub struct FnExecutor<F> {
    f: F,
}

impl<F> FnExecutor<F>
where
    F: Fn(&MethodDescriptor, &[Value]) -> Result<Value, Fault> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F> RemoteExecutor for FnExecutor<F>
where
    F: Fn(&MethodDescriptor, &[Value]) -> Result<Value, Fault> + Send + Sync,
{
    async fn execute_remote(
        &self,
        method: &MethodDescriptor,
        args: &[Value],
    ) -> Result<Value, Fault> {
        (self.f)(method, args)
    }
}
