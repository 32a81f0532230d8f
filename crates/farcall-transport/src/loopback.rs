use crate::executor::RemoteExecutor;
use async_trait::async_trait;
use farcall_core::{Fault, MethodDescriptor, MethodSignature, REMOTE_FAULT, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

type Handler = Box<dyn Fn(&[Value]) -> Result<Value, Fault> + Send + Sync>;

/// An in-process executor backed by a table of servant handlers.
///
/// Handler failures come back wrapped as invocation-target faults, the way a
/// real transport reports an exception raised by the remote logic. Calls to
/// a signature with no bound handler fail as plumbing with a
/// [`REMOTE_FAULT`].
#[derive(Default)]
pub struct LoopbackExecutor {
    servants: HashMap<MethodSignature, Handler>,
    invocations: AtomicU64,
}

impl LoopbackExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `handler` to `signature`, replacing any earlier binding.
    pub fn bind<F>(mut self, signature: MethodSignature, handler: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, Fault> + Send + Sync + 'static,
    {
        self.servants.insert(signature, Box::new(handler));
        self
    }

    /// Number of `execute_remote` calls received so far.
    pub fn invocations(&self) -> u64 {
        self.invocations.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl RemoteExecutor for LoopbackExecutor {
    async fn execute_remote(
        &self,
        method: &MethodDescriptor,
        args: &[Value],
    ) -> Result<Value, Fault> {
        self.invocations.fetch_add(1, Ordering::Relaxed);

        let Some(handler) = self.servants.get(method.signature()) else {
            return Err(Fault::new(
                &REMOTE_FAULT,
                format!("No servant bound for {}", method.signature()),
            ));
        };

        trace!(method = %method.signature(), "Loopback invocation");
        handler(args).map_err(Fault::invocation_target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farcall_core::{FAULT, FaultKind, INVOCATION_TARGET};

    static NOT_FOUND: FaultKind = FaultKind::extends("NotFound", &FAULT);

    fn fetch() -> MethodSignature {
        MethodSignature::new("fetch").param("i64").returns("string")
    }

    fn servant() -> LoopbackExecutor {
        LoopbackExecutor::new().bind(fetch(), |args: &[Value]| match args.first() {
            Some(Value::Int(42)) => Ok(Value::from("answer")),
            _ => Err(Fault::new(&NOT_FOUND, "no such id")),
        })
    }

    #[tokio::test]
    async fn test_bound_handler_answers() {
        let exec = servant();
        let out = exec
            .execute_remote(&fetch().throws(&NOT_FOUND), &[Value::Int(42)])
            .await
            .unwrap();

        assert_eq!(out, Value::from("answer"));
        assert_eq!(exec.invocations(), 1);
    }

    #[tokio::test]
    async fn test_handler_failure_is_invocation_target() {
        let exec = servant();
        let err = exec
            .execute_remote(&fetch().throws(&NOT_FOUND), &[Value::Int(7)])
            .await
            .unwrap_err();

        assert_eq!(err.kind(), &INVOCATION_TARGET);
        assert_eq!(err.cause().unwrap().kind(), &NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unbound_method_is_plumbing_failure() {
        let exec = servant();
        let err = exec
            .execute_remote(&MethodSignature::new("ping").declare(), &[])
            .await
            .unwrap_err();

        assert_eq!(err.kind(), &REMOTE_FAULT);
        assert!(err.cause().is_none());
        assert_eq!(exec.invocations(), 1);
    }
}
