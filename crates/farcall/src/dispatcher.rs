use crate::error::DispatchError;
use crate::local::LocalOp;
use crate::policy::{ExceptionPolicy, unwrap_invocation_target};
use farcall_core::{
    Call, DescriptorError, Fault, HandleId, ILLEGAL_ARGUMENT, InterfaceDescriptor,
    MethodDescriptor, MethodSignature, RemoteInterface, TypeToken, Value,
};
use farcall_transport::RemoteExecutor;
use std::fmt;
use tracing::{debug, trace};

/// Result of one dispatch.
pub type DispatchOutcome = Result<Value, DispatchError>;

/// Where a call goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Route<'a> {
    /// Declared by the interface; goes to the executor.
    Contract(&'a MethodDescriptor),
    /// Answered by the dispatcher itself.
    Local(LocalOp),
    /// Neither.
    Unsupported,
}

/// Intercepts calls made on a stand-in for one remote interface.
///
/// Immutable after construction: `dispatch` takes `&self`, holds no locks
/// and can be driven from any number of tasks at once as long as the
/// executor allows it.
pub struct Dispatcher<E> {
    descriptor: InterfaceDescriptor,
    executor: E,
    handle: HandleId,
}

impl<E: RemoteExecutor> Dispatcher<E> {
    /// Introspects `token` and binds the result to `executor`.
    ///
    /// Fails if `token` is not an interface or its methods conflict.
    pub fn new(token: TypeToken, executor: E) -> Result<Self, DescriptorError> {
        let descriptor = InterfaceDescriptor::introspect(&token)?;
        debug!(
            interface = descriptor.name(),
            methods = descriptor.len(),
            "Dispatcher created"
        );
        Ok(Self {
            descriptor,
            executor,
            handle: HandleId::next(),
        })
    }

    pub fn for_interface<I: RemoteInterface>(executor: E) -> Result<Self, DescriptorError> {
        Self::new(I::type_token(), executor)
    }

    pub fn descriptor(&self) -> &InterfaceDescriptor {
        &self.descriptor
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// The identity of the stand-in this dispatcher serves.
    pub fn handle(&self) -> HandleId {
        self.handle
    }

    /// Contract first, then the local surface. Runs nothing.
    pub fn classify(&self, method: &MethodSignature) -> Route<'_> {
        if let Some(declared) = self.descriptor.lookup(method) {
            return Route::Contract(declared);
        }
        match LocalOp::resolve(method) {
            Some(op) => Route::Local(op),
            None => Route::Unsupported,
        }
    }

    #[tracing::instrument(
        skip_all,
        fields(interface = self.descriptor.name(), method = %call.method)
    )]
    pub async fn dispatch(&self, call: Call) -> DispatchOutcome {
        match self.classify(&call.method) {
            Route::Contract(method) => {
                trace!("Contract path");
                self.invoke_remote(method, &call.args).await
            }
            Route::Local(op) => {
                trace!(?op, "Local path");
                self.invoke_local(op, &call.args)
            }
            Route::Unsupported => Err(DispatchError::UnsupportedOperation {
                interface: self.descriptor.name().to_string(),
                method: call.method,
            }),
        }
    }

    /// Shorthand for `dispatch(Call::new(method, args))`.
    pub async fn invoke(&self, method: MethodSignature, args: Vec<Value>) -> DispatchOutcome {
        self.dispatch(Call::new(method, args)).await
    }

    async fn invoke_remote(&self, method: &MethodDescriptor, args: &[Value]) -> DispatchOutcome {
        match self.executor.execute_remote(method, args).await {
            Ok(value) => Ok(value),
            Err(fault) => {
                let fault = unwrap_invocation_target(fault);
                debug!(
                    call = %self.describe_call(method, args),
                    error = %fault,
                    "Error in remote method invocation"
                );
                Err(ExceptionPolicy::for_method(method).translate(method.signature(), fault))
            }
        }
    }

    fn invoke_local(&self, op: LocalOp, args: &[Value]) -> DispatchOutcome {
        match op {
            LocalOp::Equals => match args {
                [other] => Ok(Value::Bool(other.as_handle() == Some(self.handle))),
                _ => {
                    let method = op.signature();
                    let message = format!(
                        "{} expects {} argument, got {}",
                        method.name(),
                        method.arity(),
                        args.len()
                    );
                    Err(DispatchError::Local {
                        method,
                        fault: Fault::new(&ILLEGAL_ARGUMENT, message),
                    })
                }
            },
            LocalOp::ToString => Ok(Value::Str(self.to_string())),
            LocalOp::HashCode => Ok(Value::Int(self.handle.as_i64())),
        }
    }

    fn describe_call(&self, method: &MethodDescriptor, args: &[Value]) -> String {
        let args: Vec<_> = args.iter().map(Value::to_string).collect();
        format!("{}.{}[{}]", self.descriptor.name(), method.name(), args.join(", "))
    }
}

impl<E> fmt::Display for Dispatcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dispatcher [interface={}]", self.descriptor.name())
    }
}

impl<E> fmt::Debug for Dispatcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("interface", &self.descriptor.name())
            .field("methods", &self.descriptor.len())
            .field("handle", &self.handle)
            .finish()
    }
}
