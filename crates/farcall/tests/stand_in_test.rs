use farcall::core::{ILLEGAL_ARGUMENT, MethodDescriptor};
use farcall::prelude::*;
use std::sync::Arc;

static NOT_FOUND: FaultKind = FaultKind::extends("NotFound", &FAULT);
static TIMEOUT: FaultKind = FaultKind::extends("Timeout", &FAULT);

struct Catalog;

impl Catalog {
    fn fetch() -> MethodSignature {
        MethodSignature::new("fetch").param("i64").returns("string")
    }
}

impl RemoteInterface for Catalog {
    const NAME: &'static str = "Catalog";

    fn type_token() -> TypeToken {
        TypeToken::interface(Self::NAME).method(
            Catalog::fetch()
                .throws(&NOT_FOUND)
                .throws(&REMOTE_FAULT),
        )
    }
}

/// What a stub generator would emit for `Catalog`.
struct CatalogStub {
    dispatcher: Dispatcher<Arc<dyn RemoteExecutor>>,
}

impl CatalogStub {
    fn new(executor: Arc<dyn RemoteExecutor>) -> Result<Self, FarcallError> {
        Ok(Self {
            dispatcher: Dispatcher::for_interface::<Catalog>(executor)?,
        })
    }

    async fn fetch(&self, id: i64) -> Result<String, Fault> {
        let value = self
            .dispatcher
            .invoke(Catalog::fetch(), vec![Value::Int(id)])
            .await
            .map_err(DispatchError::into_fault)?;
        match value {
            Value::Str(s) => Ok(s),
            other => Err(Fault::new(
                &ILLEGAL_ARGUMENT,
                format!("fetch returned {other}, expected a string"),
            )),
        }
    }

    async fn describe(&self) -> Result<String, Fault> {
        let value = self
            .dispatcher
            .invoke(LocalOp::ToString.signature(), vec![])
            .await
            .map_err(DispatchError::into_fault)?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    async fn same_as(&self, other: &CatalogStub) -> Result<bool, Fault> {
        let value = self
            .dispatcher
            .invoke(
                LocalOp::Equals.signature(),
                vec![Value::Handle(other.dispatcher.handle())],
            )
            .await
            .map_err(DispatchError::into_fault)?;
        Ok(value.as_bool().unwrap_or(false))
    }
}

fn servant() -> Arc<LoopbackExecutor> {
    Arc::new(
        LoopbackExecutor::new().bind(Catalog::fetch(), |args: &[Value]| match args {
            [Value::Int(7)] => Ok(Value::from("seven")),
            _ => Err(Fault::new(&NOT_FOUND, "no such id")),
        }),
    )
}

#[tokio::test]
async fn test_fetch_success() {
    let stub = CatalogStub::new(servant()).unwrap();
    assert_eq!(stub.fetch(7).await.unwrap(), "seven");
}

#[tokio::test]
async fn test_declared_not_found_reaches_caller_unchanged() {
    let stub = CatalogStub::new(servant()).unwrap();

    let fault = stub.fetch(42).await.unwrap_err();
    assert_eq!(fault, Fault::new(&NOT_FOUND, "no such id"));
}

#[tokio::test]
async fn test_transport_timeout_becomes_remote_fault() {
    let timeout = Fault::new(&TIMEOUT, "no reply within 30s");
    let expected = timeout.clone();
    let stub = CatalogStub::new(Arc::new(FnExecutor::new(
        move |_: &MethodDescriptor, _: &[Value]| Err(timeout.clone()),
    )))
    .unwrap();

    let fault = stub.fetch(42).await.unwrap_err();
    assert_eq!(fault.kind(), &REMOTE_FAULT);
    assert_eq!(fault.message(), "no reply within 30s");
    assert_eq!(fault.cause(), Some(&expected));
}

#[tokio::test]
async fn test_to_string_is_local() {
    let executor = servant();
    let stub = CatalogStub::new(executor.clone()).unwrap();

    assert_eq!(stub.describe().await.unwrap(), "Dispatcher [interface=Catalog]");
    assert_eq!(executor.invocations(), 0);
}

#[tokio::test]
async fn test_equality_is_identity() {
    let executor = servant();
    let a = CatalogStub::new(executor.clone()).unwrap();
    let b = CatalogStub::new(executor.clone()).unwrap();

    assert!(a.same_as(&a).await.unwrap());
    assert!(!a.same_as(&b).await.unwrap());
    assert_eq!(executor.invocations(), 0);
}

#[tokio::test]
async fn test_concrete_type_cannot_back_a_stub() {
    let err = Dispatcher::new(TypeToken::concrete("CatalogImpl"), servant()).unwrap_err();
    let err = FarcallError::from(err);
    assert_eq!(err.to_string(), "Descriptor error: 'CatalogImpl' is not an interface type");
}
