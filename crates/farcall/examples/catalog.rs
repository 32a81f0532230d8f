use farcall::core::MethodDescriptor;
use farcall::prelude::*;
use farcall::telemetry::TelemetryConfig;
use std::sync::Arc;

static NOT_FOUND: FaultKind = FaultKind::extends("NotFound", &FAULT);
static TIMEOUT: FaultKind = FaultKind::extends("Timeout", &FAULT);

/// The remote contract.
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

fn report(label: &str, outcome: DispatchOutcome) {
    match outcome {
        Ok(value) => println!("   {label}: {value}"),
        Err(err) => {
            println!("   {label}: {err}");
            if let Some(cause) = err.fault().and_then(Fault::cause) {
                println!("      caused by {cause}");
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), FarcallError> {
    TelemetryConfig::builder()
        .service_name("catalog-client")
        .log_level("farcall=debug")
        .build()
        .init()?;

    println!("Catalog example: starting...");

    // 1. An in-process servant stands in for the remote catalog.
    let servant = Arc::new(
        LoopbackExecutor::new().bind(Catalog::fetch(), |args: &[Value]| match args {
            [Value::Int(1)] => Ok(Value::from("The Left Hand of Darkness")),
            [Value::Int(id)] => Err(Fault::new(&NOT_FOUND, format!("no book with id {id}"))),
            _ => Err(Fault::new(&NOT_FOUND, "malformed id")),
        }),
    );
    let catalog = Dispatcher::for_interface::<Catalog>(servant.clone())?;

    println!("\n[1] Contract calls over loopback");
    report("fetch(1)", catalog.invoke(Catalog::fetch(), vec![Value::Int(1)]).await);
    report("fetch(42)", catalog.invoke(Catalog::fetch(), vec![Value::Int(42)]).await);

    println!("\n[2] Local surface");
    report("to_string()", catalog.invoke(LocalOp::ToString.signature(), vec![]).await);
    report("hash_code()", catalog.invoke(LocalOp::HashCode.signature(), vec![]).await);
    println!("   servant invocations so far: {}", servant.invocations());

    println!("\n[3] Unsupported operation");
    report(
        "clone()",
        catalog
            .invoke(MethodSignature::new("clone").returns("any"), vec![])
            .await,
    );

    println!("\n[4] Transport failure");
    let flaky = Dispatcher::for_interface::<Catalog>(FnExecutor::new(
        |_: &MethodDescriptor, _: &[Value]| Err(Fault::new(&TIMEOUT, "no reply within 30s")),
    ))?;
    report("fetch(1)", flaky.invoke(Catalog::fetch(), vec![Value::Int(1)]).await);

    println!("\nExample completed.");
    farcall::telemetry::shutdown();
    Ok(())
}
