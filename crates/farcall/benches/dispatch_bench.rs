use criterion::{Criterion, black_box, criterion_group, criterion_main};
use farcall::core::MethodDescriptor;
use farcall::prelude::*;
use farcall::ExceptionPolicy;

static NOT_FOUND: FaultKind = FaultKind::extends("NotFound", &FAULT);
static CONFLICT: FaultKind = FaultKind::extends("Conflict", &FAULT);
static TIMEOUT: FaultKind = FaultKind::extends("Timeout", &FAULT);

fn catalog() -> TypeToken {
    let mut token = TypeToken::interface("Catalog");
    for i in 0..32 {
        token = token.method(
            MethodSignature::new(format!("op{i}"))
                .param("i64")
                .returns("string")
                .throws(&NOT_FOUND),
        );
    }
    token.method(
        MethodSignature::new("fetch")
            .param("i64")
            .returns("string")
            .throws(&NOT_FOUND)
            .throws(&CONFLICT)
            .throws(&REMOTE_FAULT),
    )
}

fn fetch() -> MethodSignature {
    MethodSignature::new("fetch").param("i64").returns("string")
}

fn bench_classify(c: &mut Criterion) {
    let dispatcher = Dispatcher::new(
        catalog(),
        FnExecutor::new(|_: &MethodDescriptor, _: &[Value]| Ok(Value::Null)),
    )
    .unwrap();
    let contract = fetch();
    let local = LocalOp::HashCode.signature();

    c.bench_function("classify_contract", |b| {
        b.iter(|| black_box(dispatcher.classify(black_box(&contract))))
    });
    c.bench_function("classify_local", |b| {
        b.iter(|| black_box(dispatcher.classify(black_box(&local))))
    });
}

fn bench_translate(c: &mut Criterion) {
    let declared = [&NOT_FOUND, &CONFLICT, &REMOTE_FAULT];
    let policy = ExceptionPolicy::new(&declared);
    let method = fetch();
    let fault = Fault::new(&TIMEOUT, "no reply");

    c.bench_function("translate_remote_fallback", |b| {
        b.iter(|| black_box(policy.translate(&method, black_box(fault.clone()))))
    });
}

fn bench_dispatch(c: &mut Criterion) {
    let dispatcher = Dispatcher::new(
        catalog(),
        FnExecutor::new(|_: &MethodDescriptor, args: &[Value]| Ok(args[0].clone())),
    )
    .unwrap();

    // Warmup
    futures::executor::block_on(dispatcher.invoke(fetch(), vec![Value::Int(1)])).unwrap();

    c.bench_function("dispatch_contract", |b| {
        b.iter(|| {
            let call = Call::new(fetch(), vec![Value::Int(42)]);
            futures::executor::block_on(dispatcher.dispatch(black_box(call))).unwrap()
        })
    });
}

criterion_group!(benches, bench_classify, bench_translate, bench_dispatch);
criterion_main!(benches);
