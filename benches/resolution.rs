//! Performance benchmarks for pairing construction and resolution.
//!
//! Run with: `cargo bench --bench resolution`
//!
//! Construction and rebinding sit on the hot path of dependency analysis:
//! one pairing per resolved dependency edge, per evaluation step.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::runtime::Runtime;

use pairing_kernel::{
    resolve_from_node, Configuration, ConfiguredNode, InMemoryGraphEnvironment, Label,
    NodePairing, Package, PackageId, SourceDeclaration,
};

fn make_configuration() -> Configuration {
    let mut options = BTreeMap::new();
    options.insert("platform".to_string(), "linux".to_string());
    options.insert("compilation_mode".to_string(), "opt".to_string());
    Configuration::from_options(options)
}

/// Environment with one package of `declaration_count` declarations plus a
/// computed configuration.
fn make_environment(declaration_count: usize) -> (InMemoryGraphEnvironment, Configuration) {
    let configuration = make_configuration();
    let mut package = Package::new(PackageId::new("bench"));
    for i in 0..declaration_count {
        package.add_declaration(SourceDeclaration::new(
            Label::parse(&format!("//bench:declaration_{i}")).unwrap(),
            "library",
        ));
    }

    let mut env = InMemoryGraphEnvironment::new();
    env.add_package(package);
    env.add_configuration(configuration.clone());
    (env, configuration)
}

fn bench_checked_construction(c: &mut Criterion) {
    let configuration = Arc::new(make_configuration());
    let label = Label::parse("//bench:declaration_0").unwrap();
    let node = Arc::new(ConfiguredNode::configured(
        label.clone(),
        configuration.key().clone(),
    ));
    let declaration = Arc::new(SourceDeclaration::new(label, "library"));

    c.bench_function("checked_construction", |b| {
        b.iter(|| {
            NodePairing::new(
                black_box(Arc::clone(&node)),
                Arc::clone(&declaration),
                Some(Arc::clone(&configuration)),
                None,
            )
            .unwrap()
        })
    });
}

fn bench_rebind(c: &mut Criterion) {
    let configuration = Arc::new(make_configuration());
    let label = Label::parse("//bench:declaration_0").unwrap();
    let node = Arc::new(ConfiguredNode::configured(
        label.clone(),
        configuration.key().clone(),
    ));
    let equal = Arc::new(ConfiguredNode::configured(
        label.clone(),
        configuration.key().clone(),
    ));
    let declaration = Arc::new(SourceDeclaration::new(label, "library"));
    let pairing = NodePairing::new(
        Arc::clone(&node),
        declaration,
        Some(configuration),
        None,
    )
    .unwrap();

    c.bench_function("rebind_identity_short_circuit", |b| {
        b.iter(|| {
            pairing
                .clone()
                .rebind(black_box(Arc::clone(&equal)))
                .unwrap()
        })
    });
}

fn bench_resolution(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");

    let mut group = c.benchmark_group("resolution");
    for declaration_count in [1, 100, 10_000] {
        let (env, configuration) = make_environment(declaration_count);
        let node = Arc::new(ConfiguredNode::configured(
            Label::parse("//bench:declaration_0").unwrap(),
            configuration.key().clone(),
        ));

        group.bench_with_input(
            BenchmarkId::new("declarations", declaration_count),
            &env,
            |b, env| {
                b.iter(|| {
                    let resolution = rt
                        .block_on(resolve_from_node(black_box(Arc::clone(&node)), env))
                        .unwrap();
                    assert!(resolution.ready().is_some());
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_checked_construction,
    bench_rebind,
    bench_resolution
);
criterion_main!(benches);
