use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use variant_config::attributes::{filter_declared, normalize};
use variant_config::{
    ConfigRegistry, ConfigurationResolver, OptionsObject, PropsSnapshot, SchemaCatalog,
    VariantParser,
};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("already_canonical", |b| {
        b.iter(|| normalize(black_box("hideOnLeaveTimeout")));
    });

    group.bench_function("hyphenated", |b| {
        b.iter(|| normalize(black_box("hide-on-leave-timeout")));
    });

    let catalog = SchemaCatalog::builtin();
    let declared = catalog.get("TDropdown").map(|s| s.declared().clone()).unwrap_or_default();
    let passed = ["disabled", "id", "data-test", "teleport-to", "class", "aria-label"];

    group.bench_function("filter_declared", |b| {
        b.iter(|| filter_declared(black_box(passed), &declared));
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let catalog = SchemaCatalog::builtin();
    let defaults = catalog
        .get("TRichSelect")
        .map(|s| s.defaults().clone())
        .unwrap_or_default();
    let global = OptionsObject::new()
        .with("teleport", true)
        .with("classes", OptionsObject::new().with("trigger", "px-2"));
    let overrides = OptionsObject::new().with("disabled", true);
    let empty = OptionsObject::new();

    group.bench_function("defaults_only", |b| {
        b.iter(|| VariantParser::parse(black_box(&empty), black_box(&empty), black_box(&defaults)));
    });

    group.bench_function("three_layers", |b| {
        b.iter(|| {
            VariantParser::parse(black_box(&overrides), black_box(&global), black_box(&defaults))
        });
    });

    group.finish();
}

fn bench_resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver");

    let catalog = SchemaCatalog::builtin();
    let mut registry = ConfigRegistry::new();
    registry.register("TDropdown", OptionsObject::new().with("teleport", true));
    let registry = Arc::new(registry);

    let on = PropsSnapshot::new().with_passed("disabled", true);
    let off = PropsSnapshot::new().with_passed("disabled", false);

    if let Ok(mut resolver) = ConfigurationResolver::for_type(&catalog, "TDropdown", registry) {
        group.bench_function("update_unchanged", |b| {
            resolver.update(&on);
            b.iter(|| resolver.update(black_box(&on)));
        });

        group.bench_function("update_toggling", |b| {
            let mut flag = false;
            b.iter(|| {
                flag = !flag;
                resolver.update(black_box(if flag { &on } else { &off }))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_parse, bench_resolver);
criterion_main!(benches);
