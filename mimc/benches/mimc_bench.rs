use criterion::{criterion_group, criterion_main, Criterion};
use mimc_constants::{cache::ConstantsCache, generator::round_constants, MimcConfig};

pub fn bench_round_constants(c: &mut Criterion) {
    let mut group = c.benchmark_group("MiMC");
    group.sample_size(100);

    let config = MimcConfig::default();
    group.bench_function("round_constants_91", |b| {
        b.iter(|| round_constants(&config).unwrap())
    });

    let cache = ConstantsCache::new();
    group.bench_function("round_constants_91_cached", |b| {
        b.iter(|| cache.get_or_generate(&config).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_round_constants);
criterion_main!(benches);
