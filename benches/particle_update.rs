use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use soa_update_bench::{BenchConfig, Strategy, UpdateBench};

const PARTICLE_COUNTS: [usize; 2] = [1 << 16, 1 << 22];

pub fn bench_update_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_update");
    group.measurement_time(std::time::Duration::from_secs(5));
    group.sample_size(50);

    for &count in &PARTICLE_COUNTS {
        group.throughput(Throughput::Elements(count as u64));
        let config = BenchConfig::new(Some(count), None, Some(true), Some(42));
        let mut bench = UpdateBench::new(config).expect("Failed to start the benchmark");

        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), count), &strategy, |b, &strategy| {
                b.iter(|| bench.run(strategy).expect("Run failed"))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_update_strategies);
criterion_main!(benches);
