use approx::assert_relative_eq;
use crate::particles::{Channel, ParticleStore};
use crate::runner::{Strategy, UpdateBench};
use crate::utils::{BenchConfig, BenchError};

fn bench_over(len: usize, seed: u64, workers: usize) -> UpdateBench {
    let config = BenchConfig::new(Some(len), Some(workers), Some(true), Some(seed));
    UpdateBench::new(config).expect("Failed to start the benchmark")
}

fn bits(values: &[f32]) -> Vec<u32> {
    values.iter().map(|v| v.to_bits()).collect()
}

#[test]
fn test_all_strategies_agree_bit_for_bit() {
    let mut results = Vec::new();
    for strategy in Strategy::ALL {
        let mut bench = bench_over(4096, 21, 6);
        bench.run(strategy).expect("run");
        results.push((strategy, bench.into_store()));
    }
    let (_, reference) = &results[0];
    for (strategy, store) in &results[1..] {
        for axis in [Channel::PosX, Channel::PosY] {
            assert_eq!(bits(store.channel(axis)), bits(reference.channel(axis)), "{} diverged on {:?}", strategy, axis);
        }
    }
}

#[test]
fn test_runs_accumulate() {
    for strategy in Strategy::ALL {
        let mut bench = bench_over(256, 5, 4);
        let initial = bench.store().clone();
        bench.run(strategy).expect("first run");
        bench.run(strategy).expect("second run");
        let store = bench.store();
        let (x, y) = (store.channel(Channel::PosX), store.channel(Channel::PosY));
        let (x0, y0) = (initial.channel(Channel::PosX), initial.channel(Channel::PosY));
        let (vx, vy) = (initial.channel(Channel::VelX), initial.channel(Channel::VelY));
        for i in 0..store.len() {
            assert_relative_eq!(x[i], x0[i] + 2.0 * vx[i], max_relative = 1e-6);
            assert_relative_eq!(y[i], y0[i] + 2.0 * vy[i], max_relative = 1e-6);
            // Twice is not once.
            assert_ne!(x[i], x0[i] + vx[i]);
        }
    }
}

#[test]
fn test_empty_store_runs_are_noops() {
    let mut bench = bench_over(0, 0, 6);
    for strategy in Strategy::ALL {
        bench.run(strategy).expect("empty run");
    }
    assert!(bench.store().is_empty());
}

#[test]
fn test_single_particle_with_many_workers() {
    let store = ParticleStore::from_channels(vec![1.0], vec![1.0], vec![2.0], vec![3.0]).unwrap();
    let mut bench = UpdateBench::with_store(store, 6).expect("pool");
    bench.run_serial_scalar().expect("serial");
    bench.run_threaded_scalar().expect("threaded");
    assert_eq!(bench.store().channel(Channel::PosX), &[5.0]);
    assert_eq!(bench.store().channel(Channel::PosY), &[7.0]);
}

#[test]
fn test_vectorized_runs_fault_on_unaligned_count() {
    let mut bench = bench_over(1023, 8, 4);
    let before = bench.store().clone();
    let expected = Err(BenchError::MisalignedPartition { length: 1023, lane_width: 4 });
    assert_eq!(bench.run_serial_vectorized(), expected);
    assert_eq!(bench.run_threaded_vectorized(), expected);
    assert_eq!(bench.store(), &before);

    // Scalar paths have no lane contract.
    bench.run_serial_scalar().expect("scalar");
    bench.run_threaded_scalar().expect("threaded scalar");
}

#[test]
fn test_zero_workers_is_rejected() {
    let config = BenchConfig::new(Some(16), Some(0), None, None);
    assert!(matches!(UpdateBench::new(config), Err(BenchError::InvalidConfig(_))));
}

#[test]
fn test_unpopulated_store_is_zeroed() {
    let config = BenchConfig::new(Some(8), Some(2), Some(false), None);
    let mut bench = UpdateBench::new(config).expect("bench");
    assert_eq!(bench.workers(), 2);
    bench.run_threaded_vectorized().expect("run");
    assert!(bench.store().channel(Channel::PosX).iter().all(|&x| x == 0.0));
}

#[test]
fn test_strategy_names() {
    let names: Vec<String> = Strategy::ALL.iter().map(|s| s.to_string()).collect();
    assert_eq!(names, vec!["simd_add", "serial_add", "threaded_add_serial", "threaded_add_simd"]);
}
