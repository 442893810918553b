use std::collections::HashMap;
use crate::utils::{BenchConfig, BenchError, DEFAULT_PARTICLE_COUNT};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_new_falls_back_to_defaults() {
    let config = BenchConfig::new(Some(1024), None, None, None);
    let default = BenchConfig::default();
    assert_eq!(config.particle_count, 1024);
    assert_eq!(config.worker_count, default.worker_count);
    assert!(!config.populate);
    assert_eq!(config.seed, 0);
}

#[test]
fn test_default_worker_count_is_positive() {
    let config = BenchConfig::default();
    assert!(config.worker_count >= 1);
    assert_eq!(config.particle_count, DEFAULT_PARTICLE_COUNT);
}

#[test]
fn test_from_lookup_reads_all_variables() {
    let config = BenchConfig::from_lookup(lookup_from(&[
        ("PARTICLE_BENCH_COUNT", "1_000_000"),
        ("PARTICLE_BENCH_WORKERS", "6"),
        ("PARTICLE_BENCH_POPULATE", "true"),
        ("PARTICLE_BENCH_SEED", " 42 "),
    ]))
    .expect("valid configuration");
    assert_eq!(config, BenchConfig::new(Some(1_000_000), Some(6), Some(true), Some(42)));
}

#[test]
fn test_from_lookup_empty_environment_is_default() {
    let config = BenchConfig::from_lookup(|_| None).expect("defaults are valid");
    assert_eq!(config, BenchConfig::default());
}

#[test]
fn test_from_lookup_rejects_garbage() {
    let result = BenchConfig::from_lookup(lookup_from(&[("PARTICLE_BENCH_COUNT", "lots")]));
    match result {
        Err(BenchError::InvalidConfig(msg)) => assert!(msg.contains("PARTICLE_BENCH_COUNT")),
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_zero_workers_is_invalid() {
    let result = BenchConfig::from_lookup(lookup_from(&[("PARTICLE_BENCH_WORKERS", "0")]));
    assert!(matches!(result, Err(BenchError::InvalidConfig(_))));
}
