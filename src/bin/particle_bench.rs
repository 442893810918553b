// src/bin/particle_bench.rs
//
// Times each update strategy once over the configured store.
// Configure with PARTICLE_BENCH_COUNT, PARTICLE_BENCH_WORKERS,
// PARTICLE_BENCH_POPULATE and PARTICLE_BENCH_SEED; RUST_LOG=info shows the timings.

use log::{error, info};
use soa_update_bench::{BenchConfig, BenchError, Strategy, UpdateBench};
use std::process::ExitCode;
use std::time::Instant;

fn run() -> Result<(), BenchError> {
    let config = BenchConfig::from_env()?;
    info!(
        "{} particles, {} workers, populate = {}",
        config.particle_count, config.worker_count, config.populate
    );

    let started = Instant::now();
    let mut bench = UpdateBench::new(config)?;
    info!("Setup took {} ms", started.elapsed().as_millis());

    for strategy in Strategy::ALL {
        let started = Instant::now();
        bench.run(strategy)?;
        info!(
            "Running function `{}`: took {} ms to complete.",
            strategy,
            started.elapsed().as_millis()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Benchmark aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
