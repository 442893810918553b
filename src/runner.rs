//! The four run entry points of the benchmark.
//!
//! [`UpdateBench`] owns the particle store and the worker pool for the life of
//! a run. Each entry point advances every particle by its velocity exactly
//! once; calling one twice moves the particles twice.
//!
//! # Example
//!
//! ```
//! use soa_update_bench::runner::{Strategy, UpdateBench};
//! use soa_update_bench::utils::BenchConfig;
//!
//! let config = BenchConfig::new(Some(1024), Some(4), Some(true), Some(1));
//! let mut bench = UpdateBench::new(config).expect("Failed to start the benchmark");
//!
//! for strategy in Strategy::ALL {
//!     bench.run(strategy).expect("Run failed");
//! }
//! ```
use log::debug;
use std::fmt;
use crate::dispatch::Dispatcher;
use crate::kernels::{ScalarKernel, SimdKernel, UpdateKernel};
use crate::particles::ParticleStore;
use crate::utils::{BenchConfig, BenchError};

/// Execution strategy of one pass over the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    SerialScalar,
    SerialVectorized,
    ThreadedScalar,
    ThreadedVectorized,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::SerialVectorized,
        Strategy::SerialScalar,
        Strategy::ThreadedScalar,
        Strategy::ThreadedVectorized,
    ];

    /// Name reported by the timing harness.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::SerialScalar => "serial_add",
            Strategy::SerialVectorized => "simd_add",
            Strategy::ThreadedScalar => "threaded_add_serial",
            Strategy::ThreadedVectorized => "threaded_add_simd",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct UpdateBench {
    store: ParticleStore,
    dispatcher: Dispatcher,
}

impl UpdateBench {
    /// Allocates a zeroed store of `config.particle_count` particles, populates it if
    /// requested and starts `config.worker_count` workers.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` or `WorkerStartFailure` if the pool cannot be created.
    pub fn new(config: BenchConfig) -> Result<Self, BenchError> {
        config.validate()?;
        let mut store = ParticleStore::zeroed(config.particle_count);
        if config.populate {
            debug!("Populating {} particles with seed {}", config.particle_count, config.seed);
            store.populate_seeded(config.seed);
        }
        Self::with_store(store, config.worker_count)
    }

    /// Runs over an existing store with `workers` threads.
    pub fn with_store(store: ParticleStore, workers: usize) -> Result<Self, BenchError> {
        let dispatcher = Dispatcher::new(workers)?;
        Ok(Self { store, dispatcher })
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn into_store(self) -> ParticleStore {
        self.store
    }

    pub fn workers(&self) -> usize {
        self.dispatcher.workers()
    }

    /// Single pass of the scalar kernel over every particle.
    pub fn run_serial_scalar(&mut self) -> Result<(), BenchError> {
        self.run_serial(&ScalarKernel)
    }

    /// Single pass of the four-lane kernel over every particle.
    ///
    /// # Errors
    ///
    /// Returns `MisalignedPartition` without touching the store if the particle
    /// count is not a multiple of four.
    pub fn run_serial_vectorized(&mut self) -> Result<(), BenchError> {
        self.run_serial(&SimdKernel)
    }

    /// Scalar kernel on every worker, one partition each.
    pub fn run_threaded_scalar(&mut self) -> Result<(), BenchError> {
        self.dispatcher.dispatch(&mut self.store, &ScalarKernel)
    }

    /// Four-lane kernel on every worker, one lane-aligned partition each.
    pub fn run_threaded_vectorized(&mut self) -> Result<(), BenchError> {
        self.dispatcher.dispatch(&mut self.store, &SimdKernel)
    }

    pub fn run(&mut self, strategy: Strategy) -> Result<(), BenchError> {
        match strategy {
            Strategy::SerialScalar => self.run_serial_scalar(),
            Strategy::SerialVectorized => self.run_serial_vectorized(),
            Strategy::ThreadedScalar => self.run_threaded_scalar(),
            Strategy::ThreadedVectorized => self.run_threaded_vectorized(),
        }
    }

    fn run_serial<K: UpdateKernel>(&mut self, kernel: &K) -> Result<(), BenchError> {
        kernel.apply(self.store.view_mut())
    }
}
