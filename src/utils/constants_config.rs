// src/utils/constants_config.rs
use std::str::FromStr;
use std::thread;
use crate::utils::{
    DEFAULT_PARTICLE_COUNT, DEFAULT_WORKER_COUNT,
    ENV_PARTICLE_COUNT, ENV_POPULATE, ENV_SEED, ENV_WORKER_COUNT,
    errors::BenchError,
};

/// Sizing of one benchmark run. Fixed once the run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub particle_count: usize,
    pub worker_count: usize,
    /// Fill the store with pseudo-random values before the first run.
    pub populate: bool,
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            worker_count: default_worker_count(),
            populate: false,
            seed: 0,
        }
    }
}

/// One worker per available execution unit.
pub fn default_worker_count() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(DEFAULT_WORKER_COUNT)
}

impl BenchConfig {
    pub fn new(
        particle_count: Option<usize>,
        worker_count: Option<usize>,
        populate: Option<bool>,
        seed: Option<u64>,
    ) -> Self {
        let default = Self::default();
        Self {
            particle_count: particle_count.unwrap_or(default.particle_count),
            worker_count: worker_count.unwrap_or(default.worker_count),
            populate: populate.unwrap_or(default.populate),
            seed: seed.unwrap_or(default.seed),
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults; set but unparsable ones are an error.
    pub fn from_env() -> Result<Self, BenchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`BenchConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BenchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::new(
            parse_var(&lookup, ENV_PARTICLE_COUNT)?,
            parse_var(&lookup, ENV_WORKER_COUNT)?,
            parse_var(&lookup, ENV_POPULATE)?,
            parse_var(&lookup, ENV_SEED)?,
        );
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.worker_count == 0 {
            return Err(BenchError::InvalidConfig("worker count must be positive".to_string()));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, BenchError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => {
            let trimmed = raw.trim().replace('_', "");
            trimmed.parse::<T>().map(Some).map_err(|_| {
                BenchError::InvalidConfig(format!("{} has unparsable value {:?}", key, raw))
            })
        }
    }
}
