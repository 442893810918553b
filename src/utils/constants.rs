/// Number of single-precision lanes in one 128-bit SIMD register.
pub const LANE_WIDTH: usize = 4;

/// Particle count used when nothing else is configured.
/// Four channels of this many `f32`s is ~3.2 GB.
pub const DEFAULT_PARTICLE_COUNT: usize = 200_000_000;

/// Worker count used when the available parallelism cannot be queried.
pub const DEFAULT_WORKER_COUNT: usize = 6;

pub const ENV_PARTICLE_COUNT: &str = "PARTICLE_BENCH_COUNT";
pub const ENV_WORKER_COUNT: &str = "PARTICLE_BENCH_WORKERS";
pub const ENV_POPULATE: &str = "PARTICLE_BENCH_POPULATE";
pub const ENV_SEED: &str = "PARTICLE_BENCH_SEED";
