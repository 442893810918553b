pub mod utils;
pub mod particles;
pub mod kernels;
pub mod dispatch;
pub mod runner;

pub use runner::{Strategy, UpdateBench};
pub use utils::{BenchConfig, BenchError};

#[cfg(test)]
mod runner_tests;
