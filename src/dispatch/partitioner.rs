//! Splits `[0, N)` into one contiguous range per worker.
//!
//! With `base = N / W` and `remainder = N % W`, worker 0 takes
//! `base + remainder` particles starting at 0 and worker `k >= 1` takes `base`
//! particles starting at `k * base + remainder`. Concentrating the remainder on
//! one worker keeps the start formula branch-free; since `N` is far larger than
//! `W` the imbalance is negligible.
//!
//! A granularity `g` makes every partition a multiple of `g`: the formula is
//! applied to `N / g` units and scaled back up.
//!
//! ```
//! use soa_update_bench::dispatch::Partitioner;
//!
//! let layout: Vec<(usize, usize)> = Partitioner::new(6)
//!     .unwrap()
//!     .partitions(23)
//!     .unwrap()
//!     .iter()
//!     .map(|p| (p.start, p.len))
//!     .collect();
//! assert_eq!(layout, vec![(0, 8), (8, 3), (11, 3), (14, 3), (17, 3), (20, 3)]);
//! ```
use log::warn;
use std::ops::Range;
use crate::utils::BenchError;

/// One worker's contiguous slice of the particle indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Position of the worker this partition belongs to.
    pub worker: usize,
    pub start: usize,
    pub len: usize,
}

impl Partition {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partitioner {
    workers: usize,
    granularity: usize,
}

impl Partitioner {
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `workers` is zero.
    pub fn new(workers: usize) -> Result<Self, BenchError> {
        if workers == 0 {
            return Err(BenchError::InvalidConfig("worker count must be positive".to_string()));
        }
        Ok(Self { workers, granularity: 1 })
    }

    /// Forces every partition length to be a multiple of `granularity`.
    pub fn with_granularity(self, granularity: usize) -> Result<Self, BenchError> {
        if granularity == 0 {
            return Err(BenchError::InvalidConfig("granularity must be positive".to_string()));
        }
        Ok(Self { granularity, ..self })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn granularity(&self) -> usize {
        self.granularity
    }

    /// Computes the partitions tiling `[0, total)`.
    ///
    /// An empty total yields no partitions. When there are more workers than
    /// units, the trailing partitions are empty.
    ///
    /// # Errors
    ///
    /// Returns `MisalignedPartition` if `total` is not a multiple of the granularity.
    pub fn partitions(&self, total: usize) -> Result<Vec<Partition>, BenchError> {
        if total % self.granularity != 0 {
            return Err(BenchError::MisalignedPartition {
                length: total,
                lane_width: self.granularity,
            });
        }
        if total == 0 {
            return Ok(Vec::new());
        }

        let units = total / self.granularity;
        let base = units / self.workers;
        let remainder = units % self.workers;
        if base == 0 {
            warn!(
                "{} workers for {} units of {}: {} partitions will be empty",
                self.workers,
                units,
                self.granularity,
                self.workers - 1
            );
        }

        let g = self.granularity;
        let partitions = (0..self.workers)
            .map(|worker| {
                let (start, len) = if worker == 0 {
                    (0, base + remainder)
                } else {
                    (worker * base + remainder, base)
                };
                Partition { worker, start: start * g, len: len * g }
            })
            .collect();
        Ok(partitions)
    }
}
