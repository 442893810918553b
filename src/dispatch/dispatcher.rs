//! Runs a kernel over the whole store on a fixed pool of worker threads.
//!
//! The store is cut into one disjoint mutable view per partition with
//! `split_at_mut`, so no two workers can ever reach the same index; the borrow
//! checker enforces what the partitioner promises. The pool's scope joins every
//! task before `dispatch` returns.
use log::{debug, trace};
use rayon::{ThreadPool, ThreadPoolBuilder};
use crate::dispatch::{Partition, Partitioner};
use crate::kernels::UpdateKernel;
use crate::particles::{ParticleSliceMut, ParticleStore};
use crate::utils::BenchError;

pub struct Dispatcher {
    pool: ThreadPool,
    workers: usize,
}

impl Dispatcher {
    /// Starts a pool of `workers` threads.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if `workers` is zero.
    /// - `WorkerStartFailure` if the threads cannot be spawned.
    pub fn new(workers: usize) -> Result<Self, BenchError> {
        let builder = ThreadPoolBuilder::new()
            .thread_name(|i| format!("particle-worker-{}", i));
        Self::with_builder(workers, builder)
    }

    /// Starts `workers` threads from a caller-tuned builder. Its thread count is overridden.
    pub fn with_builder(workers: usize, builder: ThreadPoolBuilder) -> Result<Self, BenchError> {
        if workers == 0 {
            return Err(BenchError::InvalidConfig("worker count must be positive".to_string()));
        }
        let pool = builder
            .num_threads(workers)
            .build()
            .map_err(|e| BenchError::WorkerStartFailure(e.to_string()))?;
        debug!("Started worker pool with {} threads", workers);
        Ok(Self { pool, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Applies `kernel` to every particle of `store`, one task per partition.
    ///
    /// Every partition is validated against the kernel before any task starts,
    /// so a failed dispatch leaves the store untouched.
    pub fn dispatch<K>(&self, store: &mut ParticleStore, kernel: &K) -> Result<(), BenchError>
    where
        K: UpdateKernel + ?Sized,
    {
        let partitions = Partitioner::new(self.workers)?
            .with_granularity(kernel.lane_width())?
            .partitions(store.len())?;
        if partitions.is_empty() {
            return Ok(());
        }
        debug!(
            "Dispatching {} kernel over {} particles: {:?}",
            kernel.name(),
            store.len(),
            partitions.iter().map(|p| (p.start, p.len)).collect::<Vec<_>>()
        );

        let views = split_views(store.view_mut(), &partitions)?;
        // Every view is validated before the first task starts.
        for view in &views {
            kernel.check(view.len())?;
        }

        self.pool.scope(|scope| {
            for (view, partition) in views.into_iter().zip(&partitions) {
                scope.spawn(move |_| {
                    trace!("Worker {} updating {:?}", partition.worker, partition.range());
                    kernel.update(view);
                });
            }
        });
        Ok(())
    }
}

/// Cuts `view` into one view per partition. Partitions must be contiguous and in order.
pub(crate) fn split_views<'a>(
    view: ParticleSliceMut<'a>,
    partitions: &[Partition],
) -> Result<Vec<ParticleSliceMut<'a>>, BenchError> {
    let mut views = Vec::with_capacity(partitions.len());
    let mut rest = view;
    for partition in partitions {
        if partition.start != rest.offset() {
            return Err(BenchError::InvalidConfig(format!(
                "partition {} starts at {} but the previous one ended at {}",
                partition.worker,
                partition.start,
                rest.offset()
            )));
        }
        let (head, tail) = rest.split_at(partition.len)?;
        views.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        return Err(BenchError::InvalidConfig(format!(
            "partitions leave {:?} uncovered",
            rest.range()
        )));
    }
    Ok(views)
}
