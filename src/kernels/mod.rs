//! Position-by-velocity update kernels.
//!
//! Both kernels perform exactly one IEEE-754 single-precision addition per
//! element and axis, so for any index they produce bit-identical results.
//! They differ only in how many elements one instruction covers.
mod scalar;
mod simd;

pub use scalar::*;
pub use simd::*;

use crate::particles::{ParticleSliceMut, ParticleStore};
use crate::utils::BenchError;
use std::ops::Range;

/// A way of advancing `pos += vel` over a contiguous run of particles.
///
/// Implementors must be shareable across worker threads and must touch
/// nothing outside the view they are given.
pub trait UpdateKernel: Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Number of elements one step of the kernel covers. Every range handed
    /// to [`UpdateKernel::update`] must be a multiple of it.
    fn lane_width(&self) -> usize;

    /// Verifies that `len` particles can be processed by this kernel.
    fn check(&self, len: usize) -> Result<(), BenchError> {
        let lane_width = self.lane_width();
        if len % lane_width != 0 {
            return Err(BenchError::MisalignedPartition { length: len, lane_width });
        }
        Ok(())
    }

    /// Advances every particle of `view` by its velocity.
    ///
    /// Callers must have passed `view.len()` through [`UpdateKernel::check`];
    /// [`UpdateKernel::apply`] does both.
    fn update(&self, view: ParticleSliceMut<'_>);

    fn apply(&self, view: ParticleSliceMut<'_>) -> Result<(), BenchError> {
        self.check(view.len())?;
        self.update(view);
        Ok(())
    }

    /// Applies the kernel to `range` of `store`.
    fn apply_range(&self, store: &mut ParticleStore, range: Range<usize>) -> Result<(), BenchError> {
        self.apply(store.slice_mut(range)?)
    }
}
