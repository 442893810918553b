//! Four-lane vectorized kernel.
//!
//! x86_64 uses SSE and aarch64 uses NEON; both are part of the baseline
//! instruction set of their architecture, so no runtime detection is needed.
//! Other targets add fixed four-element arrays, which keeps the lane contract
//! identical everywhere.
use crate::kernels::UpdateKernel;
use crate::particles::ParticleSliceMut;
use crate::utils::LANE_WIDTH;

/// Four particles per step. Ranges must be a multiple of [`LANE_WIDTH`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SimdKernel;

impl UpdateKernel for SimdKernel {
    fn name(&self) -> &'static str {
        "simd"
    }

    fn lane_width(&self) -> usize {
        LANE_WIDTH
    }

    fn update(&self, view: ParticleSliceMut<'_>) {
        debug_assert_eq!(view.len() % LANE_WIDTH, 0);
        // chunks_exact never yields a partial stride, so nothing past the view is touched.
        view.pos_x
            .chunks_exact_mut(LANE_WIDTH)
            .zip(view.pos_y.chunks_exact_mut(LANE_WIDTH))
            .zip(view.vel_x.chunks_exact(LANE_WIDTH))
            .zip(view.vel_y.chunks_exact(LANE_WIDTH))
            .for_each(|(((px, py), vx), vy)| {
                add_lanes(px, vx);
                add_lanes(py, vy);
            });
    }
}

/// `pos[i] += vel[i]` for one stride of exactly four lanes.
#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn add_lanes(pos: &mut [f32], vel: &[f32]) {
    use std::arch::x86_64::*;

    assert!(pos.len() == LANE_WIDTH && vel.len() == LANE_WIDTH);
    // SAFETY: SSE is always available on x86_64, both slices hold four f32s
    // and the unaligned load/store variants have no alignment requirement.
    unsafe {
        let velocities = _mm_loadu_ps(vel.as_ptr());
        let positions = _mm_loadu_ps(pos.as_ptr());
        _mm_storeu_ps(pos.as_mut_ptr(), _mm_add_ps(positions, velocities));
    }
}

/// `pos[i] += vel[i]` for one stride of exactly four lanes.
#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn add_lanes(pos: &mut [f32], vel: &[f32]) {
    use std::arch::aarch64::*;

    assert!(pos.len() == LANE_WIDTH && vel.len() == LANE_WIDTH);
    // SAFETY: NEON is always available on aarch64 and vld1q/vst1q accept unaligned pointers
    // to four f32s, which both slices hold.
    unsafe {
        let velocities = vld1q_f32(vel.as_ptr());
        let positions = vld1q_f32(pos.as_ptr());
        vst1q_f32(pos.as_mut_ptr(), vaddq_f32(positions, velocities));
    }
}

/// `pos[i] += vel[i]` for one stride of exactly four lanes.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn add_lanes(pos: &mut [f32], vel: &[f32]) {
    let mut lanes = [0.0f32; LANE_WIDTH];
    lanes.copy_from_slice(pos);
    for (lane, v) in lanes.iter_mut().zip(vel) {
        *lane += *v;
    }
    pos.copy_from_slice(&lanes);
}
