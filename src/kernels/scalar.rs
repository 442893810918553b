use crate::kernels::UpdateKernel;
use crate::particles::ParticleSliceMut;

/// One particle per step, in increasing index order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarKernel;

impl UpdateKernel for ScalarKernel {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn lane_width(&self) -> usize {
        1
    }

    fn update(&self, view: ParticleSliceMut<'_>) {
        view.pos_x
            .iter_mut()
            .zip(view.pos_y.iter_mut())
            .zip(view.vel_x.iter())
            .zip(view.vel_y.iter())
            .for_each(|(((px, py), vx), vy)| {
                *px += *vx;
                *py += *vy;
            });
    }
}
