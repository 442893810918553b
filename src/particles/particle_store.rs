//! Structure-of-arrays storage for 2D particles.
//!
//! A particle has no object of its own: it is an index shared by the four
//! channels `pos_x`, `pos_y`, `vel_x` and `vel_y`. Keeping one axis of one
//! attribute contiguous across particles is what lets the vectorized kernel
//! load four neighbours with a single instruction.
//!
//! # Example
//!
//! ```
//! use soa_update_bench::particles::{Channel, ParticleStore};
//!
//! let mut store = ParticleStore::zeroed(8);
//! store.set(Channel::VelX, 3, 2.5).unwrap();
//! assert_eq!(store.get(Channel::VelX, 3), Ok(2.5));
//! assert!(store.get(Channel::PosY, 8).is_err());
//! ```
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use std::ops::Range;
use crate::utils::BenchError;

/// One of the four parallel sequences of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    PosX,
    PosY,
    VelX,
    VelY,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::PosX, Channel::PosY, Channel::VelX, Channel::VelY];
}

/// Owns the four channels of `len` particles. The length never changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleStore {
    pos_x: Vec<f32>,
    pos_y: Vec<f32>,
    vel_x: Vec<f32>,
    vel_y: Vec<f32>,
}

impl ParticleStore {
    /// Creates `len` particles with every channel set to zero.
    pub fn zeroed(len: usize) -> Self {
        Self {
            pos_x: vec![0.0; len],
            pos_y: vec![0.0; len],
            vel_x: vec![0.0; len],
            vel_y: vec![0.0; len],
        }
    }

    /// Builds a store from existing channels.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the four channels differ in length.
    pub fn from_channels(
        pos_x: Vec<f32>,
        pos_y: Vec<f32>,
        vel_x: Vec<f32>,
        vel_y: Vec<f32>,
    ) -> Result<Self, BenchError> {
        let len = pos_x.len();
        if pos_y.len() != len || vel_x.len() != len || vel_y.len() != len {
            return Err(BenchError::InvalidConfig(format!(
                "channel lengths differ: pos_x={}, pos_y={}, vel_x={}, vel_y={}",
                len,
                pos_y.len(),
                vel_x.len(),
                vel_y.len()
            )));
        }
        Ok(Self { pos_x, pos_y, vel_x, vel_y })
    }

    pub fn len(&self) -> usize {
        self.pos_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pos_x.is_empty()
    }

    pub fn channel(&self, channel: Channel) -> &[f32] {
        match channel {
            Channel::PosX => &self.pos_x,
            Channel::PosY => &self.pos_y,
            Channel::VelX => &self.vel_x,
            Channel::VelY => &self.vel_y,
        }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut [f32] {
        match channel {
            Channel::PosX => &mut self.pos_x,
            Channel::PosY => &mut self.pos_y,
            Channel::VelX => &mut self.vel_x,
            Channel::VelY => &mut self.vel_y,
        }
    }

    /// Bounds-checked read of one channel value.
    pub fn get(&self, channel: Channel, index: usize) -> Result<f32, BenchError> {
        let len = self.len();
        self.channel(channel)
            .get(index)
            .copied()
            .ok_or(BenchError::IndexOutOfRange { index, len })
    }

    /// Bounds-checked write of one channel value.
    pub fn set(&mut self, channel: Channel, index: usize, value: f32) -> Result<(), BenchError> {
        let len = self.len();
        let slot = self
            .channel_mut(channel)
            .get_mut(index)
            .ok_or(BenchError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Assigns every element of every channel a value drawn from `rng`.
    pub fn populate<R: Rng>(&mut self, rng: &mut R) {
        for channel in Channel::ALL {
            for value in self.channel_mut(channel).iter_mut() {
                *value = rng.random::<f32>();
            }
        }
    }

    /// [`ParticleStore::populate`] with a reproducible `StdRng`.
    pub fn populate_seeded(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.populate(&mut rng);
    }

    /// Mutable view over the whole store.
    pub fn view_mut(&mut self) -> ParticleSliceMut<'_> {
        ParticleSliceMut {
            offset: 0,
            pos_x: &mut self.pos_x,
            pos_y: &mut self.pos_y,
            vel_x: &self.vel_x,
            vel_y: &self.vel_y,
        }
    }

    /// Mutable view over `range`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the range is inverted or ends past `len()`.
    pub fn slice_mut(&mut self, range: Range<usize>) -> Result<ParticleSliceMut<'_>, BenchError> {
        let len = self.len();
        if range.start > range.end || range.end > len {
            return Err(BenchError::IndexOutOfRange { index: range.end.max(range.start), len });
        }
        Ok(ParticleSliceMut {
            offset: range.start,
            pos_x: &mut self.pos_x[range.clone()],
            pos_y: &mut self.pos_y[range.clone()],
            vel_x: &self.vel_x[range.clone()],
            vel_y: &self.vel_y[range],
        })
    }
}

/// A contiguous run of particles: positions writable, velocities read-only.
///
/// Views are only produced by splitting, so two live views never share an index.
#[derive(Debug)]
pub struct ParticleSliceMut<'a> {
    offset: usize,
    pub pos_x: &'a mut [f32],
    pub pos_y: &'a mut [f32],
    pub vel_x: &'a [f32],
    pub vel_y: &'a [f32],
}

impl<'a> ParticleSliceMut<'a> {
    /// Index of the first particle of this view within the store.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.pos_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pos_x.is_empty()
    }

    /// Store indices covered by this view.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len()
    }

    /// Splits into `[0, mid)` and `[mid, len)` of this view.
    pub fn split_at(self, mid: usize) -> Result<(Self, Self), BenchError> {
        let len = self.len();
        if mid > len {
            return Err(BenchError::IndexOutOfRange {
                index: self.offset + mid,
                len: self.offset + len,
            });
        }
        let ParticleSliceMut { offset, pos_x, pos_y, vel_x, vel_y } = self;
        let (pos_x_head, pos_x_tail) = pos_x.split_at_mut(mid);
        let (pos_y_head, pos_y_tail) = pos_y.split_at_mut(mid);
        let (vel_x_head, vel_x_tail) = vel_x.split_at(mid);
        let (vel_y_head, vel_y_tail) = vel_y.split_at(mid);
        Ok((
            ParticleSliceMut {
                offset,
                pos_x: pos_x_head,
                pos_y: pos_y_head,
                vel_x: vel_x_head,
                vel_y: vel_y_head,
            },
            ParticleSliceMut {
                offset: offset + mid,
                pos_x: pos_x_tail,
                pos_y: pos_y_tail,
                vel_x: vel_x_tail,
                vel_y: vel_y_tail,
            },
        ))
    }
}
