mod particle_store;

pub use particle_store::*;
