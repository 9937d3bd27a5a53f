//! Spatial - particle storage and broad-phase bucketing

pub mod hash;
pub mod store;

pub use hash::SpatialHash;
pub use store::ParticleStore;
