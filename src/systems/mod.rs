//! Systems - per-step stages operating on the particle store
//!
//! Order inside a step: spawner -> integrator -> collision -> sleep -> fluid.

pub mod collision;
pub mod fluid;
pub mod integrator;
pub mod sleep;
pub mod spawner;

pub use collision::CollisionStats;
pub use fluid::FluidGrid;
pub use integrator::Pointer;
pub use sleep::SleepState;
pub use spawner::Spawner;
