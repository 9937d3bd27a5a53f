//! Pile Engine - deterministic 2D particle pile simulation in WASM
//!
//! Architecture:
//! - core/       - RNG and vector math
//! - domain/     - Config, validation errors, region labels
//! - spatial/    - SoA particle store and broad-phase hash
//! - systems/    - Per-step stages (spawn, integrate, collide, sleep, fluid)
//! - simulation/ - Orchestration and the wasm facade
//! - metrics/    - Read-only jostling / compression / sleep summaries

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;
pub mod metrics;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&format!("Pile engine {} initialized", version()).into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{ConfigError, PileConfig, Region};
pub use metrics::MetricsSummary;
pub use simulation::{PerfStats, PileCore, PileState, PileWorld};
pub use systems::SleepState;
