//! PileConfig - resolved simulation parameters
//!
//! Hosts pass a JSON object of overrides (camelCase keys); anything omitted
//! takes the documented default below. The value is validated once and never
//! mutated by the engine afterwards.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Plane ids are stored as u8
pub const MAX_PLANES: usize = u8::MAX as usize + 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PileConfig {
    // === Container ===
    pub width: f64,
    pub height: f64,
    pub max_particles: usize,
    pub fixed_dt: f64,

    // === Dynamics ===
    pub gravity: f64,
    pub velocity_damping: f64,
    pub restitution: f64,
    pub floor_friction: f64,
    pub collision_passes: usize,
    pub contact_slop: f64,
    pub position_correction: f64,
    pub contact_tangent_damp: f64,

    // === Spawning ===
    pub spawn_rate_min: f64,
    pub spawn_rate_max: f64,
    pub radius_base: f64,
    pub radius_var: f64,
    pub seed: u32,

    // === Planes (planeBaseTarget length is the plane count) ===
    pub plane_size_scale: Vec<f64>,
    pub plane_spawn_weight: Vec<f64>,
    pub plane_gravity_scale: Vec<f64>,
    pub plane_mouse_influence: Vec<f64>,
    pub plane_base_target: Vec<usize>,

    // === Pointer ===
    pub mouse_radius: f64,
    /// Outer push ring, as a multiple of `mouse_radius`
    pub mouse_wake_radius_mul: f64,
    pub mouse_push: f64,
    /// Sleepers within `mouse_radius * wake_cursor_radius_mul` wake, pushed or not
    pub wake_cursor_radius_mul: f64,

    // === Sleep / wake ===
    pub interior_sleep_frames: u32,
    pub interior_sleep_speed: f64,
    pub floor_sleep_vx: f64,
    pub floor_sleep_vy: f64,
    pub surface_sleep_speed_mul: f64,
    pub wake_impulse: f64,
    /// Overlap over radius sum that wakes a sleeper. Below about 0.3 the
    /// ordinary overlap of a loaded pile keeps re-waking it and the interior
    /// never stays asleep.
    pub wake_overlap_ratio: f64,
    pub contact_vel_cutoff: f64,
    pub resting_contact_damp: f64,
    pub contact_reach: f64,
    pub region_update_interval: u64,

    // === Fluid grid ===
    pub fluid_threshold: f64,
    pub fluid_update_interval: u64,
}

impl Default for PileConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 540.0,
            max_particles: 8000,
            fixed_dt: 1.0 / 60.0,

            gravity: 1900.0,
            velocity_damping: 0.996,
            restitution: 0.1,
            floor_friction: 0.92,
            collision_passes: 2,
            contact_slop: 0.09,
            position_correction: 0.22,
            contact_tangent_damp: 0.2,

            spawn_rate_min: 7.0,
            spawn_rate_max: 150.0,
            radius_base: 10.0,
            radius_var: 6.8,
            seed: 12345,

            plane_size_scale: vec![0.46, 0.7, 1.0],
            plane_spawn_weight: vec![0.37, 0.33, 0.3],
            plane_gravity_scale: vec![0.9, 0.96, 1.0],
            plane_mouse_influence: vec![0.8, 0.9, 1.0],
            plane_base_target: vec![1900, 1700, 1500],

            mouse_radius: 130.0,
            mouse_wake_radius_mul: 1.08,
            mouse_push: 135.0,
            wake_cursor_radius_mul: 1.85,

            interior_sleep_frames: 16,
            interior_sleep_speed: 0.02,
            floor_sleep_vx: 0.28,
            floor_sleep_vy: 0.55,
            surface_sleep_speed_mul: 1.5,
            wake_impulse: 0.9,
            wake_overlap_ratio: 0.35,
            contact_vel_cutoff: 0.03,
            resting_contact_damp: 0.8,
            contact_reach: 1.08,
            region_update_interval: 2,

            fluid_threshold: 0.58,
            fluid_update_interval: 1,
        }
    }
}

impl PileConfig {
    /// Parse overrides and validate the merged result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PileConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let planes = self.plane_base_target.len();
        if planes == 0 {
            return Err(ConfigError::NoPlanes);
        }
        if planes > MAX_PLANES {
            return Err(ConfigError::TooManyPlanes { max: MAX_PLANES, actual: planes });
        }

        let per_plane: [(&'static str, usize); 4] = [
            ("planeSizeScale", self.plane_size_scale.len()),
            ("planeSpawnWeight", self.plane_spawn_weight.len()),
            ("planeGravityScale", self.plane_gravity_scale.len()),
            ("planeMouseInfluence", self.plane_mouse_influence.len()),
        ];
        for (field, actual) in per_plane {
            if actual != planes {
                return Err(ConfigError::PlaneArrayLength { field, expected: planes, actual });
            }
        }

        let positive: [(&'static str, f64); 7] = [
            ("width", self.width),
            ("height", self.height),
            ("fixedDt", self.fixed_dt),
            ("radiusBase", self.radius_base),
            ("mouseRadius", self.mouse_radius),
            ("mouseWakeRadiusMul", self.mouse_wake_radius_mul),
            ("wakeCursorRadiusMul", self.wake_cursor_radius_mul),
        ];
        for (field, value) in positive {
            // NaN fails this too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field });
            }
        }
        if self.plane_size_scale.iter().any(|s| !(*s > 0.0)) {
            return Err(ConfigError::NonPositive { field: "planeSizeScale" });
        }
        if !(self.radius_var >= 0.0) {
            return Err(ConfigError::NegativeRadiusVar);
        }

        if self.collision_passes == 0 {
            return Err(ConfigError::ZeroCount { field: "collisionPasses" });
        }
        if self.interior_sleep_frames == 0 {
            return Err(ConfigError::ZeroCount { field: "interiorSleepFrames" });
        }
        if self.region_update_interval == 0 {
            return Err(ConfigError::ZeroCount { field: "regionUpdateInterval" });
        }
        if self.fluid_update_interval == 0 {
            return Err(ConfigError::ZeroCount { field: "fluidUpdateInterval" });
        }
        Ok(())
    }

    // === Derived values ===

    #[inline]
    pub fn plane_count(&self) -> usize {
        self.plane_base_target.len()
    }

    /// min(sum of plane targets, maxParticles)
    pub fn target_count(&self) -> usize {
        let sum: usize = self.plane_base_target.iter().sum();
        sum.min(self.max_particles)
    }

    /// Largest radius a particle can spawn with on `plane`
    #[inline]
    pub fn max_radius(&self, plane: usize) -> f64 {
        (self.radius_base + self.radius_var) * self.plane_size_scale[plane]
    }

    /// Broad-phase cell edge
    pub fn hash_cell_size(&self) -> f64 {
        ((self.radius_base + self.radius_var) * 1.3).floor().max(20.0)
    }

    /// Fluid grid cell edge, about 1.4 mean particle diameters
    pub fn fluid_cell_size(&self) -> f64 {
        let mean_scale =
            self.plane_size_scale.iter().sum::<f64>() / self.plane_size_scale.len().max(1) as f64;
        let avg_radius = (self.radius_base + self.radius_var * 0.5) * mean_scale;
        (avg_radius * 2.8).floor().clamp(20.0, 64.0)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
