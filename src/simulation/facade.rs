use wasm_bindgen::prelude::*;

use crate::domain::PileConfig;
use crate::metrics;

use super::perf_stats::PerfStats;
use super::PileCore;

/// Byte layout of the particle arrays for zero-copy rendering.
/// Positions and radii are f64; plane, region and sleeping are u8.
#[wasm_bindgen]
pub struct RenderLayout {
    count: u32,
    x_ptr: u32,
    y_ptr: u32,
    r_ptr: u32,
    plane_ptr: u32,
    region_ptr: u32,
    sleeping_ptr: u32,
}

#[wasm_bindgen]
impl RenderLayout {
    #[wasm_bindgen(getter)]
    pub fn count(&self) -> u32 { self.count }
    #[wasm_bindgen(getter)]
    pub fn x_ptr(&self) -> u32 { self.x_ptr }
    #[wasm_bindgen(getter)]
    pub fn y_ptr(&self) -> u32 { self.y_ptr }
    #[wasm_bindgen(getter)]
    pub fn r_ptr(&self) -> u32 { self.r_ptr }
    #[wasm_bindgen(getter)]
    pub fn plane_ptr(&self) -> u32 { self.plane_ptr }
    #[wasm_bindgen(getter)]
    pub fn region_ptr(&self) -> u32 { self.region_ptr }
    #[wasm_bindgen(getter)]
    pub fn sleeping_ptr(&self) -> u32 { self.sleeping_ptr }
}

#[wasm_bindgen]
pub struct PileWorld {
    core: PileCore,
}

#[wasm_bindgen]
impl PileWorld {
    /// Default configuration with the given container size and seed
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, seed: u32) -> Result<PileWorld, JsValue> {
        let config = PileConfig { width, height, seed, ..PileConfig::default() };
        let core = PileCore::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    /// JSON overrides (camelCase option names) merged onto the defaults
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<PileWorld, JsValue> {
        match PileCore::from_json(json) {
            Ok(core) => Ok(Self { core }),
            Err(e) => {
                log::warn!("rejected pile config: {e}");
                Err(JsValue::from_str(&e.to_string()))
            }
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 { self.core.config().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.core.config().height }

    #[wasm_bindgen(getter)]
    pub fn count(&self) -> u32 { self.core.count() as u32 }

    #[wasm_bindgen(getter = targetCount)]
    pub fn target_count(&self) -> u32 { self.core.target_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// One tick; `dt` defaults to the configured fixed step
    pub fn step(&mut self, dt: Option<f64>) {
        match dt {
            Some(dt) => self.core.step_dt(dt),
            None => self.core.step(),
        }
    }

    #[wasm_bindgen(js_name = runSteps)]
    pub fn run_steps(&mut self, count: u32, dt: Option<f64>) {
        match dt {
            Some(dt) => self.core.run_steps_dt(count, dt),
            None => self.core.run_steps(count),
        }
    }

    #[wasm_bindgen(js_name = setMouse)]
    pub fn set_mouse(&mut self, x: f64, y: f64, vx: f64, vy: f64, active: bool) {
        self.core.set_mouse(x, y, vx, vy, active);
    }

    #[wasm_bindgen(js_name = clearMouse)]
    pub fn clear_mouse(&mut self) {
        self.core.clear_mouse();
    }

    /// `{count, targetCount, planePopulation, avgY, kinetic, inBounds, boundsRatio}`
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.core.state()).unwrap_or_else(|_| "{}".to_string())
    }

    #[wasm_bindgen(js_name = sleepStateJson)]
    pub fn sleep_state_json(&self) -> String {
        serde_json::to_string(&self.core.sleep_state()).unwrap_or_else(|_| "{}".to_string())
    }

    /// `{jostling, compression, sleep}`
    #[wasm_bindgen(js_name = metricsJson)]
    pub fn metrics_json(&self, max_samples: Option<u32>) -> String {
        let max = max_samples.map_or(metrics::DEFAULT_MAX_SAMPLES, |m| m as usize);
        serde_json::to_string(&metrics::summarize(&self.core, max)).unwrap_or_else(|_| "{}".to_string())
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    /// Arrays are reserved up front for the target count, so the pointers stay
    /// put while `count` grows
    pub fn render_layout(&self) -> RenderLayout {
        let store = self.core.store();
        RenderLayout {
            count: store.len() as u32,
            x_ptr: store.x_ptr() as usize as u32,
            y_ptr: store.y_ptr() as usize as u32,
            r_ptr: store.r_ptr() as usize as u32,
            plane_ptr: store.plane_ptr() as usize as u32,
            region_ptr: store.region_ptr() as usize as u32,
            sleeping_ptr: store.sleeping_ptr() as usize as u32,
        }
    }
}

impl PileWorld {
    /// Native access to the wrapped core
    pub fn core(&self) -> &PileCore {
        &self.core
    }
}
