use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) spawn_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collide_ms: f64,
    pub(super) sleep_ms: f64,
    pub(super) fluid_ms: f64,
    pub(super) particle_count: u32,
    pub(super) awake_count: u32,
    pub(super) sleeping_count: u32,
    pub(super) spawned: u32,
    pub(super) pair_tests: u32,
    pub(super) contact_wakes: u32,
    pub(super) pointer_wakes: u32,
    pub(super) region_wakes: u32,
    pub(super) fell_asleep: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn spawn_ms(&self) -> f64 { self.spawn_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collide_ms(&self) -> f64 { self.collide_ms }
    #[wasm_bindgen(getter)]
    pub fn sleep_ms(&self) -> f64 { self.sleep_ms }
    #[wasm_bindgen(getter)]
    pub fn fluid_ms(&self) -> f64 { self.fluid_ms }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn awake_count(&self) -> u32 { self.awake_count }
    #[wasm_bindgen(getter)]
    pub fn sleeping_count(&self) -> u32 { self.sleeping_count }
    #[wasm_bindgen(getter)]
    pub fn spawned(&self) -> u32 { self.spawned }
    #[wasm_bindgen(getter)]
    pub fn pair_tests(&self) -> u32 { self.pair_tests }
    #[wasm_bindgen(getter)]
    pub fn contact_wakes(&self) -> u32 { self.contact_wakes }
    #[wasm_bindgen(getter)]
    pub fn pointer_wakes(&self) -> u32 { self.pointer_wakes }
    #[wasm_bindgen(getter)]
    pub fn region_wakes(&self) -> u32 { self.region_wakes }
    #[wasm_bindgen(getter)]
    pub fn fell_asleep(&self) -> u32 { self.fell_asleep }
}
