#![cfg(target_arch = "wasm32")]

use pile_engine::PileWorld;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn pile_world_runs_in_wasm() {
    pile_engine::init();
    let mut world = PileWorld::new(400.0, 300.0, 2).unwrap();
    world.enable_perf_metrics(true);
    world.run_steps(60, None);
    assert!(world.count() > 0);
    assert!(world.get_perf_stats().step_ms() >= 0.0);
}

#[wasm_bindgen_test]
fn bad_config_is_a_js_error() {
    assert!(PileWorld::from_json("{\"collisionPasses\": 0}").is_err());
}
