#![allow(dead_code)]

use pile_engine::{PileConfig, PileCore};

/// 900x600 container with three planes and a 690 particle target
pub fn scenario_config() -> PileConfig {
    PileConfig {
        width: 900.0,
        height: 600.0,
        max_particles: 4000,
        plane_base_target: vec![260, 230, 200],
        seed: 1337,
        ..PileConfig::default()
    }
}

pub fn scenario() -> PileCore {
    PileCore::new(scenario_config()).unwrap()
}

pub fn scenario_with(edit: impl FnOnce(&mut PileConfig)) -> PileCore {
    let mut config = scenario_config();
    edit(&mut config);
    PileCore::new(config).unwrap()
}

/// Diagonal pointer sweep through the lower middle of the pile
pub fn sweep(core: &mut PileCore) {
    let cx = core.config().width * 0.5;
    let cy = core.config().height * 0.74;
    for i in 0..120 {
        let i = i as f64;
        core.set_mouse(cx + i * 1.2, cy - i * 0.45, 1.2, -0.45, true);
        core.step();
    }
    core.clear_mouse();
}
