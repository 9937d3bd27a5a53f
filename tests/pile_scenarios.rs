//! Long-running pile scenarios: fill, settle, disturb and recover

mod common;

use common::{scenario, scenario_with, sweep};
use pile_engine::metrics::{compression_metrics, jostling_metrics};

#[test]
fn fill_reaches_target() {
    let mut core = scenario();
    core.run_steps(2600);
    let state = core.state();
    assert_eq!(state.target_count, 690);
    assert_eq!(state.count, 690);
    assert_eq!(state.plane_population, vec![260, 230, 200]);
    assert_eq!(state.bounds_ratio, 1.0);
}

#[test]
fn settled_pile_is_quiet_and_asleep() {
    let mut core = scenario_with(|c| c.interior_sleep_frames = 10);
    core.run_steps(4200);
    core.run_steps(1200);

    let jostle = jostling_metrics(&core);
    assert!(jostle.interior_count > 100, "interior {}", jostle.interior_count);
    assert!(jostle.interior_rms <= 0.04, "rms {}", jostle.interior_rms);
    assert!(jostle.interior_p95 <= 0.08, "p95 {}", jostle.interior_p95);

    let sleep = core.sleep_state();
    assert!(sleep.interior_sleep_ratio() >= 0.9, "{sleep:?}");
}

#[test]
fn settled_pile_compression_is_bounded() {
    let mut core = scenario_with(|c| c.interior_sleep_frames = 10);
    core.run_steps(5400);

    let compression = compression_metrics(&core, 8000);
    assert!(compression.sampled_cell_count >= 8, "{compression:?}");
    assert!(compression.max_compression < 46.0, "{compression:?}");
    assert!(compression.p95_compression < 36.0, "{compression:?}");
    assert!(compression.mean_compression <= compression.p95_compression);
}

#[test]
fn pointer_sweep_disturbs_then_pile_recovers() {
    let mut core = scenario();
    core.run_steps(5300);
    let before = core.sleep_state();

    sweep(&mut core);
    let during = core.sleep_state();
    assert!(
        during.sleeping_count < before.sleeping_count,
        "before {} during {}",
        before.sleeping_count,
        during.sleeping_count
    );
    assert!(!core.pointer().active);

    core.run_steps(900);
    let jostle = jostling_metrics(&core);
    assert!(jostle.interior_rms <= 0.04, "rms {}", jostle.interior_rms);
    let after = core.sleep_state();
    assert!(after.interior_sleep_ratio() >= 0.85, "{after:?}");
    assert_eq!(core.state().count, 690);
}
