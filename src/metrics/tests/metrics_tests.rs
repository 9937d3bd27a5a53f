use super::*;
use crate::core::Vec2;
use crate::domain::PileConfig;

fn empty_core() -> PileCore {
    PileCore::new(PileConfig {
        width: 280.0,
        height: 140.0,
        radius_base: 10.0,
        radius_var: 0.0,
        plane_base_target: vec![50],
        plane_size_scale: vec![1.0],
        plane_spawn_weight: vec![1.0],
        plane_gravity_scale: vec![1.0],
        plane_mouse_influence: vec![1.0],
        ..PileConfig::default()
    })
    .unwrap()
}

#[test]
fn percentile_uses_floor_rank() {
    assert_eq!(percentile(&[], 0.95), 0.0);
    assert_eq!(percentile(&[3.0], 0.95), 3.0);
    let values: Vec<f64> = (0..21).map(f64::from).collect();
    // floor(0.95 * 20) = 19
    assert_eq!(percentile(&values, 0.95), 19.0);
    assert_eq!(percentile(&values, 0.0), 0.0);
    assert_eq!(percentile(&values, 1.0), 20.0);
}

#[test]
fn jostling_groups_speeds_by_region() {
    let mut core = empty_core();
    let store = core.store_mut();
    store.push(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0), 5.0, 0);
    store.push(Vec2::new(30.0, 10.0), Vec2::new(27.0, 6.0), 5.0, 0);
    store.push(Vec2::new(50.0, 10.0), Vec2::new(50.0, 9.0), 5.0, 0);
    store.region[0] = Region::Interior;
    store.region[1] = Region::Interior;
    store.region[2] = Region::Boundary;

    let j = jostling_metrics(&core);
    assert_eq!((j.interior_count, j.boundary_count, j.air_count), (2, 1, 0));
    // speeds 0 and 5 -> rms sqrt(25 / 2)
    assert!((j.interior_rms - (12.5f64).sqrt()).abs() < 1e-12);
    assert_eq!(j.interior_p95, 0.0);
    assert!((j.boundary_rms - 1.0).abs() < 1e-12);
    assert_eq!(j.air_rms, 0.0);
}

#[test]
fn compression_prefers_cells_inside_the_pile() {
    let mut core = empty_core();
    let fluid = core.fluid_mut();
    let (cols, rows) = fluid.dimensions();
    assert_eq!((cols, rows), (10, 5));
    let threshold = fluid.threshold();
    for k in 0..cols * rows {
        fluid.occupancy[k] = threshold;
        fluid.mask[k] = 1;
        fluid.boundary[k] = 1;
    }
    fluid.boundary[12] = 0;
    fluid.occupancy[12] = threshold * 3.0;

    let c = compression_metrics(&core, DEFAULT_MAX_SAMPLES);
    assert_eq!(c.sampled_cell_count, 1);
    assert!((c.max_compression - 3.0).abs() < 1e-12);
}

#[test]
fn compression_falls_back_to_all_active_cells_and_caps_samples() {
    let mut core = empty_core();
    let fluid = core.fluid_mut();
    let threshold = fluid.threshold();
    for k in 0..6 {
        fluid.occupancy[k] = threshold * (k + 1) as f64;
        fluid.mask[k] = 1;
        fluid.boundary[k] = 1;
    }

    let c = compression_metrics(&core, DEFAULT_MAX_SAMPLES);
    assert_eq!(c.sampled_cell_count, 6);
    assert!((c.mean_compression - 3.5).abs() < 1e-12);
    assert!((c.max_compression - 6.0).abs() < 1e-12);
    assert!((c.p95_compression - 5.0).abs() < 1e-12);

    let capped = compression_metrics(&core, 4);
    assert_eq!(capped.sampled_cell_count, 4);
    assert!((capped.max_compression - 4.0).abs() < 1e-12);
}

#[test]
fn empty_pile_summarizes_to_zeros() {
    let core = empty_core();
    let summary = summarize(&core, DEFAULT_MAX_SAMPLES);
    assert_eq!(summary.compression, CompressionMetrics::default());
    assert_eq!(summary.jostling, JostlingMetrics::default());
    assert_eq!(summary.sleep, SleepState::default());

    let json = serde_json::to_value(&summary).unwrap();
    assert!(json["compression"]["sampledCellCount"].is_number());
    assert!(json["sleep"]["interiorSleepingCount"].is_number());
    assert!(json["jostling"]["interiorRms"].is_number());
}
