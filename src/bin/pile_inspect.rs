//! pile-inspect - run a pile headless and print its metrics as JSON
//!
//! Usage: `pile-inspect [steps] [config.json]`. Set `RUST_LOG=debug` for
//! engine lifecycle logs.

use std::fs;

use anyhow::{Context, Result};
use pile_engine::metrics;
use pile_engine::{PileConfig, PileCore};
use serde_json::json;

const DEFAULT_STEPS: u32 = 2400;
const COMPRESSION_SAMPLES: usize = 6000;

fn default_config() -> PileConfig {
    PileConfig {
        width: 900.0,
        height: 600.0,
        seed: 42,
        ..PileConfig::default()
    }
}

fn parse_steps(arg: Option<&str>) -> Result<u32> {
    match arg {
        None => Ok(DEFAULT_STEPS),
        Some(s) => s.parse().with_context(|| format!("step count must be a non-negative integer, got {s:?}")),
    }
}

fn load_config(path: Option<&str>) -> Result<PileConfig> {
    let Some(path) = path else {
        return Ok(default_config());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    PileConfig::from_json(&text).with_context(|| format!("parsing {path}"))
}

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let steps = parse_steps(args.first().map(String::as_str))?;
    let config = load_config(args.get(1).map(String::as_str))?;

    let mut core = PileCore::new(config).context("building pile")?;
    log::info!("running {steps} steps");
    core.run_steps(steps);

    let report = json!({
        "frame": core.frame(),
        "state": core.state(),
        "sleep": core.sleep_state(),
        "jostling": metrics::jostling_metrics(&core),
        "compression": metrics::compression_metrics(&core, COMPRESSION_SAMPLES),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
