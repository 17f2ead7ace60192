//! Shared parameter sets and file helpers for the integration tests.

use std::path::{Path, PathBuf};

use contacthum_cli::commands::render::RenderArgs;
use contacthum_cli::input::ParamOverrides;
use contacthum_spec::SynthesisParams;

/// 100 samples at 100 Hz, window 1, no sparks, full hum.
pub fn raw_noise_scenario() -> SynthesisParams {
    SynthesisParams::new(1.0, 100, 0.6, 1.0, 0.0, 1.0)
}

/// Two seconds at 44.1 kHz with both gains at zero.
pub fn silent_scenario() -> SynthesisParams {
    SynthesisParams::default()
        .with_duration(2.0)
        .with_spark_gain(0.0)
        .with_hum_gain(0.0)
}

/// A short default render, fast enough for repeated runs.
pub fn short_params() -> SynthesisParams {
    SynthesisParams::default().with_duration(0.25)
}

/// Writes `params` as a JSON file named `name` in `dir`.
pub fn write_params_file(dir: &Path, name: &str, params: &SynthesisParams) -> PathBuf {
    let path = dir.join(name);
    let json = params
        .to_json_pretty()
        .unwrap_or_else(|e| panic!("params serialize: {}", e));
    std::fs::write(&path, json).unwrap_or_else(|e| panic!("write {}: {}", path.display(), e));
    path
}

/// Render arguments that take every value from `params` and write into `dir`.
pub fn render_args(dir: &Path, params: &SynthesisParams) -> RenderArgs {
    RenderArgs {
        overrides: ParamOverrides {
            duration_seconds: Some(params.duration_seconds),
            sample_rate: Some(params.sample_rate),
            gate_threshold: Some(params.gate_threshold),
            smoothing_window: Some(params.smoothing_window),
            spark_gain: Some(params.spark_gain),
            hum_gain: Some(params.hum_gain),
        },
        out: dir.join("out.wav").display().to_string(),
        ..Default::default()
    }
}
