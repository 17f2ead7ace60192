//! Named parameter presets.
//!
//! Every preset runs at the reference sample rate and the default duration;
//! they differ in how the contact behaves and how loud each component is.

use crate::error::SpecError;
use crate::params::SynthesisParams;
use crate::ranges::{DURATION, REFERENCE_SAMPLE_RATE};

/// A named, complete parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Lookup key (kebab-case).
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// The parameters.
    pub params: SynthesisParams,
}

const fn preset(
    name: &'static str,
    description: &'static str,
    gate_threshold: f64,
    smoothing_window: f64,
    spark_gain: f64,
    hum_gain: f64,
) -> Preset {
    Preset {
        name,
        description,
        params: SynthesisParams {
            duration_seconds: DURATION.default,
            sample_rate: REFERENCE_SAMPLE_RATE,
            gate_threshold,
            smoothing_window,
            spark_gain,
            hum_gain,
        },
    }
}

/// All presets in display order. The first one is the default.
pub const PRESETS: [Preset; 6] = [
    preset(
        "default",
        "Control-deck defaults",
        0.6,
        500.0,
        50.0,
        0.5,
    ),
    preset(
        "classic-hum",
        "Balanced 60Hz drone with subtle crackling",
        0.6,
        500.0,
        30.0,
        0.5,
    ),
    preset(
        "heavy-crackle",
        "Aggressive sparks with prominent electrical noise",
        0.3,
        100.0,
        150.0,
        0.3,
    ),
    preset(
        "ethereal-drone",
        "Smooth, haunting tone with minimal interference",
        0.8,
        1500.0,
        20.0,
        0.7,
    ),
    preset(
        "unstable-signal",
        "Chaotic modulation with heavy sparking",
        0.4,
        200.0,
        120.0,
        0.4,
    ),
    preset(
        "deep-rumble",
        "Low frequency emphasis with organic fluctuation",
        0.55,
        800.0,
        40.0,
        0.8,
    ),
];

/// Looks up a preset by name (case-insensitive).
pub fn find_preset(name: &str) -> Result<&'static Preset, SpecError> {
    PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| SpecError::UnknownPreset(name.to_string()))
}

/// Returns the preset names in display order.
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}
