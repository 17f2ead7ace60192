//! The synthesis parameter set.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::ranges::{self, REFERENCE_SAMPLE_RATE};

/// The six scalars that fully determine a synthesis run.
///
/// Values outside the documented control ranges are accepted; the
/// synthesizer coerces the smoothing window and otherwise uses the values
/// as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthesisParams {
    /// Buffer duration in seconds.
    #[serde(default = "default_duration")]
    pub duration_seconds: f64,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Envelope level above which the contact counts as connected.
    #[serde(default = "default_gate_threshold")]
    pub gate_threshold: f64,
    /// Moving-average window in samples (floored, minimum 1).
    #[serde(default = "default_smoothing_window")]
    pub smoothing_window: f64,
    /// Gain applied to friction-driven spark transients.
    #[serde(default = "default_spark_gain")]
    pub spark_gain: f64,
    /// Gain of the mains hum carrier.
    #[serde(default = "default_hum_gain")]
    pub hum_gain: f64,
}

fn default_duration() -> f64 {
    ranges::DURATION.default
}

fn default_sample_rate() -> u32 {
    REFERENCE_SAMPLE_RATE
}

fn default_gate_threshold() -> f64 {
    ranges::GATE_THRESHOLD.default
}

fn default_smoothing_window() -> f64 {
    ranges::SMOOTHING_WINDOW.default
}

fn default_spark_gain() -> f64 {
    ranges::SPARK_GAIN.default
}

fn default_hum_gain() -> f64 {
    ranges::HUM_GAIN.default
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            duration_seconds: default_duration(),
            sample_rate: default_sample_rate(),
            gate_threshold: default_gate_threshold(),
            smoothing_window: default_smoothing_window(),
            spark_gain: default_spark_gain(),
            hum_gain: default_hum_gain(),
        }
    }
}

impl SynthesisParams {
    /// Creates a parameter set from all six values.
    pub fn new(
        duration_seconds: f64,
        sample_rate: u32,
        gate_threshold: f64,
        smoothing_window: f64,
        spark_gain: f64,
        hum_gain: f64,
    ) -> Self {
        Self {
            duration_seconds,
            sample_rate,
            gate_threshold,
            smoothing_window,
            spark_gain,
            hum_gain,
        }
    }

    /// Parses parameters from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes parameters to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, SpecError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serializes parameters to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of samples in the buffer: `floor(duration * sample_rate)`.
    ///
    /// Negative or non-finite products give zero.
    pub fn num_samples(&self) -> usize {
        let product = self.duration_seconds * self.sample_rate as f64;
        if product.is_finite() && product >= 1.0 {
            product.floor() as usize
        } else {
            0
        }
    }

    /// Effective moving-average window: `max(1, floor(smoothing_window))`.
    pub fn effective_window(&self) -> usize {
        let floored = self.smoothing_window.floor();
        if floored.is_finite() && floored >= 1.0 {
            floored as usize
        } else {
            1
        }
    }

    /// Returns a copy with a different duration.
    pub fn with_duration(mut self, duration_seconds: f64) -> Self {
        self.duration_seconds = duration_seconds;
        self
    }

    /// Returns a copy with a different sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Returns a copy with a different gate threshold.
    pub fn with_gate_threshold(mut self, gate_threshold: f64) -> Self {
        self.gate_threshold = gate_threshold;
        self
    }

    /// Returns a copy with a different smoothing window.
    pub fn with_smoothing_window(mut self, smoothing_window: f64) -> Self {
        self.smoothing_window = smoothing_window;
        self
    }

    /// Returns a copy with a different spark gain.
    pub fn with_spark_gain(mut self, spark_gain: f64) -> Self {
        self.spark_gain = spark_gain;
        self
    }

    /// Returns a copy with a different hum gain.
    pub fn with_hum_gain(mut self, hum_gain: f64) -> Self {
        self.hum_gain = hum_gain;
        self
    }
}
