//! Output record types for the CLI commands.

use contacthum_backend_audio::{Normalization, SynthesisOutput, SynthesisStats};
use contacthum_backend_plot::Spectrogram;
use contacthum_spec::SynthesisParams;
use serde::{Deserialize, Serialize};

use super::{JsonError, JsonWarning};

/// Summary statistics of a synthesized buffer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsRecord {
    pub num_samples: usize,
    pub connected_samples: usize,
    pub connected_ratio: f64,
    pub peak: f64,
    pub rms: f64,
    pub clipped_samples: usize,
    pub max_friction: f64,
}

impl From<SynthesisStats> for StatsRecord {
    fn from(stats: SynthesisStats) -> Self {
        Self {
            num_samples: stats.num_samples,
            connected_samples: stats.connected_samples,
            connected_ratio: stats.connected_ratio,
            peak: stats.peak,
            rms: stats.rms,
            clipped_samples: stats.clipped_samples,
            max_friction: stats.max_friction,
        }
    }
}

/// How the contact envelope was normalized.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizationRecord {
    Rescaled { min: f64, max: f64 },
    Degenerate { value: f64 },
    Empty,
}

impl From<Normalization> for NormalizationRecord {
    fn from(n: Normalization) -> Self {
        match n {
            Normalization::Rescaled { min, max } => Self::Rescaled { min, max },
            Normalization::Degenerate { value } => Self::Degenerate { value },
            Normalization::Empty => Self::Empty,
        }
    }
}

/// A file written by a command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WrittenFile {
    /// What the file holds ("wav", "png", "envelope")
    pub kind: String,
    /// Path as given on the command line
    pub path: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// BLAKE3 hash of the content (PCM payload only for WAV)
    pub hash: String,
}

/// Time series written by `render --envelope`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnvelopeExport {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Gate threshold
    pub gate_threshold: f64,
    /// Envelope normalization
    pub normalization: NormalizationRecord,
    /// Sample instants in seconds
    pub time: Vec<f64>,
    /// Contact envelope
    pub envelope: Vec<f64>,
    /// Friction signal
    pub friction: Vec<f64>,
}

impl EnvelopeExport {
    /// Copies the series out of a synthesis output.
    pub fn from_output(output: &SynthesisOutput) -> Self {
        Self {
            sample_rate: output.sample_rate,
            gate_threshold: output.gate_threshold,
            normalization: output.normalization.into(),
            time: output.time_axis.to_vec(),
            envelope: output.envelope.clone(),
            friction: output.friction.clone(),
        }
    }
}

/// JSON output for the `render` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOutput {
    /// Whether rendering succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Render details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RenderResult>,
}

/// Render result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// Final parameters
    pub params: SynthesisParams,
    /// Canonical parameter hash
    pub params_hash: String,
    /// Preset the parameters started from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
    /// Buffer statistics
    pub stats: StatsRecord,
    /// Envelope normalization
    pub normalization: NormalizationRecord,
    /// Files written
    pub files: Vec<WrittenFile>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl RenderOutput {
    /// Creates a successful render output.
    pub fn success(result: RenderResult, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    /// Creates a failed render output.
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
        }
    }
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether validation succeeded (no errors)
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Validation result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ValidateResult>,
    /// BLAKE3 hash of the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// Validation result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResult {
    /// Parameters as loaded (defaults filled in)
    pub params: SynthesisParams,
    /// Canonical parameter hash
    pub params_hash: String,
    /// Number of samples the parameters produce
    pub num_samples: usize,
    /// Moving-average window after coercion
    pub effective_window: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl ValidateOutput {
    /// Creates a successful validate output.
    pub fn success(result: ValidateResult, source_hash: String, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
            source_hash: Some(source_hash),
        }
    }

    /// Creates a failed validate output.
    pub fn failure(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
            source_hash,
        }
    }
}

/// One entry of the `presets` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetEntry {
    pub name: String,
    pub description: String,
    pub params: SynthesisParams,
    pub params_hash: String,
}

/// JSON output for the `presets` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetsOutput {
    pub success: bool,
    pub presets: Vec<PresetEntry>,
}

/// Spectrogram summary over the displayed band.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpectrogramSummary {
    /// Number of frames
    pub frames: usize,
    /// Number of bins at or below the display limit
    pub bins: usize,
    /// Frequency with the highest mean power, skipping DC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_hz: Option<f64>,
    /// Smallest power in dB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_min: Option<f64>,
    /// Largest power in dB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_max: Option<f64>,
}

impl From<&Spectrogram> for SpectrogramSummary {
    fn from(band: &Spectrogram) -> Self {
        let range = band.db_range();
        Self {
            frames: band.num_frames(),
            bins: band.num_bins(),
            peak_hz: band.peak_frequency(),
            db_min: range.map(|(lo, _)| lo),
            db_max: range.map(|(_, hi)| hi),
        }
    }
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOutput {
    /// Whether inspection succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Inspection details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
}

/// Inspection details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectResult {
    /// Final parameters
    pub params: SynthesisParams,
    /// Canonical parameter hash
    pub params_hash: String,
    /// BLAKE3 hash of the PCM payload the parameters would render
    pub pcm_hash: String,
    /// Buffer statistics
    pub stats: StatsRecord,
    /// Envelope normalization
    pub normalization: NormalizationRecord,
    /// Spectrogram of the displayed band
    pub spectrogram: SpectrogramSummary,
}

impl InspectOutput {
    /// Creates a successful inspect output.
    pub fn success(result: InspectResult, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    /// Creates a failed inspect output.
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_record_is_tagged() {
        let json = serde_json::to_string(&NormalizationRecord::Rescaled { min: 0.25, max: 0.75 })
            .unwrap();
        assert_eq!(json, r#"{"kind":"rescaled","min":0.25,"max":0.75}"#);

        let json = serde_json::to_string(&NormalizationRecord::Empty).unwrap();
        assert_eq!(json, r#"{"kind":"empty"}"#);
    }

    #[test]
    fn test_failure_omits_result() {
        let output = RenderOutput::failure(vec![JsonError::new("CLI_001", "gone")], vec![]);
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(!json.contains("\"result\""));
    }
}
