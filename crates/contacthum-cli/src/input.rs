//! Parameter input: params files, presets and flag overrides.
//!
//! Parameters are resolved in order of increasing precedence:
//!
//! 1. the named preset (or the built-in defaults),
//! 2. the fields present in a params JSON file,
//! 3. individual command-line flags.
//!
//! A params file may be partial; missing fields keep the value from the
//! layer below.

use std::path::{Path, PathBuf};

use contacthum_spec::{find_preset, SynthesisParams};

/// Recognized params file extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Errors that can occur while loading parameters.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown file extension.
    UnknownExtension { extension: Option<String> },

    /// JSON parsing failed.
    JsonParse { message: String },

    /// No preset with this name.
    UnknownPreset { name: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::UnknownExtension { extension } => match extension {
                Some(ext) => write!(f, "unknown file extension '.{}' (expected .json)", ext),
                None => write!(f, "file has no extension (expected .json)"),
            },
            InputError::JsonParse { message } => {
                write!(f, "JSON parse error: {}", message)
            }
            InputError::UnknownPreset { name } => {
                write!(
                    f,
                    "unknown preset '{}' (run `contacthum presets` to list them)",
                    name
                )
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result of loading a params file.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// The parameters, with defaults for missing fields.
    pub params: SynthesisParams,
    /// BLAKE3 hash of the file content (hex string).
    pub source_hash: String,
}

/// Load a complete parameter set from a params file.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use contacthum_cli::input::load_params;
///
/// let result = load_params(Path::new("params.json")).unwrap();
/// println!("{} samples", result.params.num_samples());
/// ```
pub fn load_params(path: &Path) -> Result<LoadResult, InputError> {
    read_params_over(path, &SynthesisParams::default())
}

/// Load a params file, taking missing fields from `base`.
fn read_params_over(path: &Path, base: &SynthesisParams) -> Result<LoadResult, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());
    match extension.as_deref() {
        Some(ext) if JSON_EXTENSIONS.contains(&ext) => {}
        _ => return Err(InputError::UnknownExtension { extension }),
    }

    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();
    let params = merge_params_json(base, &content)?;

    Ok(LoadResult {
        params,
        source_hash,
    })
}

/// Overlays the fields of a JSON object onto `base`.
pub fn merge_params_json(base: &SynthesisParams, json: &str) -> Result<SynthesisParams, InputError> {
    let parse_error = |e: &dyn std::fmt::Display| InputError::JsonParse {
        message: e.to_string(),
    };

    let overlay: serde_json::Value = serde_json::from_str(json).map_err(|e| parse_error(&e))?;
    let serde_json::Value::Object(fields) = overlay else {
        return Err(InputError::JsonParse {
            message: "expected a JSON object of parameters".to_string(),
        });
    };

    let mut merged = match base.to_value().map_err(|e| parse_error(&e))? {
        serde_json::Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    merged.extend(fields);

    serde_json::from_value(serde_json::Value::Object(merged)).map_err(|e| parse_error(&e))
}

/// Individual parameter values given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParamOverrides {
    pub duration_seconds: Option<f64>,
    pub sample_rate: Option<u32>,
    pub gate_threshold: Option<f64>,
    pub smoothing_window: Option<f64>,
    pub spark_gain: Option<f64>,
    pub hum_gain: Option<f64>,
}

impl ParamOverrides {
    /// Number of values set.
    pub fn count(&self) -> usize {
        [
            self.duration_seconds.is_some(),
            self.sample_rate.is_some(),
            self.gate_threshold.is_some(),
            self.smoothing_window.is_some(),
            self.spark_gain.is_some(),
            self.hum_gain.is_some(),
        ]
        .iter()
        .filter(|&&set| set)
        .count()
    }

    /// Returns true if no value is set.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Replaces every field of `params` that has an override.
    pub fn apply(&self, params: SynthesisParams) -> SynthesisParams {
        SynthesisParams {
            duration_seconds: self.duration_seconds.unwrap_or(params.duration_seconds),
            sample_rate: self.sample_rate.unwrap_or(params.sample_rate),
            gate_threshold: self.gate_threshold.unwrap_or(params.gate_threshold),
            smoothing_window: self.smoothing_window.unwrap_or(params.smoothing_window),
            spark_gain: self.spark_gain.unwrap_or(params.spark_gain),
            hum_gain: self.hum_gain.unwrap_or(params.hum_gain),
        }
    }
}

/// Parameters after all layers are applied, with their provenance.
#[derive(Debug, Clone)]
pub struct ResolvedParams {
    /// Final parameters.
    pub params: SynthesisParams,
    /// Preset the parameters started from, if any.
    pub preset: Option<&'static str>,
    /// Params file that was applied, if any.
    pub params_file: Option<PathBuf>,
    /// BLAKE3 hash of the params file content.
    pub source_hash: Option<String>,
    /// Number of command-line overrides applied.
    pub overrides: usize,
}

impl ResolvedParams {
    /// Short description of where the parameters came from.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        match self.preset {
            Some(name) => parts.push(format!("preset '{}'", name)),
            None => parts.push("defaults".to_string()),
        }
        if let Some(ref path) = self.params_file {
            parts.push(path.display().to_string());
        }
        if self.overrides > 0 {
            parts.push(format!("{} override(s)", self.overrides));
        }
        parts.join(" + ")
    }
}

/// Resolve parameters from a preset, a params file and flag overrides.
pub fn resolve_params(
    preset: Option<&str>,
    params_path: Option<&Path>,
    overrides: &ParamOverrides,
) -> Result<ResolvedParams, InputError> {
    let (base, preset_name) = match preset {
        Some(name) => {
            let preset = find_preset(name).map_err(|_| InputError::UnknownPreset {
                name: name.to_string(),
            })?;
            (preset.params, Some(preset.name))
        }
        None => (SynthesisParams::default(), None),
    };

    let (params, source_hash) = match params_path {
        Some(path) => {
            let loaded = read_params_over(path, &base)?;
            (loaded.params, Some(loaded.source_hash))
        }
        None => (base, None),
    };

    Ok(ResolvedParams {
        params: overrides.apply(params),
        preset: preset_name,
        params_file: params_path.map(Path::to_path_buf),
        source_hash,
        overrides: overrides.count(),
    })
}
