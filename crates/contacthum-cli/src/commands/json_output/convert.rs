//! Conversion helpers for transforming errors and warnings to JSON format.

use contacthum_spec::{GenerationError, ValidationError, ValidationWarning};

use super::{error_codes, JsonError, JsonWarning};
use crate::input::InputError;

/// Converts an InputError to a JsonError.
pub fn input_error_to_json(err: &InputError, file: Option<&str>) -> JsonError {
    let code = match err {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::UnknownExtension { .. } => error_codes::UNKNOWN_EXTENSION,
        InputError::JsonParse { .. } => error_codes::JSON_PARSE,
        InputError::UnknownPreset { .. } => error_codes::UNKNOWN_PRESET,
    };

    let mut error = JsonError::new(code, err.to_string());
    if let InputError::UnknownPreset { .. } = err {
        error = error.with_suggestion("run `contacthum presets` to list available presets");
    }
    if let Some(f) = file {
        error = error.with_file(f);
    }
    error
}

/// Converts a ValidationError to a JsonError.
pub fn validation_error_to_json(err: &ValidationError) -> JsonError {
    let mut error = JsonError::new(err.code.to_string(), &err.message);
    if let Some(ref path) = err.path {
        error = error.with_path(path);
    }
    error
}

/// Converts a ValidationWarning to a JsonWarning.
pub fn validation_warning_to_json(warn: &ValidationWarning) -> JsonWarning {
    let mut warning = JsonWarning::new(warn.code.to_string(), &warn.message);
    if let Some(ref path) = warn.path {
        warning = warning.with_path(path);
    }
    warning
}

/// Converts a backend GenerationError to a JsonError.
///
/// The backend code (e.g. `AUDIO_003`) is kept in the message.
pub fn generation_error_to_json(err: &GenerationError) -> JsonError {
    let code = match err.category {
        "plot" => error_codes::PLOT_ERROR,
        _ => error_codes::GENERATION_ERROR,
    };
    JsonError::new(code, err.to_string())
}
