//! Failures shared by the commands that synthesize audio.

use std::path::PathBuf;

use colored::Colorize;
use contacthum_spec::{GenerationError, ValidationResult};

use super::json_output::{
    error_codes, generation_error_to_json, input_error_to_json, validation_error_to_json,
    validation_warning_to_json, JsonError, JsonWarning,
};
use super::reporting;
use crate::input::InputError;

/// Why a command stopped before producing its result.
#[derive(Debug)]
pub enum CommandFailure {
    /// Parameters could not be loaded.
    Input {
        error: InputError,
        file: Option<String>,
    },
    /// Parameters loaded but failed validation.
    Invalid(ValidationResult),
    /// A backend refused or failed.
    Generation(GenerationError),
    /// An output file could not be written.
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CommandFailure {
    /// Errors as JSON records.
    pub fn json_errors(&self) -> Vec<JsonError> {
        match self {
            CommandFailure::Input { error, file } => {
                vec![input_error_to_json(error, file.as_deref())]
            }
            CommandFailure::Invalid(result) => {
                result.errors.iter().map(validation_error_to_json).collect()
            }
            CommandFailure::Generation(err) => vec![generation_error_to_json(err)],
            CommandFailure::Write { path, source } => vec![JsonError::new(
                error_codes::FILE_WRITE,
                format!("failed to write '{}': {}", path.display(), source),
            )
            .with_file(path.display().to_string())],
        }
    }

    /// Validation warnings gathered before the failure.
    pub fn json_warnings(&self) -> Vec<JsonWarning> {
        match self {
            CommandFailure::Invalid(result) => result
                .warnings
                .iter()
                .map(validation_warning_to_json)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Prints the failure with colored output.
    pub fn print_human(&self) {
        match self {
            CommandFailure::Invalid(result) => {
                reporting::print_validation_messages(result);
                println!(
                    "\n{} Parameters have {} error(s)",
                    "FAILED".red().bold(),
                    result.errors.len()
                );
            }
            other => {
                for error in other.json_errors() {
                    println!("  {} [{}]: {}", "x".red(), error.code.red(), error.message);
                    if let Some(suggestion) = error.suggestion {
                        println!("    {} {}", "hint:".dimmed(), suggestion);
                    }
                }
                println!("\n{}", "FAILED".red().bold());
            }
        }
    }
}

impl std::fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandFailure::Input { error, .. } => write!(f, "{}", error),
            CommandFailure::Invalid(result) => {
                write!(f, "parameter validation failed with {} error(s)", result.errors.len())
            }
            CommandFailure::Generation(err) => write!(f, "{}", err),
            CommandFailure::Write { path, source } => {
                write!(f, "failed to write '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for CommandFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandFailure::Input { error, .. } => Some(error),
            CommandFailure::Generation(err) => Some(err),
            CommandFailure::Write { source, .. } => Some(source),
            CommandFailure::Invalid(_) => None,
        }
    }
}
