//! Validate command implementation
//!
//! Loads a params file and checks it without synthesizing anything.

use anyhow::{Context, Result};
use colored::Colorize;
use contacthum_spec::{canonical_params_hash, validate_params};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{
    input_error_to_json, validation_error_to_json, validation_warning_to_json, ValidateOutput,
    ValidateResult,
};
use super::reporting;
use crate::input::{load_params, LoadResult};

/// Run the validate command
///
/// # Arguments
/// * `params_path` - Path to the params JSON file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(params_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(params_path)
    } else {
        run_human(params_path)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(params_path: &str) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Validating:".cyan().bold(), params_path);

    let LoadResult {
        params,
        source_hash,
    } = load_params(Path::new(params_path))
        .with_context(|| format!("Failed to load params file: {}", params_path))?;

    println!(
        "{} {}",
        "Source:".dimmed(),
        reporting::short_hash(&source_hash)
    );
    reporting::print_params(&params);

    let result = validate_params(&params);
    reporting::print_validation_messages(&result);

    let duration_ms = start.elapsed().as_millis();
    if result.is_ok() {
        println!(
            "\n{} Parameters are valid ({} samples, {}ms)",
            "SUCCESS".green().bold(),
            params.num_samples(),
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Parameters have {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(params_path: &str) -> Result<ExitCode> {
    let output = validate_json(params_path);
    println!("{}", serde_json::to_string_pretty(&output)?);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Builds the JSON record for one params file.
fn validate_json(params_path: &str) -> ValidateOutput {
    let start = Instant::now();

    let LoadResult {
        params,
        source_hash,
    } = match load_params(Path::new(params_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            return ValidateOutput::failure(
                vec![input_error_to_json(&e, Some(params_path))],
                vec![],
                None,
            );
        }
    };

    let result = validate_params(&params);
    let warnings = result
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();

    if !result.is_ok() {
        let errors = result.errors.iter().map(validation_error_to_json).collect();
        return ValidateOutput::failure(errors, warnings, Some(source_hash));
    }

    let details = ValidateResult {
        params,
        params_hash: canonical_params_hash(&params).unwrap_or_else(|_| "unknown".to_string()),
        num_samples: params.num_samples(),
        effective_window: params.effective_window(),
        duration_ms: start.elapsed().as_millis() as u64,
    };
    ValidateOutput::success(details, source_hash, warnings)
}
