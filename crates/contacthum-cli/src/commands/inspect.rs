//! Inspect command implementation
//!
//! Synthesizes in memory and reports statistics and a spectrogram summary
//! without writing any file.

use anyhow::Result;
use colored::Colorize;
use contacthum_backend_audio::{render, Normalization, SynthesisStats};
use contacthum_backend_plot::Spectrogram;
use contacthum_spec::{
    canonical_params_hash, validate_params, GenerationError, ValidationWarning,
};
use std::path::Path;
use std::process::ExitCode;

use super::failure::CommandFailure;
use super::json_output::{
    validation_warning_to_json, InspectOutput, InspectResult, SpectrogramSummary,
};
use super::reporting;
use crate::input::{resolve_params, ParamOverrides, ResolvedParams};

/// What `inspect` learned about one parameter set.
#[derive(Debug)]
pub struct InspectOutcome {
    pub resolved: ResolvedParams,
    pub params_hash: String,
    pub warnings: Vec<ValidationWarning>,
    pub stats: SynthesisStats,
    pub normalization: Normalization,
    pub pcm_hash: String,
    pub spectrogram: SpectrogramSummary,
}

/// Run the inspect command
///
/// # Returns
/// Exit code: 0 on success, 1 on any failure
pub fn run(params_path: Option<&str>, preset: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let outcome = execute(params_path, preset);

    if json_output {
        let output = match outcome {
            Ok(outcome) => {
                let warnings = outcome
                    .warnings
                    .iter()
                    .map(validation_warning_to_json)
                    .collect();
                let result = InspectResult {
                    params: outcome.resolved.params,
                    params_hash: outcome.params_hash,
                    pcm_hash: outcome.pcm_hash,
                    stats: outcome.stats.into(),
                    normalization: outcome.normalization.into(),
                    spectrogram: outcome.spectrogram,
                };
                InspectOutput::success(result, warnings)
            }
            Err(failure) => InspectOutput::failure(failure.json_errors(), failure.json_warnings()),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(if output.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(failure) => {
            failure.print_human();
            return Ok(ExitCode::from(1));
        }
    };

    println!(
        "{} {}",
        "Inspecting:".cyan().bold(),
        outcome.resolved.describe()
    );
    reporting::print_params(&outcome.resolved.params);
    println!(
        "{} {}",
        "PCM hash:".dimmed(),
        reporting::short_hash(&outcome.pcm_hash)
    );
    reporting::print_stats(&outcome.stats, &outcome.normalization);
    reporting::print_spectrogram(&outcome.spectrogram);

    Ok(ExitCode::SUCCESS)
}

/// Synthesize the resolved parameters and summarize the result.
pub fn execute(
    params_path: Option<&str>,
    preset: Option<&str>,
) -> Result<InspectOutcome, CommandFailure> {
    let resolved = resolve_params(
        preset,
        params_path.map(Path::new),
        &ParamOverrides::default(),
    )
    .map_err(|error| CommandFailure::Input {
        error,
        file: params_path.map(str::to_string),
    })?;
    let params = resolved.params;

    let validation = validate_params(&params);
    if !validation.is_ok() {
        return Err(CommandFailure::Invalid(validation));
    }

    let rendered =
        render(&params).map_err(|e| CommandFailure::Generation(GenerationError::from_backend(e)))?;
    let output = &rendered.output;

    let spectrogram = Spectrogram::compute_default(&output.audio, output.sample_rate)
        .map_err(|e| CommandFailure::Generation(GenerationError::from_backend(e)))?
        .display_band();

    Ok(InspectOutcome {
        params_hash: canonical_params_hash(&params).unwrap_or_else(|_| "unknown".to_string()),
        warnings: validation.warnings,
        stats: output.stats(),
        normalization: output.normalization,
        pcm_hash: rendered.wav.pcm_hash.clone(),
        spectrogram: SpectrogramSummary::from(&spectrogram),
        resolved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::render::{self, RenderArgs};

    #[test]
    fn test_inspect_matches_render() {
        let tmp = tempfile::tempdir().unwrap();
        let params = tmp.path().join("p.json");
        std::fs::write(&params, r#"{"duration_seconds": 0.5}"#).unwrap();
        let params = params.display().to_string();

        let inspected = execute(Some(&params), Some("heavy-crackle")).unwrap();
        let rendered = render::execute(&RenderArgs {
            params: Some(params.clone()),
            preset: Some("heavy-crackle".to_string()),
            out: tmp.path().join("x.wav").display().to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(inspected.pcm_hash, rendered.pcm_hash);
        assert_eq!(inspected.params_hash, rendered.params_hash);
        assert_eq!(inspected.resolved.params.gate_threshold, 0.3);
        assert_eq!(inspected.stats.num_samples, 22050);
    }

    #[test]
    fn test_spectrogram_summary_of_default_preset() {
        let outcome = execute(None, Some("default")).unwrap();
        let n = outcome.stats.num_samples;
        assert_eq!(outcome.spectrogram.frames, 1 + (n - 1024) / 512);
        // 44100 / 1024 Hz per bin, up to 2 kHz
        assert_eq!(outcome.spectrogram.bins, 47);
        assert!(outcome.spectrogram.db_min.is_some());
        assert!(outcome.spectrogram.db_min <= outcome.spectrogram.db_max);
    }

    #[test]
    fn test_inspect_unknown_preset() {
        let failure = execute(None, Some("static")).unwrap_err();
        assert!(matches!(failure, CommandFailure::Input { .. }));
        assert_eq!(failure.json_errors()[0].code, "CLI_004");
    }
}
