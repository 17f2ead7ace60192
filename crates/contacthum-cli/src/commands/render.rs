//! Render command implementation
//!
//! Resolves parameters, validates them, synthesizes the buffer and writes
//! the WAV plus the optional plot and envelope export.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use colored::Colorize;
use contacthum_backend_audio::{render, Normalization, SynthesisStats};
use contacthum_backend_plot::{plot_png, PlotConfig, PlotInput};
use contacthum_spec::{
    canonical_params_hash, validate_params, GenerationError, ValidationWarning,
};

use super::failure::CommandFailure;
use super::json_output::{
    validation_warning_to_json, EnvelopeExport, RenderOutput, RenderResult, WrittenFile,
};
use super::reporting;
use crate::input::{resolve_params, ParamOverrides, ResolvedParams};

/// Inputs of one render.
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    /// Params JSON file
    pub params: Option<String>,
    /// Preset name
    pub preset: Option<String>,
    /// Flag overrides
    pub overrides: ParamOverrides,
    /// Output WAV path
    pub out: String,
    /// Optional PNG plot path
    pub plot: Option<String>,
    /// Optional envelope JSON path
    pub envelope: Option<String>,
}

/// Everything a successful render produced.
#[derive(Debug)]
pub struct RenderOutcome {
    pub resolved: ResolvedParams,
    pub params_hash: String,
    pub warnings: Vec<ValidationWarning>,
    pub stats: SynthesisStats,
    pub normalization: Normalization,
    pub pcm_hash: String,
    pub files: Vec<WrittenFile>,
}

/// Run the render command
///
/// # Returns
/// Exit code: 0 on success, 1 on any failure
pub fn run(args: &RenderArgs, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args)
    } else {
        run_human(args)
    }
}

/// Resolve, validate, synthesize and write all requested files.
pub fn execute(args: &RenderArgs) -> Result<RenderOutcome, CommandFailure> {
    let resolved = resolve_params(
        args.preset.as_deref(),
        args.params.as_deref().map(Path::new),
        &args.overrides,
    )
    .map_err(|error| CommandFailure::Input {
        error,
        file: args.params.clone(),
    })?;
    let params = resolved.params;

    let validation = validate_params(&params);
    if !validation.is_ok() {
        return Err(CommandFailure::Invalid(validation));
    }

    let rendered =
        render(&params).map_err(|e| CommandFailure::Generation(GenerationError::from_backend(e)))?;
    let output = &rendered.output;
    let wav = &rendered.wav;

    let mut files = Vec::new();

    write_file(&args.out, &wav.wav_data)?;
    files.push(WrittenFile {
        kind: "wav".to_string(),
        path: args.out.clone(),
        size_bytes: wav.wav_data.len() as u64,
        hash: wav.pcm_hash.clone(),
    });

    if let Some(ref plot_path) = args.plot {
        let times = output.time_axis.to_vec();
        let input = PlotInput {
            times: &times,
            envelope: &output.envelope,
            audio: &output.audio,
            gate_threshold: output.gate_threshold,
            sample_rate: output.sample_rate,
        };
        let plot = plot_png(&input, &PlotConfig::default())
            .map_err(|e| CommandFailure::Generation(GenerationError::from_backend(e)))?;

        write_file(plot_path, &plot.png_data)?;
        files.push(WrittenFile {
            kind: "png".to_string(),
            path: plot_path.clone(),
            size_bytes: plot.png_data.len() as u64,
            hash: plot.png_hash,
        });
    }

    if let Some(ref envelope_path) = args.envelope {
        let export = EnvelopeExport::from_output(output);
        let bytes = serde_json::to_vec(&export).map_err(|e| CommandFailure::Write {
            path: PathBuf::from(envelope_path),
            source: e.into(),
        })?;

        write_file(envelope_path, &bytes)?;
        files.push(WrittenFile {
            kind: "envelope".to_string(),
            path: envelope_path.clone(),
            size_bytes: bytes.len() as u64,
            hash: blake3::hash(&bytes).to_hex().to_string(),
        });
    }

    Ok(RenderOutcome {
        params_hash: canonical_params_hash(&params).unwrap_or_else(|_| "unknown".to_string()),
        warnings: validation.warnings,
        stats: output.stats(),
        normalization: output.normalization,
        pcm_hash: wav.pcm_hash.clone(),
        files,
        resolved,
    })
}

/// Write `data` to `path`, creating parent directories.
fn write_file(path: &str, data: &[u8]) -> Result<(), CommandFailure> {
    let path = PathBuf::from(path);
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, data)
    };
    write().map_err(|source| CommandFailure::Write {
        path: path.clone(),
        source,
    })
}

/// Run render with human-readable (colored) output
fn run_human(args: &RenderArgs) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Rendering:".cyan().bold(), args.out);

    let outcome = match execute(args) {
        Ok(outcome) => outcome,
        Err(failure) => {
            failure.print_human();
            return Ok(ExitCode::from(1));
        }
    };

    println!(
        "{} {}",
        "Params:".dimmed(),
        outcome.resolved.describe()
    );
    println!(
        "{} {}",
        "Params hash:".dimmed(),
        reporting::short_hash(&outcome.params_hash)
    );
    reporting::print_params(&outcome.resolved.params);

    for warning in &outcome.warnings {
        let location = warning
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "!".yellow(),
            warning.code.to_string().yellow(),
            location.dimmed(),
            warning.message
        );
    }

    reporting::print_stats(&outcome.stats, &outcome.normalization);

    println!("\n{}", "Files:".cyan().bold());
    for file in &outcome.files {
        println!(
            "  {} {} ({} bytes, {} {})",
            "+".green(),
            file.path,
            file.size_bytes,
            file.kind.dimmed(),
            reporting::short_hash(&file.hash)
        );
    }

    let params = &outcome.resolved.params;
    println!(
        "\n{} Rendered {} samples ({} s at {} Hz) in {}ms",
        "SUCCESS".green().bold(),
        outcome.stats.num_samples,
        params.duration_seconds,
        params.sample_rate,
        start.elapsed().as_millis()
    );

    Ok(ExitCode::SUCCESS)
}

/// Run render with machine-readable JSON output
fn run_json(args: &RenderArgs) -> Result<ExitCode> {
    let start = Instant::now();

    let output = match execute(args) {
        Ok(outcome) => {
            let warnings = outcome
                .warnings
                .iter()
                .map(validation_warning_to_json)
                .collect();
            let result = RenderResult {
                params: outcome.resolved.params,
                params_hash: outcome.params_hash,
                preset: outcome.resolved.preset.map(str::to_string),
                pcm_hash: outcome.pcm_hash,
                stats: outcome.stats.into(),
                normalization: outcome.normalization.into(),
                files: outcome.files,
                duration_ms: start.elapsed().as_millis() as u64,
            };
            RenderOutput::success(result, warnings)
        }
        Err(failure) => RenderOutput::failure(failure.json_errors(), failure.json_warnings()),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contacthum_backend_audio::wav::compute_pcm_hash;
    use contacthum_spec::ErrorCode;

    fn args_in(dir: &Path) -> RenderArgs {
        RenderArgs {
            overrides: ParamOverrides {
                duration_seconds: Some(0.25),
                ..Default::default()
            },
            out: dir.join("hum.wav").display().to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_writes_wav() {
        let tmp = tempfile::tempdir().unwrap();
        let outcome = execute(&args_in(tmp.path())).unwrap();

        let bytes = std::fs::read(tmp.path().join("hum.wav")).unwrap();
        assert_eq!(bytes.len(), 44 + 11025 * 2);
        assert_eq!(compute_pcm_hash(&bytes), Some(outcome.pcm_hash.clone()));
        assert_eq!(outcome.files.len(), 1);
        assert_eq!(outcome.stats.num_samples, 11025);
    }

    #[test]
    fn test_render_is_deterministic() {
        let tmp = tempfile::tempdir().unwrap();
        let a = execute(&args_in(tmp.path())).unwrap();
        let b = execute(&args_in(tmp.path())).unwrap();
        assert_eq!(a.pcm_hash, b.pcm_hash);
        assert_eq!(a.params_hash, b.params_hash);
    }

    #[test]
    fn test_render_writes_plot_and_envelope_into_new_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let mut args = args_in(tmp.path());
        args.plot = Some(tmp.path().join("figs/plot.png").display().to_string());
        args.envelope = Some(tmp.path().join("data/env.json").display().to_string());

        let outcome = execute(&args).unwrap();
        let kinds: Vec<&str> = outcome.files.iter().map(|f| f.kind.as_str()).collect();
        assert_eq!(kinds, vec!["wav", "png", "envelope"]);

        let png = std::fs::read(tmp.path().join("figs/plot.png")).unwrap();
        assert_eq!(&png[1..4], b"PNG");

        let text = std::fs::read_to_string(tmp.path().join("data/env.json")).unwrap();
        let export: EnvelopeExport = serde_json::from_str(&text).unwrap();
        assert_eq!(export.envelope.len(), 11025);
        assert_eq!(export.time.len(), 11025);
        assert_eq!(export.gate_threshold, 0.6);
    }

    #[test]
    fn test_invalid_params_write_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let mut args = args_in(tmp.path());
        args.overrides.sample_rate = Some(0);

        let failure = execute(&args).unwrap_err();
        assert!(matches!(failure, CommandFailure::Invalid(_)));
        assert!(!tmp.path().join("hum.wav").exists());
    }

    #[test]
    fn test_sample_rate_beyond_wav_limit_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let mut args = args_in(tmp.path());
        args.overrides.duration_seconds = Some(1e-9);
        args.overrides.sample_rate = Some(3_000_000_000);

        match execute(&args) {
            Err(CommandFailure::Invalid(validation)) => {
                assert!(validation.has_error(ErrorCode::SampleRateTooHigh));
            }
            other => panic!("expected invalid params, got {:?}", other.map(|_| ())),
        }
        assert!(!tmp.path().join("hum.wav").exists());
    }

    #[test]
    fn test_unknown_preset() {
        let tmp = tempfile::tempdir().unwrap();
        let mut args = args_in(tmp.path());
        args.preset = Some("loud".to_string());
        assert!(matches!(
            execute(&args),
            Err(CommandFailure::Input { .. })
        ));
    }

    #[test]
    fn test_out_of_range_only_warns() {
        let tmp = tempfile::tempdir().unwrap();
        let mut args = args_in(tmp.path());
        args.overrides.spark_gain = Some(400.0);

        let outcome = execute(&args).unwrap();
        assert!(outcome
            .warnings
            .iter()
            .any(|w| w.path.as_deref() == Some("spark_gain")));
    }

    #[test]
    fn test_run_exit_codes() {
        let code = |args: &RenderArgs| format!("{:?}", run(args, true).unwrap());
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(code(&args_in(tmp.path())), format!("{:?}", ExitCode::SUCCESS));

        let mut bad = args_in(tmp.path());
        bad.overrides.duration_seconds = Some(-1.0);
        assert_eq!(code(&bad), format!("{:?}", ExitCode::FAILURE));
    }
}
