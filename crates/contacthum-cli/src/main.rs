//! contacthum CLI - Command-line interface for intermittent-contact hum rendering
//!
//! This binary provides commands for rendering, validating and inspecting
//! contact-hum parameter sets.

use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;

use contacthum_cli::commands;
use contacthum_cli::commands::render::RenderArgs;
use contacthum_cli::input::ParamOverrides;

/// contacthum - Intermittent Electrical Contact Hum Synthesizer
#[derive(Parser)]
#[command(name = "contacthum")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Individual parameter flags; each overrides the preset and params file.
#[derive(Args, Debug)]
struct OverrideFlags {
    /// Duration in seconds
    #[arg(long, allow_hyphen_values = true)]
    duration: Option<f64>,

    /// Sample rate in Hz
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Gate threshold (0.0 to 1.0)
    #[arg(long, allow_hyphen_values = true)]
    threshold: Option<f64>,

    /// Smoothing window in samples
    #[arg(long, allow_hyphen_values = true)]
    smoothing: Option<f64>,

    /// Spark gain
    #[arg(long, allow_hyphen_values = true)]
    spark_gain: Option<f64>,

    /// Hum gain
    #[arg(long, allow_hyphen_values = true)]
    hum_gain: Option<f64>,
}

impl From<OverrideFlags> for ParamOverrides {
    fn from(flags: OverrideFlags) -> Self {
        ParamOverrides {
            duration_seconds: flags.duration,
            sample_rate: flags.sample_rate,
            gate_threshold: flags.threshold,
            smoothing_window: flags.smoothing,
            spark_gain: flags.spark_gain,
            hum_gain: flags.hum_gain,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a hum to a WAV file
    Render {
        /// Path to a params JSON file (fields override the preset)
        #[arg(short, long)]
        params: Option<String>,

        /// Preset to start from (see `contacthum presets`)
        #[arg(long)]
        preset: Option<String>,

        #[command(flatten)]
        overrides: OverrideFlags,

        /// Output WAV path
        #[arg(short, long)]
        out: String,

        /// Also write the envelope/spectrogram figure as PNG
        #[arg(long)]
        plot: Option<String>,

        /// Also write the time, envelope and friction series as JSON
        #[arg(long)]
        envelope: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a params file without rendering
    Validate {
        /// Path to the params JSON file
        #[arg(short, long)]
        params: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the built-in presets
    Presets {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Synthesize in memory and print statistics and a spectrogram summary
    Inspect {
        /// Path to a params JSON file (fields override the preset)
        #[arg(short, long)]
        params: Option<String>,

        /// Preset to start from
        #[arg(long)]
        preset: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            params,
            preset,
            overrides,
            out,
            plot,
            envelope,
            json,
        } => {
            let args = RenderArgs {
                params,
                preset,
                overrides: overrides.into(),
                out,
                plot,
                envelope,
            };
            commands::render::run(&args, json)
        }
        Commands::Validate { params, json } => commands::validate::run(&params, json),
        Commands::Presets { json } => commands::presets::run(json),
        Commands::Inspect {
            params,
            preset,
            json,
        } => commands::inspect::run(params.as_deref(), preset.as_deref(), json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
