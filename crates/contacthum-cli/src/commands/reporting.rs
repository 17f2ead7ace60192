//! Human-readable reporting shared by the commands.

use colored::Colorize;
use contacthum_backend_audio::{Normalization, SynthesisStats};
use contacthum_spec::{SynthesisParams, ValidationResult};

use super::json_output::SpectrogramSummary;

/// Print validation errors and warnings to the console.
pub(crate) fn print_validation_messages(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.to_string().red(),
                path_info.dimmed(),
                error.message
            );
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            let path_info = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                path_info.dimmed(),
                warning.message
            );
        }
    }
}

/// Print the six parameters, one per line.
pub(crate) fn print_params(params: &SynthesisParams) {
    println!("  {:<18} {} s", "duration".dimmed(), params.duration_seconds);
    println!("  {:<18} {} Hz", "sample rate".dimmed(), params.sample_rate);
    println!("  {:<18} {}", "gate threshold".dimmed(), params.gate_threshold);
    println!(
        "  {:<18} {} (effective {})",
        "smoothing window".dimmed(),
        params.smoothing_window,
        params.effective_window()
    );
    println!("  {:<18} {}", "spark gain".dimmed(), params.spark_gain);
    println!("  {:<18} {}", "hum gain".dimmed(), params.hum_gain);
}

/// Print buffer statistics.
pub(crate) fn print_stats(stats: &SynthesisStats, normalization: &Normalization) {
    println!("\n{}", "Signal:".cyan().bold());
    println!("  {:<18} {}", "samples".dimmed(), stats.num_samples);
    println!(
        "  {:<18} {} ({:.1}%)",
        "connected".dimmed(),
        stats.connected_samples,
        stats.connected_ratio * 100.0
    );
    println!("  {:<18} {:.4}", "peak".dimmed(), stats.peak);
    println!("  {:<18} {:.4}", "rms".dimmed(), stats.rms);
    println!("  {:<18} {}", "clipped".dimmed(), stats.clipped_samples);
    println!("  {:<18} {:.6}", "max friction".dimmed(), stats.max_friction);

    let envelope = match normalization {
        Normalization::Rescaled { min, max } => format!("rescaled from [{:.4}, {:.4}]", min, max),
        Normalization::Degenerate { value } => {
            format!("{} (constant {:.4})", "degenerate".yellow(), value)
        }
        Normalization::Empty => "empty".to_string(),
    };
    println!("  {:<18} {}", "envelope".dimmed(), envelope);
}

/// Print the spectrogram summary.
pub(crate) fn print_spectrogram(summary: &SpectrogramSummary) {
    println!("\n{}", "Spectrogram:".cyan().bold());
    println!("  {:<18} {}", "frames".dimmed(), summary.frames);
    println!("  {:<18} {}", "bins <= 2 kHz".dimmed(), summary.bins);
    match summary.peak_hz {
        Some(peak) => println!("  {:<18} {:.1} Hz", "peak".dimmed(), peak),
        None => println!("  {:<18} {}", "peak".dimmed(), "n/a".dimmed()),
    }
    if let (Some(lo), Some(hi)) = (summary.db_min, summary.db_max) {
        println!("  {:<18} {:.1} .. {:.1} dB", "power".dimmed(), lo, hi);
    }
}

/// First 16 hex digits of a hash, for display.
pub(crate) fn short_hash(hash: &str) -> &str {
    hash.get(..16).unwrap_or(hash)
}
