//! Presets command implementation

use anyhow::Result;
use colored::Colorize;
use contacthum_spec::{canonical_params_hash, PRESETS};
use std::process::ExitCode;

use super::json_output::{PresetEntry, PresetsOutput};

/// Run the presets command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let entries = preset_entries()?;

    if json_output {
        let output = PresetsOutput {
            success: true,
            presets: entries,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Presets:".cyan().bold());
    for entry in &entries {
        let p = &entry.params;
        println!("  {:<16} {}", entry.name.green(), entry.description);
        println!(
            "  {:<16} threshold {}, window {}, spark {}, hum {}",
            "",
            p.gate_threshold,
            p.smoothing_window,
            p.spark_gain,
            p.hum_gain
        );
    }
    println!(
        "\n{} presets; render one with `contacthum render --preset <name> --out <file>`",
        entries.len()
    );

    Ok(ExitCode::SUCCESS)
}

/// All presets with their canonical hashes, in display order.
pub fn preset_entries() -> Result<Vec<PresetEntry>> {
    PRESETS
        .iter()
        .map(|preset| {
            Ok(PresetEntry {
                name: preset.name.to_string(),
                description: preset.description.to_string(),
                params: preset.params,
                params_hash: canonical_params_hash(&preset.params)?,
            })
        })
        .collect()
}
