//! Quality checks run over every built-in preset.

use std::collections::HashSet;

use contacthum_backend_audio::{render, Normalization};
use contacthum_spec::{validate_params, PRESETS};

#[test]
fn every_preset_validates_without_warnings() {
    for preset in &PRESETS {
        let result = validate_params(&preset.params);
        assert!(result.is_ok(), "{}: {:?}", preset.name, result.errors);
        assert!(result.warnings.is_empty(), "{}: {:?}", preset.name, result.warnings);
    }
}

#[test]
fn every_preset_renders_a_partially_connected_buffer() {
    for preset in &PRESETS {
        let rendered = render(&preset.params).unwrap();
        let output = &rendered.output;
        let stats = output.stats();

        assert_eq!(stats.num_samples, preset.params.num_samples(), "{}", preset.name);
        assert!(
            matches!(output.normalization, Normalization::Rescaled { .. }),
            "{}",
            preset.name
        );
        // The envelope spans [0, 1] and every threshold lies strictly inside
        assert!(stats.connected_samples > 0, "{} never connects", preset.name);
        assert!(
            stats.connected_samples < stats.num_samples,
            "{} never disconnects",
            preset.name
        );
        assert!(stats.peak <= 1.0, "{}", preset.name);
        assert!(stats.rms > 0.0, "{}", preset.name);
    }
}

#[test]
fn presets_sound_different() {
    let hashes: HashSet<String> = PRESETS
        .iter()
        .map(|p| render(&p.params).unwrap().wav.pcm_hash)
        .collect();
    assert_eq!(hashes.len(), PRESETS.len());
}
