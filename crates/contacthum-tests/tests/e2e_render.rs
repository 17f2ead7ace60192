//! End-to-end tests for the render command.
//!
//! Each test renders into a temporary directory and checks the written
//! files against an in-memory synthesis of the same parameters.

use contacthum_backend_audio::synthesize_seeded;
use contacthum_backend_audio::wav::{compute_pcm_hash, extract_pcm_data, pcm16_to_samples};
use contacthum_cli::commands::json_output::EnvelopeExport;
use contacthum_cli::commands::render::{execute, RenderArgs};
use contacthum_tests::fixtures::{
    raw_noise_scenario, render_args, short_params, silent_scenario, write_params_file,
};
use contacthum_tests::{validate_png, validate_wav, verify_determinism};
use pretty_assertions::assert_eq;

#[test]
fn wav_matches_in_memory_synthesis() {
    let tmp = tempfile::tempdir().unwrap();
    let params = raw_noise_scenario();

    let outcome = execute(&render_args(tmp.path(), &params)).unwrap();
    let bytes = std::fs::read(tmp.path().join("out.wav")).unwrap();

    let info = validate_wav(&bytes).unwrap();
    assert_eq!(info.sample_rate, 100);
    assert_eq!(info.channels, 1);
    assert_eq!(info.bits_per_sample, 16);
    assert_eq!(info.num_samples, 100);
    assert_eq!(compute_pcm_hash(&bytes), Some(outcome.pcm_hash));

    let expected = synthesize_seeded(&params).audio;
    let decoded = pcm16_to_samples(extract_pcm_data(&bytes).unwrap());
    assert_eq!(decoded.len(), expected.len());
    for (d, e) in decoded.iter().zip(&expected) {
        assert!((d - e).abs() <= 1.0 / 32767.0, "{} vs {}", d, e);
    }
}

#[test]
fn silent_scenario_writes_zero_pcm() {
    let tmp = tempfile::tempdir().unwrap();
    execute(&render_args(tmp.path(), &silent_scenario())).unwrap();

    let bytes = std::fs::read(tmp.path().join("out.wav")).unwrap();
    let info = validate_wav(&bytes).unwrap();
    assert_eq!(info.num_samples, 88200);
    assert!(extract_pcm_data(&bytes).unwrap().iter().all(|&b| b == 0));
}

#[test]
fn plot_and_envelope_exports() {
    let tmp = tempfile::tempdir().unwrap();
    let params = short_params();
    let mut args = render_args(tmp.path(), &params);
    args.plot = Some(tmp.path().join("plot.png").display().to_string());
    args.envelope = Some(tmp.path().join("envelope.json").display().to_string());

    execute(&args).unwrap();

    let png = std::fs::read(tmp.path().join("plot.png")).unwrap();
    let info = validate_png(&png).unwrap();
    assert_eq!((info.width, info.height), (1200, 800));
    assert_eq!(info.color_type, 2);
    assert_eq!(info.bit_depth, 8);

    let text = std::fs::read_to_string(tmp.path().join("envelope.json")).unwrap();
    let export: EnvelopeExport = serde_json::from_str(&text).unwrap();
    let expected = synthesize_seeded(&params);
    assert_eq!(export.sample_rate, 44100);
    assert_eq!(export.envelope.len(), expected.envelope.len());
    for (got, want) in export.envelope.iter().zip(&expected.envelope) {
        assert!((got - want).abs() < 1e-12);
    }
    assert!((export.time[1] - 1.0 / 44100.0).abs() < 1e-15);
}

#[test]
fn params_file_overrides_preset_and_flags_override_file() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("partial.json");
    std::fs::write(&file, r#"{"gate_threshold": 0.9, "duration_seconds": 0.1}"#).unwrap();

    let mut args = RenderArgs {
        params: Some(file.display().to_string()),
        preset: Some("heavy-crackle".to_string()),
        out: tmp.path().join("x.wav").display().to_string(),
        ..Default::default()
    };
    args.overrides.hum_gain = Some(0.1);

    let outcome = execute(&args).unwrap();
    let params = outcome.resolved.params;
    assert_eq!(params.gate_threshold, 0.9);
    assert_eq!(params.duration_seconds, 0.1);
    assert_eq!(params.spark_gain, 150.0);
    assert_eq!(params.smoothing_window, 100.0);
    assert_eq!(params.hum_gain, 0.1);
    assert_eq!(outcome.resolved.preset, Some("heavy-crackle"));
    assert_eq!(outcome.resolved.overrides, 1);
}

#[test]
fn full_params_file_renders_like_overrides() {
    let tmp = tempfile::tempdir().unwrap();
    let params = short_params().with_gate_threshold(0.45);
    let file = write_params_file(tmp.path(), "full.json", &params);

    let from_file = execute(&RenderArgs {
        params: Some(file.display().to_string()),
        out: tmp.path().join("a.wav").display().to_string(),
        ..Default::default()
    })
    .unwrap();
    let from_flags = execute(&render_args(tmp.path(), &params)).unwrap();

    assert_eq!(from_file.pcm_hash, from_flags.pcm_hash);
    assert_eq!(from_file.params_hash, from_flags.params_hash);
}

#[test]
fn render_is_byte_identical_across_runs() {
    let tmp = tempfile::tempdir().unwrap();
    let mut args = render_args(tmp.path(), &short_params());
    args.plot = Some(tmp.path().join("p.png").display().to_string());

    let wav = verify_determinism(
        || {
            execute(&args).unwrap();
            std::fs::read(tmp.path().join("out.wav")).unwrap()
        },
        3,
    );
    wav.assert_deterministic();

    let png = verify_determinism(|| std::fs::read(tmp.path().join("p.png")).unwrap(), 2);
    png.assert_deterministic();
    assert_eq!(wav.output_size, 44 + 11025 * 2);
}
