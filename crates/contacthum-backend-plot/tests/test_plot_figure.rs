//! Figures rendered from real synthesis output.

use contacthum_backend_audio::{synthesize_seeded, SynthesisOutput};
use contacthum_backend_plot::{
    plot_png, render_figure, write_rgb, PlotConfig, PlotInput, PngConfig, Spectrogram,
    TimeOverlay,
};
use contacthum_spec::SynthesisParams;
use pretty_assertions::assert_eq;

fn synthesize(duration: f64) -> (SynthesisOutput, Vec<f64>) {
    let params = SynthesisParams::default().with_duration(duration);
    let output = synthesize_seeded(&params);
    let times = output.time_axis.to_vec();
    (output, times)
}

fn input<'a>(output: &'a SynthesisOutput, times: &'a [f64]) -> PlotInput<'a> {
    PlotInput {
        times,
        envelope: &output.envelope,
        audio: &output.audio,
        gate_threshold: output.gate_threshold,
        sample_rate: output.sample_rate,
    }
}

#[test]
fn test_figure_is_deterministic() {
    let (output, times) = synthesize(0.5);
    let a = plot_png(&input(&output, &times), &PlotConfig::default()).unwrap();
    let b = plot_png(&input(&output, &times), &PlotConfig::default()).unwrap();

    assert_eq!(a.png_hash, b.png_hash);
    assert_eq!(a.png_data, b.png_data);
    assert_eq!((a.width, a.height), (1200, 800));
}

#[test]
fn test_frame_count_matches_buffer() {
    let (output, times) = synthesize(1.0);
    let plot = plot_png(&input(&output, &times), &PlotConfig::default()).unwrap();
    assert_eq!(plot.frames, 1 + (44100 - 1024) / 512);
}

#[test]
fn test_spectrogram_shows_hum_fundamental() {
    // Hum always on, no sparks.
    let params = SynthesisParams::default()
        .with_duration(1.0)
        .with_gate_threshold(-1.0)
        .with_spark_gain(0.0)
        .with_hum_gain(0.5);
    let output = synthesize_seeded(&params);

    let spectrogram = Spectrogram::compute_default(&output.audio, output.sample_rate)
        .unwrap()
        .display_band();
    let peak = spectrogram.peak_frequency().unwrap();
    let resolution = 44100.0 / 1024.0;
    assert!((peak - 60.0).abs() <= resolution, "peak {}", peak);
}

#[test]
fn test_different_threshold_changes_figure() {
    let (output, times) = synthesize(0.5);
    let a = plot_png(&input(&output, &times), &PlotConfig::default()).unwrap();

    let mut moved = input(&output, &times);
    moved.gate_threshold = 0.2;
    let b = plot_png(&moved, &PlotConfig::default()).unwrap();

    assert_ne!(a.png_hash, b.png_hash);
}

#[test]
fn test_empty_buffer_still_renders() {
    let output = synthesize_seeded(&SynthesisParams::default().with_duration(0.0));
    let plot = plot_png(&input(&output, &[]), &PlotConfig::default()).unwrap();
    assert_eq!(plot.frames, 0);
    assert!(!plot.png_data.is_empty());
}

#[test]
fn test_write_to_file() {
    let (output, times) = synthesize(0.25);
    let overlay =
        TimeOverlay::new(&times, &output.envelope, &output.audio, output.gate_threshold).unwrap();
    let spectrogram = Spectrogram::compute_default(&output.audio, output.sample_rate).unwrap();
    let canvas = render_figure(&overlay, &spectrogram, &PlotConfig::default()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("figure.png");
    write_rgb(&canvas, &path, &PngConfig::default()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}
