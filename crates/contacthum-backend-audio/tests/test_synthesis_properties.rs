//! End-to-end properties of the contact-hum synthesizer.

use contacthum_backend_audio::rng::{create_contact_rng, uniform_samples};
use contacthum_backend_audio::synthesis::{count_connected, normalize_min_max, HumCarrier};
use contacthum_backend_audio::{synthesize_seeded, Normalization};
use contacthum_spec::SynthesisParams;
use pretty_assertions::assert_eq;

fn params(
    duration: f64,
    rate: u32,
    threshold: f64,
    window: f64,
    spark: f64,
    hum: f64,
) -> SynthesisParams {
    SynthesisParams::new(duration, rate, threshold, window, spark, hum)
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_scenario_unsmoothed_hum_only() {
    let p = params(1.0, 100, 0.6, 1.0, 0.0, 1.0);
    let out = synthesize_seeded(&p);

    assert_eq!(out.audio.len(), 100);

    // Envelope is the normalized raw noise.
    let mut rng = create_contact_rng();
    let mut expected_env = uniform_samples(&mut rng, 100);
    normalize_min_max(&mut expected_env);
    assert_eq!(out.envelope, expected_env);

    let carrier = HumCarrier::new(1.0);
    for (i, &sample) in out.audio.iter().enumerate() {
        let expected = if out.envelope[i] > 0.6 {
            carrier.sample_at(i as f64 / 100.0).clamp(-1.0, 1.0)
        } else {
            0.0
        };
        assert_eq!(sample, expected, "sample {}", i);
        assert!((-1.0..=1.0).contains(&sample));
    }
}

#[test]
fn test_scenario_all_gains_zero() {
    let p = params(2.0, 44100, 0.6, 500.0, 0.0, 0.0);
    let out = synthesize_seeded(&p);

    assert_eq!(out.audio.len(), 88200);
    assert!(out.audio.iter().all(|&s| s == 0.0));
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn test_all_sequences_share_length() {
    for &(duration, rate) in &[(1.0, 44100), (0.37, 22050), (3.3, 1000), (0.01, 100)] {
        let p = params(duration, rate, 0.5, 64.0, 80.0, 0.7);
        let out = synthesize_seeded(&p);
        let n = (duration * rate as f64).floor() as usize;
        assert_eq!(out.audio.len(), n);
        assert_eq!(out.envelope.len(), n);
        assert_eq!(out.friction.len(), n);
        assert_eq!(out.time_axis.len(), n);
    }
}

#[test]
fn test_audio_and_envelope_bounds() {
    let p = params(1.5, 44100, 0.2, 50.0, 200.0, 1.0);
    let out = synthesize_seeded(&p);

    assert!(out.audio.iter().all(|s| (-1.0..=1.0).contains(s)));
    assert!(out.envelope.iter().all(|e| (0.0..=1.0).contains(e)));
    assert!(matches!(out.normalization, Normalization::Rescaled { .. }));
}

#[test]
fn test_loud_settings_hit_the_limiter() {
    let p = params(1.0, 44100, 0.1, 50.0, 200.0, 1.0);
    let stats = synthesize_seeded(&p).stats();
    assert!(stats.clipped_samples > 0);
    assert_eq!(stats.peak, 1.0);
}

#[test]
fn test_determinism() {
    let p = params(2.0, 44100, 0.55, 800.0, 40.0, 0.8);
    let a = synthesize_seeded(&p);
    let b = synthesize_seeded(&p);
    assert_eq!(a.audio, b.audio);
    assert_eq!(a.envelope, b.envelope);
}

#[test]
fn test_gains_do_not_change_noise_realization() {
    let base = params(1.0, 22050, 0.5, 300.0, 50.0, 0.5);
    let reference = synthesize_seeded(&base);

    for variant in [
        base.with_spark_gain(0.0),
        base.with_spark_gain(199.0),
        base.with_hum_gain(0.0),
        base.with_hum_gain(1.0),
    ] {
        let out = synthesize_seeded(&variant);
        assert_eq!(out.envelope, reference.envelope);
        assert_eq!(out.friction, reference.friction);
    }
}

#[test]
fn test_spark_scaling_is_linear_before_clipping() {
    // Hum off and small gains keep every sample after the first inside the
    // limiter. The first friction value is the envelope itself.
    let base = params(0.5, 8000, 0.5, 200.0, 1.0, 0.0);
    let one = synthesize_seeded(&base);
    let two = synthesize_seeded(&base.with_spark_gain(2.0));

    for (a, b) in one.audio.iter().zip(&two.audio).skip(1) {
        assert!(a.abs() < 0.5);
        assert!((2.0 * a - b).abs() < 1e-12);
    }
}

#[test]
fn test_zero_spark_gain_gives_gated_hum() {
    let p = params(0.5, 44100, 0.4, 200.0, 0.0, 0.6);
    let out = synthesize_seeded(&p);
    let carrier = HumCarrier::new(0.6);

    for (i, &sample) in out.audio.iter().enumerate() {
        let expected = if out.envelope[i] > 0.4 {
            carrier.sample_at(out.time_axis.at(i)).clamp(-1.0, 1.0)
        } else {
            0.0
        };
        assert_eq!(sample, expected);
    }
}

#[test]
fn test_monotonic_gating() {
    let base = params(1.0, 44100, 0.1, 400.0, 50.0, 0.5);
    let mut previous = usize::MAX;
    for step in 1..=9 {
        let threshold = step as f64 / 10.0;
        let out = synthesize_seeded(&base.with_gate_threshold(threshold));
        let connected = count_connected(&out.envelope, threshold);
        assert!(connected <= previous, "threshold {}", threshold);
        previous = connected;
    }
}

#[test]
fn test_window_coercion() {
    let base = params(0.2, 8000, 0.5, 1.0, 10.0, 0.5);
    let one = synthesize_seeded(&base);
    for window in [0.0, -5.0, 0.9, 1.7] {
        assert_eq!(synthesize_seeded(&base.with_smoothing_window(window)), one);
    }
}

#[test]
fn test_wider_window_changes_envelope() {
    let base = params(0.5, 8000, 0.5, 50.0, 10.0, 0.5);
    let narrow = synthesize_seeded(&base);
    let wide = synthesize_seeded(&base.with_smoothing_window(2000.0));
    assert_ne!(narrow.envelope, wide.envelope);
}

#[test]
fn test_sub_sample_duration_is_empty_not_error() {
    let p = params(0.004, 100, 0.6, 500.0, 50.0, 0.5);
    let out = synthesize_seeded(&p);
    assert!(out.audio.is_empty());
    assert!(out.envelope.is_empty());
    assert_eq!(out.normalization, Normalization::Empty);
}

#[test]
fn test_single_sample_envelope_is_degenerate() {
    let p = params(0.01, 100, 0.6, 500.0, 50.0, 0.5);
    let out = synthesize_seeded(&p);
    assert_eq!(out.audio.len(), 1);
    assert!(matches!(out.normalization, Normalization::Degenerate { .. }));
    assert!((0.0..1.0).contains(&out.envelope[0]));
}
