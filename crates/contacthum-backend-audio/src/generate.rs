//! Synthesis entry points.

use contacthum_spec::{SynthesisParams, MAX_SAMPLE_RATE};
use rand_pcg::Pcg32;

use crate::error::{AudioError, AudioResult};
use crate::rng::{create_contact_rng, standard_normal_samples};
use crate::synthesis::{
    connection_mask, friction, mix, spark_transients, ContactEnvelope, HumCarrier, Normalization,
};
use crate::time_axis::TimeAxis;
use crate::wav::WavResult;

/// Everything one synthesis call produces. All sequences have equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisOutput {
    /// Sample instants.
    pub time_axis: TimeAxis,
    /// Final waveform in `[-1, 1]`.
    pub audio: Vec<f64>,
    /// Contact envelope in `[0, 1]` (unless degenerate).
    pub envelope: Vec<f64>,
    /// Absolute rate of change of the envelope.
    pub friction: Vec<f64>,
    /// Gate threshold used, echoed for labeling.
    pub gate_threshold: f64,
    /// Sample rate used, echoed for labeling.
    pub sample_rate: u32,
    /// How the envelope was normalized.
    pub normalization: Normalization,
}

/// Summary statistics of a synthesis output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisStats {
    /// Number of samples.
    pub num_samples: usize,
    /// Samples where the contact is connected.
    pub connected_samples: usize,
    /// `connected_samples / num_samples` (0 for an empty buffer).
    pub connected_ratio: f64,
    /// Largest absolute sample value.
    pub peak: f64,
    /// Root mean square of the audio.
    pub rms: f64,
    /// Samples sitting at full scale after the limiter.
    pub clipped_samples: usize,
    /// Largest friction value.
    pub max_friction: f64,
}

impl SynthesisOutput {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.audio.len()
    }

    /// Returns true if nothing was synthesized.
    pub fn is_empty(&self) -> bool {
        self.audio.is_empty()
    }

    /// Recomputes the connection mask from the envelope and threshold.
    pub fn connection_mask(&self) -> Vec<bool> {
        connection_mask(&self.envelope, self.gate_threshold)
    }

    /// Computes summary statistics.
    pub fn stats(&self) -> SynthesisStats {
        let num_samples = self.audio.len();
        let connected_samples =
            crate::synthesis::count_connected(&self.envelope, self.gate_threshold);
        let connected_ratio = if num_samples == 0 {
            0.0
        } else {
            connected_samples as f64 / num_samples as f64
        };
        let peak = self.audio.iter().fold(0.0_f64, |m, s| m.max(s.abs()));
        let rms = if num_samples == 0 {
            0.0
        } else {
            (self.audio.iter().map(|s| s * s).sum::<f64>() / num_samples as f64).sqrt()
        };
        let clipped_samples = self.audio.iter().filter(|s| s.abs() >= 1.0).count();
        let max_friction = self.friction.iter().fold(0.0_f64, |m, &f| m.max(f));

        SynthesisStats {
            num_samples,
            connected_samples,
            connected_ratio,
            peak,
            rms,
            clipped_samples,
            max_friction,
        }
    }
}

/// Synthesizes one buffer using the caller's generator.
///
/// The generator should be freshly created with
/// [`create_contact_rng`](crate::rng::create_contact_rng) for reproducible
/// output; `N` uniform draws are taken first, then `N` normal draws.
///
/// Never fails. `floor(duration * rate) < 1` gives empty sequences and the
/// smoothing window is coerced to at least 1.
pub fn synthesize(params: &SynthesisParams, rng: &mut Pcg32) -> SynthesisOutput {
    let time_axis = TimeAxis::from_params(params);
    let n = time_axis.len();

    let hum = HumCarrier::new(params.hum_gain).render(&time_axis);

    let contact = ContactEnvelope::draw(rng, n, params.effective_window());
    let normalization = contact.normalization();
    let envelope = contact.into_samples();

    let friction = friction(&envelope);

    let mask = connection_mask(&envelope, params.gate_threshold);
    let normal = standard_normal_samples(rng, n);
    let sparks = spark_transients(&normal, &friction, params.spark_gain);
    let audio = mix(&hum, &mask, &sparks);

    SynthesisOutput {
        time_axis,
        audio,
        envelope,
        friction,
        gate_threshold: params.gate_threshold,
        sample_rate: params.sample_rate,
        normalization,
    }
}

/// Synthesizes one buffer with a fresh generator seeded with the fixed seed.
pub fn synthesize_seeded(params: &SynthesisParams) -> SynthesisOutput {
    let mut rng = create_contact_rng();
    synthesize(params, &mut rng)
}

/// A synthesis output together with its encoded WAV.
#[derive(Debug)]
pub struct RenderResult {
    /// The synthesized sequences.
    pub output: SynthesisOutput,
    /// The audio encoded as 16-bit mono PCM WAV.
    pub wav: WavResult,
}

/// Synthesizes and encodes a buffer.
///
/// Unlike [`synthesize`], this rejects inputs that cannot describe a buffer:
/// non-finite values, a sample rate of zero or above [`MAX_SAMPLE_RATE`],
/// or a negative duration.
pub fn render(params: &SynthesisParams) -> AudioResult<RenderResult> {
    check_renderable(params)?;

    let output = synthesize_seeded(params);
    let wav = WavResult::from_mono(&output.audio, output.sample_rate)?;

    Ok(RenderResult { output, wav })
}

fn check_renderable(params: &SynthesisParams) -> AudioResult<()> {
    let reals = [
        ("duration_seconds", params.duration_seconds),
        ("gate_threshold", params.gate_threshold),
        ("smoothing_window", params.smoothing_window),
        ("spark_gain", params.spark_gain),
        ("hum_gain", params.hum_gain),
    ];
    for (name, value) in reals {
        if !value.is_finite() {
            return Err(AudioError::NonFiniteParameter { name, value });
        }
    }

    if params.sample_rate == 0 || params.sample_rate > MAX_SAMPLE_RATE {
        return Err(AudioError::InvalidSampleRate {
            rate: params.sample_rate,
        });
    }

    if params.duration_seconds < 0.0 {
        return Err(AudioError::InvalidDuration {
            duration: params.duration_seconds,
        });
    }

    Ok(())
}
