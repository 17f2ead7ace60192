//! Time-domain overlay: contact envelope, gate threshold and attenuated audio.

use crate::error::{PlotError, PlotResult};

/// Maximum number of leading samples shown in the overlay.
pub const OVERLAY_SAMPLES: usize = 15_000;

/// Scale applied to the audio so it sits under the envelope.
pub const AUDIO_SCALE: f64 = 0.5;

/// The series drawn in the upper panel.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeOverlay {
    /// Sample instants in seconds.
    pub times: Vec<f64>,
    /// Contact envelope.
    pub envelope: Vec<f64>,
    /// Audio scaled by [`AUDIO_SCALE`].
    pub audio: Vec<f64>,
    /// Gate threshold, drawn as a horizontal line.
    pub threshold: f64,
}

impl TimeOverlay {
    /// Takes the first `min(N, OVERLAY_SAMPLES)` samples of each series.
    ///
    /// All three series must have the same length.
    pub fn new(times: &[f64], envelope: &[f64], audio: &[f64], threshold: f64) -> PlotResult<Self> {
        if times.len() != envelope.len() || times.len() != audio.len() {
            return Err(PlotError::InvalidDimensions(format!(
                "series lengths differ: time {}, envelope {}, audio {}",
                times.len(),
                envelope.len(),
                audio.len()
            )));
        }

        let n = times.len().min(OVERLAY_SAMPLES);
        Ok(Self {
            times: times[..n].to_vec(),
            envelope: envelope[..n].to_vec(),
            audio: audio[..n].iter().map(|s| s * AUDIO_SCALE).collect(),
            threshold,
        })
    }

    /// Number of samples shown.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true if nothing is shown.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time span covered, `(first, last)`.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        Some((*self.times.first()?, *self.times.last()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_to_window() {
        let n = 20_000;
        let times: Vec<f64> = (0..n).map(|i| i as f64 / 44100.0).collect();
        let env = vec![0.7; n];
        let audio = vec![0.8; n];

        let overlay = TimeOverlay::new(&times, &env, &audio, 0.6).unwrap();
        assert_eq!(overlay.len(), OVERLAY_SAMPLES);
        assert_eq!(overlay.audio[0], 0.4);
        assert_eq!(overlay.threshold, 0.6);
        assert_eq!(overlay.time_span(), Some((0.0, 14_999.0 / 44100.0)));
    }

    #[test]
    fn test_short_series_kept_whole() {
        let overlay = TimeOverlay::new(&[0.0, 0.5], &[0.1, 0.9], &[1.0, -1.0], 0.5).unwrap();
        assert_eq!(overlay.len(), 2);
        assert_eq!(overlay.audio, vec![0.5, -0.5]);
    }

    #[test]
    fn test_empty() {
        let overlay = TimeOverlay::new(&[], &[], &[], 0.5).unwrap();
        assert!(overlay.is_empty());
        assert_eq!(overlay.time_span(), None);
    }

    #[test]
    fn test_length_mismatch() {
        let err = TimeOverlay::new(&[0.0, 1.0], &[0.0], &[0.0, 0.0], 0.5).unwrap_err();
        assert!(err.to_string().contains("series lengths differ"));
    }
}
