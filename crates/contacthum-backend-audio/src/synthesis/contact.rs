//! Contact envelope: smoothed, normalized stochastic contact strength.

use rand_pcg::Pcg32;

use super::smoothing::moving_average;
use crate::rng::uniform_samples;

/// How the smoothed noise was mapped onto the envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// Affinely rescaled from `[min, max]` onto `[0, 1]`.
    Rescaled {
        /// Smallest smoothed value before rescaling.
        min: f64,
        /// Largest smoothed value before rescaling.
        max: f64,
    },
    /// All smoothed values were equal; left unscaled.
    Degenerate {
        /// The constant value.
        value: f64,
    },
    /// No samples.
    Empty,
}

/// Rescales `values` in place so they span exactly `[0, 1]`.
///
/// When every value is equal the slice is left untouched and no division
/// takes place.
pub fn normalize_min_max(values: &mut [f64]) -> Normalization {
    let Some(&first) = values.first() else {
        return Normalization::Empty;
    };

    let (min, max) = values
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    if max > min {
        let span = max - min;
        for v in values.iter_mut() {
            *v = (*v - min) / span;
        }
        Normalization::Rescaled { min, max }
    } else {
        Normalization::Degenerate { value: min }
    }
}

/// The contact envelope of one synthesis call.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactEnvelope {
    samples: Vec<f64>,
    normalization: Normalization,
}

impl ContactEnvelope {
    /// Builds the envelope from raw noise: moving average, then normalization.
    pub fn from_noise(raw: &[f64], window: usize) -> Self {
        let mut samples = moving_average(raw, window);
        let normalization = normalize_min_max(&mut samples);
        Self {
            samples,
            normalization,
        }
    }

    /// Draws `n` uniform samples from `rng` and builds the envelope from them.
    pub fn draw(rng: &mut Pcg32, n: usize, window: usize) -> Self {
        let raw = uniform_samples(rng, n);
        Self::from_noise(&raw, window)
    }

    /// Envelope samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consumes the envelope and returns its samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// How the samples were normalized.
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the envelope has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
