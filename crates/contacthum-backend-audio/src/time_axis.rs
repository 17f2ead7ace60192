//! Sample instants of a buffer.

use contacthum_spec::SynthesisParams;

/// The half-open interval `[0, len / sample_rate)` sampled at `1 / sample_rate`.
///
/// Only the length and rate are stored; instants are computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAxis {
    len: usize,
    sample_rate: u32,
}

impl TimeAxis {
    /// Creates an axis of `len` instants at `sample_rate` Hz.
    pub fn new(len: usize, sample_rate: u32) -> Self {
        Self { len, sample_rate }
    }

    /// Creates the axis for a parameter set: `floor(duration * rate)` instants.
    pub fn from_params(params: &SynthesisParams) -> Self {
        Self::new(params.num_samples(), params.sample_rate)
    }

    /// Number of instants.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the axis has no instants.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Time in seconds of instant `index`.
    pub fn at(&self, index: usize) -> f64 {
        index as f64 / self.sample_rate as f64
    }

    /// Iterates over all instants in order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |i| self.at(i))
    }

    /// Collects all instants.
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// Covered duration in seconds (`len / sample_rate`).
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.len as f64 / self.sample_rate as f64
        }
    }
}
