//! Mains hum carrier.
//!
//! A fixed set of partials at harmonics of a 60 Hz mains fundamental with
//! decaying amplitudes. The carrier involves no randomness.

use std::f64::consts::PI;

use crate::time_axis::TimeAxis;

/// `(frequency_hz, relative_amplitude)` of each partial.
pub const HUM_PARTIALS: [(f64, f64); 4] = [(60.0, 1.0), (120.0, 0.4), (180.0, 0.3), (300.0, 0.2)];

/// Multi-harmonic hum scaled by a single gain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumCarrier {
    /// Gain applied to every partial.
    pub gain: f64,
}

impl HumCarrier {
    /// Creates a carrier with the given gain.
    pub fn new(gain: f64) -> Self {
        Self { gain }
    }

    /// Carrier value at time `t` seconds.
    pub fn sample_at(&self, t: f64) -> f64 {
        let two_pi = 2.0 * PI;
        HUM_PARTIALS
            .iter()
            .map(|&(freq, amp)| (self.gain * amp) * (two_pi * freq * t).sin())
            .sum()
    }

    /// Evaluates the carrier at every instant of `axis`.
    pub fn render(&self, axis: &TimeAxis) -> Vec<f64> {
        axis.iter().map(|t| self.sample_at(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_gain_is_silent() {
        let axis = TimeAxis::new(1000, 44100);
        let hum = HumCarrier::new(0.0).render(&axis);
        assert!(hum.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(HumCarrier::new(1.0).sample_at(0.0), 0.0);
    }

    #[test]
    fn test_scales_linearly_with_gain() {
        let axis = TimeAxis::new(200, 8000);
        let unit = HumCarrier::new(1.0).render(&axis);
        let half = HumCarrier::new(0.5).render(&axis);
        for (u, h) in unit.iter().zip(&half) {
            assert!((u * 0.5 - h).abs() < 1e-12);
        }
    }

    #[test]
    fn test_periodic_at_fundamental() {
        // 1/60 s is an integer number of periods of every partial
        let carrier = HumCarrier::new(1.0);
        for &t in &[0.001, 0.0042, 0.013] {
            let a = carrier.sample_at(t);
            let b = carrier.sample_at(t + 1.0 / 60.0);
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_peak_bounded_by_amplitude_sum() {
        let axis = TimeAxis::new(44100, 44100);
        let hum = HumCarrier::new(1.0).render(&axis);
        let peak = hum.iter().fold(0.0_f64, |m, s| m.max(s.abs()));
        let bound: f64 = HUM_PARTIALS.iter().map(|&(_, a)| a).sum();
        assert!(peak <= bound + 1e-12);
        assert!(peak > 1.0, "partials should reinforce above unity");
    }
}
