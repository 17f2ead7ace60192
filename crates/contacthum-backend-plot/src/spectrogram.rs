//! Short-time power spectral density of the audio buffer.
//!
//! Frames of `nfft` samples advance by `nfft - noverlap`, are weighted with a
//! symmetric Hann window and transformed with a forward FFT. Power is scaled
//! as a one-sided density: `|X|^2 / (fs * sum(w^2))`, with every bin except
//! DC and Nyquist doubled. Frame times are frame centers.

use std::f64::consts::TAU;

use rustfft::{num_complex::Complex, FftPlanner};

use crate::error::{PlotError, PlotResult};

/// Upper edge of the displayed frequency band in Hz.
pub const DISPLAY_MAX_HZ: f64 = 2000.0;

/// Power floor applied before converting to decibels.
const POWER_FLOOR: f64 = 1e-20;

/// Framing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectrogramConfig {
    /// FFT length in samples.
    pub nfft: usize,
    /// Samples shared by consecutive frames.
    pub noverlap: usize,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            nfft: 1024,
            noverlap: 512,
        }
    }
}

impl SpectrogramConfig {
    /// Distance between consecutive frame starts.
    pub fn hop(&self) -> usize {
        self.nfft.saturating_sub(self.noverlap)
    }

    /// Number of complete frames in a signal of `len` samples.
    pub fn num_frames(&self, len: usize) -> usize {
        if self.hop() == 0 || len < self.nfft {
            0
        } else {
            1 + (len - self.nfft) / self.hop()
        }
    }

    fn check(&self) -> PlotResult<()> {
        if self.nfft < 2 || self.noverlap >= self.nfft {
            return Err(PlotError::InvalidDimensions(format!(
                "nfft {} with overlap {} leaves no hop",
                self.nfft, self.noverlap
            )));
        }
        Ok(())
    }
}

/// Symmetric Hann window of length `n`.
pub fn hann_window(n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![1.0; n];
    }
    let denom = (n - 1) as f64;
    (0..n)
        .map(|i| 0.5 - 0.5 * (TAU * i as f64 / denom).cos())
        .collect()
}

/// A computed spectrogram.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrogram {
    /// Frame center times in seconds.
    pub times: Vec<f64>,
    /// Bin frequencies in Hz.
    pub frequencies: Vec<f64>,
    /// Power spectral density, `power[frame][bin]`.
    pub power: Vec<Vec<f64>>,
}

impl Spectrogram {
    /// Computes the spectrogram of `signal`.
    ///
    /// Signals shorter than one frame give a spectrogram with no frames.
    pub fn compute(
        signal: &[f64],
        sample_rate: u32,
        config: &SpectrogramConfig,
    ) -> PlotResult<Self> {
        config.check()?;
        if sample_rate == 0 {
            return Err(PlotError::InvalidDimensions(
                "sample rate must be positive".to_string(),
            ));
        }

        let fs = sample_rate as f64;
        let nfft = config.nfft;
        let hop = config.hop();
        let num_bins = nfft / 2 + 1;

        let frequencies: Vec<f64> = (0..num_bins).map(|k| k as f64 * fs / nfft as f64).collect();

        let window = hann_window(nfft);
        let window_power: f64 = window.iter().map(|w| w * w).sum();
        let scale = 1.0 / (fs * window_power);

        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(nfft);
        let mut buffer = vec![Complex::new(0.0, 0.0); nfft];

        let num_frames = config.num_frames(signal.len());
        let mut times = Vec::with_capacity(num_frames);
        let mut power = Vec::with_capacity(num_frames);

        for frame in 0..num_frames {
            let start = frame * hop;
            let segment = &signal[start..start + nfft];

            for ((slot, &x), &w) in buffer.iter_mut().zip(segment).zip(&window) {
                *slot = Complex::new(x * w, 0.0);
            }
            fft.process(&mut buffer);

            let row: Vec<f64> = buffer
                .iter()
                .take(num_bins)
                .enumerate()
                .map(|(k, c)| {
                    let p = c.norm_sqr() * scale;
                    // DC and Nyquist appear once in the full spectrum
                    if k == 0 || (nfft % 2 == 0 && k == nfft / 2) {
                        p
                    } else {
                        2.0 * p
                    }
                })
                .collect();

            times.push((start as f64 + nfft as f64 / 2.0) / fs);
            power.push(row);
        }

        Ok(Self {
            times,
            frequencies,
            power,
        })
    }

    /// Computes the spectrogram with the default framing.
    pub fn compute_default(signal: &[f64], sample_rate: u32) -> PlotResult<Self> {
        Self::compute(signal, sample_rate, &SpectrogramConfig::default())
    }

    /// Number of frames.
    pub fn num_frames(&self) -> usize {
        self.times.len()
    }

    /// Number of frequency bins.
    pub fn num_bins(&self) -> usize {
        self.frequencies.len()
    }

    /// Returns true if there are no frames.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Keeps only the bins at or below `max_hz`.
    pub fn band(&self, max_hz: f64) -> Self {
        let keep = self.frequencies.iter().take_while(|&&f| f <= max_hz).count();
        Self {
            times: self.times.clone(),
            frequencies: self.frequencies[..keep].to_vec(),
            power: self.power.iter().map(|row| row[..keep].to_vec()).collect(),
        }
    }

    /// Keeps only the displayed band.
    pub fn display_band(&self) -> Self {
        self.band(DISPLAY_MAX_HZ)
    }

    /// Power in decibels, `10 * log10(p)`, floored at -200 dB.
    pub fn power_db(&self) -> Vec<Vec<f64>> {
        self.power
            .iter()
            .map(|row| row.iter().map(|&p| to_db(p)).collect())
            .collect()
    }

    /// Smallest and largest decibel value, or `None` without frames.
    pub fn db_range(&self) -> Option<(f64, f64)> {
        let mut values = self.power.iter().flatten().map(|&p| to_db(p));
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Power averaged over all frames, per bin.
    pub fn mean_power(&self) -> Vec<f64> {
        let mut mean = vec![0.0; self.num_bins()];
        if self.power.is_empty() {
            return mean;
        }
        for row in &self.power {
            for (acc, &p) in mean.iter_mut().zip(row) {
                *acc += p;
            }
        }
        let frames = self.power.len() as f64;
        mean.iter_mut().for_each(|m| *m /= frames);
        mean
    }

    /// Frequency of the bin with the highest mean power, skipping DC.
    pub fn peak_frequency(&self) -> Option<f64> {
        let mean = self.mean_power();
        mean.iter()
            .enumerate()
            .skip(1)
            .fold(None, |best: Option<(usize, f64)>, (k, &p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((k, p)),
            })
            .filter(|&(_, p)| p > 0.0)
            .map(|(k, _)| self.frequencies[k])
    }
}

fn to_db(power: f64) -> f64 {
    10.0 * power.max(POWER_FLOOR).log10()
}
