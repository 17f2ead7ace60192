//! contacthum Plot Backend
//!
//! Renders a synthesis run as a two-panel PNG figure: the contact envelope,
//! gate threshold and attenuated audio over the first samples on top, and
//! the spectrogram of the whole buffer below.
//!
//! # Example
//!
//! ```
//! use contacthum_backend_plot::{plot_png, PlotConfig, PlotInput};
//!
//! let times: Vec<f64> = (0..4096).map(|i| i as f64 / 8000.0).collect();
//! let envelope: Vec<f64> = times.iter().map(|t| (t * 3.0).sin().abs()).collect();
//! let audio: Vec<f64> = times.iter().map(|t| (t * 376.99).sin()).collect();
//!
//! let input = PlotInput {
//!     times: &times,
//!     envelope: &envelope,
//!     audio: &audio,
//!     gate_threshold: 0.6,
//!     sample_rate: 8000,
//! };
//! let plot = plot_png(&input, &PlotConfig::default()).unwrap();
//! assert_eq!(plot.width, 1200);
//! assert_eq!(plot.frames, 7);
//! ```

pub mod canvas;
pub mod error;
pub mod overlay;
pub mod png;
pub mod render;
pub mod spectrogram;

pub use canvas::{hot_colormap, Canvas, Color};
pub use crate::png::{hash_png, write_rgb, write_rgb_to_vec_with_hash, PngConfig};
pub use error::{PlotError, PlotResult};
pub use overlay::{TimeOverlay, AUDIO_SCALE, OVERLAY_SAMPLES};
pub use render::{render_figure, PlotConfig};
pub use spectrogram::{Spectrogram, SpectrogramConfig, DISPLAY_MAX_HZ};

/// The series a figure is drawn from.
#[derive(Debug, Clone, Copy)]
pub struct PlotInput<'a> {
    /// Sample instants in seconds.
    pub times: &'a [f64],
    /// Contact envelope.
    pub envelope: &'a [f64],
    /// Final audio.
    pub audio: &'a [f64],
    /// Gate threshold.
    pub gate_threshold: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

/// An encoded figure.
#[derive(Debug, Clone)]
pub struct PlotOutput {
    /// PNG bytes.
    pub png_data: Vec<u8>,
    /// BLAKE3 hash of the PNG bytes.
    pub png_hash: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Spectrogram frames drawn.
    pub frames: usize,
}

/// Builds the overlay and spectrogram, renders them, and encodes the PNG.
pub fn plot_png(input: &PlotInput<'_>, config: &PlotConfig) -> PlotResult<PlotOutput> {
    let overlay = TimeOverlay::new(
        input.times,
        input.envelope,
        input.audio,
        input.gate_threshold,
    )?;
    let spectrogram = Spectrogram::compute_default(input.audio, input.sample_rate)?;

    let canvas = render_figure(&overlay, &spectrogram, config)?;
    let (png_data, png_hash) = write_rgb_to_vec_with_hash(&canvas, &PngConfig::default())?;

    Ok(PlotOutput {
        png_data,
        png_hash,
        width: canvas.width(),
        height: canvas.height(),
        frames: spectrogram.num_frames(),
    })
}
