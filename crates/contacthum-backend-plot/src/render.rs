//! Two-panel figure: time overlay on top, spectrogram below.

use crate::canvas::{hot_colormap, Canvas, Color};
use crate::error::{PlotError, PlotResult};
use crate::overlay::TimeOverlay;
use crate::spectrogram::Spectrogram;

/// Envelope trace color.
pub const ENVELOPE_COLOR: u32 = 0x00ff00;
/// Threshold line color.
pub const THRESHOLD_COLOR: u32 = 0xff3333;
/// Grid line color.
pub const GRID_COLOR: u32 = 0x333333;

/// Vertical value range shown in the overlay panel.
const OVERLAY_Y_RANGE: (f64, f64) = (-0.6, 1.1);

/// Figure layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotConfig {
    /// Figure width in pixels.
    pub width: u32,
    /// Figure height in pixels; split evenly between the two panels.
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}

impl PlotConfig {
    /// Height of each panel.
    pub fn panel_height(&self) -> u32 {
        self.height / 2
    }
}

/// Renders both panels onto a black canvas.
pub fn render_figure(
    overlay: &TimeOverlay,
    spectrogram: &Spectrogram,
    config: &PlotConfig,
) -> PlotResult<Canvas> {
    if config.width < 2 || config.panel_height() < 2 {
        return Err(PlotError::InvalidDimensions(format!(
            "figure {}x{} is too small for two panels",
            config.width, config.height
        )));
    }

    let mut canvas = Canvas::new(config.width, config.height, Color::black());
    draw_overlay(&mut canvas, overlay, config);
    draw_spectrogram(&mut canvas, spectrogram, config);
    Ok(canvas)
}

/// Draws the overlay into the upper panel.
fn draw_overlay(canvas: &mut Canvas, overlay: &TimeOverlay, config: &PlotConfig) {
    let width = config.width as i64;
    let panel = config.panel_height() as i64;
    let (lo, hi) = OVERLAY_Y_RANGE;

    let to_y = |value: f64| -> i64 {
        let t = ((value - lo) / (hi - lo)).clamp(0.0, 1.0);
        ((1.0 - t) * (panel - 1) as f64).round() as i64
    };

    // Dotted grid
    let grid = Color::from_hex(GRID_COLOR);
    for value in [-0.5, 0.0, 0.5, 1.0] {
        canvas.draw_dashed_hline(to_y(value), 0..width, (1, 3), grid, 1);
    }

    let n = overlay.len();
    let to_x = |i: usize| -> i64 {
        if n <= 1 {
            0
        } else {
            (i as f64 * (width - 1) as f64 / (n - 1) as f64).round() as i64
        }
    };

    let envelope: Vec<(i64, i64)> = overlay
        .envelope
        .iter()
        .enumerate()
        .map(|(i, &v)| (to_x(i), to_y(v)))
        .collect();
    canvas.draw_polyline(&envelope, Color::from_hex(ENVELOPE_COLOR), 0.8, 2);

    canvas.draw_dashed_hline(
        to_y(overlay.threshold),
        0..width,
        (12, 6),
        Color::from_hex(THRESHOLD_COLOR),
        2,
    );

    let audio: Vec<(i64, i64)> = overlay
        .audio
        .iter()
        .enumerate()
        .map(|(i, &v)| (to_x(i), to_y(v)))
        .collect();
    canvas.draw_polyline(&audio, Color::white(), 0.4, 1);
}

/// Draws the display band of the spectrogram into the lower panel.
///
/// Decibel values are mapped linearly onto the colormap between the
/// smallest and largest value in the band. Without frames the panel stays
/// black.
fn draw_spectrogram(canvas: &mut Canvas, spectrogram: &Spectrogram, config: &PlotConfig) {
    let band = spectrogram.display_band();
    let Some((db_min, db_max)) = band.db_range() else {
        return;
    };
    let frames = band.num_frames();
    let bins = band.num_bins();
    if bins == 0 {
        return;
    }

    let db = band.power_db();
    let span = db_max - db_min;
    let top = config.panel_height() as i64;
    let panel = (config.height - config.panel_height()) as usize;
    let width = config.width as usize;

    for row in 0..panel {
        // Low frequencies at the bottom
        let bin = ((panel - 1 - row) * bins / panel).min(bins - 1);
        for col in 0..width {
            let frame = (col * frames / width).min(frames - 1);
            let t = if span > 0.0 {
                (db[frame][bin] - db_min) / span
            } else {
                0.0
            };
            canvas.set(col as i64, top + row as i64, hot_colormap(t));
        }
    }
}
