//! RGB raster canvas with line primitives and the "hot" colormap.

use std::ops::Range;

/// RGB color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Create a color from components.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a 0xRRGGBB value.
    pub fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xff) as f64 / 255.0,
            ((hex >> 8) & 0xff) as f64 / 255.0,
            (hex & 0xff) as f64 / 255.0,
        )
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Create white.
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Linear interpolation between two colors.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Convert to 8-bit RGB.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }
}

/// Matplotlib's "hot" colormap: black through red and yellow to white.
///
/// `t` is clamped to `[0, 1]`; NaN maps to black.
pub fn hot_colormap(t: f64) -> Color {
    const RED_END: f64 = 0.365079;
    const GREEN_END: f64 = 0.746032;

    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    Color::rgb(
        (t / RED_END).min(1.0),
        ((t - RED_END) / (GREEN_END - RED_END)).clamp(0.0, 1.0),
        ((t - GREEN_END) / (1.0 - GREEN_END)).clamp(0.0, 1.0),
    )
}

/// A fixed-size RGB image.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            None
        } else {
            Some(y as usize * self.width as usize + x as usize)
        }
    }

    /// Pixel color, or `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x as i64, y as i64).map(|i| self.pixels[i])
    }

    /// Set a pixel. Coordinates outside the canvas are ignored.
    pub fn set(&mut self, x: i64, y: i64, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Blend `color` over a pixel with the given opacity.
    pub fn blend(&mut self, x: i64, y: i64, color: Color, alpha: f64) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = self.pixels[i].lerp(&color, alpha);
        }
    }

    /// Fill the half-open rectangle `[x0, x1) x [y0, y1)`.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        for y in y0.max(0)..y1.min(self.height as i64) {
            for x in x0.max(0)..x1.min(self.width as i64) {
                self.set(x, y, color);
            }
        }
    }

    /// Draw a line with Bresenham's algorithm.
    pub fn draw_line(&mut self, from: (i64, i64), to: (i64, i64), color: Color, alpha: f64) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.blend(x, y, color, alpha);
            if x == to.0 && y == to.1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw connected segments through `points`, `thickness` pixels tall.
    pub fn draw_polyline(&mut self, points: &[(i64, i64)], color: Color, alpha: f64, thickness: u32) {
        let thickness = thickness.max(1) as i64;
        for pair in points.windows(2) {
            for offset in 0..thickness {
                let shift = offset - thickness / 2;
                self.draw_line(
                    (pair[0].0, pair[0].1 + shift),
                    (pair[1].0, pair[1].1 + shift),
                    color,
                    alpha,
                );
            }
        }
        if let [only] = points {
            self.blend(only.0, only.1, color, alpha);
        }
    }

    /// Draw a horizontal dashed line over `span`.
    ///
    /// `pattern` is `(dash, gap)` in pixels.
    pub fn draw_dashed_hline(
        &mut self,
        y: i64,
        span: Range<i64>,
        pattern: (u32, u32),
        color: Color,
        thickness: u32,
    ) {
        let (dash, gap) = pattern;
        let period = (dash + gap).max(1) as i64;
        let dash = dash as i64;
        let thickness = thickness.max(1) as i64;
        let start = span.start;
        for x in span {
            if (x - start) % period < dash {
                for offset in 0..thickness {
                    self.set(x, y + offset - thickness / 2, color);
                }
            }
        }
    }

    /// Pixel data as packed 8-bit RGB, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgb8()).collect()
    }
}
