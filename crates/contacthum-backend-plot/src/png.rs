//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same canvas always encodes to
//! byte-identical output.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

use crate::canvas::Canvas;
use crate::error::{PlotError, PlotResult};

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Create config optimized for file size.
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }
}

/// Write a canvas as 8-bit RGB to any writer.
pub fn write_rgb_to_writer<W: Write>(
    canvas: &Canvas,
    writer: W,
    config: &PngConfig,
) -> PlotResult<()> {
    if canvas.width() == 0 || canvas.height() == 0 {
        return Err(PlotError::InvalidDimensions(format!(
            "cannot encode a {}x{} image",
            canvas.width(),
            canvas.height()
        )));
    }

    let mut encoder = Encoder::new(writer, canvas.width(), canvas.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // The png crate writes no timestamps or other variable metadata
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&canvas.to_rgb8())?;
    png_writer.finish()?;

    Ok(())
}

/// Write a canvas to a PNG file.
pub fn write_rgb(canvas: &Canvas, path: &Path, config: &PngConfig) -> PlotResult<()> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_rgb_to_writer(canvas, writer, config)
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Write to a Vec<u8> and return the hash.
pub fn write_rgb_to_vec_with_hash(
    canvas: &Canvas,
    config: &PngConfig,
) -> PlotResult<(Vec<u8>, String)> {
    let mut data = Vec::new();
    write_rgb_to_writer(canvas, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{hot_colormap, Color};

    fn gradient() -> Canvas {
        let mut canvas = Canvas::new(64, 32, Color::black());
        for y in 0..32 {
            for x in 0..64 {
                canvas.set(x, y, hot_colormap((x + y) as f64 / 94.0));
            }
        }
        canvas
    }

    #[test]
    fn test_rgb_deterministic() {
        let canvas = gradient();
        let config = PngConfig::default();

        let (data1, hash1) = write_rgb_to_vec_with_hash(&canvas, &config).unwrap();
        let (data2, hash2) = write_rgb_to_vec_with_hash(&canvas, &config).unwrap();

        assert_eq!(data1, data2, "PNG data should be identical");
        assert_eq!(hash1, hash2, "PNG hashes should be identical");
        assert_eq!(&data1[1..4], b"PNG");
    }

    #[test]
    fn test_decodes_back() {
        let canvas = gradient();
        let (data, _) = write_rgb_to_vec_with_hash(&canvas, &PngConfig::best_compression()).unwrap();

        let decoder = png::Decoder::new(data.as_slice());
        let mut reader = decoder.read_info().unwrap();
        let mut pixels = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut pixels).unwrap();

        assert_eq!(info.width, 64);
        assert_eq!(info.height, 32);
        assert_eq!(info.color_type, ColorType::Rgb);
        assert_eq!(&pixels[..info.buffer_size()], canvas.to_rgb8().as_slice());
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");
        write_rgb(&gradient(), &path, &PngConfig::default()).unwrap();

        let on_disk = std::fs::read(&path).unwrap();
        let (in_memory, _) = write_rgb_to_vec_with_hash(&gradient(), &PngConfig::default()).unwrap();
        assert_eq!(on_disk, in_memory);
    }

    #[test]
    fn test_rejects_empty_canvas() {
        let canvas = Canvas::new(0, 10, Color::black());
        assert!(matches!(
            write_rgb_to_vec_with_hash(&canvas, &PngConfig::default()),
            Err(PlotError::InvalidDimensions(_))
        ));
    }
}
