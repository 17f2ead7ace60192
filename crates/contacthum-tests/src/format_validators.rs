//! Header validators for the files a render writes.
//!
//! These parse the bytes independently of the writers, so a writer bug
//! cannot hide behind a matching reader.

use std::fmt;

/// Error type for format validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    /// The format being validated.
    pub format: &'static str,
    /// Description of what went wrong.
    pub message: String,
    /// Byte offset where the error occurred, if applicable.
    pub offset: Option<usize>,
}

impl FormatError {
    fn new(format: &'static str, message: impl Into<String>) -> Self {
        Self {
            format,
            message: message.into(),
            offset: None,
        }
    }

    fn at_offset(format: &'static str, message: impl Into<String>, offset: usize) -> Self {
        Self {
            format,
            message: message.into(),
            offset: Some(offset),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(offset) = self.offset {
            write!(f, "{} error at offset {}: {}", self.format, offset, self.message)
        } else {
            write!(f, "{} error: {}", self.format, self.message)
        }
    }
}

impl std::error::Error for FormatError {}

/// Information extracted from a WAV file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavInfo {
    /// Audio format code (1 = PCM).
    pub audio_format: u16,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Samples per channel.
    pub num_samples: usize,
    /// Offset of the first PCM byte.
    pub data_offset: usize,
}

fn le_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn le_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

/// Validate a RIFF/WAVE file and extract its header.
///
/// Walks the chunk list, so files with extra chunks are accepted.
pub fn validate_wav(data: &[u8]) -> Result<WavInfo, FormatError> {
    const MIN_HEADER_SIZE: usize = 44;

    if data.len() < MIN_HEADER_SIZE {
        return Err(FormatError::new(
            "WAV",
            format!("File too short: {} bytes (minimum {} required)", data.len(), MIN_HEADER_SIZE),
        ));
    }
    if &data[0..4] != b"RIFF" {
        return Err(FormatError::at_offset("WAV", "Invalid RIFF header", 0));
    }
    if le_u32(data, 4) as usize != data.len() - 8 {
        return Err(FormatError::at_offset("WAV", "RIFF size does not match file length", 4));
    }
    if &data[8..12] != b"WAVE" {
        return Err(FormatError::at_offset("WAV", "Invalid WAVE format", 8));
    }

    let mut offset = 12;
    let mut fmt: Option<(u16, u16, u32, u16, u16)> = None;

    while offset + 8 <= data.len() {
        let chunk_id = &data[offset..offset + 4];
        let chunk_size = le_u32(data, offset + 4) as usize;
        let body = offset + 8;

        if chunk_id == b"fmt " {
            if chunk_size < 16 || body + 16 > data.len() {
                return Err(FormatError::at_offset("WAV", "Truncated fmt chunk", offset));
            }
            fmt = Some((
                le_u16(data, body),
                le_u16(data, body + 2),
                le_u32(data, body + 4),
                le_u16(data, body + 12),
                le_u16(data, body + 14),
            ));
        }

        if chunk_id == b"data" {
            let Some((audio_format, channels, sample_rate, block_align, bits_per_sample)) = fmt
            else {
                return Err(FormatError::at_offset(
                    "WAV",
                    "data chunk found before fmt chunk",
                    offset,
                ));
            };
            if body + chunk_size > data.len() {
                return Err(FormatError::at_offset("WAV", "Truncated data chunk", offset));
            }
            let num_samples = match block_align {
                0 => 0,
                align => chunk_size / align as usize,
            };
            return Ok(WavInfo {
                audio_format,
                channels,
                sample_rate,
                bits_per_sample,
                num_samples,
                data_offset: body,
            });
        }

        // Chunks are word-aligned
        offset = body + ((chunk_size + 1) & !1);
    }

    match fmt {
        None => Err(FormatError::new("WAV", "Missing fmt chunk")),
        Some(_) => Err(FormatError::new("WAV", "Missing data chunk")),
    }
}

/// Information extracted from a PNG IHDR chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngInfo {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    /// 2 = RGB, 6 = RGBA.
    pub color_type: u8,
    pub interlace_method: u8,
}

/// Validate the PNG signature and IHDR chunk.
pub fn validate_png(data: &[u8]) -> Result<PngInfo, FormatError> {
    const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    const MIN_HEADER_SIZE: usize = 8 + 8 + 13;

    if data.len() < MIN_HEADER_SIZE {
        return Err(FormatError::new(
            "PNG",
            format!("File too short: {} bytes (minimum {} required)", data.len(), MIN_HEADER_SIZE),
        ));
    }
    if data[0..8] != PNG_SIGNATURE {
        return Err(FormatError::at_offset("PNG", "Invalid PNG signature", 0));
    }
    if &data[12..16] != b"IHDR" {
        return Err(FormatError::at_offset("PNG", "First chunk must be IHDR", 12));
    }

    let ihdr = &data[16..29];
    let width = u32::from_be_bytes([ihdr[0], ihdr[1], ihdr[2], ihdr[3]]);
    let height = u32::from_be_bytes([ihdr[4], ihdr[5], ihdr[6], ihdr[7]]);
    if width == 0 || height == 0 {
        return Err(FormatError::new(
            "PNG",
            format!("Invalid dimensions: {}x{}", width, height),
        ));
    }

    Ok(PngInfo {
        width,
        height,
        bit_depth: ihdr[8],
        color_type: ihdr[9],
        interlace_method: ihdr[12],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contacthum_backend_audio::wav::{samples_to_pcm16, WavFormat, write_wav_to_vec};

    #[test]
    fn test_wav_header_of_writer_output() {
        let pcm = samples_to_pcm16(&[0.0, 0.5, -0.5]);
        let wav = write_wav_to_vec(&WavFormat::mono(8000), &pcm).unwrap();

        let info = validate_wav(&wav).unwrap();
        assert_eq!(info.audio_format, 1);
        assert_eq!(info.channels, 1);
        assert_eq!(info.sample_rate, 8000);
        assert_eq!(info.bits_per_sample, 16);
        assert_eq!(info.num_samples, 3);
        assert_eq!(info.data_offset, 44);
    }

    #[test]
    fn test_wav_rejects_bad_magic() {
        let mut wav = write_wav_to_vec(&WavFormat::mono(8000), &[]).unwrap();
        wav[0] = b'X';
        assert_eq!(validate_wav(&wav).unwrap_err().offset, Some(0));
        assert!(validate_wav(&wav[..20]).is_err());
    }

    #[test]
    fn test_png_rejects_garbage() {
        assert!(validate_png(&[0u8; 40]).is_err());
        assert!(validate_png(b"\x89PNG").is_err());
    }
}
