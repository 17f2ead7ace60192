//! Error types for the audio backend.

use contacthum_spec::BackendError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while rendering audio.
///
/// [`synthesize`](crate::synthesize) itself never fails; these come from
/// [`render`](crate::render), which refuses inputs that cannot describe a
/// buffer at all.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// A parameter is NaN or infinite.
    #[error("parameter '{name}' must be finite, got {value}")]
    NonFiniteParameter {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSampleRate { .. } => "AUDIO_001",
            AudioError::InvalidDuration { .. } => "AUDIO_002",
            AudioError::NonFiniteParameter { .. } => "AUDIO_003",
            AudioError::Io(_) => "AUDIO_004",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_message() {
        let err = AudioError::NonFiniteParameter {
            name: "hum_gain",
            value: f64::NAN,
        };
        assert!(err.to_string().contains("hum_gain"));
        assert_eq!(err.code(), "AUDIO_003");
        assert_eq!(err.category(), "audio");
    }

    #[test]
    fn test_io_from() {
        let err: AudioError = std::io::Error::new(std::io::ErrorKind::Other, "disk gone").into();
        assert_eq!(err.code(), "AUDIO_004");
        assert!(err.to_string().contains("disk gone"));
    }
}
