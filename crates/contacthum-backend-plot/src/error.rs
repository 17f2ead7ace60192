//! Error types for the plot backend.

use contacthum_spec::BackendError;
use thiserror::Error;

/// Result type for plot operations.
pub type PlotResult<T> = Result<T, PlotError>;

/// Errors from spectrogram analysis, rasterization and PNG encoding.
#[derive(Debug, Error)]
pub enum PlotError {
    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    /// Canvas, frame or series dimensions that cannot be drawn.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

impl BackendError for PlotError {
    fn code(&self) -> &'static str {
        match self {
            PlotError::Io(_) => "PLOT_001",
            PlotError::Encoding(_) => "PLOT_002",
            PlotError::InvalidDimensions(_) => "PLOT_003",
        }
    }

    fn category(&self) -> &'static str {
        "plot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let err = PlotError::InvalidDimensions("0x0 canvas".to_string());
        assert_eq!(err.code(), "PLOT_003");
        assert_eq!(err.category(), "plot");
        assert_eq!(err.to_string(), "Invalid dimensions: 0x0 canvas");

        let io: PlotError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(io.code(), "PLOT_001");
    }
}
