//! contacthum End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the full render path:
//!
//! - Rendering: params -> WAV, PNG and envelope files
//! - Validation: output headers match the requested parameters
//! - **Determinism**: byte-identical output across runs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p contacthum-tests
//! ```

pub mod determinism;
pub mod fixtures;
pub mod format_validators;

// Re-export commonly used items
pub use determinism::{samples_to_bytes, verify_determinism, DeterminismResult, DiffInfo};
pub use format_validators::{validate_png, validate_wav, FormatError, PngInfo, WavInfo};
