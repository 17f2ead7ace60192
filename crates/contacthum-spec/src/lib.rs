//! contacthum Parameter Library
//!
//! This crate provides the types, presets, validation, and hashing for the
//! parameters that drive the contact-hum synthesizer.
//!
//! # Overview
//!
//! A synthesis run is fully described by six scalars:
//!
//! - **Duration** and **sample rate** fix the buffer length
//! - **Gate threshold** decides when the contact counts as connected
//! - **Smoothing window** sets how slowly the contact strength drifts
//! - **Spark gain** and **hum gain** scale the two audible components
//!
//! # Example
//!
//! ```
//! use contacthum_spec::{SynthesisParams, validate_params};
//! use contacthum_spec::hash::canonical_params_hash;
//!
//! let params = SynthesisParams::default()
//!     .with_duration(2.0)
//!     .with_gate_threshold(0.4);
//!
//! let result = validate_params(&params);
//! assert!(result.is_ok());
//!
//! let hash = canonical_params_hash(&params).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`hash`]: Canonical parameter hashing
//! - [`params`]: The synthesis parameter set
//! - [`preset`]: Named parameter presets
//! - [`ranges`]: Documented control ranges
//! - [`validation`]: Parameter validation

pub mod error;
pub mod hash;
pub mod params;
pub mod preset;
pub mod ranges;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    BackendError, ErrorCode, GenerationError, SpecError, ValidationError, ValidationResult,
    ValidationWarning, WarningCode,
};
pub use hash::{canonical_params_hash, canonical_value_hash};
pub use params::SynthesisParams;
pub use preset::{find_preset, Preset, PRESETS};
pub use ranges::{ControlRange, MAX_SAMPLE_RATE, REFERENCE_SAMPLE_RATE};
pub use validation::validate_params;
