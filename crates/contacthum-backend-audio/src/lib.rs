//! contacthum Audio Backend
//!
//! This crate synthesizes the sound of an intermittent electrical contact:
//! a mains hum that cuts in and out as a stochastic contact envelope crosses
//! a gate threshold, with spark transients wherever the contact changes
//! quickly.
//!
//! # Pipeline
//!
//! 1. **Hum carrier** - 60/120/180/300 Hz partials scaled by the hum gain
//! 2. **Contact envelope** - uniform noise, moving average, min-max normalization
//! 3. **Friction** - absolute first difference of the envelope
//! 4. **Synthesis** - gated hum plus friction-scaled Gaussian sparks, hard clipped
//!
//! # Determinism
//!
//! Every call builds its own PCG32 generator from [`rng::CONTACT_SEED`] and
//! draws the uniform sequence before the normal sequence. Identical
//! parameters always produce bit-identical buffers, and concurrent calls
//! share no state.
//!
//! # Example
//!
//! ```
//! use contacthum_backend_audio::synthesize_seeded;
//! use contacthum_spec::SynthesisParams;
//!
//! let params = SynthesisParams::default().with_duration(1.0);
//! let output = synthesize_seeded(&params);
//!
//! assert_eq!(output.audio.len(), 44100);
//! assert!(output.audio.iter().all(|s| (-1.0..=1.0).contains(s)));
//! ```
//!
//! # Crate Structure
//!
//! - [`generate`] - Synthesis entry points and output types
//! - [`rng`] - Call-scoped deterministic RNG and noise draws
//! - [`synthesis`] - Pipeline stages
//! - [`time_axis`] - Sample instants
//! - [`wav`] - Deterministic 16-bit WAV encoder

pub mod error;
pub mod generate;
pub mod rng;
pub mod synthesis;
pub mod time_axis;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use generate::{
    render, synthesize, synthesize_seeded, RenderResult, SynthesisOutput, SynthesisStats,
};
pub use synthesis::Normalization;
pub use time_axis::TimeAxis;
pub use wav::WavResult;
