//! Stages of the contact-hum pipeline.
//!
//! - `hum` - Mains hum carrier (four harmonic partials)
//! - `smoothing` - Centered moving average with truncated edges
//! - `contact` - Contact envelope (smoothing + min-max normalization)
//! - `friction` - Absolute rate of change of the envelope
//! - `gate` - Connection mask from the gate threshold
//! - `spark` - Friction-scaled Gaussian transients and the final mix

pub mod contact;
pub mod friction;
pub mod gate;
pub mod hum;
pub mod smoothing;
pub mod spark;

pub use contact::{normalize_min_max, ContactEnvelope, Normalization};
pub use friction::friction;
pub use gate::{connection_mask, count_connected};
pub use hum::{HumCarrier, HUM_PARTIALS};
pub use smoothing::moving_average;
pub use spark::{hard_clip, mix, spark_transients};
