//! CLI command implementations

pub mod failure;
pub mod inspect;
pub mod json_output;
pub mod presets;
pub mod render;
pub mod validate;

mod reporting;
