//! contacthum CLI library.
//!
//! This crate provides the core functionality for the contacthum CLI:
//! parameter input (params files, presets, flag overrides) and the
//! `render`, `validate`, `presets` and `inspect` commands.

pub mod commands;
pub mod input;
