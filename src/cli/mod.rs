//! Command-line front end: preset graphs and command implementations.

pub mod commands;
pub mod presets;

pub use presets::{preset, PRESET_NAMES};
