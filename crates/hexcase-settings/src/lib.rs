//! HexCase Settings Crate
//!
//! Handles the user-facing configuration surface: defaults, file
//! persistence, validation, and resolution into core case parameters.

pub mod config;
pub mod error;

pub use config::{CaseSettings, HoleSpec};
pub use error::{SettingsError, SettingsResult};
