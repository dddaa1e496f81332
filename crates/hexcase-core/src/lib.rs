//! # HexCase Core
//!
//! Core types, errors, and reference data shared by the HexCase crates.
//! Provides the resolved case parameters consumed by the geometry solver,
//! the draw-layer model, and the battery size presets.

pub mod data;
pub mod error;
pub mod types;

pub use data::batteries::{BatteryPreset, BatterySize};
pub use error::ConfigError;
pub use types::{CaseParameters, Layer, Point};
