//! Reference data
//!
//! This module provides the battery size presets used to size the hole grid
//! and the case height.

pub mod batteries;
