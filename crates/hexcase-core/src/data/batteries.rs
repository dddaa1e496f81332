//! Battery size presets
//!
//! Static lookup of common cylindrical cell sizes. Dimensions are nominal
//! values plus a little clearance, in millimetres.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical size of a cylindrical cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatterySize {
    pub diameter: f64,
    pub height: f64,
}

/// Named battery presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatteryPreset {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    C,
    D,
}

impl BatteryPreset {
    pub const ALL: [BatteryPreset; 4] = [
        BatteryPreset::Aaa,
        BatteryPreset::Aa,
        BatteryPreset::C,
        BatteryPreset::D,
    ];

    pub fn size(&self) -> BatterySize {
        let (diameter, height) = match self {
            BatteryPreset::Aaa => (10.5, 44.5),
            BatteryPreset::Aa => (14.5, 50.5),
            BatteryPreset::C => (26.2, 50.0),
            BatteryPreset::D => (34.2, 61.5),
        };
        BatterySize { diameter, height }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BatteryPreset::Aaa => "AAA",
            BatteryPreset::Aa => "AA",
            BatteryPreset::C => "C",
            BatteryPreset::D => "D",
        }
    }
}

impl fmt::Display for BatteryPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BatteryPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BatteryPreset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| format!("Unknown battery preset: {}", s))
    }
}
