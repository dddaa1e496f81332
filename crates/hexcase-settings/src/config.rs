//! Case configuration for HexCase
//!
//! Provides the user-facing option set, its defaults, and file handling.
//! Settings are stored as TOML or JSON and resolved into
//! [`CaseParameters`] once presets are looked up and every value has been
//! validated.

use crate::error::{SettingsError, SettingsResult};
use hexcase_core::{BatteryPreset, CaseParameters, ConfigError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Battery hole selection: a named preset or an explicit diameter in mm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HoleSpec {
    Preset(BatteryPreset),
    Diameter(f64),
}

impl Default for HoleSpec {
    fn default() -> Self {
        Self::Preset(BatteryPreset::Aa)
    }
}

impl fmt::Display for HoleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(preset) => write!(f, "{}", preset),
            Self::Diameter(d) => write!(f, "{}", d),
        }
    }
}

impl FromStr for HoleSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(preset) = s.parse::<BatteryPreset>() {
            return Ok(Self::Preset(preset));
        }
        s.parse::<f64>()
            .map(Self::Diameter)
            .map_err(|_| ConfigError::UnknownPreset(s.to_string()))
    }
}

/// Complete set of user options for one battery case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseSettings {
    /// Grid dimension (odd)
    pub dimension: u32,
    /// Height of battery; taken from the preset when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Hole diameter (mm) or preset name
    pub hole: HoleSpec,
    pub kerf: f64,
    /// Length of stretch corner in material thicknesses
    pub corner_length: f64,
    /// Reduction factor of stretch material
    pub stretch: f64,
    /// Width of horizontal fingers
    pub horizontal_finger: f64,
    /// Width of vertical fingers
    pub vertical_finger: f64,
    /// Padding around holes
    pub padding: f64,
    /// Extra padding between holes and wall
    pub outside_padding: f64,
    /// Extra vertical space
    pub extra_height: f64,
    /// Thickness of material
    pub thickness: f64,
    /// How much extra play to give the lid
    pub lid: f64,
    /// How much to round the edges of the teeth
    pub tooth: f64,
    /// Spacing (in material thickness) between flex lines
    pub flex_width: f64,
    /// Length (in material thickness) of flex cuts
    pub flex_cut: f64,
    /// Gap (in material thickness) between flex cuts
    pub flex_gap: f64,
    /// How much smaller to make the plug than the hole
    pub plug_play: f64,
    /// Report computed parameter values
    pub verbose: bool,
}

impl Default for CaseSettings {
    fn default() -> Self {
        Self {
            dimension: 5,
            height: None,
            hole: HoleSpec::default(),
            kerf: 0.1,
            corner_length: 4.0,
            stretch: 1.05,
            horizontal_finger: 5.0,
            vertical_finger: 15.0,
            padding: 1.5,
            outside_padding: 4.0,
            extra_height: 2.0,
            thickness: 3.0,
            lid: 0.2,
            tooth: 0.8,
            flex_width: 0.5,
            flex_cut: 5.0,
            flex_gap: 1.0,
            plug_play: 0.8,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl CaseSettings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings file location: `<config_dir>/hexcase/case.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hexcase").join("case.toml"))
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::of(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let settings: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        tracing::debug!("Loaded case settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match FileFormat::of(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        tracing::debug!("Saved case settings to {}", path.display());
        Ok(())
    }

    /// Set a single option from its textual form.
    ///
    /// Keys accept either `snake_case` or `kebab-case` spelling.
    pub fn set(&mut self, key: &str, value: &str) -> SettingsResult<()> {
        let key = key.replace('-', "_");
        let number = |value: &str| -> Result<f64, ConfigError> {
            value
                .parse::<f64>()
                .map_err(|_| ConfigError::invalid(key.as_str(), format!("'{}' is not a number", value)))
        };

        match key.as_str() {
            "dimension" => {
                self.dimension = value.parse().map_err(|_| {
                    ConfigError::invalid("dimension", format!("'{}' is not a whole number", value))
                })?
            }
            "height" => self.height = Some(number(value)?),
            "hole" => self.hole = value.parse()?,
            "kerf" => self.kerf = number(value)?,
            "corner_length" => self.corner_length = number(value)?,
            "stretch" => self.stretch = number(value)?,
            "horizontal_finger" => self.horizontal_finger = number(value)?,
            "vertical_finger" => self.vertical_finger = number(value)?,
            "padding" => self.padding = number(value)?,
            "outside_padding" => self.outside_padding = number(value)?,
            "extra_height" => self.extra_height = number(value)?,
            "thickness" => self.thickness = number(value)?,
            "lid" => self.lid = number(value)?,
            "tooth" => self.tooth = number(value)?,
            "flex_width" => self.flex_width = number(value)?,
            "flex_cut" => self.flex_cut = number(value)?,
            "flex_gap" => self.flex_gap = number(value)?,
            "plug_play" => self.plug_play = number(value)?,
            "verbose" => {
                self.verbose = value.parse().map_err(|_| {
                    ConfigError::invalid("verbose", format!("'{}' is not true or false", value))
                })?
            }
            _ => return Err(SettingsError::UnknownKey(key.clone())),
        }
        Ok(())
    }

    /// Validate settings without keeping the resolved parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve().map(|_| ())
    }

    /// Look up the hole preset, check every value, and produce the
    /// parameters the geometry solver works from.
    pub fn resolve(&self) -> Result<CaseParameters, ConfigError> {
        if self.dimension % 2 == 0 {
            return Err(ConfigError::EvenDimension(self.dimension));
        }

        let (hole, height) = match self.hole {
            HoleSpec::Preset(preset) => {
                let size = preset.size();
                (size.diameter, self.height.unwrap_or(size.height))
            }
            HoleSpec::Diameter(d) => (d, self.height.ok_or(ConfigError::MissingHeight)?),
        };

        let positive = [
            ("hole", hole),
            ("height", height),
            ("corner_length", self.corner_length),
            ("stretch", self.stretch),
            ("horizontal_finger", self.horizontal_finger),
            ("vertical_finger", self.vertical_finger),
            ("thickness", self.thickness),
            ("tooth", self.tooth),
            ("flex_width", self.flex_width),
            ("flex_cut", self.flex_cut),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(name, format!("must be > 0, got {}", value)));
            }
        }

        let non_negative = [
            ("kerf", self.kerf),
            ("padding", self.padding),
            ("outside_padding", self.outside_padding),
            ("extra_height", self.extra_height),
            ("lid", self.lid),
            ("flex_gap", self.flex_gap),
            ("plug_play", self.plug_play),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(name, format!("must be >= 0, got {}", value)));
            }
        }

        if self.kerf >= self.horizontal_finger || self.kerf >= self.thickness {
            return Err(ConfigError::invalid(
                "kerf",
                "must be smaller than both the horizontal finger and the material thickness",
            ));
        }

        Ok(CaseParameters {
            dimension: self.dimension,
            height,
            hole,
            kerf: self.kerf,
            corner_length: self.corner_length,
            stretch: self.stretch,
            horizontal_finger: self.horizontal_finger,
            vertical_finger: self.vertical_finger,
            padding: self.padding,
            outside_padding: self.outside_padding,
            extra_height: self.extra_height,
            thickness: self.thickness,
            lid: self.lid,
            tooth: self.tooth,
            flex_width: self.flex_width,
            flex_cut: self.flex_cut,
            flex_gap: self.flex_gap,
            plug_play: self.plug_play,
        })
    }
}
