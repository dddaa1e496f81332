//! Shared geometry and parameter types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2-D point in canvas units (millimetres)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Draw layer of a generated outline
///
/// Layer membership only selects the output group; it carries no geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Primary cut outline
    Shape,
    /// Interior cutouts: finger slots, battery holes, inserts
    Hole,
    /// Reference and etch marks, not cut
    Mark,
}

impl Layer {
    /// All layers in output order
    pub const ALL: [Layer; 3] = [Layer::Shape, Layer::Hole, Layer::Mark];

    /// Stroke colour used for this layer in the emitted document
    pub fn stroke(&self) -> &'static str {
        match self {
            Layer::Shape => "black",
            Layer::Hole => "red",
            Layer::Mark => "blue",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Shape => write!(f, "shape"),
            Layer::Hole => write!(f, "hole"),
            Layer::Mark => write!(f, "mark"),
        }
    }
}

/// Fully resolved user dimensions of a battery case
///
/// Produced from the user-facing settings once presets are looked up and
/// validation has passed. All lengths are in millimetres; the corner,
/// flex, and tooth factors are multiples of material thickness where noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseParameters {
    /// Number of hole rows across the hexagon (odd)
    pub dimension: u32,
    /// Battery height
    pub height: f64,
    /// Battery hole diameter
    pub hole: f64,
    pub kerf: f64,
    /// Length of the stretch corner in material thicknesses
    pub corner_length: f64,
    /// Reduction factor of the stretch material
    pub stretch: f64,
    pub horizontal_finger: f64,
    pub vertical_finger: f64,
    /// Padding around holes
    pub padding: f64,
    /// Extra padding between holes and wall
    pub outside_padding: f64,
    pub extra_height: f64,
    /// Material thickness
    pub thickness: f64,
    /// Extra play for the lid
    pub lid: f64,
    /// Rounding radius of the wall teeth
    pub tooth: f64,
    /// Spacing between flex lines, in thicknesses
    pub flex_width: f64,
    /// Length of flex cuts, in thicknesses
    pub flex_cut: f64,
    /// Gap between flex cuts, in thicknesses
    pub flex_gap: f64,
    /// How much smaller the plug is than its opening
    pub plug_play: f64,
}

impl Default for CaseParameters {
    fn default() -> Self {
        Self {
            dimension: 5,
            height: 50.5,
            hole: 14.5,
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
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_strokes() {
        assert_eq!(Layer::Shape.stroke(), "black");
        assert_eq!(Layer::Hole.stroke(), "red");
        assert_eq!(Layer::Mark.stroke(), "blue");
        assert_eq!(Layer::ALL.len(), 3);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }
}
