//! Type definitions for the Battery Case Maker

use crate::turtle::SvgTurtle;
use hexcase_core::{CaseParameters, Layer};
use serde::Serialize;
use std::fmt;

/// Derived geometry of a battery case
///
/// Computed once by the solver and read by every panel generator.
/// `params` holds the user dimensions with the padding values the
/// feasibility search settled on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseGeometry {
    pub params: CaseParameters,
    /// Number of padding increases the solver needed
    pub padding_steps: u32,
    pub kerf2: f64,
    /// Centre distance of neighbouring battery holes
    pub grid: f64,
    /// Battery hole radius
    pub radius: f64,
    /// Length of the stretch corner
    pub corner: f64,
    /// Corner length corrected for stretch
    pub corner_s: f64,
    pub corner_radius: f64,
    pub plug_radius: f64,
    pub corner_inset: f64,
    pub plug_inset: f64,
    pub interior_edge: f64,
    pub opening_edge: f64,
    pub plug_edge: f64,
    pub disc_radius: f64,
    pub exterior_edge: f64,
    pub interior_leg: f64,
    pub n_hor_fingers: u32,
    pub exterior_leg: f64,
    pub wall_leg: f64,
    pub exterior_slot: f64,
    pub n_ver_fingers: u32,
    /// Heights of the wall assembly slots
    pub slots: [f64; 2],
}

/// Hexagonal panel outlines, each with its own generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    /// Rounded hexagon with finger slots, holds the battery grid
    Interior,
    /// Base plate with tab cutouts
    Bottom,
    /// Top ring with tab cutouts
    Rim,
    /// Hexagon cut from the rim
    Opening,
    /// Plain exterior hexagon
    Lid,
    /// Removable insert for the opening
    Plug,
    /// Plug outline etched on the lid
    PlugMark,
    /// Round insert
    Disc,
    /// Disc outline etched on the lid
    DiscMark,
}

impl PanelKind {
    pub const ALL: [PanelKind; 9] = [
        PanelKind::Interior,
        PanelKind::Bottom,
        PanelKind::Rim,
        PanelKind::Opening,
        PanelKind::Lid,
        PanelKind::Plug,
        PanelKind::PlugMark,
        PanelKind::Disc,
        PanelKind::DiscMark,
    ];

    /// Layer the panel's primary outline lands on
    pub fn layer(&self) -> Layer {
        match self {
            PanelKind::Interior
            | PanelKind::Bottom
            | PanelKind::Rim
            | PanelKind::Opening
            | PanelKind::Lid => Layer::Shape,
            PanelKind::Plug | PanelKind::Disc => Layer::Hole,
            PanelKind::PlugMark | PanelKind::DiscMark => Layer::Mark,
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PanelKind::Interior => "interior",
            PanelKind::Bottom => "bottom",
            PanelKind::Rim => "rim",
            PanelKind::Opening => "opening",
            PanelKind::Lid => "lid",
            PanelKind::Plug => "plug",
            PanelKind::PlugMark => "plug_mark",
            PanelKind::Disc => "disc",
            PanelKind::DiscMark => "disc_mark",
        };
        f.write_str(name)
    }
}

/// One output element
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Serialized turtle path
    Path(String),
    Circle { cx: f64, cy: f64, r: f64 },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Path(d) => write!(f, "<path d=\"{}\"/>", d),
            Element::Circle { cx, cy, r } => {
                write!(f, "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\"/>", cx, cy, r)
            }
            Element::Rect {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/>",
                x, y, width, height
            ),
        }
    }
}

/// Per-layer ordered element lists for one generation session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerSet {
    shape: Vec<Element>,
    hole: Vec<Element>,
    mark: Vec<Element>,
}

impl LayerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, layer: Layer, element: Element) {
        self.layer_mut(layer).push(element);
    }

    /// Append a turtle's path. Empty paths are skipped.
    pub fn push_path(&mut self, layer: Layer, turtle: &SvgTurtle) {
        if !turtle.is_empty() {
            self.push(layer, Element::Path(turtle.serialize()));
        }
    }

    pub fn elements(&self, layer: Layer) -> &[Element] {
        match layer {
            Layer::Shape => &self.shape,
            Layer::Hole => &self.hole,
            Layer::Mark => &self.mark,
        }
    }

    /// Append every element of `other`, keeping per-layer order
    pub fn merge(&mut self, other: LayerSet) {
        self.shape.extend(other.shape);
        self.hole.extend(other.hole);
        self.mark.extend(other.mark);
    }

    pub fn len(&self) -> usize {
        self.shape.len() + self.hole.len() + self.mark.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn layer_mut(&mut self, layer: Layer) -> &mut Vec<Element> {
        match layer {
            Layer::Shape => &mut self.shape,
            Layer::Hole => &mut self.hole,
            Layer::Mark => &mut self.mark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_markup() {
        assert_eq!(
            Element::Circle {
                cx: 1.0,
                cy: 2.5,
                r: 7.25
            }
            .to_string(),
            "<circle cx=\"1.00\" cy=\"2.50\" r=\"7.25\"/>"
        );
        assert_eq!(
            Element::Rect {
                x: 0.0,
                y: 1.0,
                width: 4.9,
                height: 2.9
            }
            .to_string(),
            "<rect x=\"0.00\" y=\"1.00\" width=\"4.90\" height=\"2.90\"/>"
        );
        assert_eq!(
            Element::Path("M 0.00,0.00 h 1.00".to_string()).to_string(),
            "<path d=\"M 0.00,0.00 h 1.00\"/>"
        );
    }

    #[test]
    fn test_layer_set_push_and_merge() {
        let mut layers = LayerSet::new();
        let mut turtle = SvgTurtle::new(0.0, 0.0);
        layers.push_path(Layer::Shape, &turtle);
        assert!(layers.is_empty());

        turtle.forward(2.0);
        layers.push_path(Layer::Shape, &turtle);

        let mut other = LayerSet::new();
        other.push(
            Layer::Hole,
            Element::Circle {
                cx: 0.0,
                cy: 0.0,
                r: 1.0,
            },
        );
        layers.merge(other);

        assert_eq!(layers.len(), 2);
        assert_eq!(layers.elements(Layer::Shape).len(), 1);
        assert_eq!(layers.elements(Layer::Hole).len(), 1);
        assert!(layers.elements(Layer::Mark).is_empty());
    }

    #[test]
    fn test_panel_layers() {
        assert_eq!(PanelKind::Interior.layer(), Layer::Shape);
        assert_eq!(PanelKind::Plug.layer(), Layer::Hole);
        assert_eq!(PanelKind::DiscMark.layer(), Layer::Mark);
        assert_eq!(PanelKind::PlugMark.to_string(), "plug_mark");
    }
}
