//! SVG document assembly
//!
//! Lays every panel out on a fixed canvas of three panel boxes by two,
//! with the unrolled wall strip below, and renders one group per layer.

use super::panels::{draw_grid, draw_panel};
use super::types::{CaseGeometry, LayerSet, PanelKind};
use super::wall::{draw_wall, wall_height};
use crate::error::CamToolResult;
use hexcase_core::{Layer, Point};
use std::io;
use tracing::info;

/// Margin added around each panel box (mm)
const BOX_MARGIN: f64 = 5.0;

/// Fraction of the hole grid width used as the wall strip's left margin
const WALL_INSET: f64 = 0.05;

/// A composed case drawing
#[derive(Debug, Clone, PartialEq)]
pub struct CaseDocument {
    /// Canvas width (mm)
    pub width: f64,
    /// Canvas height (mm)
    pub height: f64,
    pub layers: LayerSet,
}

impl CaseDocument {
    /// Side of the square box reserved for one hexagonal panel
    pub fn box_size(geometry: &CaseGeometry) -> f64 {
        2.0 * geometry.exterior_edge + BOX_MARGIN
    }

    /// Place every panel of the case on the canvas
    pub fn compose(geometry: &CaseGeometry) -> Self {
        let p = &geometry.params;
        let b = Self::box_size(geometry);
        let at = |col: f64, row: f64| Point::new(col * b, row * b);
        let mut layers = LayerSet::new();

        for center in [at(0.5, 0.5), at(1.5, 0.5)] {
            draw_grid(geometry, center, &mut layers);
            draw_panel(PanelKind::Interior, geometry, center, &mut layers);
        }
        draw_panel(PanelKind::Bottom, geometry, at(0.5, 1.5), &mut layers);
        for kind in [PanelKind::Rim, PanelKind::Opening, PanelKind::Disc] {
            draw_panel(kind, geometry, at(1.5, 1.5), &mut layers);
        }
        draw_panel(PanelKind::Plug, geometry, at(2.5, 0.5), &mut layers);
        for kind in [PanelKind::Lid, PanelKind::PlugMark, PanelKind::DiscMark] {
            draw_panel(kind, geometry, at(2.5, 1.5), &mut layers);
        }

        let wall_origin = Point::new(
            WALL_INSET * geometry.grid * f64::from(p.dimension),
            2.0 * b,
        );
        draw_wall(geometry, wall_origin, wall_height(geometry), &mut layers);

        let document = Self {
            width: 3.0 * b,
            height: 2.0 * b + p.height + p.extra_height + 3.0 * p.thickness + BOX_MARGIN,
            layers,
        };
        info!(
            "Composed case drawing {:.2} x {:.2} mm with {} elements",
            document.width,
            document.height,
            document.layers.len()
        );
        document
    }

    /// Render the drawing as a standalone SVG document
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            "<svg viewBox=\"0 0 {w:.2} {h:.2}\" width=\"{w:.2}mm\" height=\"{h:.2}mm\" stroke-width=\"0.1\" xmlns=\"http://www.w3.org/2000/svg\">\n",
            w = self.width,
            h = self.height
        );
        for layer in Layer::ALL {
            svg.push_str(&format!("<g fill=\"none\" stroke=\"{}\">\n", layer.stroke()));
            for element in self.layers.elements(layer) {
                svg.push_str(&element.to_string());
                svg.push('\n');
            }
            svg.push_str("</g>\n");
        }
        svg.push_str("</svg>\n");
        svg
    }

    /// Write the SVG document to `writer`
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> CamToolResult<()> {
        writer.write_all(self.to_svg().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
