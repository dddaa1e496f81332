//! Battery Case Maker
//!
//! Generates the cutting layout of a hexagonal battery case made of
//! finger-jointed panels and a flexible wall strip. The solver settles the
//! geometry once; every generator then only reads it.

pub mod document;
pub mod panels;
pub mod solver;
mod types;
pub mod wall;

pub use document::CaseDocument;
pub use types::{CaseGeometry, Element, LayerSet, PanelKind};

use crate::error::{CamToolResult, ParameterError, ParameterResult};
use hexcase_core::CaseParameters;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct BatteryCaseMaker {
    geometry: CaseGeometry,
}

impl BatteryCaseMaker {
    /// Validate the parameters and solve the case geometry
    pub fn new(params: CaseParameters) -> CamToolResult<Self> {
        Self::validate_parameters(&params)?;
        let geometry = solver::solve(&params)?;
        Ok(Self { geometry })
    }

    fn validate_parameters(params: &CaseParameters) -> ParameterResult<()> {
        if params.dimension == 0 || params.dimension % 2 == 0 {
            return Err(ParameterError::InvalidValue {
                name: "dimension".to_string(),
                reason: format!("{} is not an odd number of rows", params.dimension),
            });
        }

        let positive = [
            ("height", params.height),
            ("hole", params.hole),
            ("thickness", params.thickness),
            ("corner_length", params.corner_length),
            ("stretch", params.stretch),
            ("horizontal_finger", params.horizontal_finger),
            ("vertical_finger", params.vertical_finger),
            ("flex_width", params.flex_width),
            ("flex_cut", params.flex_cut),
            ("tooth", params.tooth),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::InvalidDimensions(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("padding", params.padding),
            ("outside_padding", params.outside_padding),
            ("extra_height", params.extra_height),
            ("lid", params.lid),
            ("flex_gap", params.flex_gap),
            ("plug_play", params.plug_play),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ParameterError::InvalidValue {
                    name: name.to_string(),
                    reason: format!("must not be negative, got {}", value),
                });
            }
        }

        let max_kerf = params.horizontal_finger.min(params.thickness);
        if !params.kerf.is_finite() || params.kerf < 0.0 || params.kerf >= max_kerf {
            return Err(ParameterError::OutOfRange {
                name: "kerf".to_string(),
                value: params.kerf,
                min: 0.0,
                max: max_kerf,
            });
        }

        Ok(())
    }

    /// The solved geometry
    pub fn geometry(&self) -> &CaseGeometry {
        &self.geometry
    }

    /// Trace every panel and compose the drawing
    pub fn generate(&self) -> CaseDocument {
        debug!(
            "Generating case: dimension {}, hole {:.2} mm, height {:.2} mm",
            self.geometry.params.dimension, self.geometry.params.hole, self.geometry.params.height
        );
        CaseDocument::compose(&self.geometry)
    }
}
