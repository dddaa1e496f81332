//! # HexCase CAM Tools
//!
//! Path generation for laser-cut hexagonal battery cases.
//!
//! ## Modules
//!
//! - **Turtle**: relative-motion path engine that emits SVG path data
//! - **Battery Case**: geometry solver, panel generators, wall strip and
//!   document composer

pub mod battery_case;
pub mod error;
pub mod turtle;

pub use battery_case::{
    BatteryCaseMaker, CaseDocument, CaseGeometry, Element, LayerSet, PanelKind,
};
pub use error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
pub use turtle::{PathSegment, SvgTurtle};
