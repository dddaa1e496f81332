//! Geometry solver
//!
//! Derives every secondary dimension of the case from the user
//! parameters, then widens the padding until the straight leg left at
//! each exterior corner is long enough to cut.

use super::types::CaseGeometry;
use crate::error::{CamToolError, CamToolResult};
use hexcase_core::CaseParameters;
use std::f64::consts::PI;
use tracing::{debug, info};

/// Shortest exterior corner leg that still cuts cleanly (mm)
pub const MIN_EXTERIOR_LEG: f64 = 2.0;

/// Outside padding added per search step (mm)
pub const OUTSIDE_PADDING_STEP: f64 = 0.5;

/// Hole padding added per search step (mm)
pub const PADDING_STEP: f64 = 0.2;

/// Upper bound on search steps before giving up
pub const MAX_SOLVER_ITERATIONS: u32 = 1000;

/// Distance between the two wall assembly slots (mm)
const SLOT_SPACING: f64 = 15.0;

/// Share of the battery height at which the lower wall slot sits
const SLOT_HEIGHT_RATIO: f64 = 0.45;

/// Closed-form derivation of the case geometry for fixed paddings
pub fn derive(params: &CaseParameters, padding_steps: u32) -> CaseGeometry {
    let sqrt3 = 3f64.sqrt();
    let p = params;

    let grid = p.hole + p.padding;
    let corner = p.corner_length * p.thickness;
    let corner_s = corner * p.stretch;
    let corner_radius = 3.0 * corner_s / PI;
    let plug_radius = corner_radius - p.thickness;
    let corner_inset = corner_s * sqrt3 / PI;
    let plug_inset = plug_radius / sqrt3;
    let interior_edge = grid * f64::from(p.dimension) * 0.5 + p.outside_padding;
    let opening_edge = interior_edge - p.thickness;
    let plug_edge = opening_edge.min(0.5 * sqrt3 * interior_edge) - p.plug_play;
    let disc_radius = 0.45 * (sqrt3 - 1.0) * plug_edge + plug_inset;
    let exterior_edge = interior_edge + 2.0 * p.thickness;
    let interior_leg = (interior_edge - p.horizontal_finger - p.kerf) / 2.0 - corner_inset;

    let finger_length = interior_edge - 2.0 * corner_inset;
    let n_hor_fingers = ((finger_length / p.horizontal_finger / 2.0).floor().max(1.0)) as u32;
    let finger_run = f64::from(2 * n_hor_fingers - 1) * p.horizontal_finger;
    let exterior_leg = (finger_length - finger_run + p.kerf) / 2.0;
    let wall_leg = (interior_edge - corner - finger_run + p.kerf) / 2.0;
    let exterior_slot = (interior_edge - p.horizontal_finger + p.kerf) / 2.0;
    let n_ver_fingers = ((p.height + p.extra_height) / p.vertical_finger).floor().max(0.0) as u32;

    let top_slot = p.extra_height + p.thickness + SLOT_HEIGHT_RATIO * p.height;

    CaseGeometry {
        params: p.clone(),
        padding_steps,
        kerf2: p.kerf / 2.0,
        grid,
        radius: p.hole / 2.0,
        corner,
        corner_s,
        corner_radius,
        plug_radius,
        corner_inset,
        plug_inset,
        interior_edge,
        opening_edge,
        plug_edge,
        disc_radius,
        exterior_edge,
        interior_leg,
        n_hor_fingers,
        exterior_leg,
        wall_leg,
        exterior_slot,
        n_ver_fingers,
        slots: [top_slot, top_slot + SLOT_SPACING],
    }
}

/// True when the exterior corner leg is long enough to cut
pub fn is_feasible(geometry: &CaseGeometry) -> bool {
    geometry.exterior_leg > MIN_EXTERIOR_LEG
}

/// Search for the smallest padding increase that yields a cuttable case.
///
/// Both paddings only grow, so the caller's parameters are never touched;
/// the returned geometry carries the paddings that were settled on.
pub fn solve(params: &CaseParameters) -> CamToolResult<CaseGeometry> {
    let mut current = params.clone();
    let mut exterior_leg = f64::NAN;

    for step in 0..MAX_SOLVER_ITERATIONS {
        let geometry = derive(&current, step);
        if is_feasible(&geometry) {
            info!(
                "Case geometry solved after {} padding steps: interior edge {:.2} mm, {} horizontal / {} vertical fingers",
                step, geometry.interior_edge, geometry.n_hor_fingers, geometry.n_ver_fingers
            );
            return Ok(geometry);
        }

        debug!(
            "Exterior leg {:.3} mm too short at padding {:.2}/{:.2}, widening",
            geometry.exterior_leg, current.padding, current.outside_padding
        );
        exterior_leg = geometry.exterior_leg;
        current.outside_padding += OUTSIDE_PADDING_STEP;
        current.padding += PADDING_STEP;
    }

    Err(CamToolError::Infeasible {
        iterations: MAX_SOLVER_ITERATIONS,
        exterior_leg,
    })
}
