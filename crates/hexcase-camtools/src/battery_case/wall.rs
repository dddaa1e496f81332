//! Unrolled case wall
//!
//! The wall is one long strip wrapped around the interior hexagon. Its
//! top and bottom edges carry the finger tabs that key into the interior
//! panels, the corner regions get a flex-hinge perforation so the strip
//! can bend, and the two short ends close with interlocking rounded teeth.

use super::types::{CaseGeometry, Element, LayerSet};
use crate::turtle::SvgTurtle;
use hexcase_core::{Layer, Point};
use tracing::{debug, warn};

/// Share of a vertical finger taken by the straight part of a tooth
const TOOTH_FLAT: f64 = 0.66;

/// Number of wall faces that carry assembly slots
const SLOTTED_FACES: u32 = 5;

/// Height of the wall strip: battery, headroom and one material thickness
pub fn wall_height(geometry: &CaseGeometry) -> f64 {
    let p = &geometry.params;
    p.height + p.extra_height + p.thickness
}

/// Trace the wall outline, flex hinges and assembly slots.
///
/// `origin` is the top left corner of the strip; the outline itself starts
/// one thickness lower so the tabs on the top edge stay inside the box.
pub fn draw_wall(geometry: &CaseGeometry, origin: Point, height: f64, layers: &mut LayerSet) {
    let t = geometry.params.thickness;
    debug!(
        "Drawing wall strip at ({:.2}, {:.2}), height {:.2}",
        origin.x, origin.y, height
    );

    let mut turtle = SvgTurtle::new(origin.x, origin.y + t);
    horizontal_edge(geometry, &mut turtle, height, Some(&mut *layers));
    turtle.right(90.0);
    vertical_edge(geometry, &mut turtle, height);
    turtle.right(90.0);
    horizontal_edge(geometry, &mut turtle, height, None);
    turtle.pen_up();
    turtle.left(90.0);
    turtle.backward(height);
    turtle.pen_down();
    vertical_edge(geometry, &mut turtle, height);
    layers.push_path(Layer::Shape, &turtle);

    assembly_slots(geometry, origin, layers);
}

/// One long edge of the strip.
///
/// Each of the six faces starts with a corner section set back by one
/// thickness; all but the last face then carry the finger tabs. When
/// `flex` is given, a hinge pattern is traced over every corner section.
fn horizontal_edge(
    g: &CaseGeometry,
    turtle: &mut SvgTurtle,
    height: f64,
    mut flex: Option<&mut LayerSet>,
) {
    let p = &g.params;
    let t = p.thickness;
    let half_face = 0.5 * g.interior_edge - 0.5 * g.corner;

    turtle.forward(half_face);
    for side in 0..6 {
        turtle.left(90.0);
        turtle.forward(t);
        turtle.right(90.0);
        if let Some(layers) = flex.as_deref_mut() {
            let hinge = flex_hinge(g, turtle.position(), height + 2.0 * t);
            layers.push_path(Layer::Hole, &hinge);
        }
        turtle.forward(g.corner);
        turtle.right(90.0);
        turtle.forward(t);
        turtle.left(90.0);
        if side == 5 {
            break;
        }

        turtle.forward(g.wall_leg - 0.5 * p.kerf);
        for finger in 0..g.n_hor_fingers {
            if finger > 0 {
                turtle.forward(p.horizontal_finger - p.kerf);
            }
            turtle.left(90.0);
            turtle.forward(t);
            turtle.right(90.0);
            turtle.forward(p.horizontal_finger + p.kerf);
            turtle.right(90.0);
            turtle.forward(t);
            turtle.left(90.0);
        }
        turtle.forward(g.wall_leg - 0.5 * p.kerf);
    }
    turtle.forward(half_face);
}

/// One short end of the strip, heading down.
///
/// The teeth are built from four arcs of the tooth radius joined by
/// straight runs; the run after each tooth is measured to the next pitch
/// line so rounding never accumulates, and the last one lands on the end.
fn vertical_edge(g: &CaseGeometry, turtle: &mut SvgTurtle, height: f64) {
    let p = &g.params;
    let start_y = turtle.y();
    let end_y = start_y + height;

    if g.n_ver_fingers == 0 {
        warn!("Wall too short for a vertical finger, closing the seam straight");
        turtle.forward(height);
        return;
    }

    let leg = (height - (f64::from(g.n_ver_fingers) - TOOTH_FLAT) * p.vertical_finger) / 2.0;
    let slope = p.vertical_finger / 18f64.sqrt();

    turtle.forward(leg);
    for finger in 0..g.n_ver_fingers {
        let target_y = if finger + 1 == g.n_ver_fingers {
            end_y
        } else {
            turtle.y() + p.vertical_finger
        };
        turtle.arc(p.tooth, 135.0);
        turtle.forward(slope);
        turtle.arc(-p.tooth, 135.0);
        turtle.forward(TOOTH_FLAT * p.vertical_finger);
        turtle.arc(-p.tooth, 135.0);
        turtle.forward(slope);
        turtle.arc(p.tooth, 135.0);
        turtle.forward(target_y - turtle.y());
    }
}

/// Staggered rows of short cuts that let the corner section bend
///
/// `height` is the full span to perforate. Lines run alternately down and
/// up so the turtle never retraces; every other line starts with a half
/// cut, giving a brick pattern.
fn flex_hinge(g: &CaseGeometry, start: Point, height: f64) -> SvgTurtle {
    let p = &g.params;
    let gap = p.flex_gap * p.thickness;
    let cut_pitch = p.flex_cut * p.thickness;
    let dx = p.flex_width * p.thickness;

    let mut ncut = ((height - gap) / cut_pitch).floor().max(0.0) as u32;
    if ncut == 0 {
        warn!(
            "Flex span {:.2} mm shorter than one cut, using a single cut",
            height
        );
        ncut = 1;
    }
    let cut = (height - gap) / f64::from(ncut) - gap;
    let nlines = (g.corner / dx).floor().max(0.0) as u32;
    if nlines == 0 {
        warn!(
            "Corner {:.2} mm narrower than the flex spacing, no hinge lines",
            g.corner
        );
    }
    let lead_in = 0.5 * (g.corner - (f64::from(nlines) - 1.0) * dx);

    let mut turtle = SvgTurtle::at(start);
    turtle.pen_up();
    turtle.forward(lead_in);
    for line in 0..nlines {
        turtle.pen_down();
        if line % 2 == 0 {
            turtle.right(90.0);
            turtle.forward(gap + cut);
            for _ in 0..ncut.saturating_sub(2) {
                turtle.pen_up();
                turtle.forward(gap);
                turtle.pen_down();
                turtle.forward(gap + 2.0 * cut);
            }
            turtle.pen_up();
            turtle.forward(gap);
            if ncut % 2 == 0 {
                turtle.pen_down();
                turtle.forward(gap + cut);
                turtle.pen_up();
            }
            turtle.left(90.0);
        } else {
            turtle.left(90.0);
            if ncut % 2 == 1 {
                turtle.forward(gap + cut);
            }
            for _ in 0..(ncut - 1).saturating_sub(ncut % 2) {
                turtle.pen_up();
                turtle.forward(gap);
                turtle.pen_down();
                turtle.forward(gap + 2.0 * cut);
            }
            turtle.pen_up();
            turtle.forward(gap);
            turtle.right(90.0);
        }
        turtle.forward(dx);
    }
    turtle
}

/// Rectangular key slots at the two slot heights on the first five faces
fn assembly_slots(g: &CaseGeometry, origin: Point, layers: &mut LayerSet) {
    let p = &g.params;
    for slot in g.slots {
        for side in 0..SLOTTED_FACES {
            layers.push(
                Layer::Hole,
                Element::Rect {
                    x: origin.x + (f64::from(side) + 0.5) * g.interior_edge + g.exterior_slot,
                    y: origin.y + slot,
                    width: p.horizontal_finger - p.kerf,
                    height: p.thickness - p.kerf,
                },
            );
        }
    }
}
