//! Hexagonal panel outlines and the battery-hole grid
//!
//! Every panel is traced by its own turtle homed at the panel centre. The
//! turtle first walks (pen up) to the rightmost vertex and turns to run
//! along the lower right edge, so all outlines share the same orientation.

use super::types::{CaseGeometry, Element, LayerSet, PanelKind};
use crate::turtle::SvgTurtle;
use hexcase_core::{Layer, Point};
use tracing::debug;

/// Turtle turn at each hexagon vertex
const VERTEX_TURN: f64 = 60.0;

/// Rotation of the etched plug outline against the cut plug
const PLUG_MARK_ROTATION: f64 = 30.0;

/// Trace one panel and append its outlines to `layers`
pub fn draw_panel(kind: PanelKind, geometry: &CaseGeometry, center: Point, layers: &mut LayerSet) {
    debug!("Drawing {} panel at ({:.2}, {:.2})", kind, center.x, center.y);

    match kind {
        PanelKind::Interior => {
            let turtle = interior_outline(geometry, center);
            layers.push_path(kind.layer(), &turtle);
        }
        PanelKind::Bottom | PanelKind::Rim => {
            let outline = plain_hexagon(center, geometry.exterior_edge);
            layers.push_path(kind.layer(), &outline);
            let tabs = tab_cutouts(geometry, center);
            layers.push_path(Layer::Hole, &tabs);
        }
        PanelKind::Opening => {
            let turtle = plain_hexagon(center, geometry.opening_edge);
            layers.push_path(kind.layer(), &turtle);
        }
        PanelKind::Lid => {
            let turtle = plain_hexagon(center, geometry.exterior_edge);
            layers.push_path(kind.layer(), &turtle);
        }
        PanelKind::Plug => {
            let turtle = plug_outline(center, geometry.plug_edge, 0.0);
            layers.push_path(kind.layer(), &turtle);
        }
        PanelKind::PlugMark => {
            let turtle = plug_outline(center, geometry.plug_edge, PLUG_MARK_ROTATION);
            layers.push_path(kind.layer(), &turtle);
        }
        PanelKind::Disc | PanelKind::DiscMark => {
            let turtle = disc_outline(center, geometry.disc_radius);
            layers.push_path(kind.layer(), &turtle);
        }
    }
}

/// Hexagonal packing of battery holes around `center`
///
/// Row `r` of a grid with dimension `d` holds `d - |r|` holes, centred
/// horizontally; rows are `grid * sin 60°` apart.
pub fn draw_grid(geometry: &CaseGeometry, center: Point, layers: &mut LayerSet) {
    let dimension = geometry.params.dimension as i64;
    let half = dimension / 2;
    let row_pitch = geometry.grid * VERTEX_TURN.to_radians().sin();
    let mut holes = 0usize;

    for row in -half..=half {
        let cy = center.y + row_pitch * row as f64;
        let columns = dimension - row.abs();
        let cx = center.x - 0.5 * geometry.grid * (columns - 1) as f64;
        for column in 0..columns {
            layers.push(
                Layer::Hole,
                Element::Circle {
                    cx: cx + column as f64 * geometry.grid,
                    cy,
                    r: geometry.radius,
                },
            );
            holes += 1;
        }
    }

    debug!("Placed {} battery holes", holes);
}

/// Walk from the centre to the rightmost vertex and face along the edge
fn start_at_vertex(center: Point, edge: f64, rotation: f64) -> SvgTurtle {
    let mut turtle = SvgTurtle::at(center);
    turtle.pen_up();
    turtle.right(rotation);
    turtle.forward(edge);
    turtle.right(2.0 * VERTEX_TURN);
    turtle
}

/// Regular hexagon with sharp corners
pub(crate) fn plain_hexagon(center: Point, edge: f64) -> SvgTurtle {
    let mut turtle = start_at_vertex(center, edge, 0.0);
    turtle.pen_down();
    for _ in 0..6 {
        turtle.forward(edge);
        turtle.right(VERTEX_TURN);
    }
    turtle
}

/// Rounded hexagon with one finger slot per edge
fn interior_outline(g: &CaseGeometry, center: Point) -> SvgTurtle {
    let p = &g.params;
    let edge = g.interior_edge;
    let mut turtle = start_at_vertex(center, edge, 0.0);

    turtle.forward(g.corner_inset);
    turtle.pen_down();
    for _ in 0..5 {
        turtle.forward(g.interior_leg);
        turtle.left(90.0);
        turtle.forward(p.thickness);
        turtle.right(90.0);
        turtle.forward(p.horizontal_finger + p.kerf);
        turtle.right(90.0);
        turtle.forward(p.thickness);
        turtle.left(90.0);
        turtle.forward(g.interior_leg);
        turtle.arc(-g.corner_radius, VERTEX_TURN);
    }
    // The sixth edge joins the wall seam and carries no slot.
    turtle.forward(edge - 2.0 * g.corner_inset);
    turtle.arc(-g.corner_radius, VERTEX_TURN);
    turtle
}

/// Tab cutouts of the bottom and rim panels
///
/// Traced along the interior hexagon: each of the first five edges gets
/// `n_hor_fingers` rectangular tabs, and every corner gets a stepped lip
/// made of an outer arc one thickness wide and the plain corner arc.
fn tab_cutouts(g: &CaseGeometry, center: Point) -> SvgTurtle {
    let p = &g.params;
    let tab = p.horizontal_finger - p.kerf;
    let mut turtle = start_at_vertex(center, g.interior_edge, 0.0);
    turtle.forward(g.corner_inset);

    for _ in 0..5 {
        for finger in 0..g.n_hor_fingers {
            let lead = if finger == 0 {
                g.exterior_leg
            } else {
                p.horizontal_finger + p.kerf
            };
            turtle.forward(lead);
            turtle.pen_down();
            turtle.left(90.0);
            turtle.forward(p.thickness);
            turtle.right(90.0);
            turtle.forward(tab);
            turtle.right(90.0);
            turtle.forward(p.thickness);
            turtle.right(90.0);
            turtle.forward(tab);
            turtle.pen_up();
            turtle.right(180.0);
            turtle.forward(tab);
        }
        turtle.forward(g.exterior_leg);
        corner_lip(g, &mut turtle);
        turtle.pen_up();
        turtle.right(180.0);
        turtle.arc(-g.corner_radius, VERTEX_TURN);
    }

    turtle.forward(g.interior_edge - 2.0 * g.corner_inset);
    corner_lip(g, &mut turtle);
    turtle
}

fn corner_lip(g: &CaseGeometry, turtle: &mut SvgTurtle) {
    let t = g.params.thickness;
    turtle.pen_down();
    turtle.left(90.0);
    turtle.forward(t);
    turtle.right(90.0);
    turtle.arc(-g.corner_radius - t, VERTEX_TURN);
    turtle.right(90.0);
    turtle.forward(t);
    turtle.right(90.0);
    turtle.arc(g.corner_radius, VERTEX_TURN);
}

/// Three straight half-edge pairs joined by 120° arcs of half-edge radius
fn plug_outline(center: Point, edge: f64, rotation: f64) -> SvgTurtle {
    let half = 0.5 * edge;
    let mut turtle = start_at_vertex(center, edge, rotation);
    turtle.pen_down();
    for _ in 0..3 {
        turtle.forward(half);
        turtle.right(90.0);
        turtle.arc(half, 2.0 * VERTEX_TURN);
        turtle.right(90.0);
        turtle.forward(half);
        turtle.right(VERTEX_TURN);
    }
    turtle
}

fn disc_outline(center: Point, radius: f64) -> SvgTurtle {
    let mut turtle = SvgTurtle::at(center);
    turtle.pen_up();
    turtle.forward(radius);
    turtle.pen_down();
    turtle.left(90.0);
    turtle.circle(radius);
    turtle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battery_case::solver::solve;
    use crate::turtle::PathSegment;
    use hexcase_core::CaseParameters;

    fn geometry(dimension: u32) -> CaseGeometry {
        solve(&CaseParameters {
            dimension,
            ..Default::default()
        })
        .unwrap()
    }

    fn first_anchor(turtle: &SvgTurtle) -> Point {
        match turtle.segments()[0] {
            PathSegment::MoveTo { x, y } => Point::new(x, y),
            other => panic!("expected anchor, got {:?}", other),
        }
    }

    fn count_arcs(turtle: &SvgTurtle) -> usize {
        turtle
            .segments()
            .iter()
            .filter(|s| matches!(s, PathSegment::Arc { .. }))
            .count()
    }

    #[test]
    fn test_grid_of_three_has_seven_holes() {
        let g = geometry(3);
        let mut layers = LayerSet::new();
        draw_grid(&g, Point::new(100.0, 100.0), &mut layers);

        let holes = layers.elements(Layer::Hole);
        assert_eq!(holes.len(), 7);

        let mut rows: Vec<(i64, usize)> = Vec::new();
        for hole in holes {
            if let Element::Circle { cy, r, .. } = hole {
                assert_eq!(*r, g.radius);
                let key = (cy * 100.0).round() as i64;
                match rows.iter_mut().find(|(k, _)| *k == key) {
                    Some((_, count)) => *count += 1,
                    None => rows.push((key, 1)),
                }
            }
        }
        let counts: Vec<usize> = rows.iter().map(|(_, c)| *c).collect();
        assert_eq!(counts, vec![2, 3, 2]);
    }

    #[test]
    fn test_grid_middle_row_is_centred() {
        let g = geometry(5);
        let mut layers = LayerSet::new();
        let center = Point::new(50.0, 60.0);
        draw_grid(&g, center, &mut layers);
        assert_eq!(layers.len(), 19);

        let middle: Vec<f64> = layers
            .elements(Layer::Hole)
            .iter()
            .filter_map(|e| match e {
                Element::Circle { cx, cy, .. } if (*cy - center.y).abs() < 1e-9 => Some(*cx),
                _ => None,
            })
            .collect();
        assert_eq!(middle.len(), 5);
        assert!((middle[2] - center.x).abs() < 1e-9);
    }

    #[test]
    fn test_plain_hexagon_closes() {
        let turtle = plain_hexagon(Point::new(10.0, 10.0), 20.0);
        let start = first_anchor(&turtle);
        assert!((start.x - 30.0).abs() < 1e-9);
        assert!(turtle.position().distance_to(&start) < 1e-9);
        assert_eq!(turtle.segments().len(), 7);
    }

    #[test]
    fn test_interior_outline_closes_with_six_rounded_corners() {
        let g = geometry(5);
        let turtle = interior_outline(&g, Point::new(0.0, 0.0));
        assert_eq!(count_arcs(&turtle), 6);
        assert!(turtle.position().distance_to(&first_anchor(&turtle)) < 1e-9);
        assert!(turtle.segments().iter().all(|s| s.is_drawn() || matches!(s, PathSegment::MoveTo { .. })));
    }

    #[test]
    fn test_tab_cutouts_trace_every_corner() {
        let g = geometry(5);
        let turtle = tab_cutouts(&g, Point::new(0.0, 0.0));
        // Two drawn arcs per corner lip, six lips.
        assert_eq!(count_arcs(&turtle), 12);
        let gaps = turtle
            .segments()
            .iter()
            .filter(|s| matches!(s, PathSegment::MoveBy { .. }))
            .count();
        assert!(gaps > 0);
    }

    #[test]
    fn test_plug_and_mark_close() {
        let g = geometry(5);
        for rotation in [0.0, PLUG_MARK_ROTATION] {
            let turtle = plug_outline(Point::new(5.0, 5.0), g.plug_edge, rotation);
            assert_eq!(count_arcs(&turtle), 3);
            assert!(turtle.position().distance_to(&first_anchor(&turtle)) < 1e-9);
        }
    }

    #[test]
    fn test_disc_is_centred_circle() {
        let turtle = disc_outline(Point::new(3.0, 4.0), 10.0);
        let start = first_anchor(&turtle);
        assert!((start.x - 13.0).abs() < 1e-9);
        assert!((start.y - 4.0).abs() < 1e-9);
        assert_eq!(count_arcs(&turtle), 2);
        assert!(turtle.position().distance_to(&start) < 1e-9);
    }

    #[test]
    fn test_panels_land_on_their_layers() {
        let g = geometry(5);
        let center = Point::new(0.0, 0.0);

        let mut layers = LayerSet::new();
        draw_panel(PanelKind::Bottom, &g, center, &mut layers);
        assert_eq!(layers.elements(Layer::Shape).len(), 1);
        assert_eq!(layers.elements(Layer::Hole).len(), 1);

        let mut layers = LayerSet::new();
        draw_panel(PanelKind::PlugMark, &g, center, &mut layers);
        draw_panel(PanelKind::DiscMark, &g, center, &mut layers);
        assert_eq!(layers.elements(Layer::Mark).len(), 2);
        assert!(layers.elements(Layer::Shape).is_empty());

        let mut layers = LayerSet::new();
        draw_panel(PanelKind::Plug, &g, center, &mut layers);
        draw_panel(PanelKind::Disc, &g, center, &mut layers);
        assert_eq!(layers.elements(Layer::Hole).len(), 2);
    }
}
