//! Property tests for the turtle path engine

use hexcase_camtools::turtle::{PathSegment, SvgTurtle, AXIS_EPSILON, MAX_ARC_EXTENT};
use hexcase_core::Point;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Command {
    Forward(f64),
    Right(f64),
    Arc(f64, f64),
    PenUp,
    PenDown,
}

fn radius() -> impl Strategy<Value = f64> {
    prop_oneof![-50.0f64..-0.5, 0.5f64..50.0]
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (-50.0f64..50.0).prop_map(Command::Forward),
        (-360.0f64..360.0).prop_map(Command::Right),
        (radius(), -720.0f64..720.0).prop_map(|(r, e)| Command::Arc(r, e)),
        Just(Command::PenUp),
        Just(Command::PenDown),
    ]
}

fn run(turtle: &mut SvgTurtle, commands: &[Command]) {
    for command in commands {
        match *command {
            Command::Forward(d) => turtle.forward(d),
            Command::Right(a) => turtle.right(a),
            Command::Arc(r, e) => turtle.arc(r, e),
            Command::PenUp => turtle.pen_up(),
            Command::PenDown => turtle.pen_down(),
        }
    }
}

/// Sum of relative segment displacements after the leading anchor
fn path_displacement(turtle: &SvgTurtle) -> (f64, f64) {
    turtle
        .segments()
        .iter()
        .filter_map(|s| s.displacement())
        .fold((0.0, 0.0), |(x, y), (dx, dy)| (x + dx, y + dy))
}

fn arc_extents(turtle: &SvgTurtle) -> Vec<f64> {
    turtle
        .segments()
        .iter()
        .filter_map(|s| match s {
            PathSegment::Arc { extent, .. } => Some(*extent),
            _ => None,
        })
        .collect()
}

proptest! {
    #[test]
    fn displacement_matches_final_position(
        start_x in -100.0f64..100.0,
        start_y in -100.0f64..100.0,
        commands in prop::collection::vec(command(), 1..40),
    ) {
        let mut turtle = SvgTurtle::new(start_x, start_y);
        run(&mut turtle, &commands);
        prop_assume!(!turtle.is_empty());

        let anchor = match turtle.segments()[0] {
            PathSegment::MoveTo { x, y } => Point::new(x, y),
            other => panic!("path must start with an anchor, got {:?}", other),
        };
        let (dx, dy) = path_displacement(&turtle);
        // Axis snapping may drop a sub-epsilon component from each line.
        let tolerance = 1e-6 + AXIS_EPSILON * turtle.segments().len() as f64;
        prop_assert!((anchor.x + dx - turtle.x()).abs() <= tolerance);
        prop_assert!((anchor.y + dy - turtle.y()).abs() <= tolerance);
    }

    #[test]
    fn right_angle_walks_are_exact(
        steps in prop::collection::vec((-30.0f64..30.0, 0u8..4), 1..30),
    ) {
        let mut turtle = SvgTurtle::new(0.0, 0.0);
        for (distance, quarter_turns) in &steps {
            turtle.right(90.0 * f64::from(*quarter_turns));
            turtle.forward(*distance);
        }
        prop_assume!(!turtle.is_empty());
        let (dx, dy) = path_displacement(&turtle);
        prop_assert!((dx - turtle.x()).abs() < 1e-9);
        prop_assert!((dy - turtle.y()).abs() < 1e-9);
    }

    #[test]
    fn long_arcs_split_in_two(r in radius(), extent in 355.1f64..710.0, negative in any::<bool>()) {
        let extent = if negative { -extent } else { extent };
        let mut turtle = SvgTurtle::new(0.0, 0.0);
        turtle.arc(r, extent);

        let extents = arc_extents(&turtle);
        prop_assert_eq!(extents.len(), 2);
        prop_assert!((extents[0].abs() - MAX_ARC_EXTENT).abs() < 1e-12);
        prop_assert!((extents.iter().sum::<f64>() - extent).abs() < 1e-9);
    }

    #[test]
    fn mirrored_arcs_restore_heading(
        heading in 0.0f64..360.0,
        r in radius(),
        extent in 1.0f64..355.0,
    ) {
        let mut turtle = SvgTurtle::new(0.0, 0.0);
        turtle.right(heading);
        let before = turtle.heading();
        turtle.arc(r, extent);
        turtle.right(0.0);
        turtle.arc(-r, extent);

        let diff = (turtle.heading() - before).rem_euclid(360.0);
        prop_assert!(diff < 1e-6 || diff > 360.0 - 1e-6);
    }

    #[test]
    fn serialization_is_non_destructive(commands in prop::collection::vec(command(), 0..20)) {
        let mut turtle = SvgTurtle::new(1.0, 1.0);
        run(&mut turtle, &commands);
        let first = turtle.serialize();
        prop_assert_eq!(first, turtle.serialize());
    }
}

#[test]
fn test_pen_lift_resumes_from_moved_position() {
    let mut turtle = SvgTurtle::new(0.0, 0.0);
    turtle.forward(10.0);
    turtle.pen_up();
    turtle.right(90.0);
    turtle.forward(4.0);
    turtle.pen_down();
    turtle.forward(6.0);

    assert_eq!(turtle.serialize(), "M 0.00,0.00 h 10.00 m 0.00,4.00 v 6.00");
    assert!(turtle.position().distance_to(&Point::new(10.0, 10.0)) < 1e-9);
}

#[test]
fn test_arc_round_trip_moves_the_turtle() {
    let mut turtle = SvgTurtle::new(0.0, 0.0);
    turtle.arc(10.0, 90.0);
    turtle.right(0.0);
    turtle.arc(-10.0, 90.0);
    assert!(turtle.heading().abs() < 1e-9 || (turtle.heading() - 360.0).abs() < 1e-9);
    assert!(turtle.position().distance_to(&Point::new(0.0, 0.0)) > 1.0);
}
