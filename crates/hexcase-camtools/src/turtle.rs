//! Turtle Path Engine
//!
//! Turns relative motion commands (forward, turn, arc) into an SVG path
//! description. The turtle starts at a home point facing +X with the pen
//! down. Angles are in degrees at the API and radians internally; because
//! SVG's Y axis points down, a right turn increases the heading.
//!
//! Motions recorded while the pen is down become visible segments. Motions
//! with the pen up only move the cursor, but once anything has been drawn
//! they are kept as relative gap moves so the next visible segment starts
//! from the right place.

use hexcase_core::Point;
use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;

/// Displacements smaller than this are snapped to a pure `h`/`v` segment
pub const AXIS_EPSILON: f64 = 0.01;

/// Largest sweep emitted as a single arc segment
///
/// A two-point arc whose end point nearly meets its start point cannot
/// pin down its circle, so longer sweeps are split.
pub const MAX_ARC_EXTENT: f64 = 355.0;

/// One recorded path command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Absolute move, used as the coordinate anchor
    MoveTo { x: f64, y: f64 },
    /// Relative pen-up move
    MoveBy { dx: f64, dy: f64 },
    /// Relative horizontal line
    Horizontal { dx: f64 },
    /// Relative vertical line
    Vertical { dy: f64 },
    /// Relative line
    LineBy { dx: f64, dy: f64 },
    /// Relative circular arc
    Arc {
        radius: f64,
        /// Swept angle in degrees, signed like the requested extent
        extent: f64,
        large_arc: bool,
        sweep: bool,
        dx: f64,
        dy: f64,
    },
}

impl PathSegment {
    /// Relative displacement, or `None` for an absolute move
    pub fn displacement(&self) -> Option<(f64, f64)> {
        match *self {
            PathSegment::MoveTo { .. } => None,
            PathSegment::MoveBy { dx, dy } | PathSegment::LineBy { dx, dy } => Some((dx, dy)),
            PathSegment::Horizontal { dx } => Some((dx, 0.0)),
            PathSegment::Vertical { dy } => Some((0.0, dy)),
            PathSegment::Arc { dx, dy, .. } => Some((dx, dy)),
        }
    }

    /// True for segments that produce a visible cut
    pub fn is_drawn(&self) -> bool {
        !matches!(
            self,
            PathSegment::MoveTo { .. } | PathSegment::MoveBy { .. }
        )
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathSegment::MoveTo { x, y } => write!(f, "M {:.2},{:.2}", x, y),
            PathSegment::MoveBy { dx, dy } => write!(f, "m {:.2},{:.2}", dx, dy),
            PathSegment::Horizontal { dx } => write!(f, "h {:.2}", dx),
            PathSegment::Vertical { dy } => write!(f, "v {:.2}", dy),
            PathSegment::LineBy { dx, dy } => write!(f, "l {:.2},{:.2}", dx, dy),
            PathSegment::Arc {
                radius,
                large_arc,
                sweep,
                dx,
                dy,
                ..
            } => write!(
                f,
                "a {:.2} {:.2} 0 {} {} {:.2},{:.2}",
                radius,
                radius,
                u8::from(large_arc),
                u8::from(sweep),
                dx,
                dy
            ),
        }
    }
}

/// Stateful 2-D turtle that accumulates an SVG path
#[derive(Debug, Clone)]
pub struct SvgTurtle {
    home: Point,
    x: f64,
    y: f64,
    /// Radians in `[0, 2π)`
    heading: f64,
    pen: bool,
    segments: Vec<PathSegment>,
}

impl SvgTurtle {
    /// Create a new turtle at the given home location, facing right
    pub fn new(home_x: f64, home_y: f64) -> Self {
        Self {
            home: Point::new(home_x, home_y),
            x: home_x,
            y: home_y,
            heading: 0.0,
            pen: true,
            segments: Vec::new(),
        }
    }

    /// Create a turtle whose home is the given point
    pub fn at(point: Point) -> Self {
        Self::new(point.x, point.y)
    }

    /// Subsequent movements only affect location and heading
    pub fn pen_up(&mut self) {
        self.pen = false;
    }

    /// Subsequent movements are drawn
    pub fn pen_down(&mut self) {
        self.pen = true;
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn home(&self) -> Point {
        self.home
    }

    /// Current heading in degrees, in `[0, 360)`
    pub fn heading(&self) -> f64 {
        self.heading.to_degrees()
    }

    /// Recorded segments in drawing order
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Move along the current heading; negative distances move backward
    pub fn forward(&mut self, distance: f64) {
        if distance == 0.0 {
            return;
        }
        let dx = distance * self.heading.cos();
        let dy = distance * self.heading.sin();

        if self.pen {
            self.anchor();
            let segment = if dy.abs() < AXIS_EPSILON {
                PathSegment::Horizontal { dx }
            } else if dx.abs() < AXIS_EPSILON {
                PathSegment::Vertical { dy }
            } else {
                PathSegment::LineBy { dx, dy }
            };
            self.segments.push(segment);
        } else if !self.segments.is_empty() {
            self.segments.push(PathSegment::MoveBy { dx, dy });
        }

        self.x += dx;
        self.y += dy;
    }

    /// Move against the current heading
    pub fn backward(&mut self, distance: f64) {
        self.forward(-distance);
    }

    /// Turn left by `angle` degrees
    pub fn left(&mut self, angle: f64) {
        self.right(-angle);
    }

    /// Turn right by `angle` degrees
    pub fn right(&mut self, angle: f64) {
        self.rotate(angle.to_radians());
    }

    /// Draw a circular arc spanning `extent` degrees around a centre
    /// `radius` units to the left (positive radius) or right (negative).
    ///
    /// Sweeps beyond [`MAX_ARC_EXTENT`] are emitted as several segments.
    pub fn arc(&mut self, radius: f64, extent: f64) {
        if extent == 0.0 {
            return;
        }
        if radius == 0.0 {
            self.rotate(Self::arc_turn(radius, extent));
            return;
        }
        if extent.abs() > MAX_ARC_EXTENT {
            let first = MAX_ARC_EXTENT.copysign(extent);
            self.arc(radius, first);
            self.arc(radius, extent - first);
            return;
        }

        let turn = Self::arc_turn(radius, extent);
        let cx = self.x + radius * (self.heading - FRAC_PI_2).cos();
        let cy = self.y + radius * (self.heading - FRAC_PI_2).sin();
        let theta = self.heading + FRAC_PI_2 + turn;
        let dx = cx + radius * theta.cos() - self.x;
        let dy = cy + radius * theta.sin() - self.y;

        if self.pen {
            self.anchor();
            self.segments.push(PathSegment::Arc {
                radius: radius.abs(),
                extent,
                large_arc: extent.abs() >= 180.0,
                sweep: (radius < 0.0) != (extent < 0.0),
                dx,
                dy,
            });
        } else if !self.segments.is_empty() {
            self.segments.push(PathSegment::MoveBy { dx, dy });
        }

        self.x += dx;
        self.y += dy;
        self.rotate(turn);
    }

    /// Approximate an arc with `steps` straight chords.
    ///
    /// Useful where circular primitives are unwanted in the output.
    /// Zero steps falls back to a true arc.
    pub fn arc_steps(&mut self, radius: f64, extent: f64, steps: u32) {
        if steps == 0 {
            self.arc(radius, extent);
            return;
        }
        let mut step = extent / f64::from(steps);
        let mut half = 0.5 * step;
        let mut chord = 2.0 * radius * half.to_radians().sin();
        if radius < 0.0 {
            chord = -chord;
            step = -step;
            half = -half;
        }

        self.left(half);
        for _ in 0..steps {
            self.forward(chord);
            self.left(step);
        }
        self.right(half);
    }

    /// Full circle
    pub fn circle(&mut self, radius: f64) {
        self.arc(radius, 360.0);
    }

    /// Return to the home position and heading. The pen state is kept.
    pub fn go_home(&mut self) {
        self.x = self.home.x;
        self.y = self.home.y;
        self.heading = 0.0;
        if !self.segments.is_empty() {
            self.segments.push(PathSegment::MoveTo {
                x: self.x,
                y: self.y,
            });
        }
    }

    /// Clear the path and return home with the pen down
    pub fn reset(&mut self) {
        self.segments.clear();
        self.pen = true;
        self.go_home();
    }

    /// The accumulated path, suitable for the `d` attribute of `<path>`
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    fn anchor(&mut self) {
        if self.segments.is_empty() {
            self.segments.push(PathSegment::MoveTo {
                x: self.x,
                y: self.y,
            });
        }
    }

    fn rotate(&mut self, radians: f64) {
        self.heading = (self.heading + radians).rem_euclid(TAU);
    }

    /// Heading change of an arc in radians: left arcs turn left
    fn arc_turn(radius: f64, extent: f64) -> f64 {
        if radius < 0.0 {
            extent.to_radians()
        } else {
            -extent.to_radians()
        }
    }
}

impl fmt::Display for SvgTurtle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
