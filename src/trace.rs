//! Field-line tracing by fixed-step integration of the unit-field direction.
//!
//! Each charge seeds `lines_per_charge` starting points evenly spaced on
//! its capture circle. From every seed the tracer advances along
//! `dy/dt = unit(E(y))` with a classical fourth-order Runge-Kutta step,
//! producing evenly spaced polyline vertices regardless of how strongly
//! the field varies. Stepping along the raw field instead would bunch
//! vertices near the charges and starve the far field.
//!
//! Tracing from a negative charge negates the step so that lines always
//! flow from positive to negative charges, whichever endpoint they start
//! from. A per-pass connection table suppresses the second copy of a
//! line both of its endpoint charges would otherwise draw.

use std::f64::consts::TAU;

use crate::constants::{
    ANTIPARALLEL_TOL, DEFAULT_LINES_PER_CHARGE, DEFAULT_MAX_STEPS, DEFAULT_TIME_STEP,
};
use crate::elements::Polarity;
use crate::field::StaticField;
use crate::math::{unit, R2, Scalar};

/// Rectangular visibility region; traces terminate on leaving it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge.
    pub x_min: Scalar,
    /// Right edge.
    pub x_max: Scalar,
    /// Bottom edge.
    pub y_min: Scalar,
    /// Top edge.
    pub y_max: Scalar,
}

impl Viewport {
    /// Creates a viewport from axis ranges `(min, max)`.
    #[must_use]
    pub const fn new(x: (Scalar, Scalar), y: (Scalar, Scalar)) -> Self {
        Self {
            x_min: x.0,
            x_max: x.1,
            y_min: y.0,
            y_max: y.1,
        }
    }

    /// Square viewport centered on the origin with half-extent `half`.
    #[must_use]
    pub const fn centered(half: Scalar) -> Self {
        Self::new((-half, half), (-half, half))
    }

    /// True when `point` lies strictly inside the region.
    #[must_use]
    pub fn contains(&self, point: &R2) -> bool {
        self.x_min < point.x && point.x < self.x_max && self.y_min < point.y && point.y < self.y_max
    }
}

/// Knobs for one tracing pass.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TraceOptions {
    /// Number of seed points distributed around each charge.
    pub lines_per_charge: usize,
    /// Integration time step.
    pub time_step: Scalar,
    /// Drop straight lines passing through the coordinate origin.
    pub suppress_origin_lines: bool,
    /// Visibility region terminating traces that leave it.
    pub viewport: Viewport,
    /// Hard bound on integration steps per line, so that trajectories
    /// circling a stagnation point still terminate.
    pub max_steps: usize,
}

impl TraceOptions {
    /// Options with the stock tracer defaults for the given viewport.
    #[must_use]
    pub const fn new(viewport: Viewport) -> Self {
        Self {
            lines_per_charge: DEFAULT_LINES_PER_CHARGE,
            time_step: DEFAULT_TIME_STEP,
            suppress_origin_lines: false,
            viewport,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// One traced polyline, tagged with the polarity of the charge it
/// started from so a renderer can orient direction arrows.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLine {
    /// Ordered vertex sequence, starting on the seeding charge's
    /// capture circle.
    pub points: Vec<R2>,
    /// Polarity of the seeding charge.
    pub polarity: Polarity,
}

impl FieldLine {
    /// Vertex pair `(tail, head)` anchoring a mid-line direction arrow.
    ///
    /// The head is picked so the arrow points away from positive seeds
    /// and toward negative ones. Lines of fewer than four vertices get
    /// no arrow.
    #[must_use]
    pub fn arrow_anchor(&self) -> Option<(R2, R2)> {
        if self.points.len() <= 3 {
            return None;
        }
        let index = self.points.len() / 2;
        let head = match self.polarity {
            Polarity::Positive => self.points[index + 1],
            Polarity::Negative => self.points[index - 1],
        };
        Some((self.points[index], head))
    }
}

/// Records which ordered charge pairs a drawn line already joins,
/// indexed by position in the scene's charge list. Built fresh per
/// tracing pass and discarded with it.
#[derive(Debug)]
struct ConnectionMatrix {
    n: usize,
    reached: Vec<bool>,
}

impl ConnectionMatrix {
    fn new(n: usize) -> Self {
        Self {
            n,
            reached: vec![false; n * n],
        }
    }

    fn connect(&mut self, from: usize, to: usize) {
        self.reached[from * self.n + to] = true;
    }

    fn is_connected(&self, from: usize, to: usize) -> bool {
        self.reached[from * self.n + to]
    }
}

struct Tracer<'a> {
    field: &'a StaticField,
    options: &'a TraceOptions,
    connections: ConnectionMatrix,
}

impl<'a> Tracer<'a> {
    fn new(field: &'a StaticField, options: &'a TraceOptions) -> Self {
        let n = field.charges().len();
        Self {
            field,
            options,
            connections: ConnectionMatrix::new(n),
        }
    }

    fn run(mut self) -> Vec<FieldLine> {
        let n_lines = self.options.lines_per_charge;
        let mut lines = Vec::new();
        for origin in 0..self.field.charges().len() {
            for k in 0..n_lines {
                let phi = TAU * k as Scalar / n_lines as Scalar;
                if let Some(line) = self.trace_from(origin, phi) {
                    lines.push(line);
                }
            }
        }
        lines
    }

    /// Unit field direction at `point`, signed so the trace leaves the
    /// seeding charge. `None` at stagnation points, where the direction
    /// is undefined.
    fn direction(&self, point: &R2, sign: Scalar) -> Option<R2> {
        unit(&self.field.field_at(point)).ok().map(|u| sign * u)
    }

    /// One classical RK4 step of `dy/dt = sign * unit(E(y))`.
    fn rk4_step(&self, point: &R2, sign: Scalar, h: Scalar) -> Option<R2> {
        let k1 = self.direction(point, sign)?;
        let k2 = self.direction(&(point + 0.5 * h * k1), sign)?;
        let k3 = self.direction(&(point + 0.5 * h * k2), sign)?;
        let k4 = self.direction(&(point + h * k3), sign)?;
        Some(point + (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4))
    }

    /// Traces one line from the boundary of charge `origin` at angle
    /// `phi`. Returns `None` when the line is discarded (duplicate of an
    /// already-drawn connection, or suppressed origin line).
    fn trace_from(&mut self, origin: usize, phi: Scalar) -> Option<FieldLine> {
        let charge = &self.field.charges()[origin];
        let polarity = charge.polarity();
        let seed = charge.boundary_point(phi);
        let mut points = vec![seed];

        if self.options.viewport.contains(&seed) {
            let sign = polarity.signum();
            let h = self.options.time_step;
            let mut point = seed;
            for _ in 0..self.options.max_steps {
                // A failed step means the integration ran into a
                // stagnation point or diverged; the trace simply ends
                // and keeps what it collected.
                let Some(next) = self.rk4_step(&point, sign, h) else {
                    break;
                };
                if !next.x.is_finite() || !next.y.is_finite() {
                    break;
                }
                points.push(next);
                point = next;

                if !self.options.viewport.contains(&next) {
                    break;
                }
                if let Some(hit) = self.field.hit_charge(&next) {
                    self.connections.connect(origin, hit);
                    // The opposite endpoint already drew this line. A
                    // trace curling back into its own charge reads its
                    // just-recorded entry and is dropped the same way.
                    if self.connections.is_connected(hit, origin) {
                        return None;
                    }
                    break;
                }
            }
        }

        if self.options.suppress_origin_lines && straight_through_origin(&points) {
            return None;
        }
        Some(FieldLine { points, polarity })
    }
}

/// A straight line through the origin starts and ends on opposite rays:
/// the unit vectors of its endpoints cancel.
fn straight_through_origin(points: &[R2]) -> bool {
    let (Ok(a), Ok(b)) = (unit(&points[0]), unit(&points[points.len() - 1])) else {
        return false;
    };
    (a + b).norm() <= ANTIPARALLEL_TOL
}

impl StaticField {
    /// Traces the field lines of the scene.
    ///
    /// Each surviving line carries its ordered vertex sequence and the
    /// seeding charge's polarity; lines ending in another charge's
    /// capture region are drawn only once per charge pair.
    #[must_use]
    pub fn field_lines(&self, options: &TraceOptions) -> Vec<FieldLine> {
        Tracer::new(self, options).run()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::elements::PointCharge;
    use crate::math::distance;

    fn dipole() -> StaticField {
        StaticField::electric(vec![
            PointCharge::new(R2::new(-1.0, 0.0), 1.0),
            PointCharge::new(R2::new(1.0, 0.0), -1.0),
        ])
    }

    fn ends_in_capture(field: &StaticField, line: &FieldLine) -> bool {
        field
            .hit_charge(line.points.last().expect("nonempty line"))
            .is_some()
    }

    #[test]
    fn connection_matrix_is_directional() {
        let mut m = ConnectionMatrix::new(3);
        assert!(!m.is_connected(1, 2));
        m.connect(1, 2);
        assert!(m.is_connected(1, 2));
        assert!(!m.is_connected(2, 1));
    }

    #[test]
    fn dipole_trace_reaches_the_opposite_charge() {
        let field = dipole();
        let options = TraceOptions::new(Viewport::centered(2.0));
        let mut tracer = Tracer::new(&field, &options);

        // Seed on the positive charge pointing at the negative one.
        let line = tracer.trace_from(0, 0.0).expect("first line is kept");
        let end = line.points.last().expect("nonempty");
        assert!(distance(end, &R2::new(1.0, 0.0)) < 0.1);
        assert!(tracer.connections.is_connected(0, 1));
        assert!(!tracer.connections.is_connected(1, 0));
    }

    #[test]
    fn opposite_trace_of_a_connected_pair_is_discarded() {
        let field = dipole();
        let options = TraceOptions::new(Viewport::centered(2.0));
        let mut tracer = Tracer::new(&field, &options);

        assert!(tracer.trace_from(0, 0.0).is_some());
        // The negative charge traces the same line back.
        assert!(tracer.trace_from(1, std::f64::consts::PI).is_none());
        assert!(tracer.connections.is_connected(1, 0));
    }

    #[test]
    fn symmetric_seeds_draw_at_most_one_connecting_line() {
        let field = dipole();
        let mut options = TraceOptions::new(Viewport::centered(2.0));
        options.lines_per_charge = 2; // angles 0 and pi on both charges
        let lines = field.field_lines(&options);

        let connecting = lines
            .iter()
            .filter(|l| ends_in_capture(&field, l))
            .count();
        assert_eq!(connecting, 1);
        // The two outward seeds leave the viewport instead.
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn origin_lines_are_suppressed_when_requested() {
        let field = dipole();
        let mut options = TraceOptions::new(Viewport::centered(2.0));
        options.lines_per_charge = 2;
        options.suppress_origin_lines = true;
        let lines = field.field_lines(&options);

        // The connecting line runs straight through (0, 0) and is
        // dropped; only the two outward lines survive.
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| !ends_in_capture(&field, l)));
    }

    #[test]
    fn lines_flow_from_positive_to_negative() {
        let field = dipole();
        let mut options = TraceOptions::new(Viewport::centered(2.0));
        options.lines_per_charge = 1;
        let lines = field.field_lines(&options);

        // Seed angle 0 on the negative charge points away from its
        // partner; the backward integration still moves the line off to
        // the right, i.e. along decreasing field-line parameter.
        let negative = lines
            .iter()
            .find(|l| l.polarity == Polarity::Negative)
            .expect("negative seed line");
        let first = negative.points.first().expect("nonempty");
        let last = negative.points.last().expect("nonempty");
        assert!(last.x > first.x);
    }

    #[test]
    fn seed_outside_the_viewport_terminates_immediately() {
        let field = StaticField::electric(vec![PointCharge::new(R2::new(5.0, 0.0), 1.0)]);
        let options = TraceOptions::new(Viewport::centered(2.0));
        let lines = field.field_lines(&options);

        assert_eq!(lines.len(), options.lines_per_charge);
        assert!(lines.iter().all(|l| l.points.len() == 1));
    }

    #[test]
    fn step_bound_terminates_a_trace_that_never_leaves() {
        let field = StaticField::electric(vec![PointCharge::new(R2::new(0.0, 0.0), 1.0)]);
        let mut options = TraceOptions::new(Viewport::centered(1.0e6));
        options.lines_per_charge = 4;
        options.max_steps = 5;
        let lines = field.field_lines(&options);

        assert_eq!(lines.len(), 4);
        // Seed plus one vertex per allowed step.
        assert!(lines.iter().all(|l| l.points.len() == 6));
    }

    #[test]
    fn stagnation_between_equal_charges_terminates_the_trace() {
        // The midpoint of two equal positive charges is a field zero;
        // a line aimed straight at it cannot escape along the axis.
        let field = StaticField::electric(vec![
            PointCharge::new(R2::new(-1.0, 0.0), 1.0),
            PointCharge::new(R2::new(1.0, 0.0), 1.0),
        ]);
        let mut options = TraceOptions::new(Viewport::centered(2.0));
        options.lines_per_charge = 1;
        options.max_steps = 300;
        let lines = field.field_lines(&options);

        for line in &lines {
            assert!(line.points.len() <= options.max_steps + 1);
        }
    }

    #[test]
    fn rk4_follows_a_uniform_direction_field_exactly() {
        // A single faraway charge looks locally uniform; one step must
        // advance by h along the unit direction to high order.
        let field = StaticField::electric(vec![PointCharge::new(R2::new(-1.0e3, 0.0), 1.0)]);
        let options = TraceOptions::new(Viewport::centered(2.0));
        let tracer = Tracer::new(&field, &options);

        let start = R2::new(0.0, 0.0);
        let next = tracer.rk4_step(&start, 1.0, 0.01).expect("nonzero field");
        assert_relative_eq!(next.x, 0.01, epsilon = 1.0e-9);
        assert_relative_eq!(next.y, 0.0, epsilon = 1.0e-9);
    }

    #[test]
    fn arrow_anchor_orientation_follows_polarity() {
        let points = vec![
            R2::new(0.0, 0.0),
            R2::new(1.0, 0.0),
            R2::new(2.0, 0.0),
            R2::new(3.0, 0.0),
            R2::new(4.0, 0.0),
        ];
        let forward = FieldLine {
            points: points.clone(),
            polarity: Polarity::Positive,
        };
        let backward = FieldLine {
            points,
            polarity: Polarity::Negative,
        };
        let (tail, head) = forward.arrow_anchor().expect("long enough");
        assert!(head.x > tail.x);
        let (tail, head) = backward.arrow_anchor().expect("long enough");
        assert!(head.x < tail.x);

        let short = FieldLine {
            points: vec![R2::new(0.0, 0.0); 3],
            polarity: Polarity::Positive,
        };
        assert!(short.arrow_anchor().is_none());
    }
}
