//! Numeric defaults shared throughout the crate.

/// Tolerance below which a vector norm is treated as zero.
pub const EPS: f64 = 1e-12;

/// Tolerance on the summed end-direction norm used to classify a traced
/// line as a straight line through the coordinate origin.
pub const ANTIPARALLEL_TOL: f64 = 1e-6;

/// Default integration time step for the field-line tracer.
pub const DEFAULT_TIME_STEP: f64 = 0.01;

/// Default number of field lines seeded around each charge.
pub const DEFAULT_LINES_PER_CHARGE: usize = 20;

/// Default upper bound on integration steps for a single line.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// Default capture radius of a point charge.
pub const DEFAULT_CHARGE_RADIUS: f64 = 0.1;

/// Default outline width used for charge glyphs.
pub const DEFAULT_LINEWIDTH: f64 = 0.5;
