//! Convenience re-exports for building field visualizations.

pub use crate::constants::{DEFAULT_LINES_PER_CHARGE, DEFAULT_TIME_STEP};
pub use crate::elements::{ChargeStyle, Marker, PointCharge, Polarity};
pub use crate::errors::FieldlinesError;
pub use crate::field::{FieldKind, StaticField};
pub use crate::io::{write_field_lines_csv, write_field_lines_vtk};
pub use crate::math::{distance, unit, Scalar, R2, R3};
pub use crate::render::{charge_glyph, default_color, default_marker, ChargeGlyph};
pub use crate::shapes::{generate_multipole, regular_polygon};
pub use crate::trace::{FieldLine, TraceOptions, Viewport};
