//! Traces the field lines of a symmetric dipole and prints them as CSV.

use fieldlines::elements::PointCharge;
use fieldlines::field::StaticField;
use fieldlines::io::write_field_lines_csv;
use fieldlines::math::R2;
use fieldlines::trace::{TraceOptions, Viewport};

fn main() -> std::io::Result<()> {
    let charges = vec![
        PointCharge::new(R2::new(1.0, 0.0), -1.0),
        PointCharge::new(R2::new(-1.0, 0.0), 1.0),
    ];
    let field = StaticField::electric(charges);

    let options = TraceOptions::new(Viewport::centered(2.0));
    let lines = field.field_lines(&options);

    write_field_lines_csv(std::io::stdout().lock(), &lines)
}
