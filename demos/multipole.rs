//! Traces an electric sextupole and prints it as VTK polydata, along
//! with the resolved glyph metadata on stderr.

use fieldlines::field::{FieldKind, StaticField};
use fieldlines::io::write_field_lines_vtk;
use fieldlines::render::charge_glyph;
use fieldlines::shapes::generate_multipole;
use fieldlines::trace::{TraceOptions, Viewport};

fn main() -> std::io::Result<()> {
    let charges = generate_multipole(3, false);
    let field = StaticField::new(charges, FieldKind::Electric).expect("electric scenes validate");

    let mut options = TraceOptions::new(Viewport::centered(2.0));
    options.lines_per_charge = 36;
    options.suppress_origin_lines = true;
    let lines = field.field_lines(&options);

    for charge in field.charges() {
        let glyph = charge_glyph(charge, field.kind());
        eprintln!(
            "charge at ({:+.3}, {:+.3}) color {} marker {}",
            glyph.center.x,
            glyph.center.y,
            glyph.color,
            glyph.marker.as_deref().unwrap_or("-"),
        );
    }

    write_field_lines_vtk(std::io::stdout().lock(), "electric sextupole", &lines)
}
