//! A big proton and a small electron. Not really an atom, and not
//! really to scale.

use fieldlines::elements::{ChargeStyle, PointCharge};
use fieldlines::field::StaticField;
use fieldlines::io::write_field_lines_csv;
use fieldlines::math::R2;
use fieldlines::trace::{TraceOptions, Viewport};

fn main() -> std::io::Result<()> {
    let style = ChargeStyle {
        linewidth: 0.8,
        ..ChargeStyle::default()
    };
    let charges = vec![
        PointCharge::new(R2::new(1.0, 0.0), 1.0)
            .with_radius(0.5)
            .with_style(style.clone()),
        PointCharge::new(R2::new(-1.0, 0.0), -1.0)
            .with_radius(0.05)
            .with_style(style),
    ];
    let field = StaticField::electric(charges);

    let mut options = TraceOptions::new(Viewport::centered(2.0));
    options.lines_per_charge = 36;
    let lines = field.field_lines(&options);

    write_field_lines_csv(std::io::stdout().lock(), &lines)
}
