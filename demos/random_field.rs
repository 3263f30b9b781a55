//! A handful of randomly placed unit charges, seeded for
//! reproducibility.

use fieldlines::elements::PointCharge;
use fieldlines::field::StaticField;
use fieldlines::io::write_field_lines_csv;
use fieldlines::math::R2;
use fieldlines::trace::{TraceOptions, Viewport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> std::io::Result<()> {
    let mut rng = StdRng::seed_from_u64(121_261);
    let charges: Vec<PointCharge> = (0..5)
        .map(|_| {
            let x = rng.gen_range(-2.0..2.0);
            let y = rng.gen_range(-2.0..2.0);
            let q = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            PointCharge::new(R2::new(x, y), q)
        })
        .collect();
    let field = StaticField::electric(charges);

    let mut options = TraceOptions::new(Viewport::centered(2.0));
    options.lines_per_charge = 16;
    let lines = field.field_lines(&options);

    write_field_lines_csv(std::io::stdout().lock(), &lines)
}
