//! Static scenes of point charges and the superposed field they produce.

use crate::constants::EPS;
use crate::elements::PointCharge;
use crate::errors::FieldlinesError;
use crate::math::R2;

/// Physical interpretation of a scene.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Electrostatic field of arbitrary signed charges.
    Electric,
    /// Magnetostatic field of unit monopole charges, a plotting fiction
    /// for pole patterns.
    Magnetic,
}

/// An ordered collection of charges tagged with a field kind.
///
/// Owns its charges for the scene's duration and carries no other
/// mutable state; field queries are pure.
#[derive(Debug, Clone)]
pub struct StaticField {
    charges: Vec<PointCharge>,
    kind: FieldKind,
}

impl StaticField {
    /// Creates a scene, enforcing the magnetic unit-charge invariant.
    ///
    /// A magnetic scene holding any charge with `|q| != 1` fails fast
    /// with [`FieldlinesError::MagneticChargeMagnitude`]; the monopole
    /// fiction only works for unit magnitudes.
    pub fn new(charges: Vec<PointCharge>, kind: FieldKind) -> Result<Self, FieldlinesError> {
        if kind == FieldKind::Magnetic {
            for (index, charge) in charges.iter().enumerate() {
                let magnitude = charge.q.abs();
                if (magnitude - 1.0).abs() > EPS {
                    return Err(FieldlinesError::MagneticChargeMagnitude { index, magnitude });
                }
            }
        }
        Ok(Self { charges, kind })
    }

    /// Creates an electric scene; electric scenes cannot fail validation.
    #[must_use]
    pub const fn electric(charges: Vec<PointCharge>) -> Self {
        Self {
            charges,
            kind: FieldKind::Electric,
        }
    }

    /// The charges of the scene, in construction order.
    #[must_use]
    pub fn charges(&self) -> &[PointCharge] {
        &self.charges
    }

    /// The field kind of the scene.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Field vector at `point`: the superposition of every charge's
    /// individual contribution.
    #[must_use]
    pub fn field_at(&self, point: &R2) -> R2 {
        let mut e = R2::zeros();
        for charge in &self.charges {
            e += charge.field_at(point);
        }
        e
    }

    /// Index of the first charge (in list order) whose capture radius
    /// strictly contains `point`, if any.
    ///
    /// Well-formed scenes have disjoint capture radii; with overlapping
    /// radii the first match simply wins.
    #[must_use]
    pub fn hit_charge(&self, point: &R2) -> Option<usize> {
        self.charges.iter().position(|c| c.is_within_radius(point))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn three_charges() -> Vec<PointCharge> {
        vec![
            PointCharge::new(R2::new(1.0, 0.0), 1.0),
            PointCharge::new(R2::new(-1.0, 0.0), -2.0),
            PointCharge::new(R2::new(0.0, 1.5), 0.5),
        ]
    }

    #[test]
    fn field_is_the_sum_of_individual_contributions() {
        let charges = three_charges();
        let field = StaticField::electric(charges.clone());
        let p = R2::new(0.3, -0.7);

        let mut expected = R2::zeros();
        for charge in &charges {
            expected += charge.field_at(&p);
        }
        let actual = field.field_at(&p);
        assert_relative_eq!(actual.x, expected.x, epsilon = 1.0e-12);
        assert_relative_eq!(actual.y, expected.y, epsilon = 1.0e-12);
    }

    #[test]
    fn magnetic_scene_rejects_non_unit_charges() {
        let charges = vec![
            PointCharge::new(R2::new(0.0, 0.0), 1.0),
            PointCharge::new(R2::new(1.0, 0.0), 2.0),
        ];
        let err = StaticField::new(charges, FieldKind::Magnetic).unwrap_err();
        assert_eq!(
            err,
            FieldlinesError::MagneticChargeMagnitude {
                index: 1,
                magnitude: 2.0
            }
        );
    }

    #[test]
    fn magnetic_scene_accepts_unit_monopoles() {
        let charges = vec![
            PointCharge::new(R2::new(0.0, 0.0), 1.0),
            PointCharge::new(R2::new(1.0, 0.0), -1.0),
        ];
        let field = StaticField::new(charges, FieldKind::Magnetic).expect("unit charges");
        assert_eq!(field.kind(), FieldKind::Magnetic);
    }

    #[test]
    fn hit_charge_returns_the_first_match_in_list_order() {
        // Overlapping radii on purpose; list order breaks the tie.
        let charges = vec![
            PointCharge::new(R2::new(0.0, 0.0), 1.0).with_radius(1.0),
            PointCharge::new(R2::new(0.5, 0.0), -1.0).with_radius(1.0),
        ];
        let field = StaticField::electric(charges);
        assert_eq!(field.hit_charge(&R2::new(0.4, 0.0)), Some(0));
        assert_eq!(field.hit_charge(&R2::new(5.0, 0.0)), None);
    }

    #[test]
    fn empty_scene_has_zero_field_everywhere() {
        let field = StaticField::electric(Vec::new());
        assert_relative_eq!(field.field_at(&R2::new(0.2, 0.4)).norm(), 0.0);
    }
}
