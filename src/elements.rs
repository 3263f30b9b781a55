//! Point charges and their display metadata.

use crate::constants::{DEFAULT_CHARGE_RADIUS, DEFAULT_LINEWIDTH, EPS};
use crate::math::{distance, R2, Scalar};

/// Sign of a charge, deciding which way traced lines flow.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Field lines leave the charge.
    Positive,
    /// Field lines enter the charge.
    Negative,
}

impl Polarity {
    /// Polarity of a signed charge value.
    #[must_use]
    pub fn of(q: Scalar) -> Self {
        if q < 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// Signed unit value, `+1.0` or `-1.0`.
    #[must_use]
    pub const fn signum(self) -> Scalar {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// Marker drawn on top of a charge glyph.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// Pick the conventional glyph for the field kind and polarity.
    Auto,
    /// A literal glyph string.
    Text(String),
}

/// Display metadata passed through to the rendering collaborator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeStyle {
    /// Fill color; `None` resolves against the per-kind defaults.
    pub color: Option<String>,
    /// Marker on top of the glyph; `None` draws no marker.
    pub marker: Option<Marker>,
    /// Outline width of the glyph.
    pub linewidth: Scalar,
}

impl Default for ChargeStyle {
    fn default() -> Self {
        Self {
            color: None,
            marker: Some(Marker::Auto),
            linewidth: DEFAULT_LINEWIDTH,
        }
    }
}

/// Idealized source of a radial field at a single location.
///
/// Constructed once per scene and immutable afterwards; the owning
/// [`StaticField`](crate::field::StaticField) never mutates it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PointCharge {
    /// Position of the charge.
    pub location: R2,
    /// Signed charge value; the sign selects the line direction.
    pub q: Scalar,
    /// Radius of the circular capture region around `location`.
    pub radius: Scalar,
    /// Display metadata, irrelevant to the physics.
    pub style: ChargeStyle,
}

impl PointCharge {
    /// Creates a charge with the default capture radius and style.
    #[must_use]
    pub fn new(location: R2, q: Scalar) -> Self {
        Self {
            location,
            q,
            radius: DEFAULT_CHARGE_RADIUS,
            style: ChargeStyle::default(),
        }
    }

    /// Replaces the capture radius.
    #[must_use]
    pub const fn with_radius(mut self, radius: Scalar) -> Self {
        self.radius = radius;
        self
    }

    /// Replaces the display style.
    #[must_use]
    pub fn with_style(mut self, style: ChargeStyle) -> Self {
        self.style = style;
        self
    }

    /// Polarity of this charge.
    #[must_use]
    pub fn polarity(&self) -> Polarity {
        Polarity::of(self.q)
    }

    /// Field contribution of this charge alone at `point`.
    ///
    /// Radial inverse-square law in dimensionless units, pointing away
    /// from positive charges and toward negative ones. The charge center
    /// itself is a singularity; queries within the zero-norm tolerance of
    /// it contribute nothing.
    #[must_use]
    pub fn field_at(&self, point: &R2) -> R2 {
        let r_vec = point - self.location;
        let r = r_vec.norm();
        if r <= EPS {
            return R2::zeros();
        }
        r_vec * (self.q / (r * r * r))
    }

    /// True when `point` lies strictly inside the capture radius.
    #[must_use]
    pub fn is_within_radius(&self, point: &R2) -> bool {
        distance(&self.location, point) < self.radius
    }

    /// Point on the capture circle at angle `phi` (radians from +x).
    #[must_use]
    pub fn boundary_point(&self, phi: Scalar) -> R2 {
        self.location + self.radius * R2::new(phi.cos(), phi.sin())
    }
}
