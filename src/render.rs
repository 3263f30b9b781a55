//! Renderer-facing glyph metadata resolution.
//!
//! The crate does not draw. This module resolves what an external
//! renderer needs to place charge glyphs over the traced polylines:
//! draw-order layers, the conventional colors and sign markers per
//! field kind, and a per-charge [`ChargeGlyph`] with every `Auto`
//! style field resolved.

use crate::elements::{Marker, PointCharge, Polarity};
use crate::field::FieldKind;
use crate::math::{R2, Scalar};

/// Draw-order layers, lowest drawn first.
pub mod zorder {
    /// Field-line polylines.
    pub const LINES: u8 = 1;
    /// Direction arrows on the lines.
    pub const ARROWS: u8 = 2;
    /// Charge circles.
    pub const CHARGES: u8 = 3;
    /// Sign markers on top of the circles.
    pub const MARKERS: u8 = 4;
}

/// Outline color shared by all charge glyphs.
pub const EDGE_COLOR: &str = "#000000";

/// Conventional fill color for a charge of the given polarity.
#[must_use]
pub const fn default_color(kind: FieldKind, polarity: Polarity) -> &'static str {
    match (kind, polarity) {
        (FieldKind::Electric, Polarity::Negative) => "#069af3",
        (FieldKind::Electric, Polarity::Positive) => "#d40000",
        (FieldKind::Magnetic, Polarity::Negative) => "#55a868",
        (FieldKind::Magnetic, Polarity::Positive) => "#c44e52",
    }
}

/// Conventional sign marker for a charge of the given polarity.
#[must_use]
pub const fn default_marker(kind: FieldKind, polarity: Polarity) -> &'static str {
    match (kind, polarity) {
        (FieldKind::Electric, Polarity::Negative) => "\u{2212}",
        (FieldKind::Electric, Polarity::Positive) => "+",
        (FieldKind::Magnetic, Polarity::Negative) => "S",
        (FieldKind::Magnetic, Polarity::Positive) => "N",
    }
}

/// Everything a renderer needs to draw one charge.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeGlyph {
    /// Center of the circle.
    pub center: R2,
    /// Circle radius, equal to the charge's capture radius.
    pub radius: Scalar,
    /// Resolved fill color.
    pub color: String,
    /// Resolved marker glyph, if any.
    pub marker: Option<String>,
    /// Outline width.
    pub linewidth: Scalar,
}

/// Resolves a charge's display metadata against the per-kind defaults.
#[must_use]
pub fn charge_glyph(charge: &PointCharge, kind: FieldKind) -> ChargeGlyph {
    let polarity = charge.polarity();
    let color = charge
        .style
        .color
        .clone()
        .unwrap_or_else(|| default_color(kind, polarity).to_string());
    let marker = charge.style.marker.as_ref().map(|m| match m {
        Marker::Auto => default_marker(kind, polarity).to_string(),
        Marker::Text(text) => text.clone(),
    });
    ChargeGlyph {
        center: charge.location,
        radius: charge.radius,
        color,
        marker,
        linewidth: charge.style.linewidth,
    }
}
