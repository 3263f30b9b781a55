//! Generators for charge arrangements on regular polygons.

use std::f64::consts::TAU;

use num_complex::Complex;

use crate::elements::PointCharge;
use crate::math::{R2, Scalar};

/// Vertices of a regular polygon with `2n` corners on a circle of
/// radius `r` around the origin.
///
/// Without `skew` the corners sit half a slot off the axes; with `skew`
/// the first corner lies on the +x axis, rotating the polygon by half
/// the angle between two poles.
#[must_use]
pub fn regular_polygon(n: usize, skew: bool, r: Scalar) -> Vec<R2> {
    let corners = 2 * n;
    let offset = if skew { 0.0 } else { 0.5 };
    (0..corners)
        .map(|k| {
            let theta = TAU * (k as Scalar + offset) / corners as Scalar;
            let c = Complex::from_polar(r, theta);
            R2::new(c.re, c.im)
        })
        .collect()
}

/// A multipole of order `2n`: alternating-polarity unit charges at the
/// corners of a regular polygon on the unit circle.
///
/// Even corners carry `q = -1`, odd corners `q = +1`.
#[must_use]
pub fn generate_multipole(n: usize, skew: bool) -> Vec<PointCharge> {
    regular_polygon(n, skew, 1.0)
        .into_iter()
        .enumerate()
        .map(|(idx, location)| {
            let q = if idx % 2 == 0 { -1.0 } else { 1.0 };
            PointCharge::new(location, q)
        })
        .collect()
}
