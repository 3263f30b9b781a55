#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Numeric defaults shared throughout the crate.
pub mod constants;
/// Shared mathematical utilities (scalars, vectors).
pub mod math;
/// Point charges and their display metadata.
pub mod elements;
/// Static scenes, field superposition, and capture detection.
pub mod field;
/// Field-line tracing and connection bookkeeping.
pub mod trace;
/// Charge arrangements on regular polygons.
pub mod shapes;
/// Renderer-facing glyph metadata resolution.
pub mod render;
/// Plain-text exports of traced field lines.
pub mod io;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
