//! Monogram engine crate.
//!
//! This crate owns the pixel-level pieces used by the avatar layer: colors and
//! gradients, the owned RGBA canvas, glyph rasterization, and PNG encoding.

pub mod coords;
pub mod encode;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod text;
