//! CPU raster targets.
//!
//! A [`Canvas`] is a single owned RGBA arena. Draw steps borrow it mutably one
//! after another (background, then glyphs, then masks); nothing is shared.

mod canvas;
mod mask;

pub use canvas::Canvas;
pub use mask::mask_circle;
