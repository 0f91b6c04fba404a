//! Font loading and glyph rasterization.
//!
//! The avatar layer only sees the [`TextRasterizer`] trait; the fontdue
//! backed [`FontdueRasterizer`] is the production implementation.

mod font;
mod rasterizer;

pub use font::{FontLoadError, FontSource};
pub use rasterizer::{FontdueRasterizer, TextMetrics, TextRasterizer};
