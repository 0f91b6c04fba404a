//! Coordinate types shared by the canvas and text rasterizers.
//!
//! Canonical CPU space:
//! - Physical canvas pixels
//! - Origin top-left
//! - +X right, +Y down

mod vec2;

pub use vec2::Vec2;
