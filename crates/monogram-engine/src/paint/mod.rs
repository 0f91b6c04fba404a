//! Paint model shared between the canvas and the avatar layer.
//!
//! Scope:
//! - color representation (straight sRGB, HCL blending, hex literals)
//! - keypoint gradient tables

pub mod color;
pub mod gradient;

pub use color::{Color, ColorParseError};
pub use gradient::{GradientStop, GradientTable};
