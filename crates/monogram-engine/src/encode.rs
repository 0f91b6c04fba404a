//! Byte encoding of finished pixel buffers.

use std::fmt;
use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

/// Error returned by an [`ImageEncoder`].
#[derive(Debug)]
pub struct EncodeError(pub image::ImageError);

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "encode error: {}", self.0)
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<image::ImageError> for EncodeError {
    fn from(e: image::ImageError) -> Self {
        Self(e)
    }
}

/// Turns an RGBA buffer into a byte stream.
pub trait ImageEncoder {
    fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>, EncodeError>;
}

/// Lossless PNG output. Deterministic: identical pixels give identical bytes.
#[derive(Debug, Copy, Clone, Default)]
pub struct PngEncoder;

impl ImageEncoder for PngEncoder {
    fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::new();
        image.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?;
        Ok(out)
    }
}
