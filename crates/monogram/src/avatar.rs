use std::sync::Arc;

use image::RgbaImage;
use monogram_engine::encode::{ImageEncoder, PngEncoder};
use monogram_engine::raster::{Canvas, mask_circle};
use monogram_engine::text::TextRasterizer;

use crate::compositor::{Composition, render_original};
use crate::error::AvatarError;
use crate::options::{AvatarOptions, ResolvedOptions};

/// Output shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Shape {
    Square,
    Circle,
}

/// A rendered initials avatar.
///
/// The background and label are composited once, at construction; every
/// output shape is derived from that single oversampled canvas.
#[derive(Debug, Clone)]
pub struct Avatar {
    source: String,
    options: ResolvedOptions,
    original: Composition,
}

impl Avatar {
    /// Loads the configured font and renders `text`.
    pub fn from_initials(text: impl Into<String>, options: &AvatarOptions) -> Result<Self, AvatarError> {
        let resolved = options.resolve()?;
        Ok(Self::render(text.into(), resolved))
    }

    /// Renders `text` with a caller-supplied rasterizer; the configured font
    /// source is ignored.
    pub fn from_initials_with(
        text: impl Into<String>,
        options: &AvatarOptions,
        rasterizer: Arc<dyn TextRasterizer>,
    ) -> Self {
        Self::render(text.into(), options.resolve_with(rasterizer))
    }

    fn render(source: String, options: ResolvedOptions) -> Self {
        let original = render_original(&source, &options);
        Self { source, options, original }
    }

    /// The text the avatar was built from.
    #[inline]
    pub fn source(&self) -> &[u8] {
        self.source.as_bytes()
    }

    /// The label that was actually drawn.
    #[inline]
    pub fn label(&self) -> &str {
        &self.original.label
    }

    /// Font size the label was drawn at, in oversampled canvas pixels.
    #[inline]
    pub fn font_px(&self) -> f32 {
        self.original.font_px
    }

    #[inline]
    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// The oversampled composite both shapes derive from.
    #[inline]
    pub fn original(&self) -> &Canvas {
        &self.original.canvas
    }

    /// `size × size` pixels for `shape`.
    pub fn image(&self, shape: Shape) -> RgbaImage {
        let mut img = self.original.canvas.downsampled(self.options.size);
        if shape == Shape::Circle {
            mask_circle(&mut img);
        }
        img
    }

    /// Encodes `shape` with `encoder`.
    pub fn encode(&self, shape: Shape, encoder: &dyn ImageEncoder) -> Result<Vec<u8>, AvatarError> {
        let bytes = encoder.encode(&self.image(shape))?;
        log::debug!("Avatar: encoded {shape:?} {0}x{0} into {1} bytes", self.options.size, bytes.len());
        Ok(bytes)
    }

    /// PNG bytes of the square avatar.
    pub fn square(&self) -> Result<Vec<u8>, AvatarError> {
        self.encode(Shape::Square, &PngEncoder)
    }

    /// PNG bytes of the avatar masked to its inscribed circle.
    pub fn circle(&self) -> Result<Vec<u8>, AvatarError> {
        self.encode(Shape::Circle, &PngEncoder)
    }
}
