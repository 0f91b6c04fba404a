use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use monogram_engine::paint::{Color, GradientTable};
use monogram_engine::text::{FontSource, FontdueRasterizer, TextRasterizer};

use crate::error::AvatarError;

pub const DEFAULT_SIZE: u32 = 250;
pub const DEFAULT_MAX_INITIALS: usize = 2;
/// Largest output edge length. The oversampled canvas for this size is
/// about 600 MB of RGBA; larger requests are clamped down to it.
pub const MAX_SIZE: u32 = 4096;

/// User-facing avatar configuration.
///
/// Every field has a usable default; malformed values are normalized by
/// [`resolve`](Self::resolve) rather than rejected.
#[derive(Debug, Clone)]
pub struct AvatarOptions {
    /// Flat background, used when `gradient` is empty. Default: gray.
    pub background: Color,
    /// Output edge length in pixels, clamped to `1..=MAX_SIZE`. Default: 250.
    pub size: i64,
    /// Font to render the label with. Required.
    pub font: Option<FontSource>,
    /// Font size in oversampled canvas pixels, used as given; `0` (or
    /// anything non-positive) auto-fits.
    pub font_size: f32,
    /// Default: white.
    pub text_color: Color,
    /// Initials to extract; `0` renders the text verbatim. Default: 2.
    pub max_initials: usize,
    /// Vertical background gradient; overrides `background` when non-empty.
    pub gradient: GradientTable,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            background: Color::GRAY,
            size: DEFAULT_SIZE as i64,
            font: None,
            font_size: 0.0,
            text_color: Color::WHITE,
            max_initials: DEFAULT_MAX_INITIALS,
            gradient: GradientTable::default(),
        }
    }
}

impl AvatarOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    pub fn with_font(mut self, font: FontSource) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_font_path(self, path: impl Into<PathBuf>) -> Self {
        self.with_font(FontSource::Path(path.into()))
    }

    pub fn with_font_bytes(self, bytes: impl Into<Vec<u8>>) -> Self {
        self.with_font(FontSource::Bytes(bytes.into()))
    }

    pub fn with_font_size(mut self, px: f32) -> Self {
        self.font_size = px;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_max_initials(mut self, n: usize) -> Self {
        self.max_initials = n;
        self
    }

    pub fn with_gradient(mut self, gradient: GradientTable) -> Self {
        self.gradient = gradient;
        self
    }

    /// Loads the configured font and normalizes every option.
    pub fn resolve(&self) -> Result<ResolvedOptions, AvatarError> {
        let font = self.font.as_ref().ok_or(AvatarError::InvalidFontPath)?.load()?;
        Ok(self.resolve_with(Arc::new(FontdueRasterizer::new(font))))
    }

    /// Normalizes every option, drawing text with `rasterizer` instead of the
    /// configured font.
    pub fn resolve_with(&self, rasterizer: Arc<dyn TextRasterizer>) -> ResolvedOptions {
        let size = self.size.clamp(1, MAX_SIZE as i64) as u32;
        if size as i64 != self.size {
            log::warn!("AvatarOptions: size {} normalized to {size}", self.size);
        }

        let font_size = if self.font_size.is_finite() && self.font_size > 0.0 {
            Some(self.font_size)
        } else {
            if self.font_size != 0.0 {
                log::warn!("AvatarOptions: font size {} ignored, auto-fitting", self.font_size);
            }
            None
        };

        let gradient = (!self.gradient.is_empty()).then(|| self.gradient.clone());

        ResolvedOptions {
            size,
            background: self.background,
            text_color: self.text_color,
            font_size,
            max_initials: self.max_initials,
            gradient,
            rasterizer,
        }
    }
}

/// Options after normalization. Downstream code never re-checks defaults.
#[derive(Clone)]
pub struct ResolvedOptions {
    pub size: u32,
    pub background: Color,
    pub text_color: Color,
    /// `None` means auto-fit.
    pub font_size: Option<f32>,
    pub max_initials: usize,
    /// `None` means flat `background`.
    pub gradient: Option<GradientTable>,
    pub rasterizer: Arc<dyn TextRasterizer>,
}

impl fmt::Debug for ResolvedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedOptions")
            .field("size", &self.size)
            .field("background", &self.background)
            .field("text_color", &self.text_color)
            .field("font_size", &self.font_size)
            .field("max_initials", &self.max_initials)
            .field("gradient", &self.gradient)
            .finish_non_exhaustive()
    }
}
