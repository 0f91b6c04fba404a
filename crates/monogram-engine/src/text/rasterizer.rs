use std::sync::Arc;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::raster::Canvas;

/// Horizontal advance and ink extent of a laid-out string.
///
/// Vertical values are relative to the baseline in +Y-down canvas space, so
/// ink above the baseline is negative.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TextMetrics {
    pub advance: f32,
    pub ink_top: f32,
    pub ink_bottom: f32,
}

impl TextMetrics {
    #[inline]
    pub fn ink_height(&self) -> f32 {
        self.ink_bottom - self.ink_top
    }
}

/// Measures and draws single-line text.
///
/// `measure` and `draw` must agree: drawing at `origin` places the pen at
/// `origin.x` on the baseline `origin.y` and advances by exactly
/// `measure(..).advance`.
pub trait TextRasterizer: Send + Sync {
    fn measure(&self, text: &str, px: f32) -> TextMetrics;

    fn draw(&self, canvas: &mut Canvas, text: &str, px: f32, origin: Vec2, color: Color);
}

/// [`TextRasterizer`] over a shared fontdue face.
#[derive(Clone)]
pub struct FontdueRasterizer {
    font: Arc<fontdue::Font>,
}

impl FontdueRasterizer {
    pub fn new(font: Arc<fontdue::Font>) -> Self {
        Self { font }
    }

    /// Walks `text` left to right, yielding each char with its pen x offset
    /// (kerning applied) and glyph metrics.
    fn for_each_glyph(&self, text: &str, px: f32, mut f: impl FnMut(char, f32, &fontdue::Metrics)) -> f32 {
        let mut pen = 0.0f32;
        let mut prev: Option<char> = None;
        for ch in text.chars() {
            if let Some(left) = prev {
                pen += self.font.horizontal_kern(left, ch, px).unwrap_or(0.0);
            }
            let m = self.font.metrics(ch, px);
            f(ch, pen, &m);
            pen += m.advance_width;
            prev = Some(ch);
        }
        pen
    }
}

impl TextRasterizer for FontdueRasterizer {
    fn measure(&self, text: &str, px: f32) -> TextMetrics {
        let mut top = f32::INFINITY;
        let mut bottom = f32::NEG_INFINITY;

        let advance = self.for_each_glyph(text, px, |_, _, m| {
            if m.width == 0 || m.height == 0 {
                return;
            }
            top = top.min(-((m.ymin + m.height as i32) as f32));
            bottom = bottom.max(-(m.ymin as f32));
        });

        if top > bottom {
            return TextMetrics { advance, ink_top: 0.0, ink_bottom: 0.0 };
        }
        TextMetrics { advance, ink_top: top, ink_bottom: bottom }
    }

    fn draw(&self, canvas: &mut Canvas, text: &str, px: f32, origin: Vec2, color: Color) {
        let baseline = origin.y.round() as i64;
        let mut glyphs = 0usize;

        self.for_each_glyph(text, px, |ch, pen, m| {
            if m.width == 0 || m.height == 0 {
                return;
            }
            let (m, bitmap) = self.font.rasterize(ch, px);
            let left = (origin.x + pen).round() as i64 + m.xmin as i64;
            let top = baseline - (m.ymin as i64 + m.height as i64);

            for (row, line) in bitmap.chunks_exact(m.width).enumerate() {
                for (col, &coverage) in line.iter().enumerate() {
                    canvas.blend_coverage(left + col as i64, top + row as i64, coverage, color);
                }
            }
            glyphs += 1;
        });

        log::trace!("FontdueRasterizer: drew {glyphs} glyph(s) at {px}px");
    }
}
