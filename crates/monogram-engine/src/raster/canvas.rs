use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::paint::{Color, GradientTable};

/// Owned straight-alpha RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Creates a `width × height` canvas filled with `color`.
    ///
    /// Zero dimensions are raised to 1.
    pub fn new(width: u32, height: u32, color: Color) -> Self {
        let pixels = RgbaImage::from_pixel(width.max(1), height.max(1), Rgba(color.to_rgba8()));
        Self { pixels }
    }

    /// Creates a canvas painted with a top-to-bottom gradient.
    ///
    /// Returns `None` when `table` is empty.
    pub fn with_vertical_gradient(width: u32, height: u32, table: &GradientTable) -> Option<Self> {
        if table.is_empty() {
            return None;
        }
        let mut canvas = Self::new(width, height, Color::TRANSPARENT);
        canvas.fill_vertical_gradient(table);
        Some(canvas)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Fills each row `y` uniformly with `table.interpolate(y / height)`.
    ///
    /// Leaves the canvas untouched when `table` is empty.
    pub fn fill_vertical_gradient(&mut self, table: &GradientTable) {
        let height = self.height();
        for (y, row) in self.pixels.rows_mut().enumerate() {
            let t = y as f32 / height as f32;
            let Some(color) = table.interpolate(t) else { return };
            let px = Rgba(color.to_rgba8());
            for p in row {
                *p = px;
            }
        }
        log::trace!("Canvas: filled {height} gradient rows from {} stops", table.len());
    }

    /// Source-over composites `color` at `(x, y)` weighted by an 8-bit
    /// coverage value. Out-of-bounds coordinates are ignored.
    pub fn blend_coverage(&mut self, x: i64, y: i64, coverage: u8, color: Color) {
        if coverage == 0 || x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        let dst = self.pixels.get_pixel_mut(x as u32, y as u32);
        *dst = over(*dst, color, coverage as f32 / 255.0);
    }

    /// Reconciles an oversampled canvas to `size × size`.
    ///
    /// Returns a copy when the canvas already has that size.
    pub fn downsampled(&self, size: u32) -> RgbaImage {
        let size = size.max(1);
        if self.width() == size && self.height() == size {
            return self.pixels.clone();
        }
        imageops::resize(&self.pixels, size, size, FilterType::Triangle)
    }
}

fn over(dst: Rgba<u8>, src: Color, coverage: f32) -> Rgba<u8> {
    let (sr, sg, sb, sa) = src.components();
    let sa = sa * coverage;
    if sa <= 0.0 {
        return dst;
    }

    let [dr, dg, db, da] = dst.0.map(|c| c as f32 / 255.0);
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |s: f32, d: f32| (s * sa + d * da * (1.0 - sa)) / out_a;
    let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba([q(channel(sr, dr)), q(channel(sg, dg)), q(channel(sb, db)), q(out_a)])
}
