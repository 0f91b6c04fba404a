//! Background synthesis, label sizing, and centering at oversampled
//! resolution.

use monogram_engine::coords::Vec2;
use monogram_engine::raster::Canvas;
use monogram_engine::text::TextRasterizer;

use crate::initials::extract_initials;
use crate::options::ResolvedOptions;

/// Internal resolution multiplier. Output is reconciled to `size × size`
/// when encoding.
pub const OVERSAMPLE: u32 = 3;

/// Font size used to measure a label before scaling it to fit.
pub const MEASURE_PX: f32 = 100.0;

/// Fraction of the canvas width left empty around an auto-fitted label.
pub const FIT_MARGIN: f32 = 0.4;

/// Result of [`render_original`]: the oversampled canvas shared by every
/// output shape.
#[derive(Debug, Clone)]
pub struct Composition {
    pub canvas: Canvas,
    pub label: String,
    pub font_px: f32,
}

/// Returns the text to draw: initials when `max_initials > 0`, otherwise
/// `text` verbatim.
pub fn label_for(text: &str, max_initials: usize) -> String {
    if max_initials > 0 {
        extract_initials(text, max_initials)
    } else {
        text.to_owned()
    }
}

/// Single-shot estimate of the font size at which `label` spans
/// `1 - FIT_MARGIN` of `canvas_width`.
///
/// The label is measured once at [`MEASURE_PX`] and scaled linearly; the chosen
/// size is not re-measured, so glyph hinting or kerning at the final size can
/// make the label slightly wider or narrower than the target.
pub fn auto_fit_font_size(label: &str, canvas_width: f32, rasterizer: &dyn TextRasterizer) -> f32 {
    let target = canvas_width - FIT_MARGIN * canvas_width;
    let measured = rasterizer.measure(label, MEASURE_PX).advance;
    if !(measured.is_finite() && measured > 0.0) {
        return target;
    }
    (MEASURE_PX / measured) * target
}

/// Renders the label over the background at `OVERSAMPLE ×` the requested
/// size.
pub fn render_original(text: &str, options: &ResolvedOptions) -> Composition {
    let size = options.size * OVERSAMPLE;
    let extent = size as f32;

    let mut canvas = options
        .gradient
        .as_ref()
        .and_then(|g| Canvas::with_vertical_gradient(size, size, g))
        .unwrap_or_else(|| Canvas::new(size, size, options.background));

    let label = label_for(text, options.max_initials);
    let rasterizer = options.rasterizer.as_ref();

    let font_px = match options.font_size {
        Some(px) => px,
        None => auto_fit_font_size(&label, extent, rasterizer),
    };

    if !label.is_empty() {
        let metrics = rasterizer.measure(&label, font_px);
        let origin = Vec2::new(
            extent / 2.0 - metrics.advance / 2.0,
            extent / 2.0 + metrics.ink_height() / 2.0,
        );
        rasterizer.draw(&mut canvas, &label, font_px, origin, options.text_color);
    }

    log::debug!(
        "render_original: {size}px canvas, label {label:?} at {font_px:.1}px, {}",
        if options.gradient.is_some() { "gradient" } else { "flat" }
    );

    Composition { canvas, label, font_px }
}
