use image::RgbaImage;

use crate::coords::Vec2;

/// Masks everything outside the inscribed circle to transparent.
///
/// The circle is centered on the image with radius `min(width, height) / 2`.
/// Coverage is measured from each pixel center:
/// - distance `> radius`: alpha becomes 0;
/// - distance `<= radius - 1`: pixel unchanged;
/// - in between: alpha scaled by `radius - distance` (a one-pixel AA ring).
pub fn mask_circle(img: &mut RgbaImage) {
    let (w, h) = img.dimensions();
    let center = Vec2::new(w as f32 / 2.0, h as f32 / 2.0);
    let radius = w.min(h) as f32 / 2.0;

    for (x, y, px) in img.enumerate_pixels_mut() {
        let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5).distance(center);
        let coverage = (radius - d).clamp(0.0, 1.0);
        if coverage >= 1.0 {
            continue;
        }
        px.0[3] = (px.0[3] as f32 * coverage).round() as u8;
    }
}
