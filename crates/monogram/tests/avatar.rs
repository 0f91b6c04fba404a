//! End-to-end rendering with a real TrueType font.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use image::RgbaImage;
use monogram::{Avatar, AvatarError, AvatarOptions, Color, GradientTable, Shape};
use monogram_engine::coords::Vec2;
use monogram_engine::raster::Canvas;
use monogram_engine::text::{FontSource, FontdueRasterizer, TextRasterizer};

const FONT: &[u8] = include_bytes!("data/DejaVuSans.ttf");

fn font_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/DejaVuSans.ttf")
}

fn options(size: i64) -> AvatarOptions {
    AvatarOptions::new().with_size(size).with_font_bytes(FONT)
}

fn decode(png: &[u8]) -> Result<RgbaImage> {
    Ok(image::load_from_memory(png).context("decoding avatar png")?.to_rgba8())
}

fn rasterizer() -> Result<FontdueRasterizer> {
    let font = FontSource::Bytes(FONT.to_vec()).load().context("loading bundled font")?;
    Ok(FontdueRasterizer::new(font))
}

// ── construction ──────────────────────────────────────────────────────────

#[test]
fn loads_font_from_path() -> Result<()> {
    let avatar = Avatar::from_initials("John Smith", &AvatarOptions::new().with_font_path(font_path()))?;
    assert_eq!(avatar.label(), "JS");
    assert_eq!(avatar.options().size, 250);
    Ok(())
}

#[test]
fn missing_font_path_is_reported() {
    let err = Avatar::from_initials("John Smith", &AvatarOptions::new()).unwrap_err();
    assert!(matches!(err, AvatarError::InvalidFontPath));
}

#[test]
fn nonexistent_font_file_is_reported() {
    let opts = AvatarOptions::new().with_font_path("/no/such/font.ttf");
    let err = Avatar::from_initials("John Smith", &opts).unwrap_err();
    assert!(matches!(err, AvatarError::FontRead { .. }));
}

#[test]
fn shared_loaded_font_is_reused() -> Result<()> {
    let font = FontSource::Bytes(FONT.to_vec()).load()?;
    let opts = AvatarOptions::new().with_size(32).with_font(FontSource::Loaded(Arc::clone(&font)));
    let a = Avatar::from_initials("Ada Lovelace", &opts)?;
    let b = Avatar::from_initials("Alan Turing", &opts)?;
    assert_eq!((a.label(), b.label()), ("AL", "AT"));
    // Held by `font`, `opts`, and one rasterizer per avatar; never re-parsed.
    assert_eq!(Arc::strong_count(&font), 4);
    Ok(())
}

// ── square ────────────────────────────────────────────────────────────────

#[test]
fn square_is_size_by_size_and_opaque() -> Result<()> {
    let opts = options(200)
        .with_text_color(Color::WHITE)
        .with_background(Color::must_from_hex("#0000ff"));
    let img = decode(&Avatar::from_initials("John Smith", &opts)?.square()?)?;

    assert_eq!(img.dimensions(), (200, 200));
    assert!(img.pixels().all(|p| p.0[3] != 0));
    let corner = img.get_pixel(0, 0).0;
    assert!(corner[2] >= 250 && corner[0] <= 5, "{corner:?}");
    Ok(())
}

#[test]
fn square_contains_text_near_the_center() -> Result<()> {
    let opts = options(120).with_background(Color::BLACK).with_text_color(Color::WHITE);
    let img = decode(&Avatar::from_initials("Marie Curie", &opts)?.square()?)?;

    let bright: Vec<(u32, u32)> = img
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0[0] > 200)
        .map(|(x, y, _)| (x, y))
        .collect();
    assert!(!bright.is_empty(), "no text pixels drawn");

    let n = bright.len() as f32;
    let cx = bright.iter().map(|&(x, _)| x as f32).sum::<f32>() / n;
    let cy = bright.iter().map(|&(_, y)| y as f32).sum::<f32>() / n;
    assert!((cx - 60.0).abs() < 15.0, "cx {cx}");
    assert!((cy - 60.0).abs() < 15.0, "cy {cy}");
    Ok(())
}

#[test]
fn auto_fit_label_spans_most_of_the_width() -> Result<()> {
    let avatar = Avatar::from_initials("John Smith", &options(100))?;
    let r = rasterizer()?;

    // Re-measure at the size the compositor chose: a single-shot fit lands
    // close to 60% of the oversampled canvas.
    let canvas = avatar.original().width() as f32;
    let fitted = r.measure(avatar.label(), avatar.font_px()).advance;
    assert!((fitted / canvas - 0.6).abs() < 0.05, "{}", fitted / canvas);
    Ok(())
}

// ── circle ────────────────────────────────────────────────────────────────

#[test]
fn circle_is_transparent_outside_the_radius() -> Result<()> {
    let gradient = GradientTable::from_hex_stops(&[("#82a7e8", 0.0), ("#4b6ecd", 1.0)])?;
    let opts = options(160).with_font_size(240.0).with_gradient(gradient);
    let avatar = Avatar::from_initials("РЩ", &opts)?;
    assert_eq!(avatar.label(), "РЩ");

    let square = decode(&avatar.square()?)?;
    let circle = decode(&avatar.circle()?)?;
    assert_eq!(circle.dimensions(), (160, 160));

    let center = Vec2::new(80.0, 80.0);
    for (x, y, p) in circle.enumerate_pixels() {
        let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5).distance(center);
        if d > 80.0 {
            assert_eq!(p.0[3], 0, "({x}, {y})");
        } else if d <= 79.0 {
            assert_eq!(p, square.get_pixel(x, y), "({x}, {y})");
        }
    }
    Ok(())
}

// ── determinism ───────────────────────────────────────────────────────────

#[test]
fn identical_inputs_give_identical_bytes() -> Result<()> {
    let gradient = GradientTable::from_hex_stops(&[("#e06c75", 0.0), ("#c678dd", 0.5), ("#61afef", 1.0)])?;
    let opts = options(64).with_gradient(gradient);
    let a = Avatar::from_initials("grace.hopper@navy.mil", &opts)?;
    let b = Avatar::from_initials("grace.hopper@navy.mil", &opts)?;
    assert_eq!(a.label(), "gh");
    assert_eq!(a.square()?, b.square()?);
    assert_eq!(a.circle()?, b.circle()?);
    Ok(())
}

#[test]
fn verbatim_text_when_initials_disabled() -> Result<()> {
    let avatar = Avatar::from_initials("Hi!", &options(48).with_max_initials(0))?;
    assert_eq!(avatar.label(), "Hi!");
    assert_eq!(avatar.image(Shape::Square).dimensions(), (48, 48));
    Ok(())
}

// ── rasterizer ────────────────────────────────────────────────────────────

#[test]
fn fontdue_measure_scales_with_size() -> Result<()> {
    let r = rasterizer()?;
    let small = r.measure("AB", 50.0);
    let large = r.measure("AB", 100.0);
    assert!(small.advance > 0.0);
    assert!((large.advance / small.advance - 2.0).abs() < 0.1);
    assert!(small.ink_top < 0.0 && small.ink_height() > 0.0);
    Ok(())
}

#[test]
fn fontdue_whitespace_has_advance_but_no_ink() -> Result<()> {
    let m = rasterizer()?.measure("   ", 40.0);
    assert!(m.advance > 0.0);
    assert_eq!(m.ink_height(), 0.0);
    Ok(())
}

#[test]
fn fontdue_draw_stays_within_measured_box() -> Result<()> {
    let r = rasterizer()?;
    let mut canvas = Canvas::new(200, 120, Color::BLACK);
    let origin = Vec2::new(20.0, 90.0);
    let m = r.measure("Hg", 60.0);
    r.draw(&mut canvas, "Hg", 60.0, origin, Color::WHITE);

    let lit: Vec<(u32, u32)> = canvas
        .pixels()
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0[0] > 0)
        .map(|(x, y, _)| (x, y))
        .collect();
    assert!(!lit.is_empty());
    for (x, y) in lit {
        assert!(x as f32 >= origin.x - 3.0 && x as f32 <= origin.x + m.advance + 3.0, "x {x}");
        assert!(y as f32 >= origin.y + m.ink_top - 2.0 && y as f32 <= origin.y + m.ink_bottom + 2.0, "y {y}");
    }
    Ok(())
}
