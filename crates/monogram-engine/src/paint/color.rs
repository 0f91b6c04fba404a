use std::fmt;

use palette::convert::FromColorUnclamped;
use palette::{Clamp, FromColor, Lch, Mix, Srgb};

/// Error returned by [`Color::from_hex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    pub input: String,
    pub reason: &'static str,
}

impl ColorParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self { input: input.to_owned(), reason }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color hex {:?}: {}", self.input, self.reason)
    }
}

impl std::error::Error for ColorParseError {}

/// Straight-alpha sRGB color.
///
/// Invariant:
/// - every channel lives in `[0, 1]`; constructors clamp, so a `Color` is
///   always inside the representable gamut.
///
/// Blending happens in CIE L\*C\*h° (HCL) via [`mix_hcl`](Self::mix_hcl), which
/// gives visually even gradients. Results are clamped back into sRGB because a
/// blend in HCL can leave the gamut between two in-gamut endpoints.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_srgb_u8(0, 0, 0, 0);
    pub const BLACK: Color = Color::from_srgb_u8(0, 0, 0, 255);
    pub const WHITE: Color = Color::from_srgb_u8(255, 255, 255, 255);
    pub const GRAY: Color = Color::from_srgb_u8(128, 128, 128, 255);

    /// Creates a color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub const fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a color from straight sRGB `f32` components, clamped to `[0, 1]`.
    ///
    /// Non-finite components collapse to `0`.
    #[inline]
    pub fn from_srgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r: unit(r), g: unit(g), b: unit(b), a: unit(a) }
    }

    /// Parses `#rgb`, `#rrggbb`, or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let Some(hex) = s.strip_prefix('#') else {
            return Err(ColorParseError::new(s, "missing leading '#'"));
        };
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::new(s, "non-hex digit"));
        }

        // All characters are ASCII hex digits from here on, so byte slicing is
        // on char boundaries.
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|n| n * 17);

        let parsed = match hex.len() {
            3 => (nibble(0), nibble(1), nibble(2), Ok(255)),
            6 => (byte(0), byte(2), byte(4), Ok(255)),
            8 => (byte(0), byte(2), byte(4), byte(6)),
            _ => return Err(ColorParseError::new(s, "expected #rgb, #rrggbb, or #rrggbbaa")),
        };

        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Self::from_srgb_u8(r, g, b, a)),
            _ => Err(ColorParseError::new(s, "non-hex digit")),
        }
    }

    /// Parses a hex literal that is known to be valid at compile time.
    ///
    /// # Panics
    ///
    /// Panics on a malformed literal. Only use this for constants written in
    /// source; anything loaded at runtime goes through [`from_hex`](Self::from_hex).
    #[track_caller]
    pub fn must_from_hex(s: &'static str) -> Self {
        match Self::from_hex(s) {
            Ok(c) => c,
            Err(e) => panic!("Color::must_from_hex: {e}"),
        }
    }

    /// Returns straight `(r, g, b, a)` components in `[0, 1]`.
    #[inline]
    pub const fn components(self) -> (f32, f32, f32, f32) {
        (self.r, self.g, self.b, self.a)
    }

    #[inline]
    pub const fn alpha(self) -> f32 {
        self.a
    }

    /// Quantizes to straight sRGB bytes.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        [quantize(self.r), quantize(self.g), quantize(self.b), quantize(self.a)]
    }

    /// Returns `(hue°, chroma, lightness)` in CIE L\*C\*h° (D65).
    pub fn to_hcl(self) -> (f32, f32, f32) {
        let lch = self.lch();
        (lch.hue.into_positive_degrees(), lch.chroma, lch.l)
    }

    /// Blends toward `other` in HCL, taking the shorter way around the hue
    /// circle. Alpha is blended linearly.
    ///
    /// `factor <= 0` returns `self` and `factor >= 1` returns `other`
    /// unchanged, so keypoints survive a blend bit-for-bit.
    pub fn mix_hcl(self, other: Color, factor: f32) -> Color {
        if factor.is_nan() || factor <= 0.0 {
            return self;
        }
        if factor >= 1.0 {
            return other;
        }

        let lch = self.lch().mix(other.lch(), factor);
        let rgb: Srgb<f32> = Clamp::clamp(Srgb::from_color_unclamped(lch));
        let a = self.a + (other.a - self.a) * factor;

        Self::from_srgb(rgb.red, rgb.green, rgb.blue, a)
    }

    fn lch(self) -> Lch<palette::white_point::D65, f32> {
        Lch::from_color(Srgb::new(self.r, self.g, self.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

#[inline]
fn unit(v: f32) -> f32 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}

#[inline]
fn quantize(v: f32) -> u8 {
    (v * 255.0).round() as u8
}
