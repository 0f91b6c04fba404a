use super::Color;
use super::color::ColorParseError;

/// A single gradient keypoint.
///
/// `pos` is expected in [0, 1] in typical usage, but is not strictly enforced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub color: Color,
    pub pos: f32,
}

impl GradientStop {
    #[inline]
    pub const fn new(color: Color, pos: f32) -> Self {
        Self { color, pos }
    }
}

/// Ordered table of gradient keypoints.
///
/// Invariants (enforced by [`GradientTable::new`]):
/// - every `pos` is finite;
/// - positions are non-decreasing; stops that share a position keep their
///   insertion order.
///
/// An empty table means "no gradient": callers fall back to a flat fill.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradientTable {
    stops: Vec<GradientStop>,
}

impl GradientTable {
    /// Builds a table, dropping stops with non-finite positions and sorting
    /// the rest by position.
    pub fn new(stops: impl IntoIterator<Item = GradientStop>) -> Self {
        let mut stops: Vec<GradientStop> = stops.into_iter().collect();
        let before = stops.len();
        stops.retain(|s| s.pos.is_finite());
        if stops.len() != before {
            log::warn!(
                "GradientTable: dropped {} stop(s) with non-finite positions",
                before - stops.len()
            );
        }
        // Stable sort: equal positions keep their authored order.
        stops.sort_by(|a, b| a.pos.total_cmp(&b.pos));
        Self { stops }
    }

    /// Builds a table from `(hex, position)` literals.
    pub fn from_hex_stops(stops: &[(&str, f32)]) -> Result<Self, ColorParseError> {
        let parsed = stops
            .iter()
            .map(|&(hex, pos)| Color::from_hex(hex).map(|c| GradientStop::new(c, pos)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(parsed))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Returns the HCL blend of the two stops bracketing `t`.
    ///
    /// - `t` before the first stop yields the first color unchanged; past
    ///   the last stop, the last color. No extrapolation.
    /// - When several adjacent pairs bracket `t` (duplicate positions), the
    ///   first pair in table order wins.
    /// - The result is always inside the sRGB gamut.
    ///
    /// Returns `None` for an empty table.
    pub fn interpolate(&self, t: f32) -> Option<Color> {
        let first = self.stops.first()?;
        let last = self.stops.last()?;

        if t < first.pos {
            return Some(first.color);
        }
        if t > last.pos {
            return Some(last.color);
        }

        for pair in self.stops.windows(2) {
            let (c1, c2) = (pair[0], pair[1]);
            if c1.pos <= t && t <= c2.pos {
                let span = c2.pos - c1.pos;
                if span <= 0.0 {
                    return Some(c1.color);
                }
                let u = (t - c1.pos) / span;
                return Some(c1.color.mix_hcl(c2.color, u));
            }
        }

        // Single stop, or NaN `t`.
        Some(last.color)
    }
}
