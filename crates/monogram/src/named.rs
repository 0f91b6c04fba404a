//! Named color tables validated once at startup.

use monogram_engine::paint::{Color, GradientStop, GradientTable};

use crate::error::AvatarError;

/// Default avatar palette as `(name, hex)` literals.
pub const BUILTIN: &[(&str, &str)] = &[
    ("gray", "#808080"),
    ("white", "#ffffff"),
    ("black", "#000000"),
    ("sky", "#82a7e8"),
    ("ocean", "#4b6ecd"),
    ("coral", "#e06c75"),
    ("amber", "#e5c07b"),
    ("sage", "#98c379"),
    ("teal", "#56b6c2"),
    ("plum", "#c678dd"),
];

/// Validated `name → color` table.
///
/// Built once from literals with [`load`](Self::load); a bad entry is a
/// configuration error surfaced before any avatar is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedColors {
    entries: Vec<(String, Color)>,
}

impl NamedColors {
    /// Parses every entry, failing on the first malformed hex literal.
    pub fn load(table: &[(&str, &str)]) -> Result<Self, AvatarError> {
        let entries = table
            .iter()
            .map(|&(name, hex)| {
                Color::from_hex(hex)
                    .map(|c| (name.to_owned(), c))
                    .map_err(|source| AvatarError::InvalidPalette { name: name.to_owned(), source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("NamedColors: loaded {} colors", entries.len());
        Ok(Self { entries })
    }

    /// Loads [`BUILTIN`].
    pub fn builtin() -> Result<Self, AvatarError> {
        Self::load(BUILTIN)
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<Color> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, c)| c)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds an evenly spaced gradient from named colors.
    ///
    /// Returns `None` if any name is unknown. One name gives a single-stop
    /// table; no names give an empty one.
    pub fn gradient(&self, names: &[&str]) -> Option<GradientTable> {
        let last = names.len().saturating_sub(1).max(1) as f32;
        names
            .iter()
            .enumerate()
            .map(|(i, name)| self.get(name).map(|c| GradientStop::new(c, i as f32 / last)))
            .collect::<Option<Vec<_>>>()
            .map(GradientTable::new)
    }
}
