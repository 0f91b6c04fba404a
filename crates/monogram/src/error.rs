use std::fmt;
use std::io;
use std::path::PathBuf;

use monogram_engine::encode::EncodeError;
use monogram_engine::paint::ColorParseError;
use monogram_engine::text::FontLoadError;

/// Errors surfaced by avatar construction, encoding, and color parsing.
///
/// Rendering itself has no failure modes; everything here comes from the
/// boundaries (font source, color literals, byte encoding).
#[derive(Debug)]
pub enum AvatarError {
    /// No usable font source was configured.
    InvalidFontPath,
    /// The font file exists but could not be read.
    FontRead { path: PathBuf, source: io::Error },
    /// Font bytes were present but could not be parsed.
    FontLoadFailure(String),
    /// A color literal was malformed.
    InvalidColorHex(ColorParseError),
    /// A named color table entry was malformed.
    InvalidPalette { name: String, source: ColorParseError },
    /// The pixel buffer could not be encoded.
    Encode(EncodeError),
}

impl fmt::Display for AvatarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFontPath => write!(f, "no font path given"),
            Self::FontRead { path, source } => {
                write!(f, "cannot read font {}: {source}", path.display())
            }
            Self::FontLoadFailure(msg) => write!(f, "cannot parse font: {msg}"),
            Self::InvalidColorHex(e) => write!(f, "{e}"),
            Self::InvalidPalette { name, source } => {
                write!(f, "palette entry {name:?}: {source}")
            }
            Self::Encode(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AvatarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FontRead { source, .. } => Some(source),
            Self::InvalidColorHex(e) => Some(e),
            Self::InvalidPalette { source, .. } => Some(source),
            Self::Encode(e) => Some(e),
            Self::InvalidFontPath | Self::FontLoadFailure(_) => None,
        }
    }
}

impl From<FontLoadError> for AvatarError {
    fn from(e: FontLoadError) -> Self {
        match e {
            FontLoadError::MissingPath => Self::InvalidFontPath,
            FontLoadError::Read { path, source } => Self::FontRead { path, source },
            FontLoadError::Parse(msg) => Self::FontLoadFailure(msg),
        }
    }
}

impl From<ColorParseError> for AvatarError {
    fn from(e: ColorParseError) -> Self {
        Self::InvalidColorHex(e)
    }
}

impl From<EncodeError> for AvatarError {
    fn from(e: EncodeError) -> Self {
        Self::Encode(e)
    }
}
