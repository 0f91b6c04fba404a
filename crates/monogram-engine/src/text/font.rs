use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Error returned by [`FontSource::load`].
#[derive(Debug)]
pub enum FontLoadError {
    /// A path source was empty or whitespace.
    MissingPath,
    /// The font file could not be read.
    Read { path: PathBuf, source: io::Error },
    /// The bytes are not a usable TrueType/OpenType font.
    Parse(String),
}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPath => write!(f, "font load error: no font path given"),
            Self::Read { path, source } => {
                write!(f, "font load error: cannot read {}: {source}", path.display())
            }
            Self::Parse(msg) => write!(f, "font load error: {msg}"),
        }
    }
}

impl std::error::Error for FontLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Where a font comes from.
///
/// Parsed fonts are immutable and shared behind an `Arc`, so one loaded face
/// can back any number of renders.
#[derive(Clone)]
pub enum FontSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
    Loaded(Arc<fontdue::Font>),
}

impl FontSource {
    /// Reads (if needed) and parses the font.
    pub fn load(&self) -> Result<Arc<fontdue::Font>, FontLoadError> {
        match self {
            Self::Loaded(font) => Ok(Arc::clone(font)),
            Self::Bytes(bytes) => parse(bytes),
            Self::Path(path) => {
                if path.as_os_str().to_string_lossy().trim().is_empty() {
                    return Err(FontLoadError::MissingPath);
                }
                let bytes = std::fs::read(path)
                    .map_err(|source| FontLoadError::Read { path: path.clone(), source })?;
                log::debug!("FontSource: read {} bytes from {}", bytes.len(), path.display());
                parse(&bytes)
            }
        }
    }
}

impl fmt::Debug for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(p) => f.debug_tuple("Path").field(p).finish(),
            Self::Bytes(b) => write!(f, "Bytes({} bytes)", b.len()),
            Self::Loaded(font) => write!(f, "Loaded({:?})", font.name()),
        }
    }
}

fn parse(bytes: &[u8]) -> Result<Arc<fontdue::Font>, FontLoadError> {
    fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
        .map(Arc::new)
        .map_err(|e| FontLoadError::Parse(e.to_string()))
}
