//! Initials avatars.
//!
//! Reduces a name, handle, or email address to a short label, draws it
//! centered over a flat or gradient background, and hands back square or
//! circular PNG bytes.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`initials`] | `extract_initials`, email detection |
//! | [`options`] | `AvatarOptions`, normalized `ResolvedOptions` |
//! | [`compositor`] | oversampled background + label rendering |
//! | [`avatar`] | `Avatar` with `square()` / `circle()` output |
//! | [`named`] | validated named color tables |
//! | [`error`] | `AvatarError` |
//!
//! # Quick start
//!
//! ```rust,no_run
//! use monogram::{Avatar, AvatarOptions};
//!
//! let options = AvatarOptions::new().with_size(200).with_font_path("DejaVuSans.ttf");
//! let avatar = Avatar::from_initials("John Smith", &options)?;
//! let png: Vec<u8> = avatar.circle()?;
//! # Ok::<(), monogram::AvatarError>(())
//! ```

pub mod avatar;
pub mod compositor;
pub mod error;
pub mod initials;
pub mod named;
pub mod options;

pub use avatar::{Avatar, Shape};
pub use error::AvatarError;
pub use initials::extract_initials;
pub use monogram_engine::logging::{LoggingConfig, init_logging};
pub use monogram_engine::paint::{Color, GradientStop, GradientTable};
pub use named::NamedColors;
pub use options::{AvatarOptions, MAX_SIZE, ResolvedOptions};

/// Parses a `#rgb`, `#rrggbb`, or `#rrggbbaa` color literal.
pub fn parse_color_hex(s: &str) -> Result<Color, AvatarError> {
    Ok(Color::from_hex(s)?)
}

/// Parses a color literal written in source.
///
/// # Panics
///
/// Panics on a malformed literal. Never pass runtime input here; use
/// [`parse_color_hex`] or a [`NamedColors`] table instead.
#[track_caller]
pub fn must_parse_color_hex(s: &'static str) -> Color {
    Color::must_from_hex(s)
}
