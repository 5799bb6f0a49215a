//! Icon classification
//!
//! Hosts send icons as free-form strings. They are classified once, when
//! an entry is normalized, into a closed [`IconRef`] so the renderer never
//! has to re-inspect the raw value.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{self, Display};

static IMAGE_URI_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(https?://|nui://)").expect("valid image URI regex")
});

static IMAGE_FILE_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(png|jpg|jpeg|gif|webp|svg)(\?.*)?$")
        .expect("valid image suffix regex")
});

/// Class tokens that identify a glyph-font icon (Font Awesome families).
pub const GLYPH_MARKERS: [&str; 6] = ["fa-", "fas", "far", "fab", "fal", "fad"];

/// Renderable icon reference, decided at normalization time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IconRef {
    /// Absolute http(s)/nui URI or a path ending in an image suffix.
    ImageIcon(String),
    /// Glyph-font class list, e.g. `fas fa-car`.
    GlyphIcon(String),
    #[default]
    None,
}

impl IconRef {
    /// Classify a raw icon value. Surrounding whitespace is ignored.
    pub fn classify(raw: &str) -> Self {
        let value = raw.trim();
        if value.is_empty() {
            return IconRef::None;
        }
        if IMAGE_URI_PREFIX.is_match(value) || IMAGE_FILE_SUFFIX.is_match(value)
        {
            return IconRef::ImageIcon(value.to_string());
        }
        if GLYPH_MARKERS.iter().any(|marker| value.contains(marker)) {
            return IconRef::GlyphIcon(value.to_string());
        }
        IconRef::None
    }

    pub fn is_none(&self) -> bool {
        matches!(self, IconRef::None)
    }
}

impl Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconRef::ImageIcon(uri) => write!(f, "image({uri})"),
            IconRef::GlyphIcon(class) => write!(f, "glyph({class})"),
            IconRef::None => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_uris_are_images() {
        assert_eq!(
            IconRef::classify("https://cdn.example.com/car"),
            IconRef::ImageIcon("https://cdn.example.com/car".into())
        );
        assert_eq!(
            IconRef::classify("NUI://inventory/html/images/water.png"),
            IconRef::ImageIcon("NUI://inventory/html/images/water.png".into())
        );
    }

    #[test]
    fn image_suffix_with_query_is_image() {
        assert_eq!(
            IconRef::classify("  images/burger.WEBP?v=3 "),
            IconRef::ImageIcon("images/burger.WEBP?v=3".into())
        );
        assert_eq!(
            IconRef::classify("icon.svg"),
            IconRef::ImageIcon("icon.svg".into())
        );
    }

    #[test]
    fn glyph_markers_are_glyphs() {
        assert_eq!(
            IconRef::classify("fas fa-car"),
            IconRef::GlyphIcon("fas fa-car".into())
        );
        assert_eq!(
            IconRef::classify("fab"),
            IconRef::GlyphIcon("fab".into())
        );
    }

    #[test]
    fn everything_else_is_none() {
        assert_eq!(IconRef::classify(""), IconRef::None);
        assert_eq!(IconRef::classify("   "), IconRef::None);
        assert_eq!(IconRef::classify("car"), IconRef::None);
        assert_eq!(IconRef::classify("picture.bmp"), IconRef::None);
    }

    #[test]
    fn image_wins_over_glyph_tokens() {
        // A URL containing "fa-" is still an image.
        assert!(matches!(
            IconRef::classify("https://x.test/fa-logo"),
            IconRef::ImageIcon(_)
        ));
    }
}
