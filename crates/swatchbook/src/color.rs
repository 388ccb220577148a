//! Color entries and palettes.
//!
//! A [`Color`] is the unit every source produces and every sink consumes:
//!
//! - `name`: human-readable label shown in the editor's color picker
//! - `slug`: machine identifier, used as the CSS custom-property name
//! - `color`: a CSS color value, either a hex literal or a functional value
//!   such as `var(--wp--preset--color--primary)`
//!
//! A [`Palette`] is an ordered `Vec<Color>`. Order is significant: it is the
//! display order in the editor and decides which entry survives deduplication.
//!
//! # Color formats
//!
//! [`ColorFormat::classify`] tokenizes a value with `cssparser` to tell hex
//! literals from functional values and keywords. Classification is
//! diagnostic only; nothing on the read path rejects a value because of it.
//!
//! ```rust
//! use swatchbook::color::ColorFormat;
//!
//! assert_eq!(ColorFormat::classify("#0d6efd"), ColorFormat::Hex);
//! assert_eq!(ColorFormat::classify("var(--primary)"), ColorFormat::Function);
//! assert_eq!(ColorFormat::classify("transparent"), ColorFormat::Keyword);
//! assert_eq!(ColorFormat::classify("#12"), ColorFormat::Invalid);
//! ```

use cssparser::{Parser, ParserInput, Token};
use serde::{Deserialize, Serialize};

/// A single named color.
///
/// Missing fields deserialize as empty strings so that loosely-written theme
/// files still load; an empty `color` is skipped by the CSS serializer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub color: String,
}

impl Color {
    /// Create a color entry.
    pub fn new(name: impl Into<String>, slug: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            color: color.into(),
        }
    }

    /// Whether this entry carries a color value at all.
    pub fn has_value(&self) -> bool {
        !self.color.is_empty()
    }

    /// Classify the color value.
    pub fn format(&self) -> ColorFormat {
        ColorFormat::classify(&self.color)
    }
}

/// An ordered sequence of colors.
pub type Palette = Vec<Color>;

/// Syntactic shape of a CSS color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    /// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    Hex,
    /// A functional value: `var(...)`, `rgb(...)`, `hsl(...)`, etc.
    Function,
    /// A bare identifier such as `transparent` or `currentColor`.
    Keyword,
    /// Empty, or anything that is not a single color-like token.
    Invalid,
}

impl ColorFormat {
    /// Classify a raw CSS value.
    pub fn classify(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            return ColorFormat::Invalid;
        }

        let mut input = ParserInput::new(value);
        let mut parser = Parser::new(&mut input);

        let format = match parser.next() {
            Ok(Token::Hash(digits)) | Ok(Token::IDHash(digits)) => {
                if is_hex_digits(digits) {
                    ColorFormat::Hex
                } else {
                    ColorFormat::Invalid
                }
            }
            Ok(Token::Function(_)) => ColorFormat::Function,
            Ok(Token::Ident(_)) => ColorFormat::Keyword,
            _ => ColorFormat::Invalid,
        };

        // A function's block is skipped by the next read, so anything left
        // over means the value was more than one token.
        if format != ColorFormat::Invalid && parser.is_exhausted() {
            format
        } else {
            ColorFormat::Invalid
        }
    }

    /// Whether this is a recognised color shape.
    pub fn is_valid(self) -> bool {
        self != ColorFormat::Invalid
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Hex => "hex",
            Self::Function => "function",
            Self::Keyword => "keyword",
            Self::Invalid => "invalid",
        };
        f.pad(name)
    }
}

fn is_hex_digits(digits: &str) -> bool {
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
