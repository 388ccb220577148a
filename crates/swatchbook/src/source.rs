//! Core color source trait.
//!
//! The [`ColorSource`] trait defines the interface for everything that
//! contributes colors to a palette. Sources are composed into a
//! [`PaletteChain`](crate::PaletteChain), which decides from the settings
//! toggles which of them take part.

use crate::color::Palette;
use crate::settings::Settings;

/// A provider of colors.
///
/// # Implementation Guidelines
///
/// - [`collect`](Self::collect) never fails. When the underlying data is
///   missing or unreadable, return an empty palette.
/// - Sources do not deduplicate, either internally or against other sources.
///   The chain does that once, over the concatenated result.
/// - Sources do not check their own toggle. The chain consults
///   [`SourceKind::is_enabled`] before calling them.
///
/// # Example
///
/// ```rust
/// use swatchbook::{Color, ColorSource, Palette, Settings, SourceKind};
///
/// struct Brand;
///
/// impl ColorSource for Brand {
///     fn name(&self) -> &'static str { "brand" }
///
///     fn kind(&self) -> SourceKind { SourceKind::Custom }
///
///     fn collect(&self, _: &Settings) -> Palette {
///         vec![Color::new("Brand", "brand", "#ff6b35")]
///     }
/// }
/// ```
pub trait ColorSource: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Which toggle governs this source.
    fn kind(&self) -> SourceKind;

    /// Produce this source's colors, in display order.
    fn collect(&self, settings: &Settings) -> Palette;
}

/// The kind of source, which determines the toggle it answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Platform core palette.
    Core,
    /// Site theme palette.
    Theme,
    /// Built-in palette.
    Bootstrap,
    /// User custom colors; always enabled.
    Custom,
}

impl SourceKind {
    /// Whether `settings` enable this kind of source.
    pub fn is_enabled(self, settings: &Settings) -> bool {
        match self {
            Self::Core => settings.enable_core,
            Self::Theme => settings.enable_theme,
            Self::Bootstrap => settings.enable_bootstrap,
            Self::Custom => true,
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Core => write!(f, "core"),
            Self::Theme => write!(f, "theme"),
            Self::Bootstrap => write!(f, "bootstrap"),
            Self::Custom => write!(f, "custom"),
        }
    }
}
