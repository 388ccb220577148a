//! Custom color source.

use std::fmt;
use std::sync::Arc;

use crate::color::{Color, Palette};
use crate::settings::Settings;
use crate::source::{ColorSource, SourceKind};

/// Label prefix for custom colors; the slot number is appended.
pub const CUSTOM_NAME_PREFIX: &str = "Custom color";

/// Slug prefix for custom colors; the slot number is appended.
pub const CUSTOM_SLUG_PREFIX: &str = "vk-color-custom-";

/// Extension hook applied to the custom color list before it is returned.
pub type ColorFilter = Arc<dyn Fn(Palette) -> Palette + Send + Sync>;

/// User custom colors from the settings slots.
///
/// Each filled slot `i` becomes `Custom color i` / `vk-color-custom-i`.
/// Empty slots are skipped but keep their numbering, so slot 3 is always
/// `vk-color-custom-3` even when slots 1 and 2 are empty.
///
/// An optional [`ColorFilter`] sees the base list and may append, modify or
/// drop entries. Without one the list passes through unchanged.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use swatchbook::{Color, ColorSource, CustomSource, Settings};
///
/// let source = CustomSource::new().with_filter(Arc::new(|mut colors: swatchbook::Palette| {
///     colors.push(Color::new("Brand", "brand", "#ff6b35"));
///     colors
/// }));
///
/// let settings = Settings::default().with_custom(1, "#112233");
/// let colors = source.collect(&settings);
/// assert_eq!(colors.len(), 2);
/// assert_eq!(colors[0].slug, "vk-color-custom-1");
/// ```
#[derive(Clone, Default)]
pub struct CustomSource {
    filter: Option<ColorFilter>,
}

impl CustomSource {
    /// Create a custom source with no extension hook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the extension hook.
    pub fn with_filter(mut self, filter: ColorFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// The base list before the extension hook runs.
    pub fn base_colors(settings: &Settings) -> Palette {
        settings
            .custom_colors()
            .map(|(index, color)| {
                Color::new(
                    format!("{} {}", CUSTOM_NAME_PREFIX, index),
                    format!("{}{}", CUSTOM_SLUG_PREFIX, index),
                    color,
                )
            })
            .collect()
    }
}

impl fmt::Debug for CustomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomSource")
            .field("has_filter", &self.filter.is_some())
            .finish()
    }
}

impl ColorSource for CustomSource {
    fn name(&self) -> &'static str {
        "custom"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Custom
    }

    fn collect(&self, settings: &Settings) -> Palette {
        let colors = Self::base_colors(settings);
        match &self.filter {
            Some(filter) => filter(colors),
            None => colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_without_slots() {
        assert!(CustomSource::new().collect(&Settings::default()).is_empty());
    }

    #[test]
    fn keeps_slot_numbering() {
        let settings = Settings::default()
            .with_custom(2, "#222222")
            .with_custom(5, "#555555");
        let colors = CustomSource::new().collect(&settings);
        assert_eq!(
            colors,
            vec![
                Color::new("Custom color 2", "vk-color-custom-2", "#222222"),
                Color::new("Custom color 5", "vk-color-custom-5", "#555555"),
            ]
        );
    }

    #[test]
    fn filter_can_append() {
        let source = CustomSource::new().with_filter(Arc::new(|mut colors: Palette| {
            colors.push(Color::new("Extra", "extra", "#abcdef"));
            colors
        }));
        let colors = source.collect(&Settings::default().with_custom(1, "#112233"));
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[1].slug, "extra");
    }

    #[test]
    fn filter_sees_base_list() {
        let source = CustomSource::new().with_filter(Arc::new(|colors: Palette| -> Palette {
            colors.into_iter().rev().collect()
        }));
        let settings = Settings::default()
            .with_custom(1, "#111111")
            .with_custom(2, "#222222");
        let colors = source.collect(&settings);
        assert_eq!(colors[0].slug, "vk-color-custom-2");
    }

    #[test]
    fn debug_reports_filter_presence() {
        let source = CustomSource::new().with_filter(Arc::new(|c: Palette| c));
        assert!(format!("{:?}", source).contains("has_filter: true"));
    }
}
