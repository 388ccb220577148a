//! Output sinks.
//!
//! The pipeline hands its results to two collaborators owned by the host:
//!
//! - a [`PaletteRegistry`] that feeds the editor's color picker
//! - a [`StyleSink`] that attaches inline CSS to a stylesheet handle
//!
//! [`RecordingRegistry`] and [`RecordingStyles`] keep whatever they receive,
//! for tests and for hosts that render the results themselves.

use crate::color::Palette;

/// Stylesheet handle for front-end output.
pub const FRONT_STYLE_HANDLE: &str = "wp-block-library";

/// Stylesheet handle for editor output.
pub const EDITOR_STYLE_HANDLE: &str = "wp-edit-blocks";

/// The host's default hook priority.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Priority for registering the palette; runs after theme setup.
pub const PALETTE_SETUP_PRIORITY: i32 = 9999;

/// Priority for front-end CSS injection.
pub const FRONT_STYLE_PRIORITY: i32 = 11;

/// Priority for editor CSS injection.
///
/// Must be above [`DEFAULT_PRIORITY`], otherwise the editor's base styles are
/// enqueued afterwards and override the palette rules.
pub const EDITOR_STYLE_PRIORITY: i32 = 11;

/// Receiver for the aggregated editor palette.
pub trait PaletteRegistry {
    /// Register `palette` as the editor color palette.
    fn register_palette(&mut self, palette: &Palette);
}

/// Receiver for inline CSS.
pub trait StyleSink {
    /// Attach `css` to the stylesheet identified by `handle`.
    fn add_inline_style(&mut self, handle: &str, css: &str, priority: Option<i32>);
}

/// A registry that remembers the last palette it was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingRegistry {
    palette: Option<Palette>,
}

impl RecordingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registered palette, if any.
    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }
}

impl PaletteRegistry for RecordingRegistry {
    fn register_palette(&mut self, palette: &Palette) {
        self.palette = Some(palette.clone());
    }
}

/// One recorded inline style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineStyle {
    pub handle: String,
    pub css: String,
    pub priority: Option<i32>,
}

/// A style sink that records every injection in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingStyles {
    styles: Vec<InlineStyle>,
}

impl RecordingStyles {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded injections.
    pub fn styles(&self) -> &[InlineStyle] {
        &self.styles
    }

    /// The CSS recorded for `handle`, concatenated in injection order.
    pub fn css_for(&self, handle: &str) -> String {
        self.styles
            .iter()
            .filter(|s| s.handle == handle)
            .map(|s| s.css.as_str())
            .collect()
    }
}

impl StyleSink for RecordingStyles {
    fn add_inline_style(&mut self, handle: &str, css: &str, priority: Option<i32>) {
        self.styles.push(InlineStyle {
            handle: handle.to_string(),
            css: css.to_string(),
            priority,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn editor_priority_beats_default() {
        assert!(EDITOR_STYLE_PRIORITY > DEFAULT_PRIORITY);
    }

    #[test]
    fn registry_keeps_last_palette() {
        let mut registry = RecordingRegistry::new();
        assert!(registry.palette().is_none());

        registry.register_palette(&vec![Color::new("A", "a", "#111")]);
        registry.register_palette(&vec![Color::new("B", "b", "#222")]);
        assert_eq!(registry.palette().unwrap()[0].slug, "b");
    }

    #[test]
    fn styles_group_by_handle() {
        let mut sink = RecordingStyles::new();
        sink.add_inline_style(FRONT_STYLE_HANDLE, "a{}", None);
        sink.add_inline_style(EDITOR_STYLE_HANDLE, "b{}", Some(11));
        sink.add_inline_style(FRONT_STYLE_HANDLE, "c{}", None);

        assert_eq!(sink.styles().len(), 3);
        assert_eq!(sink.css_for(FRONT_STYLE_HANDLE), "a{}c{}");
        assert_eq!(sink.styles()[1].priority, Some(11));
    }
}
