//! Pipeline orchestration.
//!
//! [`PaletteManager`] wires the settings store, the theme documents and the
//! four sources into the two palette paths, and exposes one method per stage
//! a host invokes:
//!
//! | Stage | Method | When |
//! |-------|--------|------|
//! | Palette setup | [`setup_color_palette`](PaletteManager::setup_color_palette) | after theme initialization ([`PALETTE_SETUP_PRIORITY`]) |
//! | Front-end CSS | [`add_color_palette_css`](PaletteManager::add_color_palette_css) | before page render ([`FRONT_STYLE_PRIORITY`]) |
//! | Editor CSS | [`add_color_palette_css_to_editor`](PaletteManager::add_color_palette_css_to_editor) | after editor base styles ([`EDITOR_STYLE_PRIORITY`]) |
//!
//! The two palette paths differ in their sources:
//!
//! - editor palette: core, theme, built-in, custom
//! - inline CSS: built-in, custom
//!
//! Core and theme colors are left out of the CSS because the host already
//! exposes them as custom properties.
//!
//! Every stage reads settings fresh from the store, and nothing is cached
//! between calls.
//!
//! [`PALETTE_SETUP_PRIORITY`]: crate::sink::PALETTE_SETUP_PRIORITY
//! [`FRONT_STYLE_PRIORITY`]: crate::sink::FRONT_STYLE_PRIORITY
//! [`EDITOR_STYLE_PRIORITY`]: crate::sink::EDITOR_STYLE_PRIORITY

use std::fmt;
use std::sync::Arc;

use crate::chain::{dedupe, PaletteChain};
use crate::color::Palette;
use crate::css;
use crate::settings::Settings;
use crate::sink::{
    PaletteRegistry, StyleSink, EDITOR_STYLE_HANDLE, EDITOR_STYLE_PRIORITY, FRONT_STYLE_HANDLE,
};
use crate::source::ColorSource;
use crate::sources::{BootstrapSource, ColorFilter, CoreSource, CustomSource, ThemeSource};
use crate::store::SettingsStore;
use crate::theme_json::ThemeData;

/// Stateless orchestrator for the palette pipeline.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use swatchbook::{
///     MemoryStore, PaletteManager, RecordingStyles, Settings, StaticThemeData,
///     FRONT_STYLE_HANDLE,
/// };
///
/// let settings = Settings::default().with_custom(1, "#112233");
/// let manager = PaletteManager::new(
///     Arc::new(MemoryStore::with_settings(&settings)),
///     Arc::new(StaticThemeData::new()),
/// );
///
/// let mut styles = RecordingStyles::new();
/// manager.add_color_palette_css(&mut styles);
/// assert!(styles.css_for(FRONT_STYLE_HANDLE).contains("--vk-color-custom-1:#112233"));
/// ```
#[derive(Clone)]
pub struct PaletteManager {
    store: Arc<dyn SettingsStore>,
    themes: Arc<dyn ThemeData>,
    custom: CustomSource,
    dedupe_editor: bool,
}

impl PaletteManager {
    /// Create a manager over a settings store and theme documents.
    pub fn new(store: Arc<dyn SettingsStore>, themes: Arc<dyn ThemeData>) -> Self {
        Self {
            store,
            themes,
            custom: CustomSource::new(),
            dedupe_editor: true,
        }
    }

    /// Install the extension hook applied to the custom colors.
    pub fn with_color_filter(mut self, filter: ColorFilter) -> Self {
        self.custom = self.custom.with_filter(filter);
        self
    }

    /// Make [`build_palette`](Self::build_palette) return the raw
    /// concatenation instead of deduplicating it.
    ///
    /// Only the builder is affected. What reaches a registry or a style sink
    /// is always deduplicated.
    pub fn keep_editor_duplicates(mut self) -> Self {
        self.dedupe_editor = false;
        self
    }

    /// Read the effective settings.
    ///
    /// A store that cannot be read yields the defaults.
    pub fn settings(&self) -> Settings {
        match self.store.settings() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "settings unavailable, using defaults");
                Settings::default()
            }
        }
    }

    /// Colors from the platform core document.
    pub fn core_colors(&self) -> Palette {
        CoreSource::new(Arc::clone(&self.themes)).collect(&self.settings())
    }

    /// Colors from the active theme document.
    pub fn theme_colors(&self) -> Palette {
        ThemeSource::new(Arc::clone(&self.themes)).collect(&self.settings())
    }

    /// The built-in palette.
    pub fn bootstrap_colors(&self) -> Palette {
        BootstrapSource::new().collect(&self.settings())
    }

    /// Custom colors from the stored slots, after the extension hook.
    pub fn additional_colors(&self) -> Palette {
        self.custom.collect(&self.settings())
    }

    /// Whether the active theme document declares its own palette.
    pub fn theme_has_palette(&self) -> bool {
        self.themes
            .theme_data()
            .is_some_and(|theme| theme.has_palette())
    }

    /// Chain for the editor palette: core, theme, built-in, custom.
    pub fn editor_chain(&self) -> PaletteChain {
        let chain = PaletteChain::new()
            .with_source(CoreSource::new(Arc::clone(&self.themes)))
            .with_source(ThemeSource::new(Arc::clone(&self.themes)))
            .with_source(BootstrapSource::new())
            .with_source(self.custom.clone());
        if self.dedupe_editor {
            chain
        } else {
            chain.keep_duplicates()
        }
    }

    /// Chain for the inline CSS: built-in, custom.
    pub fn inline_chain(&self) -> PaletteChain {
        PaletteChain::new()
            .with_source(BootstrapSource::new())
            .with_source(self.custom.clone())
    }

    /// Build the editor palette for `settings`.
    pub fn build_palette(&self, settings: &Settings) -> Palette {
        self.editor_chain().resolve(settings)
    }

    /// Build the palette that the inline CSS is generated from.
    pub fn build_inline_palette(&self, settings: &Settings) -> Palette {
        self.inline_chain().resolve(settings)
    }

    /// Generate the inline CSS from the stored settings.
    pub fn inline_css(&self) -> String {
        css::serialize(&self.build_inline_palette(&self.settings()))
    }

    /// Palette setup stage: register the editor palette.
    pub fn setup_color_palette(&self, registry: &mut dyn PaletteRegistry) {
        let palette = dedupe(self.build_palette(&self.settings()));
        tracing::debug!(count = palette.len(), "registering editor palette");
        registry.register_palette(&palette);
    }

    /// Front-end stage: attach the inline CSS to the block library stylesheet.
    pub fn add_color_palette_css(&self, sink: &mut dyn StyleSink) {
        sink.add_inline_style(FRONT_STYLE_HANDLE, &self.inline_css(), None);
    }

    /// Editor stage: attach the inline CSS to the editor stylesheet.
    pub fn add_color_palette_css_to_editor(&self, sink: &mut dyn StyleSink) {
        sink.add_inline_style(
            EDITOR_STYLE_HANDLE,
            &self.inline_css(),
            Some(EDITOR_STYLE_PRIORITY),
        );
    }
}

impl fmt::Debug for PaletteManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaletteManager")
            .field("custom", &self.custom)
            .field("dedupe_editor", &self.dedupe_editor)
            .finish_non_exhaustive()
    }
}
