//! Color palette aggregation for block editors.
//!
//! `swatchbook` gathers colors from up to four sources, merges them into one
//! deduplicated editor palette, and renders a subset of them as minified
//! custom-property CSS for both the front end and the editor.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use swatchbook::{
//!     MemoryStore, PaletteManager, RecordingRegistry, Settings, StaticThemeData, CSS_MARKER,
//! };
//!
//! let settings = Settings::default()
//!     .with_bootstrap(true)
//!     .with_custom(1, "#ff6b35");
//!
//! let manager = PaletteManager::new(
//!     Arc::new(MemoryStore::with_settings(&settings)),
//!     Arc::new(StaticThemeData::new()),
//! );
//!
//! let mut registry = RecordingRegistry::new();
//! manager.setup_color_palette(&mut registry);
//! assert_eq!(registry.palette().map(|p| p.len()), Some(9));
//!
//! assert!(manager.inline_css().starts_with(CSS_MARKER));
//! ```
//!
//! # Architecture
//!
//! Every source implements [`ColorSource`]. Sources are composed into a
//! [`PaletteChain`], which concatenates the enabled ones in order and then
//! deduplicates:
//!
//! ```text
//! PaletteChain
//! ├── CoreSource       (platform default palette)
//! ├── ThemeSource      (active theme palette)
//! ├── BootstrapSource  (built-in palette)
//! └── CustomSource     (five user slots + extension hook)
//!         │
//!         ▼
//!      dedupe ──► PaletteRegistry / css::serialize ──► StyleSink
//! ```
//!
//! The [`PaletteManager`] owns the two chains and the three host stages.
//!
//! # Testing
//!
//! Every collaborator has an in-memory variant:
//!
//! ```
//! use swatchbook::{MemoryStore, RecordingStyles, StaticThemeData};
//!
//! let store = MemoryStore::new();
//! let themes = StaticThemeData::new();
//! let styles = RecordingStyles::new();
//! # let _ = (store, themes, styles);
//! ```

mod chain;
pub mod color;
pub mod css;
mod error;
mod manager;
pub mod settings;
pub mod sink;
mod source;
pub mod sources;
pub mod store;
pub mod theme_json;

// Re-export core types
pub use chain::{dedupe, PaletteChain};
pub use color::{Color, ColorFormat, Palette};
pub use css::{serialize, CSS_MARKER};
pub use error::{Result, SwatchError};
pub use manager::PaletteManager;
pub use settings::Settings;
pub use source::{ColorSource, SourceKind};

// Re-export collaborators at crate root for convenience
pub use sink::{
    InlineStyle, PaletteRegistry, RecordingRegistry, RecordingStyles, StyleSink,
    EDITOR_STYLE_HANDLE, EDITOR_STYLE_PRIORITY, FRONT_STYLE_HANDLE, FRONT_STYLE_PRIORITY,
    PALETTE_SETUP_PRIORITY,
};
pub use sources::{
    bootstrap_colors, BootstrapSource, ColorFilter, CoreSource, CustomSource, ThemeSource,
};
pub use store::{FileFormat, FileStore, MemoryStore, SettingsStore};
pub use theme_json::{PaletteOrigin, StaticThemeData, ThemeData, ThemeFiles, ThemeJson};
