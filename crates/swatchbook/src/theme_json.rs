//! Theme JSON documents.
//!
//! Core and theme palettes come from JSON configuration documents that this
//! crate reads but never writes. The relevant part of a document looks like
//! either of these:
//!
//! ```json
//! { "settings": { "color": { "palette": [ { "name": "...", "slug": "...", "color": "..." } ] } } }
//! { "settings": { "color": { "palette": { "default": [...], "core": [...], "theme": [...] } } } }
//! ```
//!
//! The first is a raw theme file, whose flat palette counts as the `theme`
//! origin. The second is the origin-keyed form a platform resolver produces.
//!
//! Loading is forgiving by contract: a missing document is `None`, and
//! [`ThemeFiles`] turns unreadable or malformed files into `None` as well,
//! logging a warning, so that the matching source yields an empty palette.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::color::{Color, Palette};
use crate::error::{Result, SwatchError};

/// Which origin-keyed palette array to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteOrigin {
    Default,
    Core,
    Theme,
}

impl PaletteOrigin {
    /// Key of this origin inside `settings.color.palette`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Core => "core",
            Self::Theme => "theme",
        }
    }
}

/// A parsed theme JSON document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeJson {
    document: Map<String, Value>,
    source_path: Option<PathBuf>,
}

impl ThemeJson {
    /// Wrap an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`SwatchError::InvalidDocument`] if the value is not an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(document) => Ok(Self {
                document,
                source_path: None,
            }),
            other => Err(SwatchError::invalid_document(
                None,
                format!("theme JSON must be an object, got {}", json_type(&other)),
            )),
        }
    }

    /// Parse a document from JSON text.
    pub fn parse(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Load a document from disk.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SwatchError::io(path, e)),
        };

        let value: Value = serde_json::from_str(&content)?;
        let mut theme = Self::from_value(value).map_err(|e| match e {
            SwatchError::InvalidDocument { message, .. } => {
                SwatchError::invalid_document(Some(path.to_path_buf()), message)
            }
            other => other,
        })?;
        theme.source_path = Some(path.to_path_buf());
        Ok(Some(theme))
    }

    /// Layer a site theme document over its parent theme document.
    ///
    /// The parent is the base. Objects merge key by key at every depth, and
    /// wherever both documents hold a non-object value the site's wins, so a
    /// child's `settings.color.palette` array replaces the parent's whole.
    pub fn merge(site: Option<Self>, parent: Option<Self>) -> Option<Self> {
        match (site, parent) {
            (None, None) => None,
            (Some(site), None) => Some(site),
            (None, Some(parent)) => Some(parent),
            (Some(site), Some(mut parent)) => {
                merge_objects(&mut parent.document, site.document);
                Some(Self {
                    document: parent.document,
                    source_path: site.source_path.or(parent.source_path),
                })
            }
        }
    }

    /// Path the document was loaded from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// The raw `settings.color` object, if present.
    pub fn color_settings(&self) -> Option<&Value> {
        self.document.get("settings")?.get("color")
    }

    /// Whether the document declares `settings.color.palette` at all.
    pub fn has_palette(&self) -> bool {
        self.color_settings()
            .and_then(|color| color.get("palette"))
            .is_some()
    }

    /// Read the palette for `origin`.
    ///
    /// A flat palette array is reported for [`PaletteOrigin::Theme`] only.
    /// Missing or empty arrays give an empty palette.
    pub fn palette(&self, origin: PaletteOrigin) -> Palette {
        let entries = match self.color_settings().and_then(|c| c.get("palette")) {
            Some(Value::Array(entries)) if origin == PaletteOrigin::Theme => entries,
            Some(Value::Object(origins)) => match origins.get(origin.key()) {
                Some(Value::Array(entries)) => entries,
                _ => return Vec::new(),
            },
            _ => return Vec::new(),
        };
        palette_from_values(entries)
    }
}

/// Convert JSON palette entries into colors.
///
/// Entries that are not objects, or whose fields are not strings, are skipped
/// with a warning. Values that do not look like a CSS color are kept, but
/// logged.
pub fn palette_from_values(entries: &[Value]) -> Palette {
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            if !entry.is_object() {
                tracing::warn!(index, kind = json_type(entry), "skipping non-object palette entry");
                return None;
            }
            match serde_json::from_value::<Color>(entry.clone()) {
                Ok(color) => {
                    if color.has_value() && !color.format().is_valid() {
                        tracing::warn!(slug = %color.slug, value = %color.color, "unrecognised color format");
                    }
                    Some(color)
                }
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed palette entry");
                    None
                }
            }
        })
        .collect()
}

fn merge_objects(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        match value {
            Value::Object(overlay_obj) => match base.get_mut(&key) {
                Some(Value::Object(base_obj)) => merge_objects(base_obj, overlay_obj),
                _ => {
                    base.insert(key, Value::Object(overlay_obj));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Access to the platform's resolved theme documents.
///
/// `core_data` is the platform-wide document, `theme_data` the active site
/// theme (already merged with its parent). Either may be absent.
pub trait ThemeData: Send + Sync {
    /// The platform core document.
    fn core_data(&self) -> Option<ThemeJson>;

    /// The active theme document.
    fn theme_data(&self) -> Option<ThemeJson>;
}

/// Theme documents held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticThemeData {
    core: Option<ThemeJson>,
    theme: Option<ThemeJson>,
}

impl StaticThemeData {
    /// No documents at all, as on a platform without theme JSON support.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the core document.
    pub fn with_core(mut self, core: ThemeJson) -> Self {
        self.core = Some(core);
        self
    }

    /// Set the theme document.
    pub fn with_theme(mut self, theme: ThemeJson) -> Self {
        self.theme = Some(theme);
        self
    }
}

impl ThemeData for StaticThemeData {
    fn core_data(&self) -> Option<ThemeJson> {
        self.core.clone()
    }

    fn theme_data(&self) -> Option<ThemeJson> {
        self.theme.clone()
    }
}

/// Theme documents read from disk on every request.
///
/// The theme document is the site file merged with the parent file when a
/// parent is configured (see [`ThemeJson::merge`]).
#[derive(Debug, Clone, Default)]
pub struct ThemeFiles {
    core: Option<PathBuf>,
    site: Option<PathBuf>,
    parent: Option<PathBuf>,
}

impl ThemeFiles {
    /// Create an empty file set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the platform core document path.
    pub fn core(mut self, path: impl Into<PathBuf>) -> Self {
        self.core = Some(path.into());
        self
    }

    /// Set the site theme document path.
    pub fn site(mut self, path: impl Into<PathBuf>) -> Self {
        self.site = Some(path.into());
        self
    }

    /// Set the parent theme document path.
    pub fn parent(mut self, path: impl Into<PathBuf>) -> Self {
        self.parent = Some(path.into());
        self
    }

    fn load_lenient(path: Option<&PathBuf>) -> Option<ThemeJson> {
        let path = path?;
        match ThemeJson::load(path) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable theme JSON");
                None
            }
        }
    }
}

impl ThemeData for ThemeFiles {
    fn core_data(&self) -> Option<ThemeJson> {
        Self::load_lenient(self.core.as_ref())
    }

    fn theme_data(&self) -> Option<ThemeJson> {
        let site = Self::load_lenient(self.site.as_ref());
        let parent = Self::load_lenient(self.parent.as_ref());
        ThemeJson::merge(site, parent)
    }
}
