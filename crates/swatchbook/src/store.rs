//! Settings store abstractions.
//!
//! The pipeline only ever reads settings; writes come from whatever admin
//! surface hosts it. [`SettingsStore`] covers both so that a host can persist
//! sanitized values through the same seam the pipeline reads from.
//!
//! - [`MemoryStore`]: in-process map, for tests and embedding
//! - [`FileStore`]: a JSON or YAML file holding `record key → options`

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::{Map, Value};

use crate::error::{Result, SwatchError};
use crate::settings::{sanitize_options, Settings, OPTION_KEY};

/// Persisted key-value options, keyed by record name.
pub trait SettingsStore: Send + Sync {
    /// Load the options map stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self, key: &str) -> Result<Option<Map<String, Value>>>;

    /// Replace the options map stored under `key`.
    fn save(&self, key: &str, options: Map<String, Value>) -> Result<()>;

    /// Sanitize `submitted` and merge it over the stored record.
    ///
    /// Returns the sanitized values that were written.
    fn update(&self, submitted: &Map<String, Value>) -> Result<Map<String, Value>> {
        let clean = sanitize_options(submitted);
        let mut merged = self.load(OPTION_KEY)?.unwrap_or_default();
        for (k, v) in &clean {
            merged.insert(k.clone(), v.clone());
        }
        self.save(OPTION_KEY, merged)?;
        Ok(clean)
    }

    /// Read the effective settings, with defaults for anything unset.
    fn settings(&self) -> Result<Settings> {
        Ok(self
            .load(OPTION_KEY)?
            .map(|options| Settings::from_options(&options))
            .unwrap_or_default())
    }
}

/// In-memory settings store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, Map<String, Value>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the settings record pre-populated.
    pub fn with_options(options: Map<String, Value>) -> Self {
        let store = Self::new();
        store
            .records
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(OPTION_KEY.to_string(), options);
        store
    }

    /// Create a store holding `settings` in persisted layout.
    pub fn with_settings(settings: &Settings) -> Self {
        Self::with_options(settings.to_options())
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Map<String, Value>>> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        Ok(records.get(key).cloned())
    }

    fn save(&self, key: &str, options: Map<String, Value>) -> Result<()> {
        self.records
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), options);
        Ok(())
    }
}

/// On-disk document format for [`FileStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Pick a format from the file extension. Anything that is not
    /// `.yaml`/`.yml` is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            _ => FileFormat::Json,
        }
    }
}

/// Settings store backed by a single JSON or YAML file.
///
/// The file holds a top-level map from record key to options map. A missing
/// file reads as an empty store; saving creates it.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    format: FileFormat,
}

impl FileStore {
    /// Create a store for `path`, inferring the format from its extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = FileFormat::from_path(&path);
        Self { path, format }
    }

    /// Get the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the document format.
    pub fn format(&self) -> FileFormat {
        self.format
    }

    fn read_document(&self) -> Result<Map<String, Value>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(SwatchError::io(&self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        let document: Value = match self.format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Yaml => serde_yaml::from_str(&content)?,
        };

        match document {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(Map::new()),
            _ => Err(SwatchError::invalid_document(
                Some(self.path.clone()),
                "settings file must contain a map of records",
            )),
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<()> {
        let content = match self.format {
            FileFormat::Json => serde_json::to_string_pretty(document)?,
            FileFormat::Yaml => serde_yaml::to_string(document)?,
        };
        std::fs::write(&self.path, content).map_err(|e| SwatchError::io(&self.path, e))
    }
}

impl SettingsStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Map<String, Value>>> {
        let mut document = self.read_document()?;
        match document.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(options)) => Ok(Some(options)),
            Some(_) => Err(SwatchError::invalid_document(
                Some(self.path.clone()),
                format!("record '{}' must be a map", key),
            )),
        }
    }

    fn save(&self, key: &str, options: Map<String, Value>) -> Result<()> {
        let mut document = self.read_document()?;
        document.insert(key.to_string(), Value::Object(options));
        tracing::debug!(path = %self.path.display(), key, "writing settings record");
        self.write_document(&document)
    }
}
