//! Platform core palette source.

use std::sync::Arc;

use crate::color::Palette;
use crate::settings::Settings;
use crate::source::{ColorSource, SourceKind};
use crate::theme_json::{PaletteOrigin, ThemeData};

/// Colors from the platform's core theme document.
///
/// Prefers the `default` palette; falls back to the older `core` palette
/// when `default` is missing or empty. With no core document at all the
/// source is simply empty.
pub struct CoreSource<D: ThemeData + ?Sized> {
    data: Arc<D>,
}

impl<D: ThemeData + ?Sized> CoreSource<D> {
    /// Create a core source reading from `data`.
    pub fn new(data: Arc<D>) -> Self {
        Self { data }
    }
}

impl<D: ThemeData + ?Sized> Clone for CoreSource<D> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<D: ThemeData + ?Sized + 'static> ColorSource for CoreSource<D> {
    fn name(&self) -> &'static str {
        "core"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Core
    }

    fn collect(&self, _settings: &Settings) -> Palette {
        let Some(core) = self.data.core_data() else {
            return Vec::new();
        };

        let default = core.palette(PaletteOrigin::Default);
        if !default.is_empty() {
            return default;
        }
        core.palette(PaletteOrigin::Core)
    }
}
