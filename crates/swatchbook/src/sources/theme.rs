//! Site theme palette source.

use std::sync::Arc;

use crate::color::Palette;
use crate::settings::Settings;
use crate::source::{ColorSource, SourceKind};
use crate::theme_json::{PaletteOrigin, ThemeData};

/// Colors from the active theme document's `theme` palette.
///
/// The theme palette may repeat core colors; overlap is resolved later by
/// the chain's deduplication, not here.
pub struct ThemeSource<D: ThemeData + ?Sized> {
    data: Arc<D>,
}

impl<D: ThemeData + ?Sized> ThemeSource<D> {
    /// Create a theme source reading from `data`.
    pub fn new(data: Arc<D>) -> Self {
        Self { data }
    }
}

impl<D: ThemeData + ?Sized> Clone for ThemeSource<D> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<D: ThemeData + ?Sized + 'static> ColorSource for ThemeSource<D> {
    fn name(&self) -> &'static str {
        "theme"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Theme
    }

    fn collect(&self, _settings: &Settings) -> Palette {
        self.data
            .theme_data()
            .map(|theme| theme.palette(PaletteOrigin::Theme))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::theme_json::{StaticThemeData, ThemeJson};
    use serde_json::json;

    #[test]
    fn reads_theme_palette() {
        let theme = ThemeJson::from_value(json!({"settings": {"color": {"palette": {
            "default": [{"name": "Black", "slug": "black", "color": "#000000"}],
            "theme": [{"name": "Brand", "slug": "brand", "color": "#ff6b35"}]
        }}}}))
        .unwrap();
        let source = ThemeSource::new(Arc::new(StaticThemeData::new().with_theme(theme)));

        assert_eq!(
            source.collect(&Settings::default()),
            vec![Color::new("Brand", "brand", "#ff6b35")]
        );
    }

    #[test]
    fn ignores_core_document() {
        let core = ThemeJson::from_value(json!({"settings": {"color": {"palette": {
            "theme": [{"name": "Brand", "slug": "brand", "color": "#ff6b35"}]
        }}}}))
        .unwrap();
        let source = ThemeSource::new(Arc::new(StaticThemeData::new().with_core(core)));
        assert!(source.collect(&Settings::default()).is_empty());
    }
}
