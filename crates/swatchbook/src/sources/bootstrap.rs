//! Built-in palette source.

use crate::color::{Color, Palette};
use crate::settings::Settings;
use crate::source::{ColorSource, SourceKind};

/// `(name, slug, color)` for the eight built-in colors, in display order.
const BOOTSTRAP_COLORS: [(&str, &str, &str); 8] = [
    ("Bootstrap Primary", "bootstrap-primary", "#0d6efd"),
    ("Bootstrap Secondary", "bootstrap-secondary", "#6c757d"),
    ("Bootstrap Success", "bootstrap-success", "#28a745"),
    ("Bootstrap Info", "bootstrap-info", "#17a2b8"),
    ("Bootstrap Warning", "bootstrap-warning", "#ffc107"),
    ("Bootstrap Danger", "bootstrap-danger", "#dc3545"),
    ("Bootstrap Light", "bootstrap-light", "#f8f9fa"),
    ("Bootstrap Dark", "bootstrap-dark", "#343a40"),
];

/// The fixed built-in palette.
pub fn bootstrap_colors() -> Palette {
    BOOTSTRAP_COLORS
        .iter()
        .map(|(name, slug, color)| Color::new(*name, *slug, *color))
        .collect()
}

/// Source for the built-in palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapSource;

impl BootstrapSource {
    /// Create the built-in source.
    pub fn new() -> Self {
        Self
    }
}

impl ColorSource for BootstrapSource {
    fn name(&self) -> &'static str {
        "bootstrap"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Bootstrap
    }

    fn collect(&self, _settings: &Settings) -> Palette {
        bootstrap_colors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_colors_in_order() {
        let slugs: Vec<_> = bootstrap_colors().into_iter().map(|c| c.slug).collect();
        assert_eq!(
            slugs,
            [
                "bootstrap-primary",
                "bootstrap-secondary",
                "bootstrap-success",
                "bootstrap-info",
                "bootstrap-warning",
                "bootstrap-danger",
                "bootstrap-light",
                "bootstrap-dark",
            ]
        );
    }

    #[test]
    fn names_follow_role() {
        let names: Vec<_> = bootstrap_colors().into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            [
                "Bootstrap Primary",
                "Bootstrap Secondary",
                "Bootstrap Success",
                "Bootstrap Info",
                "Bootstrap Warning",
                "Bootstrap Danger",
                "Bootstrap Light",
                "Bootstrap Dark",
            ]
        );
    }

    #[test]
    fn default_values() {
        let values: Vec<_> = bootstrap_colors().into_iter().map(|c| c.color).collect();
        assert_eq!(
            values,
            [
                "#0d6efd", "#6c757d", "#28a745", "#17a2b8", "#ffc107", "#dc3545", "#f8f9fa",
                "#343a40",
            ]
        );
    }

    #[test]
    fn values_are_distinct_hex() {
        let colors = bootstrap_colors();
        for color in &colors {
            assert!(color.format() == crate::color::ColorFormat::Hex, "{}", color.slug);
        }
        let mut values: Vec<_> = colors.iter().map(|c| c.color.as_str()).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), 8);
    }

    #[test]
    fn source_ignores_settings() {
        let source = BootstrapSource::new();
        assert_eq!(source.collect(&Settings::default()), bootstrap_colors());
        assert_eq!(source.kind(), SourceKind::Bootstrap);
    }
}
