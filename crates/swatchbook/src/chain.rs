//! Palette chain builder for composing color sources.
//!
//! A [`PaletteChain`] concatenates the output of its sources, in the order
//! they were added, skipping sources whose toggle is off, and then
//! deduplicates the result with [`dedupe`].

use std::collections::HashSet;
use std::fmt;

use crate::color::{Color, Palette};
use crate::settings::Settings;
use crate::source::{ColorSource, SourceKind};

/// Ordered composition of color sources.
///
/// Unlike a fallback chain, every enabled source contributes. Precedence
/// comes from position: when two entries collide during deduplication the
/// one from the earlier source wins.
///
/// # Example
///
/// ```rust
/// use swatchbook::{BootstrapSource, CustomSource, PaletteChain, Settings};
///
/// let chain = PaletteChain::new()
///     .with_source(BootstrapSource::new())
///     .with_source(CustomSource::new());
///
/// let settings = Settings::default()
///     .with_bootstrap(true)
///     .with_custom(1, "#112233");
///
/// let palette = chain.resolve(&settings);
/// assert_eq!(palette.len(), 9);
/// ```
pub struct PaletteChain {
    sources: Vec<Box<dyn ColorSource>>,
    dedupe: bool,
}

impl PaletteChain {
    /// Create a new empty chain that deduplicates its output.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            dedupe: true,
        }
    }

    /// Add a source to the chain.
    ///
    /// Sources contribute in the order they are added.
    pub fn with_source<S: ColorSource + 'static>(mut self, source: S) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Return the raw concatenation instead of deduplicating it.
    pub fn keep_duplicates(mut self) -> Self {
        self.dedupe = false;
        self
    }

    /// Whether [`resolve`](Self::resolve) deduplicates.
    pub fn dedupes(&self) -> bool {
        self.dedupe
    }

    /// Collect every enabled source and combine the results.
    pub fn resolve(&self, settings: &Settings) -> Palette {
        let mut combined = Vec::new();
        for source in &self.sources {
            if !source.kind().is_enabled(settings) {
                tracing::debug!(source = source.name(), "source disabled");
                continue;
            }
            let colors = source.collect(settings);
            tracing::debug!(source = source.name(), count = colors.len(), "collected colors");
            combined.extend(colors);
        }

        if self.dedupe {
            dedupe(combined)
        } else {
            combined
        }
    }

    /// The kinds of the sources in this chain, in order.
    pub fn kinds(&self) -> Vec<SourceKind> {
        self.sources.iter().map(|s| s.kind()).collect()
    }

    /// Get the number of sources in the chain.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

impl Default for PaletteChain {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PaletteChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaletteChain")
            .field(
                "sources",
                &self.sources.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .field("dedupe", &self.dedupe)
            .finish()
    }
}

/// Remove entries that repeat an earlier entry's name, slug or color.
///
/// An entry is admitted only if its `name`, its `slug` and its `color` are
/// each unseen so far. Sharing any one of them with an admitted entry drops
/// the whole entry; nothing is merged. Survivors keep their input order.
pub fn dedupe<I>(colors: I) -> Palette
where
    I: IntoIterator<Item = Color>,
{
    let mut names = HashSet::new();
    let mut slugs = HashSet::new();
    let mut values = HashSet::new();
    let mut unique = Vec::new();

    for color in colors {
        if names.contains(&color.name)
            || slugs.contains(&color.slug)
            || values.contains(&color.color)
        {
            tracing::debug!(slug = %color.slug, name = %color.name, "dropping duplicate color");
            continue;
        }
        names.insert(color.name.clone());
        slugs.insert(color.slug.clone());
        values.insert(color.color.clone());
        unique.push(color);
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{bootstrap_colors, BootstrapSource, CustomSource};

    struct Fixed(SourceKind, Palette);

    impl ColorSource for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn kind(&self) -> SourceKind {
            self.0
        }

        fn collect(&self, _settings: &Settings) -> Palette {
            self.1.clone()
        }
    }

    #[test]
    fn dedupe_keeps_first_slug() {
        let colors = dedupe(vec![
            Color::new("A", "x", "#111111"),
            Color::new("B", "x", "#222222"),
        ]);
        assert_eq!(colors, vec![Color::new("A", "x", "#111111")]);
    }

    #[test]
    fn dedupe_rejects_on_any_shared_field() {
        let colors = dedupe(vec![
            Color::new("A", "a", "#111111"),
            Color::new("A", "b", "#222222"),
            Color::new("C", "c", "#111111"),
            Color::new("D", "d", "#444444"),
        ]);
        let slugs: Vec<_> = colors.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, ["a", "d"]);
    }

    #[test]
    fn dedupe_treats_empty_values_as_equal() {
        let colors = dedupe(vec![Color::new("A", "a", ""), Color::new("B", "b", "")]);
        assert_eq!(colors.len(), 1);
    }

    #[test]
    fn chain_respects_order_and_toggles() {
        let chain = PaletteChain::new()
            .with_source(Fixed(
                SourceKind::Core,
                vec![Color::new("Core", "core", "#000001")],
            ))
            .with_source(Fixed(
                SourceKind::Theme,
                vec![Color::new("Theme", "theme", "#000002")],
            ))
            .with_source(BootstrapSource::new())
            .with_source(CustomSource::new());

        let settings = Settings::default().with_theme(false).with_custom(1, "#000003");
        let slugs: Vec<_> = chain
            .resolve(&settings)
            .into_iter()
            .map(|c| c.slug)
            .collect();
        assert_eq!(slugs, ["core", "vk-color-custom-1"]);
    }

    #[test]
    fn earlier_source_wins_collision() {
        let chain = PaletteChain::new()
            .with_source(Fixed(SourceKind::Core, vec![Color::new("X", "x", "#111111")]))
            .with_source(Fixed(SourceKind::Theme, vec![Color::new("Y", "x", "#222222")]));

        let palette = chain.resolve(&Settings::default());
        assert_eq!(palette, vec![Color::new("X", "x", "#111111")]);
    }

    #[test]
    fn keep_duplicates_returns_raw_concatenation() {
        let chain = PaletteChain::new()
            .with_source(BootstrapSource::new())
            .with_source(BootstrapSource::new())
            .keep_duplicates();
        assert!(!chain.dedupes());

        let palette = chain.resolve(&Settings::default().with_bootstrap(true));
        assert_eq!(palette.len(), 16);
        assert_eq!(&palette[8..], bootstrap_colors().as_slice());
    }

    #[test]
    fn chain_kinds_and_count() {
        let chain = PaletteChain::new()
            .with_source(BootstrapSource::new())
            .with_source(CustomSource::new());
        assert_eq!(chain.source_count(), 2);
        assert_eq!(chain.kinds(), [SourceKind::Bootstrap, SourceKind::Custom]);
        assert!(format!("{:?}", chain).contains("bootstrap"));
    }
}
