//! Custom-property CSS generation.
//!
//! [`serialize`] turns a palette into a single-line stylesheet. For every
//! entry with a non-empty color it emits a custom property plus three
//! utility classes:
//!
//! ```css
//! :root{ --accent:#ff6b35}
//! :root .has-accent-color { color:var(--accent); }
//! :root .has-accent-background-color { background-color:var(--accent); }
//! :root .has-accent-border-color { border-color:var(--accent); }
//! ```
//!
//! The `:root` prefix on the utility selectors is load-bearing: it gives them
//! enough specificity to beat the editor's own `.has-*-color` rules.

use std::fmt::Write as _;

use crate::color::{Color, Palette};

/// Comment that opens every generated stylesheet.
pub const CSS_MARKER: &str = "/* VK Color Palettes */";

/// Serialize a palette to minified custom-property CSS.
///
/// Entries with an empty color are skipped. Output is deterministic for a
/// given palette.
pub fn serialize(palette: &Palette) -> String {
    let mut css = String::from(CSS_MARKER);
    for color in palette.iter().filter(|c| c.has_value()) {
        write_rules(&mut css, color);
    }
    minify(&css)
}

fn write_rules(css: &mut String, color: &Color) {
    let slug = &color.slug;
    // Writing to a String cannot fail.
    let _ = write!(css, ":root{{ --{}:{}}}", slug, color.color);
    let _ = write!(
        css,
        ":root .has-{slug}-color {{ color:var(--{slug}); }}",
        slug = slug
    );
    let _ = write!(
        css,
        ":root .has-{slug}-background-color {{ background-color:var(--{slug}); }}",
        slug = slug
    );
    let _ = write!(
        css,
        ":root .has-{slug}-border-color {{ border-color:var(--{slug}); }}",
        slug = slug
    );
}

/// Collapse CSS text onto one line.
///
/// In order: trim the ends, delete every `\n`, `\r` and `\t`, then reduce each
/// remaining whitespace run to its last character.
pub fn minify(css: &str) -> String {
    let stripped: Vec<char> = css
        .trim()
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '\t'))
        .collect();

    let mut out = String::with_capacity(stripped.len());
    for (i, &c) in stripped.iter().enumerate() {
        let next_is_space = stripped.get(i + 1).is_some_and(|n| is_css_space(*n));
        if is_css_space(c) && next_is_space {
            continue;
        }
        out.push(c);
    }
    out
}

fn is_css_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_palette_is_marker_only() {
        assert_eq!(serialize(&Vec::new()), CSS_MARKER);
    }

    #[test]
    fn single_color_rules() {
        let css = serialize(&vec![Color::new("Accent", "accent", "#ff6b35")]);
        assert_eq!(
            css,
            "/* VK Color Palettes */\
             :root{ --accent:#ff6b35}\
             :root .has-accent-color { color:var(--accent); }\
             :root .has-accent-background-color { background-color:var(--accent); }\
             :root .has-accent-border-color { border-color:var(--accent); }"
        );
    }

    #[test]
    fn skips_empty_color_but_continues() {
        let css = serialize(&vec![
            Color::new("Blank", "blank", ""),
            Color::new("Ink", "ink", "#111"),
        ]);
        assert!(!css.contains("--blank"));
        assert!(css.contains(":root{ --ink:#111}"));
    }

    #[test]
    fn functional_values_pass_through() {
        let css = serialize(&vec![Color::new(
            "Primary",
            "primary",
            "var(--wp--preset--color--primary)",
        )]);
        assert!(css.contains(":root{ --primary:var(--wp--preset--color--primary)}"));
    }

    #[test]
    fn minify_strips_control_whitespace() {
        assert_eq!(minify("  a\n\tb\r\n  "), "ab");
    }

    #[test]
    fn minify_collapses_space_runs_keeping_last() {
        assert_eq!(minify("a    b"), "a b");
        assert_eq!(minify("a \x0C b"), "a b");
    }

    #[test]
    fn value_whitespace_is_normalized() {
        let css = serialize(&vec![Color::new("Soft", "soft", "rgb(1,\n   2,  3)")]);
        assert!(css.contains("--soft:rgb(1, 2, 3)}"));
        assert!(!css.contains("  "));
    }
}
