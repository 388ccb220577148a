//! The persisted settings record.
//!
//! Settings are stored as one options map under [`OPTION_KEY`]:
//!
//! ```json
//! {
//!   "color_palette_core": true,
//!   "color_palette_theme": true,
//!   "color_palette_bootstrap": false,
//!   "color_custom_1": "#112233",
//!   "color_custom_2": ""
//! }
//! ```
//!
//! Reading and writing are deliberately asymmetric. Values are sanitized once,
//! on write, by [`sanitize_options`]. The read path ([`Settings::from_options`])
//! fills defaults and interprets whatever is stored with "non-empty"
//! truthiness, without re-validating colors.

use serde_json::{Map, Value};

use crate::error::{Result, SwatchError};

/// Name under which the options map is persisted.
pub const OPTION_KEY: &str = "vk_color_manager_options";

/// Number of user-editable custom color slots.
pub const CUSTOM_SLOTS: usize = 5;

/// Option key for the core palette toggle.
pub const KEY_CORE: &str = "color_palette_core";
/// Option key for the theme palette toggle.
pub const KEY_THEME: &str = "color_palette_theme";
/// Option key for the built-in palette toggle.
pub const KEY_BOOTSTRAP: &str = "color_palette_bootstrap";

/// Option key for custom slot `index` (1-based).
pub fn custom_key(index: usize) -> String {
    format!("color_custom_{}", index)
}

/// Effective settings for one aggregation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Include the platform core palette.
    pub enable_core: bool,
    /// Include the site theme palette.
    pub enable_theme: bool,
    /// Include the built-in palette.
    pub enable_bootstrap: bool,
    /// Custom color slots 1..=5, `None` when unset or empty.
    pub custom: [Option<String>; CUSTOM_SLOTS],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_core: true,
            enable_theme: true,
            enable_bootstrap: false,
            custom: Default::default(),
        }
    }
}

impl Settings {
    /// Build settings from a stored options map, filling defaults for
    /// unset keys.
    pub fn from_options(options: &Map<String, Value>) -> Self {
        let defaults = Self::default();
        let toggle = |key: &str, default: bool| options.get(key).map_or(default, is_truthy);

        let mut custom: [Option<String>; CUSTOM_SLOTS] = Default::default();
        for (i, slot) in custom.iter_mut().enumerate() {
            *slot = match options.get(&custom_key(i + 1)) {
                Some(Value::String(s)) if !s.is_empty() && s != "0" => Some(s.clone()),
                _ => None,
            };
        }

        Self {
            enable_core: toggle(KEY_CORE, defaults.enable_core),
            enable_theme: toggle(KEY_THEME, defaults.enable_theme),
            enable_bootstrap: toggle(KEY_BOOTSTRAP, defaults.enable_bootstrap),
            custom,
        }
    }

    /// Convert back into the persisted options layout.
    ///
    /// Unset custom slots are written as empty strings.
    pub fn to_options(&self) -> Map<String, Value> {
        let mut options = Map::new();
        options.insert(KEY_CORE.to_string(), Value::Bool(self.enable_core));
        options.insert(KEY_THEME.to_string(), Value::Bool(self.enable_theme));
        options.insert(KEY_BOOTSTRAP.to_string(), Value::Bool(self.enable_bootstrap));
        for (i, slot) in self.custom.iter().enumerate() {
            options.insert(
                custom_key(i + 1),
                Value::String(slot.clone().unwrap_or_default()),
            );
        }
        options
    }

    /// Toggle the platform core palette.
    pub fn with_core(mut self, enabled: bool) -> Self {
        self.enable_core = enabled;
        self
    }

    /// Toggle the site theme palette.
    pub fn with_theme(mut self, enabled: bool) -> Self {
        self.enable_theme = enabled;
        self
    }

    /// Toggle the built-in palette.
    pub fn with_bootstrap(mut self, enabled: bool) -> Self {
        self.enable_bootstrap = enabled;
        self
    }

    /// Set custom slot `index` (1-based). Out-of-range indices are ignored.
    pub fn with_custom(mut self, index: usize, color: impl Into<String>) -> Self {
        if let Some(slot) = index.checked_sub(1).and_then(|i| self.custom.get_mut(i)) {
            let color = color.into();
            *slot = if color.is_empty() { None } else { Some(color) };
        }
        self
    }

    /// Iterate over filled custom slots as `(index, color)` with 1-based
    /// indices.
    pub fn custom_colors(&self) -> impl Iterator<Item = (usize, &str)> {
        self.custom
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_deref().map(|c| (i + 1, c)))
    }
}

/// "Non-empty" truthiness for stored toggle values.
///
/// `false`, `0`, `""`, `"0"`, `null` and empty collections are off;
/// everything else is on.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Coerce a submitted checkbox value. Only boolean `true` or the literal
/// string `"true"` count as checked.
pub fn sanitize_checkbox(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "true",
        _ => false,
    }
}

/// Accept `#rgb` or `#rrggbb` (any case); everything else becomes `None`.
pub fn sanitize_hex_color(value: &str) -> Option<String> {
    let hex = value.strip_prefix('#')?;
    if matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(value.to_string())
    } else {
        None
    }
}

/// Sanitize a submitted options map for persistence.
///
/// Known toggles are coerced with [`sanitize_checkbox`], custom slots with
/// [`sanitize_hex_color`] (invalid colors are stored as empty strings), and
/// unknown keys are dropped.
pub fn sanitize_options(raw: &Map<String, Value>) -> Map<String, Value> {
    let mut clean = Map::new();
    for (key, value) in raw {
        if let Ok(sanitized) = sanitize_option(key, value) {
            clean.insert(key.clone(), sanitized);
        }
    }
    clean
}

/// Sanitize a single option value.
///
/// # Errors
///
/// Returns [`SwatchError::UnknownOption`] if `key` is not part of the record.
pub fn sanitize_option(key: &str, value: &Value) -> Result<Value> {
    match key {
        KEY_CORE | KEY_THEME | KEY_BOOTSTRAP => Ok(Value::Bool(sanitize_checkbox(value))),
        _ if is_custom_key(key) => {
            let color = value
                .as_str()
                .and_then(sanitize_hex_color)
                .unwrap_or_default();
            Ok(Value::String(color))
        }
        _ => Err(SwatchError::UnknownOption(key.to_string())),
    }
}

fn is_custom_key(key: &str) -> bool {
    (1..=CUSTOM_SLOTS).any(|i| key == custom_key(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn defaults_when_unset() {
        let settings = Settings::from_options(&Map::new());
        assert_eq!(settings, Settings::default());
        assert!(settings.enable_core);
        assert!(settings.enable_theme);
        assert!(!settings.enable_bootstrap);
        assert!(settings.custom.iter().all(Option::is_none));
    }

    #[test]
    fn stored_values_override_defaults() {
        let settings = Settings::from_options(&options(json!({
            "color_palette_core": false,
            "color_palette_bootstrap": true,
            "color_custom_2": "#abcdef",
        })));
        assert!(!settings.enable_core);
        assert!(settings.enable_theme);
        assert!(settings.enable_bootstrap);
        assert_eq!(settings.custom[1].as_deref(), Some("#abcdef"));
        assert_eq!(settings.custom[0], None);
    }

    #[test]
    fn read_path_uses_truthiness() {
        let settings = Settings::from_options(&options(json!({
            "color_palette_core": "",
            "color_palette_theme": "0",
            "color_palette_bootstrap": "1",
        })));
        assert!(!settings.enable_core);
        assert!(!settings.enable_theme);
        assert!(settings.enable_bootstrap);
    }

    #[test]
    fn empty_custom_slots_are_unset() {
        let settings = Settings::from_options(&options(json!({
            "color_custom_1": "",
            "color_custom_3": "#112233",
            "color_custom_4": null,
        })));
        let filled: Vec<_> = settings.custom_colors().collect();
        assert_eq!(filled, vec![(3, "#112233")]);
    }

    #[test]
    fn round_trips_through_options_layout() {
        let settings = Settings::default()
            .with_bootstrap(true)
            .with_custom(5, "#000");
        let options = settings.to_options();
        assert_eq!(options.get("color_custom_5"), Some(&json!("#000")));
        assert_eq!(options.get("color_custom_1"), Some(&json!("")));
        assert_eq!(Settings::from_options(&options), settings);
    }

    #[test]
    fn with_custom_ignores_out_of_range() {
        let settings = Settings::default().with_custom(0, "#fff").with_custom(6, "#fff");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn checkbox_only_accepts_true() {
        assert!(sanitize_checkbox(&json!(true)));
        assert!(sanitize_checkbox(&json!("true")));
        assert!(!sanitize_checkbox(&json!("1")));
        assert!(!sanitize_checkbox(&json!(1)));
        assert!(!sanitize_checkbox(&json!("TRUE")));
        assert!(!sanitize_checkbox(&json!(false)));
        assert!(!sanitize_checkbox(&Value::Null));
    }

    #[test]
    fn hex_color_sanitizing() {
        assert_eq!(sanitize_hex_color("#fff").as_deref(), Some("#fff"));
        assert_eq!(sanitize_hex_color("#A1B2C3").as_deref(), Some("#A1B2C3"));
        assert_eq!(sanitize_hex_color("fff"), None);
        assert_eq!(sanitize_hex_color("#ffff"), None);
        assert_eq!(sanitize_hex_color("#ggg"), None);
        assert_eq!(sanitize_hex_color("var(--x)"), None);
        assert_eq!(sanitize_hex_color(""), None);
    }

    #[test]
    fn sanitize_options_coerces_and_drops() {
        let clean = sanitize_options(&options(json!({
            "color_palette_core": "yes",
            "color_palette_bootstrap": "true",
            "color_custom_1": "#112233",
            "color_custom_2": "red",
            "something_else": 42,
        })));
        assert_eq!(
            Value::Object(clean),
            json!({
                "color_palette_core": false,
                "color_palette_bootstrap": true,
                "color_custom_1": "#112233",
                "color_custom_2": "",
            })
        );
    }

    #[test]
    fn sanitize_option_rejects_unknown_key() {
        let err = sanitize_option("color_custom_6", &json!("#fff")).unwrap_err();
        assert!(matches!(err, SwatchError::UnknownOption(k) if k == "color_custom_6"));
    }
}
