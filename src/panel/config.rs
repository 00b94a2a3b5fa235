// SPDX-License-Identifier: MPL-2.0
//! Runtime panel configuration pushed by the host.
//!
//! The host sends partial configurations; each one is laid over the built-in
//! defaults (top-level keys only), while the `lang` table accumulates across
//! updates key by key. Fields that are missing, of the wrong type, zero or
//! non-finite read as their defaults; ranges are otherwise taken as given,
//! including an inverted `minScale`/`maxScale` pair.

use crate::config::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_SCALE, DEFAULT_SCALE_STEP};
use crate::panel::scale::Bounds;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Localized strings supplied by the host.
///
/// Top-level string entries plus an optional `tooltips` sub-table. Entries
/// that are not strings are dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct LangTable {
    strings: BTreeMap<String, String>,
    tooltips: Option<BTreeMap<String, String>>,
}

impl From<Value> for LangTable {
    fn from(value: Value) -> Self {
        let mut table = LangTable::default();
        let Value::Object(map) = value else {
            tracing::debug!("ignoring non-object lang table");
            return table;
        };
        for (key, value) in map {
            match value {
                Value::String(text) => {
                    table.strings.insert(key, text);
                }
                Value::Object(tips) if key == "tooltips" => {
                    table.tooltips = Some(
                        tips.into_iter()
                            .filter_map(|(k, v)| match v {
                                Value::String(text) => Some((k, text)),
                                _ => None,
                            })
                            .collect(),
                    );
                }
                _ => {}
            }
        }
        table
    }
}

impl LangTable {
    /// Returns a non-empty string entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings
            .get(key)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Returns a non-empty tooltip entry.
    #[must_use]
    pub fn tooltip(&self, key: &str) -> Option<&str> {
        self.tooltips
            .as_ref()
            .and_then(|tips| tips.get(key))
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Lays `other` over `self`: its entries win, entries it lacks survive.
    /// A `tooltips` table in `other` replaces the existing one as a whole.
    pub fn merge(&mut self, other: LangTable) {
        self.strings.extend(other.strings);
        if other.tooltips.is_some() {
            self.tooltips = other.tooltips;
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty() && self.tooltips.is_none()
    }
}

/// A configuration update as sent by the host. Absent keys keep defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialConfig {
    #[serde(default, deserialize_with = "lenient_number")]
    pub min_scale: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub max_scale: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub default_scale: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub scale_step: Option<f64>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub enable_animations: Option<bool>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub enable_keyboard_controls: Option<bool>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub enable_presets: Option<bool>,
    #[serde(default)]
    pub lang: Option<LangTable>,
}

/// Reads a number, treating any other JSON type as absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

/// Reads a boolean, treating any other JSON type as absent.
fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_bool())
}

/// Usable scale values: finite and non-zero.
fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

/// Effective panel configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    pub default_scale: f64,
    pub scale_step: f64,
    pub enable_animations: bool,
    pub enable_keyboard_controls: bool,
    pub enable_presets: bool,
    pub lang: Option<LangTable>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            default_scale: DEFAULT_SCALE,
            scale_step: DEFAULT_SCALE_STEP,
            enable_animations: true,
            enable_keyboard_controls: true,
            enable_presets: true,
            lang: None,
        }
    }
}

impl PanelConfig {
    /// Replaces the configuration with `partial` laid over the defaults.
    ///
    /// The `lang` table is the exception: it is merged into the current one
    /// so partial translation updates accumulate.
    pub fn merge(&mut self, partial: PartialConfig) {
        let defaults = PanelConfig::default();
        let mut lang = self.lang.take();
        if let Some(update) = partial.lang {
            lang.get_or_insert_with(LangTable::default).merge(update);
        }

        *self = PanelConfig {
            min_scale: usable(partial.min_scale).unwrap_or(defaults.min_scale),
            max_scale: usable(partial.max_scale).unwrap_or(defaults.max_scale),
            default_scale: usable(partial.default_scale).unwrap_or(defaults.default_scale),
            scale_step: partial
                .scale_step
                .filter(|step| step.is_finite() && *step > 0.0)
                .unwrap_or(defaults.scale_step),
            enable_animations: partial
                .enable_animations
                .unwrap_or(defaults.enable_animations),
            enable_keyboard_controls: partial
                .enable_keyboard_controls
                .unwrap_or(defaults.enable_keyboard_controls),
            enable_presets: partial.enable_presets.unwrap_or(defaults.enable_presets),
            lang,
        };

        if self.min_scale > self.max_scale {
            tracing::warn!(
                min = self.min_scale,
                max = self.max_scale,
                "host sent an inverted scale range; clamping will pin to the minimum"
            );
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.min_scale, self.max_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn partial(value: Value) -> PartialConfig {
        serde_json::from_value(value).expect("valid partial config")
    }

    #[test]
    fn merge_keeps_unspecified_keys_at_defaults() {
        let mut config = PanelConfig::default();
        config.merge(partial(json!({ "minScale": 0.5 })));

        assert_eq!(config.min_scale, 0.5);
        assert_eq!(config.max_scale, 3.0);
        assert_eq!(config.default_scale, 1.0);
        assert_eq!(config.scale_step, 0.1);
    }

    #[test]
    fn merge_is_relative_to_defaults_not_previous_update() {
        let mut config = PanelConfig::default();
        config.merge(partial(json!({ "maxScale": 5.0, "enablePresets": false })));
        config.merge(partial(json!({ "minScale": 0.2 })));

        assert_eq!(config.min_scale, 0.2);
        assert_eq!(config.max_scale, 3.0);
        assert!(config.enable_presets);
    }

    #[test]
    fn lang_updates_accumulate() {
        let mut config = PanelConfig::default();
        config.merge(partial(json!({ "lang": { "title": "Scale", "apply": "Apply" } })));
        config.merge(partial(json!({ "lang": { "title": "Size", "reset": "Reset" } })));

        let lang = config.lang.as_ref().expect("lang present");
        assert_eq!(lang.get("title"), Some("Size"));
        assert_eq!(lang.get("apply"), Some("Apply"));
        assert_eq!(lang.get("reset"), Some("Reset"));
    }

    #[test]
    fn lang_survives_update_without_lang() {
        let mut config = PanelConfig::default();
        config.merge(partial(json!({ "lang": { "title": "Scale" } })));
        config.merge(partial(json!({ "minScale": 0.3 })));

        let lang = config.lang.as_ref().expect("lang present");
        assert_eq!(lang.get("title"), Some("Scale"));
    }

    #[test]
    fn tooltips_table_is_replaced_as_a_whole() {
        let mut config = PanelConfig::default();
        config.merge(partial(json!({
            "lang": { "tooltips": { "close": "Close", "apply": "Apply" } }
        })));
        config.merge(partial(json!({ "lang": { "tooltips": { "reset": "Reset" } } })));

        let lang = config.lang.as_ref().expect("lang present");
        assert_eq!(lang.tooltip("reset"), Some("Reset"));
        assert_eq!(lang.tooltip("close"), None);
    }

    #[test]
    fn wrongly_typed_and_zero_fields_fall_back_to_defaults() {
        let mut config = PanelConfig::default();
        config.merge(partial(json!({
            "minScale": "big",
            "maxScale": 0,
            "scaleStep": -1.0,
            "enableAnimations": "yes",
            "enablePresets": false
        })));

        assert_eq!(config.min_scale, DEFAULT_MIN_SCALE);
        assert_eq!(config.max_scale, DEFAULT_MAX_SCALE);
        assert_eq!(config.scale_step, DEFAULT_SCALE_STEP);
        assert!(config.enable_animations);
        assert!(!config.enable_presets);
    }

    #[test]
    fn inverted_range_is_kept_as_given() {
        let mut config = PanelConfig::default();
        config.merge(partial(json!({ "minScale": 2.0, "maxScale": 1.0 })));

        assert_eq!(config.min_scale, 2.0);
        assert_eq!(config.max_scale, 1.0);
    }

    #[test]
    fn lang_table_drops_non_string_entries() {
        let table = LangTable::from(json!({
            "title": "T",
            "count": 3,
            "tooltips": { "close": "X", "n": 1 }
        }));
        assert_eq!(table.get("title"), Some("T"));
        assert_eq!(table.get("count"), None);
        assert_eq!(table.tooltip("close"), Some("X"));
        assert_eq!(table.tooltip("n"), None);
    }
}
