// SPDX-License-Identifier: MPL-2.0
//! Text slots of the panel and the host translation overlay.
//!
//! Every slot starts from the built-in Fluent string. When the host supplies
//! a `lang` table, its non-empty entries replace the matching slots.

use super::config::{LangTable, PanelConfig};
use super::scale::{Bounds, Preset};
use crate::i18n::I18n;

/// Host `lang` key for each label slot.
const LABEL_KEYS: [(Slot, &str); 13] = [
    (Slot::Title, "title"),
    (Slot::Subtitle, "subtitle"),
    (Slot::Label, "label"),
    (Slot::Description, "description"),
    (Slot::ScaleUnit, "scaleUnit"),
    (Slot::SliderMin, "sliderMin"),
    (Slot::SliderMax, "sliderMax"),
    (Slot::PresetSmall, "small"),
    (Slot::PresetNormal, "normal"),
    (Slot::PresetLarge, "large"),
    (Slot::Reset, "reset"),
    (Slot::Apply, "apply"),
    (Slot::Help, "help"),
];

/// Host `lang.tooltips` key for each tooltip slot.
const TOOLTIP_KEYS: [(Slot, &str); 5] = [
    (Slot::TooltipClose, "close"),
    (Slot::TooltipSlider, "slider"),
    (Slot::TooltipReset, "reset"),
    (Slot::TooltipApply, "apply"),
    (Slot::TooltipPreset, "preset"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Title,
    Subtitle,
    Label,
    Description,
    ScaleUnit,
    SliderMin,
    SliderMax,
    PresetSmall,
    PresetNormal,
    PresetLarge,
    Reset,
    Apply,
    Help,
    TooltipClose,
    TooltipSlider,
    TooltipReset,
    TooltipApply,
    TooltipPreset,
}

/// Every string the panel view displays.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelTexts {
    pub title: String,
    pub subtitle: String,
    pub label: String,
    pub description: String,
    pub scale_unit: String,
    pub slider_min: String,
    pub slider_max: String,
    pub preset_small: String,
    pub preset_normal: String,
    pub preset_large: String,
    pub preset_max: String,
    /// Reset button text.
    pub reset: String,
    /// Verb of the apply button label.
    pub apply: String,
    pub help: String,
    pub tooltip_close: String,
    pub tooltip_slider: String,
    pub tooltip_reset: String,
    pub tooltip_apply: String,
    pub tooltip_preset: String,
}

impl PanelTexts {
    /// Built-in strings for `bounds`, without host overrides.
    #[must_use]
    pub fn new(i18n: &I18n, bounds: Bounds) -> Self {
        let mut texts = Self {
            title: i18n.tr("panel-title"),
            subtitle: i18n.tr("panel-subtitle"),
            label: i18n.tr("scale-label"),
            description: i18n.tr("scale-description"),
            scale_unit: i18n.tr("scale-unit"),
            slider_min: String::new(),
            slider_max: String::new(),
            preset_small: i18n.tr("preset-small"),
            preset_normal: i18n.tr("preset-normal"),
            preset_large: i18n.tr("preset-large"),
            preset_max: i18n.tr("preset-max"),
            reset: i18n.tr("button-reset"),
            apply: i18n.tr("button-apply"),
            help: i18n.tr("help-text"),
            tooltip_close: i18n.tr("tooltip-close"),
            tooltip_slider: i18n.tr("tooltip-slider"),
            tooltip_reset: i18n.tr("tooltip-reset"),
            tooltip_apply: i18n.tr("tooltip-apply"),
            tooltip_preset: i18n.tr("tooltip-preset"),
        };
        texts.refresh_bounds(i18n, bounds);
        texts
    }

    /// Built-in strings for `config` with its `lang` table applied.
    #[must_use]
    pub fn for_config(i18n: &I18n, config: &PanelConfig) -> Self {
        let mut texts = Self::new(i18n, config.bounds());
        texts.apply(config.lang.as_ref());
        texts
    }

    /// Rewrites the slider bound labels.
    pub fn refresh_bounds(&mut self, i18n: &I18n, bounds: Bounds) {
        self.slider_min = i18n.tr_with_args("bound-label", &[("value", &bounds.min.to_string())]);
        self.slider_max = i18n.tr_with_args("bound-label", &[("value", &bounds.max.to_string())]);
    }

    /// Copies host translations into the slots.
    ///
    /// Returns `false`, leaving every slot untouched, when there is no table.
    pub fn apply(&mut self, lang: Option<&LangTable>) -> bool {
        let Some(lang) = lang else {
            tracing::debug!("no host translations; keeping built-in labels");
            return false;
        };
        for (slot, key) in LABEL_KEYS {
            if let Some(text) = lang.get(key) {
                *self.slot_mut(slot) = text.to_string();
            }
        }
        for (slot, key) in TOOLTIP_KEYS {
            if let Some(text) = lang.tooltip(key) {
                *self.slot_mut(slot) = text.to_string();
            }
        }
        true
    }

    /// Button text of a preset.
    #[must_use]
    pub fn preset_label(&self, preset: &Preset) -> &str {
        match preset.lang_key {
            Some("small") => &self.preset_small,
            Some("normal") => &self.preset_normal,
            Some("large") => &self.preset_large,
            _ => &self.preset_max,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut String {
        match slot {
            Slot::Title => &mut self.title,
            Slot::Subtitle => &mut self.subtitle,
            Slot::Label => &mut self.label,
            Slot::Description => &mut self.description,
            Slot::ScaleUnit => &mut self.scale_unit,
            Slot::SliderMin => &mut self.slider_min,
            Slot::SliderMax => &mut self.slider_max,
            Slot::PresetSmall => &mut self.preset_small,
            Slot::PresetNormal => &mut self.preset_normal,
            Slot::PresetLarge => &mut self.preset_large,
            Slot::Reset => &mut self.reset,
            Slot::Apply => &mut self.apply,
            Slot::Help => &mut self.help,
            Slot::TooltipClose => &mut self.tooltip_close,
            Slot::TooltipSlider => &mut self.tooltip_slider,
            Slot::TooltipReset => &mut self.tooltip_reset,
            Slot::TooltipApply => &mut self.tooltip_apply,
            Slot::TooltipPreset => &mut self.tooltip_preset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::scale::PRESETS;
    use serde_json::json;

    fn bounds() -> Bounds {
        Bounds::new(0.1, 3.0)
    }

    #[test]
    fn defaults_come_from_builtin_strings() {
        let texts = PanelTexts::new(&I18n::default(), bounds());
        assert_eq!(texts.apply, "Aplicar");
        assert_eq!(texts.slider_min, "0.1m");
        assert_eq!(texts.slider_max, "3m");
        assert_eq!(texts.preset_label(&PRESETS[3]), "Máximo");
    }

    #[test]
    fn absent_lang_is_a_no_op() {
        let mut texts = PanelTexts::new(&I18n::default(), bounds());
        let before = texts.clone();
        assert!(!texts.apply(None));
        assert_eq!(texts, before);
    }

    #[test]
    fn host_strings_replace_matching_slots_only() {
        let lang = LangTable::from(json!({
            "title": "Character size",
            "small": "Tiny",
            "sliderMax": "max",
            "help": "",
            "tooltips": { "preset": "Pick me", "close": "Close panel" }
        }));
        let mut texts = PanelTexts::new(&I18n::default(), bounds());
        let help = texts.help.clone();

        assert!(texts.apply(Some(&lang)));
        assert_eq!(texts.title, "Character size");
        assert_eq!(texts.preset_label(&PRESETS[0]), "Tiny");
        assert_eq!(texts.slider_max, "max");
        assert_eq!(texts.help, help);
        assert_eq!(texts.tooltip_preset, "Pick me");
        assert_eq!(texts.tooltip_close, "Close panel");
        assert_eq!(texts.reset, "Resetar");
    }

    #[test]
    fn reset_label_and_tooltip_are_separate_slots() {
        let lang = LangTable::from(json!({
            "reset": "Undo",
            "tooltips": { "reset": "Back to default" }
        }));
        let mut texts = PanelTexts::new(&I18n::default(), bounds());
        texts.apply(Some(&lang));
        assert_eq!(texts.reset, "Undo");
        assert_eq!(texts.tooltip_reset, "Back to default");
    }
}
