// SPDX-License-Identifier: MPL-2.0
//! The panel controller.
//!
//! `PanelController` owns everything the overlay knows: the configuration
//! pushed by the host, the current scale, visibility, layout class, label
//! texts and the notification registry. It is headless; the iced front end
//! feeds it user intents and host commands and renders its accessors.
//!
//! Operations that need the host answer with a [`HostRequest`] for the
//! caller to send. Operations that create or advance notification timers
//! take the current `Instant`.

pub mod config;
pub mod layout;
pub mod scale;
pub mod translations;

use crate::bridge::{HostCommand, HostRequest};
use crate::config::Settings;
use crate::error::Result;
use crate::i18n::I18n;
use crate::notifications::{Kind, Manager, NotificationId, Options};
use config::{PanelConfig, PartialConfig};
use layout::LayoutClass;
use scale::{one_decimal, Bounds, Direction, Preset, ScaleController, Tier, PRESETS};
use std::time::{Duration, Instant};
use translations::PanelTexts;

const PRESET_NOTICE: Duration = Duration::from_millis(1500);
const RESET_NOTICE: Duration = Duration::from_millis(2000);
const APPLYING_NOTICE: Duration = Duration::from_millis(2000);
const CLAMPED_NOTICE: Duration = Duration::from_millis(3000);
const APPLIED_NOTICE: Duration = Duration::from_millis(3000);
const APPLY_FAILED_NOTICE: Duration = Duration::from_millis(4000);

/// Keys the panel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKey {
    Escape,
    Enter,
    ArrowUp,
    ArrowDown,
}

/// Text of the apply button.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyLabel {
    pub text: String,
    /// Set for every tier except Normal; the view highlights the button.
    pub has_info: bool,
}

#[derive(Debug)]
pub struct PanelController {
    config: PanelConfig,
    scale: ScaleController,
    /// Last unclamped value entered on the slider, checked again on apply.
    pending_raw: Option<f64>,
    visible: bool,
    width: f32,
    layout: LayoutClass,
    texts: PanelTexts,
    notifications: Manager,
    i18n: I18n,
}

impl PanelController {
    #[must_use]
    pub fn new(settings: &Settings, i18n: I18n) -> Self {
        let config = PanelConfig::default();
        let texts = PanelTexts::for_config(&i18n, &config);
        Self {
            scale: ScaleController::new(config.default_scale),
            pending_raw: None,
            visible: false,
            width: settings.window.width,
            layout: LayoutClass::from_width(settings.window.width),
            texts,
            notifications: Manager::new(),
            i18n,
            config,
        }
    }

    // ----------------------------------------------------------------------
    // Time
    // ----------------------------------------------------------------------

    /// Fires every notification timer due at `now`.
    pub fn tick(&mut self, now: Instant) {
        self.notifications.tick(now);
    }

    /// Whether the front end needs to keep ticking.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.notifications.has_notifications()
    }

    // ----------------------------------------------------------------------
    // User intents
    // ----------------------------------------------------------------------

    /// Slider moved to `raw`. Clamps silently; the clamp is reported on apply.
    pub fn slider_input(&mut self, raw: f64) -> f64 {
        let raw = scale::normalize(raw);
        self.pending_raw = Some(raw);
        self.scale.set_scale(raw, self.bounds()).value
    }

    /// Selects a preset, clamped into the configured bounds.
    pub fn select_preset(&mut self, now: Instant, preset: Preset) {
        if !self.config.enable_presets {
            tracing::debug!(scale = preset.scale, "presets disabled; ignoring selection");
            return;
        }
        self.pending_raw = None;
        self.scale.set_scale(preset.scale, self.bounds());

        let name = self.i18n.tr(preset.name_key);
        let message = self
            .i18n
            .tr_with_args("notification-preset-selected", &[("name", &name)]);
        self.notify(now, Kind::Info, message, PRESET_NOTICE);
    }

    /// Moves the scale one configured step up or down.
    pub fn step(&mut self, direction: Direction) -> f64 {
        self.pending_raw = None;
        self.scale
            .step(direction, self.config.scale_step, self.bounds())
    }

    /// Returns to the configured default scale.
    pub fn reset(&mut self, now: Instant) -> f64 {
        self.pending_raw = None;
        let value = self
            .scale
            .reset(self.config.default_scale, self.bounds());
        let message = self.i18n.tr("notification-reset");
        self.notify(now, Kind::Info, message, RESET_NOTICE);
        value
    }

    /// Starts applying the current scale.
    ///
    /// Warns when the last slider input had to be clamped. Returns the
    /// request to send, or `None` while the panel is hidden.
    pub fn apply(&mut self, now: Instant) -> Option<HostRequest> {
        if !self.visible {
            tracing::debug!("apply ignored while hidden");
            return None;
        }
        let bounds = self.bounds();
        let raw = self.pending_raw.take().unwrap_or(self.scale.current());
        let clamped = self.scale.set_scale(raw, bounds);

        if clamped.was_clamped {
            let value = clamped.value.to_string();
            let min = bounds.min.to_string();
            let max = bounds.max.to_string();
            let message = self.i18n.tr_with_args(
                "notification-clamped",
                &[("value", &value), ("min", &min), ("max", &max)],
            );
            self.notify(now, Kind::Warning, message, CLAMPED_NOTICE);
        }

        let message = self.i18n.tr("notification-applying");
        self.notify(now, Kind::Info, message, APPLYING_NOTICE);

        tracing::info!(scale = clamped.value, "applying scale");
        Some(HostRequest::ApplyScale {
            scale: clamped.value,
        })
    }

    /// Reports the outcome of the apply request that carried `value`.
    ///
    /// On success the panel closes and the close request is returned; on
    /// failure the panel stays open.
    pub fn apply_finished(
        &mut self,
        now: Instant,
        value: f64,
        result: &Result<()>,
    ) -> Option<HostRequest> {
        match result {
            Ok(()) => {
                let message = self
                    .i18n
                    .tr_with_args("notification-applied", &[("value", &one_decimal(value))]);
                self.notify(now, Kind::Success, message, APPLIED_NOTICE);
                self.close()
            }
            Err(err) => {
                tracing::warn!(%err, scale = value, "host rejected scale");
                let message = self.i18n.tr("notification-apply-failed");
                self.notify(now, Kind::Error, message, APPLY_FAILED_NOTICE);
                None
            }
        }
    }

    /// Hides the panel. Returns the close request only when it was shown.
    pub fn close(&mut self) -> Option<HostRequest> {
        if !self.visible {
            tracing::debug!("panel already hidden");
            return None;
        }
        self.visible = false;
        self.pending_raw = None;
        tracing::info!("panel hidden");
        Some(HostRequest::CloseUi)
    }

    /// Keyboard shortcut handling; ignored while hidden or when disabled.
    pub fn key(&mut self, now: Instant, key: PanelKey) -> Option<HostRequest> {
        if !self.visible || !self.config.enable_keyboard_controls {
            return None;
        }
        match key {
            PanelKey::Escape => self.close(),
            PanelKey::Enter => self.apply(now),
            PanelKey::ArrowUp => {
                self.step(Direction::Up);
                None
            }
            PanelKey::ArrowDown => {
                self.step(Direction::Down);
                None
            }
        }
    }

    /// Re-evaluates the layout class for a new viewport width.
    pub fn resize(&mut self, width: f32) -> LayoutClass {
        self.width = width;
        let layout = LayoutClass::from_width(width);
        if layout != self.layout {
            tracing::debug!(from = self.layout.name(), to = layout.name(), "layout changed");
            self.layout = layout;
        }
        layout
    }

    // ----------------------------------------------------------------------
    // Host commands
    // ----------------------------------------------------------------------

    /// Applies an inbound host command.
    pub fn handle_command(&mut self, now: Instant, command: HostCommand) -> Option<HostRequest> {
        tracing::debug!(action = command.action(), "handling host command");
        match command {
            HostCommand::ShowUi { config, scale } => {
                if let Some(config) = config {
                    self.update_config(config);
                }
                self.set_host_scale(scale);
                self.visible = true;
                self.resize(self.width);
                tracing::info!(scale = self.scale.current(), "panel shown");
                None
            }
            HostCommand::HideUi => self.close(),
            HostCommand::UpdateScale { scale } => {
                self.set_host_scale(scale);
                None
            }
            HostCommand::UpdateConfig { config } => {
                match config {
                    Some(config) => self.update_config(config),
                    None => tracing::debug!("updateConfig without a config"),
                }
                None
            }
            HostCommand::ShowNotification {
                message,
                kind,
                duration,
            } => {
                let message = message.unwrap_or_else(|| self.i18n.tr("notification-default"));
                self.notifications
                    .show(now, message, kind, duration, Options::default());
                None
            }
        }
    }

    /// Merges a host configuration and refreshes everything derived from it.
    pub fn update_config(&mut self, partial: PartialConfig) {
        self.config.merge(partial);
        self.texts = PanelTexts::for_config(&self.i18n, &self.config);
        self.scale.reclamp(self.config.bounds());
        self.pending_raw = None;
    }

    /// Shows a warning whose text is the built-in message `key`.
    pub fn warn(&mut self, now: Instant, key: &str) -> NotificationId {
        let message = self.i18n.tr(key);
        self.notifications
            .warning(now, message, None, Options::default())
    }

    /// Handles a toast interaction.
    pub fn handle_notification(
        &mut self,
        now: Instant,
        message: &crate::notifications::NotificationMessage,
    ) {
        self.notifications.handle_message(now, message);
    }

    fn set_host_scale(&mut self, scale: Option<f64>) {
        self.pending_raw = None;
        let raw = scale.unwrap_or(self.config.default_scale);
        self.scale.set_scale(raw, self.bounds());
    }

    fn notify(&mut self, now: Instant, kind: Kind, message: String, duration: Duration) {
        self.notifications
            .show(now, message, kind, Some(duration), Options::default());
    }

    // ----------------------------------------------------------------------
    // View state
    // ----------------------------------------------------------------------

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale.current()
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.config.bounds()
    }

    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> LayoutClass {
        self.layout
    }

    #[must_use]
    pub fn texts(&self) -> &PanelTexts {
        &self.texts
    }

    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    /// Numeric readout with one decimal place.
    #[must_use]
    pub fn readout(&self) -> String {
        self.scale.readout()
    }

    /// Presets offered to the user, each with its active flag.
    ///
    /// Empty when presets are disabled by configuration.
    pub fn presets(&self) -> impl Iterator<Item = (Preset, bool)> {
        let enabled = self.config.enable_presets;
        let current = self.scale.current();
        PRESETS
            .into_iter()
            .filter(move |_| enabled)
            .map(move |preset| (preset, preset.is_active(current)))
    }

    #[must_use]
    pub fn apply_label(&self) -> ApplyLabel {
        let value = self.scale.current();
        let tier = Tier::from_scale(value);
        let tier_name = self.i18n.tr(tier.i18n_key());
        let verb = self.texts.apply.as_str();

        let text = if tier == Tier::Normal {
            self.i18n.tr_with_args(
                "apply-label-normal",
                &[("verb", verb), ("tier", &tier_name)],
            )
        } else {
            self.i18n.tr_with_args(
                "apply-label-tier",
                &[("verb", verb), ("value", &one_decimal(value)), ("tier", &tier_name)],
            )
        };
        ApplyLabel {
            text,
            has_info: tier != Tier::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::notifications::Entry;
    use serde_json::json;

    fn controller() -> PanelController {
        PanelController::new(&Settings::default(), I18n::default())
    }

    fn shown(scale: f64) -> (PanelController, Instant) {
        let now = Instant::now();
        let mut panel = controller();
        panel.handle_command(
            now,
            HostCommand::ShowUi {
                config: None,
                scale: Some(scale),
            },
        );
        (panel, now)
    }

    fn partial(value: serde_json::Value) -> PartialConfig {
        serde_json::from_value(value).expect("valid partial config")
    }

    fn messages(panel: &PanelController) -> Vec<(Kind, String)> {
        panel
            .notifications()
            .entries()
            .map(Entry::notification)
            .map(|n| (n.kind(), n.message().to_string()))
            .collect()
    }

    #[test]
    fn starts_hidden_at_default_scale() {
        let panel = controller();
        assert!(!panel.is_visible());
        assert_eq!(panel.scale(), 1.0);
        assert_eq!(panel.layout(), LayoutClass::Desktop);
        assert!(panel.notifications().is_empty());
    }

    #[test]
    fn show_ui_makes_panel_visible_with_scale() {
        let (panel, _) = shown(1.0);
        assert!(panel.is_visible());
        assert_eq!(panel.readout(), "1.0");
        assert_eq!(
            panel.apply_label(),
            ApplyLabel {
                text: "Aplicar (Normal)".to_string(),
                has_info: false
            }
        );
    }

    #[test]
    fn apply_label_names_each_tier() {
        let (mut panel, _) = shown(1.0);
        for (scale, text) in [
            (0.7, "Aplicar (0.7m - Pequeno)"),
            (1.5, "Aplicar (1.5m - Grande)"),
            (2.5, "Aplicar (2.5m - Máximo)"),
        ] {
            panel.slider_input(scale);
            let label = panel.apply_label();
            assert_eq!(label.text, text);
            assert!(label.has_info);
        }
    }

    #[test]
    fn host_apply_verb_is_used_in_label() {
        let (mut panel, _) = shown(2.0);
        panel.update_config(partial(json!({ "lang": { "apply": "Apply" } })));
        assert_eq!(panel.apply_label().text, "Apply (2.0m - Grande)");
    }

    #[test]
    fn show_ui_without_scale_uses_default() {
        let now = Instant::now();
        let mut panel = controller();
        panel.handle_command(
            now,
            HostCommand::ShowUi {
                config: Some(partial(json!({ "defaultScale": 1.5 }))),
                scale: None,
            },
        );
        assert_eq!(panel.scale(), 1.5);
    }

    #[test]
    fn update_scale_is_clamped() {
        let (mut panel, now) = shown(1.0);
        panel.handle_command(now, HostCommand::UpdateScale { scale: Some(9.0) });
        assert_eq!(panel.scale(), 3.0);
        panel.handle_command(now, HostCommand::UpdateScale { scale: None });
        assert_eq!(panel.scale(), 1.0);
    }

    #[test]
    fn slider_clamps_and_apply_warns() {
        let (mut panel, now) = shown(1.0);
        assert_eq!(panel.slider_input(3.5), 3.0);
        assert!(panel.notifications().is_empty());

        let request = panel.apply(now);
        assert_eq!(request, Some(HostRequest::ApplyScale { scale: 3.0 }));
        assert_eq!(
            messages(&panel),
            vec![
                (
                    Kind::Warning,
                    "Escala ajustada para 3m (limite: 0.1m - 3m)".to_string()
                ),
                (Kind::Info, "Aplicando escala...".to_string()),
            ]
        );
    }

    #[test]
    fn apply_in_range_does_not_warn() {
        let (mut panel, now) = shown(1.0);
        panel.slider_input(2.0);
        panel.apply(now);
        assert_eq!(
            messages(&panel),
            vec![(Kind::Info, "Aplicando escala...".to_string())]
        );
    }

    #[test]
    fn successful_apply_closes_panel() {
        let (mut panel, now) = shown(2.0);
        panel.apply(now);

        let follow_up = panel.apply_finished(now, 2.0, &Ok(()));
        assert_eq!(follow_up, Some(HostRequest::CloseUi));
        assert!(!panel.is_visible());
        assert!(messages(&panel).contains(&(Kind::Success, "Escala aplicada: 2.0m".to_string())));
    }

    #[test]
    fn failed_apply_keeps_panel_open() {
        let (mut panel, now) = shown(2.0);
        panel.apply(now);

        let follow_up =
            panel.apply_finished(now, 2.0, &Err(Error::Transport("refused".to_string())));
        assert_eq!(follow_up, None);
        assert!(panel.is_visible());
        assert!(messages(&panel).contains(&(Kind::Error, "Erro ao aplicar escala!".to_string())));
    }

    #[test]
    fn each_response_reports_its_own_scale() {
        let (mut panel, now) = shown(2.0);
        let first = panel.apply(now);
        panel.slider_input(0.5);
        let second = panel.apply(now);
        assert_eq!(first, Some(HostRequest::ApplyScale { scale: 2.0 }));
        assert_eq!(second, Some(HostRequest::ApplyScale { scale: 0.5 }));

        panel.apply_finished(now, 2.0, &Ok(()));
        assert!(messages(&panel).contains(&(Kind::Success, "Escala aplicada: 2.0m".to_string())));
        assert!(!messages(&panel).contains(&(Kind::Success, "Escala aplicada: 0.5m".to_string())));
    }

    #[test]
    fn apply_while_hidden_is_ignored() {
        let now = Instant::now();
        let mut panel = controller();
        assert_eq!(panel.apply(now), None);
    }

    #[test]
    fn hide_is_idempotent() {
        let (mut panel, now) = shown(1.0);
        assert_eq!(panel.handle_command(now, HostCommand::HideUi), Some(HostRequest::CloseUi));
        assert_eq!(panel.handle_command(now, HostCommand::HideUi), None);
        assert_eq!(panel.close(), None);
    }

    #[test]
    fn preset_selection_notifies_and_activates() {
        let (mut panel, now) = shown(1.0);
        panel.select_preset(now, PRESETS[2]);

        assert_eq!(panel.scale(), 2.0);
        let active: Vec<f64> = panel
            .presets()
            .filter(|(_, active)| *active)
            .map(|(preset, _)| preset.scale)
            .collect();
        assert_eq!(active, vec![2.0]);
        assert_eq!(
            messages(&panel),
            vec![(Kind::Info, "Preset Grande selecionado".to_string())]
        );
    }

    #[test]
    fn preset_is_clamped_to_bounds() {
        let (mut panel, now) = shown(1.0);
        panel.update_config(partial(json!({ "maxScale": 2.5 })));
        panel.select_preset(now, PRESETS[3]);
        assert_eq!(panel.scale(), 2.5);
    }

    #[test]
    fn disabled_presets_are_not_offered() {
        let (mut panel, now) = shown(1.0);
        panel.update_config(partial(json!({ "enablePresets": false })));
        assert_eq!(panel.presets().count(), 0);

        panel.select_preset(now, PRESETS[0]);
        assert_eq!(panel.scale(), 1.0);
    }

    #[test]
    fn reset_returns_to_default_and_notifies() {
        let (mut panel, now) = shown(2.7);
        assert_eq!(panel.reset(now), 1.0);
        assert_eq!(
            messages(&panel),
            vec![(Kind::Info, "Escala resetada para o padrão".to_string())]
        );
    }

    #[test]
    fn keyboard_steps_and_shortcuts() {
        let (mut panel, now) = shown(0.9);
        assert_eq!(panel.key(now, PanelKey::ArrowUp), None);
        assert_eq!(panel.scale(), 1.0);
        panel.key(now, PanelKey::ArrowDown);
        panel.key(now, PanelKey::ArrowDown);
        assert_eq!(panel.scale(), 0.8);

        assert_eq!(
            panel.key(now, PanelKey::Enter),
            Some(HostRequest::ApplyScale { scale: 0.8 })
        );
        assert_eq!(panel.key(now, PanelKey::Escape), Some(HostRequest::CloseUi));
        assert_eq!(panel.key(now, PanelKey::ArrowUp), None);
        assert_eq!(panel.scale(), 0.8);
    }

    #[test]
    fn keyboard_can_be_disabled() {
        let (mut panel, now) = shown(1.0);
        panel.update_config(partial(json!({ "enableKeyboardControls": false })));
        assert_eq!(panel.key(now, PanelKey::Escape), None);
        assert!(panel.is_visible());
    }

    #[test]
    fn shrinking_bounds_reclamps_current_scale() {
        let (mut panel, _) = shown(2.8);
        panel.update_config(partial(json!({ "maxScale": 2.0 })));
        assert_eq!(panel.scale(), 2.0);
        assert_eq!(panel.texts().slider_max, "2m");
    }

    #[test]
    fn host_notification_uses_defaults() {
        let (mut panel, now) = shown(1.0);
        panel.handle_command(
            now,
            HostCommand::ShowNotification {
                message: None,
                kind: Kind::Info,
                duration: None,
            },
        );
        let entry = panel.notifications().entries().next().expect("shown");
        assert_eq!(entry.notification().message(), "Notificação");
        assert_eq!(entry.notification().duration(), Duration::from_millis(5000));
    }

    #[test]
    fn notifications_expire_through_tick() {
        let (mut panel, now) = shown(1.0);
        panel.reset(now);
        assert!(panel.needs_tick());

        panel.tick(now + Duration::from_millis(2300));
        assert!(!panel.needs_tick());
    }

    #[test]
    fn resize_updates_layout() {
        let mut panel = controller();
        assert_eq!(panel.resize(700.0), LayoutClass::Mobile);
        assert_eq!(panel.resize(900.0), LayoutClass::Tablet);
        assert_eq!(panel.layout(), LayoutClass::Tablet);
    }
}
