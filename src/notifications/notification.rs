// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record, its `Kind` and the
//! display `Phase` it moves through while on screen.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification_{}", self.0)
    }
}

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
    Primary,
}

impl Kind {
    /// Parses the wire name used by the host; unknown names fall back to `Info`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Kind::Success,
            "error" => Kind::Error,
            "warning" => Kind::Warning,
            "primary" => Kind::Primary,
            _ => Kind::Info,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
            Kind::Primary => "primary",
        }
    }

    /// Accent color of the toast border and icon.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Info => palette::INFO_500,
            Kind::Primary => palette::PRIMARY_500,
        }
    }

    /// Default icon glyph for this kind.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Kind::Success => "✔",
            Kind::Error => "✖",
            Kind::Warning => "⚠",
            Kind::Info => "ℹ",
            Kind::Primary => "●",
        }
    }
}

/// Where a notification is in its on-screen life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Inserted, waiting for the debut delay before becoming visible.
    Entering,
    /// Fully visible.
    Shown,
    /// Exit animation running; removal is pending.
    Leaving,
}

/// Per-call overrides for [`Notification`] fields.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub closable: Option<bool>,
    pub icon: Option<String>,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: String,
    /// Zero means the notification stays until dismissed.
    duration: Duration,
    closable: bool,
    icon: String,
}

impl Notification {
    pub fn new(kind: Kind, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            duration,
            closable: true,
            icon: kind.icon().to_string(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        if let Some(closable) = options.closable {
            self.closable = closable;
        }
        if let Some(icon) = options.icon {
            self.icon = icon;
        }
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns whether the notification only leaves on explicit dismissal.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.duration.is_zero()
    }

    #[must_use]
    pub fn closable(&self) -> bool {
        self.closable
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::new(Kind::Info, "test", Duration::ZERO);
        let n2 = Notification::new(Kind::Info, "test", Duration::ZERO);
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn id_display_is_prefixed() {
        let id = NotificationId::new();
        assert!(id.to_string().starts_with("notification_"));
    }

    #[test]
    fn kind_names_round_trip_and_unknown_falls_back_to_info() {
        for kind in [
            Kind::Success,
            Kind::Error,
            Kind::Warning,
            Kind::Info,
            Kind::Primary,
        ] {
            assert_eq!(Kind::from_name(kind.name()), kind);
        }
        assert_eq!(Kind::from_name("fatal"), Kind::Info);
    }

    #[test]
    fn kind_colors_are_distinct() {
        let colors = [
            Kind::Success.color(),
            Kind::Error.color(),
            Kind::Warning.color(),
            Kind::Info.color(),
            Kind::Primary.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn options_override_defaults() {
        let notification = Notification::new(Kind::Warning, "careful", Duration::from_secs(1))
            .with_options(Options {
                closable: Some(false),
                icon: Some("!".to_string()),
            });

        assert!(!notification.closable());
        assert_eq!(notification.icon(), "!");
        assert_eq!(notification.message(), "careful");
    }

    #[test]
    fn zero_duration_is_persistent() {
        assert!(Notification::new(Kind::Info, "", Duration::ZERO).is_persistent());
        assert!(!Notification::new(Kind::Info, "", Duration::from_millis(1)).is_persistent());
    }
}
