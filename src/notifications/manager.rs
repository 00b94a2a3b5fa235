// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the registry of live notifications and the timers that
//! move them through their phases: a short debut delay before a toast counts
//! as visible, an optional auto-hide after its duration, and a fixed exit
//! delay before it is removed from the registry.
//!
//! Time never advances on its own. Every call takes the current `Instant`
//! and [`Manager::tick`] fires whatever timers have come due.

use super::notification::{Kind, Notification, NotificationId, Options, Phase};
use crate::config::{
    DEFAULT_NOTIFICATION_DURATION_MS, NOTIFICATION_EXIT_DELAY, NOTIFICATION_REVEAL_DELAY,
};
use crate::scheduler::Scheduler;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID (close button).
    Dismiss(NotificationId),
}

#[derive(Debug, Clone, Copy)]
enum Timer {
    Reveal(NotificationId),
    Expire(NotificationId),
    Remove(NotificationId),
}

/// A registered notification plus its display state.
#[derive(Debug, Clone)]
pub struct Entry {
    notification: Notification,
    phase: Phase,
    /// When the debut delay elapsed; the progress bar starts here.
    revealed_at: Option<Instant>,
}

impl Entry {
    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Remaining share of the progress bar in `0.0..=1.0`.
    ///
    /// `None` for persistent notifications, which draw no bar. The bar stays
    /// full until the notification is revealed and then shrinks linearly over
    /// the notification's duration.
    #[must_use]
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let duration = self.notification.duration();
        if duration.is_zero() {
            return None;
        }
        let Some(start) = self.revealed_at else {
            return Some(1.0);
        };
        let elapsed = now.saturating_duration_since(start).as_secs_f32();
        Some((1.0 - elapsed / duration.as_secs_f32()).clamp(0.0, 1.0))
    }
}

/// Registry of live notifications, oldest first.
#[derive(Debug)]
pub struct Manager {
    entries: Vec<Entry>,
    timers: Scheduler<Timer>,
    default_duration: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            timers: Scheduler::new(),
            default_duration: Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS),
        }
    }
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers and renders a notification, returning its ID.
    ///
    /// `duration` defaults to five seconds; `Some(Duration::ZERO)` keeps the
    /// notification until it is dismissed.
    pub fn show(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        kind: Kind,
        duration: Option<Duration>,
        options: Options,
    ) -> NotificationId {
        let duration = duration.unwrap_or(self.default_duration);
        let notification = Notification::new(kind, message, duration).with_options(options);
        let id = notification.id();

        match kind {
            Kind::Error | Kind::Warning => {
                tracing::warn!(
                    %id,
                    kind = kind.name(),
                    message = notification.message(),
                    "notification"
                );
            }
            Kind::Success | Kind::Info | Kind::Primary => {
                tracing::debug!(
                    %id,
                    kind = kind.name(),
                    message = notification.message(),
                    "notification"
                );
            }
        }

        self.entries.push(Entry {
            notification,
            phase: Phase::Entering,
            revealed_at: None,
        });
        self.timers
            .schedule(now, NOTIFICATION_REVEAL_DELAY, Timer::Reveal(id));
        if !duration.is_zero() {
            self.timers.schedule(now, duration, Timer::Expire(id));
        }
        id
    }

    pub fn success(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        duration: Option<Duration>,
        options: Options,
    ) -> NotificationId {
        self.show(now, message, Kind::Success, duration, options)
    }

    pub fn error(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        duration: Option<Duration>,
        options: Options,
    ) -> NotificationId {
        self.show(now, message, Kind::Error, duration, options)
    }

    pub fn warning(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        duration: Option<Duration>,
        options: Options,
    ) -> NotificationId {
        self.show(now, message, Kind::Warning, duration, options)
    }

    pub fn info(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        duration: Option<Duration>,
        options: Options,
    ) -> NotificationId {
        self.show(now, message, Kind::Info, duration, options)
    }

    pub fn primary(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        duration: Option<Duration>,
        options: Options,
    ) -> NotificationId {
        self.show(now, message, Kind::Primary, duration, options)
    }

    /// Starts the exit animation of a notification.
    ///
    /// Unknown IDs and notifications already leaving are ignored, so a
    /// user click racing the auto-hide timer removes the entry only once.
    /// Returns `true` if an exit was started.
    pub fn hide(&mut self, now: Instant, id: NotificationId) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.notification.id() == id) else {
            return false;
        };
        if entry.phase == Phase::Leaving {
            return false;
        }
        entry.phase = Phase::Leaving;
        self.timers
            .schedule(now, NOTIFICATION_EXIT_DELAY, Timer::Remove(id));
        true
    }

    /// Starts the exit animation of every registered notification.
    pub fn hide_all(&mut self, now: Instant) {
        let ids: Vec<NotificationId> = self.entries.iter().map(|e| e.notification.id()).collect();
        for id in ids {
            self.hide(now, id);
        }
    }

    /// Fires every timer due at `now`, in deadline order.
    ///
    /// Follow-up timers are scheduled from the deadline of the timer that
    /// caused them, so a late tick still catches up completely.
    pub fn tick(&mut self, now: Instant) {
        while let Some((deadline, timer)) = self.timers.pop_due(now) {
            match timer {
                Timer::Reveal(id) => {
                    if let Some(entry) = self.entry_mut(id) {
                        if entry.phase == Phase::Entering {
                            entry.phase = Phase::Shown;
                            entry.revealed_at = Some(deadline);
                        }
                    }
                }
                Timer::Expire(id) => {
                    self.hide(deadline, id);
                }
                Timer::Remove(id) => {
                    self.entries.retain(|e| e.notification.id() != id);
                }
            }
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, now: Instant, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.hide(now, *id);
            }
        }
    }

    fn entry_mut(&mut self, id: NotificationId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.notification.id() == id)
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.notification.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    /// Registered notifications, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether anything still needs ticking.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.entries.is_empty()
    }
}
