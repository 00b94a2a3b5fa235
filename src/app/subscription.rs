// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts and window resizes come from native events, timer
//! ticks run only while notifications are alive, and host commands stream
//! in from stdin for the whole life of the app.

use super::Message;
use crate::bridge::subscription::stdin_commands;
use crate::config::TICK_INTERVAL;
use crate::panel::PanelKey;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};

/// Routes panel shortcuts and window resizes.
///
/// Keys already captured by a widget are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = &event {
            return Some(Message::Resized(size.width));
        }

        if status == event::Status::Captured {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                panel_key(&key).map(Message::Key)
            }
            _ => None,
        }
    })
}

fn panel_key(key: &Key) -> Option<PanelKey> {
    match key {
        Key::Named(Named::Escape) => Some(PanelKey::Escape),
        Key::Named(Named::Enter) => Some(PanelKey::Enter),
        Key::Named(Named::ArrowUp) => Some(PanelKey::ArrowUp),
        Key::Named(Named::ArrowDown) => Some(PanelKey::ArrowDown),
        _ => None,
    }
}

/// Creates a periodic tick subscription while notifications need timing.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the host command subscription reading stdin.
pub fn create_host_subscription() -> Subscription<Message> {
    Subscription::run(stdin_commands).map(Message::Host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_panel_keys_are_mapped() {
        assert_eq!(panel_key(&Key::Named(Named::Escape)), Some(PanelKey::Escape));
        assert_eq!(panel_key(&Key::Named(Named::ArrowDown)), Some(PanelKey::ArrowDown));
        assert_eq!(panel_key(&Key::Named(Named::Tab)), None);
        assert_eq!(panel_key(&Key::Character("a".into())), None);
    }
}
