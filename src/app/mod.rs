// SPDX-License-Identifier: MPL-2.0
//! Application root state and the iced event loop.
//!
//! The `App` struct owns the headless [`PanelController`] and the HTTP client
//! used to answer the host, and translates iced messages into controller
//! operations and outbound requests.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::bridge::HostClient;
use crate::config::{self, Settings};
use crate::i18n::I18n;
use crate::panel::PanelController;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root iced application state.
pub struct App {
    panel: PanelController,
    host: Option<HostClient>,
    /// Time of the last update, used to draw toast progress.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("visible", &self.panel.is_visible())
            .field("scale", &self.panel.scale())
            .field("host", &self.host.is_some())
            .finish()
    }
}

/// Everything the boot function consumes.
struct Boot {
    flags: Flags,
    settings: Settings,
    warning: Option<String>,
}

/// Builds the window settings for the overlay.
pub fn window_settings(settings: &Settings) -> window::Settings {
    window::Settings {
        size: iced::Size::new(settings.window.width, settings.window.height),
        transparent: true,
        decorations: false,
        level: window::Level::AlwaysOnTop,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    config::paths::init_cli_override(flags.config_dir.clone());
    let (mut settings, warning) = config::load();
    if let Some(url) = &flags.host_url {
        settings.host.base_url = Some(url.clone());
    }
    let window = window_settings(&settings);

    // iced 0.14 requires the boot function to be Fn; the state is taken once.
    let boot_state = RefCell::new(Some(Boot {
        flags,
        settings,
        warning,
    }));
    let boot = move || {
        let boot = boot_state.borrow_mut().take().unwrap_or_else(|| Boot {
            flags: Flags::default(),
            settings: Settings::default(),
            warning: None,
        });
        App::new(boot)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(boot: Boot) -> (Self, Task<Message>) {
        let Boot {
            flags,
            settings,
            warning,
        } = boot;
        let app = Self::with_settings(flags.lang, &settings, warning.as_deref());
        (app, Task::none())
    }

    /// Builds the app state without starting iced.
    fn with_settings(lang: Option<String>, settings: &Settings, warning: Option<&str>) -> Self {
        let i18n = I18n::new(lang, settings);
        let now = Instant::now();
        let mut panel = PanelController::new(settings, i18n);

        if let Some(key) = warning {
            panel.warn(now, key);
        }

        let host = match HostClient::new(&settings.host) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::warn!(%err, "cannot build host client; requests will fail");
                None
            }
        };
        tracing::info!(host = %settings.host.endpoint_base(), "scale panel ready");

        Self { panel, host, now }
    }

    fn title(&self) -> String {
        self.panel.i18n().tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.panel.needs_tick()),
            subscription::create_host_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();
        let mut ctx = update::UpdateContext {
            panel: &mut self.panel,
            host: self.host.as_ref(),
            now: self.now,
        };
        update::handle(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            panel: &self.panel,
            now: self.now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{HostCommand, HostRequest};
    use crate::error::Error;

    fn app() -> App {
        App::with_settings(Some("pt-BR".to_string()), &Settings::default(), None)
    }

    fn show(app: &mut App) {
        let _ = app.update(Message::Host(HostCommand::ShowUi {
            config: None,
            scale: Some(1.0),
        }));
    }

    #[test]
    fn host_show_command_opens_panel() {
        let mut app = app();
        show(&mut app);
        assert!(app.panel.is_visible());
    }

    #[test]
    fn failed_apply_response_keeps_panel_open() {
        let mut app = app();
        show(&mut app);
        let _ = app.update(Message::Apply);
        let _ = app.update(Message::HostResponded {
            request: HostRequest::ApplyScale { scale: 1.0 },
            result: Err(Error::Transport("refused".to_string())),
        });
        assert!(app.panel.is_visible());
    }

    #[test]
    fn successful_apply_response_closes_panel() {
        let mut app = app();
        show(&mut app);
        let _ = app.update(Message::Apply);
        let _ = app.update(Message::HostResponded {
            request: HostRequest::ApplyScale { scale: 1.0 },
            result: Ok(()),
        });
        assert!(!app.panel.is_visible());
    }

    #[test]
    fn close_response_errors_are_swallowed() {
        let mut app = app();
        let _ = app.update(Message::HostResponded {
            request: HostRequest::CloseUi,
            result: Err(Error::Transport("refused".to_string())),
        });
        assert!(app.panel.notifications().is_empty());
    }

    #[test]
    fn config_warning_becomes_notification() {
        let app = App::with_settings(
            Some("pt-BR".to_string()),
            &Settings::default(),
            Some("notification-config-load-error"),
        );
        assert_eq!(app.panel.notifications().len(), 1);
    }

    #[test]
    fn title_comes_from_translations() {
        assert_eq!(app().title(), "Escala do Personagem");
    }
}
