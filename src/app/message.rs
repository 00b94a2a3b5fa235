// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::bridge::{HostCommand, HostRequest};
use crate::error::Error;
use crate::notifications::NotificationMessage;
use crate::panel::scale::Preset;
use crate::panel::PanelKey;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic tick driving notification timers.
    Tick(Instant),
    /// A command decoded from the host input stream.
    Host(HostCommand),
    /// An outbound request completed.
    HostResponded {
        request: HostRequest,
        result: Result<(), Error>,
    },
    SliderChanged(f64),
    PresetSelected(Preset),
    Reset,
    Apply,
    Close,
    Key(PanelKey),
    /// The window was resized to this logical width.
    Resized(f32),
    Notification(NotificationMessage),
}

/// Runtime flags passed from the launcher to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SCALE_PANEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional host callback base URL, overriding `[host]` settings.
    pub host_url: Option<String>,
}
