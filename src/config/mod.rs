// SPDX-License-Identifier: MPL-2.0
//! Persisted panel settings stored in a `settings.toml` file.
//!
//! These are the settings owned by the panel process itself (language, where
//! the host listens, window size). The scale bounds and feature toggles are
//! not persisted: the host pushes them at runtime, see [`crate::panel::config`].
//!
//! # Configuration Sections
//!
//! - `[general]` - Language override
//! - `[host]` - Resource name, callback base URL and request timeout
//! - `[window]` - Initial window size
//!
//! # Examples
//!
//! ```no_run
//! use scale_panel::config;
//!
//! // Load existing settings (returns tuple with optional warning key)
//! let (settings, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings unreadable ({key}), using defaults");
//! }
//! println!("host: {}", settings.host.endpoint_base());
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// General panel settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "pt-BR", "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Where outbound requests go.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostConfig {
    /// Resource name used to derive the default base URL.
    #[serde(default = "default_resource")]
    pub resource: String,

    /// Explicit callback base URL; takes precedence over `resource`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Outbound request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            resource: default_resource(),
            base_url: None,
            timeout_ms: DEFAULT_HOST_TIMEOUT_MS,
        }
    }
}

impl HostConfig {
    /// Returns the base URL endpoints are appended to, without a trailing slash.
    #[must_use]
    pub fn endpoint_base(&self) -> String {
        match &self.base_url {
            Some(url) if !url.trim().is_empty() => url.trim_end_matches('/').to_string(),
            _ => format!("https://{}", self.resource),
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.max(1))
    }
}

/// Initial window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: f32,
    #[serde(default = "default_window_height")]
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Panel settings with logical sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub host: HostConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

fn default_resource() -> String {
    DEFAULT_RESOURCE_NAME.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_HOST_TIMEOUT_MS
}

fn default_window_width() -> f32 {
    DEFAULT_WINDOW_WIDTH
}

fn default_window_height() -> f32 {
    DEFAULT_WINDOW_HEIGHT
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the settings from the default path.
///
/// Returns a tuple of (settings, optional_warning). If loading fails, returns
/// default settings with the i18n key of a warning to show the user.
pub fn load() -> (Settings, Option<String>) {
    load_with_override(None)
}

/// Loads the settings from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Settings, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(settings) => return (settings, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default settings");
                    return (
                        Settings::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Settings::default(), None)
}

/// Loads settings from a specific path.
pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn written_settings_load_back_unchanged() {
        let settings = Settings {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
            },
            host: HostConfig {
                resource: "my_resource".to_string(),
                base_url: Some("http://127.0.0.1:30120/my_resource".to_string()),
                timeout_ms: 1500,
            },
            window: WindowConfig {
                width: 800.0,
                height: 600.0,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        let content = toml::to_string_pretty(&settings).expect("failed to serialize settings");
        fs::write(&path, content).expect("failed to write settings");

        let loaded = load_from_path(&path).expect("failed to load settings");

        assert_eq!(loaded, settings);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (settings, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(settings, Settings::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[host\nresource = ")
            .expect("failed to write corrupted file");

        let (settings, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(settings, Settings::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[host]\ntimeout_ms = 250\n").expect("failed to write file");

        let settings = load_from_path(&path).expect("failed to load settings");
        assert_eq!(settings.host.timeout_ms, 250);
        assert_eq!(settings.host.resource, DEFAULT_RESOURCE_NAME);
        assert_eq!(settings.window, WindowConfig::default());
    }

    #[test]
    fn endpoint_base_defaults_to_resource_url() {
        let host = HostConfig::default();
        assert_eq!(host.endpoint_base(), "https://dz1_pedScale");
    }

    #[test]
    fn endpoint_base_prefers_explicit_url_without_trailing_slash() {
        let host = HostConfig {
            base_url: Some("http://localhost:8080/cb/".to_string()),
            ..HostConfig::default()
        };
        assert_eq!(host.endpoint_base(), "http://localhost:8080/cb");
    }
}
