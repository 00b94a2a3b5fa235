// SPDX-License-Identifier: MPL-2.0
//! Commands pushed by the host, one JSON object per message.
//!
//! The envelope is `{action, config?, scale?, message?, type?, duration?}`.
//! Unknown actions decode to `None` and are ignored by the caller.

use crate::error::{Error, Result};
use crate::notifications::Kind;
use crate::panel::config::PartialConfig;
use serde_json::Value;
use std::time::Duration;

/// A decoded inbound command.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    /// Show the panel, optionally with a new configuration and start scale.
    ShowUi {
        config: Option<PartialConfig>,
        scale: Option<f64>,
    },
    HideUi,
    /// Replace the current scale; `None` selects the default scale.
    UpdateScale { scale: Option<f64> },
    UpdateConfig { config: Option<PartialConfig> },
    ShowNotification {
        message: Option<String>,
        kind: Kind,
        /// `None` selects the default notification duration.
        duration: Option<Duration>,
    },
}

impl HostCommand {
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            HostCommand::ShowUi { .. } => "showUI",
            HostCommand::HideUi => "hideUI",
            HostCommand::UpdateScale { .. } => "updateScale",
            HostCommand::UpdateConfig { .. } => "updateConfig",
            HostCommand::ShowNotification { .. } => "showNotification",
        }
    }
}

/// Decodes one line of input.
///
/// Returns `Ok(None)` for blank lines and unrecognized actions, and a
/// protocol error when the line is not a JSON object with a string `action`.
pub fn decode(line: &str) -> Result<Option<HostCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let value: Value = serde_json::from_str(line)?;
    decode_value(&value)
}

/// Decodes an already parsed envelope.
pub fn decode_value(value: &Value) -> Result<Option<HostCommand>> {
    let Some(envelope) = value.as_object() else {
        return Err(Error::Protocol("message is not a JSON object".to_string()));
    };
    let Some(action) = envelope.get("action").and_then(Value::as_str) else {
        return Err(Error::Protocol("message has no action".to_string()));
    };

    let command = match action {
        "showUI" => HostCommand::ShowUi {
            config: config_field(envelope.get("config")),
            scale: scale_field(envelope.get("scale")),
        },
        "hideUI" => HostCommand::HideUi,
        "updateScale" => HostCommand::UpdateScale {
            scale: scale_field(envelope.get("scale")),
        },
        "updateConfig" => HostCommand::UpdateConfig {
            config: config_field(envelope.get("config")),
        },
        "showNotification" => HostCommand::ShowNotification {
            message: envelope
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
            kind: envelope
                .get("type")
                .and_then(Value::as_str)
                .map(Kind::from_name)
                .unwrap_or_default(),
            duration: envelope
                .get("duration")
                .and_then(Value::as_f64)
                .filter(|ms| ms.is_finite() && *ms > 0.0)
                .map(positive_duration),
        },
        other => {
            tracing::debug!(action = other, "ignoring unknown host action");
            return Ok(None);
        }
    };
    Ok(Some(command))
}

/// Converts a positive millisecond count, keeping sub-millisecond values timed.
fn positive_duration(ms: f64) -> Duration {
    let nanos = (ms * 1_000_000.0).round() as u64;
    Duration::from_nanos(nanos.max(1))
}

/// A usable scale: numeric, finite and non-zero.
fn scale_field(value: Option<&Value>) -> Option<f64> {
    value
        .and_then(Value::as_f64)
        .filter(|scale| scale.is_finite() && *scale != 0.0)
}

fn config_field(value: Option<&Value>) -> Option<PartialConfig> {
    let value = value?;
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value.clone()) {
        Ok(config) => Some(config),
        Err(err) => {
            tracing::warn!(%err, "ignoring malformed host config");
            None
        }
    }
}
