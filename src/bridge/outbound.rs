// SPDX-License-Identifier: MPL-2.0
//! Requests sent back to the host.
//!
//! Both endpoints take a JSON `POST`. The panel never retries: a failed
//! `applyScale` is reported to the user, a failed `closeUI` is only logged.

use crate::config::HostConfig;
use crate::error::{Error, Result};
use serde_json::{json, Value};

/// An outbound request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostRequest {
    ApplyScale { scale: f64 },
    CloseUi,
}

impl HostRequest {
    /// Path segment appended to the host base URL.
    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        match self {
            HostRequest::ApplyScale { .. } => "applyScale",
            HostRequest::CloseUi => "closeUI",
        }
    }

    /// JSON body of the request.
    #[must_use]
    pub fn body(&self) -> Value {
        match self {
            HostRequest::ApplyScale { scale } => json!({ "scale": scale }),
            HostRequest::CloseUi => json!({}),
        }
    }
}

/// HTTP client bound to one host base URL.
#[derive(Debug, Clone)]
pub struct HostClient {
    client: reqwest::Client,
    base: String,
}

impl HostClient {
    pub fn new(config: &HostConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("ScalePanel/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base: config.endpoint_base(),
        })
    }

    #[must_use]
    pub fn url(&self, request: &HostRequest) -> String {
        format!("{}/{}", self.base, request.endpoint())
    }

    /// Sends `request`; non-success statuses count as transport failures.
    pub async fn send(&self, request: HostRequest) -> Result<()> {
        let url = self.url(&request);
        tracing::debug!(%url, body = %request.body(), "sending host request");

        let response = self.client.post(&url).json(&request.body()).send().await?;

        if !response.status().is_success() {
            return Err(Error::Transport(format!(
                "{} answered HTTP status: {}",
                request.endpoint(),
                response.status()
            )));
        }
        Ok(())
    }
}
