// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Nothing in the panel is fatal: errors surface either as a notification
//! (failed host requests) or as a log line (unreadable settings, malformed
//! inbound lines).

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    /// The host could not be reached or answered with a failure status.
    #[error("Transport Error: {0}")]
    Transport(String),
    /// An inbound line could not be decoded into a host command.
    #[error("Protocol Error: {0}")]
    Protocol(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Protocol(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
