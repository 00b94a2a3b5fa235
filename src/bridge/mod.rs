// SPDX-License-Identifier: MPL-2.0
//! Host bridge: the two-way channel between the panel and the game client.
//!
//! Inbound commands arrive as JSON lines on stdin ([`subscription`]) and are
//! decoded by [`inbound`]; outbound requests go over HTTP ([`outbound`]).

pub mod inbound;
pub mod outbound;
pub mod subscription;

pub use inbound::HostCommand;
pub use outbound::{HostClient, HostRequest};
