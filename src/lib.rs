// SPDX-License-Identifier: MPL-2.0
//! `scale_panel` is an in-game overlay for adjusting a character model scale.
//!
//! The host game client drives the panel through JSON commands on stdin and
//! receives the chosen scale back over HTTP. The panel logic lives in the
//! headless [`panel::PanelController`]; [`app`] wires it to an iced window.

pub mod app;
pub mod bridge;
pub mod config;
pub mod error;
pub mod i18n;
pub mod notifications;
pub mod panel;
pub mod scheduler;
pub mod ui;
