// SPDX-License-Identifier: MPL-2.0
//! User interface for the overlay panel.
//!
//! - [`panel`] - Panel view (header, readout, slider, presets, actions)
//! - [`styles`] - Widget styles (buttons, containers, slider, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//!
//! Toasts live with the notification system in [`crate::notifications`].

pub mod design_tokens;
pub mod panel;
pub mod styles;
