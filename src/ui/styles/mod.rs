// SPDX-License-Identifier: MPL-2.0
//! Styles for the panel widgets.

pub mod button;
pub mod container;
pub mod slider;
pub mod tooltip;
