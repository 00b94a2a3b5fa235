// SPDX-License-Identifier: MPL-2.0
//! Built-in panel strings.
//!
//! Labels and notification texts ship as Fluent resources embedded in the
//! binary. Brazilian Portuguese is the reference locale; a host-supplied
//! `lang` table overrides panel labels on top of whatever is resolved here.
//!
//! # Features
//!
//! - Locale detection from CLI, settings, or system settings
//! - Messages with named arguments
//! - Fallback to the default locale when a message is missing

pub mod fluent;

pub use fluent::I18n;
