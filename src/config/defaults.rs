// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the panel. Constants are organized by category.

use std::time::Duration;

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Smallest scale the panel allows when the host does not say otherwise.
pub const DEFAULT_MIN_SCALE: f64 = 0.1;

/// Largest scale the panel allows when the host does not say otherwise.
pub const DEFAULT_MAX_SCALE: f64 = 3.0;

/// Scale used on show and reset.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Slider granularity and keyboard increment.
pub const DEFAULT_SCALE_STEP: f64 = 0.1;

/// A preset is highlighted when the current scale is closer than this.
pub const PRESET_TOLERANCE: f64 = 0.05;

// ==========================================================================
// Notification Timing
// ==========================================================================

/// Lifetime of a notification when the caller gives none.
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5000;

/// Delay between inserting a toast and marking it visible (entry animation).
pub const NOTIFICATION_REVEAL_DELAY: Duration = Duration::from_millis(10);

/// Delay between starting the exit animation and removing the toast.
pub const NOTIFICATION_EXIT_DELAY: Duration = Duration::from_millis(300);

/// Tick interval used while notifications are alive.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

// ==========================================================================
// Layout Breakpoints
// ==========================================================================

/// Widths up to and including this value use the mobile layout.
pub const MOBILE_MAX_WIDTH: f32 = 768.0;

/// Widths up to and including this value (above mobile) use the tablet layout.
pub const TABLET_MAX_WIDTH: f32 = 1024.0;

// ==========================================================================
// Host Defaults
// ==========================================================================

/// Resource name used to build the default callback URL.
pub const DEFAULT_RESOURCE_NAME: &str = "dz1_pedScale";

/// Outbound request timeout.
pub const DEFAULT_HOST_TIMEOUT_MS: u64 = 5000;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scale_sits_inside_bounds() {
        assert!(DEFAULT_MIN_SCALE <= DEFAULT_SCALE);
        assert!(DEFAULT_SCALE <= DEFAULT_MAX_SCALE);
        assert!(DEFAULT_SCALE_STEP > 0.0);
    }

    #[test]
    fn breakpoints_are_ordered() {
        assert!(MOBILE_MAX_WIDTH < TABLET_MAX_WIDTH);
    }
}
