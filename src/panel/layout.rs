// SPDX-License-Identifier: MPL-2.0
//! Responsive layout classes derived from the viewport width.

use crate::config::{MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};
use crate::ui::design_tokens::sizing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutClass {
    /// Up to 768 px.
    Mobile,
    /// 769 to 1024 px.
    Tablet,
    #[default]
    Desktop,
}

impl LayoutClass {
    #[must_use]
    pub fn from_width(width: f32) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            LayoutClass::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            LayoutClass::Tablet
        } else {
            LayoutClass::Desktop
        }
    }

    #[must_use]
    pub fn panel_width(self) -> f32 {
        match self {
            LayoutClass::Mobile => sizing::PANEL_WIDTH_MOBILE,
            LayoutClass::Tablet => sizing::PANEL_WIDTH_TABLET,
            LayoutClass::Desktop => sizing::PANEL_WIDTH_DESKTOP,
        }
    }

    /// Preset buttons per row; the mobile layout wraps them in two rows.
    #[must_use]
    pub fn presets_per_row(self) -> usize {
        match self {
            LayoutClass::Mobile => 2,
            LayoutClass::Tablet | LayoutClass::Desktop => 4,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            LayoutClass::Mobile => "mobile",
            LayoutClass::Tablet => "tablet",
            LayoutClass::Desktop => "desktop",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_inclusive_upper_bounds() {
        assert_eq!(LayoutClass::from_width(320.0), LayoutClass::Mobile);
        assert_eq!(LayoutClass::from_width(768.0), LayoutClass::Mobile);
        assert_eq!(LayoutClass::from_width(769.0), LayoutClass::Tablet);
        assert_eq!(LayoutClass::from_width(1024.0), LayoutClass::Tablet);
        assert_eq!(LayoutClass::from_width(1025.0), LayoutClass::Desktop);
        assert_eq!(LayoutClass::from_width(2560.0), LayoutClass::Desktop);
    }

    #[test]
    fn panel_widens_with_layout() {
        assert!(LayoutClass::Mobile.panel_width() < LayoutClass::Tablet.panel_width());
        assert!(LayoutClass::Tablet.panel_width() < LayoutClass::Desktop.panel_width());
    }

    #[test]
    fn mobile_wraps_presets() {
        assert_eq!(LayoutClass::Mobile.presets_per_row(), 2);
        assert_eq!(LayoutClass::Desktop.presets_per_row(), 4);
    }
}
