// SPDX-License-Identifier: MPL-2.0
//! Scale state: the authoritative current scale and the rules around it.
//!
//! The controller clamps every mutation into the configured bounds. Clamping
//! follows `max(min, min(max, raw))`, so an inverted range never panics and
//! simply pins the value to `min`.

use crate::config::PRESET_TOLERANCE;

/// Inclusive scale range as configured by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamps `raw` into the range. In-range values come back unchanged.
    #[must_use]
    pub fn clamp(self, raw: f64) -> f64 {
        raw.min(self.max).max(self.min)
    }
}

/// Result of a clamped assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamped {
    pub value: f64,
    /// Whether the requested value had to be moved into range.
    pub was_clamped: bool,
}

/// Keyboard step direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
        }
    }
}

/// Cosmetic size category used by the apply button label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Exactly 1.0.
    Normal,
    /// Below 1.0.
    Small,
    /// Above 1.0 up to and including 2.0.
    Large,
    /// Above 2.0.
    Maximum,
}

impl Tier {
    #[must_use]
    pub fn from_scale(value: f64) -> Self {
        if value == 1.0 {
            Tier::Normal
        } else if value < 1.0 {
            Tier::Small
        } else if value <= 2.0 {
            Tier::Large
        } else {
            Tier::Maximum
        }
    }

    /// Fluent key of the tier name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Tier::Normal => "tier-normal",
            Tier::Small => "tier-small",
            Tier::Large => "tier-large",
            Tier::Maximum => "tier-max",
        }
    }
}

/// One-click scale shortcut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub scale: f64,
    /// Fluent key of the preset name.
    pub name_key: &'static str,
    /// Key of the host `lang` entry that relabels the button, if any.
    pub lang_key: Option<&'static str>,
}

pub const PRESETS: [Preset; 4] = [
    Preset {
        scale: 0.5,
        name_key: "preset-small",
        lang_key: Some("small"),
    },
    Preset {
        scale: 1.0,
        name_key: "preset-normal",
        lang_key: Some("normal"),
    },
    Preset {
        scale: 2.0,
        name_key: "preset-large",
        lang_key: Some("large"),
    },
    Preset {
        scale: 3.0,
        name_key: "preset-max",
        lang_key: None,
    },
];

impl Preset {
    /// Whether `current` is close enough to highlight this preset.
    #[must_use]
    pub fn is_active(&self, current: f64) -> bool {
        (self.scale - current).abs() < PRESET_TOLERANCE
    }
}

/// Removes float drift left by repeated stepping (0.9 + 0.1 -> 1.0).
#[must_use]
pub fn normalize(value: f64) -> f64 {
    (value * 1e9).round() / 1e9
}

/// Formats a scale the way the readout and labels show it.
///
/// Exact ties round up (2.25 -> "2.3"). Only quarter values can be exact
/// ties; everything else is already rounded correctly by `{:.1}`.
#[must_use]
pub fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.is_finite() && quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let tenths = (value * 10.0 + 0.5).floor();
        return format!("{:.1}", tenths / 10.0);
    }
    format!("{value:.1}")
}

/// Owner of the current scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleController {
    current: f64,
}

impl ScaleController {
    #[must_use]
    pub fn new(initial: f64) -> Self {
        Self { current: initial }
    }

    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Sets the scale, clamped into `bounds`.
    pub fn set_scale(&mut self, raw: f64, bounds: Bounds) -> Clamped {
        let value = bounds.clamp(raw);
        self.current = value;
        Clamped {
            value,
            was_clamped: value != raw,
        }
    }

    /// Moves the scale by one `step` in `direction`, then clamps.
    pub fn step(&mut self, direction: Direction, step: f64, bounds: Bounds) -> f64 {
        let raw = normalize(self.current + step * direction.sign());
        self.set_scale(raw, bounds).value
    }

    /// Returns to the configured default.
    pub fn reset(&mut self, default_scale: f64, bounds: Bounds) -> f64 {
        self.set_scale(default_scale, bounds).value
    }

    /// Re-clamps the current value after the bounds changed.
    pub fn reclamp(&mut self, bounds: Bounds) {
        self.current = bounds.clamp(self.current);
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        Tier::from_scale(self.current)
    }

    /// The preset highlighted for the current value, if any.
    #[must_use]
    pub fn active_preset(&self) -> Option<Preset> {
        PRESETS.into_iter().find(|p| p.is_active(self.current))
    }

    /// Numeric readout with one decimal place.
    #[must_use]
    pub fn readout(&self) -> String {
        one_decimal(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds { min: 0.1, max: 3.0 };

    #[test]
    fn set_scale_keeps_in_range_values_exactly() {
        let mut controller = ScaleController::new(1.0);
        for raw in [0.1, 0.37, 1.0, 2.999, 3.0] {
            let result = controller.set_scale(raw, BOUNDS);
            assert_eq!(result.value, raw);
            assert!(!result.was_clamped);
        }
    }

    #[test]
    fn set_scale_clamps_and_reports_it() {
        let mut controller = ScaleController::new(1.0);

        let high = controller.set_scale(3.5, BOUNDS);
        assert_eq!(high, Clamped { value: 3.0, was_clamped: true });

        let low = controller.set_scale(-4.0, BOUNDS);
        assert_eq!(low, Clamped { value: 0.1, was_clamped: true });
        assert_eq!(controller.current(), 0.1);
    }

    #[test]
    fn results_always_lie_in_bounds() {
        let mut controller = ScaleController::new(1.0);
        let mut raw = -10.0;
        while raw < 10.0 {
            let value = controller.set_scale(raw, BOUNDS).value;
            assert!((BOUNDS.min..=BOUNDS.max).contains(&value));
            raw += 0.173;
        }
    }

    #[test]
    fn inverted_bounds_pin_to_min_without_panicking() {
        let bounds = Bounds::new(2.0, 1.0);
        assert_eq!(bounds.clamp(1.5), 2.0);
        assert_eq!(bounds.clamp(0.0), 2.0);
    }

    #[test]
    fn step_lands_exactly_on_grid() {
        let mut controller = ScaleController::new(0.9);
        assert_eq!(controller.step(Direction::Up, 0.1, BOUNDS), 1.0);
        assert_eq!(controller.tier(), Tier::Normal);
        assert_eq!(controller.step(Direction::Down, 0.1, BOUNDS), 0.9);
    }

    #[test]
    fn step_stops_at_bounds() {
        let mut controller = ScaleController::new(2.95);
        assert_eq!(controller.step(Direction::Up, 0.1, BOUNDS), 3.0);
        assert_eq!(controller.step(Direction::Up, 0.1, BOUNDS), 3.0);

        let mut controller = ScaleController::new(0.15);
        assert_eq!(controller.step(Direction::Down, 0.1, BOUNDS), 0.1);
    }

    #[test]
    fn reset_returns_default() {
        let mut controller = ScaleController::new(2.4);
        assert_eq!(controller.reset(1.0, BOUNDS), 1.0);
        assert_eq!(controller.current(), 1.0);
    }

    #[test]
    fn preset_activation_uses_tolerance_band() {
        let normal = PRESETS[1];
        assert!(normal.is_active(1.03));
        assert!(!normal.is_active(1.06));

        let controller = ScaleController::new(1.03);
        assert_eq!(controller.active_preset(), Some(normal));
        assert_eq!(ScaleController::new(1.5).active_preset(), None);
    }

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(Tier::from_scale(1.0), Tier::Normal);
        assert_eq!(Tier::from_scale(0.7), Tier::Small);
        assert_eq!(Tier::from_scale(1.5), Tier::Large);
        assert_eq!(Tier::from_scale(2.0), Tier::Large);
        assert_eq!(Tier::from_scale(2.5), Tier::Maximum);
    }

    #[test]
    fn readout_uses_one_decimal() {
        assert_eq!(ScaleController::new(1.0).readout(), "1.0");
        assert_eq!(ScaleController::new(2.25).readout(), "2.3");
        assert_eq!(ScaleController::new(0.35).readout(), "0.3");
    }

    #[test]
    fn exact_ties_round_up() {
        assert_eq!(one_decimal(0.25), "0.3");
        assert_eq!(one_decimal(0.75), "0.8");
        assert_eq!(one_decimal(2.5), "2.5");
        assert_eq!(one_decimal(0.15), "0.1");
        assert_eq!(one_decimal(0.125), "0.1");
    }
}
