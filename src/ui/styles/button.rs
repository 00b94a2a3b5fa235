// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Apply button. A value outside the Normal tier gets a warmer accent so the
/// label detail stands out.
pub fn apply(has_info: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (base, hover) = if has_info {
            (palette::PRIMARY_700, palette::PRIMARY_500)
        } else {
            (palette::PRIMARY_500, palette::PRIMARY_400)
        };
        let background = match status {
            button::Status::Hovered => hover,
            button::Status::Disabled => palette::GRAY_700,
            button::Status::Active | button::Status::Pressed => base,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: if has_info {
                    palette::WARNING_500
                } else {
                    palette::PRIMARY_700
                },
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: if status == button::Status::Hovered {
                shadow::MD
            } else {
                shadow::NONE
            },
            snap: true,
        }
    }
}

/// Secondary action (reset).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().text;
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_MEDIUM,
        button::Status::Pressed => opacity::OVERLAY_STRONG,
        button::Status::Active | button::Status::Disabled => opacity::OVERLAY_SUBTLE,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color: text,
        border: Border {
            color: palette::GRAY_700,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Preset button; the active preset is filled with the brand color.
pub fn preset(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text = theme.palette().text;
        let (background, text_color, border_color) = if active {
            (palette::PRIMARY_500, WHITE, palette::PRIMARY_400)
        } else {
            let alpha = match status {
                button::Status::Hovered => opacity::OVERLAY_MEDIUM,
                button::Status::Pressed => opacity::OVERLAY_STRONG,
                button::Status::Active | button::Status::Disabled => opacity::TRANSPARENT,
            };
            (
                Color {
                    a: alpha,
                    ..palette::GRAY_700
                },
                text,
                palette::GRAY_700,
            )
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Header close button: transparent until hovered.
pub fn close(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().text;
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::ERROR_500
        })),
        button::Status::Pressed => Some(Background::Color(palette::ERROR_500)),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
