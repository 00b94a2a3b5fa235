// SPDX-License-Identifier: MPL-2.0
//! Slider style for the scale control.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

const RAIL_WIDTH: f32 = 6.0;
const HANDLE_RADIUS: f32 = 9.0;

/// Brand-colored rail up to the handle, neutral after it.
pub fn scale(_theme: &Theme, status: slider::Status) -> slider::Style {
    let handle = match status {
        slider::Status::Hovered | slider::Status::Dragged => palette::PRIMARY_400,
        slider::Status::Active => palette::WHITE,
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(palette::PRIMARY_500),
                Background::Color(palette::GRAY_700),
            ),
            width: RAIL_WIDTH,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::SM.into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle {
                radius: HANDLE_RADIUS,
            },
            background: Background::Color(handle),
            border_width: 2.0,
            border_color: palette::PRIMARY_500,
        },
    }
}
