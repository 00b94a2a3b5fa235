// SPDX-License-Identifier: MPL-2.0
//! Tooltip styling.
//!
//! Tooltips carry the host-supplied hint texts, so they must stay readable
//! on top of the translucent panel in either theme.

use crate::ui::design_tokens::{border, palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Inverted surface: light tooltip on a dark theme and vice versa.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let bg = theme.extended_palette().background.base.color;
    let is_dark = (bg.r + bg.g + bg.b) / 3.0 < 0.5;

    let (bg_color, text_color) = if is_dark {
        (palette::GRAY_200, palette::GRAY_900)
    } else {
        (palette::GRAY_800, palette::WHITE)
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color {
                a: 0.3,
                ..palette::GRAY_400
            },
        },
        shadow: shadow::MD,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip; an empty tip yields the content unchanged.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: &str,
    position: tooltip::Position,
) -> Element<'a, Message> {
    if tip.is_empty() {
        return content.into();
    }
    let tip_container = Container::new(Text::new(tip.to_string()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position)
        .gap(spacing::XS)
        .into()
}
