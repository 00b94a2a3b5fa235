// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a kind-colored accent, an optional close
//! button and, for timed notifications, a progress bar that empties over
//! the notification's lifetime.

use super::manager::{Entry, Manager, Message};
use super::notification::Phase;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    ///
    /// With animations enabled, toasts that are entering or leaving are drawn
    /// faded; otherwise every phase is drawn fully opaque.
    pub fn view<'a>(entry: &'a Entry, now: Instant, animations: bool) -> Element<'a, Message> {
        let notification = entry.notification();
        let accent = notification.kind().color();
        let alpha = phase_alpha(entry.phase(), animations);

        let icon = Text::new(notification.icon())
            .size(sizing::ICON_MD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color { a: alpha, ..accent }),
            });

        let message = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..theme.palette().text
                }),
            });

        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon).padding(spacing::XXS))
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if notification.closable() {
            let close = button(Text::new("×").size(typography::BODY))
                .on_press(Message::Dismiss(notification.id()))
                .padding(spacing::XXS)
                .style(dismiss_button_style);
            row = row.push(close);
        }

        let mut content = Column::new().spacing(spacing::XS).push(row);
        if let Some(progress) = entry.progress(now) {
            content = content.push(progress_bar(progress, accent, alpha));
        }

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
            .into()
    }

    /// Renders every registered notification, stacked in the top-right corner.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        now: Instant,
        animations: bool,
    ) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .entries()
            .map(|entry| Self::view(entry, now, animations))
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::MD)
        .into()
    }
}

/// Opacity of a toast in `phase`.
fn phase_alpha(phase: Phase, animations: bool) -> f32 {
    if !animations {
        return opacity::OPAQUE;
    }
    match phase {
        Phase::Shown => opacity::OPAQUE,
        Phase::Entering | Phase::Leaving => opacity::OVERLAY_MEDIUM,
    }
}

fn progress_bar<'a>(progress: f32, accent: Color, alpha: f32) -> Element<'a, Message> {
    let track = sizing::TOAST_WIDTH - 2.0 * spacing::SM;
    Container::new(Row::new())
        .width(Length::Fixed(track * progress.clamp(0.0, 1.0)))
        .height(Length::Fixed(sizing::TOAST_PROGRESS_HEIGHT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color { a: alpha, ..accent })),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: bg_color.a * alpha,
            ..bg_color
        })),
        border: iced::Border {
            color: Color { a: alpha, ..accent },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the close button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover = |a: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent, opacity::OPAQUE);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn transitional_phases_fade_only_with_animations() {
        assert_eq!(phase_alpha(Phase::Shown, true), opacity::OPAQUE);
        assert!(phase_alpha(Phase::Entering, true) < opacity::OPAQUE);
        assert!(phase_alpha(Phase::Leaving, true) < opacity::OPAQUE);
        assert_eq!(phase_alpha(Phase::Leaving, false), opacity::OPAQUE);
    }

    #[test]
    fn hovered_close_button_gets_background() {
        let theme = Theme::Dark;
        assert!(dismiss_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }
}
