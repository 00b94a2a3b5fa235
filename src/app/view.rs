// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The panel is drawn only while visible; toasts are layered on top and stay
//! visible after the panel hides.

use super::Message;
use crate::notifications::Toast;
use crate::panel::PanelController;
use crate::ui::panel;
use iced::widget::{text, Container, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub panel: &'a PanelController,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base: Element<'_, Message> = if ctx.panel.is_visible() {
        panel::view(ctx.panel)
    } else {
        Container::new(text(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    };

    let toasts = Toast::view_overlay(
        ctx.panel.notifications(),
        ctx.now,
        ctx.panel.config().enable_animations,
    )
    .map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(toasts)
        .into()
}
