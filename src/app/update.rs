// SPDX-License-Identifier: MPL-2.0
//! Update logic: turns messages into panel operations and host requests.

use super::Message;
use crate::bridge::{HostClient, HostRequest};
use crate::error::{Error, Result};
use crate::panel::PanelController;
use iced::Task;
use std::time::Instant;

/// Mutable state touched by an update.
pub struct UpdateContext<'a> {
    pub panel: &'a mut PanelController,
    pub host: Option<&'a HostClient>,
    pub now: Instant,
}

pub fn handle(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    let now = ctx.now;
    let request = match message {
        Message::Tick(instant) => {
            ctx.panel.tick(instant);
            None
        }
        Message::Host(command) => ctx.panel.handle_command(now, command),
        Message::HostResponded { request, result } => handle_response(ctx, request, result),
        Message::SliderChanged(raw) => {
            ctx.panel.slider_input(raw);
            None
        }
        Message::PresetSelected(preset) => {
            ctx.panel.select_preset(now, preset);
            None
        }
        Message::Reset => {
            ctx.panel.reset(now);
            None
        }
        Message::Apply => ctx.panel.apply(now),
        Message::Close => ctx.panel.close(),
        Message::Key(key) => ctx.panel.key(now, key),
        Message::Resized(width) => {
            ctx.panel.resize(width);
            None
        }
        Message::Notification(notification) => {
            ctx.panel.handle_notification(now, &notification);
            None
        }
    };

    match request {
        Some(request) => send(ctx.host, request),
        None => Task::none(),
    }
}

fn handle_response(
    ctx: &mut UpdateContext<'_>,
    request: HostRequest,
    result: Result<()>,
) -> Option<HostRequest> {
    match request {
        HostRequest::ApplyScale { scale } => ctx.panel.apply_finished(ctx.now, scale, &result),
        HostRequest::CloseUi => {
            if let Err(err) = result {
                tracing::debug!(%err, "closeUI not acknowledged");
            }
            None
        }
    }
}

/// Performs `request` in the background and reports back.
fn send(host: Option<&HostClient>, request: HostRequest) -> Task<Message> {
    let Some(client) = host.cloned() else {
        return Task::done(Message::HostResponded {
            request,
            result: Err(Error::Transport("host client unavailable".to_string())),
        });
    };
    Task::perform(async move { client.send(request).await }, move |result| {
        Message::HostResponded { request, result }
    })
}
