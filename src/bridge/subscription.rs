// SPDX-License-Identifier: MPL-2.0
//! Inbound command stream read from standard input.
//!
//! The host writes one JSON command per line. Malformed lines are logged and
//! skipped; end of input ends the stream.

use super::inbound::{self, HostCommand};
use iced::futures::channel::mpsc;
use iced::futures::{SinkExt, Stream};
use iced::stream;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Decodes host commands from a line-oriented reader.
pub struct CommandReader<R> {
    reader: R,
    buffer: Vec<u8>,
    line_number: u64,
}

impl<R: AsyncBufRead + Unpin> CommandReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            line_number: 0,
        }
    }

    /// Returns the next recognized command, or `None` at end of input.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and then fail as
    /// ordinary malformed messages; only I/O errors end the stream.
    pub async fn next_command(&mut self) -> Option<HostCommand> {
        loop {
            self.buffer.clear();
            match self.reader.read_until(b'\n', &mut self.buffer).await {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(%err, "host input failed; stopping");
                    return None;
                }
            }
            self.line_number += 1;

            let line = String::from_utf8_lossy(&self.buffer);
            let line = line.trim_end_matches(['\n', '\r']);
            match inbound::decode(line) {
                Ok(Some(command)) => {
                    tracing::debug!(
                        line = self.line_number,
                        action = command.action(),
                        "host command"
                    );
                    return Some(command);
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(line = self.line_number, %err, "skipping host message");
                }
            }
        }
    }
}

/// Stream of host commands read from stdin, for `Subscription::run`.
pub fn stdin_commands() -> impl Stream<Item = HostCommand> {
    stream::channel(100, |mut output: mpsc::Sender<HostCommand>| async move {
        let mut reader = CommandReader::new(BufReader::new(tokio::io::stdin()));
        while let Some(command) = reader.next_command().await {
            if output.send(command).await.is_err() {
                break;
            }
        }
        tracing::info!("host input closed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_commands_in_order_and_skips_garbage() {
        let input: &[u8] = b"{\"action\":\"showUI\",\"scale\":2.0}\n\
            garbage\n\
            {\"action\":\"wave\"}\n\
            \n\
            {\"action\":\"hideUI\"}\n";
        let mut reader = CommandReader::new(BufReader::new(input));

        assert_eq!(
            reader.next_command().await,
            Some(HostCommand::ShowUi {
                config: None,
                scale: Some(2.0)
            })
        );
        assert_eq!(reader.next_command().await, Some(HostCommand::HideUi));
        assert_eq!(reader.next_command().await, None);
    }

    #[tokio::test]
    async fn invalid_utf8_line_is_skipped() {
        let input: &[u8] = b"{\"action\":\"showUI\"}\n\xff\xfe bad\n{\"action\":\"hideUI\"}";
        let mut reader = CommandReader::new(BufReader::new(input));

        assert_eq!(
            reader.next_command().await,
            Some(HostCommand::ShowUi {
                config: None,
                scale: None
            })
        );
        assert_eq!(reader.next_command().await, Some(HostCommand::HideUi));
        assert_eq!(reader.line_number, 3);
        assert_eq!(reader.next_command().await, None);
    }

    #[tokio::test]
    async fn empty_input_ends_immediately() {
        let input: &[u8] = b"";
        let mut reader = CommandReader::new(BufReader::new(input));
        assert_eq!(reader.next_command().await, None);
    }
}
