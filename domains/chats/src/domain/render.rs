//! Presentation rendering for stored messages
//!
//! Messages are stored as raw Markdown and rendered to HTML at read time,
//! so the stored content stays canonical.

use chatline_common::render_markdown;

use crate::domain::entities::Message;

/// Render one message's content from Markdown to HTML
pub fn render_message(message: Message) -> Message {
    Message {
        content: render_markdown(&message.content),
        ..message
    }
}

/// Render a batch of messages, preserving order
pub fn render_messages(messages: Vec<Message>) -> Vec<Message> {
    messages.into_iter().map(render_message).collect()
}
