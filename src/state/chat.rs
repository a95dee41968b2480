//! Chat-flow state: the transcript, send gating, and disease context.
//!
//! DESIGN
//! ======
//! The transcript is append-only and strictly ordered: the user's message is
//! pushed before its request is issued, and exactly one bot entry (reply or
//! error substitute) follows once that request settles. Entries hold raw
//! content; the transcript view renders bot entries through the markup
//! pipeline on display, so rendered output is never stored or re-rendered.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Prefix for the bot entry that substitutes for a failed reply.
pub const ERROR_REPLY_PREFIX: &str = "Sorry, I encountered an error: ";

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    /// Raw content; bot entries are formatted at display time.
    pub content: String,
}

/// State for the chat panel.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// True while a chat request is in flight.
    pub sending: bool,
    /// Display name of the disease under discussion, when one is known.
    pub disease_context: Option<String>,
}

impl ChatState {
    /// Append the user's echo and enter the in-flight phase. Runs before the
    /// request is issued, not after it settles.
    pub fn begin_send(&mut self, content: &str) {
        self.push(Sender::User, content.to_owned());
        self.sending = true;
    }

    /// Settle a successful exchange with the bot's reply.
    pub fn settle_reply(&mut self, response: String) {
        self.push(Sender::Bot, response);
        self.sending = false;
    }

    /// Settle a failed exchange with the error-substitute bot entry; the
    /// conversation continues uninterrupted.
    pub fn settle_error(&mut self, detail: &str) {
        self.push(Sender::Bot, format!("{ERROR_REPLY_PREFIX}{detail}"));
        self.sending = false;
    }

    fn push(&mut self, sender: Sender, content: String) {
        self.messages.push(ChatMessage { sender, content });
    }
}

/// Gate for outgoing input: trimmed text, or `None` for blank/whitespace-only
/// input, which produces no transcript entry and no request.
#[must_use]
pub fn trimmed_message(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
