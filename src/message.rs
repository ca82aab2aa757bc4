//! Chat message and conversation types
//!
//! A [`Conversation`] is the append-only transcript backing one open assistant
//! dialog. It is owned by the session, never persisted, and discarded wholesale
//! when the user starts a new conversation or closes the dialog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in an assistant dialog
///
/// `content` is opaque text: it may be JSON, contain fenced code blocks, or be
/// plain prose. Interpretation is entirely the extractor's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a message with the current timestamp
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a user message stamped now
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message stamped now
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Ordered transcript of one assistant dialog
///
/// Append-only while the dialog is open; cleared wholesale on new-conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Create an empty conversation
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the transcript
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// All messages in append order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Assistant messages, most recent first
    pub fn assistant_messages_rev(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages
            .iter()
            .rev()
            .filter(|m| m.role == Role::Assistant)
    }

    /// Discard the whole transcript
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl FromIterator<ChatMessage> for Conversation {
    fn from_iter<I: IntoIterator<Item = ChatMessage>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}
