//! Caller-owned assistant dialog session
//!
//! One [`ChatSession`] backs one open query-assist dialog. It is an explicit
//! value passed by the host, not ambient state, so multiple dialogs can
//! coexist and tests need no framework scaffolding. All methods take
//! `&mut self` on the single UI thread; there are no workers or locks.
//!
//! While a send is in flight the session is `loading` and refuses duplicate
//! sends. There is no cancellation: the guard, not an abort, prevents
//! overlapping requests.

use crate::client::AgentReply;
use crate::extract::{extract_suggestion, ExtractedSuggestion};
use crate::message::{ChatMessage, Conversation};

/// State of one open assistant dialog
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    conversation: Conversation,
    /// Server-assigned conversation id, adopted from the first reply
    session_id: Option<String>,
    /// True while a send awaits its reply
    loading: bool,
    /// Last send failure, shown to the user until the next send
    error: Option<String>,
}

impl ChatSession {
    /// Create an empty session for a freshly opened dialog
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin sending user input
    ///
    /// Returns `false` without touching the transcript when a send is already
    /// in flight. Otherwise appends the user message, clears any stale error,
    /// and marks the session loading.
    pub fn begin_send(&mut self, input: &str) -> bool {
        if self.loading {
            log::debug!("send refused: request already in flight");
            return false;
        }
        self.conversation.push(ChatMessage::user(input));
        self.error = None;
        self.loading = true;
        true
    }

    /// Record a successful reply
    ///
    /// Appends the assistant message and adopts the server conversation id
    /// when one is present.
    pub fn complete(&mut self, reply: AgentReply) {
        self.conversation.push(ChatMessage::assistant(reply.output));
        if reply.conversation_id.is_some() {
            self.session_id = reply.conversation_id;
        }
        self.loading = false;
    }

    /// Record a failed send
    ///
    /// The message is what the user sees; no assistant message is appended.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Discard the transcript and start over
    pub fn new_conversation(&mut self) {
        self.conversation.clear();
        self.session_id = None;
        self.error = None;
        self.loading = false;
    }

    /// Best-guess suggestion for the current transcript
    ///
    /// Thin adapter over the pure extractor; no state is touched.
    pub fn suggestion(&self) -> Option<ExtractedSuggestion> {
        extract_suggestion(&self.conversation)
    }

    /// True when there is a suggestion to copy or apply
    pub fn can_apply(&self) -> bool {
        self.suggestion().is_some()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
