//! qassist — AI query-assistant suggestion extraction for SQL/Cypher consoles
//!
//! A query-console host embeds this crate to recover the query an AI assistant
//! most likely intended to recommend from a chat transcript. Assistant output
//! is not format-guaranteed (structured JSON, fenced code blocks, or free-form
//! prose), so extraction runs an ordered chain of strategies and takes the
//! first hit.
//!
//! The crate splits into:
//! - [`extract`]: the pure, side-effect-free suggestion extractor
//! - [`message`]: chat message and conversation types
//! - [`session`]: caller-owned dialog session state (loading guard, errors)
//! - [`agents`]: database-type to assistant-agent capability table
//! - [`client`]: async client for the agent execution API
//! - [`config`]: TOML configuration loading
//!
//! ```no_run
//! use qassist::session::ChatSession;
//!
//! let mut session = ChatSession::new();
//! session.begin_send("show me open orders");
//! // ... send to the agent API, then:
//! # let reply = qassist::client::AgentReply { output: String::new(), conversation_id: None, metadata: None };
//! session.complete(reply);
//! if let Some(suggestion) = session.suggestion() {
//!     println!("{}", suggestion.recommendation);
//! }
//! ```

pub mod agents;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod message;
pub mod session;

pub use client::{AgentClient, AgentError, AgentReply, AgentRequest};
pub use config::Config;
pub use error::QassistError;
pub use extract::{extract_suggestion, ExtractedSuggestion};
pub use message::{ChatMessage, Conversation, Role};
pub use session::ChatSession;
