//! Suggestion extraction from assistant transcripts
//!
//! The assistant's output format is not guaranteed: a reply may carry
//! structured JSON, a fenced code block, or free-form prose. Extraction runs
//! an ordered chain of independent strategy functions and returns the first
//! hit:
//!
//! 1. structured JSON with an explicit query field
//! 2. fenced block tagged with a query language
//! 3. inline statement in the most recent reply
//! 4. any fenced block not resembling JSON
//! 5. keyword-triggered line capture from the most recent reply
//!
//! Tiers 3 and 5 overlap with tier 4; the order is load-bearing for
//! compatibility and must not be rearranged.
//!
//! [`extract_suggestion`] is pure and idempotent: same transcript in, same
//! result out, no I/O, and it never panics on malformed input.

pub mod keywords;
pub mod markdown;

mod fenced;
mod inline;
mod structured;

use serde::Serialize;

use crate::message::Conversation;

/// The best-guess query recovered from a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedSuggestion {
    /// The candidate query string
    pub recommendation: String,
    /// Why the assistant suggests this query, when it said so
    pub reasoning: Option<String>,
    /// Follow-up question or caveat from the assistant
    pub comments: Option<String>,
}

impl ExtractedSuggestion {
    /// A suggestion carrying only a query, as recovered by the textual tiers
    pub(crate) fn bare(recommendation: String) -> Self {
        Self {
            recommendation,
            reasoning: None,
            comments: None,
        }
    }
}

type Strategy = fn(&Conversation) -> Option<ExtractedSuggestion>;

/// Extraction tiers in priority order; first success wins.
const TIERS: [(&str, Strategy); 5] = [
    ("structured-json", structured::explicit_json),
    ("tagged-code-block", fenced::tagged_block),
    ("inline-statement", inline::statement),
    ("any-code-block", fenced::any_block),
    ("keyword-capture", inline::keyword_capture),
];

/// Recover the query the assistant most likely intended to recommend
///
/// Returns `None` when the transcript has no assistant messages or no tier
/// finds anything usable. Callers must then disable any apply/copy action.
pub fn extract_suggestion(conversation: &Conversation) -> Option<ExtractedSuggestion> {
    if conversation.assistant_messages_rev().next().is_none() {
        return None;
    }

    for (name, tier) in TIERS {
        if let Some(suggestion) = tier(conversation) {
            log::trace!("suggestion recovered by {name} tier");
            return Some(suggestion);
        }
    }
    None
}
