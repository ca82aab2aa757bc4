//! Fenced-block extraction tiers
//!
//! Tier 2 takes the first block explicitly tagged with a query language;
//! tier 4 is the late fallback accepting any block that is not JSON.

use super::keywords::{contains_query_keyword, looks_like_json};
use super::markdown::fenced_blocks;
use super::ExtractedSuggestion;
use crate::message::Conversation;

/// Language hints that mark a block as a query
const QUERY_TAGS: [&str; 5] = ["sql", "cypher", "postgresql", "mysql", "pgsql"];

/// Shorter block bodies are noise, not queries
const MIN_BLOCK_LEN: usize = 10;

/// Tier 2: fenced block tagged with a query language, most recent message first
///
/// The body must be long enough, not look like JSON, and contain at least one
/// query keyword.
pub fn tagged_block(conversation: &Conversation) -> Option<ExtractedSuggestion> {
    for msg in conversation.assistant_messages_rev() {
        for block in fenced_blocks(&msg.content) {
            if block.has_tag(&QUERY_TAGS)
                && block.content.len() >= MIN_BLOCK_LEN
                && !looks_like_json(&block.content)
                && contains_query_keyword(&block.content)
            {
                return Some(ExtractedSuggestion::bare(block.content));
            }
        }
    }
    None
}

/// Tier 4: any fenced block not resembling JSON, most recent message first
pub fn any_block(conversation: &Conversation) -> Option<ExtractedSuggestion> {
    for msg in conversation.assistant_messages_rev() {
        for block in fenced_blocks(&msg.content) {
            if block.content.len() >= MIN_BLOCK_LEN && !looks_like_json(&block.content) {
                return Some(ExtractedSuggestion::bare(block.content));
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "fenced_tests.rs"]
mod fenced_tests;
