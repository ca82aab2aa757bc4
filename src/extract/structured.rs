//! Structured-JSON extraction tier
//!
//! Assistants configured for structured output reply with a JSON object like
//! `{"recommendation": "...", "reasoning": "...", "comments": "..."}`, either
//! as the whole message, inside a fenced block, or embedded in prose. This
//! tier recovers that object and reads the query out of it. Malformed JSON at
//! any step is a failed attempt, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::keywords::{looks_like_json, starts_with_query_keyword};
use super::markdown::fenced_blocks;
use super::ExtractedSuggestion;
use crate::message::Conversation;

// Flat {...} object mentioning "recommendation", for payloads embedded in prose.
static FLAT_OBJECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\{[^{}]*"recommendation"[^{}]*\}"#).expect("object pattern is valid")
});

/// Tier 1: JSON object with an explicit query field, most recent message first
pub fn explicit_json(conversation: &Conversation) -> Option<ExtractedSuggestion> {
    for msg in conversation.assistant_messages_rev() {
        for value in json_candidates(&msg.content) {
            if let Some(suggestion) = suggestion_from_value(&value) {
                return Some(suggestion);
            }
        }
    }
    None
}

/// Parse attempts for one message, in priority order:
/// whole content, ```json blocks, untagged JSON-looking blocks, then an
/// embedded object mentioning "recommendation".
fn json_candidates(content: &str) -> Vec<Value> {
    let mut candidates = Vec::new();

    if let Ok(value) = serde_json::from_str::<Value>(content.trim()) {
        candidates.push(value);
    }

    // Tagged blocks outrank untagged ones regardless of document order.
    let blocks = fenced_blocks(content);
    for block in blocks.iter().filter(|b| b.has_tag(&["json"])) {
        if let Ok(value) = serde_json::from_str::<Value>(&block.content) {
            candidates.push(value);
        }
    }
    for block in blocks
        .iter()
        .filter(|b| b.tag.is_none() && looks_like_json(&b.content))
    {
        if let Ok(value) = serde_json::from_str::<Value>(&block.content) {
            candidates.push(value);
        }
    }

    if let Some(value) = embedded_recommendation_object(content) {
        candidates.push(value);
    }

    candidates
}

/// Pull a `{...}` span mentioning "recommendation" out of surrounding prose
fn embedded_recommendation_object(content: &str) -> Option<Value> {
    if let Some(m) = FLAT_OBJECT.find(content) {
        if let Ok(value) = serde_json::from_str::<Value>(m.as_str()) {
            return Some(value);
        }
    }

    // Nested payloads: widest first-{ to last-} span.
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end <= start {
        return None;
    }
    let span = &content[start..=end];
    if !span.contains("\"recommendation\"") {
        return None;
    }
    serde_json::from_str::<Value>(span).ok()
}

/// Read a suggestion out of one parsed JSON value
///
/// An explicit `query`/`sql`/`cypher` field (in that precedence) wins over a
/// `recommendation` field. A `recommendation` that itself starts with a query
/// keyword is used byte-for-byte; one wrapping a non-JSON fenced block yields
/// the block body; anything else is used as-is.
fn suggestion_from_value(value: &Value) -> Option<ExtractedSuggestion> {
    let obj = value.as_object()?;
    let reasoning = string_field(obj, "reasoning");
    let comments = string_field(obj, "comments");

    for key in ["query", "sql", "cypher"] {
        if let Some(query) = obj.get(key).and_then(Value::as_str) {
            if !query.trim().is_empty() {
                return Some(ExtractedSuggestion {
                    recommendation: query.to_string(),
                    reasoning,
                    comments,
                });
            }
        }
    }

    let rec = obj.get("recommendation").and_then(Value::as_str)?;
    if rec.trim().is_empty() {
        return None;
    }

    let recommendation = if starts_with_query_keyword(rec) {
        rec.to_string()
    } else {
        match fenced_blocks(rec).into_iter().next() {
            Some(block) if !block.content.is_empty() && !looks_like_json(&block.content) => {
                block.content
            }
            _ => rec.to_string(),
        }
    };

    Some(ExtractedSuggestion {
        recommendation,
        reasoning,
        comments,
    })
}

fn string_field(obj: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

#[cfg(test)]
#[path = "structured_tests.rs"]
mod structured_tests;
