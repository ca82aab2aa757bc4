//! Plain-text extraction tiers
//!
//! Both tiers read only the most recent assistant message: tier 3 matches
//! whole statements with anchored patterns, tier 5 is the last-resort line
//! capture triggered by a leading query keyword.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ExtractedSuggestion;
use crate::message::Conversation;

/// Minimum span for an inline statement or captured block
const MIN_STATEMENT_LEN: usize = 15;

// Each pattern spans lines and stops at a semicolon or end of text. Order is
// part of the contract.
static STATEMENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?is)\bSELECT\b.*?(?:;|\z)",
        r"(?is)\bINSERT\s+INTO\b.*?(?:;|\z)",
        r"(?is)\bUPDATE\b.*?(?:;|\z)",
        r"(?is)\bDELETE\s+FROM\b.*?(?:;|\z)",
        r"(?is)\bMATCH\b.*?\bRETURN\b.*?(?:;|\z)",
        r"(?is)\bCREATE\s+(?:TABLE|INDEX|VIEW)\b.*?(?:;|\z)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("statement pattern is valid"))
    .collect()
});

// Line-start keywords that open a capture. Narrower than the full keyword
// list: MATCH/MERGE/CALL prose openers ("match the...") false-positive too
// often at line granularity.
static CAPTURE_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:SELECT|INSERT|UPDATE|DELETE|CREATE|ALTER|DROP|WITH)\b")
        .expect("capture pattern is valid")
});

/// Tier 3: inline statement in the most recent assistant message
pub fn statement(conversation: &Conversation) -> Option<ExtractedSuggestion> {
    let msg = conversation.assistant_messages_rev().next()?;

    for pattern in STATEMENT_PATTERNS.iter() {
        if let Some(m) = pattern.find(&msg.content) {
            let text = m.as_str().trim();
            if text.len() >= MIN_STATEMENT_LEN {
                return Some(ExtractedSuggestion::bare(text.to_string()));
            }
        }
    }
    None
}

/// Tier 5: keyword-triggered line capture from the most recent assistant message
///
/// Capture starts at the first line opening with a query keyword and runs
/// until a `;`-terminated line or an empty line after captured content.
pub fn keyword_capture(conversation: &Conversation) -> Option<ExtractedSuggestion> {
    let msg = conversation.assistant_messages_rev().next()?;

    let mut captured: Vec<&str> = Vec::new();
    for line in msg.content.lines() {
        let trimmed = line.trim();

        if captured.is_empty() {
            if CAPTURE_START.is_match(trimmed) {
                captured.push(trimmed);
                if trimmed.ends_with(';') {
                    break;
                }
            }
        } else {
            if trimmed.is_empty() {
                break;
            }
            captured.push(trimmed);
            if trimmed.ends_with(';') {
                break;
            }
        }
    }

    let joined = captured.join("\n");
    if joined.len() >= MIN_STATEMENT_LEN {
        Some(ExtractedSuggestion::bare(joined))
    } else {
        None
    }
}

#[cfg(test)]
#[path = "inline_tests.rs"]
mod inline_tests;
