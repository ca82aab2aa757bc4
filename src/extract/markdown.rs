//! Fenced code block scanning
//!
//! Assistant replies wrap queries in triple-backtick fences, optionally tagged
//! with a language hint. The JSON, tagged-block, and generic-block tiers all
//! share this scanner.

use once_cell::sync::Lazy;
use regex::Regex;

/// A triple-backtick code block found in message text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
    /// Language hint after the opening fence, lower-cased; None when untagged
    pub tag: Option<String>,
    /// Block body with surrounding whitespace trimmed
    pub content: String,
}

// Requires a closing fence; an unterminated fence is not a block.
static FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```([A-Za-z0-9_+-]*)[ \t]*\r?\n(.*?)```").expect("fence pattern is valid")
});

/// All fenced blocks in the text, in document order
pub fn fenced_blocks(text: &str) -> Vec<FencedBlock> {
    FENCE
        .captures_iter(text)
        .map(|caps| {
            let tag = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            FencedBlock {
                tag: if tag.is_empty() {
                    None
                } else {
                    Some(tag.to_lowercase())
                },
                content: caps[2].trim().to_string(),
            }
        })
        .collect()
}

impl FencedBlock {
    /// True if the tag matches any of the given lower-case language hints
    pub fn has_tag(&self, tags: &[&str]) -> bool {
        match &self.tag {
            Some(tag) => tags.contains(&tag.as_str()),
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod markdown_tests;
