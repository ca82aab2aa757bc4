//! Query keyword recognition shared by the extraction tiers

use once_cell::sync::Lazy;
use regex::Regex;

/// Keywords that mark text as a SQL/Cypher query
pub const QUERY_KEYWORDS: [&str; 11] = [
    "SELECT", "INSERT", "UPDATE", "DELETE", "CREATE", "ALTER", "DROP", "MATCH", "MERGE", "WITH",
    "CALL",
];

static CONTAINS_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:SELECT|INSERT|UPDATE|DELETE|CREATE|ALTER|DROP|MATCH|MERGE|WITH|CALL)\b",
    )
    .expect("keyword pattern is valid")
});

static STARTS_WITH_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(?:SELECT|INSERT|UPDATE|DELETE|CREATE|ALTER|DROP|MATCH|MERGE|WITH|CALL)\b",
    )
    .expect("keyword pattern is valid")
});

/// True if the text contains at least one query keyword as a whole word
pub fn contains_query_keyword(text: &str) -> bool {
    CONTAINS_KEYWORD.is_match(text)
}

/// True if the trimmed text begins with a query keyword
pub fn starts_with_query_keyword(text: &str) -> bool {
    STARTS_WITH_KEYWORD.is_match(text)
}

/// True if the trimmed text starts like a JSON document rather than a query
pub fn looks_like_json(text: &str) -> bool {
    let trimmed = text.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

#[cfg(test)]
#[path = "keywords_tests.rs"]
mod keywords_tests;
