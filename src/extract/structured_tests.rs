//! Tests for the structured-JSON tier

use super::*;
use crate::message::ChatMessage;

fn assistant(content: &str) -> Conversation {
    vec![
        ChatMessage::user("help me"),
        ChatMessage::assistant(content),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_whole_message_json() {
    let messages = assistant(r#"{"recommendation": "SELECT * FROM users", "reasoning": "lists everyone"}"#);
    let suggestion = explicit_json(&messages).unwrap();

    assert_eq!(suggestion.recommendation, "SELECT * FROM users");
    assert_eq!(suggestion.reasoning.as_deref(), Some("lists everyone"));
    assert_eq!(suggestion.comments, None);
}

#[test]
fn test_query_field_beats_recommendation() {
    let messages =
        assistant(r#"{"query": "SELECT 1", "recommendation": "something else entirely"}"#);
    let suggestion = explicit_json(&messages).unwrap();
    assert_eq!(suggestion.recommendation, "SELECT 1");
}

#[test]
fn test_query_field_precedence_over_sql_and_cypher() {
    let messages = assistant(r#"{"cypher": "MATCH (n) RETURN n", "sql": "SELECT 2", "query": "SELECT 1"}"#);
    let suggestion = explicit_json(&messages).unwrap();
    assert_eq!(suggestion.recommendation, "SELECT 1");
}

#[test]
fn test_sql_field_when_query_missing() {
    let messages = assistant(r#"{"sql": "SELECT count(*) FROM t"}"#);
    let suggestion = explicit_json(&messages).unwrap();
    assert_eq!(suggestion.recommendation, "SELECT count(*) FROM t");
}

#[test]
fn test_empty_query_field_falls_through_to_recommendation() {
    let messages = assistant(r#"{"query": "   ", "recommendation": "SELECT id FROM t"}"#);
    let suggestion = explicit_json(&messages).unwrap();
    assert_eq!(suggestion.recommendation, "SELECT id FROM t");
}

#[test]
fn test_json_fenced_block() {
    let messages = assistant("Here you go:\n```json\n{\"query\": \"SELECT 1\"}\n```");
    let suggestion = explicit_json(&messages).unwrap();
    assert_eq!(suggestion.recommendation, "SELECT 1");
}

#[test]
fn test_untagged_block_parsed_only_when_json_looking() {
    let messages = assistant("```\n{\"recommendation\": \"MATCH (n) RETURN n\"}\n```");
    let suggestion = explicit_json(&messages).unwrap();
    assert_eq!(suggestion.recommendation, "MATCH (n) RETURN n");

    // Same shape but non-JSON content: not this tier's business
    let messages = assistant("```\nSELECT * FROM users;\n```");
    assert!(explicit_json(&messages).is_none());
}

#[test]
fn test_json_tagged_block_checked_before_untagged() {
    // An untagged JSON-looking block earlier in the document must not outrank
    // a ```json block: tagged blocks are the higher-confidence attempt.
    let messages = assistant(
        "```\n{\"query\": \"SELECT 'untagged' FROM t\"}\n```\n\
         ```json\n{\"query\": \"SELECT 'tagged' FROM t\"}\n```",
    );
    let suggestion = explicit_json(&messages).unwrap();
    assert_eq!(suggestion.recommendation, "SELECT 'tagged' FROM t");
}

#[test]
fn test_embedded_object_in_prose() {
    let messages = assistant(
        "Sure, try this: {\"recommendation\": \"SELECT id FROM orders\", \"comments\": \"check indexes\"} and tell me how it goes",
    );
    let suggestion = explicit_json(&messages).unwrap();
    assert_eq!(suggestion.recommendation, "SELECT id FROM orders");
    assert_eq!(suggestion.comments.as_deref(), Some("check indexes"));
}

#[test]
fn test_recommendation_starting_with_keyword_used_verbatim() {
    let messages = assistant(r#"{"recommendation": "SELECT  id ,name  FROM users"}"#);
    let suggestion = explicit_json(&messages).unwrap();
    // Byte-for-byte, not reformatted or reinterpreted
    assert_eq!(suggestion.recommendation, "SELECT  id ,name  FROM users");
}

#[test]
fn test_recommendation_wrapping_fenced_block() {
    let messages = assistant(
        r#"{"recommendation": "Run this:\n```sql\nSELECT * FROM logs;\n```", "reasoning": "recent entries"}"#,
    );
    let suggestion = explicit_json(&messages).unwrap();
    assert_eq!(suggestion.recommendation, "SELECT * FROM logs;");
    assert_eq!(suggestion.reasoning.as_deref(), Some("recent entries"));
}

#[test]
fn test_recommendation_wrapping_json_block_used_as_is() {
    // The inner block is JSON, so the recommendation text is kept whole
    let rec = "See:\n```\n{\"not\": \"a query\"}\n```";
    let content = serde_json::json!({ "recommendation": rec }).to_string();
    let messages = assistant(&content);

    let suggestion = explicit_json(&messages).unwrap();
    assert_eq!(suggestion.recommendation, rec);
}

#[test]
fn test_prose_recommendation_used_as_is() {
    let messages = assistant(r#"{"recommendation": "try filtering on the status column"}"#);
    let suggestion = explicit_json(&messages).unwrap();
    assert_eq!(
        suggestion.recommendation,
        "try filtering on the status column"
    );
}

#[test]
fn test_most_recent_assistant_message_wins() {
    let messages: Conversation = vec![
        ChatMessage::assistant(r#"{"query": "SELECT 'old'"}"#),
        ChatMessage::user("and now?"),
        ChatMessage::assistant(r#"{"query": "SELECT 'new'"}"#),
    ]
    .into_iter()
    .collect();
    let suggestion = explicit_json(&messages).unwrap();
    assert_eq!(suggestion.recommendation, "SELECT 'new'");
}

#[test]
fn test_malformed_json_is_not_an_error() {
    let messages = assistant("```json\n{\"recommendation\": broken\n```");
    assert!(explicit_json(&messages).is_none());
}

#[test]
fn test_json_without_usable_fields_yields_none() {
    let messages = assistant(r#"{"status": "ok", "rows": 3}"#);
    assert!(explicit_json(&messages).is_none());

    let messages = assistant("[1, 2, 3]");
    assert!(explicit_json(&messages).is_none());
}

#[test]
fn test_empty_recommendation_yields_none() {
    let messages = assistant(r#"{"recommendation": ""}"#);
    assert!(explicit_json(&messages).is_none());
}

#[test]
fn test_user_messages_ignored() {
    let messages: Conversation = vec![ChatMessage::user(r#"{"query": "SELECT 1"}"#)]
        .into_iter()
        .collect();
    assert!(explicit_json(&messages).is_none());
}
