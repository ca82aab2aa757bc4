//! Agent execution API client
//!
//! Thin async client for the backend endpoint that runs a query-writing
//! agent. The transport is opaque to the rest of the crate: the session layer
//! only ever sees the reply's `output` text and optional conversation id.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::agents;
use crate::config::AgentConfig;
use crate::message::ChatMessage;

/// Errors surfaced by agent execution
///
/// The `Display` strings are what a host shows the user when a send fails.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Client is not configured (missing base URL)
    #[error("Agent API not configured: {0}")]
    NotConfigured(String),

    /// No query assistant exists for the database type
    #[error("No query assistant available for database type '{0}'")]
    UnsupportedDatabase(String),

    /// Network error during the API request
    #[error("Network error: {0}")]
    Network(String),

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to parse the API response
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Request body for one agent execution call
#[derive(Debug, Clone, Serialize)]
pub struct AgentRequest {
    pub agent_id: String,
    pub user_input: String,
    /// Transcript prior to this input
    pub history: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

/// Reply from one agent execution call
#[derive(Debug, Clone, Deserialize)]
pub struct AgentReply {
    /// Assistant reply text; all the extractor ever reads
    pub output: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// Client for the agent execution API
#[derive(Debug, Clone)]
pub struct AgentClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl AgentClient {
    /// Create a client from configuration
    ///
    /// Returns `NotConfigured` when the base URL is missing or blank.
    pub fn new(config: &AgentConfig) -> Result<Self, AgentError> {
        let base_url = config.base_url.trim();
        if base_url.is_empty() {
            return Err(AgentError::NotConfigured(
                "missing or empty base_url in [agent] config".to_string(),
            ));
        }

        // Builder failure is a TLS/runtime problem, not a config problem.
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AgentError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: config
                .api_key
                .as_ref()
                .filter(|k| !k.trim().is_empty())
                .cloned(),
        })
    }

    /// Execute one agent call
    ///
    /// No retries and no cancellation here: duplicate sends are prevented
    /// upstream by the session loading guard, and retry policy belongs to the
    /// caller.
    pub async fn execute(&self, request: &AgentRequest) -> Result<AgentReply, AgentError> {
        let url = format!("{}/agents/execute", self.base_url);
        log::debug!("executing agent {} via {url}", request.agent_id);

        let mut req = self.http.post(&url).json(request);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let response = req
            .send()
            .await
            .map_err(|e| AgentError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AgentError::Api {
                code: status.as_u16(),
                message,
            });
        }

        response
            .json::<AgentReply>()
            .await
            .map_err(|e| AgentError::Parse(e.to_string()))
    }

    /// Execute against the assistant for a database type
    ///
    /// Resolves the agent id through the capability table; unknown types fail
    /// with `UnsupportedDatabase` before any network traffic.
    pub async fn execute_for(
        &self,
        db_type: &str,
        user_input: &str,
        history: &[ChatMessage],
        session_id: Option<&str>,
        context: Option<Value>,
    ) -> Result<AgentReply, AgentError> {
        let agent_id = agents::agent_for(db_type)
            .ok_or_else(|| AgentError::UnsupportedDatabase(db_type.to_string()))?;

        let request = AgentRequest {
            agent_id: agent_id.to_string(),
            user_input: user_input.to_string(),
            history: history.to_vec(),
            session_id: session_id.map(String::from),
            context,
        };
        self.execute(&request).await
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
