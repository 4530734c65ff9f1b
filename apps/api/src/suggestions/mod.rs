// AI suggestion service: resume review, chat assistant, and applying returned
// edits back into the resume. Upstream failures never reach the caller; every
// entry point degrades to canned advice.
// All LLM calls go through llm_client.

pub mod apply;
pub mod chat;
pub mod handlers;
pub mod prompts;
pub mod review;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A proposed replacement for one resume field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Target path, e.g. `summary` or `experience[0].description`.
    pub section: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original: Value,
    pub suggestion: Value,
}

/// One edit offered alongside a chat reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedAction {
    #[serde(rename = "type", default = "default_action_type")]
    pub action_type: String,
    pub section: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_content: Option<Value>,
}

fn default_action_type() -> String {
    "update".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_actions: Option<Vec<SuggestedAction>>,
}
