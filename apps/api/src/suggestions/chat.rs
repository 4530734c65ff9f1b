//! Conversational assistant over the current resume.

use serde_json::Value;
use tracing::{info, warn};

use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, NO_FABRICATION_INSTRUCTION};
use crate::llm_client::{ChatMessage, LlmClient, LlmError};
use crate::models::Resume;
use crate::suggestions::prompts::{CHAT_SYSTEM_TEMPLATE, FALLBACK_CHAT_MESSAGE};
use crate::suggestions::{ChatResponse, SuggestedAction};

/// Conversation turns kept from the client-supplied history.
const MAX_HISTORY: usize = 20;

/// Answers the latest turn of `history`, optionally steered by `instruction`.
pub async fn chat_assistant(
    llm: Option<&LlmClient>,
    resume: &Resume,
    history: &[ChatMessage],
    instruction: Option<&str>,
) -> ChatResponse {
    let Some(llm) = llm else {
        info!("AI client not configured, returning fallback chat reply");
        return fallback_response();
    };

    let reply = match build_chat_messages(resume, history, instruction) {
        Ok(messages) => llm.call_json::<Value>(&messages).await,
        Err(e) => Err(e),
    };

    match reply {
        Ok(value) => parse_chat_response(&value).unwrap_or_else(|| {
            warn!("Chat reply had no message, using fallback");
            fallback_response()
        }),
        Err(e) => {
            warn!("Chat assistant failed, using fallback: {e}");
            fallback_response()
        }
    }
}

fn build_chat_messages(
    resume: &Resume,
    history: &[ChatMessage],
    instruction: Option<&str>,
) -> Result<Vec<ChatMessage>, LlmError> {
    let resume_json = serde_json::to_string_pretty(resume)?;
    let system = format!(
        "{} {NO_FABRICATION_INSTRUCTION} {JSON_ONLY_SYSTEM}",
        CHAT_SYSTEM_TEMPLATE.replace("{resume_json}", &resume_json)
    );

    let mut messages = vec![ChatMessage::system(system)];

    // Only user and assistant turns are forwarded; clients cannot inject system turns.
    let turns: Vec<&ChatMessage> = history
        .iter()
        .filter(|m| matches!(m.role.as_str(), "user" | "assistant"))
        .filter(|m| !m.content.trim().is_empty())
        .collect();
    let skip = turns.len().saturating_sub(MAX_HISTORY);
    messages.extend(turns.into_iter().skip(skip).cloned());

    if let Some(instruction) = instruction.map(str::trim).filter(|i| !i.is_empty()) {
        messages.push(ChatMessage::user(instruction));
    }

    Ok(messages)
}

/// Reads `{message, suggestedActions?}`, dropping malformed actions.
pub fn parse_chat_response(reply: &Value) -> Option<ChatResponse> {
    let message = reply
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())?
        .to_string();

    let actions: Vec<SuggestedAction> = reply
        .get("suggestedActions")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default();

    Some(ChatResponse {
        message,
        suggested_actions: (!actions.is_empty()).then_some(actions),
    })
}

pub fn fallback_response() -> ChatResponse {
    ChatResponse {
        message: FALLBACK_CHAT_MESSAGE.to_string(),
        suggested_actions: None,
    }
}
