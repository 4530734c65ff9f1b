use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::ChatMessage;
use crate::models::Resume;
use crate::state::AppState;
use crate::suggestions::apply::apply_suggestion;
use crate::suggestions::chat::chat_assistant;
use crate::suggestions::review::review_resume;
use crate::suggestions::{ChatResponse, Suggestion};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub resume_data: Resume,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub suggestions: Vec<Suggestion>,
}

/// POST /api/resume/llm-review
pub async fn handle_llm_review(
    State(state): State<AppState>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    let suggestions = review_resume(state.llm.as_ref(), &req.resume_data).await;
    Ok(Json(ReviewResponse { suggestions }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub resume_data: Resume,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub instruction: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatAssistantResponse {
    pub response: ChatResponse,
}

/// POST /api/resume/chat-assistant
pub async fn handle_chat_assistant(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatAssistantResponse>, AppError> {
    let response = chat_assistant(
        state.llm.as_ref(),
        &req.resume_data,
        &req.messages,
        req.instruction.as_deref(),
    )
    .await;
    Ok(Json(ChatAssistantResponse { response }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub resume_data: Resume,
    pub section: String,
    pub suggestion: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyResponse {
    pub resume_data: Resume,
    pub applied: bool,
}

/// POST /api/resume/apply-suggestion
pub async fn handle_apply_suggestion(
    Json(req): Json<ApplyRequest>,
) -> Result<Json<ApplyResponse>, AppError> {
    let mut resume = req.resume_data;
    let applied = apply_suggestion(&mut resume, &req.section, &req.suggestion);
    if !applied {
        tracing::debug!(section = %req.section, "Suggestion did not match any resume field");
    }
    Ok(Json(ApplyResponse {
        resume_data: resume,
        applied,
    }))
}
