//! One-shot resume review: a list of field-level suggestions.

use serde_json::Value;
use tracing::{info, warn};

use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, NO_FABRICATION_INSTRUCTION};
use crate::llm_client::{ChatMessage, LlmClient, LlmError};
use crate::models::Resume;
use crate::suggestions::prompts::{REVIEW_PROMPT_TEMPLATE, REVIEW_SYSTEM};
use crate::suggestions::Suggestion;

/// Reviews `resume`; falls back to canned suggestions when the client is
/// unconfigured, the call fails, or the reply holds nothing usable.
pub async fn review_resume(llm: Option<&LlmClient>, resume: &Resume) -> Vec<Suggestion> {
    let Some(llm) = llm else {
        info!("AI client not configured, returning fallback review");
        return fallback_suggestions(resume);
    };

    match request_review(llm, resume).await {
        Ok(suggestions) if !suggestions.is_empty() => suggestions,
        Ok(_) => {
            warn!("LLM review returned no usable suggestions, using fallback");
            fallback_suggestions(resume)
        }
        Err(e) => {
            warn!("LLM review failed, using fallback: {e}");
            fallback_suggestions(resume)
        }
    }
}

async fn request_review(llm: &LlmClient, resume: &Resume) -> Result<Vec<Suggestion>, LlmError> {
    let messages = build_review_messages(resume)?;
    let reply: Value = llm.call_json(&messages).await?;
    Ok(parse_suggestions(&reply))
}

fn build_review_messages(resume: &Resume) -> Result<Vec<ChatMessage>, LlmError> {
    let resume_json = serde_json::to_string_pretty(resume)?;
    let target_job = match &resume.target_job {
        Some(job) => {
            let mut line = job.title.clone();
            if let Some(company) = job.company.as_deref().filter(|c| !c.trim().is_empty()) {
                line.push_str(&format!(" at {company}"));
            }
            if let Some(description) = job.description.as_deref().filter(|d| !d.trim().is_empty()) {
                line.push_str(&format!("\n{description}"));
            }
            line
        }
        None => "Not specified; optimise for the candidate's current title.".to_string(),
    };

    let prompt = REVIEW_PROMPT_TEMPLATE
        .replace("{target_job}", &target_job)
        .replace("{resume_json}", &resume_json);

    Ok(vec![
        ChatMessage::system(format!(
            "{REVIEW_SYSTEM} {NO_FABRICATION_INSTRUCTION} {JSON_ONLY_SYSTEM}"
        )),
        ChatMessage::user(prompt),
    ])
}

/// Keeps the well-formed entries of `{"suggestions": [...]}` (or a bare array).
pub fn parse_suggestions(reply: &Value) -> Vec<Suggestion> {
    let items = reply
        .get("suggestions")
        .unwrap_or(reply)
        .as_array()
        .cloned()
        .unwrap_or_default();

    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<Suggestion>(item).ok())
        .filter(|s| !s.section.trim().is_empty() && !s.suggestion.is_null())
        .collect()
}

/// Generic advice built from the resume itself.
pub fn fallback_suggestions(resume: &Resume) -> Vec<Suggestion> {
    let info = &resume.personal_info;
    let top_skills: Vec<&str> = resume.skills.iter().take(3).map(String::as_str).collect();

    let mut summary = if info.title.trim().is_empty() {
        "Professional".to_string()
    } else {
        info.title.trim().to_string()
    };
    if !top_skills.is_empty() {
        summary.push_str(&format!(" skilled in {}", top_skills.join(", ")));
    }
    summary.push_str(
        ". Delivers measurable results, collaborates across teams, and takes ownership \
         of outcomes from planning through launch.",
    );

    let mut suggestions = vec![Suggestion {
        section: "summary".to_string(),
        title: "Lead with a focused summary".to_string(),
        original: Value::String(resume.summary.clone()),
        suggestion: Value::String(summary),
    }];

    let mut seen = std::collections::HashSet::new();
    let deduped: Vec<String> = resume
        .skills
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && seen.insert(s.to_lowercase()))
        .collect();
    if deduped.len() != resume.skills.len() {
        suggestions.push(Suggestion {
            section: "skills".to_string(),
            title: "Remove duplicate skills".to_string(),
            original: serde_json::json!(resume.skills),
            suggestion: serde_json::json!(deduped),
        });
    }

    suggestions
}
