use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::resume::Resume;
use crate::render::TemplateId;

/// A saved resume held by the in-memory store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResumeRecord {
    pub id: u64,
    pub user_id: String,
    pub title: String,
    pub template: TemplateId,
    pub content: Resume,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields for create and full-replace update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResumeRecord {
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub template: TemplateId,
    pub content: Resume,
}
