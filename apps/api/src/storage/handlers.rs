use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::models::resume::ValidationError;
use crate::models::{NewResumeRecord, StoredResumeRecord};
use crate::state::AppState;

fn validate(record: &NewResumeRecord) -> Result<(), AppError> {
    if record.user_id.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "userId" }.into());
    }
    if record.title.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "title" }.into());
    }
    record.content.validate()?;
    Ok(())
}

fn not_found(id: u64) -> AppError {
    AppError::NotFound(format!("Resume {id} not found"))
}

/// POST /api/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(req): Json<NewResumeRecord>,
) -> Result<(StatusCode, Json<StoredResumeRecord>), AppError> {
    validate(&req)?;
    let record = state.store.create(req).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<StoredResumeRecord>, AppError> {
    let record = state.store.get(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(record))
}

/// PUT /api/resumes/:id
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<NewResumeRecord>,
) -> Result<Json<StoredResumeRecord>, AppError> {
    validate(&req)?;
    let record = state
        .store
        .update(id, req)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(record))
}

/// DELETE /api/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete(id).await? {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/users/:user_id/resumes
pub async fn handle_list_user_resumes(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<StoredResumeRecord>>, AppError> {
    Ok(Json(state.store.list_by_user(&user_id).await?))
}
