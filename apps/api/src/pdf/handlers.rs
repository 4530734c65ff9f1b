use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::settings::FileFormat;
use crate::models::{RenderSettings, Resume};
use crate::render::text::render_plain_text;
use crate::render::{assemble, TemplateId};
use crate::state::AppState;

/// Body shared by generate-pdf, preview, and export.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub resume_data: Resume,
    /// Unknown identifiers render with the modern template.
    #[serde(default)]
    pub template: TemplateId,
    #[serde(default)]
    pub settings: Option<RenderSettings>,
}

impl RenderRequest {
    fn validate(&self) -> Result<(), AppError> {
        self.resume_data.validate()?;
        if let Some(settings) = &self.settings {
            settings.validate()?;
        }
        Ok(())
    }
}

/// `Jane_Doe_Resume.pdf`; anything outside `[A-Za-z0-9_-]` is dropped.
fn attachment_name(resume: &Resume, extension: &str) -> String {
    let info = &resume.personal_info;
    let stem: String = format!("{}_{}_Resume", info.first_name.trim(), info.last_name.trim())
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    format!("{stem}.{extension}")
}

fn attachment(body: Vec<u8>, content_type: &'static str, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}

async fn pdf_response(state: &AppState, req: &RenderRequest) -> Result<Response, AppError> {
    let pdf = state
        .pdf
        .export_pdf(&req.resume_data, req.template, req.settings.as_ref())
        .await?;
    Ok(attachment(
        pdf,
        "application/pdf",
        &attachment_name(&req.resume_data, "pdf"),
    ))
}

/// POST /api/resume/generate-pdf
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Response, AppError> {
    req.validate()?;
    pdf_response(&state, &req).await
}

/// POST /api/resume/preview
pub async fn handle_preview(Json(req): Json<RenderRequest>) -> Result<Html<String>, AppError> {
    req.validate()?;
    Ok(Html(assemble(
        &req.resume_data,
        req.template,
        req.settings.as_ref(),
    )))
}

/// POST /api/resume/export
pub async fn handle_export(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Response, AppError> {
    req.validate()?;
    let format = req
        .settings
        .as_ref()
        .map(|s| s.file_format)
        .unwrap_or_default();

    match format {
        FileFormat::Pdf => pdf_response(&state, &req).await,
        FileFormat::Txt => Ok(attachment(
            render_plain_text(&req.resume_data).into_bytes(),
            "text/plain; charset=utf-8",
            &attachment_name(&req.resume_data, "txt"),
        )),
        FileFormat::Docx => Err(AppError::UnprocessableEntity(
            "DOCX export is not supported; choose pdf or txt".to_string(),
        )),
    }
}

#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub id: &'static str,
    pub name: &'static str,
}

/// GET /api/resume/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateSummary>> {
    Json(
        TemplateId::ALL
            .iter()
            .map(|t| TemplateSummary {
                id: t.as_str(),
                name: t.display_name(),
            })
            .collect(),
    )
}

/// GET /api/resume/sample
pub async fn handle_sample_resume() -> Json<Resume> {
    Json(Resume::sample())
}
