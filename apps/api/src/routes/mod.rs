pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pdf::handlers as pdf;
use crate::state::AppState;
use crate::storage::handlers as storage;
use crate::suggestions::handlers as suggestions;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Rendering and export
        .route("/api/resume/generate-pdf", post(pdf::handle_generate_pdf))
        .route("/api/resume/preview", post(pdf::handle_preview))
        .route("/api/resume/export", post(pdf::handle_export))
        .route("/api/resume/templates", get(pdf::handle_list_templates))
        .route("/api/resume/sample", get(pdf::handle_sample_resume))
        // AI suggestions
        .route("/api/resume/llm-review", post(suggestions::handle_llm_review))
        .route(
            "/api/resume/chat-assistant",
            post(suggestions::handle_chat_assistant),
        )
        .route(
            "/api/resume/apply-suggestion",
            post(suggestions::handle_apply_suggestion),
        )
        // Saved resumes
        .route("/api/resumes", post(storage::handle_create_resume))
        .route(
            "/api/resumes/:id",
            get(storage::handle_get_resume)
                .put(storage::handle_update_resume)
                .delete(storage::handle_delete_resume),
        )
        .route(
            "/api/users/:user_id/resumes",
            get(storage::handle_list_user_resumes),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::models::Resume;
    use crate::pdf::testing::{FakeLauncher, FAKE_PDF};
    use crate::pdf::PdfExporter;
    use crate::render::fixtures::jane_doe;
    use crate::storage::InMemoryResumeStore;

    fn app(launcher: &FakeLauncher) -> Router {
        build_router(AppState {
            store: Arc::new(InMemoryResumeStore::new()),
            pdf: PdfExporter::new(Arc::new(launcher.clone())),
            llm: None,
        })
    }

    fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, req: Request<Body>) -> Response {
        app.clone().oneshot(req).await.unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    fn render_body(template: &str) -> Value {
        json!({ "resumeData": jane_doe(), "template": template })
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(&FakeLauncher::new());
        let response = send(&app, request(Method::GET, "/health", None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-api");
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_pdf_returns_attachment() {
        let launcher = FakeLauncher::new();
        let app = app(&launcher);
        let response = send(
            &app,
            request(Method::POST, "/api/resume/generate-pdf", Some(render_body("minimal"))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Jane_Doe_Resume.pdf\""
        );
        assert_eq!(body_bytes(response).await, FAKE_PDF);
        assert_eq!(launcher.live_sessions(), 0);
        assert!(launcher.rendered_html()[0].contains("<title>Jane Doe - Resume</title>"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_pdf_failure_is_500_with_message() {
        let launcher = FakeLauncher::new().failing_launches(u32::MAX);
        let app = app(&launcher);
        let response = send(
            &app,
            request(Method::POST, "/api/resume/generate-pdf", Some(render_body("modern"))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Could not generate PDF");
        assert_eq!(launcher.launch_calls(), 4);
    }

    #[tokio::test]
    async fn test_generate_pdf_rejects_missing_personal_field() {
        let launcher = FakeLauncher::new();
        let app = app(&launcher);
        let mut body = render_body("classic");
        body["resumeData"]["personalInfo"]["email"] = json!("  ");
        let response = send(&app, request(Method::POST, "/api/resume/generate-pdf", Some(body))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(launcher.launch_calls(), 0);
    }

    #[tokio::test]
    async fn test_absent_personal_field_is_400_with_error_body() {
        let launcher = FakeLauncher::new();
        let app = app(&launcher);
        let mut body = render_body("modern");
        body["resumeData"]["personalInfo"]
            .as_object_mut()
            .unwrap()
            .remove("email");
        let response = send(&app, request(Method::POST, "/api/resume/generate-pdf", Some(body))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["message"], "personalInfo.email is required");
        assert_eq!(launcher.launch_calls(), 0);
    }

    #[tokio::test]
    async fn test_absent_personal_info_rejected_on_create() {
        let app = app(&FakeLauncher::new());
        let response = send(
            &app,
            request(
                Method::POST,
                "/api/resumes",
                Some(json!({ "userId": "u", "title": "t", "content": { "skills": ["Go"] } })),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_out_of_range_settings_rejected() {
        let app = app(&FakeLauncher::new());
        let mut body = render_body("classic");
        body["settings"] = json!({ "fontSize": 20 });
        let response = send(&app, request(Method::POST, "/api/resume/preview", Some(body))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_preview_returns_html() {
        let app = app(&FakeLauncher::new());
        let response = send(
            &app,
            request(Method::POST, "/api/resume/preview", Some(render_body("jakegut"))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Jane Doe"));
    }

    #[tokio::test]
    async fn test_export_formats() {
        let launcher = FakeLauncher::new();
        let app = app(&launcher);

        let mut txt = render_body("classic");
        txt["settings"] = json!({ "fileFormat": "txt" });
        let response = send(&app, request(Method::POST, "/api/resume/export", Some(txt))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Jane_Doe_Resume.txt\""
        );
        let text = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(text.starts_with("Jane Doe\n"));

        let mut docx = render_body("classic");
        docx["settings"] = json!({ "fileFormat": "docx" });
        let response = send(&app, request(Method::POST, "/api/resume/export", Some(docx))).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(launcher.launch_calls(), 0);
    }

    #[tokio::test]
    async fn test_templates_and_sample() {
        let app = app(&FakeLauncher::new());

        let templates = body_json(send(&app, request(Method::GET, "/api/resume/templates", None)).await).await;
        let ids: Vec<&str> = templates
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["modern", "classic", "minimal", "creative", "jakegut"]);

        let sample = send(&app, request(Method::GET, "/api/resume/sample", None)).await;
        let resume: Resume = serde_json::from_slice(&body_bytes(sample).await).unwrap();
        assert_eq!(resume, Resume::sample());
    }

    #[tokio::test]
    async fn test_ai_endpoints_fall_back_without_client() {
        let app = app(&FakeLauncher::new());

        let review = send(
            &app,
            request(
                Method::POST,
                "/api/resume/llm-review",
                Some(json!({ "resumeData": Resume::sample() })),
            ),
        )
        .await;
        assert_eq!(review.status(), StatusCode::OK);
        let body = body_json(review).await;
        assert_eq!(body["suggestions"][0]["section"], "summary");

        let chat = send(
            &app,
            request(
                Method::POST,
                "/api/resume/chat-assistant",
                Some(json!({
                    "resumeData": Resume::sample(),
                    "messages": [{ "role": "user", "content": "Help?" }]
                })),
            ),
        )
        .await;
        assert_eq!(chat.status(), StatusCode::OK);
        let body = body_json(chat).await;
        assert!(body["response"]["message"].as_str().unwrap().len() > 20);
    }

    #[tokio::test]
    async fn test_apply_suggestion_endpoint() {
        let app = app(&FakeLauncher::new());
        let response = send(
            &app,
            request(
                Method::POST,
                "/api/resume/apply-suggestion",
                Some(json!({
                    "resumeData": jane_doe(),
                    "section": "summary",
                    "suggestion": "Backend engineer."
                })),
            ),
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(body["applied"], true);
        assert_eq!(body["resumeData"]["summary"], "Backend engineer.");
    }

    #[tokio::test]
    async fn test_resume_crud_lifecycle() {
        let app = app(&FakeLauncher::new());
        let record = json!({
            "userId": "user-1",
            "title": "Backend roles",
            "template": "minimal",
            "content": jane_doe()
        });

        let created = send(&app, request(Method::POST, "/api/resumes", Some(record.clone()))).await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let created = body_json(created).await;
        let id = created["id"].as_u64().unwrap();
        assert_eq!(created["template"], "minimal");

        let mut replacement = record.clone();
        replacement["title"] = json!("Platform roles");
        let updated = send(
            &app,
            request(Method::PUT, &format!("/api/resumes/{id}"), Some(replacement)),
        )
        .await;
        assert_eq!(updated.status(), StatusCode::OK);

        let listed = body_json(send(&app, request(Method::GET, "/api/users/user-1/resumes", None)).await).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["title"], "Platform roles");

        let deleted = send(&app, request(Method::DELETE, &format!("/api/resumes/{id}"), None)).await;
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

        let missing = send(&app, request(Method::GET, &format!("/api/resumes/{id}"), None)).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(missing).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_content() {
        let app = app(&FakeLauncher::new());
        let mut content = serde_json::to_value(jane_doe()).unwrap();
        content["personalInfo"]["firstName"] = json!("");
        let response = send(
            &app,
            request(
                Method::POST,
                "/api/resumes",
                Some(json!({ "userId": "u", "title": "t", "content": content })),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
