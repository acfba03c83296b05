use crate::controller::{extraction_controller, health_check_controller, ExtractionResponse};
use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Meeting Action Tracker API"
        ),
        paths(
            extraction_controller::create,
            health_check_controller::health_check,
        ),
        components(
            schemas(
                domain::TaskRecord,
                domain::SourceKind,
                extraction_controller::ExtractionRequest,
                ExtractionResponse,
            )
        ),
        tags(
            (name = "action_tracker", description = "Meeting Action-Item Extraction API")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(extraction_routes(app_state))
        .merge(health_routes())
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
}

fn extraction_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/extract-action-items",
            post(extraction_controller::create),
        )
        .with_state(app_state)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use clap::Parser;
    use meeting_nlp::providers::ffmpeg::FfmpegExtractor;
    use meeting_nlp::providers::rule_based::RuleBased;
    use meeting_nlp::providers::whisper::WhisperCli;
    use service::config::{ApiVersion, Config};
    use std::io::Write;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = Config::parse_from(["action_tracker_rs"]);
        let app_state = AppState::new(
            config,
            Arc::new(WhisperCli::new("whisper-cli", None)),
            Arc::new(FfmpegExtractor::new("ffmpeg")),
            Arc::new(RuleBased::new()),
        );
        define_routes(app_state)
    }

    #[tokio::test]
    async fn test_extract_action_items_returns_task_envelope() {
        let mut transcript = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            transcript,
            "Alice will complete the report by next Friday. The weather was nice."
        )
        .unwrap();

        let payload = serde_json::json!({
            "file_type": "text",
            "file_path": transcript.path().to_str().unwrap(),
        });
        let request = Request::builder()
            .method("POST")
            .uri("/extract-action-items")
            .header(ApiVersion::field_name(), ApiVersion::default_version())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["success"], serde_json::json!(true));
        let tasks = body["tasks"].as_array().expect("tasks array");
        assert_eq!(tasks.len(), 1);

        let task = &tasks[0];
        assert_eq!(
            task["description"],
            serde_json::json!("Alice will complete the report by next Friday.")
        );
        assert_eq!(task["assignee"], serde_json::json!(["Alice"]));
        assert_eq!(task["source"], serde_json::json!("text"));
        assert_eq!(task["confidence"].as_f64(), Some(0.9));

        let deadlines = task["deadline"].as_array().expect("deadline array");
        assert_eq!(deadlines.len(), 1);
        assert_ne!(deadlines[0], serde_json::json!("Not Specified"));
    }

    #[tokio::test]
    async fn test_extract_action_items_requires_version_header() {
        let request = Request::builder()
            .method("POST")
            .uri("/extract-action-items")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"file_type": "text", "file_path": "/tmp/notes.txt"}"#,
            ))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
