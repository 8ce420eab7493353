use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::warn;

use firstpass_common::FirstPassError;
use firstpass_filter::AnalysisSummary;

use crate::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    input_type: String,
    content: String,
    #[serde(default)]
    title: String,
}

/// Analyze a submitted article. Block verdicts are successful outcomes and
/// return 200; only acquisition and system failures map to error statuses.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalyzeRequest>,
) -> Response {
    match body.input_type.as_str() {
        "text" => {
            let record = state.pipeline.process_text(&body.content, &body.title);
            success(AnalysisSummary::from(&record))
        }
        "url" => match state.pipeline.process_url(body.content.trim()).await {
            Ok(record) => success(AnalysisSummary::from(&record)),
            Err(FirstPassError::Collection(msg)) => {
                warn!(error = %msg, "Collection failed");
                error_response(StatusCode::BAD_GATEWAY, &msg)
            }
            Err(e) => {
                warn!(error = %e, "Analysis failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
            }
        },
        other => error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            &format!("Unknown input type: {other}"),
        ),
    }
}

fn success(summary: AnalysisSummary) -> Response {
    Json(serde_json::json!({"status": "success", "result": summary})).into_response()
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({"status": "error", "message": message}))).into_response()
}
