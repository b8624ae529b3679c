// GET / and GET /health — liveness endpoints, always 200.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub const ROOT_MESSAGE: &str = "Multimodal Analyzer API is running! Use /analyze to post data.";

/// GET / — banner message.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": ROOT_MESSAGE }))
}

/// GET /health — load balancer health check.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}
