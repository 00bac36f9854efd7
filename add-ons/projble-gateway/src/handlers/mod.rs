//! HTTP handlers for the chat gateway.

pub(crate) mod chat;

use crate::AppState;
use axum::extract::State;

/// ISO-8601 local time with offset, microsecond precision.
pub(crate) fn timestamp() -> String {
    chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, false)
}

/// GET /health – liveness check for the chat page and scripts.
pub(crate) async fn health(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "healthy",
        "timestamp": timestamp(),
        "service": state.config.service_name,
    }))
}
