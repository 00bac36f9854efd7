//! Chat handler: trims the inbound message, runs it through the question router and wraps the
//! answer with a timestamp and its classification.
//!
//! Generation failures never reach this layer (the generator answers with fallback text).
//! Unreadable bodies and panics become a 500 with a generic apology.

use super::timestamp;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use projble_core::QuestionKind;
use std::any::Any;

pub(crate) const PROMPT_FOR_INPUT: &str =
    "Please ask me a question about PROJ-BLE or education in general.";
pub(crate) const INTERNAL_ERROR_APOLOGY: &str =
    "I apologize, but I encountered an error processing your request. Please try again.";

#[derive(Debug, serde::Serialize)]
struct ChatResponse {
    response: String,
    timestamp: String,
    #[serde(rename = "type")]
    kind: QuestionKind,
}

/// POST /chat
pub(crate) async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Map<String, serde_json::Value>>, JsonRejection>,
) -> Response {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::error!(error = %rejection, "chat request body unreadable");
            return internal_error_response();
        }
    };

    // Missing and null both mean "no message"; any other non-string is a bad request.
    let message = match body.get("message") {
        None | Some(serde_json::Value::Null) => "",
        Some(serde_json::Value::String(s)) => s.trim(),
        Some(other) => {
            tracing::error!(message = %other, "chat message is not a string");
            return internal_error_response();
        }
    };
    if message.is_empty() {
        return Json(serde_json::json!({
            "response": PROMPT_FOR_INPUT,
            "timestamp": timestamp(),
        }))
        .into_response();
    }

    tracing::info!("Chat request received: {} chars", message.len());
    let answer = state.router.route(message).await;
    tracing::info!(kind = answer.kind.as_str(), "Chat response ready");

    Json(ChatResponse {
        response: answer.text,
        timestamp: timestamp(),
        kind: answer.kind,
    })
    .into_response()
}

fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "response": INTERNAL_ERROR_APOLOGY,
            "timestamp": timestamp(),
            "error": true,
        })),
    )
        .into_response()
}

/// Panic hook for `CatchPanicLayer`: same payload as any other internal fault.
pub(crate) fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "chat handler panicked");
    internal_error_response()
}
