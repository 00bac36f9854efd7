//! Generation client: frames a general education question and sends it to an Ollama-style
//! `/api/generate` endpoint (or a deterministic mock), always yielding user-facing text.

use projble_core::{CoreConfig, Generator, LlmConfig, LlmMode};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

const GENERATE_PATH: &str = "/api/generate";

/// 200 response without a usable `response` field.
pub const FALLBACK_NO_RESPONSE: &str =
    "I apologize, but I could not generate a response at this time.";
/// Endpoint answered with a non-success status.
pub const FALLBACK_STATUS: &str =
    "I'm currently experiencing technical difficulties. Please try again later.";
/// Endpoint unreachable, timed out, the transfer broke, or the body was not JSON.
pub const FALLBACK_NETWORK: &str = "I'm currently unable to connect to the AI service. However, I can still help you with questions about PROJ-BLE! Try asking about our mission, vision, values, or careers.";
/// Anything else.
pub const FALLBACK_UNEXPECTED: &str = "I apologize for the technical difficulty. Please try asking a question about PROJ-BLE, or try your general education question again in a moment.";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation endpoint returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("generation endpoint unreachable: {0}")]
    Network(#[from] reqwest::Error),
    #[error("generation reply is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected generation reply: {0}")]
    Unexpected(String),
}

impl GenerationError {
    /// Fixed text shown to the user in place of a generated answer.
    pub fn fallback_text(&self) -> &'static str {
        match self {
            GenerationError::Status(_) => FALLBACK_STATUS,
            GenerationError::Network(_) | GenerationError::Decode(_) => FALLBACK_NETWORK,
            GenerationError::Unexpected(_) => FALLBACK_UNEXPECTED,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    options: GenerationOptions,
}

#[derive(Debug, Serialize)]
struct GenerationOptions {
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

/// Wraps the raw question in the educational framing sent to the model.
pub fn build_prompt(question: &str) -> String {
    format!(
        "You are an expert in education. Please provide a comprehensive and professional answer to this education-related question: {}\n\nPlease structure your response clearly and focus on educational concepts, theories, and practical applications.",
        question
    )
}

/// Sends general questions to the configured generation endpoint. One attempt per call, no retries.
pub struct GenerationClient {
    mode: LlmMode,
    llm: LlmConfig,
    http: reqwest::Client,
}

impl GenerationClient {
    pub fn new(mode: LlmMode, llm: LlmConfig) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(llm.timeout_secs))
            .build()?;
        Ok(Self { mode, llm, http })
    }

    pub fn from_config(config: &CoreConfig) -> Result<Self, GenerationError> {
        Self::new(config.llm_mode, config.llm.clone())
    }

    pub fn mode(&self) -> LlmMode {
        self.mode
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.llm.base_url.trim_end_matches('/'), GENERATE_PATH)
    }

    /// Mock LLM: deterministic text echoing a preview of the question.
    fn mock_generate(&self, question: &str) -> String {
        let preview: String = question.chars().take(80).collect();
        let ellipsis = if question.chars().count() > 80 { "…" } else { "" };
        format!(
            "[Generated – Mock LLM]\n\nYou asked: \"{}{}\". A live model would answer this education question here.",
            preview, ellipsis
        )
    }

    /// Single POST to `{base_url}/api/generate`. `Ok` carries either the model's text or
    /// [`FALLBACK_NO_RESPONSE`] when the reply has no string `response` field.
    pub async fn try_generate(&self, question: &str) -> Result<String, GenerationError> {
        let body = GenerationRequest {
            model: &self.llm.model,
            prompt: build_prompt(question),
            stream: false,
            options: GenerationOptions {
                temperature: self.llm.temperature,
                top_p: self.llm.top_p,
                max_tokens: self.llm.max_tokens,
            },
        };

        let res = self.http.post(self.endpoint()).json(&body).send().await?;
        let status = res.status();
        if status != reqwest::StatusCode::OK {
            return Err(GenerationError::Status(status));
        }

        let bytes = res.bytes().await?;
        let reply: serde_json::Value = serde_json::from_slice(&bytes)?;
        let reply = reply
            .as_object()
            .ok_or_else(|| GenerationError::Unexpected("reply is not a JSON object".to_string()))?;

        Ok(reply
            .get("response")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| FALLBACK_NO_RESPONSE.to_string()))
    }
}

#[async_trait::async_trait]
impl Generator for GenerationClient {
    async fn generate(&self, question: &str) -> String {
        match self.mode {
            LlmMode::Mock => self.mock_generate(question),
            LlmMode::Live => match self.try_generate(question).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(error = %e, "generation failed, answering with fallback");
                    e.fallback_text().to_string()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn live_client(base_url: String, timeout_secs: u64) -> GenerationClient {
        let llm = LlmConfig {
            base_url,
            timeout_secs,
            ..LlmConfig::default()
        };
        GenerationClient::new(LlmMode::Live, llm).unwrap()
    }

    #[tokio::test]
    async fn test_sends_fixed_options_and_returns_response_text() {
        // The fake endpoint echoes the request body back as the generated text.
        let app = Router::new().route(
            "/api/generate",
            post(|Json(body): Json<serde_json::Value>| async move {
                Json(serde_json::json!({ "response": body.to_string(), "done": true }))
            }),
        );
        let base = serve(app).await;
        let client = live_client(format!("{}/", base), 30);

        let text = client.generate("What is formative assessment?").await;
        let sent: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(sent["model"], "qwen2:7b");
        assert_eq!(sent["stream"], false);
        assert_eq!(sent["options"]["max_tokens"], 500);
        assert!((sent["options"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert!((sent["options"]["top_p"].as_f64().unwrap() - 0.9).abs() < 1e-6);
        let prompt = sent["prompt"].as_str().unwrap();
        assert!(prompt.starts_with("You are an expert in education."));
        assert!(prompt.contains("question: What is formative assessment?"));
    }

    #[tokio::test]
    async fn test_missing_response_field_uses_no_response_fallback() {
        let app = Router::new().route(
            "/api/generate",
            post(|| async { Json(serde_json::json!({ "done": true })) }),
        );
        let client = live_client(serve(app).await, 30);
        assert_eq!(client.generate("q").await, FALLBACK_NO_RESPONSE);
    }

    #[tokio::test]
    async fn test_non_success_status_uses_status_fallback() {
        let app = Router::new().route(
            "/api/generate",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model crashed") }),
        );
        let client = live_client(serve(app).await, 30);
        let err = client.try_generate("q").await.unwrap_err();
        assert!(matches!(err, GenerationError::Status(s) if s.as_u16() == 500));
        assert_eq!(client.generate("q").await, FALLBACK_STATUS);
    }

    #[tokio::test]
    async fn test_connection_refused_uses_network_fallback() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = live_client(format!("http://{}", addr), 30);
        assert_eq!(client.generate("What is pedagogy?").await, FALLBACK_NETWORK);
    }

    #[tokio::test]
    async fn test_timeout_counts_as_network_failure() {
        let app = Router::new().route(
            "/api/generate",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(serde_json::json!({ "response": "too late" }))
            }),
        );
        let client = live_client(serve(app).await, 1);
        assert_eq!(client.generate("q").await, FALLBACK_NETWORK);
    }

    #[tokio::test]
    async fn test_undecodable_body_uses_network_fallback() {
        let app = Router::new().route("/api/generate", post(|| async { "not json at all" }));
        let client = live_client(serve(app).await, 30);
        let err = client.try_generate("q").await.unwrap_err();
        assert!(matches!(err, GenerationError::Decode(_)));
        assert_eq!(client.generate("q").await, FALLBACK_NETWORK);
    }

    #[tokio::test]
    async fn test_non_object_reply_uses_unexpected_fallback() {
        let app = Router::new().route(
            "/api/generate",
            post(|| async { Json(serde_json::json!(["not", "an", "object"])) }),
        );
        let client = live_client(serve(app).await, 30);
        assert_eq!(client.generate("q").await, FALLBACK_UNEXPECTED);
    }

    #[tokio::test]
    async fn test_mock_mode_never_touches_network() {
        let llm = LlmConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..LlmConfig::default()
        };
        let client = GenerationClient::new(LlmMode::Mock, llm).unwrap();
        let text = client.generate("What is blended learning?").await;
        assert!(text.starts_with("[Generated – Mock LLM]"));
        assert!(text.contains("What is blended learning?"));
    }
}
