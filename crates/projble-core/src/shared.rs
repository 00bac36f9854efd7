//! Shared types used across the chatbot crates.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Service name reported by the health endpoint.
pub const DEFAULT_SERVICE_NAME: &str = "PROJ-BLE Chatbot";

/// Default generation endpoint (Ollama-compatible `/api/generate`).
pub const DEFAULT_LLM_BASE_URL: &str = "https://ollama.vedardha.shop";

/// Default model identifier sent to the generation endpoint.
pub const DEFAULT_LLM_MODEL: &str = "qwen2:7b";

/// Classification of a question: about PROJ-BLE, or general (education) knowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Domain,
    General,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Domain => "domain",
            QuestionKind::General => "general",
        }
    }
}

/// Mode for LLM invocation: live (calls the generation endpoint) or mock (deterministic, offline).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmMode {
    #[default]
    Live,
    Mock,
}

/// Outbound generation settings. Defaults are the fixed values the chatbot ships with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
    /// Whole-request timeout in seconds; expiry counts as a connection failure.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LLM_BASE_URL.to_string(),
            model: DEFAULT_LLM_MODEL.to_string(),
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 500,
            timeout_secs: 30,
        }
    }
}

/// Global application configuration (gateway + generation client). Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Reported as `service` by `/health`.
    pub service_name: String,
    pub host: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Directory holding `templates/index.html`, `test.html` and `static/`.
    pub frontend_dir: String,
    #[serde(default)]
    pub llm_mode: LlmMode,
    #[serde(default)]
    pub llm: LlmConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            host: "127.0.0.1".to_string(),
            port: 5001,
            frontend_dir: ".".to_string(),
            llm_mode: LlmMode::Live,
            llm: LlmConfig::default(),
        }
    }
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: env `PROJBLE__*` > `PROJBLE_CONFIG` path
    /// (default `config/gateway.toml`) > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("PROJBLE_CONFIG").unwrap_or_else(|_| "config/gateway.toml".to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Same as [`CoreConfig::load`] with an explicit file path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let builder = config::Config::builder()
            .set_default("service_name", defaults.service_name)?
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("frontend_dir", defaults.frontend_dir)?
            .set_default("llm_mode", "live")?
            .set_default("llm.base_url", defaults.llm.base_url)?
            .set_default("llm.model", defaults.llm.model)?
            .set_default("llm.temperature", f64::from(defaults.llm.temperature))?
            .set_default("llm.top_p", f64::from(defaults.llm.top_p))?
            .set_default("llm.max_tokens", i64::from(defaults.llm.max_tokens))?
            .set_default("llm.timeout_secs", defaults.llm.timeout_secs as i64)?;

        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("PROJBLE").separator("__"))
            .build()?;

        built.try_deserialize()
    }

    /// Pre-flight checks for values the type system does not rule out.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("port must be non-zero".to_string());
        }
        if self.llm_mode == LlmMode::Live
            && !(self.llm.base_url.starts_with("http://") || self.llm.base_url.starts_with("https://"))
        {
            return Err(format!("llm.base_url is not an http(s) URL: {}", self.llm.base_url));
        }
        if self.llm.model.trim().is_empty() {
            return Err("llm.model is empty".to_string());
        }
        if self.llm.timeout_secs == 0 {
            return Err("llm.timeout_secs must be non-zero".to_string());
        }
        Ok(())
    }
}
