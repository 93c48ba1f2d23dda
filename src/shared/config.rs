//! Application configuration. API credentials, model selection, timeouts.

use serde::Deserialize;

/// Default Gemini REST base. Model name is appended per request.
pub const DEFAULT_AI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model, matching what the hosted API serves cheaply.
pub const DEFAULT_AI_MODEL: &str = "gemini-1.5-flash";

/// Default HTTP timeout for a single generation request, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// AI API key. Read from QUIZFORGE_AI_API_KEY (or GEMINI_API_KEY).
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// AI API base URL. Defaults to the Gemini v1beta REST base. Read from QUIZFORGE_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// AI model name. Defaults to "gemini-1.5-flash". Read from QUIZFORGE_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// HTTP timeout per generation request in seconds (default 30). Read from QUIZFORGE_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("QUIZFORGE"));
        if let Ok(path) = std::env::var("QUIZFORGE_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let cfg: Self = c.build()?.try_deserialize()?;
        Ok(cfg)
    }

    /// Returns the AI API key if configured. Reads from config, QUIZFORGE_AI_API_KEY,
    /// or GEMINI_API_KEY (the name the hosted API documents).
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .clone()
            .or_else(|| std::env::var("QUIZFORGE_AI_API_KEY").ok())
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }

    /// Returns the AI API base URL. Defaults to the Gemini v1beta REST base.
    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .or_else(|| std::env::var("QUIZFORGE_AI_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_AI_API_URL.to_string())
    }

    /// Returns the AI model name. Defaults to "gemini-1.5-flash".
    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .or_else(|| std::env::var("QUIZFORGE_AI_MODEL").ok())
            .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string())
    }

    /// Returns the per-request HTTP timeout in seconds. Defaults to 30.
    pub fn request_timeout_secs_or_default(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    /// Returns true if AI is configured (API key present).
    pub fn is_ai_configured(&self) -> bool {
        self.ai_api_key().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.ai_api_url_or_default(), DEFAULT_AI_API_URL);
        assert_eq!(cfg.ai_model_or_default(), DEFAULT_AI_MODEL);
        assert_eq!(
            cfg.request_timeout_secs_or_default(),
            DEFAULT_REQUEST_TIMEOUT_SECS
        );
    }

    #[test]
    fn explicit_fields_win_over_defaults() {
        let cfg = AppConfig {
            ai_api_key: Some("k".into()),
            ai_api_url: Some("http://localhost:11434".into()),
            ai_model: Some("local-model".into()),
            request_timeout_secs: Some(5),
        };
        assert!(cfg.is_ai_configured());
        assert_eq!(cfg.ai_api_url_or_default(), "http://localhost:11434");
        assert_eq!(cfg.ai_model_or_default(), "local-model");
        assert_eq!(cfg.request_timeout_secs_or_default(), 5);
    }
}
