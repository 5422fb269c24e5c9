use crate::error::{AppError, Result};
use crate::middleware::cors::is_valid_origin;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config/app.yml";
pub const DEFAULT_LOG_CONFIG_PATH: &str = "config/log4rs.yml";

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout: u64,
    #[serde(default = "default_client_request_timeout")]
    pub client_request_timeout: u64,
}

fn default_client_request_timeout() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocalesConfig {
    pub default: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:8080".to_string(), "http://127.0.0.1:8080".to_string()]
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { allowed_origins: default_allowed_origins() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    #[serde(default)]
    pub api_key: String,
    pub timeout_secs: u64,
    #[serde(default)]
    pub max_retries: u32,
    #[serde(default)]
    pub retry_backoff_ms: u64,
    #[serde(default)]
    pub temperature: Option<f32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub locales: LocalesConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    pub llm: LlmConfig,
}

impl AppConfig {
    pub fn load(config_path: &str) -> anyhow::Result<Self> {
        let config_file = std::fs::File::open(config_path)?;
        let config: Self = serde_yaml::from_reader(config_file)?;
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Applies `OPENAI_API_KEY`, `OPENAI_MODEL` and `ALLOWED_ORIGINS` on top of the file values.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("OPENAI_API_KEY") {
            self.llm.api_key = key;
        }
        if let Some(model) = lookup("OPENAI_MODEL").filter(|m| !m.trim().is_empty()) {
            self.llm.model = model;
        }
        if let Some(origins) = lookup("ALLOWED_ORIGINS").filter(|o| !o.trim().is_empty()) {
            self.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            return Err(AppError::Config("OPENAI_API_KEY is not set".to_string()));
        }
        if self.llm.model.trim().is_empty() {
            return Err(AppError::Config("llm.model must not be empty".to_string()));
        }
        let supported = rust_i18n::available_locales!();
        if !supported.iter().any(|l| l.to_string() == self.locales.default) {
            return Err(AppError::Config(format!(
                "Unsupported default locale: {}",
                self.locales.default
            )));
        }
        if self.cors.allowed_origins.is_empty() {
            return Err(AppError::Config("cors.allowed_origins must not be empty".to_string()));
        }
        if let Some(origin) = self.cors.allowed_origins.iter().find(|o| !is_valid_origin(o)) {
            return Err(AppError::Config(format!("Invalid CORS origin: {}", origin)));
        }
        Ok(())
    }
}
