use anyhow::{Context, Result};
use std::env;

pub const OPENAI_HOST: &str = "https://api.openai.com";
pub const OPENAI_MODEL: &str = "gpt-4o-mini";
pub const OPENAI_TEMPERATURE: f32 = 0.2;

#[derive(Debug, Clone)]
pub struct OpenAiProviderConfig {
    pub host: String,
    pub api_key: String,
    pub model: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<i32>,
}

impl OpenAiProviderConfig {
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            host: OPENAI_HOST.to_string(),
            api_key: api_key.into(),
            model: OPENAI_MODEL.to_string(),
            temperature: Some(OPENAI_TEMPERATURE),
            max_tokens: None,
        }
    }

    /// Load configuration from `OPENAI_API_KEY`, `OPENAI_HOST`, `OPENAI_MODEL`
    /// and `OPENAI_TEMPERATURE`
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .context("Environment variable 'OPENAI_API_KEY' is required but not set.")?;

        let mut config = Self::new(api_key);
        if let Ok(host) = env::var("OPENAI_HOST") {
            config.host = host;
        }
        if let Ok(model) = env::var("OPENAI_MODEL") {
            config.model = model;
        }
        if let Ok(temperature) = env::var("OPENAI_TEMPERATURE") {
            config.temperature = Some(
                temperature
                    .parse()
                    .context("OPENAI_TEMPERATURE must be a number")?,
            );
        }

        Ok(config)
    }
}
