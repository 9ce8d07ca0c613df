use config::{Config, Environment};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://platform.gestell.ai";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Gestell API key must be provided (via argument or GESTELL_API_KEY env var).")]
    MissingApiKey,

    #[error("A Gestell collection_id is required (via argument or GESTELL_COLLECTION_ID env var).")]
    MissingCollectionId,

    #[error("Invalid Gestell API url '{url}': {source}")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

/// Everything a Gestell tool needs to reach its collection
#[derive(Debug, Clone, PartialEq)]
pub struct GestellConfig {
    pub api_key: String,
    pub collection_id: String,
    pub api_url: String,
}

#[derive(Debug, Deserialize)]
struct GestellSettings {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    collection_id: Option<String>,
    #[serde(default = "default_api_url")]
    api_url: String,
}

impl GestellConfig {
    /// Resolve the configuration. Explicit arguments win over the
    /// `GESTELL_API_KEY` / `GESTELL_COLLECTION_ID` / `GESTELL_API_URL`
    /// environment variables; empty values count as unset.
    pub fn new(
        api_key: Option<String>,
        collection_id: Option<String>,
    ) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("api_url", default_api_url())?
            .add_source(
                Environment::with_prefix("GESTELL")
                    .prefix_separator("_")
                    .ignore_empty(true)
                    .try_parsing(false),
            )
            .set_override_option("api_key", non_empty(api_key))?
            .set_override_option("collection_id", non_empty(collection_id))?
            .build()?;

        let settings: GestellSettings = config.try_deserialize()?;

        let api_key = non_empty(settings.api_key).ok_or(ConfigError::MissingApiKey)?;
        let collection_id =
            non_empty(settings.collection_id).ok_or(ConfigError::MissingCollectionId)?;

        validate_api_url(&settings.api_url)?;

        tracing::debug!(collection_id = %collection_id, api_url = %settings.api_url, "resolved gestell config");

        Ok(Self {
            api_key,
            collection_id,
            api_url: settings.api_url,
        })
    }

    /// Resolve the configuration from the environment alone
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(None, None)
    }

    /// Point the configuration at another deployment
    pub fn with_api_url<S: Into<String>>(mut self, api_url: S) -> Result<Self, ConfigError> {
        let api_url = api_url.into();
        validate_api_url(&api_url)?;
        self.api_url = api_url;
        Ok(self)
    }
}

fn validate_api_url(api_url: &str) -> Result<(), ConfigError> {
    Url::parse(api_url).map_err(|source| ConfigError::InvalidApiUrl {
        url: api_url.to_string(),
        source,
    })?;
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
