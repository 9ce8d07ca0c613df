use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use super::util::validate_collection_id;
use super::{parse_arguments, GestellTool};
use crate::client::{GestellClient, SearchOptions, SearchRequest};
use crate::config::GestellConfig;
use crate::errors::{ToolError, ToolResult};
use crate::models::tool::Tool;

/// Arguments of a `gestell_search` call
#[derive(Debug, Clone, Deserialize)]
pub struct GestellSearchInput {
    /// Search query to find relevant information in the Gestell collection
    pub query: String,
    #[serde(default)]
    pub collection_id: Option<String>,
}

/// Searches a Gestell collection for documents relevant to a query
#[derive(Debug, Clone)]
pub struct GestellSearchTool {
    tool: Tool,
    client: Arc<GestellClient>,
    collection_id: String,
    options: SearchOptions,
}

impl GestellSearchTool {
    pub const NAME: &'static str = "gestell_search";

    /// Build the tool, resolving missing credentials from the environment
    pub fn new(api_key: Option<String>, collection_id: Option<String>) -> Result<Self> {
        let config = GestellConfig::new(api_key, collection_id)?;
        Self::from_config(&config)
    }

    pub fn from_config(config: &GestellConfig) -> Result<Self> {
        let client = Arc::new(GestellClient::from_config(config)?);
        Ok(Self::with_client(client, config.collection_id.clone()))
    }

    pub fn with_client<S: Into<String>>(client: Arc<GestellClient>, collection_id: S) -> Self {
        let tool = Tool::new(
            Self::NAME,
            "Search the Gestell data collection for relevant content by query.",
            json!({
                "type": "object",
                "required": ["query"],
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query to find relevant information in the Gestell collection"
                    },
                    "collection_id": {
                        "type": "string",
                        "default": null,
                        "description": "Optional UUID of a different collection to search."
                    }
                }
            }),
        );

        Self {
            tool,
            client,
            collection_id: collection_id.into(),
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    pub fn api_url(&self) -> &str {
        self.client.api_url()
    }
}

#[async_trait]
impl GestellTool for GestellSearchTool {
    fn tool(&self) -> &Tool {
        &self.tool
    }

    async fn run(&self, arguments: Value) -> ToolResult<String> {
        let input: GestellSearchInput = parse_arguments(Self::NAME, arguments)?;
        let collection_id =
            validate_collection_id(&self.collection_id, input.collection_id.as_deref());

        let request = SearchRequest {
            prompt: input.query,
            options: self.options.clone(),
        };

        let response = self
            .client
            .search(collection_id, &request)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, collection_id, "gestell search failed");
                ToolError::ExecutionError(format!("Gestell search failed: {}", e))
            })?;

        serde_json::to_string_pretty(&response).map_err(|e| ToolError::Internal(e.to_string()))
    }
}
