use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use super::util::validate_collection_id;
use super::{parse_arguments, GestellTool};
use crate::client::{GestellClient, PromptOptions, PromptRequest};
use crate::config::GestellConfig;
use crate::errors::{ToolError, ToolResult};
use crate::models::tool::Tool;

/// Arguments of a `gestell_prompt` call
#[derive(Debug, Clone, Deserialize)]
pub struct GestellPromptInput {
    /// Question or instruction to be answered using the Gestell collection
    pub prompt: String,
    #[serde(default)]
    pub collection_id: Option<String>,
}

/// Answers a question or instruction from the data in a Gestell collection
#[derive(Debug, Clone)]
pub struct GestellPromptTool {
    tool: Tool,
    client: Arc<GestellClient>,
    collection_id: String,
    options: PromptOptions,
}

impl GestellPromptTool {
    pub const NAME: &'static str = "gestell_prompt";

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
            "Use the Gestell collection to answer a question or fulfill an instruction.",
            json!({
                "type": "object",
                "required": ["prompt"],
                "properties": {
                    "prompt": {
                        "type": "string",
                        "description": "Question or instruction to be answered using the Gestell collection"
                    },
                    "collection_id": {
                        "type": "string",
                        "default": null,
                        "description": "Optional UUID of a different collection to ask."
                    }
                }
            }),
        );

        Self {
            tool,
            client,
            collection_id: collection_id.into(),
            options: PromptOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PromptOptions) -> Self {
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
impl GestellTool for GestellPromptTool {
    fn tool(&self) -> &Tool {
        &self.tool
    }

    async fn run(&self, arguments: Value) -> ToolResult<String> {
        let input: GestellPromptInput = parse_arguments(Self::NAME, arguments)?;
        let collection_id =
            validate_collection_id(&self.collection_id, input.collection_id.as_deref());

        let request = PromptRequest {
            prompt: input.prompt,
            options: self.options.clone(),
        };

        self.client
            .prompt(collection_id, &request)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, collection_id, "gestell prompt failed");
                ToolError::ExecutionError(format!("Gestell prompt failed: {}", e))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const COLLECTION: &str = "0b5b7a4e-7b4f-4c8e-9a51-2f0b1c7d9e10";
    const OTHER_COLLECTION: &str = "5d1f3c2a-9e8b-4a7d-8c6b-1a2b3c4d5e6f";

    fn prompt_tool(server: &MockServer) -> GestellPromptTool {
        let client = Arc::new(GestellClient::new("test-key", server.uri()).unwrap());
        GestellPromptTool::with_client(client, COLLECTION)
    }

    #[tokio::test]
    async fn test_prompt_returns_answer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/api/collection/{}/prompt", COLLECTION)))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(json!({"prompt": "Who signed the lease?", "cot": true})))
            .respond_with(ResponseTemplate::new(200).set_body_string("Jane Doe signed it."))
            .expect(1)
            .mount(&server)
            .await;

        let answer = prompt_tool(&server)
            .run(json!({"prompt": "Who signed the lease?"}))
            .await
            .unwrap();
        assert_eq!(answer, "Jane Doe signed it.");
    }

    #[tokio::test]
    async fn test_valid_override_is_used() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/api/collection/{}/prompt", OTHER_COLLECTION)))
            .respond_with(ResponseTemplate::new(200).set_body_string("from other"))
            .expect(1)
            .mount(&server)
            .await;

        let answer = prompt_tool(&server)
            .run(json!({"prompt": "hi", "collection_id": OTHER_COLLECTION}))
            .await
            .unwrap();
        assert_eq!(answer, "from other");
    }

    #[tokio::test]
    async fn test_wrong_argument_type() {
        let server = MockServer::start().await;

        let error = prompt_tool(&server)
            .run(json!({"prompt": 42}))
            .await
            .unwrap_err();
        assert!(matches!(error, ToolError::InvalidParameters(_)));
    }

    #[tokio::test]
    async fn test_failure_is_wrapped() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such collection"))
            .mount(&server)
            .await;

        match prompt_tool(&server).run(json!({"prompt": "hi"})).await {
            Err(ToolError::ExecutionError(msg)) => {
                assert!(msg.starts_with("Gestell prompt failed: Gestell API error: 404"));
            }
            other => panic!("Expected ExecutionError, got {:?}", other),
        }
    }

    #[test]
    fn test_run_blocking() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let server = runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(200).set_body_string("sync answer"))
                .mount(&server)
                .await;
            server
        });

        let answer = prompt_tool(&server)
            .run_blocking(json!({"prompt": "hi"}))
            .unwrap();
        assert_eq!(answer, "sync answer");
    }
}
