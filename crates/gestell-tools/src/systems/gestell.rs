use anyhow::Result as AnyhowResult;
use async_trait::async_trait;
use indoc::indoc;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

use super::System;
use crate::client::GestellClient;
use crate::config::GestellConfig;
use crate::errors::{ToolError, ToolResult};
use crate::models::content::Content;
use crate::models::tool::{Tool, ToolCall};
use crate::tools::prompt::GestellPromptTool;
use crate::tools::search::GestellSearchTool;
use crate::tools::GestellTool;

/// Bundles the Gestell search and prompt tools for one collection
#[derive(Clone)]
pub struct GestellSystem {
    tools: Vec<Tool>,
    search: GestellSearchTool,
    prompt: GestellPromptTool,
}

impl GestellSystem {
    pub fn new(config: &GestellConfig) -> AnyhowResult<Self> {
        let client = Arc::new(GestellClient::from_config(config)?);
        Ok(Self::with_client(client, config.collection_id.clone()))
    }

    pub fn with_client<S: Into<String>>(client: Arc<GestellClient>, collection_id: S) -> Self {
        let collection_id = collection_id.into();
        let search = GestellSearchTool::with_client(client.clone(), collection_id.clone());
        let prompt = GestellPromptTool::with_client(client, collection_id);

        Self::from_tools(search, prompt)
    }

    /// Build the system from individually configured tools
    pub fn from_tools(search: GestellSearchTool, prompt: GestellPromptTool) -> Self {
        Self {
            tools: vec![search.tool().clone(), prompt.tool().clone()],
            search,
            prompt,
        }
    }
}

#[async_trait]
impl System for GestellSystem {
    fn name(&self) -> &str {
        "gestell"
    }

    fn description(&self) -> &str {
        "Search and question answering over a Gestell data collection"
    }

    fn instructions(&self) -> &str {
        indoc! {"
            Use gestell_search to find passages in the Gestell collection that are relevant to a query;
            results carry the content, a citation and the reason it matched.
            Use gestell_prompt to have the collection answer a question or fulfill an instruction directly.
            Prefer citing the returned sources when answering from search results.
        "}
    }

    fn tools(&self) -> &[Tool] {
        &self.tools
    }

    async fn status(&self) -> AnyhowResult<HashMap<String, Value>> {
        Ok(HashMap::from([
            ("collection_id".to_string(), json!(self.search.collection_id())),
            ("api_url".to_string(), json!(self.search.api_url())),
        ]))
    }

    async fn call(&self, tool_call: ToolCall) -> ToolResult<Vec<Content>> {
        let output = match tool_call.name.as_str() {
            GestellSearchTool::NAME => self.search.run(tool_call.arguments).await?,
            GestellPromptTool::NAME => self.prompt.run(tool_call.arguments).await?,
            _ => return Err(ToolError::ToolNotFound(tool_call.name)),
        };

        Ok(vec![Content::text(output)])
    }
}
