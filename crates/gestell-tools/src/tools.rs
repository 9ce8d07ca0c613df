//! Tool adapters exposing Gestell collection queries to a tool-calling model.
//!
//! Each adapter owns its [`Tool`] definition and forwards the call
//! arguments to one Gestell API call, handing the result back as text.
pub mod prompt;
pub mod search;
pub mod util;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{ToolError, ToolResult};
use crate::models::tool::Tool;

#[async_trait]
pub trait GestellTool: Send + Sync {
    /// The definition handed to the model
    fn tool(&self) -> &Tool;

    /// Execute the tool with the arguments of a tool call
    async fn run(&self, arguments: Value) -> ToolResult<String>;

    /// Execute the tool to completion on a private runtime.
    ///
    /// Must not be called from within an async context; use [`GestellTool::run`] there.
    fn run_blocking(&self, arguments: Value) -> ToolResult<String> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ToolError::Internal(format!("Failed to start runtime: {}", e)))?;
        runtime.block_on(self.run(arguments))
    }
}

/// Deserialize tool call arguments into the adapter's input type
pub(crate) fn parse_arguments<T: DeserializeOwned>(tool: &str, arguments: Value) -> ToolResult<T> {
    serde_json::from_value(arguments)
        .map_err(|e| ToolError::InvalidParameters(format!("{}: {}", tool, e)))
}
