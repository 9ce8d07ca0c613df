use anyhow::Result;
use cliclack::spinner;
use gestell_tools::{GestellSearchTool, GestellTool};
use serde_json::json;

use super::gestell_config;
use crate::render;
use crate::GestellArgs;

pub async fn execute(args: &GestellArgs, query: &str) -> Result<()> {
    let config = gestell_config(args)?;
    let tool = GestellSearchTool::from_config(&config)?;

    let spin = spinner();
    spin.start("searching collection");
    let result = tool.run(json!({ "query": query })).await;
    spin.stop("");

    render::json(&result?);
    Ok(())
}
