use anyhow::Result;
use cliclack::spinner;
use gestell_tools::{GestellPromptTool, GestellTool};
use serde_json::json;

use super::gestell_config;
use crate::render;
use crate::GestellArgs;

pub async fn execute(args: &GestellArgs, prompt: &str) -> Result<()> {
    let config = gestell_config(args)?;
    let tool = GestellPromptTool::from_config(&config)?;

    let spin = spinner();
    spin.start("asking collection");
    let result = tool.run(json!({ "prompt": prompt })).await;
    spin.stop("");

    render::markdown(&result?);
    Ok(())
}
