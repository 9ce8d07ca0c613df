use anyhow::{Context, Result};
use cliclack::{input, spinner};
use console::style;
use futures::TryStreamExt;
use std::io::ErrorKind;

use gestell_tools::agent::Agent;
use gestell_tools::models::message::{Message, MessageContent};
use gestell_tools::providers::configs::OpenAiProviderConfig;
use gestell_tools::providers::openai::OpenAiProvider;
use gestell_tools::GestellSystem;

use super::gestell_config;
use crate::render;
use crate::GestellArgs;

pub async fn execute(args: &GestellArgs, model: Option<String>) -> Result<()> {
    let config = gestell_config(args)?;

    let mut provider_config = OpenAiProviderConfig::from_env()
        .context("The chat command needs OPENAI_API_KEY to reach the model.")?;
    if let Some(model) = model {
        provider_config.model = model;
    }

    let mut agent = Agent::new(Box::new(OpenAiProvider::new(provider_config)?));
    agent.add_system(Box::new(GestellSystem::new(&config)?));

    println!(
        "Gestell Chat Agent ready {}",
        style("- Ctrl-C to exit").dim()
    );
    println!(
        "{}",
        style(format!("collection {}", config.collection_id)).dim()
    );

    let mut messages: Vec<Message> = Vec::new();
    loop {
        let user_input: String = match input("You ▸").placeholder("").interact() {
            Ok(text) => text,
            Err(e) if matches!(e.kind(), ErrorKind::Interrupted | ErrorKind::UnexpectedEof) => {
                break;
            }
            Err(e) => return Err(e.into()),
        };

        let user_input = user_input.trim();
        if user_input.is_empty() {
            continue;
        }

        messages.push(Message::user().with_text(user_input));

        let mut spin = spinner();
        spin.start("awaiting reply");
        let mut stream = agent.reply(&messages).await?;
        let mut replies = Vec::new();
        while let Some(message) = stream.try_next().await? {
            spin.stop("");
            render_message(&message);
            replies.push(message);
            spin = spinner();
            spin.start("awaiting reply");
        }
        spin.stop("");
        drop(stream);

        messages.extend(replies);
    }

    println!("\nThanks for trying Gestell, learn more at: https://gestell.ai");
    Ok(())
}

fn render_message(message: &Message) {
    for content in &message.content {
        match content {
            MessageContent::Text(text) if !text.text.is_empty() => {
                println!("{}", style("Assistant ▸").bold());
                render::markdown(&text.text);
            }
            MessageContent::ToolRequest(request) => {
                if let Ok(call) = &request.tool_call {
                    let arguments = serde_json::to_string_pretty(&call.arguments)
                        .unwrap_or_else(|_| call.arguments.to_string());
                    render::tool_request(&arguments, &call.name);
                }
            }
            MessageContent::ToolResponse(response) => {
                if let Err(e) = &response.tool_result {
                    println!("{}", style(format!("tool failed: {}", e)).red());
                }
            }
            _ => {}
        }
    }
}
