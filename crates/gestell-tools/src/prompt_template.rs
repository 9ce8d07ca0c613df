use serde::Serialize;
use tera::{Context, Error as TeraError, Tera};

const SYSTEM_PROMPT: &str = include_str!("prompts/system.md");

pub fn load_prompt<T: Serialize>(template: &str, context_data: &T) -> Result<String, TeraError> {
    let mut tera = Tera::default();
    tera.add_raw_template("inline_template", template)?;
    let context = Context::from_serialize(context_data)?;
    let rendered = tera.render("inline_template", &context)?;
    Ok(rendered)
}

/// Render the bundled agent system prompt
pub fn load_system_prompt<T: Serialize>(context_data: &T) -> Result<String, TeraError> {
    load_prompt(SYSTEM_PROMPT, context_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_load_prompt() {
        let template = "Hello, {{ name }}! You are {{ age }} years old.";
        let mut context = HashMap::new();
        context.insert("name".to_string(), "Alice".to_string());
        context.insert("age".to_string(), 30.to_string());

        let result = load_prompt(template, &context).unwrap();
        assert_eq!(result, "Hello, Alice! You are 30 years old.");
    }

    #[test]
    fn test_load_prompt_missing_variable() {
        let template = "Hello, {{ name }}! You are {{ age }} years old.";
        let mut context = HashMap::new();
        context.insert("name".to_string(), "Alice".to_string());
        let result = load_prompt(template, &context);
        assert!(result.is_err());
    }

    #[test]
    fn test_system_prompt_lists_systems() {
        let context = json!({
            "systems": [{
                "name": "gestell",
                "description": "Gestell search",
                "instructions": "Use gestell_search."
            }]
        });

        let prompt = load_system_prompt(&context).unwrap();
        assert!(prompt.contains("## gestell"));
        assert!(prompt.contains("Use gestell_search."));
    }
}
