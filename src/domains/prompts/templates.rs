//! Prompt templates and rendering.
//!
//! Templates use a plain `{{variable}}` placeholder syntax. Rendering
//! substitutes provided arguments and strips placeholders left by omitted
//! optional arguments.

use std::collections::HashMap;

use rmcp::model::PromptArgument;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: &'static str,

    /// A description of what the prompt does.
    pub description: &'static str,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with `{{variable}}` placeholders.
    pub template: &'static str,
}

impl PromptTemplate {
    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> String {
        let mut result = self.template.to_string();

        for (key, value) in arguments {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        clean_unmatched_placeholders(&result)
    }
}

/// Remove placeholders for arguments that were not provided.
fn clean_unmatched_placeholders(template: &str) -> String {
    let mut result = template.to_string();

    while let Some(start) = result.find("{{") {
        let Some(end) = result[start..].find("}}") else {
            break;
        };
        result.replace_range(start..start + end + 2, "");
    }

    result
}

/// Declare a required prompt argument.
pub fn required_arg(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(true),
    }
}

/// Declare an optional prompt argument.
pub fn optional_arg(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(text: &'static str) -> PromptTemplate {
        PromptTemplate {
            name: "test",
            description: "test prompt",
            arguments: vec![],
            template: text,
        }
    }

    #[test]
    fn test_simple_substitution() {
        let mut args = HashMap::new();
        args.insert("domain".to_string(), "example.com".to_string());

        let result = template("Analyze {{domain}} please.").render(&args);
        assert_eq!(result, "Analyze example.com please.");
    }

    #[test]
    fn test_unmatched_placeholder_removed() {
        let result = template("Focus on {{market}} markets.").render(&HashMap::new());
        assert_eq!(result, "Focus on  markets.");
    }

    #[test]
    fn test_repeated_placeholder() {
        let mut args = HashMap::new();
        args.insert("kw".to_string(), "rust".to_string());

        let result = template("{{kw}} and {{kw}}").render(&args);
        assert_eq!(result, "rust and rust");
    }
}
