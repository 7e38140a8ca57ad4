//! Prompt service implementation.
//!
//! The PromptService holds the registered prompt templates, filtered by the
//! `ENABLED_PROMPTS` allow-list, and handles listing and argument
//! substitution for the MCP prompt endpoints.

use std::collections::HashMap;

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use tracing::{info, warn};

use crate::core::config::PromptsConfig;

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;

/// Service for managing and instantiating prompts.
pub struct PromptService {
    /// Registry of available prompts, keyed by name.
    prompts: HashMap<&'static str, PromptTemplate>,
}

impl PromptService {
    /// Create a new PromptService. An empty or absent allow-list enables
    /// every registered prompt; unknown names are warned about and ignored.
    pub fn new(config: &PromptsConfig) -> Self {
        let enabled = config.enabled.as_deref().filter(|names| !names.is_empty());

        let mut prompts = HashMap::new();
        for template in get_all_prompts() {
            let keep = match enabled {
                Some(names) => names.iter().any(|name| name.as_str() == template.name),
                None => true,
            };
            if keep {
                prompts.insert(template.name, template);
            }
        }

        if let Some(names) = enabled {
            for name in names {
                if !prompts.contains_key(name.as_str()) {
                    warn!(prompt = %name, "unknown prompt in ENABLED_PROMPTS; skipping");
                }
            }
        }

        info!(count = prompts.len(), "prompts registered");
        Self { prompts }
    }

    /// List all available prompts.
    pub fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .values()
            .map(|template| Prompt {
                name: template.name.to_string(),
                title: None,
                description: Some(template.description.to_string()),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with arguments substituted.
    pub fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();

        for arg in &template.arguments {
            if arg.required.unwrap_or(false) && !arguments.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        let content = template.render(&arguments);

        Ok(GetPromptResult {
            description: Some(template.description.to_string()),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}
