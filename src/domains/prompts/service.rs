//! Prompt service implementation.
//!
//! The PromptService maintains the registry of available prompts and handles
//! listing, argument validation, and template rendering.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::info;

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;

/// Service for managing and instantiating prompts.
pub struct PromptService {
    /// Registry of available prompts, keyed by name.
    prompts: HashMap<String, PromptTemplate>,
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptService {
    /// Create a new PromptService with all registered prompts.
    pub fn new() -> Self {
        let mut service = Self {
            prompts: HashMap::new(),
        };
        for template in get_all_prompts() {
            service.register_prompt(template);
        }
        service
    }

    /// Register a prompt template.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        info!("Registering prompt: {}", template.name);
        self.prompts.insert(template.name.clone(), template);
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .values()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with arguments substituted.
    pub async fn get_prompt(
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

        let content = template.render(&arguments)?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prompt_service_registers_catalog() {
        let service = PromptService::new();
        let prompts = service.list_prompts().await;
        assert_eq!(prompts.len(), 3);
    }

    #[tokio::test]
    async fn test_get_prompt_with_arguments() {
        let service = PromptService::new();

        let mut args = HashMap::new();
        args.insert("data".to_string(), "email\na@b.com".to_string());

        let result = service.get_prompt("import_contacts", Some(args)).await.unwrap();
        assert_eq!(result.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_get_prompt_missing_required_argument() {
        let service = PromptService::new();
        let result = service.get_prompt("import_contacts", None).await;
        assert!(matches!(result, Err(PromptError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let service = PromptService::new();
        let result = service.get_prompt("nonexistent", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_optional_arguments_fall_back_to_defaults() {
        let service = PromptService::new();
        let result = service.get_prompt("deal_review", None).await.unwrap();
        let text = match &result.messages[0].content {
            rmcp::model::PromptMessageContent::Text { text } => text.clone(),
            other => panic!("expected text message, got {other:?}"),
        };
        assert!(text.contains("the default sales pipeline"));
    }
}
