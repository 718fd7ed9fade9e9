//! Prompt registry: central registration of all prompts.

use super::definitions::{
    DealReviewPrompt, ImportContactsPrompt, PromptDefinition, QualifyLeadsPrompt,
};
use super::templates::PromptTemplate;

/// Build a PromptTemplate from a PromptDefinition.
fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate {
        name: P::NAME.to_string(),
        description: Some(P::DESCRIPTION.to_string()),
        arguments: P::arguments(),
        template: P::template().to_string(),
    }
}

/// Get all registered prompts as PromptTemplates.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        build_template::<QualifyLeadsPrompt>(),
        build_template::<ImportContactsPrompt>(),
        build_template::<DealReviewPrompt>(),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![
        QualifyLeadsPrompt::NAME,
        ImportContactsPrompt::NAME,
        DealReviewPrompt::NAME,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        assert_eq!(prompts.len(), 3);

        let names: Vec<_> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert!(names.contains(&"qualify_leads"));
        assert!(names.contains(&"import_contacts"));
        assert!(names.contains(&"deal_review"));
    }

    #[test]
    fn test_prompt_names_match_templates() {
        let template_names: Vec<String> =
            get_all_prompts().into_iter().map(|p| p.name).collect();
        for name in prompt_names() {
            assert!(template_names.contains(&name.to_string()));
        }
    }
}
