//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with its metadata (name,
//! description, arguments) and template string, then registered in
//! `registry.rs`.

mod deal_review;
mod import_contacts;
mod qualify_leads;

use rmcp::model::PromptArgument;

pub use deal_review::DealReviewPrompt;
pub use import_contacts::ImportContactsPrompt;
pub use qualify_leads::QualifyLeadsPrompt;

/// Trait for prompt definitions.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with {{variable}} placeholders.
    fn template() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;
}
