//! Deal review prompt definition.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Structures a pipeline review of open deals.
pub struct DealReviewPrompt;

impl PromptDefinition for DealReviewPrompt {
    const NAME: &'static str = "deal_review";
    const DESCRIPTION: &'static str = "Review the open deals in a pipeline stage";

    fn template() -> &'static str {
        r#"Run a deal review for {{#if pipeline}}pipeline {{pipeline}}{{else}}the default sales pipeline{{/if}}.

Steps:
1. Use crm_list_pipelines with objectType 'deals' to resolve the pipeline and its stages.
2. Use crm_search_deals to fetch open deals{{#if stage}} in stage {{stage}}{{/if}}, requesting dealname, amount, closedate, dealstage, and hubspot_owner_id.
3. For each deal, use crm_get_associations to pull the primary company and contacts, and crm_list_engagements context where it helps.
4. Flag deals that look at risk: past-due close dates, no recent activity, or missing amounts.

Summarize per stage: total value, deal count, and the at-risk deals with a suggested intervention for each."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "pipeline".to_string(),
                title: None,
                description: Some("The pipeline ID or label to review".to_string()),
                required: Some(false),
            },
            PromptArgument {
                name: "stage".to_string(),
                title: None,
                description: Some("Limit the review to a single stage".to_string()),
                required: Some(false),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_review_metadata() {
        assert_eq!(DealReviewPrompt::NAME, "deal_review");
        assert!(DealReviewPrompt::template().contains("crm_search_deals"));
    }
}
