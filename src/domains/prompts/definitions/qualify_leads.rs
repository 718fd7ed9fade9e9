//! Lead qualification prompt definition.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Guides a lead qualification pass over recent contacts.
pub struct QualifyLeadsPrompt;

impl PromptDefinition for QualifyLeadsPrompt {
    const NAME: &'static str = "qualify_leads";
    const DESCRIPTION: &'static str =
        "Qualify recent contacts as sales leads using CRM data";

    fn template() -> &'static str {
        r#"Qualify the most recent contacts in HubSpot as potential sales leads.

Steps:
1. Use crm_list_contacts to fetch up to {{#if limit}}{{limit}}{{else}}20{{/if}} recent contacts, requesting the email, company, jobtitle, and lifecyclestage properties.
2. For each contact, use crm_get_associations to find their associated companies, then crm_get_company for firmographics (industry, numberofemployees, annualrevenue).
3. Score each contact against {{#if criteria}}these criteria: {{criteria}}{{else}}standard BANT criteria (budget, authority, need, timeline) as far as the CRM data supports them{{/if}}.
4. For contacts that qualify, use crm_update_contact to set lifecyclestage appropriately, and summarize why each one qualified.

Present the results as a table: contact, company, score, recommended next action."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "limit".to_string(),
                title: None,
                description: Some("How many recent contacts to review (default 20)".to_string()),
                required: Some(false),
            },
            PromptArgument {
                name: "criteria".to_string(),
                title: None,
                description: Some("Custom qualification criteria to apply".to_string()),
                required: Some(false),
            },
        ]
    }
}
