//! Contact import prompt definition.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Walks through importing a batch of contacts from pasted data.
pub struct ImportContactsPrompt;

impl PromptDefinition for ImportContactsPrompt {
    const NAME: &'static str = "import_contacts";
    const DESCRIPTION: &'static str =
        "Import a pasted list of contacts into HubSpot with deduplication";

    fn template() -> &'static str {
        r#"Import the following contact data into HubSpot:

{{data}}

Steps:
1. Parse the data into one record per contact, mapping columns to HubSpot property names (email, firstname, lastname, phone, company, jobtitle). Keep unmapped columns as custom properties.
2. Deduplicate against existing records: use crm_search_contacts with an EQ filter on email for each parsed address, and drop rows that already exist.
3. Create the remaining contacts with crm_batch_create_contacts, batching at most 100 inputs per call.
{{#if company}}4. Associate every created contact with company {{company}} using crm_batch_create_associations.{{/if}}

Report how many contacts were created, skipped as duplicates, or failed to parse."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "data".to_string(),
                title: None,
                description: Some("The raw contact data (CSV, TSV, or free text)".to_string()),
                required: Some(true),
            },
            PromptArgument {
                name: "company".to_string(),
                title: None,
                description: Some("A company record ID to associate the contacts with".to_string()),
                required: Some(false),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_contacts_metadata() {
        assert_eq!(ImportContactsPrompt::NAME, "import_contacts");
        let args = ImportContactsPrompt::arguments();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].required, Some(true));
        assert_eq!(args[1].required, Some(false));
    }
}
