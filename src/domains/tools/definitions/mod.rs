//! The tool catalog.
//!
//! Each submodule contributes the tools for one HubSpot API family;
//! [`all_tools`] assembles the full catalog in a stable order. Catalog
//! construction is cheap and side-effect free, so transports that build a
//! fresh registry per request can afford to call it every time.

mod associations;
mod common;
mod engagements;
mod oauth;
mod objects;
mod owners;
mod pipelines;
mod properties;
mod records;
mod subscriptions;
mod workflows;

use crate::core::config::CredentialsConfig;

use super::spec::ToolSpec;

/// Assemble the complete tool catalog.
///
/// The OAuth family closes over the configured credentials so its tools can
/// fall back to them when call arguments are omitted.
pub fn all_tools(credentials: &CredentialsConfig) -> Vec<ToolSpec> {
    let mut tools = Vec::with_capacity(116);
    tools.extend(records::tools());
    tools.extend(objects::tools());
    tools.extend(associations::tools());
    tools.extend(engagements::tools());
    tools.extend(properties::tools());
    tools.extend(pipelines::tools());
    tools.extend(owners::tools());
    tools.extend(workflows::tools());
    tools.extend(subscriptions::tools());
    tools.extend(oauth::tools(credentials));
    tools
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(all_tools(&CredentialsConfig::default()).len(), 116);
    }

    #[test]
    fn test_catalog_has_no_duplicate_names() {
        let mut names: Vec<String> = all_tools(&CredentialsConfig::default())
            .into_iter()
            .map(|t| t.name)
            .collect();
        let before = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn test_catalog_descriptions_are_nonempty() {
        for tool in all_tools(&CredentialsConfig::default()) {
            assert!(!tool.description.is_empty(), "{} has no description", tool.name);
        }
    }

    #[test]
    fn test_every_schema_is_an_object_schema() {
        for tool in all_tools(&CredentialsConfig::default()) {
            assert_eq!(
                tool.input_schema.get("type").and_then(|v| v.as_str()),
                Some("object"),
                "{} schema is not an object schema",
                tool.name
            );
        }
    }
}
