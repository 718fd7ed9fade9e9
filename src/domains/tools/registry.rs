//! Tool registry: catalog plus dispatch.
//!
//! The registry owns the catalog, an index for name lookup, and the shared
//! HubSpot client the handlers execute against. It is transport-agnostic:
//! the stdio transport builds one registry for the process lifetime, the
//! HTTP transport builds one per request.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{info, warn};

use crate::core::client::HubSpotClient;
use crate::core::config::Config;

use super::definitions;
use super::envelope;
use super::spec::ToolSpec;

/// The assembled tool catalog with its backing HubSpot client.
#[derive(Clone)]
pub struct ToolRegistry {
    client: Arc<HubSpotClient>,
    telemetry: bool,
    tools: Vec<ToolSpec>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Build the catalog and a production client from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_client(Arc::new(HubSpotClient::new(&config.credentials)), config)
    }

    /// Build the catalog around an existing client (lets tests point the
    /// registry at a stub backend).
    pub fn with_client(client: Arc<HubSpotClient>, config: &Config) -> Self {
        let tools = definitions::all_tools(&config.credentials);
        let index = tools
            .iter()
            .enumerate()
            .map(|(i, spec)| (spec.name.clone(), i))
            .collect();
        Self {
            client,
            telemetry: config.telemetry.enabled,
            tools,
            index,
        }
    }

    /// The catalog entries in registration order.
    pub fn tools(&self) -> &[ToolSpec] {
        &self.tools
    }

    /// The HubSpot client the handlers execute against.
    pub fn client(&self) -> Arc<HubSpotClient> {
        self.client.clone()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// The registered tool names in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|spec| spec.name.as_str()).collect()
    }

    /// The catalog as rmcp Tool metadata.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(ToolSpec::to_tool).collect()
    }

    /// Dispatch a tool call by name.
    ///
    /// An unknown name resolves to a diagnostic envelope, not an error; the
    /// envelope is the only channel outcomes travel on.
    pub async fn call(&self, name: &str, args: JsonObject) -> CallToolResult {
        let Some(&i) = self.index.get(name) else {
            warn!(tool = %name, "Unknown tool requested");
            return envelope::envelope(format!("Tool not found: {name}"));
        };
        if self.telemetry {
            info!(tool = %name, "Executing tool");
        }
        (self.tools[i].handler)(self.client.clone(), args).await
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tools.len())
            .field("telemetry", &self.telemetry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn registry() -> ToolRegistry {
        ToolRegistry::new(&Config::default())
    }

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(t) => t.text.clone(),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_registry_exposes_full_catalog() {
        let registry = registry();
        assert_eq!(registry.len(), 116);
        assert_eq!(registry.list_tools().len(), 116);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_known_names_are_indexed() {
        let registry = registry();
        let names = registry.tool_names();
        for expected in [
            "crm_list_companies",
            "crm_search_deals",
            "crm_create_association",
            "crm_create_note",
            "crm_list_pipelines",
            "crm_list_workflows",
            "oauth_refresh_access_token",
            "hubspot_get_account_info",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[tokio::test]
    async fn test_unknown_tool_resolves_to_envelope() {
        let result = registry().call("crm_no_such_tool", JsonObject::new()).await;
        assert_eq!(text_of(&result), "Tool not found: crm_no_such_tool");
    }

    #[tokio::test]
    async fn test_missing_arguments_fail_before_any_request() {
        // No token and an unroutable endpoint: reaching the network would
        // surface a different error than the validation text.
        let result = registry().call("crm_get_company", JsonObject::new()).await;
        assert_eq!(
            text_of(&result),
            "Invalid arguments: parameter 'companyId' is required"
        );
    }
}
