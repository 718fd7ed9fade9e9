//! MCP server implementation.
//!
//! The server handler implements the MCP protocol by delegating to the tool
//! registry and the prompt service. The tool catalog is table-driven: adding
//! a tool means adding a catalog entry under `domains/tools/definitions/`,
//! never touching this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::prompts::PromptService;
use crate::domains::tools::{ToolRegistry, build_tool_router};

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp and coordinates between
/// the tool registry and the prompt service. Construction is cheap: the
/// stateless HTTP transport builds a fresh server per request.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// The tool catalog with its HubSpot client.
    registry: Arc<ToolRegistry>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for rmcp-framed tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        Self::from_shared_config(Arc::new(config))
    }

    /// Create a server around an already-shared configuration.
    pub fn from_shared_config(config: Arc<Config>) -> Self {
        let registry = Arc::new(ToolRegistry::new(&config));
        let tool_router = build_tool_router::<Self>(&registry);

        Self {
            config,
            registry,
            prompt_service: Arc::new(PromptService::new()),
            tool_router,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Number of tools in the catalog.
    pub fn tool_count(&self) -> usize {
        self.registry.len()
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.registry
            .list_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// The outcome is always a normal tool result; failures travel inside
    /// the envelope text.
    pub async fn call_tool(&self, name: &str, arguments: serde_json::Value) -> serde_json::Value {
        let args = arguments.as_object().cloned().unwrap_or_default();
        let result = self.registry.call(name, args).await;
        serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        })
    }

    /// List all available prompts (for HTTP transport).
    pub async fn list_prompts(&self) -> Vec<serde_json::Value> {
        self.prompt_service
            .list_prompts()
            .await
            .into_iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "description": p.description,
                    "arguments": p.arguments
                })
            })
            .collect()
    }

    /// Get a prompt by name (for HTTP transport).
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, String> {
        let args = arguments.and_then(|v| {
            v.as_object().map(|obj| {
                obj.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
        });

        match self.prompt_service.get_prompt(name, args).await {
            Ok(result) => Ok(serde_json::json!({
                "description": result.description,
                "messages": result.messages
            })),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "HubSpot CRM server. Exposes the CRM objects, associations, engagements, \
                 properties, pipelines, owners, workflows, and communication preference APIs \
                 as tools. Configure HUBSPOT_ACCESS_TOKEN before calling CRM tools."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        let arguments = request.arguments.map(|map| {
            map.into_iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
                .collect()
        });
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> McpServer {
        McpServer::new(Config::default())
    }

    #[test]
    fn test_server_exposes_full_catalog() {
        let server = server();
        assert_eq!(server.tool_count(), 116);
        assert_eq!(server.list_tools().len(), 116);
    }

    #[test]
    fn test_server_identity() {
        let server = server();
        assert_eq!(server.name(), "hubspot-mcp-server");
        assert!(!server.version().is_empty());
    }

    #[test]
    fn test_get_info_advertises_tools_and_prompts() {
        let info = server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert!(info.instructions.is_some());
    }

    #[tokio::test]
    async fn test_http_call_tool_flattens_unknown_tool() {
        let value = server().call_tool("not_a_tool", serde_json::json!({})).await;
        assert_eq!(value["isError"], serde_json::json!(false));
        assert_eq!(
            value["content"][0]["text"],
            serde_json::json!("Tool not found: not_a_tool")
        );
    }

    #[tokio::test]
    async fn test_http_list_prompts() {
        let prompts = server().list_prompts().await;
        assert_eq!(prompts.len(), 3);
    }
}
