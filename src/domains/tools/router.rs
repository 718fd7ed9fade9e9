//! Bridge from the tool registry to rmcp's router.
//!
//! The stdio transport speaks MCP through rmcp's `ServerHandler`, which
//! dispatches tool calls via a [`ToolRouter`]. Each catalog entry becomes a
//! dynamic route whose closure captures the shared client and handler.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::registry::ToolRegistry;

/// Build an rmcp tool router over the registry's catalog.
pub fn build_tool_router<S: Send + Sync + 'static>(registry: &ToolRegistry) -> ToolRouter<S> {
    let mut router = ToolRouter::new();
    for spec in registry.tools() {
        let client = registry.client();
        let handler = spec.handler.clone();
        router.add_route(ToolRoute::new_dyn(
            spec.to_tool(),
            move |ctx: ToolCallContext<'_, S>| {
                let client = client.clone();
                let handler = handler.clone();
                let args = ctx.arguments.clone().unwrap_or_default();
                async move { Ok::<_, McpError>(handler(client, args).await) }.boxed()
            },
        ));
    }
    router
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    #[test]
    fn test_router_covers_the_whole_catalog() {
        let registry = ToolRegistry::new(&Config::default());
        let router: ToolRouter<()> = build_tool_router(&registry);
        assert_eq!(router.list_all().len(), registry.len());
    }

    #[test]
    fn test_router_preserves_tool_metadata() {
        let registry = ToolRegistry::new(&Config::default());
        let router: ToolRouter<()> = build_tool_router(&registry);
        let names: Vec<String> = router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        assert!(names.contains(&"crm_list_companies".to_string()));
        assert!(names.contains(&"oauth_get_access_token_info".to_string()));
    }
}
