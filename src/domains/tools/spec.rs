//! Tool catalog entry type.
//!
//! The whole catalog is an explicit, immutable list of [`ToolSpec`] values
//! built once at registry construction. There is no global registration side
//! channel; transports receive the list and bind it however they frame calls.

use std::sync::Arc;

use futures::future::BoxFuture;
use rmcp::model::{CallToolResult, JsonObject, Tool};

use crate::core::client::HubSpotClient;

/// Handler closure for one tool.
///
/// Handlers never fail at the type level: every outcome, success or error,
/// is a [`CallToolResult`] envelope (see the `envelope` module).
pub type ToolHandler =
    Arc<dyn Fn(Arc<HubSpotClient>, JsonObject) -> BoxFuture<'static, CallToolResult> + Send + Sync>;

/// One catalog entry: name, description, parameter schema, handler.
#[derive(Clone)]
pub struct ToolSpec {
    /// Tool name as exposed to MCP clients.
    pub name: String,

    /// Human-readable description shown to clients.
    pub description: String,

    /// JSON Schema for the tool's arguments object.
    pub input_schema: Arc<JsonObject>,

    /// The handler invoked with validated arguments.
    pub handler: ToolHandler,
}

impl ToolSpec {
    /// Create a new catalog entry.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Arc<JsonObject>,
        handler: ToolHandler,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
            handler,
        }
    }

    /// Convert to the rmcp Tool model (metadata only).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.clone().into(),
            description: Some(self.description.clone().into()),
            input_schema: self.input_schema.clone(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

impl std::fmt::Debug for ToolSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolSpec")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}
