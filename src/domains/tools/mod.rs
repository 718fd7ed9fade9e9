//! Tools domain: the HubSpot tool catalog, argument validation, response
//! envelopes, and dispatch.

pub mod args;
pub mod definitions;
pub mod envelope;
mod registry;
pub mod router;
mod spec;

pub use args::{ArgError, ToolArgs};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
pub use spec::{ToolHandler, ToolSpec};
