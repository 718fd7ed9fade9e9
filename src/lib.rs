//! HubSpot MCP Server Library
//!
//! This crate exposes the HubSpot CRM REST API as a catalog of callable
//! Model Context Protocol (MCP) tools, reachable over STDIO or HTTP.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the HubSpot HTTP client, the
//!   main server handler, and the transport layer
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the CRM tool catalog (list/get/create/update/search/batch
//!     operations per resource type) and its registry
//!   - **prompts**: reusable CRM workflow prompt templates
//!
//! # Example
//!
//! ```rust,no_run
//! use hubspot_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
