//! Transport layer for the MCP server.
//!
//! Two transports are supported:
//! - **STDIO**: standard input/output, the default MCP mode
//! - **HTTP**: stateless JSON-RPC over POST, framed as one-shot SSE responses
//!
//! Each transport handles the connection lifecycle and delegates message
//! processing to the MCP server handler.

mod config;
mod error;
mod service;

pub mod http;
pub mod stdio;

pub use config::{HttpConfig, TransportConfig};
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
