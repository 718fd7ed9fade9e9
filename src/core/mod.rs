//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the server:
//! configuration, error handling, the outbound HubSpot API client, the main
//! server handler, and transport layer abstractions.

pub mod client;
pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use client::{ApiOutcome, ClientError, HubSpotClient, RequestPlan};
pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
