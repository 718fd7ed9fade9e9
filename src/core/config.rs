//! Configuration management for the HubSpot MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables or defaults. An explicitly constructed `Config`
//! always takes precedence over the environment: `from_env` is only consulted
//! when the caller asks for it, and it runs once per server construction,
//! never per tool call.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// HubSpot API credentials.
    pub credentials: CredentialsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Telemetry configuration.
    pub telemetry: TelemetryConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// HubSpot API credentials.
///
/// A private-app access token is the common case; the OAuth fields are only
/// needed by the `oauth_*` tools.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Private app access token (`HUBSPOT_ACCESS_TOKEN`).
    pub access_token: Option<String>,

    /// OAuth application client id.
    pub client_id: Option<String>,

    /// OAuth application client secret.
    pub client_secret: Option<String>,

    /// OAuth redirect URI.
    pub redirect_uri: Option<String>,

    /// OAuth refresh token.
    pub refresh_token: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("CredentialsConfig")
            .field("access_token", &redact(&self.access_token))
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .field("redirect_uri", &self.redirect_uri)
            .field("refresh_token", &redact(&self.refresh_token))
            .finish()
    }
}

impl CredentialsConfig {
    /// Build credentials holding only an access token.
    pub fn with_access_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            ..Self::default()
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Whether per-call instrumentation is emitted (`TELEMETRY_ENABLED`,
    /// default true).
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "hubspot-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            credentials: CredentialsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            telemetry: TelemetryConfig { enabled: true },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `HUBSPOT_ACCESS_TOKEN` and the `HUBSPOT_CLIENT_ID` /
    /// `HUBSPOT_CLIENT_SECRET` / `HUBSPOT_REDIRECT_URI` /
    /// `HUBSPOT_REFRESH_TOKEN` OAuth settings, plus `MCP_LOG_LEVEL`,
    /// `TELEMETRY_ENABLED`, and the transport variables (`MCP_TRANSPORT`,
    /// `PORT`, `MCP_HTTP_HOST`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(enabled) = std::env::var("TELEMETRY_ENABLED") {
            config.telemetry.enabled = enabled.to_lowercase() != "false" && enabled != "0";
        }

        config.transport = TransportConfig::from_env();

        config.credentials = CredentialsConfig {
            access_token: non_empty_env("HUBSPOT_ACCESS_TOKEN"),
            client_id: non_empty_env("HUBSPOT_CLIENT_ID"),
            client_secret: non_empty_env("HUBSPOT_CLIENT_SECRET"),
            redirect_uri: non_empty_env("HUBSPOT_REDIRECT_URI"),
            refresh_token: non_empty_env("HUBSPOT_REFRESH_TOKEN"),
        };

        if config.credentials.access_token.is_some() {
            info!("HubSpot access token loaded from environment");
        } else {
            warn!(
                "HUBSPOT_ACCESS_TOKEN not set - CRM tools will return a \
                 configuration error until a token is provided"
            );
        }

        config
    }
}

/// Read an environment variable, treating empty values as unset.
fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_access_token_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("HUBSPOT_ACCESS_TOKEN", "pat-na1-test");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.access_token.as_deref(),
            Some("pat-na1-test")
        );
        unsafe {
            std::env::remove_var("HUBSPOT_ACCESS_TOKEN");
        }
    }

    #[test]
    fn test_empty_token_treated_as_unset() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("HUBSPOT_ACCESS_TOKEN", "");
        }
        let config = Config::from_env();
        assert!(config.credentials.access_token.is_none());
        unsafe {
            std::env::remove_var("HUBSPOT_ACCESS_TOKEN");
        }
    }

    #[test]
    fn test_telemetry_disabled_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TELEMETRY_ENABLED", "false");
        }
        let config = Config::from_env();
        assert!(!config.telemetry.enabled);
        unsafe {
            std::env::remove_var("TELEMETRY_ENABLED");
        }
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            access_token: Some("super_secret_token".to_string()),
            client_secret: Some("super_secret_value".to_string()),
            ..CredentialsConfig::default()
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
        assert!(!debug_str.contains("super_secret_value"));
    }

    #[test]
    fn test_default_telemetry_enabled() {
        let config = Config::default();
        assert!(config.telemetry.enabled);
    }
}
