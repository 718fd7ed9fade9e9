//! OAuth and account introspection tools.
//!
//! These close over the configured credentials so callers can omit
//! parameters the server already knows. The token-refresh call is the one
//! plan in the catalog that runs unauthenticated: it exists to obtain an
//! access token and carries the client credentials in its form body.

use serde_json::json;

use super::common::{object_schema, plan_handler, string_prop};
use crate::core::client::RequestPlan;
use crate::core::config::CredentialsConfig;
use crate::domains::tools::args::{ArgError, ToolArgs};
use crate::domains::tools::spec::ToolSpec;

/// All OAuth and account tools.
pub fn tools(credentials: &CredentialsConfig) -> Vec<ToolSpec> {
    vec![
        token_info(credentials),
        refresh_token(credentials),
        account_info(),
    ]
}

fn argument_or_config(
    args: &ToolArgs,
    key: &str,
    configured: &Option<String>,
) -> Result<String, ArgError> {
    if let Some(value) = args.optional_str(key)? {
        return Ok(value.to_string());
    }
    configured
        .clone()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ArgError::Missing(key.to_string()))
}

fn token_info(credentials: &CredentialsConfig) -> ToolSpec {
    let configured_token = credentials.access_token.clone();
    ToolSpec::new(
        "oauth_get_access_token_info",
        "Inspect an OAuth access token (scopes, hub ID, expiry). Defaults to the configured token.",
        object_schema(
            json!({"token": string_prop("The access token to inspect (defaults to the configured one)")}),
            &[],
        ),
        plan_handler(move |args| {
            let token = argument_or_config(args, "token", &configured_token)?;
            Ok(RequestPlan::get(format!("/oauth/v1/access-tokens/{token}")))
        }),
    )
}

fn refresh_token(credentials: &CredentialsConfig) -> ToolSpec {
    let client_id = credentials.client_id.clone();
    let client_secret = credentials.client_secret.clone();
    let configured_refresh = credentials.refresh_token.clone();
    ToolSpec::new(
        "oauth_refresh_access_token",
        "Exchange a refresh token for a new access token. Defaults to the configured app \
         credentials and refresh token.",
        object_schema(
            json!({
                "clientId": string_prop("The OAuth app client ID (defaults to the configured one)"),
                "clientSecret": string_prop("The OAuth app client secret (defaults to the configured one)"),
                "refreshToken": string_prop("The refresh token to exchange (defaults to the configured one)"),
            }),
            &[],
        ),
        plan_handler(move |args| {
            let form = vec![
                ("grant_type".to_string(), "refresh_token".to_string()),
                (
                    "client_id".to_string(),
                    argument_or_config(args, "clientId", &client_id)?,
                ),
                (
                    "client_secret".to_string(),
                    argument_or_config(args, "clientSecret", &client_secret)?,
                ),
                (
                    "refresh_token".to_string(),
                    argument_or_config(args, "refreshToken", &configured_refresh)?,
                ),
            ];
            Ok(RequestPlan::post("/oauth/v1/token").unauthenticated().form(form))
        }),
    )
}

fn account_info() -> ToolSpec {
    ToolSpec::new(
        "hubspot_get_account_info",
        "Retrieve details about the connected HubSpot account (portal ID, tier, time zone).",
        object_schema(json!({}), &[]),
        plan_handler(|_args| Ok(RequestPlan::get("/account-info/v3/details"))),
    )
}
