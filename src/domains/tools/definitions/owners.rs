//! Owner lookup tools (owners v3 API, read-only).

use serde_json::json;

use super::common::{boolean_prop, object_schema, plan_handler, string_prop};
use crate::core::client::RequestPlan;
use crate::domains::tools::spec::ToolSpec;

/// All owner tools.
pub fn tools() -> Vec<ToolSpec> {
    vec![list(), get()]
}

fn list() -> ToolSpec {
    ToolSpec::new(
        "crm_list_owners",
        "List CRM owners (users that records can be assigned to), optionally filtered by email.",
        object_schema(
            json!({
                "email": string_prop("Only return the owner with this email address"),
                "limit": string_prop("Maximum number of results per page"),
                "after": string_prop("Paging cursor token"),
                "archived": boolean_prop("Whether to return only archived owners"),
            }),
            &[],
        ),
        plan_handler(|args| {
            Ok(RequestPlan::get("/crm/v3/owners")
                .query_opt("email", args.optional_str("email")?.map(str::to_owned))
                .query_opt("limit", args.optional_str("limit")?.map(str::to_owned))
                .query_opt("after", args.optional_str("after")?.map(str::to_owned))
                .query_opt("archived", args.optional_bool("archived")?.map(|v| v.to_string())))
        }),
    )
}

fn get() -> ToolSpec {
    ToolSpec::new(
        "crm_get_owner",
        "Retrieve a single CRM owner by ID.",
        object_schema(
            json!({"ownerId": string_prop("The owner ID")}),
            &["ownerId"],
        ),
        plan_handler(|args| {
            let owner_id = args.require_str("ownerId")?;
            Ok(RequestPlan::get(format!("/crm/v3/owners/{owner_id}")))
        }),
    )
}
