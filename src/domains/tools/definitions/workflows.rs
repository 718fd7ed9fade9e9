//! Workflow lookup tools (automation v4 flows API, read-only).

use serde_json::json;

use super::common::{object_schema, plan_handler, string_prop};
use crate::core::client::RequestPlan;
use crate::domains::tools::spec::ToolSpec;

/// All workflow tools.
pub fn tools() -> Vec<ToolSpec> {
    vec![list(), get()]
}

fn list() -> ToolSpec {
    ToolSpec::new(
        "crm_list_workflows",
        "List automation workflows (flows) with cursor paging.",
        object_schema(
            json!({
                "limit": string_prop("Maximum number of results per page"),
                "after": string_prop("Paging cursor token"),
            }),
            &[],
        ),
        plan_handler(|args| {
            Ok(RequestPlan::get("/automation/v4/flows")
                .query_opt("limit", args.optional_str("limit")?.map(str::to_owned))
                .query_opt("after", args.optional_str("after")?.map(str::to_owned)))
        }),
    )
}

fn get() -> ToolSpec {
    ToolSpec::new(
        "crm_get_workflow",
        "Retrieve a single automation workflow (flow) by ID.",
        object_schema(
            json!({"flowId": string_prop("The workflow (flow) ID")}),
            &["flowId"],
        ),
        plan_handler(|args| {
            let flow_id = args.require_str("flowId")?;
            Ok(RequestPlan::get(format!("/automation/v4/flows/{flow_id}")))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_workflow_tools() {
        assert_eq!(tools().len(), 2);
    }
}
