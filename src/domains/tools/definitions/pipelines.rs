//! Pipeline and stage lookup tools (pipelines v3 API, read-only).

use serde_json::{Value, json};

use super::common::{object_schema, plan_handler, string_prop};
use crate::core::client::RequestPlan;
use crate::domains::tools::spec::ToolSpec;

fn object_type_prop() -> Value {
    string_prop("The CRM object type the pipelines belong to (e.g. 'deals', 'tickets')")
}

fn pipeline_id_prop() -> Value {
    string_prop("The pipeline ID")
}

/// All pipeline tools.
pub fn tools() -> Vec<ToolSpec> {
    vec![list(), get(), list_stages(), get_stage()]
}

fn list() -> ToolSpec {
    ToolSpec::new(
        "crm_list_pipelines",
        "List the pipelines of a CRM object type.",
        object_schema(json!({"objectType": object_type_prop()}), &["objectType"]),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            Ok(RequestPlan::get(format!("/crm/v3/pipelines/{object_type}")))
        }),
    )
}

fn get() -> ToolSpec {
    ToolSpec::new(
        "crm_get_pipeline",
        "Retrieve a single pipeline with its stages.",
        object_schema(
            json!({
                "objectType": object_type_prop(),
                "pipelineId": pipeline_id_prop(),
            }),
            &["objectType", "pipelineId"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            let pipeline_id = args.require_str("pipelineId")?;
            Ok(RequestPlan::get(format!(
                "/crm/v3/pipelines/{object_type}/{pipeline_id}"
            )))
        }),
    )
}

fn list_stages() -> ToolSpec {
    ToolSpec::new(
        "crm_list_pipeline_stages",
        "List the stages of a pipeline in display order.",
        object_schema(
            json!({
                "objectType": object_type_prop(),
                "pipelineId": pipeline_id_prop(),
            }),
            &["objectType", "pipelineId"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            let pipeline_id = args.require_str("pipelineId")?;
            Ok(RequestPlan::get(format!(
                "/crm/v3/pipelines/{object_type}/{pipeline_id}/stages"
            )))
        }),
    )
}

fn get_stage() -> ToolSpec {
    ToolSpec::new(
        "crm_get_pipeline_stage",
        "Retrieve a single pipeline stage.",
        object_schema(
            json!({
                "objectType": object_type_prop(),
                "pipelineId": pipeline_id_prop(),
                "stageId": string_prop("The stage ID"),
            }),
            &["objectType", "pipelineId", "stageId"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            let pipeline_id = args.require_str("pipelineId")?;
            let stage_id = args.require_str("stageId")?;
            Ok(RequestPlan::get(format!(
                "/crm/v3/pipelines/{object_type}/{pipeline_id}/stages/{stage_id}"
            )))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_pipeline_tools() {
        assert_eq!(tools().len(), 4);
    }
}
