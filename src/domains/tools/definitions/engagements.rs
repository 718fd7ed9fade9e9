//! Engagement tools (engagements v1 API).
//!
//! The raw engagement tools pass the v1 payload shape through unmodified;
//! `crm_create_note` and `crm_create_task` are conveniences that assemble
//! the engagement envelope from flat parameters.

use serde_json::{Map, Value, json};

use super::common::{integer_prop, object_prop, object_schema, plan_handler, string_prop};
use crate::core::client::RequestPlan;
use crate::domains::tools::args::{ArgError, ToolArgs};
use crate::domains::tools::spec::ToolSpec;

/// All engagement tools.
pub fn tools() -> Vec<ToolSpec> {
    vec![
        create(),
        get(),
        update(),
        delete(),
        list(),
        create_note(),
        create_task(),
    ]
}

fn create() -> ToolSpec {
    ToolSpec::new(
        "crm_create_engagement",
        "Create an engagement (note, task, meeting, call, or email) with a raw v1 payload.",
        object_schema(
            json!({
                "engagement": object_prop("The engagement envelope ({type, timestamp, ownerId, ...})"),
                "associations": object_prop(
                    "Record IDs to associate ({contactIds, companyIds, dealIds, ticketIds})"
                ),
                "metadata": object_prop("Type-specific metadata (e.g. {body} for a note)"),
            }),
            &["engagement"],
        ),
        plan_handler(|args| {
            let mut body = Map::new();
            body.insert(
                "engagement".to_string(),
                Value::Object(args.require_object("engagement")?.clone()),
            );
            if let Some(associations) = args.optional_object("associations")? {
                body.insert("associations".to_string(), Value::Object(associations.clone()));
            }
            if let Some(metadata) = args.optional_object("metadata")? {
                body.insert("metadata".to_string(), Value::Object(metadata.clone()));
            }
            Ok(RequestPlan::post("/engagements/v1/engagements").body(Value::Object(body)))
        }),
    )
}

fn get() -> ToolSpec {
    ToolSpec::new(
        "crm_get_engagement",
        "Retrieve a single engagement by ID.",
        object_schema(
            json!({"engagementId": string_prop("The engagement ID")}),
            &["engagementId"],
        ),
        plan_handler(|args| {
            let id = args.require_str("engagementId")?;
            Ok(RequestPlan::get(format!("/engagements/v1/engagements/{id}")))
        }),
    )
}

fn update() -> ToolSpec {
    ToolSpec::new(
        "crm_update_engagement",
        "Update an engagement's envelope and/or metadata.",
        object_schema(
            json!({
                "engagementId": string_prop("The engagement ID"),
                "engagement": object_prop("Engagement envelope fields to update"),
                "metadata": object_prop("Type-specific metadata fields to update"),
            }),
            &["engagementId"],
        ),
        plan_handler(|args| {
            let id = args.require_str("engagementId")?;
            let mut body = Map::new();
            if let Some(engagement) = args.optional_object("engagement")? {
                body.insert("engagement".to_string(), Value::Object(engagement.clone()));
            }
            if let Some(metadata) = args.optional_object("metadata")? {
                body.insert("metadata".to_string(), Value::Object(metadata.clone()));
            }
            Ok(RequestPlan::patch(format!("/engagements/v1/engagements/{id}"))
                .body(Value::Object(body)))
        }),
    )
}

fn delete() -> ToolSpec {
    ToolSpec::new(
        "crm_delete_engagement",
        "Delete an engagement.",
        object_schema(
            json!({"engagementId": string_prop("The engagement ID")}),
            &["engagementId"],
        ),
        plan_handler(|args| {
            let id = args.require_str("engagementId")?;
            Ok(RequestPlan::delete(format!("/engagements/v1/engagements/{id}")))
        }),
    )
}

fn list() -> ToolSpec {
    ToolSpec::new(
        "crm_list_engagements",
        "List engagements with offset-based paging.",
        object_schema(
            json!({
                "limit": integer_prop("Maximum number of results per page (max 250)"),
                "offset": integer_prop("Offset returned by the previous page"),
            }),
            &[],
        ),
        plan_handler(|args| {
            Ok(RequestPlan::get("/engagements/v1/engagements/paged")
                .query_opt("limit", args.optional_u64("limit")?.map(|v| v.to_string()))
                .query_opt("offset", args.optional_u64("offset")?.map(|v| v.to_string())))
        }),
    )
}

/// Collect the optional association ID arrays shared by the note and task
/// conveniences.
fn association_body(args: &ToolArgs) -> Result<Map<String, Value>, ArgError> {
    let mut associations = Map::new();
    for key in ["contactIds", "companyIds", "dealIds", "ticketIds"] {
        if let Some(ids) = args.optional_array(key)? {
            associations.insert(key.to_string(), Value::Array(ids.clone()));
        }
    }
    Ok(associations)
}

fn id_array_prop(description: &str) -> Value {
    json!({
        "type": "array",
        "items": {"type": "number"},
        "description": description,
    })
}

fn association_props() -> Value {
    json!({
        "contactIds": id_array_prop("Contact IDs to associate"),
        "companyIds": id_array_prop("Company IDs to associate"),
        "dealIds": id_array_prop("Deal IDs to associate"),
        "ticketIds": id_array_prop("Ticket IDs to associate"),
    })
}

fn create_note() -> ToolSpec {
    let mut props = association_props();
    if let Some(map) = props.as_object_mut() {
        map.insert(
            "body".to_string(),
            string_prop("The note body (HTML allowed)"),
        );
    }
    ToolSpec::new(
        "crm_create_note",
        "Create a note engagement attached to the given records.",
        object_schema(props, &["body"]),
        plan_handler(|args| {
            let note_body = args.require_str("body")?;
            let body = json!({
                "engagement": {"type": "NOTE"},
                "associations": association_body(args)?,
                "metadata": {"body": note_body},
            });
            Ok(RequestPlan::post("/engagements/v1/engagements").body(body))
        }),
    )
}

fn create_task() -> ToolSpec {
    let mut props = association_props();
    if let Some(map) = props.as_object_mut() {
        map.insert("subject".to_string(), string_prop("The task subject line"));
        map.insert("body".to_string(), string_prop("The task body"));
        map.insert(
            "status".to_string(),
            string_prop("Task status: NOT_STARTED, IN_PROGRESS, or COMPLETED"),
        );
    }
    ToolSpec::new(
        "crm_create_task",
        "Create a task engagement attached to the given records.",
        object_schema(props, &["subject"]),
        plan_handler(|args| {
            let subject = args.require_str("subject")?;
            let mut metadata = Map::new();
            metadata.insert("subject".to_string(), json!(subject));
            if let Some(task_body) = args.optional_str("body")? {
                metadata.insert("body".to_string(), json!(task_body));
            }
            metadata.insert(
                "status".to_string(),
                json!(args.optional_str("status")?.unwrap_or("NOT_STARTED")),
            );
            let body = json!({
                "engagement": {"type": "TASK"},
                "associations": association_body(args)?,
                "metadata": metadata,
            });
            Ok(RequestPlan::post("/engagements/v1/engagements").body(body))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(value: Value) -> ToolArgs {
        ToolArgs::new(value.as_object().cloned().unwrap_or_default())
    }

    #[test]
    fn test_seven_engagement_tools() {
        assert_eq!(tools().len(), 7);
    }

    #[test]
    fn test_association_body_includes_only_present_keys() {
        let a = args(json!({"contactIds": [1, 2], "body": "hi"}));
        let associations = association_body(&a).unwrap();
        assert_eq!(associations.len(), 1);
        assert_eq!(associations["contactIds"], json!([1, 2]));
    }
}
