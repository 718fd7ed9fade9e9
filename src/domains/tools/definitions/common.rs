//! Shared helpers for tool definitions.
//!
//! Most catalog entries are a name, a schema, and a plan builder; the
//! builders here cover the endpoint shapes that repeat across object types
//! (CRUD, search, batch) plus the JSON Schema fragments they declare.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::model::JsonObject;
use serde_json::{Map, Value, json};

use crate::core::client::{HubSpotClient, RequestPlan};
use crate::domains::tools::args::{ArgError, ToolArgs};
use crate::domains::tools::envelope::{invalid_args, respond};
use crate::domains::tools::spec::ToolHandler;

// ============================================================================
// Handler construction
// ============================================================================

/// Build a tool handler from a plan builder.
///
/// The builder validates arguments and constructs the outbound request; a
/// validation failure short-circuits with an `Invalid arguments` envelope
/// before any request is built or sent. Whatever happens downstream, the
/// handler resolves to a normal envelope.
pub fn plan_handler<F>(build: F) -> ToolHandler
where
    F: Fn(&ToolArgs) -> Result<RequestPlan, ArgError> + Send + Sync + 'static,
{
    Arc::new(move |client: Arc<HubSpotClient>, values: JsonObject| {
        let plan = build(&ToolArgs::new(values));
        async move {
            match plan {
                Ok(plan) => respond(client.execute(plan).await),
                Err(err) => invalid_args(err),
            }
        }
        .boxed()
    })
}

// ============================================================================
// JSON Schema fragments
// ============================================================================

/// Wrap a `json!` object literal as a schema map.
pub fn schema(value: Value) -> Arc<JsonObject> {
    match value {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(JsonObject::new()),
    }
}

/// An object schema with the given properties and required names.
pub fn object_schema(properties: Value, required: &[&str]) -> Arc<JsonObject> {
    schema(json!({
        "type": "object",
        "properties": properties,
        "required": required,
    }))
}

pub fn string_prop(description: &str) -> Value {
    json!({"type": "string", "description": description})
}

pub fn integer_prop(description: &str) -> Value {
    json!({"type": "integer", "description": description})
}

pub fn boolean_prop(description: &str) -> Value {
    json!({"type": "boolean", "description": description})
}

pub fn string_array_prop(description: &str) -> Value {
    json!({
        "type": "array",
        "items": {"type": "string"},
        "description": description,
    })
}

/// An open object: arbitrary keys accepted. Used for CRM property maps so
/// custom properties pass through unmodified.
pub fn object_prop(description: &str) -> Value {
    json!({
        "type": "object",
        "additionalProperties": true,
        "description": description,
    })
}

/// An array of open objects (batch inputs, filter groups, sorts, ...).
pub fn object_array_prop(description: &str) -> Value {
    json!({
        "type": "array",
        "items": {"type": "object", "additionalProperties": true},
        "description": description,
    })
}

/// Insert an extra property into a `json!` properties object.
pub fn with_prop(mut props: Value, key: &str, prop: Value) -> Value {
    if let Some(map) = props.as_object_mut() {
        map.insert(key.to_string(), prop);
    }
    props
}

/// Properties shared by all list endpoints.
pub fn list_props() -> Value {
    json!({
        "limit": integer_prop("Maximum number of results per page (max 100)"),
        "after": string_prop("Paging cursor token from a previous response"),
        "properties": string_array_prop("Property names to include in the response"),
        "associations": string_array_prop("Object types to retrieve associated IDs for"),
        "archived": boolean_prop("Whether to return only archived records"),
    })
}

/// Properties shared by all single-record read endpoints.
pub fn read_props() -> Value {
    json!({
        "properties": string_array_prop("Property names to include in the response"),
        "associations": string_array_prop("Object types to retrieve associated IDs for"),
        "archived": boolean_prop("Whether to return archived records"),
    })
}

/// Properties shared by all search endpoints.
pub fn search_props() -> Value {
    json!({
        "query": string_prop("Free-text query applied to the default searchable properties"),
        "filterGroups": object_array_prop(
            "Filter groups; groups are combined with OR, filters within a group with AND"
        ),
        "sorts": object_array_prop("Sort directives ({propertyName, direction})"),
        "properties": string_array_prop("Property names to include in the results"),
        "limit": integer_prop("Maximum number of results per page (max 200)"),
        "after": string_prop("Paging cursor token"),
    })
}

// ============================================================================
// Plan builders shared across object types
// ============================================================================

pub fn list_records_plan(object_type: &str, args: &ToolArgs) -> Result<RequestPlan, ArgError> {
    Ok(RequestPlan::get(format!("/crm/v3/objects/{object_type}"))
        .query_opt("limit", args.optional_u64("limit")?.map(|v| v.to_string()))
        .query_opt("after", args.optional_str("after")?.map(str::to_owned))
        .query_opt("properties", args.optional_string_list("properties")?)
        .query_opt("associations", args.optional_string_list("associations")?)
        .query_opt("archived", args.optional_bool("archived")?.map(|v| v.to_string())))
}

pub fn read_record_plan(
    object_type: &str,
    record_id: &str,
    args: &ToolArgs,
) -> Result<RequestPlan, ArgError> {
    Ok(RequestPlan::get(format!("/crm/v3/objects/{object_type}/{record_id}"))
        .query_opt("properties", args.optional_string_list("properties")?)
        .query_opt("associations", args.optional_string_list("associations")?)
        .query_opt("archived", args.optional_bool("archived")?.map(|v| v.to_string())))
}

pub fn create_record_plan(object_type: &str, args: &ToolArgs) -> Result<RequestPlan, ArgError> {
    let mut body = Map::new();
    body.insert(
        "properties".to_string(),
        Value::Object(args.require_object("properties")?.clone()),
    );
    if let Some(associations) = args.optional_array("associations")? {
        body.insert("associations".to_string(), Value::Array(associations.clone()));
    }
    Ok(RequestPlan::post(format!("/crm/v3/objects/{object_type}")).body(Value::Object(body)))
}

pub fn update_record_plan(
    object_type: &str,
    record_id: &str,
    args: &ToolArgs,
) -> Result<RequestPlan, ArgError> {
    let properties = args.require_object("properties")?.clone();
    Ok(
        RequestPlan::patch(format!("/crm/v3/objects/{object_type}/{record_id}"))
            .body(json!({"properties": properties})),
    )
}

pub fn archive_record_plan(object_type: &str, record_id: &str) -> RequestPlan {
    RequestPlan::delete(format!("/crm/v3/objects/{object_type}/{record_id}"))
}

pub fn search_records_plan(object_type: &str, args: &ToolArgs) -> Result<RequestPlan, ArgError> {
    let mut body = Map::new();
    if let Some(query) = args.optional_str("query")? {
        body.insert("query".to_string(), json!(query));
    }
    if let Some(groups) = args.optional_array("filterGroups")? {
        body.insert("filterGroups".to_string(), Value::Array(groups.clone()));
    }
    if let Some(sorts) = args.optional_array("sorts")? {
        body.insert("sorts".to_string(), Value::Array(sorts.clone()));
    }
    if let Some(properties) = args.optional_array("properties")? {
        body.insert("properties".to_string(), Value::Array(properties.clone()));
    }
    if let Some(limit) = args.optional_u64("limit")? {
        body.insert("limit".to_string(), json!(limit));
    }
    if let Some(after) = args.optional_str("after")? {
        body.insert("after".to_string(), json!(after));
    }
    Ok(RequestPlan::post(format!("/crm/v3/objects/{object_type}/search")).body(Value::Object(body)))
}

/// Batch create/update/archive: the caller's items are wrapped as
/// `{"inputs": [...]}` and sent in exactly one request. Per-item semantics
/// are HubSpot's concern, not ours.
pub fn batch_records_plan(
    object_type: &str,
    operation: &str,
    args: &ToolArgs,
) -> Result<RequestPlan, ArgError> {
    let inputs = args.require_array("inputs")?.clone();
    Ok(
        RequestPlan::post(format!("/crm/v3/objects/{object_type}/batch/{operation}"))
            .body(json!({"inputs": inputs})),
    )
}

pub fn batch_read_records_plan(object_type: &str, args: &ToolArgs) -> Result<RequestPlan, ArgError> {
    let mut body = Map::new();
    body.insert(
        "inputs".to_string(),
        Value::Array(args.require_array("inputs")?.clone()),
    );
    if let Some(properties) = args.optional_array("properties")? {
        body.insert("properties".to_string(), Value::Array(properties.clone()));
    }
    Ok(RequestPlan::post(format!("/crm/v3/objects/{object_type}/batch/read"))
        .body(Value::Object(body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    fn args(value: Value) -> ToolArgs {
        ToolArgs::new(value.as_object().cloned().unwrap_or_default())
    }

    #[test]
    fn test_list_plan_skips_absent_query_params() {
        let plan = list_records_plan("companies", &args(json!({"limit": 5}))).unwrap();
        assert_eq!(plan.path(), "/crm/v3/objects/companies");
        assert_eq!(plan.query_params(), &[("limit".to_string(), "5".to_string())]);
    }

    #[test]
    fn test_list_plan_joins_property_arrays() {
        let plan =
            list_records_plan("contacts", &args(json!({"properties": ["email", "firstname"]})))
                .unwrap();
        assert_eq!(
            plan.query_params(),
            &[("properties".to_string(), "email,firstname".to_string())]
        );
    }

    #[test]
    fn test_create_plan_wraps_properties() {
        let plan = create_record_plan(
            "companies",
            &args(json!({"properties": {"name": "Test Company", "domain": "test.com"}})),
        )
        .unwrap();
        assert_eq!(plan.method(), &Method::POST);
        assert_eq!(
            plan.json_body().unwrap()["properties"]["name"],
            json!("Test Company")
        );
    }

    #[test]
    fn test_create_plan_requires_properties() {
        let err = create_record_plan("companies", &args(json!({}))).unwrap_err();
        assert_eq!(err.to_string(), "parameter 'properties' is required");
    }

    #[test]
    fn test_batch_plan_wraps_inputs() {
        let plan = batch_records_plan(
            "companies",
            "update",
            &args(json!({"inputs": [{"id": "1"}, {"id": "2"}]})),
        )
        .unwrap();
        assert_eq!(plan.path(), "/crm/v3/objects/companies/batch/update");
        assert_eq!(
            plan.json_body().unwrap(),
            &json!({"inputs": [{"id": "1"}, {"id": "2"}]})
        );
    }

    #[test]
    fn test_search_plan_keeps_arrays_in_body() {
        let plan = search_records_plan(
            "deals",
            &args(json!({
                "filterGroups": [{"filters": []}],
                "properties": ["dealname"],
                "limit": 20
            })),
        )
        .unwrap();
        let body = plan.json_body().unwrap();
        assert!(body["filterGroups"].is_array());
        assert_eq!(body["properties"], json!(["dealname"]));
        assert_eq!(body["limit"], json!(20));
        assert!(body.get("query").is_none());
    }

    #[test]
    fn test_archive_plan_is_delete() {
        let plan = archive_record_plan("companies", "123");
        assert_eq!(plan.method(), &Method::DELETE);
        assert_eq!(plan.path(), "/crm/v3/objects/companies/123");
    }
}
