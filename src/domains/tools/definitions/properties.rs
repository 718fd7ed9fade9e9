//! CRM property definition tools (properties v3 API).

use serde_json::{Map, Value, json};

use super::common::{
    boolean_prop, object_array_prop, object_schema, plan_handler, string_prop,
};
use crate::core::client::RequestPlan;
use crate::domains::tools::args::{ArgError, ToolArgs};
use crate::domains::tools::spec::ToolSpec;

fn object_type_prop() -> Value {
    string_prop("The CRM object type the property belongs to (e.g. 'contacts')")
}

/// All property definition tools.
pub fn tools() -> Vec<ToolSpec> {
    vec![
        list(),
        get(),
        create(),
        update(),
        archive(),
        list_groups(),
    ]
}

fn list() -> ToolSpec {
    ToolSpec::new(
        "crm_list_properties",
        "List the property definitions of a CRM object type.",
        object_schema(
            json!({
                "objectType": object_type_prop(),
                "archived": boolean_prop("Whether to return only archived properties"),
            }),
            &["objectType"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            Ok(RequestPlan::get(format!("/crm/v3/properties/{object_type}"))
                .query_opt("archived", args.optional_bool("archived")?.map(|v| v.to_string())))
        }),
    )
}

fn get() -> ToolSpec {
    ToolSpec::new(
        "crm_get_property",
        "Retrieve a single property definition by name.",
        object_schema(
            json!({
                "objectType": object_type_prop(),
                "propertyName": string_prop("The property's internal name"),
            }),
            &["objectType", "propertyName"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            let name = args.require_str("propertyName")?;
            Ok(RequestPlan::get(format!("/crm/v3/properties/{object_type}/{name}")))
        }),
    )
}

/// Optional property-definition fields shared by create and update.
fn optional_definition_fields(args: &ToolArgs, body: &mut Map<String, Value>) -> Result<(), ArgError> {
    if let Some(group) = args.optional_str("groupName")? {
        body.insert("groupName".to_string(), json!(group));
    }
    if let Some(description) = args.optional_str("description")? {
        body.insert("description".to_string(), json!(description));
    }
    if let Some(options) = args.optional_array("options")? {
        body.insert("options".to_string(), Value::Array(options.clone()));
    }
    Ok(())
}

fn create() -> ToolSpec {
    ToolSpec::new(
        "crm_create_property",
        "Create a custom property definition on a CRM object type.",
        object_schema(
            json!({
                "objectType": object_type_prop(),
                "name": string_prop("The property's internal name"),
                "label": string_prop("The display label"),
                "type": string_prop("Data type: string, number, date, datetime, enumeration, or bool"),
                "fieldType": string_prop("Form field type: text, textarea, number, select, checkbox, ..."),
                "groupName": string_prop("The property group to file the property under"),
                "description": string_prop("A description of the property"),
                "options": object_array_prop("Options for enumeration properties ({label, value})"),
            }),
            &["objectType", "name", "label", "type", "fieldType"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            let mut body = Map::new();
            body.insert("name".to_string(), json!(args.require_str("name")?));
            body.insert("label".to_string(), json!(args.require_str("label")?));
            body.insert("type".to_string(), json!(args.require_str("type")?));
            body.insert("fieldType".to_string(), json!(args.require_str("fieldType")?));
            optional_definition_fields(args, &mut body)?;
            Ok(RequestPlan::post(format!("/crm/v3/properties/{object_type}"))
                .body(Value::Object(body)))
        }),
    )
}

fn update() -> ToolSpec {
    ToolSpec::new(
        "crm_update_property",
        "Update an existing property definition.",
        object_schema(
            json!({
                "objectType": object_type_prop(),
                "propertyName": string_prop("The property's internal name"),
                "label": string_prop("The display label"),
                "groupName": string_prop("The property group to file the property under"),
                "description": string_prop("A description of the property"),
                "options": object_array_prop("Options for enumeration properties ({label, value})"),
            }),
            &["objectType", "propertyName"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            let name = args.require_str("propertyName")?;
            let mut body = Map::new();
            if let Some(label) = args.optional_str("label")? {
                body.insert("label".to_string(), json!(label));
            }
            optional_definition_fields(args, &mut body)?;
            Ok(RequestPlan::patch(format!("/crm/v3/properties/{object_type}/{name}"))
                .body(Value::Object(body)))
        }),
    )
}

fn archive() -> ToolSpec {
    ToolSpec::new(
        "crm_archive_property",
        "Archive a property definition.",
        object_schema(
            json!({
                "objectType": object_type_prop(),
                "propertyName": string_prop("The property's internal name"),
            }),
            &["objectType", "propertyName"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            let name = args.require_str("propertyName")?;
            Ok(RequestPlan::delete(format!("/crm/v3/properties/{object_type}/{name}")))
        }),
    )
}

fn list_groups() -> ToolSpec {
    ToolSpec::new(
        "crm_list_property_groups",
        "List the property groups of a CRM object type.",
        object_schema(json!({"objectType": object_type_prop()}), &["objectType"]),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            Ok(RequestPlan::get(format!("/crm/v3/properties/{object_type}/groups")))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_property_tools() {
        assert_eq!(tools().len(), 6);
    }
}
