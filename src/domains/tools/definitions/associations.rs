//! Association tools (CRM v4 associations API).

use serde_json::{Value, json};

use super::common::{
    object_array_prop, object_schema, plan_handler, string_prop,
};
use crate::core::client::RequestPlan;
use crate::domains::tools::spec::ToolSpec;

fn from_type_prop() -> Value {
    string_prop("The source object type (e.g. 'contacts')")
}

fn to_type_prop() -> Value {
    string_prop("The target object type (e.g. 'companies')")
}

/// All association tools.
pub fn tools() -> Vec<ToolSpec> {
    vec![
        list_types(),
        get_associations(),
        create_association(),
        delete_association(),
        batch_create(),
        batch_delete(),
    ]
}

fn list_types() -> ToolSpec {
    ToolSpec::new(
        "crm_list_association_types",
        "List the association labels/types defined between two object types.",
        object_schema(
            json!({
                "fromObjectType": from_type_prop(),
                "toObjectType": to_type_prop(),
            }),
            &["fromObjectType", "toObjectType"],
        ),
        plan_handler(|args| {
            let from = args.require_str("fromObjectType")?;
            let to = args.require_str("toObjectType")?;
            Ok(RequestPlan::get(format!("/crm/v4/associations/{from}/{to}/labels")))
        }),
    )
}

fn get_associations() -> ToolSpec {
    ToolSpec::new(
        "crm_get_associations",
        "List the records of one type associated with a given record.",
        object_schema(
            json!({
                "objectType": from_type_prop(),
                "objectId": string_prop("The source record ID"),
                "toObjectType": to_type_prop(),
                "limit": string_prop("Maximum number of results per page"),
                "after": string_prop("Paging cursor token"),
            }),
            &["objectType", "objectId", "toObjectType"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            let object_id = args.require_str("objectId")?;
            let to = args.require_str("toObjectType")?;
            Ok(
                RequestPlan::get(format!(
                    "/crm/v4/objects/{object_type}/{object_id}/associations/{to}"
                ))
                .query_opt("limit", args.optional_str("limit")?.map(str::to_owned))
                .query_opt("after", args.optional_str("after")?.map(str::to_owned)),
            )
        }),
    )
}

fn create_association() -> ToolSpec {
    ToolSpec::new(
        "crm_create_association",
        "Associate two records. Without explicit associationTypes the default (unlabeled) \
         association for the type pair is used.",
        object_schema(
            json!({
                "objectType": from_type_prop(),
                "objectId": string_prop("The source record ID"),
                "toObjectType": to_type_prop(),
                "toObjectId": string_prop("The target record ID"),
                "associationTypes": object_array_prop(
                    "Association type descriptors ({associationCategory, associationTypeId})"
                ),
            }),
            &["objectType", "objectId", "toObjectType", "toObjectId"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            let object_id = args.require_str("objectId")?;
            let to = args.require_str("toObjectType")?;
            let to_id = args.require_str("toObjectId")?;
            match args.optional_array("associationTypes")? {
                Some(types) => Ok(RequestPlan::put(format!(
                    "/crm/v4/objects/{object_type}/{object_id}/associations/{to}/{to_id}"
                ))
                .body(Value::Array(types.clone()))),
                None => Ok(RequestPlan::put(format!(
                    "/crm/v4/objects/{object_type}/{object_id}/associations/default/{to}/{to_id}"
                ))),
            }
        }),
    )
}

fn delete_association() -> ToolSpec {
    ToolSpec::new(
        "crm_delete_association",
        "Remove all associations between two records.",
        object_schema(
            json!({
                "objectType": from_type_prop(),
                "objectId": string_prop("The source record ID"),
                "toObjectType": to_type_prop(),
                "toObjectId": string_prop("The target record ID"),
            }),
            &["objectType", "objectId", "toObjectType", "toObjectId"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            let object_id = args.require_str("objectId")?;
            let to = args.require_str("toObjectType")?;
            let to_id = args.require_str("toObjectId")?;
            Ok(RequestPlan::delete(format!(
                "/crm/v4/objects/{object_type}/{object_id}/associations/{to}/{to_id}"
            )))
        }),
    )
}

fn batch_create() -> ToolSpec {
    ToolSpec::new(
        "crm_batch_create_associations",
        "Create up to 100 associations between two object types in a single request.",
        object_schema(
            json!({
                "fromObjectType": from_type_prop(),
                "toObjectType": to_type_prop(),
                "inputs": object_array_prop(
                    "Association payloads ({from: {id}, to: {id}, types})"
                ),
            }),
            &["fromObjectType", "toObjectType", "inputs"],
        ),
        plan_handler(|args| {
            let from = args.require_str("fromObjectType")?;
            let to = args.require_str("toObjectType")?;
            let inputs = args.require_array("inputs")?.clone();
            Ok(
                RequestPlan::post(format!("/crm/v4/associations/{from}/{to}/batch/create"))
                    .body(json!({"inputs": inputs})),
            )
        }),
    )
}

fn batch_delete() -> ToolSpec {
    ToolSpec::new(
        "crm_batch_delete_associations",
        "Remove up to 100 associations between two object types in a single request.",
        object_schema(
            json!({
                "fromObjectType": from_type_prop(),
                "toObjectType": to_type_prop(),
                "inputs": object_array_prop("Association references ({from: {id}, to: [{id}]})"),
            }),
            &["fromObjectType", "toObjectType", "inputs"],
        ),
        plan_handler(|args| {
            let from = args.require_str("fromObjectType")?;
            let to = args.require_str("toObjectType")?;
            let inputs = args.require_array("inputs")?.clone();
            Ok(
                RequestPlan::post(format!("/crm/v4/associations/{from}/{to}/batch/archive"))
                    .body(json!({"inputs": inputs})),
            )
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_association_tools() {
        assert_eq!(tools().len(), 6);
    }

    #[test]
    fn test_tool_names() {
        let names: Vec<String> = tools().into_iter().map(|t| t.name).collect();
        assert!(names.contains(&"crm_create_association".to_string()));
        assert!(names.contains(&"crm_batch_delete_associations".to_string()));
    }
}
