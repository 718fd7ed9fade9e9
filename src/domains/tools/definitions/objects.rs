//! Generic CRM object tools.
//!
//! These take the object type as a parameter instead of baking it into the
//! tool name, which covers custom object types the fixed catalog cannot
//! enumerate. The batch-read tool only exists here; reading by ID list is
//! uncommon enough that the per-type families skip it.

use serde_json::json;

use super::common::{
    archive_record_plan, batch_read_records_plan, batch_records_plan, create_record_plan,
    list_props, list_records_plan, object_array_prop, object_prop, object_schema, plan_handler,
    read_props, read_record_plan, search_props, search_records_plan, string_array_prop,
    string_prop, update_record_plan, with_prop,
};
use crate::domains::tools::spec::ToolSpec;

fn object_type_prop() -> serde_json::Value {
    string_prop("The CRM object type (e.g. 'companies', 'contacts', or a custom object type ID)")
}

/// All generic object tools.
pub fn tools() -> Vec<ToolSpec> {
    vec![
        list(),
        get(),
        create(),
        update(),
        archive(),
        search(),
        batch_create(),
        batch_read(),
        batch_update(),
        batch_archive(),
    ]
}

fn list() -> ToolSpec {
    ToolSpec::new(
        "crm_list_objects",
        "List records of any CRM object type with optional paging and property selection.",
        object_schema(
            with_prop(list_props(), "objectType", object_type_prop()),
            &["objectType"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            list_records_plan(object_type, args)
        }),
    )
}

fn get() -> ToolSpec {
    ToolSpec::new(
        "crm_get_object",
        "Retrieve a single record of any CRM object type by ID.",
        object_schema(
            with_prop(
                with_prop(read_props(), "objectType", object_type_prop()),
                "objectId",
                string_prop("The record ID"),
            ),
            &["objectType", "objectId"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            let object_id = args.require_str("objectId")?;
            read_record_plan(object_type, object_id, args)
        }),
    )
}

fn create() -> ToolSpec {
    ToolSpec::new(
        "crm_create_object",
        "Create a record of any CRM object type with the given properties.",
        object_schema(
            json!({
                "objectType": object_type_prop(),
                "properties": object_prop("Property name/value pairs for the new record"),
                "associations": object_array_prop(
                    "Associations to create alongside the record ({to, types})"
                ),
            }),
            &["objectType", "properties"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            create_record_plan(object_type, args)
        }),
    )
}

fn update() -> ToolSpec {
    ToolSpec::new(
        "crm_update_object",
        "Update the properties of an existing record of any CRM object type.",
        object_schema(
            json!({
                "objectType": object_type_prop(),
                "objectId": string_prop("The record ID"),
                "properties": object_prop("Property name/value pairs to set"),
            }),
            &["objectType", "objectId", "properties"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            let object_id = args.require_str("objectId")?;
            update_record_plan(object_type, object_id, args)
        }),
    )
}

fn archive() -> ToolSpec {
    ToolSpec::new(
        "crm_archive_object",
        "Archive (soft-delete) a record of any CRM object type.",
        object_schema(
            json!({
                "objectType": object_type_prop(),
                "objectId": string_prop("The record ID"),
            }),
            &["objectType", "objectId"],
        ),
        plan_handler(|args| {
            Ok(archive_record_plan(
                args.require_str("objectType")?,
                args.require_str("objectId")?,
            ))
        }),
    )
}

fn search() -> ToolSpec {
    ToolSpec::new(
        "crm_search_objects",
        "Search records of any CRM object type with filter groups, sorts, and a free-text query.",
        object_schema(
            with_prop(search_props(), "objectType", object_type_prop()),
            &["objectType"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            search_records_plan(object_type, args)
        }),
    )
}

fn batch_create() -> ToolSpec {
    ToolSpec::new(
        "crm_batch_create_objects",
        "Create up to 100 records of one CRM object type in a single request.",
        object_schema(
            json!({
                "objectType": object_type_prop(),
                "inputs": object_array_prop("Per-record creation payloads ({properties, associations})"),
            }),
            &["objectType", "inputs"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            batch_records_plan(object_type, "create", args)
        }),
    )
}

fn batch_read() -> ToolSpec {
    ToolSpec::new(
        "crm_batch_read_objects",
        "Read up to 100 records of one CRM object type by ID in a single request.",
        object_schema(
            json!({
                "objectType": object_type_prop(),
                "inputs": object_array_prop("Record references to read ({id})"),
                "properties": string_array_prop("Property names to include in the results"),
            }),
            &["objectType", "inputs"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            batch_read_records_plan(object_type, args)
        }),
    )
}

fn batch_update() -> ToolSpec {
    ToolSpec::new(
        "crm_batch_update_objects",
        "Update up to 100 records of one CRM object type in a single request.",
        object_schema(
            json!({
                "objectType": object_type_prop(),
                "inputs": object_array_prop("Per-record update payloads ({id, properties})"),
            }),
            &["objectType", "inputs"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            batch_records_plan(object_type, "update", args)
        }),
    )
}

fn batch_archive() -> ToolSpec {
    ToolSpec::new(
        "crm_batch_archive_objects",
        "Archive up to 100 records of one CRM object type in a single request.",
        object_schema(
            json!({
                "objectType": object_type_prop(),
                "inputs": object_array_prop("Record references to archive ({id})"),
            }),
            &["objectType", "inputs"],
        ),
        plan_handler(|args| {
            let object_type = args.require_str("objectType")?;
            batch_records_plan(object_type, "archive", args)
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_generic_tools() {
        assert_eq!(tools().len(), 10);
    }

    #[test]
    fn test_all_require_object_type() {
        for tool in tools() {
            let required = tool.input_schema.get("required").unwrap();
            assert!(
                required
                    .as_array()
                    .unwrap()
                    .contains(&serde_json::json!("objectType")),
                "{} does not require objectType",
                tool.name
            );
        }
    }
}
