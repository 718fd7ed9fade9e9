//! Per-object-type CRM record tools.
//!
//! Nine tools per object type (list/get/create/update/archive/search and the
//! three batch mutations), generated from a fixed table of the standard CRM
//! object types. The schemas differ only in the ID parameter name, so the
//! entries are built from the shared fragments in `common`.

use super::common::{
    archive_record_plan, batch_records_plan, create_record_plan, list_props, list_records_plan,
    object_array_prop, object_prop, object_schema, plan_handler, read_props, read_record_plan,
    search_props, search_records_plan, string_prop, update_record_plan, with_prop,
};
use crate::domains::tools::spec::ToolSpec;

use serde_json::json;

/// One standard CRM object type and its naming conventions.
pub struct RecordType {
    /// Plural form, used as the REST path segment and tool-name suffix.
    pub plural: &'static str,

    /// Singular form, used in get/create/update/archive tool names.
    pub singular: &'static str,

    /// The ID parameter name (e.g. `companyId`).
    pub id_param: &'static str,
}

/// The standard object types the catalog covers.
pub static RECORD_TYPES: [RecordType; 8] = [
    RecordType {
        plural: "companies",
        singular: "company",
        id_param: "companyId",
    },
    RecordType {
        plural: "contacts",
        singular: "contact",
        id_param: "contactId",
    },
    RecordType {
        plural: "deals",
        singular: "deal",
        id_param: "dealId",
    },
    RecordType {
        plural: "leads",
        singular: "lead",
        id_param: "leadId",
    },
    RecordType {
        plural: "tickets",
        singular: "ticket",
        id_param: "ticketId",
    },
    RecordType {
        plural: "products",
        singular: "product",
        id_param: "productId",
    },
    RecordType {
        plural: "line_items",
        singular: "line_item",
        id_param: "lineItemId",
    },
    RecordType {
        plural: "quotes",
        singular: "quote",
        id_param: "quoteId",
    },
];

/// All per-object-type tools (9 per type).
pub fn tools() -> Vec<ToolSpec> {
    RECORD_TYPES.iter().flat_map(record_tools).collect()
}

fn record_tools(rt: &'static RecordType) -> Vec<ToolSpec> {
    vec![
        list(rt),
        get(rt),
        create(rt),
        update(rt),
        archive(rt),
        search(rt),
        batch_create(rt),
        batch_update(rt),
        batch_archive(rt),
    ]
}

fn list(rt: &'static RecordType) -> ToolSpec {
    ToolSpec::new(
        format!("crm_list_{}", rt.plural),
        format!(
            "List {} records with optional paging, property selection, and associated object IDs.",
            rt.singular
        ),
        object_schema(list_props(), &[]),
        plan_handler(move |args| list_records_plan(rt.plural, args)),
    )
}

fn get(rt: &'static RecordType) -> ToolSpec {
    ToolSpec::new(
        format!("crm_get_{}", rt.singular),
        format!("Retrieve a single {} record by ID.", rt.singular),
        object_schema(
            with_prop(
                read_props(),
                rt.id_param,
                string_prop(&format!("The {} record ID", rt.singular)),
            ),
            &[rt.id_param],
        ),
        plan_handler(move |args| {
            let id = args.require_str(rt.id_param)?;
            read_record_plan(rt.plural, id, args)
        }),
    )
}

fn create(rt: &'static RecordType) -> ToolSpec {
    ToolSpec::new(
        format!("crm_create_{}", rt.singular),
        format!(
            "Create a {} with the given properties. Custom properties are passed through unmodified.",
            rt.singular
        ),
        object_schema(
            json!({
                "properties": object_prop("Property name/value pairs for the new record"),
                "associations": object_array_prop(
                    "Associations to create alongside the record ({to, types})"
                ),
            }),
            &["properties"],
        ),
        plan_handler(move |args| create_record_plan(rt.plural, args)),
    )
}

fn update(rt: &'static RecordType) -> ToolSpec {
    ToolSpec::new(
        format!("crm_update_{}", rt.singular),
        format!("Update the properties of an existing {} record.", rt.singular),
        object_schema(
            with_prop(
                json!({
                    "properties": object_prop("Property name/value pairs to set"),
                }),
                rt.id_param,
                string_prop(&format!("The {} record ID", rt.singular)),
            ),
            &[rt.id_param, "properties"],
        ),
        plan_handler(move |args| {
            let id = args.require_str(rt.id_param)?;
            update_record_plan(rt.plural, id, args)
        }),
    )
}

fn archive(rt: &'static RecordType) -> ToolSpec {
    ToolSpec::new(
        format!("crm_archive_{}", rt.singular),
        format!("Archive (soft-delete) a {} record.", rt.singular),
        object_schema(
            with_prop(
                json!({}),
                rt.id_param,
                string_prop(&format!("The {} record ID", rt.singular)),
            ),
            &[rt.id_param],
        ),
        plan_handler(move |args| {
            Ok(archive_record_plan(rt.plural, args.require_str(rt.id_param)?))
        }),
    )
}

fn search(rt: &'static RecordType) -> ToolSpec {
    ToolSpec::new(
        format!("crm_search_{}", rt.plural),
        format!(
            "Search {} records with filter groups, sorts, and a free-text query.",
            rt.singular
        ),
        object_schema(search_props(), &[]),
        plan_handler(move |args| search_records_plan(rt.plural, args)),
    )
}

fn batch_create(rt: &'static RecordType) -> ToolSpec {
    ToolSpec::new(
        format!("crm_batch_create_{}", rt.plural),
        format!(
            "Create up to 100 {} records in one request. Each input carries its own properties object.",
            rt.singular
        ),
        object_schema(
            json!({
                "inputs": object_array_prop("Per-record creation payloads ({properties, associations})"),
            }),
            &["inputs"],
        ),
        plan_handler(move |args| batch_records_plan(rt.plural, "create", args)),
    )
}

fn batch_update(rt: &'static RecordType) -> ToolSpec {
    ToolSpec::new(
        format!("crm_batch_update_{}", rt.plural),
        format!(
            "Update up to 100 {} records in one request. Each input carries an id and a properties object.",
            rt.singular
        ),
        object_schema(
            json!({
                "inputs": object_array_prop("Per-record update payloads ({id, properties})"),
            }),
            &["inputs"],
        ),
        plan_handler(move |args| batch_records_plan(rt.plural, "update", args)),
    )
}

fn batch_archive(rt: &'static RecordType) -> ToolSpec {
    ToolSpec::new(
        format!("crm_batch_archive_{}", rt.plural),
        format!("Archive up to 100 {} records in one request.", rt.singular),
        object_schema(
            json!({
                "inputs": object_array_prop("Record references to archive ({id})"),
            }),
            &["inputs"],
        ),
        plan_handler(move |args| batch_records_plan(rt.plural, "archive", args)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_tools_per_record_type() {
        let tools = tools();
        assert_eq!(tools.len(), RECORD_TYPES.len() * 9);
    }

    #[test]
    fn test_company_family_names() {
        let names: Vec<String> = tools().into_iter().map(|t| t.name).collect();
        for expected in [
            "crm_list_companies",
            "crm_get_company",
            "crm_create_company",
            "crm_update_company",
            "crm_archive_company",
            "crm_search_companies",
            "crm_batch_create_companies",
            "crm_batch_update_companies",
            "crm_batch_archive_companies",
        ] {
            assert!(names.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn test_get_schema_requires_typed_id_param() {
        let tools = tools();
        let get_deal = tools.iter().find(|t| t.name == "crm_get_deal").unwrap();
        let required = get_deal.input_schema.get("required").unwrap();
        assert_eq!(required, &serde_json::json!(["dealId"]));
    }

    #[test]
    fn test_no_duplicate_names() {
        let mut names: Vec<String> = tools().into_iter().map(|t| t.name).collect();
        let before = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), before);
    }
}
