//! Communication preference tools (communication-preferences v3 API).

use serde_json::{Map, Value, json};

use super::common::{object_schema, plan_handler, string_prop};
use crate::core::client::RequestPlan;
use crate::domains::tools::args::{ArgError, ToolArgs};
use crate::domains::tools::spec::ToolSpec;

/// All communication preference tools.
pub fn tools() -> Vec<ToolSpec> {
    vec![list_definitions(), get_status(), subscribe(), unsubscribe()]
}

fn list_definitions() -> ToolSpec {
    ToolSpec::new(
        "crm_list_subscription_definitions",
        "List the subscription types defined in the account.",
        object_schema(json!({}), &[]),
        plan_handler(|_args| {
            Ok(RequestPlan::get("/communication-preferences/v3/definitions"))
        }),
    )
}

fn get_status() -> ToolSpec {
    ToolSpec::new(
        "crm_get_subscription_status",
        "Get the email subscription statuses of a contact by email address.",
        object_schema(
            json!({"emailAddress": string_prop("The contact's email address")}),
            &["emailAddress"],
        ),
        plan_handler(|args| {
            let email = args.require_str("emailAddress")?;
            Ok(RequestPlan::get(format!(
                "/communication-preferences/v3/status/email/{email}"
            )))
        }),
    )
}

/// Body shared by the subscribe and unsubscribe tools.
fn status_change_body(args: &ToolArgs) -> Result<Value, ArgError> {
    let mut body = Map::new();
    body.insert(
        "emailAddress".to_string(),
        json!(args.require_str("emailAddress")?),
    );
    body.insert(
        "subscriptionId".to_string(),
        json!(args.require_str("subscriptionId")?),
    );
    if let Some(basis) = args.optional_str("legalBasis")? {
        body.insert("legalBasis".to_string(), json!(basis));
    }
    if let Some(explanation) = args.optional_str("legalBasisExplanation")? {
        body.insert("legalBasisExplanation".to_string(), json!(explanation));
    }
    Ok(Value::Object(body))
}

fn status_change_props() -> Value {
    json!({
        "emailAddress": string_prop("The contact's email address"),
        "subscriptionId": string_prop("The subscription type ID"),
        "legalBasis": string_prop("Legal basis for the change (e.g. 'LEGITIMATE_INTEREST_PQL')"),
        "legalBasisExplanation": string_prop("Free-text explanation of the legal basis"),
    })
}

fn subscribe() -> ToolSpec {
    ToolSpec::new(
        "crm_subscribe_contact",
        "Opt a contact in to an email subscription type.",
        object_schema(status_change_props(), &["emailAddress", "subscriptionId"]),
        plan_handler(|args| {
            Ok(RequestPlan::post("/communication-preferences/v3/subscribe")
                .body(status_change_body(args)?))
        }),
    )
}

fn unsubscribe() -> ToolSpec {
    ToolSpec::new(
        "crm_unsubscribe_contact",
        "Opt a contact out of an email subscription type.",
        object_schema(status_change_props(), &["emailAddress", "subscriptionId"]),
        plan_handler(|args| {
            Ok(RequestPlan::post("/communication-preferences/v3/unsubscribe")
                .body(status_change_body(args)?))
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
    fn test_four_subscription_tools() {
        assert_eq!(tools().len(), 4);
    }

    #[test]
    fn test_status_change_body_requires_subscription_id() {
        let a = args(json!({"emailAddress": "a@b.com"}));
        assert_eq!(
            status_change_body(&a).unwrap_err(),
            ArgError::Missing("subscriptionId".to_string())
        );
    }

    #[test]
    fn test_status_change_body_includes_legal_basis() {
        let a = args(json!({
            "emailAddress": "a@b.com",
            "subscriptionId": "7",
            "legalBasis": "CONSENT_WITH_NOTICE",
        }));
        let body = status_change_body(&a).unwrap();
        assert_eq!(body["legalBasis"], json!("CONSENT_WITH_NOTICE"));
        assert!(body.get("legalBasisExplanation").is_none());
    }
}
