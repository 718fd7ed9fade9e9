//! Prompt template rendering.
//!
//! Templates use `{{variable}}` placeholders plus a minimal conditional form,
//! `{{#if variable}}...{{else}}...{{/if}}`. A variable counts as set when an
//! argument with a non-empty value was supplied.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut result = expand_conditionals(&self.template, arguments)?;

        for (key, value) in arguments {
            result = result.replace(&format!("{{{{{key}}}}}"), value);
        }

        Ok(strip_leftover_placeholders(&result))
    }
}

/// Expand `{{#if}}` blocks, keeping the branch matching the argument state.
fn expand_conditionals(
    template: &str,
    arguments: &HashMap<String, String>,
) -> Result<String, PromptError> {
    const ENDIF: &str = "{{/if}}";
    let mut result = template.to_string();

    while let Some(start) = result.find("{{#if ") {
        let tag_end = result[start..]
            .find("}}")
            .map(|i| start + i)
            .ok_or_else(|| PromptError::template("Unclosed {{#if}} tag"))?;
        let var = result[start + 6..tag_end].trim();

        let end = result[tag_end..]
            .find(ENDIF)
            .map(|i| tag_end + i)
            .ok_or_else(|| PromptError::template("Missing {{/if}} tag"))?;
        let block = &result[tag_end + 2..end];

        let (when_set, when_unset) = match block.find("{{else}}") {
            Some(i) => (&block[..i], &block[i + 8..]),
            None => (block, ""),
        };

        let is_set = arguments.get(var).is_some_and(|v| !v.is_empty());
        let chosen = if is_set { when_set } else { when_unset };

        result = format!("{}{}{}", &result[..start], chosen, &result[end + ENDIF.len()..]);
    }

    Ok(result)
}

/// Drop placeholders for optional arguments that were never supplied.
fn strip_leftover_placeholders(template: &str) -> String {
    let mut result = template.to_string();
    let mut from = 0;

    while let Some(open) = result[from..].find("{{") {
        let open = from + open;
        match result[open..].find("}}") {
            Some(close) => {
                let close = open + close + 2;
                let placeholder = &result[open..close];
                if placeholder.contains('#') || placeholder.contains('/') {
                    from = open + 2;
                } else {
                    result.replace_range(open..close, "");
                }
            }
            None => break,
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(body: &str) -> PromptTemplate {
        PromptTemplate {
            name: "test".to_string(),
            description: None,
            arguments: vec![],
            template: body.to_string(),
        }
    }

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        let result = template("Review deal {{dealId}}.")
            .render(&args(&[("dealId", "42")]))
            .unwrap();
        assert_eq!(result, "Review deal 42.");
    }

    #[test]
    fn test_conditional_with_value() {
        let result = template("List deals{{#if stage}} in stage {{stage}}{{/if}}.")
            .render(&args(&[("stage", "closedwon")]))
            .unwrap();
        assert_eq!(result, "List deals in stage closedwon.");
    }

    #[test]
    fn test_conditional_without_value() {
        let result = template("List deals{{#if stage}} in stage {{stage}}{{/if}}.")
            .render(&args(&[]))
            .unwrap();
        assert_eq!(result, "List deals.");
    }

    #[test]
    fn test_conditional_else_branch() {
        let result = template("Use {{#if pipeline}}{{pipeline}}{{else}}the default pipeline{{/if}}.")
            .render(&args(&[]))
            .unwrap();
        assert_eq!(result, "Use the default pipeline.");
    }

    #[test]
    fn test_unused_optional_placeholder_is_stripped() {
        let result = template("Hello {{name}}!").render(&args(&[])).unwrap();
        assert_eq!(result, "Hello !");
    }

    #[test]
    fn test_unclosed_if_is_an_error() {
        let result = template("{{#if x").render(&args(&[]));
        assert!(result.is_err());
    }
}
