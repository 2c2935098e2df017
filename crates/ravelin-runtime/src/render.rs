//! Deterministic output rendering and token estimation.
//!
//! The runtime has no model backend; `run` produces a predictable templated
//! body so hosts can exercise the full result path without external calls.

use ravelin_core::{Session, ValueMap};

/// Render a context map as `key=value` pairs joined by `", "`.
///
/// Scalar values are stringified directly; lists and maps render as compact
/// JSON. An empty context renders as the literal `none`.
pub fn render_context(context: &ValueMap) -> String {
    if context.is_empty() {
        return "none".to_string();
    }

    context
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the templated response body for a `run` invocation.
pub fn render_output(label: &str, session: &Session, input: &str) -> String {
    format!(
        "[{label}] Session {id}\nInput: {input}\nContext: {context}\nOutput: Drafted a plan with steps and checks.",
        id = session.id(),
        context = render_context(session.context()),
    )
}

/// Estimate token usage for a prompt.
///
/// Words are runs of non-whitespace; the estimate is `ceil(1.3 × words)`
/// with a floor of 1, so even an empty prompt accounts for something.
pub fn estimate_tokens(input: &str) -> u64 {
    let words = input.split_whitespace().count();
    ((words as f64 * 1.3).ceil() as u64).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ravelin_core::SessionId;

    #[test]
    fn empty_context_renders_none() {
        assert_eq!(render_context(&ValueMap::new()), "none");
    }

    #[test]
    fn context_entries_render_in_insertion_order() {
        let context = ValueMap::new()
            .with("env", "prod")
            .with("retries", 3i64)
            .with("debug", false);

        assert_eq!(render_context(&context), "env=prod, retries=3, debug=false");
    }

    #[test]
    fn structured_context_values_render_as_json() {
        let context = ValueMap::new().with(
            "tags",
            ravelin_core::Value::List(vec!["a".into(), "b".into()]),
        );

        assert_eq!(render_context(&context), r#"tags=["a","b"]"#);
    }

    #[test]
    fn output_template_contains_label_id_input_and_context() {
        let session = Session::new(
            SessionId::new_unchecked("sess-render"),
            ValueMap::new().with("env", "prod"),
        );

        let output = render_output("Test Runtime", &session, "do the thing");

        assert!(output.starts_with("[Test Runtime] Session sess-render\n"));
        assert!(output.contains("Input: do the thing\n"));
        assert!(output.contains("Context: env=prod\n"));
        assert!(output.ends_with("Output: Drafted a plan with steps and checks."));
    }

    #[test]
    fn estimate_scales_with_word_count() {
        assert_eq!(estimate_tokens("a b c"), 4); // ceil(3 * 1.3)
        assert_eq!(estimate_tokens("one"), 2); // ceil(1.3)
        assert_eq!(estimate_tokens("one two three four"), 6); // ceil(5.2)
    }

    #[test]
    fn estimate_has_floor_of_one() {
        assert_eq!(estimate_tokens(""), 1);
        assert_eq!(estimate_tokens("   \t\n  "), 1);
    }

    #[test]
    fn estimate_ignores_whitespace_runs() {
        assert_eq!(estimate_tokens("  a   b\t\tc  "), 4);
    }
}
