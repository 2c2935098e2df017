//! Text processing tools.
//!
//! All tools here read a `text` parameter (missing or non-string values are
//! treated leniently) and return an output map with at least an `output`
//! entry plus operation-specific extras.

use ravelin_core::{Session, Tool, ToolOutput, Value, ValueMap};

fn text_param(params: &ValueMap) -> String {
    match params.get("text") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Echoes its `text` parameter back unchanged.
#[derive(Debug, Default)]
pub struct EchoTool;

impl EchoTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for EchoTool {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Returns the text parameter unchanged"
    }

    fn call(&self, _session: &Session, params: &ValueMap) -> ToolOutput {
        let text = text_param(params);
        ValueMap::new()
            .with("output", text)
            .with("operation", "echo")
    }
}

/// Reverses its `text` parameter.
#[derive(Debug, Default)]
pub struct TextReverseTool;

impl TextReverseTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for TextReverseTool {
    fn name(&self) -> &str {
        "text_reverse"
    }

    fn description(&self) -> &str {
        "Reverses the text parameter"
    }

    fn call(&self, _session: &Session, params: &ValueMap) -> ToolOutput {
        let text = text_param(params);
        let reversed: String = text.chars().rev().collect();

        ValueMap::new()
            .with("output", reversed)
            .with("original", text)
            .with("operation", "reverse")
    }
}

/// Reports word, character, and line counts for its `text` parameter.
#[derive(Debug, Default)]
pub struct TextAnalyzeTool;

impl TextAnalyzeTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for TextAnalyzeTool {
    fn name(&self) -> &str {
        "text_analyze"
    }

    fn description(&self) -> &str {
        "Counts words, characters, and lines in the text parameter"
    }

    fn call(&self, _session: &Session, params: &ValueMap) -> ToolOutput {
        let text = text_param(params);
        let words = text.split_whitespace().count() as i64;
        let chars = text.chars().count() as i64;
        let lines = if text.is_empty() {
            0
        } else {
            text.lines().count() as i64
        };

        ValueMap::new()
            .with(
                "output",
                format!("{words} words, {chars} chars, {lines} lines"),
            )
            .with("words", words)
            .with("chars", chars)
            .with("lines", lines)
            .with("operation", "analyze")
    }
}
