//! Mock tools for testing.
//!
//! Mock tools return predictable outputs keyed on the `input` parameter,
//! with call tracking so tests can assert on invocation counts and order.

use ravelin_core::{Session, Tool, ToolOutput, ValueMap};
use ravelin_tools::ToolRegistry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

fn input_param(params: &ValueMap) -> String {
    params
        .get("input")
        .map(|v| v.to_string())
        .unwrap_or_default()
}

/// A mock tool that returns predefined outputs based on the `input`
/// parameter.
#[derive(Debug)]
pub struct MockTool {
    name: String,
    description: String,
    responses: HashMap<String, ToolOutput>,
    default_response: Option<ToolOutput>,
    call_count: Arc<Mutex<usize>>,
    call_history: Arc<Mutex<Vec<String>>>,
}

impl MockTool {
    /// Create a new mock tool with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: "Mock tool for testing".to_string(),
            responses: HashMap::new(),
            default_response: None,
            call_count: Arc::new(Mutex::new(0)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Override the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add an `output`-entry response for a specific input.
    pub fn with_response(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.responses.insert(
            input.into(),
            ValueMap::new().with("output", output.into()),
        );
        self
    }

    /// Add a raw output map for a specific input.
    ///
    /// Useful for exercising the runtime's fallback rendering when the map
    /// has no `output` entry.
    pub fn with_raw_response(mut self, input: impl Into<String>, output: ToolOutput) -> Self {
        self.responses.insert(input.into(), output);
        self
    }

    /// Set a default response for any unmatched input.
    pub fn with_default_response(mut self, output: impl Into<String>) -> Self {
        self.default_response = Some(ValueMap::new().with("output", output.into()));
        self
    }

    /// Number of times this tool has been called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// History of `input` parameters passed to this tool.
    pub fn call_history(&self) -> Vec<String> {
        self.call_history.lock().unwrap().clone()
    }

    /// Check if the tool was called with a specific input.
    pub fn was_called_with(&self, input: &str) -> bool {
        self.call_history
            .lock()
            .unwrap()
            .iter()
            .any(|recorded| recorded == input)
    }

    /// Reset call count and history.
    pub fn reset(&self) {
        *self.call_count.lock().unwrap() = 0;
        self.call_history.lock().unwrap().clear();
    }
}

impl Tool for MockTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn call(&self, _session: &Session, params: &ValueMap) -> ToolOutput {
        let input = input_param(params);

        *self.call_count.lock().unwrap() += 1;
        self.call_history.lock().unwrap().push(input.clone());

        if let Some(response) = self.responses.get(&input) {
            response.clone()
        } else if let Some(default) = &self.default_response {
            default.clone()
        } else {
            ValueMap::new().with("output", format!("Mock response for: {input}"))
        }
    }
}

/// A registry of mock tools that keeps handles for post-run assertions.
#[derive(Default)]
pub struct MockToolRegistry {
    mocks: Vec<Arc<MockTool>>,
    registry: ToolRegistry,
}

impl MockToolRegistry {
    /// Create a new empty mock tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mock tool.
    ///
    /// # Panics
    ///
    /// Panics if the mock's name is not a valid tool id.
    pub fn with_tool(mut self, tool: MockTool) -> Self {
        let tool = Arc::new(tool);
        self.registry = self
            .registry
            .with_tool(Arc::clone(&tool) as Arc<dyn Tool>);
        self.mocks.push(tool);
        self
    }

    /// Add a simple echo mock named `echo`.
    pub fn with_echo_tool(self) -> Self {
        self.with_tool(MockTool::new("echo").with_default_response("echo response"))
    }

    /// Add a mock with the given name that always succeeds.
    pub fn with_success_tool(self, name: impl Into<String>) -> Self {
        self.with_tool(MockTool::new(name).with_default_response("success"))
    }

    /// Handle to a registered mock, for call-tracking assertions.
    pub fn get_mock(&self, name: &str) -> Option<Arc<MockTool>> {
        self.mocks
            .iter()
            .find(|mock| mock.name() == name)
            .map(Arc::clone)
    }

    /// The underlying registry, for constructing a runtime.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Consume the wrapper and return the underlying registry.
    pub fn into_registry(self) -> ToolRegistry {
        self.registry
    }
}
