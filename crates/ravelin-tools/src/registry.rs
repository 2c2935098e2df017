//! Tool registry: name-keyed storage and dispatch for [`Tool`] implementations.

use ravelin_core::{Session, Tool, ToolError, ToolId, ToolOutput, ToolResult, ValueMap};
use std::sync::Arc;

/// In-memory, insertion-ordered tool registry.
///
/// Tools are stored as an association list so `tool_names()` and
/// `describe_tools()` reflect registration order, and re-registering a name
/// replaces the entry **in place** without moving it. Lookups are linear,
/// which is the right trade for the handful of tools a runtime carries.
///
/// Tool names are validated eagerly: `register` rejects names that fail
/// [`ToolId`] validation, so every stored entry is well-formed.
///
/// # Example
///
/// ```rust
/// use ravelin_core::{Session, Tool, ToolOutput, ValueMap};
/// use ravelin_tools::ToolRegistry;
/// use std::sync::Arc;
///
/// struct EchoTool;
///
/// impl Tool for EchoTool {
///     fn name(&self) -> &str {
///         "echo"
///     }
///
///     fn call(&self, _session: &Session, params: &ValueMap) -> ToolOutput {
///         let text = params.get("text").map(|v| v.to_string()).unwrap_or_default();
///         ValueMap::new().with("output", text)
///     }
/// }
///
/// let registry = ToolRegistry::new().with_tool(Arc::new(EchoTool));
/// assert!(registry.has("echo"));
/// ```
#[derive(Clone, Default, Debug)]
pub struct ToolRegistry {
    tools: Vec<(ToolId, Arc<dyn Tool>)>,
}

impl ToolRegistry {
    /// Create a new empty tool registry.
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool under its declared name.
    ///
    /// An existing entry with the same name is replaced and keeps its
    /// position in the listing order. Returns the registry for chaining.
    ///
    /// Fails with [`ToolError::InvalidName`] when `tool.name()` does not
    /// satisfy identifier validation.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> ToolResult<&mut Self> {
        let name = ToolId::parse(tool.name())
            .map_err(|source| ToolError::invalid_name(tool.name(), source))?;

        if let Some((_, slot)) = self.tools.iter_mut().find(|(id, _)| *id == name) {
            tracing::debug!(tool = %name, "replacing registered tool");
            *slot = tool;
        } else {
            tracing::debug!(tool = %name, "registering tool");
            self.tools.push((name, tool));
        }
        Ok(self)
    }

    /// Register a tool during registry construction.
    ///
    /// Builder-style companion to [`register`](Self::register).
    ///
    /// # Panics
    ///
    /// Panics if the tool name is invalid. Use `register` for error
    /// handling.
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.register(tool).expect("Valid tool name");
        self
    }

    /// Check whether a tool with the given name is registered.
    ///
    /// Names that fail validation are simply absent.
    pub fn has(&self, name: &str) -> bool {
        self.tools.iter().any(|(id, _)| id.as_str() == name)
    }

    /// Return a registered tool by name.
    ///
    /// Fails with [`ToolError::NotFound`] carrying the current listing when
    /// no tool with the given name is registered.
    pub fn get(&self, name: &str) -> ToolResult<Arc<dyn Tool>> {
        match self.tools.iter().find(|(id, _)| id.as_str() == name) {
            Some((_, tool)) => Ok(Arc::clone(tool)),
            None => {
                let requested = ToolId::parse(name)
                    .map_err(|source| ToolError::invalid_name(name, source))?;
                Err(ToolError::not_found(
                    requested,
                    self.tools.iter().map(|(id, _)| id.clone()).collect(),
                ))
            }
        }
    }

    /// Execute a registered tool by name within the given session.
    ///
    /// Looks up via [`get`](Self::get), propagating its failure, then invokes
    /// the tool and returns its output unchanged. Session state is not
    /// inspected here; gating execution on an open session is the runtime's
    /// responsibility.
    pub fn execute(
        &self,
        name: &str,
        session: &Session,
        params: &ValueMap,
    ) -> ToolResult<ToolOutput> {
        let tool = self.get(name)?;
        tracing::debug!(tool = name, session = %session.id(), "dispatching tool");
        Ok(tool.call(session, params))
    }

    /// Names of all registered tools, in registration order.
    ///
    /// Re-registering a name does not change its position.
    pub fn tool_names(&self) -> Vec<String> {
        self.tools
            .iter()
            .map(|(id, _)| id.as_str().to_string())
            .collect()
    }

    /// Name/description pairs for all registered tools, in registration
    /// order.
    ///
    /// Descriptions are read from the tools at call time, not cached.
    pub fn describe_tools(&self) -> Vec<(String, String)> {
        self.tools
            .iter()
            .map(|(id, tool)| (id.as_str().to_string(), tool.description().to_string()))
            .collect()
    }

    /// Remove a registered tool by name.
    ///
    /// Removing an absent (or invalid) name is a no-op. Returns the registry
    /// for chaining.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        if let Some(index) = self.tools.iter().position(|(id, _)| id.as_str() == name) {
            tracing::debug!(tool = name, "removing tool");
            self.tools.remove(index);
        }
        self
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ravelin_core::{SessionId, ValueMap};

    struct UppercaseTool;

    impl Tool for UppercaseTool {
        fn name(&self) -> &str {
            "uppercase"
        }

        fn description(&self) -> &str {
            "Uppercases the text parameter"
        }

        fn call(&self, _session: &Session, params: &ValueMap) -> ToolOutput {
            let text = params
                .get("text")
                .map(|v| v.to_string())
                .unwrap_or_default();
            ValueMap::new().with("output", text.to_uppercase())
        }
    }

    struct ReverseTool;

    impl Tool for ReverseTool {
        fn name(&self) -> &str {
            "reverse"
        }

        fn description(&self) -> &str {
            "Reverses the text parameter"
        }

        fn call(&self, _session: &Session, params: &ValueMap) -> ToolOutput {
            let text = params
                .get("text")
                .map(|v| v.to_string())
                .unwrap_or_default();
            ValueMap::new().with("output", text.chars().rev().collect::<String>())
        }
    }

    fn session() -> Session {
        Session::new(SessionId::new_unchecked("sess-reg"), ValueMap::new())
    }

    #[test]
    fn register_and_has() {
        let mut registry = ToolRegistry::new();
        assert!(!registry.has("uppercase"));

        registry.register(Arc::new(UppercaseTool)).unwrap();

        assert!(registry.has("uppercase"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn get_returns_registered_tool_reference() {
        let tool: Arc<dyn Tool> = Arc::new(UppercaseTool);
        let registry = ToolRegistry::new().with_tool(Arc::clone(&tool));

        let retrieved = registry.get("uppercase").unwrap();
        assert!(Arc::ptr_eq(&retrieved, &tool));
    }

    #[test]
    fn get_unregistered_fails_with_not_found() {
        let registry = ToolRegistry::new().with_tool(Arc::new(UppercaseTool));

        match registry.get("missing") {
            Err(ToolError::NotFound { name, registered }) => {
                assert_eq!(name.as_str(), "missing");
                assert_eq!(registered.len(), 1);
                assert_eq!(registered[0].as_str(), "uppercase");
            }
            other => panic!("Expected NotFound, got {:?}", other.map(|t| t.name().to_string())),
        }
    }

    #[test]
    fn get_on_empty_registry_reports_empty_listing() {
        let registry = ToolRegistry::new();

        let error = registry.get("missing").unwrap_err();
        assert!(error.to_string().contains("(none)"));
    }

    #[test]
    fn register_rejects_invalid_names() {
        struct BadTool;
        impl Tool for BadTool {
            fn name(&self) -> &str {
                "bad name"
            }
            fn call(&self, _session: &Session, _params: &ValueMap) -> ToolOutput {
                ValueMap::new()
            }
        }

        let mut registry = ToolRegistry::new();
        let error = registry.register(Arc::new(BadTool)).unwrap_err();

        assert!(matches!(error, ToolError::InvalidName { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn reregistration_replaces_in_place() {
        struct FirstEcho;
        impl Tool for FirstEcho {
            fn name(&self) -> &str {
                "echo"
            }
            fn call(&self, _session: &Session, _params: &ValueMap) -> ToolOutput {
                ValueMap::new().with("output", "first")
            }
        }

        struct SecondEcho;
        impl Tool for SecondEcho {
            fn name(&self) -> &str {
                "echo"
            }
            fn call(&self, _session: &Session, _params: &ValueMap) -> ToolOutput {
                ValueMap::new().with("output", "second")
            }
        }

        let mut registry = ToolRegistry::new()
            .with_tool(Arc::new(FirstEcho))
            .with_tool(Arc::new(ReverseTool));

        registry.register(Arc::new(SecondEcho)).unwrap();

        // Stable position, replaced implementation.
        assert_eq!(registry.tool_names(), ["echo", "reverse"]);
        let output = registry
            .execute("echo", &session(), &ValueMap::new())
            .unwrap();
        assert_eq!(output.get("output").and_then(|v| v.as_str()), Some("second"));
    }

    #[test]
    fn execute_dispatches_to_correct_tool() {
        let registry = ToolRegistry::new()
            .with_tool(Arc::new(UppercaseTool))
            .with_tool(Arc::new(ReverseTool));

        let params = ValueMap::new().with("text", "ravelin");

        let upper = registry.execute("uppercase", &session(), &params).unwrap();
        let reversed = registry.execute("reverse", &session(), &params).unwrap();

        assert_eq!(upper.get("output").and_then(|v| v.as_str()), Some("RAVELIN"));
        assert_eq!(
            reversed.get("output").and_then(|v| v.as_str()),
            Some("nilevar")
        );
    }

    #[test]
    fn execute_missing_tool_propagates_not_found() {
        let registry = ToolRegistry::new();
        let result = registry.execute("nonexistent", &session(), &ValueMap::new());
        assert!(matches!(result, Err(ToolError::NotFound { .. })));
    }

    #[test]
    fn describe_tools_reads_descriptions_in_order() {
        let registry = ToolRegistry::new()
            .with_tool(Arc::new(UppercaseTool))
            .with_tool(Arc::new(ReverseTool));

        let descriptions = registry.describe_tools();

        assert_eq!(
            descriptions,
            [
                (
                    "uppercase".to_string(),
                    "Uppercases the text parameter".to_string()
                ),
                (
                    "reverse".to_string(),
                    "Reverses the text parameter".to_string()
                ),
            ]
        );
    }

    #[test]
    fn remove_absent_tool_is_noop() {
        let mut registry = ToolRegistry::new().with_tool(Arc::new(UppercaseTool));

        assert!(!registry.has("missing"));
        registry.remove("missing");
        assert!(!registry.has("missing"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remove_then_lookup_fails() {
        let mut registry = ToolRegistry::new().with_tool(Arc::new(UppercaseTool));

        registry.remove("uppercase");

        assert!(registry.is_empty());
        assert!(registry.get("uppercase").is_err());
    }
}
