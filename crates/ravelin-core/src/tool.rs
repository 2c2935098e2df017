//! Tool capability trait
//!
//! Tools are discrete capabilities (file search, code generation, data
//! retrieval, ...) the runtime can invoke by name within a session. Each
//! tool declares a unique name, describes its purpose, and processes a
//! parameter map into a structured output map.

use crate::session::Session;
use crate::value::ValueMap;

/// The structured result of a tool invocation.
///
/// Well-behaved tools populate an `output` entry with their primary result;
/// the runtime falls back to rendering the whole map as JSON when the entry
/// is absent. Additional entries are tool-specific and passed through to the
/// caller unchanged.
pub type ToolOutput = ValueMap;

/// Trait defining a capability invocable within a session.
///
/// Implementations are registered in a `ToolRegistry` under their `name()`.
/// Names must satisfy tool-id validation (the registry checks at
/// registration time); by convention they are lowercase with underscores.
///
/// # Example
///
/// ```rust
/// use ravelin_core::{Session, Tool, ToolOutput, ValueMap};
///
/// struct DoubleTool;
///
/// impl Tool for DoubleTool {
///     fn name(&self) -> &str {
///         "double"
///     }
///
///     fn description(&self) -> &str {
///         "Multiplies a number by 2"
///     }
///
///     fn call(&self, _session: &Session, params: &ValueMap) -> ToolOutput {
///         let n = params.get("n").and_then(|v| v.as_i64()).unwrap_or(0);
///         ValueMap::new().with("output", (n * 2).to_string())
///     }
/// }
/// ```
pub trait Tool: Send + Sync {
    /// The unique name identifier for this tool.
    ///
    /// Used by the registry to route invocations to the correct
    /// implementation.
    fn name(&self) -> &str;

    /// A human-readable description of the tool.
    ///
    /// Used in tool listings and capability summaries. Override this to
    /// provide a meaningful description.
    fn description(&self) -> &str {
        ""
    }

    /// Execute the tool within the given session.
    ///
    /// The session provides the invocation's context; `params` carries
    /// arbitrary key-value parameters. Tools are responsible for parsing
    /// and defaulting their own parameters.
    fn call(&self, session: &Session, params: &ValueMap) -> ToolOutput;
}

impl std::fmt::Debug for dyn Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name())
            .field("description", &self.description())
            .finish()
    }
}
