//! # Ravelin Tools
//!
//! Tool registry and standard tool library for the Ravelin runtime.
//!
//! The registry maps validated tool names to shared [`Tool`] implementations
//! and dispatches invocations to them; the `standard` module provides a
//! small set of pure text tools ready to register.

pub mod registry;
pub mod standard;

pub use registry::ToolRegistry;
pub use standard::{EchoTool, TextAnalyzeTool, TextReverseTool};

pub use ravelin_core::{Tool, ToolError, ToolId, ToolOutput, ToolResult};
