//! # Ravelin
//!
//! Ravelin is a minimal in-process facade simulating an agent runtime: it
//! creates sessions, runs prompts through a deterministic template renderer,
//! and dispatches named tool invocations through a registry. There is no
//! model backend, no network I/O, and no persistence; the value is the
//! typed session-lifecycle and registry contract.
//!
//! ## Core Components
//!
//! - **[`Session`]**: a handle for one interaction scope with an
//!   Open → Closed lifecycle and attached context
//! - **[`ToolRegistry`]**: insertion-ordered mapping from validated tool
//!   names to shared [`Tool`] implementations
//! - **[`Tool`]**: a named capability invoked with a session and parameters
//! - **[`Runtime`]**: orchestrates session creation/closing and routes
//!   execution, enforcing the closed-session invariant before delegating
//!
//! ## Quick Start
//!
//! ```rust
//! use ravelin::{EchoTool, Runtime, ToolRegistry, ValueMap};
//! use std::sync::Arc;
//!
//! let registry = ToolRegistry::new().with_tool(Arc::new(EchoTool::new()));
//! let runtime = Runtime::new(registry);
//!
//! let mut session = runtime.start_session(ValueMap::new().with("env", "prod"));
//!
//! let planned = runtime.run(&session, "Plan the migration").unwrap();
//! assert!(planned.output().contains("env=prod"));
//!
//! let echoed = runtime
//!     .execute_tool(&session, "echo", ValueMap::new().with("text", "hi"))
//!     .unwrap();
//! assert_eq!(echoed.output(), "hi");
//!
//! runtime.close_session(&mut session).unwrap();
//! assert!(runtime.run(&session, "no more").is_err());
//! ```
pub use ravelin_core::{
    IdValidationError, IdValidator, RavelinError, RavelinResult, Session, SessionError,
    SessionId, SessionResult, Tool, ToolError, ToolId, ToolOutput, ToolResult, Value, ValueMap,
};
pub use ravelin_runtime::{
    Clock, DEFAULT_LABEL, IdSource, RandomIdSource, RunResult, Runtime, RuntimeBuilder,
    SystemClock,
};
pub use ravelin_tools::{EchoTool, TextAnalyzeTool, TextReverseTool, ToolRegistry};
