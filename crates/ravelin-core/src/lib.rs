//! # Ravelin Core
//!
//! Core traits and types for the Ravelin agent runtime facade.
//! This crate provides the fundamental building blocks: validated
//! identifiers, the dynamic value model, the session lifecycle, the tool
//! capability trait, and the error taxonomy.

pub mod error;
pub mod identifiers;
pub mod session;
pub mod tool;
pub mod value;

pub use error::{
    RavelinError, RavelinResult, SessionError, SessionResult, ToolError, ToolResult,
};
pub use identifiers::{IdValidationError, IdValidator, SessionId, ToolId};
pub use session::Session;
pub use tool::{Tool, ToolOutput};
pub use value::{Value, ValueMap};
