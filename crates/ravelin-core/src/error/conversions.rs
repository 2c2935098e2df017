//! Error type conversions and From trait implementations.
//!
//! The umbrella [`RavelinError`] is defined here alongside its conversions
//! so the `?` operator propagates domain errors through runtime operations
//! without manual wrapping.

use super::session::SessionError;
use super::tool::ToolError;

/// Main error type for runtime operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RavelinError {
    /// Session lifecycle errors.
    Session(SessionError),

    /// Tool lookup and registration errors.
    Tool(ToolError),
}

impl std::fmt::Display for RavelinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RavelinError::Session(e) => write!(f, "Session error: {}", e),
            RavelinError::Tool(e) => write!(f, "Tool error: {}", e),
        }
    }
}

impl std::error::Error for RavelinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RavelinError::Session(e) => Some(e),
            RavelinError::Tool(e) => Some(e),
        }
    }
}

impl From<SessionError> for RavelinError {
    fn from(err: SessionError) -> Self {
        RavelinError::Session(err)
    }
}

impl From<ToolError> for RavelinError {
    fn from(err: ToolError) -> Self {
        RavelinError::Tool(err)
    }
}

/// Result type alias for runtime operations.
pub type RavelinResult<T> = Result<T, RavelinError>;
