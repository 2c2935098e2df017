//! Tool lookup and registration errors.

use crate::identifiers::{IdValidationError, ToolId};
use std::fmt;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// Tool was not found in the registry.
    ///
    /// Carries the registry's current listing (registration order) so the
    /// caller can present what was actually available.
    NotFound {
        /// The requested tool id
        name: ToolId,
        /// Names registered at lookup time, in registration order
        registered: Vec<ToolId>,
    },

    /// A tool name failed identifier validation.
    InvalidName {
        /// The invalid name that was provided
        attempted: String,
        /// Validation error details
        source: IdValidationError,
    },
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::NotFound { name, registered } => {
                write!(f, "Tool '{}' is not registered. Available tools: ", name)?;
                if registered.is_empty() {
                    write!(f, "(none)")
                } else {
                    let names: Vec<&str> = registered.iter().map(ToolId::as_str).collect();
                    write!(f, "{}", names.join(", "))
                }
            }
            ToolError::InvalidName { attempted, source } => {
                write!(f, "Invalid tool name '{}': {}", attempted, source)
            }
        }
    }
}

impl std::error::Error for ToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ToolError::NotFound { .. } => None,
            ToolError::InvalidName { source, .. } => Some(source),
        }
    }
}

impl ToolError {
    /// Create a NotFound error carrying the current registry listing.
    pub fn not_found(name: ToolId, registered: Vec<ToolId>) -> Self {
        ToolError::NotFound { name, registered }
    }

    /// Create an InvalidName error from a failed parse.
    pub fn invalid_name(attempted: impl Into<String>, source: IdValidationError) -> Self {
        ToolError::InvalidName {
            attempted: attempted.into(),
            source,
        }
    }

    /// The tool name this error refers to, when it parsed.
    pub fn tool_name(&self) -> Option<&str> {
        match self {
            ToolError::NotFound { name, .. } => Some(name.as_str()),
            ToolError::InvalidName { .. } => None,
        }
    }
}

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_lists_registered_tools() {
        let error = ToolError::not_found(
            ToolId::new_unchecked("missing"),
            vec![ToolId::new_unchecked("echo"), ToolId::new_unchecked("search")],
        );

        let rendered = error.to_string();
        assert!(rendered.contains("'missing' is not registered"));
        assert!(rendered.contains("echo, search"));
        assert_eq!(error.tool_name(), Some("missing"));
    }

    #[test]
    fn not_found_on_empty_registry_shows_none_marker() {
        let error = ToolError::not_found(ToolId::new_unchecked("missing"), Vec::new());
        assert!(error.to_string().contains("(none)"));
    }

    #[test]
    fn invalid_name_carries_validation_source() {
        let source = ToolId::parse("bad name").unwrap_err();
        let error = ToolError::invalid_name("bad name", source);

        assert!(error.to_string().contains("Invalid tool name 'bad name'"));
        assert_eq!(error.tool_name(), None);
        assert!(std::error::Error::source(&error).is_some());
    }
}
