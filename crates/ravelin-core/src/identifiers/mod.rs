//! Validated identifier types for the Ravelin runtime
//!
//! All identifiers use `parse()` constructors that return `Result` instead of
//! panicking on invalid input, and each identifier is a distinct newtype so a
//! `ToolId` cannot be passed where a `SessionId` is expected. Both types share
//! the same validation rules (see [`IdValidator`]) for predictable behavior.
//!
//! # Examples
//!
//! ```rust
//! use ravelin_core::identifiers::{SessionId, ToolId};
//!
//! let tool = ToolId::parse("file_search").unwrap();
//! let session = SessionId::parse("session_abc123").unwrap();
//!
//! assert!(ToolId::parse("").is_err());
//! assert!(ToolId::parse("tool with spaces").is_err());
//! ```

mod validation;

pub use validation::{IdValidationError, IdValidator, MAX_ID_LENGTH};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a runtime session.
///
/// Session ids are opaque, assigned at session creation, and immutable for
/// the lifetime of the session. They are used for result correlation and
/// error reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

impl SessionId {
    /// Parse and validate a session ID from a string
    pub fn parse(id: impl AsRef<str>) -> Result<Self, IdValidationError> {
        IdValidator::validate(id.as_ref()).map(|s| Self(s.to_string()))
    }

    /// Get the session ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Generate a new random session ID using UUID v4.
    ///
    /// UUID v4 draws from the operating system's cryptographically strong
    /// random source, so generated ids are collision-resistant across the
    /// process lifetime.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Create a session ID without validation (for testing only)
    #[doc(hidden)]
    pub fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = IdValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

impl TryFrom<String> for SessionId {
    type Error = IdValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

/// Unique identifier for a tool.
///
/// Tool ids key the registry and are case-sensitive. By convention tool
/// implementations pick lowercase names with underscores (`file_search`,
/// `text_analyze`); the validator accepts the broader identifier alphabet
/// and the registry enforces validity at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToolId(String);

impl ToolId {
    /// Parse and validate a tool ID from a string
    pub fn parse(id: impl AsRef<str>) -> Result<Self, IdValidationError> {
        IdValidator::validate(id.as_ref()).map(|s| Self(s.to_string()))
    }

    /// Get the tool ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create a tool ID without validation (for testing only)
    #[doc(hidden)]
    pub fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ToolId {
    type Err = IdValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ToolId> for String {
    fn from(id: ToolId) -> Self {
        id.0
    }
}

impl TryFrom<String> for ToolId {
    type Error = IdValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
