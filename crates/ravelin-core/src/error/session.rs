//! Session lifecycle errors.

use crate::identifiers::SessionId;
use std::fmt;

/// Errors raised by the session state machine and the operations gated on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The close transition was invoked on a session that is already closed.
    AlreadyClosed {
        /// Id of the offending session
        id: SessionId,
    },

    /// An execution operation was invoked on a closed session.
    Closed {
        /// Id of the offending session
        id: SessionId,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::AlreadyClosed { id } => {
                write!(f, "Session '{}' is already closed", id)
            }
            SessionError::Closed { id } => {
                write!(f, "Cannot operate on closed session '{}'", id)
            }
        }
    }
}

impl std::error::Error for SessionError {}

impl SessionError {
    /// Create an AlreadyClosed error for the given session.
    pub fn already_closed(id: SessionId) -> Self {
        SessionError::AlreadyClosed { id }
    }

    /// Create a Closed error for the given session.
    pub fn closed(id: SessionId) -> Self {
        SessionError::Closed { id }
    }

    /// Id of the session this error refers to.
    pub fn session_id(&self) -> &SessionId {
        match self {
            SessionError::AlreadyClosed { id } | SessionError::Closed { id } => id,
        }
    }
}

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_session_id() {
        let id = SessionId::new_unchecked("sess-1");

        let already = SessionError::already_closed(id.clone());
        assert!(already.to_string().contains("sess-1"));
        assert!(already.to_string().contains("already closed"));

        let closed = SessionError::closed(id);
        assert!(closed.to_string().contains("closed session 'sess-1'"));
    }

    #[test]
    fn session_id_accessor_covers_both_kinds() {
        let id = SessionId::new_unchecked("sess-2");
        assert_eq!(
            SessionError::already_closed(id.clone()).session_id(),
            &id
        );
        assert_eq!(SessionError::closed(id.clone()).session_id(), &id);
    }
}
