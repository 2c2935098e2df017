//! Session lifecycle
//!
//! A [`Session`] is a handle for one continuous interaction scope: an opaque
//! id, an immutable context map, and an open/closed flag. The flag is the
//! only mutable field and moves in one direction.

use crate::error::{SessionError, SessionResult};
use crate::identifiers::SessionId;
use crate::value::ValueMap;

/// A runtime session with an Open → Closed lifecycle.
///
/// Sessions are minted by the runtime (`Runtime::start_session`) and closed
/// through it. The close transition takes `&mut self`, so exclusive access is
/// enforced by the borrow checker; sharing a session across threads requires
/// caller-side synchronization.
///
/// # Example
///
/// ```rust
/// use ravelin_core::{Session, SessionId, ValueMap};
///
/// let mut session = Session::new(SessionId::generate(), ValueMap::new());
/// assert!(!session.is_closed());
///
/// session.close().unwrap();
/// assert!(session.is_closed());
/// assert!(session.close().is_err());
/// ```
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    context: ValueMap,
    closed: bool,
}

impl Session {
    /// Create a new open session with the given id and context.
    pub fn new(id: SessionId, context: ValueMap) -> Self {
        Self {
            id,
            context,
            closed: false,
        }
    }

    /// The session id, fixed at creation.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// The context attached at creation, immutable for the session lifetime.
    pub fn context(&self) -> &ValueMap {
        &self.context
    }

    /// Whether the session has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Transition the session to Closed.
    ///
    /// Fails with [`SessionError::AlreadyClosed`] if the session is already
    /// closed; the session stays closed either way. This is the only state
    /// transition a session has.
    pub fn close(&mut self) -> SessionResult<()> {
        if self.closed {
            return Err(SessionError::AlreadyClosed {
                id: self.id.clone(),
            });
        }
        self.closed = true;
        Ok(())
    }
}
