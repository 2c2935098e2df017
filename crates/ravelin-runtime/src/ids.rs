//! Session id generation.

use ravelin_core::SessionId;

/// Source of fresh session ids.
///
/// Ids must be collision-resistant across the process lifetime; the
/// production source draws UUID v4 values from the operating system's
/// random source. Hosts inject a deterministic source (see
/// `ravelin-testing`) for reproducible tests.
pub trait IdSource: Send + Sync {
    /// Produce a fresh, unique session id.
    fn next_id(&self) -> SessionId;
}

/// Production id source backed by UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn next_id(&self) -> SessionId {
        SessionId::generate()
    }
}
