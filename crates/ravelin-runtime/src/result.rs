//! Runtime invocation results.

use ravelin_core::{SessionId, ValueMap};
use serde::{Deserialize, Serialize};

/// Value object returned from every runtime invocation.
///
/// Created once per invocation and never mutated; ownership passes entirely
/// to the caller. Suitable for direct display or structured logging by the
/// host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    session_id: SessionId,
    input: String,
    output: String,
    metadata: ValueMap,
}

impl RunResult {
    /// Create a runtime result.
    pub fn new(
        session_id: SessionId,
        input: impl Into<String>,
        output: impl Into<String>,
        metadata: ValueMap,
    ) -> Self {
        Self {
            session_id,
            input: input.into(),
            output: output.into(),
            metadata,
        }
    }

    /// The originating session id.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// The input prompt (or `tool:<name>` marker) submitted to the runtime.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The output response.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Response metadata.
    pub fn metadata(&self) -> &ValueMap {
        &self.metadata
    }
}
