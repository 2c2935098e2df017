//! Runtime facade: session lifecycle plus execution routing.

use chrono::SecondsFormat;
use ravelin_core::{RavelinResult, Session, SessionError, Value, ValueMap};
use ravelin_tools::ToolRegistry;

use crate::clock::{Clock, SystemClock};
use crate::ids::{IdSource, RandomIdSource};
use crate::render;
use crate::result::RunResult;

/// Default identity label stamped into result metadata and output.
pub const DEFAULT_LABEL: &str = "Ravelin Runtime";

/// Orchestration facade over sessions and the tool registry.
///
/// The runtime mints sessions, enforces the closed-session invariant ahead
/// of every execution path, and routes work either through the deterministic
/// template renderer (`run`) or the tool registry (`execute_tool`).
///
/// The registry is always supplied at construction; callers wanting an empty
/// one construct it explicitly. Clock and id source default to the
/// production implementations and can be overridden through the builder.
///
/// # Example
///
/// ```rust
/// use ravelin_runtime::Runtime;
/// use ravelin_tools::ToolRegistry;
/// use ravelin_core::ValueMap;
///
/// let runtime = Runtime::new(ToolRegistry::new());
/// let session = runtime.start_session(ValueMap::new().with("env", "prod"));
///
/// let result = runtime.run(&session, "Prepare a deployment checklist").unwrap();
/// assert!(result.output().contains("env=prod"));
/// ```
pub struct Runtime {
    label: String,
    registry: ToolRegistry,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdSource>,
}

impl Runtime {
    /// Create a runtime over the given registry with production defaults.
    pub fn new(registry: ToolRegistry) -> Self {
        Self::builder(registry).build()
    }

    /// Start configuring a runtime over the given registry.
    pub fn builder(registry: ToolRegistry) -> RuntimeBuilder {
        RuntimeBuilder {
            label: DEFAULT_LABEL.to_string(),
            registry,
            clock: Box::new(SystemClock),
            ids: Box::new(RandomIdSource),
        }
    }

    /// The identity label stamped into results.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The tool registry backing `execute_tool`.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Mutable access to the registry, for registration after construction.
    pub fn registry_mut(&mut self) -> &mut ToolRegistry {
        &mut self.registry
    }

    /// Start a session with the given context.
    ///
    /// The id comes from the runtime's id source and is unique across the
    /// process lifetime; the context is attached immutably.
    pub fn start_session(&self, context: ValueMap) -> Session {
        let id = self.ids.next_id();
        tracing::debug!(session = %id, "session started");
        Session::new(id, context)
    }

    /// Close an active session.
    ///
    /// Fails with [`SessionError::AlreadyClosed`] if the session is already
    /// closed. After closing, no further `run`/`execute_tool` calls are
    /// accepted for the session.
    pub fn close_session(&self, session: &mut Session) -> RavelinResult<()> {
        session.close()?;
        tracing::debug!(session = %session.id(), "session closed");
        Ok(())
    }

    /// Run a prompt through the runtime.
    ///
    /// Fails with [`SessionError::Closed`] on a closed session before any
    /// metadata or output is computed. The output is a deterministic
    /// template over the label, session id, input, and rendered context.
    pub fn run(&self, session: &Session, input: &str) -> RavelinResult<RunResult> {
        self.ensure_open(session)?;

        let metadata = ValueMap::new()
            .with("runtime", self.label.as_str())
            .with("timestamp", self.timestamp())
            .with("tokens_estimate", render::estimate_tokens(input) as i64);

        let output = render::render_output(&self.label, session, input);
        tracing::debug!(session = %session.id(), "run completed");

        Ok(RunResult::new(session.id().clone(), input, output, metadata))
    }

    /// Execute a registered tool within a session.
    ///
    /// Fails with [`SessionError::Closed`] on a closed session, and
    /// propagates the registry's `ToolError::NotFound` unchanged for
    /// unregistered names. On success the tool's output map is wrapped into
    /// a [`RunResult`]: the `output` entry is used as the result output when
    /// present, otherwise the whole map is rendered as JSON.
    pub fn execute_tool(
        &self,
        session: &Session,
        tool_name: &str,
        parameters: ValueMap,
    ) -> RavelinResult<RunResult> {
        self.ensure_open(session)?;

        let tool_output = self.registry.execute(tool_name, session, &parameters)?;

        let output = match tool_output.get("output") {
            Some(value) => value.to_string(),
            None => Value::Map(tool_output).to_string(),
        };

        let metadata = ValueMap::new()
            .with("runtime", self.label.as_str())
            .with("timestamp", self.timestamp())
            .with("tool", tool_name)
            .with("parameters", parameters);

        tracing::debug!(session = %session.id(), tool = tool_name, "tool executed");

        Ok(RunResult::new(
            session.id().clone(),
            format!("tool:{tool_name}"),
            output,
            metadata,
        ))
    }

    fn ensure_open(&self, session: &Session) -> Result<(), SessionError> {
        if session.is_closed() {
            return Err(SessionError::closed(session.id().clone()));
        }
        Ok(())
    }

    fn timestamp(&self) -> String {
        self.clock
            .now()
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Builder for configuring [`Runtime`] instances.
pub struct RuntimeBuilder {
    label: String,
    registry: ToolRegistry,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdSource>,
}

impl RuntimeBuilder {
    /// Override the identity label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Override the clock used for result timestamps.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Override the session id source.
    pub fn id_source(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Build the configured runtime.
    pub fn build(self) -> Runtime {
        Runtime {
            label: self.label,
            registry: self.registry,
            clock: self.clock,
            ids: self.ids,
        }
    }
}
