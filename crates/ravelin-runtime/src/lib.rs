//! # Ravelin Runtime
//!
//! The orchestration layer of the Ravelin facade. A [`Runtime`] mints
//! sessions, enforces the closed-session invariant, and routes execution
//! requests either through the deterministic template renderer ([`Runtime::run`])
//! or the tool registry ([`Runtime::execute_tool`]).
//!
//! Timestamps and session ids come from injectable services ([`Clock`],
//! [`IdSource`]) so hosts and tests can substitute deterministic sources.

pub mod clock;
pub mod ids;
pub mod render;
pub mod result;
pub mod runtime;

pub use clock::{Clock, SystemClock};
pub use ids::{IdSource, RandomIdSource};
pub use result::RunResult;
pub use runtime::{DEFAULT_LABEL, Runtime, RuntimeBuilder};
