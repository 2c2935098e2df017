//! # Ravelin Testing
//!
//! Testing utilities for the Ravelin runtime facade: mock tools with call
//! tracking, deterministic clock and id sources, and a scenario harness for
//! asserting on rendered output.

pub mod fixed;
pub mod harness;
pub mod mock_tools;

pub use fixed::{FixedClock, SequentialIdSource};
pub use harness::{HarnessError, RuntimeHarness, Scenario};
pub use mock_tools::{MockTool, MockToolRegistry};
