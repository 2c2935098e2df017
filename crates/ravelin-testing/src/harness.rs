//! Scenario harness for deterministic runtime testing.
//!
//! Wires a [`Runtime`] with a pinned clock and sequential session ids, then
//! runs named scenarios whose outputs are checked against expected
//! substrings.

use crate::fixed::{FixedClock, SequentialIdSource};
use ravelin_core::ValueMap;
use ravelin_runtime::{Runtime, RunResult};
use ravelin_tools::ToolRegistry;
use thiserror::Error;

/// Errors raised by scenario execution.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// The runtime refused the scenario's operation.
    #[error("scenario '{name}' errored: {source}")]
    Runtime {
        name: String,
        #[source]
        source: ravelin_core::RavelinError,
    },

    /// The scenario ran but its output did not match.
    #[error("scenario '{name}' failed: expected output to contain '{missing}'")]
    OutputMismatch { name: String, missing: String },
}

/// A named prompt scenario with output expectations.
#[derive(Debug, Clone)]
pub struct Scenario {
    name: String,
    context: ValueMap,
    input: String,
    expected_fragments: Vec<String>,
}

impl Scenario {
    /// Create a scenario running `input` against an empty context.
    pub fn new(name: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            context: ValueMap::new(),
            input: input.into(),
            expected_fragments: Vec::new(),
        }
    }

    /// Attach session context.
    pub fn with_context(mut self, context: ValueMap) -> Self {
        self.context = context;
        self
    }

    /// Require the rendered output to contain the given fragment.
    pub fn expect_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.expected_fragments.push(fragment.into());
        self
    }
}

/// Deterministic harness around a [`Runtime`].
pub struct RuntimeHarness {
    runtime: Runtime,
}

impl RuntimeHarness {
    /// Build a harness over the given registry with a pinned clock and
    /// sequential session ids.
    pub fn new(registry: ToolRegistry) -> Self {
        let runtime = Runtime::builder(registry)
            .clock(FixedClock::at(2024, 1, 1, 0, 0, 0))
            .id_source(SequentialIdSource::new())
            .build();
        Self { runtime }
    }

    /// The wired runtime, for operations beyond scenarios.
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Run a scenario to completion and check its expectations.
    pub fn run_scenario(&self, scenario: &Scenario) -> Result<RunResult, HarnessError> {
        let session = self.runtime.start_session(scenario.context.clone());

        let result = self
            .runtime
            .run(&session, &scenario.input)
            .map_err(|source| HarnessError::Runtime {
                name: scenario.name.clone(),
                source,
            })?;

        for fragment in &scenario.expected_fragments {
            if !result.output().contains(fragment.as_str()) {
                return Err(HarnessError::OutputMismatch {
                    name: scenario.name.clone(),
                    missing: fragment.clone(),
                });
            }
        }

        Ok(result)
    }
}
