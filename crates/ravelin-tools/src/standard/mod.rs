//! Standard tool library.
//!
//! Pure, in-process tools with no I/O of any kind. They exist so hosts have
//! working capabilities to register out of the box and so tests have
//! realistic fixtures.

mod text;

pub use text::{EchoTool, TextAnalyzeTool, TextReverseTool};
