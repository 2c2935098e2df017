//! End-to-end demo: start a session, run a prompt, dispatch tools, close.
//!
//! Run with: `cargo run -p ravelin --example agent_session`

use ravelin::{EchoTool, Runtime, TextAnalyzeTool, TextReverseTool, ToolRegistry, ValueMap};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let registry = ToolRegistry::new()
        .with_tool(Arc::new(EchoTool::new()))
        .with_tool(Arc::new(TextReverseTool::new()))
        .with_tool(Arc::new(TextAnalyzeTool::new()));

    let runtime = Runtime::new(registry);

    println!("Available tools:");
    for (name, description) in runtime.registry().describe_tools() {
        println!("  {name}: {description}");
    }

    let mut session = runtime.start_session(
        ValueMap::new()
            .with("project", "apollo")
            .with("env", "staging"),
    );
    println!("\nStarted session {}", session.id());

    let planned = runtime.run(&session, "Prepare a deployment checklist")?;
    println!("\n{}", planned.output());

    let analyzed = runtime.execute_tool(
        &session,
        "text_analyze",
        ValueMap::new().with("text", "one two three"),
    )?;
    println!("\n{} -> {}", analyzed.input(), analyzed.output());

    runtime.close_session(&mut session)?;
    println!("\nClosed session {}", session.id());

    if let Err(error) = runtime.run(&session, "too late") {
        println!("Further runs are rejected: {error}");
    }

    Ok(())
}
