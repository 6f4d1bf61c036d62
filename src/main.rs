//! Unreal MCP Server Binary
//!
//! Standalone MCP (Model Context Protocol) server that lets AI agents drive
//! a running Unreal Engine editor. It reads JSON-RPC 2.0 from stdin, writes
//! responses to stdout, and relays each tool invocation to the UnrealMCP
//! editor plugin over TCP.
//!
//! Architecture:
//!   AI Agent (Claude, Cursor, ...) → stdio → MCP server → TCP (port 55557) → Unreal Editor
//!
//! # Usage
//!
//! ```bash
//! # Start the Unreal editor with the UnrealMCP plugin enabled, then:
//! cargo run
//! ```
//!
//! # Configuration
//!
//! - `UNREAL_HOST`: Editor plugin host, defaults to 127.0.0.1
//! - `UNREAL_PORT`: Editor plugin port, defaults to 55557
//! - `UNREAL_TIMEOUT`: Per-command response timeout in seconds, defaults to 10
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use std::sync::Arc;
use unreal_mcp_server::engine::{EngineConfig, TcpEngineConnection};
use unreal_mcp_server::mcp::run_mcp_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging. stdout carries JSON-RPC responses, so both the
    // subscriber and the startup banner write to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("unreal_mcp_server=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let engine = Arc::new(TcpEngineConnection::new(EngineConfig::from_env())?);

    eprintln!("🔧 Unreal MCP server");
    eprintln!(
        "   Engine: {} (UNREAL_HOST/UNREAL_PORT)",
        engine.config().addr()
    );
    eprintln!("   Command timeout: {}s", engine.config().timeout().as_secs());
    eprintln!("   Transport: stdio");
    eprintln!();

    // Serve until stdin closes
    run_mcp_server(engine).await
}
