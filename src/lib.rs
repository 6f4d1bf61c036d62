//! Unreal MCP Server
//!
//! This crate bridges AI agents to a running Unreal Engine editor. It speaks
//! the Model Context Protocol over stdio on one side and the UnrealMCP editor
//! plugin's TCP socket on the other.
//!
//! # Architecture
//!
//! - **Thin glue layer**: Tools validate arguments and reshape them into
//!   engine commands; all editor semantics live in the engine plugin
//! - **One socket per command**: Each engine command opens a fresh TCP
//!   connection, mirroring how the plugin's listener consumes clients
//! - **Stateless**: No caching or session state; the editor is the only
//!   source of truth
//!
//! # Modules
//!
//! - [`engine`] - TCP connection to the editor plugin and its configuration
//! - [`mcp`] - MCP stdio server, tool catalogue, and request handlers

pub mod engine;
pub mod mcp;

// Re-export commonly used types
pub use engine::{EngineConfig, EngineConnection, EngineError, TcpEngineConnection};
pub use mcp::{run_mcp_server, run_mcp_server_with_callback, MCPError, MCPRequest, MCPResponse};
