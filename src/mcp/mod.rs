//! Model Context Protocol (MCP) Integration
//!
//! Pure protocol implementation for stdio-based JSON-RPC 2.0 server.
//! Provides AI agent access to Unreal Engine editor operations with no
//! framework dependencies.
//!
//! # Architecture
//!
//! - **Thin glue**: Tools validate and reshape arguments, then forward
//! - **Shared EngineConnection**: One TCP boundary to the editor plugin
//! - **stdio transport**: JSON-RPC 2.0 over stdin/stdout
//! - **Transport agnostic handlers**: Can be driven by any Rust host
//!
//! # Usage
//!
//! AI agents send JSON-RPC requests via stdio:
//!
//! ```json
//! {
//!   "jsonrpc": "2.0",
//!   "id": 1,
//!   "method": "tools/call",
//!   "params": {
//!     "name": "spawn_actor",
//!     "arguments": {
//!       "name": "Cube1",
//!       "type": "StaticMeshActor",
//!       "location": [0, 0, 100]
//!     }
//!   }
//! }
//! ```
//!
//! Tool names are also accepted as bare methods, so the line above could
//! equally be `"method": "spawn_actor"` with the arguments as `params`.

pub mod handlers;
pub mod server;
pub mod types;

pub use server::{run_mcp_server, run_mcp_server_with_callback, ResponseCallback};
pub use types::{MCPError, MCPRequest, MCPResponse};
