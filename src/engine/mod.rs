//! Unreal Engine connection layer
//!
//! Everything that touches the editor process lives here: the
//! [`EngineConnection`] trait that handlers talk through, the TCP
//! implementation used in production, and the connection configuration.
//! MCP protocol code never opens sockets itself.

pub mod config;
pub mod connection;
pub mod error;

#[cfg(test)]
pub mod mock;

pub use config::{EngineConfig, DEFAULT_ENGINE_PORT};
pub use connection::{EngineConnection, TcpEngineConnection};
pub use error::{EngineError, EngineResult};
