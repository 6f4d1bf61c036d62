//! MCP Request Handlers
//!
//! Handler modules for the Unreal tool surface. Actor and level tools live
//! in `editor`, Enhanced Input and project tools in `project`. Every tool
//! handler validates its arguments, reshapes them into one engine command,
//! and forwards it through [`send_engine_command`] so transport failures
//! and engine-reported errors map onto MCP errors the same way everywhere.

pub mod editor;
pub mod initialize;
pub mod project;
pub mod tools;

use crate::engine::{EngineConnection, EngineError};
use crate::mcp::types::MCPError;
use serde_json::Value;
use std::sync::Arc;

/// Forward one command to the engine and normalize its reply
///
/// The three transport outcomes map onto MCP error codes:
/// - connect failure becomes `ENGINE_UNAVAILABLE`
/// - no reply before the timeout becomes `ENGINE_NO_RESPONSE`
/// - any other socket or framing failure becomes `ENGINE_COMMAND_FAILED`
///
/// A reply of `{"status": "error", "error": "..."}` is an engine-reported
/// failure and becomes `ENGINE_COMMAND_FAILED` with the engine's message.
/// Successful replies are unwrapped to their `result` payload when the
/// plugin used the `{"status": "success", "result": {...}}` envelope;
/// bare documents pass through unchanged.
pub(crate) async fn send_engine_command<E: EngineConnection>(
    engine: &Arc<E>,
    command: &str,
    params: Value,
) -> Result<Value, MCPError> {
    let response = engine
        .send_command(command, params)
        .await
        .map_err(|e| match e {
            EngineError::Connect { .. } => MCPError::engine_unavailable(e.to_string()),
            other => MCPError::engine_command_failed(other.to_string()),
        })?;

    let response = response.ok_or_else(|| {
        MCPError::engine_no_response(format!(
            "No response from Unreal Engine for '{}'",
            command
        ))
    })?;

    if response["status"] == "error" {
        let message = response["error"]
            .as_str()
            .unwrap_or("Unknown engine error")
            .to_string();
        return Err(MCPError::engine_command_failed(message));
    }

    match response.get("result") {
        Some(result) => Ok(result.clone()),
        None => Ok(response),
    }
}

// Include tests
#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_test;
