//! MCP stdio Server
//!
//! Async Tokio task that handles JSON-RPC 2.0 requests over stdin/stdout.
//! Pure protocol implementation with no framework dependencies: every
//! request is parsed, dispatched to a handler, and answered on its own,
//! one JSON document per line.

use crate::engine::EngineConnection;
use crate::mcp::handlers::{initialize, tools};
use crate::mcp::types::{MCPError, MCPNotification, MCPRequest, MCPResponse};
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tracing::{debug, error, info, instrument, warn};

/// Callback type for handling successful responses
///
/// Receives (method_name, result_value) after successful operation execution.
/// Useful for event emissions or logging in host integrations.
pub type ResponseCallback = Arc<dyn Fn(&str, &Value) + Send + Sync>;

/// Run the MCP stdio server
///
/// Reads JSON-RPC requests from stdin, processes them via handlers,
/// and writes responses to stdout. Runs indefinitely until EOF on stdin.
///
/// # Arguments
///
/// * `engine` - Shared connection to the Unreal Engine editor plugin
///
/// # Returns
///
/// Returns Ok(()) when stdin is closed, or Err on fatal errors
#[instrument(skip(engine))]
pub async fn run_mcp_server<E: EngineConnection>(engine: Arc<E>) -> anyhow::Result<()> {
    run_mcp_server_with_callback(engine, None).await
}

/// Run the MCP stdio server with an optional response callback
///
/// Same as `run_mcp_server` but allows providing a callback function that
/// will be invoked after each successful operation. This is useful for
/// host integrations that need to emit events or perform side effects.
///
/// # Arguments
///
/// * `engine` - Shared connection to the Unreal Engine editor plugin
/// * `callback` - Optional callback invoked with (method, result) on success
///
/// # Returns
///
/// Returns Ok(()) when stdin is closed, or Err on fatal errors
#[instrument(skip(engine, callback))]
pub async fn run_mcp_server_with_callback<E: EngineConnection>(
    engine: Arc<E>,
    callback: Option<ResponseCallback>,
) -> anyhow::Result<()> {
    info!("🔌 MCP stdio server started");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let reader = BufReader::new(stdin);
    let mut writer = BufWriter::new(stdout);
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        debug!("📥 MCP request: {}", line);

        // Parse JSON-RPC request
        let request: MCPRequest = match serde_json::from_str(&line) {
            Ok(req) => req,
            Err(e) => {
                // Notifications carry no id and must never get a response
                if let Ok(notification) = serde_json::from_str::<MCPNotification>(&line) {
                    debug!("📥 MCP notification '{}' (no response)", notification.method);
                    continue;
                }

                warn!("❌ Failed to parse JSON-RPC request: {}", e);
                let error_response = MCPResponse::error(
                    0, // Unknown ID since parsing failed
                    MCPError::parse_error(format!("Invalid JSON: {}", e)),
                );
                write_response(&mut writer, &error_response).await?;
                continue;
            }
        };

        let request_id = request.id;
        let method = request.method.clone();

        // Handle request
        let response = handle_request(&engine, request).await;

        // Invoke callback on successful response
        if let Some(ref callback) = callback {
            if let Some(ref result) = response.result {
                callback(&method, result);
            }
        }

        debug!(
            "📤 MCP response for method '{}' (id={})",
            method, request_id
        );

        // Write response
        write_response(&mut writer, &response).await?;
    }

    info!("🔌 MCP stdio server stopped (stdin closed)");
    Ok(())
}

/// Handle a JSON-RPC request and return a response
#[instrument(skip(engine), fields(method = %request.method, id = %request.id))]
async fn handle_request<E: EngineConnection>(
    engine: &Arc<E>,
    request: MCPRequest,
) -> MCPResponse {
    let result = match request.method.as_str() {
        "initialize" => initialize::handle_initialize(request.params),
        "tools/list" => tools::handle_tools_list(request.params),
        "tools/call" => tools::handle_tools_call(engine, request.params).await,
        // Tool names double as bare methods for clients that skip tools/call
        method if tools::is_known_tool(method) => {
            tools::dispatch_tool(engine, method, request.params).await
        }
        _ => {
            warn!("⚠️  Unknown MCP method: {}", request.method);
            Err(MCPError::method_not_found(&request.method))
        }
    };

    match result {
        Ok(result) => {
            debug!("✅ MCP request {} succeeded", request.id);
            MCPResponse::success(request.id, result)
        }
        Err(error) => {
            error!(
                "❌ MCP request {} failed: {} (code: {})",
                request.id, error.message, error.code
            );
            MCPResponse::error(request.id, error)
        }
    }
}

/// Write a JSON-RPC response to stdout
async fn write_response(
    writer: &mut BufWriter<tokio::io::Stdout>,
    response: &MCPResponse,
) -> anyhow::Result<()> {
    let json = serde_json::to_string(response)?;
    writer.write_all(json.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

// Include tests
#[cfg(test)]
#[path = "server_test.rs"]
mod server_test;
