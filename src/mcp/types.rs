//! MCP JSON-RPC 2.0 Types
//!
//! Type definitions for Model Context Protocol communication.
//! Implements JSON-RPC 2.0 specification for stdio-based MCP transport.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request structure
///
/// # Example
///
/// ```json
/// {
///     "jsonrpc": "2.0",
///     "id": 123,
///     "method": "tools/call",
///     "params": {
///         "name": "spawn_actor",
///         "arguments": { "name": "Cube1", "type": "StaticMeshActor" }
///     }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct MCPRequest {
    /// JSON-RPC version (must be "2.0")
    #[serde(deserialize_with = "jsonrpc_version")]
    pub jsonrpc: String,

    /// Request identifier (used to match responses)
    pub id: u64,

    /// Method name to invoke
    pub method: String,

    /// Method parameters as JSON value
    #[serde(default)]
    pub params: Value,
}

/// JSON-RPC 2.0 notification (a request without an id)
///
/// Clients send these for protocol events like `notifications/initialized`.
/// No response is ever written for a notification. `deny_unknown_fields`
/// keeps requests with an `id` from parsing as notifications.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MCPNotification {
    /// JSON-RPC version (must be "2.0")
    #[serde(deserialize_with = "jsonrpc_version")]
    pub jsonrpc: String,

    /// Notification method name
    pub method: String,

    /// Notification parameters as JSON value
    #[serde(default)]
    pub params: Value,
}

/// JSON-RPC 2.0 response structure
///
/// # Success Example
///
/// ```json
/// {
///     "jsonrpc": "2.0",
///     "id": 123,
///     "result": { "name": "Cube1", "status": "success" }
/// }
/// ```
///
/// # Error Example
///
/// ```json
/// {
///     "jsonrpc": "2.0",
///     "id": 123,
///     "error": {
///         "code": -32600,
///         "message": "Invalid request"
///     }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct MCPResponse {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,

    /// Request identifier (matches request)
    pub id: u64,

    /// Success result (mutually exclusive with error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Error information (mutually exclusive with result)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<MCPError>,
}

/// JSON-RPC 2.0 error structure
#[derive(Debug, Serialize, Clone)]
pub struct MCPError {
    /// Error code (standard JSON-RPC or engine-specific)
    pub code: i32,

    /// Human-readable error message
    pub message: String,

    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

// JSON-RPC 2.0 standard error codes
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

// Engine-specific error codes (application errors: -32000 to -32099)
pub const ENGINE_UNAVAILABLE: i32 = -32000;
pub const ENGINE_NO_RESPONSE: i32 = -32001;
pub const ENGINE_COMMAND_FAILED: i32 = -32002;
pub const VALIDATION_ERROR: i32 = -32003;

impl MCPError {
    /// Create a parse error
    pub fn parse_error(message: String) -> Self {
        Self {
            code: PARSE_ERROR,
            message,
            data: None,
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: String) -> Self {
        Self {
            code: INVALID_REQUEST,
            message,
            data: None,
        }
    }

    /// Create a method not found error
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {}", method),
            data: None,
        }
    }

    /// Create an invalid params error
    pub fn invalid_params(message: String) -> Self {
        Self {
            code: INVALID_PARAMS,
            message,
            data: None,
        }
    }

    /// Create an internal error
    pub fn internal_error(message: String) -> Self {
        Self {
            code: INTERNAL_ERROR,
            message,
            data: None,
        }
    }

    /// Create an engine unavailable error (TCP connect failed)
    pub fn engine_unavailable(message: String) -> Self {
        Self {
            code: ENGINE_UNAVAILABLE,
            message,
            data: None,
        }
    }

    /// Create an engine no response error (command sent, nothing came back)
    pub fn engine_no_response(message: String) -> Self {
        Self {
            code: ENGINE_NO_RESPONSE,
            message,
            data: None,
        }
    }

    /// Create an engine command failed error (engine reported an error)
    pub fn engine_command_failed(message: String) -> Self {
        Self {
            code: ENGINE_COMMAND_FAILED,
            message,
            data: None,
        }
    }

    /// Create a validation error
    pub fn validation_error(message: String) -> Self {
        Self {
            code: VALIDATION_ERROR,
            message,
            data: None,
        }
    }
}

impl MCPResponse {
    /// Create a success response
    pub fn success(id: u64, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(id: u64, error: MCPError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// Deserialize the `jsonrpc` field, rejecting anything but "2.0"
fn jsonrpc_version<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let version = String::deserialize(deserializer)?;
    if version != "2.0" {
        return Err(serde::de::Error::custom(format!(
            "unsupported JSON-RPC version: {}",
            version
        )));
    }
    Ok(version)
}

// Include tests
#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
