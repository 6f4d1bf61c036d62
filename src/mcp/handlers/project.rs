//! MCP Project and Enhanced Input Tool Handlers
//!
//! Tools for project-wide state: legacy input mappings, Enhanced Input
//! assets (InputAction / InputMappingContext), and their bindings. Same
//! shape as the editor handlers: validate, reshape, forward.

use crate::engine::EngineConnection;
use crate::mcp::handlers::send_engine_command;
use crate::mcp::types::MCPError;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

fn default_input_type() -> String {
    "Action".to_string()
}

fn default_value_type() -> String {
    "Digital".to_string()
}

fn default_action_path() -> String {
    "/Game/Input/Actions".to_string()
}

fn default_context_path() -> String {
    "/Game/Input".to_string()
}

fn default_query_path() -> String {
    "/Game".to_string()
}

/// Parameters for create_input_mapping
#[derive(Debug, Deserialize)]
pub struct CreateInputMappingParams {
    /// Name of the action mapping (e.g. "Jump")
    pub action_name: String,

    /// Key to bind (e.g. "SpaceBar", "LeftMouseButton")
    pub key: String,

    /// "Action" or "Axis"
    #[serde(default = "default_input_type")]
    pub input_type: String,

    #[serde(default)]
    pub shift: Option<bool>,
    #[serde(default)]
    pub ctrl: Option<bool>,
    #[serde(default)]
    pub alt: Option<bool>,
    #[serde(default)]
    pub cmd: Option<bool>,
}

/// Parameters for create_input_action
#[derive(Debug, Deserialize)]
pub struct CreateInputActionParams {
    /// Asset name, conventionally prefixed IA_ (e.g. "IA_Interact")
    pub name: String,

    /// Content path for the asset
    #[serde(default = "default_action_path")]
    pub path: String,

    /// Digital, Axis1D, Axis2D, or Axis3D
    #[serde(default = "default_value_type")]
    pub value_type: String,
}

/// Parameters for create_input_mapping_context
#[derive(Debug, Deserialize)]
pub struct CreateInputMappingContextParams {
    /// Asset name, conventionally prefixed IMC_ (e.g. "IMC_Player")
    pub name: String,

    /// Content path for the asset
    #[serde(default = "default_context_path")]
    pub path: String,
}

/// Parameters for add_mapping_to_context and remove_mapping_from_context
#[derive(Debug, Deserialize)]
pub struct ContextMappingParams {
    /// Name or path of the InputMappingContext
    pub context_name: String,

    /// Name or path of the InputAction
    pub action_name: String,

    /// Key to bind (e.g. "E", "SpaceBar")
    pub key: String,
}

/// Parameters for get_input_actions and get_input_mapping_contexts
#[derive(Debug, Deserialize)]
pub struct InputAssetQueryParams {
    /// Content path filter
    #[serde(default = "default_query_path")]
    pub path: String,
}

/// Handle create_input_mapping tool call
///
/// Legacy (pre Enhanced Input) action mapping in the project input
/// settings. Modifier flags are only forwarded when given so the engine
/// keeps its own defaults otherwise.
pub async fn handle_create_input_mapping<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: CreateInputMappingParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    let mut command = json!({
        "action_name": params.action_name,
        "key": params.key,
        "input_type": params.input_type
    });
    if let Some(shift) = params.shift {
        command["shift"] = json!(shift);
    }
    if let Some(ctrl) = params.ctrl {
        command["ctrl"] = json!(ctrl);
    }
    if let Some(alt) = params.alt {
        command["alt"] = json!(alt);
    }
    if let Some(cmd) = params.cmd {
        command["cmd"] = json!(cmd);
    }

    send_engine_command(engine, "create_input_mapping", command).await
}

/// Handle create_input_action tool call
pub async fn handle_create_input_action<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: CreateInputActionParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    send_engine_command(
        engine,
        "create_input_action",
        json!({
            "name": params.name,
            "path": params.path,
            "value_type": params.value_type
        }),
    )
    .await
}

/// Handle create_input_mapping_context tool call
pub async fn handle_create_input_mapping_context<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: CreateInputMappingContextParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    send_engine_command(
        engine,
        "create_input_mapping_context",
        json!({
            "name": params.name,
            "path": params.path
        }),
    )
    .await
}

/// Handle add_mapping_to_context tool call
pub async fn handle_add_mapping_to_context<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: ContextMappingParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    send_engine_command(
        engine,
        "add_mapping_to_context",
        json!({
            "context_name": params.context_name,
            "action_name": params.action_name,
            "key": params.key
        }),
    )
    .await
}

/// Handle remove_mapping_from_context tool call
pub async fn handle_remove_mapping_from_context<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: ContextMappingParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    send_engine_command(
        engine,
        "remove_mapping_from_context",
        json!({
            "context_name": params.context_name,
            "action_name": params.action_name,
            "key": params.key
        }),
    )
    .await
}

/// Handle get_input_actions tool call
pub async fn handle_get_input_actions<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: InputAssetQueryParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    send_engine_command(engine, "get_input_actions", json!({ "path": params.path })).await
}

/// Handle get_input_mapping_contexts tool call
pub async fn handle_get_input_mapping_contexts<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: InputAssetQueryParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    send_engine_command(
        engine,
        "get_input_mapping_contexts",
        json!({ "path": params.path }),
    )
    .await
}

// Include tests
#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;
