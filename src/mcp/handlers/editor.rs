//! MCP Actor and Level Tool Handlers
//!
//! Each handler validates its arguments into a typed struct, reshapes them
//! into one editor plugin command, and forwards it through
//! [`send_engine_command`]. Vector arguments deserialize as `[f64; 3]`, so
//! JSON integers coerce to floats and wrong arities are rejected before
//! anything reaches the engine.

use crate::engine::EngineConnection;
use crate::mcp::handlers::send_engine_command;
use crate::mcp::types::MCPError;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

fn zero_vec3() -> [f64; 3] {
    [0.0, 0.0, 0.0]
}

fn default_focus_distance() -> f64 {
    1000.0
}

/// Pull the actors array out of a query reply
///
/// Older plugin builds returned the array bare, newer ones wrap it; after
/// envelope unwrapping both land here. A missing array is logged and
/// treated as an empty level rather than an error.
fn actors_from(result: &Value) -> Vec<Value> {
    match result.get("actors").and_then(Value::as_array) {
        Some(actors) => actors.clone(),
        None => {
            warn!("⚠️  Engine reply had no 'actors' array: {}", result);
            Vec::new()
        }
    }
}

/// Parameters for find_actors_by_name
#[derive(Debug, Deserialize)]
pub struct FindActorsByNameParams {
    /// Wildcard pattern to match against actor names (e.g. "Cube*")
    pub pattern: String,
}

/// Parameters for spawn_actor
#[derive(Debug, Deserialize)]
pub struct SpawnActorParams {
    /// Unique name for the new actor
    pub name: String,

    /// Actor class: StaticMeshActor, PointLight, SpotLight,
    /// DirectionalLight, or CameraActor
    #[serde(rename = "type")]
    pub actor_type: String,

    /// World location [x, y, z]
    #[serde(default = "zero_vec3")]
    pub location: [f64; 3],

    /// Rotation [pitch, yaw, roll] in degrees
    #[serde(default = "zero_vec3")]
    pub rotation: [f64; 3],

    /// Per-axis scale
    #[serde(default)]
    pub scale: Option<[f64; 3]>,

    /// Mesh asset path, StaticMeshActor only
    #[serde(default)]
    pub mesh_path: Option<String>,
}

/// Parameters for delete_actor
#[derive(Debug, Deserialize)]
pub struct DeleteActorParams {
    pub name: String,
}

/// Parameters for set_actor_transform
#[derive(Debug, Deserialize)]
pub struct SetActorTransformParams {
    pub name: String,
    #[serde(default)]
    pub location: Option<[f64; 3]>,
    #[serde(default)]
    pub rotation: Option<[f64; 3]>,
    #[serde(default)]
    pub scale: Option<[f64; 3]>,
}

/// Parameters for get_actor_properties
#[derive(Debug, Deserialize)]
pub struct GetActorPropertiesParams {
    pub name: String,
}

/// Parameters for set_actor_property
#[derive(Debug, Deserialize)]
pub struct SetActorPropertyParams {
    pub name: String,
    pub property_name: String,
    pub property_value: Value,
}

/// Parameters for set_actor_static_mesh
#[derive(Debug, Deserialize)]
pub struct SetActorStaticMeshParams {
    pub name: String,
    /// Mesh asset path (e.g. "/Engine/BasicShapes/Sphere.Sphere")
    pub mesh_path: String,
}

/// Parameters for get_actor_components
#[derive(Debug, Deserialize)]
pub struct GetActorComponentsParams {
    pub name: String,
}

/// Parameters for set_actor_component_property
#[derive(Debug, Deserialize)]
pub struct SetActorComponentPropertyParams {
    pub name: String,

    /// Component name or class, matched loosely by the engine
    /// (e.g. "CharacterMovement", "CharacterMovement0")
    pub component_name: String,

    pub property_name: String,

    /// Value to set; converted to its string form for the engine's
    /// generic property writer
    pub property_value: Value,

    /// Material slot, only meaningful for material properties
    #[serde(default)]
    pub material_index: Option<i64>,
}

/// Parameters for spawn_blueprint_actor
#[derive(Debug, Deserialize)]
pub struct SpawnBlueprintActorParams {
    /// Blueprint asset to spawn from (e.g. "/Game/Blueprints/BP_Crate")
    pub blueprint_name: String,

    /// Unique name for the spawned actor
    pub actor_name: String,

    #[serde(default = "zero_vec3")]
    pub location: [f64; 3],

    #[serde(default = "zero_vec3")]
    pub rotation: [f64; 3],

    #[serde(default)]
    pub scale: Option<[f64; 3]>,
}

/// Parameters for focus_viewport
#[derive(Debug, Deserialize)]
pub struct FocusViewportParams {
    /// Actor to focus on; wins over location when both are given
    #[serde(default)]
    pub target: Option<String>,

    /// World location [x, y, z] to focus on
    #[serde(default)]
    pub location: Option<[f64; 3]>,

    /// Camera distance from the focus point
    #[serde(default = "default_focus_distance")]
    pub distance: f64,

    /// Optional camera orientation [pitch, yaw, roll]
    #[serde(default)]
    pub orientation: Option<[f64; 3]>,
}

/// Parameters for take_screenshot
#[derive(Debug, Deserialize)]
pub struct TakeScreenshotParams {
    /// Where to write the capture; ".png" is appended when missing
    pub filepath: String,
}

/// Handle get_actors_in_level tool call
pub async fn handle_get_actors_in_level<E: EngineConnection>(
    engine: &Arc<E>,
    _params: Value,
) -> Result<Value, MCPError> {
    let result = send_engine_command(engine, "get_actors_in_level", json!({})).await?;
    let actors = actors_from(&result);

    Ok(json!({
        "actors": actors,
        "count": actors.len()
    }))
}

/// Handle find_actors_by_name tool call
pub async fn handle_find_actors_by_name<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: FindActorsByNameParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    let result = send_engine_command(
        engine,
        "find_actors_by_name",
        json!({ "pattern": params.pattern }),
    )
    .await?;
    let actors = actors_from(&result);

    Ok(json!({
        "actors": actors,
        "count": actors.len()
    }))
}

/// Handle spawn_actor tool call
///
/// Creates a new actor in the current level. Location and rotation default
/// to the origin when omitted; `mesh_path` is only forwarded when non-empty
/// so StaticMeshActors without one keep the engine's default cube.
pub async fn handle_spawn_actor<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: SpawnActorParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    let mut command = json!({
        "name": params.name,
        "type": params.actor_type,
        "location": params.location,
        "rotation": params.rotation
    });

    if let Some(scale) = params.scale {
        command["scale"] = json!(scale);
    }

    // Empty string means "use the engine default mesh", same as absent
    if let Some(mesh_path) = &params.mesh_path {
        if !mesh_path.is_empty() {
            command["mesh_path"] = json!(mesh_path);
        }
    }

    send_engine_command(engine, "spawn_actor", command).await
}

/// Handle delete_actor tool call
pub async fn handle_delete_actor<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: DeleteActorParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    send_engine_command(engine, "delete_actor", json!({ "name": params.name })).await
}

/// Handle set_actor_transform tool call
///
/// Only the transform components actually provided are forwarded; the
/// engine leaves the rest of the actor's transform untouched.
pub async fn handle_set_actor_transform<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: SetActorTransformParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    let mut command = json!({ "name": params.name });
    if let Some(location) = params.location {
        command["location"] = json!(location);
    }
    if let Some(rotation) = params.rotation {
        command["rotation"] = json!(rotation);
    }
    if let Some(scale) = params.scale {
        command["scale"] = json!(scale);
    }

    send_engine_command(engine, "set_actor_transform", command).await
}

/// Handle get_actor_properties tool call
pub async fn handle_get_actor_properties<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: GetActorPropertiesParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    send_engine_command(engine, "get_actor_properties", json!({ "name": params.name })).await
}

/// Handle set_actor_property tool call
pub async fn handle_set_actor_property<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: SetActorPropertyParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    send_engine_command(
        engine,
        "set_actor_property",
        json!({
            "name": params.name,
            "property_name": params.property_name,
            "property_value": params.property_value
        }),
    )
    .await
}

/// Handle set_actor_static_mesh tool call
///
/// Sugar over set_actor_property: the engine has no dedicated mesh command,
/// so this rewrites to a StaticMesh property write.
pub async fn handle_set_actor_static_mesh<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: SetActorStaticMeshParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    send_engine_command(
        engine,
        "set_actor_property",
        json!({
            "name": params.name,
            "property_name": "StaticMesh",
            "property_value": params.mesh_path
        }),
    )
    .await
}

/// Handle get_actor_components tool call
pub async fn handle_get_actor_components<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: GetActorComponentsParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    send_engine_command(engine, "get_actor_components", json!({ "name": params.name })).await
}

/// Handle set_actor_component_property tool call
///
/// The plugin's generic property writer takes the value as a string and
/// converts it to the property's type on its side. JSON strings pass
/// through as-is; numbers, bools, and anything else use their JSON
/// rendering (1200 -> "1200", true -> "true").
pub async fn handle_set_actor_component_property<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: SetActorComponentPropertyParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    let value_str = match &params.property_value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let mut command = json!({
        "name": params.name,
        "component_name": params.component_name,
        "property_name": params.property_name,
        "property_value": value_str
    });
    if let Some(material_index) = params.material_index {
        command["material_index"] = json!(material_index);
    }

    send_engine_command(engine, "set_actor_component_property", command).await
}

/// Handle spawn_blueprint_actor tool call
pub async fn handle_spawn_blueprint_actor<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: SpawnBlueprintActorParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    let mut command = json!({
        "blueprint_name": params.blueprint_name,
        "actor_name": params.actor_name,
        "location": params.location,
        "rotation": params.rotation
    });
    if let Some(scale) = params.scale {
        command["scale"] = json!(scale);
    }

    send_engine_command(engine, "spawn_blueprint_actor", command).await
}

/// Handle focus_viewport tool call
///
/// One of `target` or `location` must be provided; `target` wins when both
/// are. The check runs here so a bad call never reaches the editor.
pub async fn handle_focus_viewport<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: FocusViewportParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    let mut command = json!({ "distance": params.distance });
    match (&params.target, params.location) {
        (Some(target), _) if !target.is_empty() => {
            command["target"] = json!(target);
        }
        (_, Some(location)) => {
            command["location"] = json!(location);
        }
        _ => {
            return Err(MCPError::validation_error(
                "Either 'target' or 'location' must be provided".to_string(),
            ));
        }
    }
    if let Some(orientation) = params.orientation {
        command["orientation"] = json!(orientation);
    }

    send_engine_command(engine, "focus_viewport", command).await
}

/// Handle take_screenshot tool call
pub async fn handle_take_screenshot<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: TakeScreenshotParams = serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))?;

    // The engine writes PNG regardless; keep the reported path honest.
    // Extension match is case-insensitive, same as the editor's own check.
    let mut filepath = params.filepath;
    if !filepath.to_ascii_lowercase().ends_with(".png") {
        filepath.push_str(".png");
    }

    send_engine_command(engine, "take_screenshot", json!({ "filepath": filepath })).await
}

/// Handle save_all tool call
pub async fn handle_save_all<E: EngineConnection>(
    engine: &Arc<E>,
    _params: Value,
) -> Result<Value, MCPError> {
    send_engine_command(engine, "save_all", json!({})).await
}

// Include tests
#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;
