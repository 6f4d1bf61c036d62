//! MCP Tools Handler
//!
//! Implements MCP-compliant tools/list and tools/call methods.
//! This module centralizes tool discovery and execution: the schema
//! catalogue below is the single place a tool is declared, and
//! [`dispatch_tool`] is the single place it is routed.

use crate::engine::EngineConnection;
use crate::mcp::handlers::{editor, project};
use crate::mcp::types::MCPError;
use serde_json::{json, Value};
use std::sync::Arc;

/// Every tool the server exposes, editor tools first
const TOOL_NAMES: &[&str] = &[
    // Level queries
    "get_actors_in_level",
    "find_actors_by_name",
    // Actor lifecycle and state
    "spawn_actor",
    "delete_actor",
    "set_actor_transform",
    "get_actor_properties",
    "set_actor_property",
    "set_actor_static_mesh",
    "get_actor_components",
    "set_actor_component_property",
    "spawn_blueprint_actor",
    // Viewport and persistence
    "focus_viewport",
    "take_screenshot",
    "save_all",
    // Enhanced Input and project settings
    "create_input_mapping",
    "create_input_action",
    "create_input_mapping_context",
    "add_mapping_to_context",
    "remove_mapping_from_context",
    "get_input_actions",
    "get_input_mapping_contexts",
];

/// Whether `name` is a tool this server can execute
///
/// The stdio server also accepts tool names as bare JSON-RPC methods,
/// so this doubles as the routing check there.
pub fn is_known_tool(name: &str) -> bool {
    TOOL_NAMES.contains(&name)
}

/// Handle tools/list MCP request
///
/// Returns every tool schema. This is called after initialize to discover
/// what tools the server provides.
///
/// # MCP Spec Compliance
///
/// Response format:
/// ```json
/// {
///   "tools": [
///     {
///       "name": "tool_name",
///       "description": "...",
///       "inputSchema": { ... }
///     }
///   ]
/// }
/// ```
pub fn handle_tools_list(_params: Value) -> Result<Value, MCPError> {
    Ok(json!({
        "tools": get_tool_schemas()
    }))
}

/// Handle tools/call MCP request
///
/// Executes a tool by name with provided arguments and wraps the outcome
/// per MCP spec: tool execution failures come back as a successful
/// response with `isError: true`, not as JSON-RPC errors. Only an unknown
/// tool name or a malformed request is a protocol-level error.
///
/// Response format (success):
/// ```json
/// {
///   "content": [{
///     "type": "text",
///     "text": "..."
///   }],
///   "isError": false
/// }
/// ```
pub async fn handle_tools_call<E: EngineConnection>(
    engine: &Arc<E>,
    params: Value,
) -> Result<Value, MCPError> {
    // Extract tool name from params
    let tool_name = params["name"]
        .as_str()
        .ok_or_else(|| MCPError::invalid_params("Missing 'name' parameter".to_string()))?;

    if !is_known_tool(tool_name) {
        return Err(MCPError::invalid_params(format!(
            "Unknown tool: {}",
            tool_name
        )));
    }

    // Extract arguments (defaults to empty object if missing)
    let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

    // Format response per MCP spec with content array and isError flag
    match dispatch_tool(engine, tool_name, arguments).await {
        Ok(data) => {
            let text = serde_json::to_string_pretty(&data).map_err(|e| {
                MCPError::internal_error(format!("JSON serialization failed: {}", e))
            })?;

            Ok(json!({
                "content": [{
                    "type": "text",
                    "text": text
                }],
                "isError": false
            }))
        }
        Err(e) => Ok(json!({
            "content": [{
                "type": "text",
                "text": e.message
            }],
            "isError": true
        })),
    }
}

/// Route a tool invocation to its handler
///
/// Shared by tools/call and the bare method-name dispatch in the stdio
/// server loop.
pub async fn dispatch_tool<E: EngineConnection>(
    engine: &Arc<E>,
    tool_name: &str,
    arguments: Value,
) -> Result<Value, MCPError> {
    match tool_name {
        // Level queries
        "get_actors_in_level" => editor::handle_get_actors_in_level(engine, arguments).await,
        "find_actors_by_name" => editor::handle_find_actors_by_name(engine, arguments).await,

        // Actor lifecycle and state
        "spawn_actor" => editor::handle_spawn_actor(engine, arguments).await,
        "delete_actor" => editor::handle_delete_actor(engine, arguments).await,
        "set_actor_transform" => editor::handle_set_actor_transform(engine, arguments).await,
        "get_actor_properties" => editor::handle_get_actor_properties(engine, arguments).await,
        "set_actor_property" => editor::handle_set_actor_property(engine, arguments).await,
        "set_actor_static_mesh" => editor::handle_set_actor_static_mesh(engine, arguments).await,
        "get_actor_components" => editor::handle_get_actor_components(engine, arguments).await,
        "set_actor_component_property" => {
            editor::handle_set_actor_component_property(engine, arguments).await
        }
        "spawn_blueprint_actor" => editor::handle_spawn_blueprint_actor(engine, arguments).await,

        // Viewport and persistence
        "focus_viewport" => editor::handle_focus_viewport(engine, arguments).await,
        "take_screenshot" => editor::handle_take_screenshot(engine, arguments).await,
        "save_all" => editor::handle_save_all(engine, arguments).await,

        // Enhanced Input and project settings
        "create_input_mapping" => project::handle_create_input_mapping(engine, arguments).await,
        "create_input_action" => project::handle_create_input_action(engine, arguments).await,
        "create_input_mapping_context" => {
            project::handle_create_input_mapping_context(engine, arguments).await
        }
        "add_mapping_to_context" => {
            project::handle_add_mapping_to_context(engine, arguments).await
        }
        "remove_mapping_from_context" => {
            project::handle_remove_mapping_from_context(engine, arguments).await
        }
        "get_input_actions" => project::handle_get_input_actions(engine, arguments).await,
        "get_input_mapping_contexts" => {
            project::handle_get_input_mapping_contexts(engine, arguments).await
        }

        _ => Err(MCPError::invalid_params(format!(
            "Unknown tool: {}",
            tool_name
        ))),
    }
}

/// Generate JSON schemas for all available MCP tools
///
/// This function defines the complete tool catalog exposed by the MCP
/// server. Schemas are manually maintained to provide high-quality
/// descriptions and precise control over the API surface: human-crafted
/// explanations optimized for AI agents, engine defaults spelled out, and
/// enum values matching what the editor plugin actually accepts.
fn get_tool_schemas() -> Value {
    json!([
        {
            "name": "get_actors_in_level",
            "description": "List all actors in the currently open level with their names, classes, and transforms",
            "inputSchema": {
                "type": "object",
                "properties": {}
            }
        },
        {
            "name": "find_actors_by_name",
            "description": "Find actors in the current level whose names match a wildcard pattern",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "pattern": {
                        "type": "string",
                        "description": "Wildcard pattern to match (e.g. 'Cube*', '*Light*')"
                    }
                },
                "required": ["pattern"]
            }
        },
        {
            "name": "spawn_actor",
            "description": "Create a new actor in the current level. Actor names must be unique; spawning fails if the name is taken",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Unique name for the new actor"
                    },
                    "type": {
                        "type": "string",
                        "enum": ["StaticMeshActor", "PointLight", "SpotLight", "DirectionalLight", "CameraActor"],
                        "description": "Actor class to spawn"
                    },
                    "location": {
                        "type": "array",
                        "items": {"type": "number"},
                        "minItems": 3,
                        "maxItems": 3,
                        "description": "World location [x, y, z]. Defaults to [0, 0, 0]"
                    },
                    "rotation": {
                        "type": "array",
                        "items": {"type": "number"},
                        "minItems": 3,
                        "maxItems": 3,
                        "description": "Rotation [pitch, yaw, roll] in degrees. Defaults to [0, 0, 0]"
                    },
                    "scale": {
                        "type": "array",
                        "items": {"type": "number"},
                        "minItems": 3,
                        "maxItems": 3,
                        "description": "Per-axis scale. Defaults to [1, 1, 1]"
                    },
                    "mesh_path": {
                        "type": "string",
                        "description": "For StaticMeshActor: mesh asset path such as /Engine/BasicShapes/Cube.Cube, Sphere.Sphere, Cylinder.Cylinder, Cone.Cone, or Plane.Plane. Defaults to the engine cube"
                    }
                },
                "required": ["name", "type"]
            }
        },
        {
            "name": "delete_actor",
            "description": "Delete an actor from the current level by name",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name of the actor to delete"
                    }
                },
                "required": ["name"]
            }
        },
        {
            "name": "set_actor_transform",
            "description": "Move, rotate, or scale an actor. Only the components you provide are changed",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name of the actor to modify"
                    },
                    "location": {
                        "type": "array",
                        "items": {"type": "number"},
                        "minItems": 3,
                        "maxItems": 3,
                        "description": "New world location [x, y, z]"
                    },
                    "rotation": {
                        "type": "array",
                        "items": {"type": "number"},
                        "minItems": 3,
                        "maxItems": 3,
                        "description": "New rotation [pitch, yaw, roll] in degrees"
                    },
                    "scale": {
                        "type": "array",
                        "items": {"type": "number"},
                        "minItems": 3,
                        "maxItems": 3,
                        "description": "New per-axis scale"
                    }
                },
                "required": ["name"]
            }
        },
        {
            "name": "get_actor_properties",
            "description": "Get all properties of an actor, including its transform and class-specific settings",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name of the actor to inspect"
                    }
                },
                "required": ["name"]
            }
        },
        {
            "name": "set_actor_property",
            "description": "Set a single property on an actor (e.g. Intensity on a light, Mobility on a mesh)",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name of the actor"
                    },
                    "property_name": {
                        "type": "string",
                        "description": "Property to set (e.g. 'Intensity', 'Mobility')"
                    },
                    "property_value": {
                        "description": "Value to set; type must match the property"
                    }
                },
                "required": ["name", "property_name", "property_value"]
            }
        },
        {
            "name": "set_actor_static_mesh",
            "description": "Swap the mesh asset on a StaticMeshActor",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name of the StaticMeshActor to modify"
                    },
                    "mesh_path": {
                        "type": "string",
                        "description": "Mesh asset path (e.g. /Engine/BasicShapes/Sphere.Sphere)"
                    }
                },
                "required": ["name", "mesh_path"]
            }
        },
        {
            "name": "get_actor_components",
            "description": "List the components attached to an actor. Use this to discover what set_actor_component_property can target",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name of the actor to inspect"
                    }
                },
                "required": ["name"]
            }
        },
        {
            "name": "set_actor_component_property",
            "description": "Set a property on one of an actor's components, e.g. MaxWalkSpeed or JumpZVelocity on CharacterMovement. Run get_actor_components first to find component names",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name of the actor"
                    },
                    "component_name": {
                        "type": "string",
                        "description": "Component name or class (e.g. 'CharacterMovement', 'CharacterMovement0', 'CharacterMovementComponent')"
                    },
                    "property_name": {
                        "type": "string",
                        "description": "Property to set (e.g. 'MaxWalkSpeed', 'GravityScale')"
                    },
                    "property_value": {
                        "description": "Value to set; strings, numbers, and bools are converted on the engine side"
                    },
                    "material_index": {
                        "type": "integer",
                        "description": "Material slot index, only for material properties"
                    }
                },
                "required": ["name", "component_name", "property_name", "property_value"]
            }
        },
        {
            "name": "spawn_blueprint_actor",
            "description": "Spawn an actor from a Blueprint asset",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "blueprint_name": {
                        "type": "string",
                        "description": "Blueprint asset to spawn from (e.g. '/Game/Blueprints/BP_Crate')"
                    },
                    "actor_name": {
                        "type": "string",
                        "description": "Unique name for the spawned actor"
                    },
                    "location": {
                        "type": "array",
                        "items": {"type": "number"},
                        "minItems": 3,
                        "maxItems": 3,
                        "description": "World location [x, y, z]. Defaults to [0, 0, 0]"
                    },
                    "rotation": {
                        "type": "array",
                        "items": {"type": "number"},
                        "minItems": 3,
                        "maxItems": 3,
                        "description": "Rotation [pitch, yaw, roll] in degrees. Defaults to [0, 0, 0]"
                    },
                    "scale": {
                        "type": "array",
                        "items": {"type": "number"},
                        "minItems": 3,
                        "maxItems": 3,
                        "description": "Per-axis scale. Defaults to [1, 1, 1]"
                    }
                },
                "required": ["blueprint_name", "actor_name"]
            }
        },
        {
            "name": "focus_viewport",
            "description": "Point the editor viewport at an actor or a world location. Provide 'target' or 'location'; target wins when both are given",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "target": {
                        "type": "string",
                        "description": "Name of the actor to focus on"
                    },
                    "location": {
                        "type": "array",
                        "items": {"type": "number"},
                        "minItems": 3,
                        "maxItems": 3,
                        "description": "World location [x, y, z] to focus on"
                    },
                    "distance": {
                        "type": "number",
                        "description": "Camera distance from the focus point. Defaults to 1000"
                    },
                    "orientation": {
                        "type": "array",
                        "items": {"type": "number"},
                        "minItems": 3,
                        "maxItems": 3,
                        "description": "Camera orientation [pitch, yaw, roll]"
                    }
                }
            }
        },
        {
            "name": "take_screenshot",
            "description": "Capture the active editor viewport to a PNG file",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "filepath": {
                        "type": "string",
                        "description": "Where to write the capture; '.png' is appended when missing"
                    }
                },
                "required": ["filepath"]
            }
        },
        {
            "name": "save_all",
            "description": "Save all dirty levels and assets. Call this after a batch of edits to persist them",
            "inputSchema": {
                "type": "object",
                "properties": {}
            }
        },
        {
            "name": "create_input_mapping",
            "description": "Add a legacy action mapping to the project input settings",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "action_name": {
                        "type": "string",
                        "description": "Name of the action mapping (e.g. 'Jump')"
                    },
                    "key": {
                        "type": "string",
                        "description": "Key to bind (e.g. 'SpaceBar', 'LeftMouseButton', 'E')"
                    },
                    "input_type": {
                        "type": "string",
                        "enum": ["Action", "Axis"],
                        "description": "Mapping kind. Defaults to 'Action'"
                    },
                    "shift": {"type": "boolean", "description": "Require Shift held"},
                    "ctrl": {"type": "boolean", "description": "Require Ctrl held"},
                    "alt": {"type": "boolean", "description": "Require Alt held"},
                    "cmd": {"type": "boolean", "description": "Require Cmd held"}
                },
                "required": ["action_name", "key"]
            }
        },
        {
            "name": "create_input_action",
            "description": "Create an Enhanced Input InputAction asset",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Asset name, conventionally prefixed IA_ (e.g. 'IA_Interact')"
                    },
                    "path": {
                        "type": "string",
                        "description": "Content path for the asset. Defaults to /Game/Input/Actions"
                    },
                    "value_type": {
                        "type": "string",
                        "enum": ["Digital", "Axis1D", "Axis2D", "Axis3D"],
                        "description": "Input value type. Defaults to 'Digital' (bool)"
                    }
                },
                "required": ["name"]
            }
        },
        {
            "name": "create_input_mapping_context",
            "description": "Create an Enhanced Input InputMappingContext asset",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Asset name, conventionally prefixed IMC_ (e.g. 'IMC_Player')"
                    },
                    "path": {
                        "type": "string",
                        "description": "Content path for the asset. Defaults to /Game/Input"
                    }
                },
                "required": ["name"]
            }
        },
        {
            "name": "add_mapping_to_context",
            "description": "Bind an InputAction to a key inside an InputMappingContext",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "context_name": {
                        "type": "string",
                        "description": "Name or path of the InputMappingContext"
                    },
                    "action_name": {
                        "type": "string",
                        "description": "Name or path of the InputAction to map"
                    },
                    "key": {
                        "type": "string",
                        "description": "Key to bind (e.g. 'E', 'SpaceBar')"
                    }
                },
                "required": ["context_name", "action_name", "key"]
            }
        },
        {
            "name": "remove_mapping_from_context",
            "description": "Remove an InputAction-to-key binding from an InputMappingContext",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "context_name": {
                        "type": "string",
                        "description": "Name or path of the InputMappingContext"
                    },
                    "action_name": {
                        "type": "string",
                        "description": "Name or path of the mapped InputAction"
                    },
                    "key": {
                        "type": "string",
                        "description": "Bound key to remove"
                    }
                },
                "required": ["context_name", "action_name", "key"]
            }
        },
        {
            "name": "get_input_actions",
            "description": "List InputAction assets in the project",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Content path filter. Defaults to /Game"
                    }
                }
            }
        },
        {
            "name": "get_input_mapping_contexts",
            "description": "List InputMappingContext assets in the project, including their mappings",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Content path filter. Defaults to /Game"
                    }
                }
            }
        }
    ])
}

// Include tests
#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;
