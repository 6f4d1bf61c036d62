//! Tests for the shared engine command forwarding helper

use super::send_engine_command;
use crate::engine::mock::{MockEngine, MockReply};
use crate::mcp::types::{ENGINE_COMMAND_FAILED, ENGINE_NO_RESPONSE, ENGINE_UNAVAILABLE};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_unwraps_result_envelope() {
    let engine = Arc::new(MockEngine::with_response(json!({
        "status": "success",
        "result": {"name": "Cube1", "location": [0.0, 0.0, 0.0]}
    })));

    let result = send_engine_command(&engine, "spawn_actor", json!({"name": "Cube1"}))
        .await
        .unwrap();

    assert_eq!(result["name"], "Cube1");
    assert!(result.get("status").is_none());
}

#[tokio::test]
async fn test_bare_document_passes_through() {
    let engine = Arc::new(MockEngine::with_response(json!({
        "actors": ["Floor", "Light"],
        "success": true
    })));

    let result = send_engine_command(&engine, "get_actors_in_level", json!({}))
        .await
        .unwrap();

    assert_eq!(result["actors"][1], "Light");
    assert_eq!(result["success"], true);
}

#[tokio::test]
async fn test_engine_error_status_becomes_command_failed() {
    let engine = Arc::new(MockEngine::with_response(json!({
        "status": "error",
        "error": "Actor not found: Cube9"
    })));

    let err = send_engine_command(&engine, "delete_actor", json!({"name": "Cube9"}))
        .await
        .unwrap_err();

    assert_eq!(err.code, ENGINE_COMMAND_FAILED);
    assert_eq!(err.message, "Actor not found: Cube9");
}

#[tokio::test]
async fn test_error_status_without_message() {
    let engine = Arc::new(MockEngine::with_response(json!({"status": "error"})));

    let err = send_engine_command(&engine, "save_all", json!({}))
        .await
        .unwrap_err();

    assert_eq!(err.code, ENGINE_COMMAND_FAILED);
    assert_eq!(err.message, "Unknown engine error");
}

#[tokio::test]
async fn test_silence_becomes_no_response() {
    let engine = Arc::new(MockEngine::silent());

    let err = send_engine_command(&engine, "save_all", json!({}))
        .await
        .unwrap_err();

    assert_eq!(err.code, ENGINE_NO_RESPONSE);
    assert!(err.message.contains("save_all"));
}

#[tokio::test]
async fn test_connect_failure_becomes_unavailable() {
    let engine = Arc::new(MockEngine::unreachable());

    let err = send_engine_command(&engine, "save_all", json!({}))
        .await
        .unwrap_err();

    assert_eq!(err.code, ENGINE_UNAVAILABLE);
    assert!(err.message.contains("127.0.0.1:55557"));
}

#[tokio::test]
async fn test_command_and_params_reach_engine() {
    let engine = Arc::new(MockEngine::new());

    send_engine_command(&engine, "find_actors_by_name", json!({"pattern": "Cube*"}))
        .await
        .unwrap();

    let calls = engine.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "find_actors_by_name");
    assert_eq!(calls[0].1, json!({"pattern": "Cube*"}));
}

#[tokio::test]
async fn test_scripted_replies_consumed_in_order() {
    let engine = Arc::new(MockEngine::new());
    engine.push_reply(MockReply::Value(json!({"result": {"step": 1}})));
    engine.push_reply(MockReply::Value(json!({"result": {"step": 2}})));

    let first = send_engine_command(&engine, "save_all", json!({}))
        .await
        .unwrap();
    let second = send_engine_command(&engine, "save_all", json!({}))
        .await
        .unwrap();

    assert_eq!(first["step"], 1);
    assert_eq!(second["step"], 2);
}
