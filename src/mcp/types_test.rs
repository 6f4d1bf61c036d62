//! Tests for MCP types module
//!
//! Verifies JSON-RPC 2.0 request/response parsing and error handling.

#[cfg(test)]
mod tests {
    use crate::mcp::types::{
        MCPError, MCPNotification, MCPRequest, MCPResponse, ENGINE_COMMAND_FAILED,
        ENGINE_NO_RESPONSE, ENGINE_UNAVAILABLE, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST,
        METHOD_NOT_FOUND, PARSE_ERROR, VALIDATION_ERROR,
    };
    use serde_json::json;

    #[test]
    fn test_parse_valid_request() {
        let json_str = r#"{
            "jsonrpc": "2.0",
            "id": 123,
            "method": "tools/call",
            "params": {
                "name": "spawn_actor",
                "arguments": {"name": "Cube1", "type": "StaticMeshActor"}
            }
        }"#;

        let request: MCPRequest = serde_json::from_str(json_str).unwrap();

        assert_eq!(request.jsonrpc, "2.0");
        assert_eq!(request.id, 123);
        assert_eq!(request.method, "tools/call");
        assert!(request.params.is_object());
    }

    #[test]
    fn test_parse_request_missing_jsonrpc() {
        let json_str = r#"{
            "id": 123,
            "method": "tools/list",
            "params": {}
        }"#;

        let result: Result<MCPRequest, _> = serde_json::from_str(json_str);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_request_wrong_jsonrpc_version() {
        let json_str = r#"{
            "jsonrpc": "1.0",
            "id": 123,
            "method": "tools/list",
            "params": {}
        }"#;

        let result: Result<MCPRequest, _> = serde_json::from_str(json_str);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_request_without_params() {
        let json_str = r#"{
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/list"
        }"#;

        let request: MCPRequest = serde_json::from_str(json_str).unwrap();
        assert!(request.params.is_null());
    }

    #[test]
    fn test_serialize_success_response() {
        let response = MCPResponse {
            jsonrpc: "2.0".to_string(),
            id: 42,
            result: Some(json!({"status": "success", "name": "Cube1"})),
            error: None,
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["jsonrpc"], "2.0");
        assert_eq!(json["id"], 42);
        assert_eq!(json["result"]["status"], "success");
        assert_eq!(json["result"]["name"], "Cube1");
        assert!(json.get("error").is_none()); // Should be omitted
    }

    #[test]
    fn test_serialize_error_response() {
        let response = MCPResponse {
            jsonrpc: "2.0".to_string(),
            id: 99,
            result: None,
            error: Some(MCPError {
                code: ENGINE_UNAVAILABLE,
                message: "Failed to connect to Unreal Engine at 127.0.0.1:55557".to_string(),
                data: None,
            }),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["jsonrpc"], "2.0");
        assert_eq!(json["id"], 99);
        assert_eq!(json["error"]["code"], ENGINE_UNAVAILABLE);
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("127.0.0.1:55557"));
        assert!(json.get("result").is_none()); // Should be omitted
        assert!(json["error"].get("data").is_none()); // None data is omitted
    }

    #[test]
    fn test_error_codes_constants() {
        // Standard JSON-RPC error codes
        assert_eq!(PARSE_ERROR, -32700);
        assert_eq!(INVALID_REQUEST, -32600);
        assert_eq!(METHOD_NOT_FOUND, -32601);
        assert_eq!(INVALID_PARAMS, -32602);
        assert_eq!(INTERNAL_ERROR, -32603);

        // Custom engine error codes (start at -32000 per spec)
        assert_eq!(ENGINE_UNAVAILABLE, -32000);
        assert_eq!(ENGINE_NO_RESPONSE, -32001);
        assert_eq!(ENGINE_COMMAND_FAILED, -32002);
        assert_eq!(VALIDATION_ERROR, -32003);
    }

    #[test]
    fn test_response_serialization() {
        let response = MCPResponse {
            jsonrpc: "2.0".to_string(),
            id: 777,
            result: Some(json!({"actors": ["Floor", "Wall", "Light"]})),
            error: None,
        };

        let json_str = serde_json::to_string(&response).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json_str).unwrap();

        assert_eq!(parsed["jsonrpc"], "2.0");
        assert_eq!(parsed["id"], 777);
        assert_eq!(parsed["result"]["actors"][0], "Floor");
        assert_eq!(parsed["result"]["actors"][2], "Light");
        assert!(parsed.get("error").is_none());
    }

    #[test]
    fn test_mcp_error_serialization_with_data() {
        let error = MCPError {
            code: INVALID_PARAMS,
            message: "Missing required field: name".to_string(),
            data: Some(json!({"field": "name"})),
        };

        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["code"], INVALID_PARAMS);
        assert_eq!(json["message"], "Missing required field: name");
        assert_eq!(json["data"]["field"], "name");
    }

    #[test]
    fn test_mcp_error_helper_methods() {
        let parse_err = MCPError::parse_error("Invalid JSON".to_string());
        assert_eq!(parse_err.code, PARSE_ERROR);

        let unavailable = MCPError::engine_unavailable("connect refused".to_string());
        assert_eq!(unavailable.code, ENGINE_UNAVAILABLE);

        let no_response = MCPError::engine_no_response("timed out".to_string());
        assert_eq!(no_response.code, ENGINE_NO_RESPONSE);

        let failed = MCPError::engine_command_failed("Actor not found: Cube9".to_string());
        assert_eq!(failed.code, ENGINE_COMMAND_FAILED);
        assert!(failed.message.contains("Cube9"));

        let invalid_params = MCPError::invalid_params("Missing field".to_string());
        assert_eq!(invalid_params.code, INVALID_PARAMS);

        let validation = MCPError::validation_error("Either 'target' or 'location'".to_string());
        assert_eq!(validation.code, VALIDATION_ERROR);
    }

    #[test]
    fn test_mcp_response_helper_methods() {
        let success = MCPResponse::success(42, json!({"result": "ok"}));
        assert_eq!(success.id, 42);
        assert_eq!(success.jsonrpc, "2.0");
        assert!(success.error.is_none());
        assert!(success.result.is_some());

        let error_resp = MCPResponse::error(99, MCPError::method_not_found("bogus"));
        assert_eq!(error_resp.id, 99);
        assert_eq!(error_resp.jsonrpc, "2.0");
        assert!(error_resp.result.is_none());
        assert!(error_resp.error.is_some());
    }

    // Notification tests

    #[test]
    fn test_parse_valid_notification() {
        let json_str = r#"{
            "jsonrpc": "2.0",
            "method": "notifications/initialized",
            "params": {}
        }"#;

        let notification: MCPNotification = serde_json::from_str(json_str).unwrap();

        assert_eq!(notification.jsonrpc, "2.0");
        assert_eq!(notification.method, "notifications/initialized");
        assert!(notification.params.is_object());
    }

    #[test]
    fn test_parse_notification_without_params() {
        let json_str = r#"{
            "jsonrpc": "2.0",
            "method": "notifications/initialized"
        }"#;

        let notification: MCPNotification = serde_json::from_str(json_str).unwrap();
        assert!(notification.params.is_null());
    }

    #[test]
    fn test_notification_missing_jsonrpc() {
        let json_str = r#"{
            "method": "notifications/initialized",
            "params": {}
        }"#;

        let result: Result<MCPNotification, _> = serde_json::from_str(json_str);
        assert!(result.is_err());
    }

    #[test]
    fn test_notification_invalid_jsonrpc_version() {
        let json_str = r#"{
            "jsonrpc": "1.0",
            "method": "notifications/initialized",
            "params": {}
        }"#;

        let result: Result<MCPNotification, _> = serde_json::from_str(json_str);
        assert!(result.is_err());
    }

    #[test]
    fn test_notification_missing_method() {
        let json_str = r#"{
            "jsonrpc": "2.0",
            "params": {}
        }"#;

        let result: Result<MCPNotification, _> = serde_json::from_str(json_str);
        assert!(result.is_err());
    }

    #[test]
    fn test_notification_with_id_should_be_request() {
        // If there's an id field, it should parse as request not notification
        let json_str = r#"{
            "jsonrpc": "2.0",
            "id": 123,
            "method": "initialize",
            "params": {}
        }"#;

        // Should parse as request
        let request: Result<MCPRequest, _> = serde_json::from_str(json_str);
        assert!(request.is_ok());

        // Should fail as notification (deny_unknown_fields will reject 'id')
        let notification: Result<MCPNotification, _> = serde_json::from_str(json_str);
        assert!(notification.is_err());
    }

    #[test]
    fn test_request_without_id_should_fail() {
        // Requests must have an id field
        let json_str = r#"{
            "jsonrpc": "2.0",
            "method": "tools/list",
            "params": {}
        }"#;

        let result: Result<MCPRequest, _> = serde_json::from_str(json_str);
        assert!(result.is_err());
    }
}
