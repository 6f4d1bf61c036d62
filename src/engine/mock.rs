//! Scripted engine double for handler tests

use crate::engine::connection::EngineConnection;
use crate::engine::error::{EngineError, EngineResult};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

/// Scripted outcome for a single `send_command` call
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Engine answered with this JSON document
    Value(Value),
    /// Engine accepted the command but never answered
    Silence,
    /// TCP connect failed
    Unreachable,
}

/// In-memory [`EngineConnection`] that records commands and plays back
/// scripted replies front-to-back
///
/// Once the script is exhausted every further command gets a bare
/// `{"status": "success", "result": {}}`.
pub struct MockEngine {
    replies: Mutex<VecDeque<MockReply>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Engine that answers the next command with `response`
    pub fn with_response(response: Value) -> Self {
        let engine = Self::new();
        engine.push_reply(MockReply::Value(response));
        engine
    }

    /// Engine that accepts the next command but never answers
    pub fn silent() -> Self {
        let engine = Self::new();
        engine.push_reply(MockReply::Silence);
        engine
    }

    /// Engine whose next connection attempt is refused
    pub fn unreachable() -> Self {
        let engine = Self::new();
        engine.push_reply(MockReply::Unreachable);
        engine
    }

    pub fn push_reply(&self, reply: MockReply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// Commands recorded so far as `(command, params)` pairs
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EngineConnection for MockEngine {
    async fn send_command(&self, command: &str, params: Value) -> EngineResult<Option<Value>> {
        self.calls
            .lock()
            .unwrap()
            .push((command.to_string(), params));

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Value(value)) => Ok(Some(value)),
            Some(MockReply::Silence) => Ok(None),
            Some(MockReply::Unreachable) => Err(EngineError::Connect {
                addr: "127.0.0.1:55557".to_string(),
                source: io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
            }),
            None => Ok(Some(json!({"status": "success", "result": {}}))),
        }
    }
}
