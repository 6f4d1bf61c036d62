//! TCP transport to the Unreal Engine editor plugin
//!
//! The UnrealMCP plugin listens on a plain TCP socket inside the editor
//! process. Each command is one JSON document and gets one JSON document
//! back; the plugin may close the connection after responding, so a fresh
//! connection is opened per command rather than held across calls.

use crate::engine::config::EngineConfig;
use crate::engine::error::{EngineError, EngineResult};
use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Command channel into the running editor
///
/// Implementations send one named command with JSON params and return the
/// engine's reply document. `Ok(None)` means the engine accepted the
/// connection but never answered (timeout or silent close); transport
/// failures are `Err`. Handlers never talk to the socket directly, they
/// only see this boundary.
#[async_trait]
pub trait EngineConnection: Send + Sync {
    /// Send a command and wait for the engine's JSON reply
    async fn send_command(&self, command: &str, params: Value) -> EngineResult<Option<Value>>;
}

/// [`EngineConnection`] over a per-command TCP socket
pub struct TcpEngineConnection {
    config: EngineConfig,
}

impl TcpEngineConnection {
    /// Build a connection from validated settings
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate().map_err(EngineError::Config)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Connect, write the full payload, and read one JSON document back
    async fn roundtrip(&self, payload: &[u8]) -> EngineResult<Option<Value>> {
        let addr = self.config.addr();
        let mut stream = TcpStream::connect(&addr)
            .await
            .map_err(|source| EngineError::Connect {
                addr: addr.clone(),
                source,
            })?;

        stream.write_all(payload).await?;

        // The plugin writes a single JSON document but TCP may deliver it in
        // several segments. Re-parse after every chunk until the document is
        // complete.
        let mut buf: Vec<u8> = Vec::with_capacity(4096);
        let mut chunk = [0u8; 4096];
        loop {
            let n = stream.read(&mut chunk).await?;
            if n == 0 {
                if buf.is_empty() {
                    return Ok(None);
                }
                return Err(EngineError::InvalidResponse(format!(
                    "connection closed mid-document after {} bytes",
                    buf.len()
                )));
            }

            buf.extend_from_slice(&chunk[..n]);
            match serde_json::from_slice::<Value>(&buf) {
                Ok(value) => return Ok(Some(value)),
                // Document incomplete, keep reading
                Err(e) if e.is_eof() => continue,
                Err(e) => return Err(EngineError::InvalidResponse(e.to_string())),
            }
        }
    }
}

#[async_trait]
impl EngineConnection for TcpEngineConnection {
    async fn send_command(&self, command: &str, params: Value) -> EngineResult<Option<Value>> {
        // Wire envelope the plugin dispatches on
        let envelope = json!({
            "type": command,
            "params": params
        });
        let payload = envelope.to_string();

        debug!("📤 Engine command '{}' ({} bytes)", command, payload.len());

        match timeout(self.config.timeout(), self.roundtrip(payload.as_bytes())).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    "⚠️  No response from Unreal Engine within {}s for '{}'",
                    self.config.timeout_secs, command
                );
                Ok(None)
            }
        }
    }
}
