//! Configuration for the Unreal Engine connection

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default TCP port the UnrealMCP editor plugin listens on
pub const DEFAULT_ENGINE_PORT: u16 = 55557;

const DEFAULT_ENGINE_HOST: &str = "127.0.0.1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the editor plugin's command socket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Host the editor is running on
    pub host: String,

    /// Port of the plugin's command listener
    pub port: u16,

    /// How long to wait for a command response before giving up
    pub timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_ENGINE_HOST.to_string(),
            port: DEFAULT_ENGINE_PORT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl EngineConfig {
    /// Build a config from environment variables, falling back to defaults
    ///
    /// Reads `UNREAL_HOST`, `UNREAL_PORT`, and `UNREAL_TIMEOUT` (seconds).
    /// Unparseable values fall back to the defaults rather than erroring,
    /// matching how the rest of the process-level configuration behaves.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("UNREAL_HOST")
                .unwrap_or_else(|_| DEFAULT_ENGINE_HOST.to_string()),
            port: std::env::var("UNREAL_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_ENGINE_PORT),
            timeout_secs: std::env::var("UNREAL_TIMEOUT")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Socket address in `host:port` form
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Response timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
