//! HTTP server settings.

use serde::{Deserialize, Serialize};

fn default_addr() -> String {
    "127.0.0.1:8000".to_string()
}

const fn default_record_sessions() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address the API binds to.
    #[serde(default = "default_addr")]
    pub addr: String,

    /// Whether `POST /analyze` logs a row into `symptom_sessions`.
    #[serde(default = "default_record_sessions")]
    pub record_sessions: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            record_sessions: default_record_sessions(),
        }
    }
}
