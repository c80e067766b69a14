use serde::{Deserialize, Serialize};
use crate::config::enums::session_mode::SessionMode;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the qBittorrent Web UI, e.g. `http://localhost:8080`.
    #[serde(default)]
    pub server: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Timeout in seconds applied to every call into the client.
    #[serde(default = "ClientConfig::default_request_timeout")]
    pub request_timeout: u64,
    #[serde(default)]
    pub session_mode: SessionMode,
    /// Seconds a cached session is trusted, only used in `cached` mode.
    #[serde(default = "ClientConfig::default_session_ttl")]
    pub session_ttl: u64,
}
