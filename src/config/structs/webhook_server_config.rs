use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WebhookServerConfig {
    pub bind_address: String,
    pub threads: u64,
    pub keep_alive: u64,
    pub request_timeout: u64,
    pub disconnect_timeout: u64,
    pub ssl: bool,
    pub ssl_key: String,
    pub ssl_cert: String,
}
