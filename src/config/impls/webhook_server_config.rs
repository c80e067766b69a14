use crate::config::structs::webhook_server_config::WebhookServerConfig;

impl Default for WebhookServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8181".to_string(),
            threads: 2,
            keep_alive: 60,
            request_timeout: 15,
            disconnect_timeout: 15,
            ssl: false,
            ssl_key: String::new(),
            ssl_cert: String::new(),
        }
    }
}
