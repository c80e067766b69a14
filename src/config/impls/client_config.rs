use crate::config::enums::session_mode::SessionMode;
use crate::config::structs::client_config::ClientConfig;

impl ClientConfig {
    pub(crate) fn default_request_timeout() -> u64 {
        10
    }

    pub(crate) fn default_session_ttl() -> u64 {
        1800
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: String::new(),
            username: None,
            password: None,
            request_timeout: Self::default_request_timeout(),
            session_mode: SessionMode::per_request,
            session_ttl: Self::default_session_ttl(),
        }
    }
}
