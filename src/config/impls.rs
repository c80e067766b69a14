pub mod client_config;
pub mod configuration;
pub mod configuration_error;
pub mod sentry_config;
pub mod session_mode;
pub mod tagging_config;
pub mod webhook_server_config;
