//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Torrent client connection settings.
pub mod client_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Sentry error reporting configuration.
pub mod sentry_config;

/// Tag formatting and hostname normalization settings.
pub mod tagging_config;

/// Webhook HTTP listener configuration.
pub mod webhook_server_config;
