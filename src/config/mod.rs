//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the bridge
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **client**: qBittorrent Web API endpoint, credentials and session policy
//! - **webhook_server**: the HTTP listener receiving webhook calls
//! - **tagging**: tag prefix and hostname normalization
//! - **sentry_config**: Error reporting configuration
//! - **trackers**: tracker group name to tracker hostnames
//!
//! # Example
//!
//! ```rust,ignore
//! use qbtagarr::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one when asked to
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (session mode, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving/validation.
pub mod impls;
