//! # qbtagarr
//!
//! A webhook bridge that tags finished qBittorrent torrents with the tracker
//! site they came from.
//!
//! ## Overview
//!
//! qBittorrent notifies the bridge through a `POST /api/webhook` call carrying
//! the torrent's `infoHash`. The bridge fetches the torrent from the qBittorrent
//! Web API, maps the host of its tracker URL to a configured tracker group and
//! adds the tag `site:<group>` to the torrent.
//!
//! ## Features
//!
//! - **Tracker Groups**: Any number of hostnames per site, matched case-insensitively
//! - **Idempotent Tagging**: A torrent that already carries its tag is left alone
//! - **Session Handling**: Log in per request, or reuse a session for a configurable TTL
//! - **SSL/TLS**: Optional rustls listener for the webhook endpoint
//! - **Monitoring**: Coloured console logging and optional Sentry integration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use qbtagarr::config::structs::configuration::Configuration;
//! use qbtagarr::client::structs::qbittorrent_client::QbittorrentClient;
//! use qbtagarr::webhook::structs::webhook_service_data::WebhookServiceData;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", false)?);
//! let client = Arc::new(QbittorrentClient::new(&config.client)?);
//! let data = Arc::new(WebhookServiceData::new(config.clone(), client));
//! ```
//!
//! ## Modules
//!
//! - [`client`] - qBittorrent Web API client and session handling
//! - [`common`] - Shared utilities, error handling and logging setup
//! - [`config`] - Configuration management and TOML parsing
//! - [`structs`] - CLI argument parsing
//! - [`tagging`] - Tag construction and application
//! - [`tracker`] - Tracker directory and tracker URL resolution
//! - [`webhook`] - Webhook HTTP service

/// Torrent client module.
///
/// Defines the `TorrentClient` trait the webhook depends on and its
/// qBittorrent Web API implementation, including login and session reuse.
pub mod client;

/// Common utilities and shared functionality.
///
/// Contains form body parsing, log level parsing, logging setup and the
/// generic `CustomError` type.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, saving and validating the TOML configuration.
pub mod config;

/// CLI argument parsing.
pub mod structs;

/// Tag construction and application.
pub mod tagging;

/// Tracker directory and resolution module.
///
/// Builds the hostname to tracker group index at startup and resolves
/// tracker URLs against it.
pub mod tracker;

/// Webhook HTTP service.
///
/// Serves `POST /api/webhook` and runs each notification through
/// validation, torrent lookup, tracker resolution and tagging.
pub mod webhook;
