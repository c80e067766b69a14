//! Torrent client collaborator.
//!
//! The bridge talks to the torrent client through the [`TorrentClient`]
//! trait, which keeps the webhook logic independent from the concrete API and
//! lets tests substitute a mock.
//!
//! # Architecture
//!
//! - `TorrentClient` trait defines the three operations the bridge needs:
//!   establishing a session, fetching torrents by info hash and adding a tag
//! - `QbittorrentClient` implements it against the qBittorrent Web API v2
//! - `SessionKeeper` decides when a session has to be (re)established,
//!   according to the configured `session_mode`
//!
//! # qBittorrent Web API
//!
//! - `POST /api/v2/auth/login` - form `username`, `password`; sets the `SID` cookie
//! - `GET /api/v2/torrents/info?hashes=h1|h2` - JSON array of torrents
//! - `POST /api/v2/torrents/addTags` - form `hashes`, `tags`
//!
//! [`TorrentClient`]: traits::torrent_client::TorrentClient

/// Error types for client operations.
pub mod errors;

/// Implementation blocks for the client structs.
pub mod impls;

/// Data structures for the client and its records.
pub mod structs;

/// Torrent client trait definitions.
pub mod traits;
