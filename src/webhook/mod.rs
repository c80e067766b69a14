//! Webhook HTTP service.
//!
//! qBittorrent calls the bridge when a torrent finishes, through its "Run
//! external program" hook (e.g. `curl -d "infoHash=%I" http://host:8181/api/webhook`).
//!
//! # Request Flow
//!
//! `POST /api/webhook` with a form-encoded `infoHash` runs these steps, each
//! one stopping the request on failure:
//!
//! 1. Validate `infoHash` - missing or blank is `400`, the client is not called
//! 2. Ensure a client session - failure is `500`
//! 3. Fetch the torrent by hash - failure is `500`, no torrent is `404`
//! 4. Resolve the tracker URL to a tracker group
//! 5. No group is `200`; tag already present is `200`; otherwise add the tag,
//!    `500` on failure and `200` on success
//!
//! Every call into the client is bounded by `client.request_timeout`.
//!
//! # Responses
//!
//! All responses are JSON, e.g. `{"status": "tagged", "info_hash": "...", "tag": "site:example"}`.

/// Enums for webhook outcomes.
pub mod enums;

/// Implementation blocks for webhook types.
pub mod impls;

/// Data structures shared by the webhook handlers.
pub mod structs;

/// Server setup, routes and handlers.
#[allow(clippy::module_inception)]
pub mod webhook;
