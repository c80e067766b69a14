//! Tag construction and application.
//!
//! A torrent that resolves to a tracker group receives exactly one tag,
//! built by [`tag_for_group`] from the configured prefix and the group name:
//!
//! ```rust,ignore
//! assert_eq!(tag_for_group("site:", "example"), "site:example");
//! ```
//!
//! [`apply_tag`] issues a single `add_tag` call on the torrent client and is
//! never retried. qBittorrent stores tags as a set, so applying the same tag
//! twice leaves the torrent unchanged.
//!
//! [`tag_for_group`]: tagging::tag_for_group
//! [`apply_tag`]: tagging::apply_tag

/// Error types for tag application.
pub mod errors;

/// Tag formatting and application functions.
#[allow(clippy::module_inception)]
pub mod tagging;

/// Unit tests for tag formatting and application.
pub mod tests;
