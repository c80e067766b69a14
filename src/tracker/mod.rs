//! Tracker directory and tracker URL resolution.
//!
//! Torrents are grouped by the tracker site they were downloaded from. The
//! configuration declares tracker groups, each a name with the hostnames of
//! that site's trackers:
//!
//! ```toml
//! [trackers]
//! example = ["tracker.example.com", "announce.example.com"]
//! ```
//!
//! # Main Components
//!
//! - `TrackerDirectory` - Reverse index from tracker hostname to group name,
//!   built once at startup and immutable afterwards
//! - `resolve` - Maps a torrent's tracker URL to its owning group
//!
//! # Matching Rules
//!
//! Only the host of the tracker URL is compared; scheme, port, path and query
//! are ignored. Hostnames match case-insensitively. No other normalization is
//! applied unless `tagging.strip_www` is enabled, in which case a leading
//! `www.` is dropped on both sides. Empty or malformed URLs never fail, they
//! simply do not match any group.
//!
//! # Example
//!
//! ```rust,ignore
//! use qbtagarr::tracker::structs::tracker_directory::TrackerDirectory;
//! use qbtagarr::tracker::tracker::resolve;
//!
//! let directory = TrackerDirectory::build(&config.trackers, false);
//! let group = resolve("https://tracker.example.com/announce", &directory);
//! assert_eq!(group.as_deref(), Some("example"));
//! ```

/// Data structures for tracker resolution.
pub mod structs;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Type aliases for tracker collections.
pub mod types;

/// Tracker URL resolution functions.
#[allow(clippy::module_inception)]
pub mod tracker;
