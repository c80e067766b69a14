//! Type aliases for tracker collections.

/// Hostname lookup table, keyed with the `ahash` hasher.
pub mod host_index;

/// Tracker group declarations as read from configuration.
pub mod tracker_groups;
