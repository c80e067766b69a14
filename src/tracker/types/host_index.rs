use std::sync::Arc;
use ahash::AHashMap;

/// Normalized hostname to the shared name of its tracker group.
pub type HostIndex = AHashMap<String, Arc<str>>;
