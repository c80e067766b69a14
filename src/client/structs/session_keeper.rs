use std::time::{Duration, Instant};
use parking_lot::RwLock;
use crate::config::enums::session_mode::SessionMode;

/// Tracks when the client session was last established and whether it may
/// be reused for the next webhook call.
#[derive(Debug)]
pub struct SessionKeeper {
    pub(crate) mode: SessionMode,
    pub(crate) ttl: Duration,
    pub(crate) established_at: RwLock<Option<Instant>>,
}
