use crate::config::enums::session_mode::SessionMode;

impl SessionMode {
    pub fn is_cached(&self) -> bool {
        matches!(self, SessionMode::cached)
    }

    pub fn is_per_request(&self) -> bool {
        matches!(self, SessionMode::per_request)
    }
}
