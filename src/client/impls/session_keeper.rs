use std::time::{Duration, Instant};
use log::debug;
use parking_lot::RwLock;
use crate::client::errors::AuthError;
use crate::client::structs::session_keeper::SessionKeeper;
use crate::client::traits::torrent_client::TorrentClient;
use crate::config::enums::session_mode::SessionMode;
use crate::config::structs::client_config::ClientConfig;

impl SessionKeeper {
    pub fn new(mode: SessionMode, ttl: Duration) -> SessionKeeper {
        SessionKeeper {
            mode,
            ttl,
            established_at: RwLock::new(None),
        }
    }

    pub fn from_config(config: &ClientConfig) -> SessionKeeper {
        Self::new(config.session_mode, Duration::from_secs(config.session_ttl))
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Whether the last session may be reused. Always `false` in
    /// `per_request` mode.
    pub fn is_fresh(&self) -> bool {
        if self.mode.is_per_request() {
            return false;
        }
        match *self.established_at.read() {
            Some(established_at) => established_at.elapsed() < self.ttl,
            None => false,
        }
    }

    pub fn mark_established(&self) {
        *self.established_at.write() = Some(Instant::now());
    }

    pub fn invalidate(&self) {
        *self.established_at.write() = None;
    }

    /// Logs in through `client` unless a reusable session exists.
    ///
    /// Returns `true` when a login was performed. The login is bounded by
    /// `timeout`; a failed login invalidates any cached session.
    pub async fn ensure_session(&self, client: &dyn TorrentClient, timeout: Duration) -> Result<bool, AuthError> {
        if self.is_fresh() {
            debug!("[SESSION] Reusing cached session");
            return Ok(false);
        }

        match tokio::time::timeout(timeout, client.establish_session()).await {
            Ok(Ok(())) => {
                self.mark_established();
                Ok(true)
            }
            Ok(Err(error)) => {
                self.invalidate();
                Err(error)
            }
            Err(_) => {
                self.invalidate();
                Err(AuthError::Timeout(timeout.as_secs()))
            }
        }
    }
}
