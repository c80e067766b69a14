use async_trait::async_trait;
use crate::client::errors::{AuthError, ClientError};
use crate::client::structs::torrent_record::TorrentRecord;

/// Torrent client operations used by the webhook handler.
///
/// Implementations are shared between concurrent requests and must be safe
/// for concurrent use.
#[async_trait]
pub trait TorrentClient: Send + Sync {
    /// Logs in, replacing any session held so far.
    async fn establish_session(&self) -> Result<(), AuthError>;

    /// Fetches only the torrents whose info hash is listed.
    async fn get_torrents_by_hash(&self, hashes: &[String]) -> Result<Vec<TorrentRecord>, ClientError>;

    /// Adds `tag` to every listed torrent. Adding a tag a torrent already
    /// carries is not an error.
    async fn add_tag(&self, hashes: &[String], tag: &str) -> Result<(), ClientError>;
}
