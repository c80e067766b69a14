use std::sync::Arc;
use crate::client::structs::session_keeper::SessionKeeper;
use crate::client::traits::torrent_client::TorrentClient;
use crate::config::structs::configuration::Configuration;
use crate::tracker::structs::tracker_directory::TrackerDirectory;

/// State shared by every webhook handler invocation.
pub struct WebhookServiceData {
    pub config: Arc<Configuration>,
    pub directory: Arc<TrackerDirectory>,
    pub client: Arc<dyn TorrentClient>,
    pub session: SessionKeeper,
}
