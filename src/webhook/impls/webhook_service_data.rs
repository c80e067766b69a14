use std::sync::Arc;
use std::time::Duration;
use crate::client::structs::session_keeper::SessionKeeper;
use crate::client::traits::torrent_client::TorrentClient;
use crate::config::structs::configuration::Configuration;
use crate::tracker::structs::tracker_directory::TrackerDirectory;
use crate::webhook::structs::webhook_service_data::WebhookServiceData;

impl WebhookServiceData {
    pub fn new(config: Arc<Configuration>, client: Arc<dyn TorrentClient>) -> WebhookServiceData {
        let directory = Arc::new(TrackerDirectory::build(&config.trackers, config.tagging.strip_www));
        let session = SessionKeeper::from_config(&config.client);
        WebhookServiceData {
            config,
            directory,
            client,
            session,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.config.client.request_timeout)
    }
}
