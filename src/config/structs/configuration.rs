use serde::{Deserialize, Serialize};
use crate::config::structs::client_config::ClientConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tagging_config::TaggingConfig;
use crate::config::structs::webhook_server_config::WebhookServerConfig;
use crate::tracker::types::tracker_groups::TrackerGroups;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    #[serde(default = "Configuration::default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub webhook_server: WebhookServerConfig,
    #[serde(default)]
    pub tagging: TaggingConfig,
    #[serde(default)]
    pub sentry_config: SentryConfig,
    /// Tracker group name to tracker hostnames. Group names are visited in
    /// lexicographic order when the tracker directory is built.
    #[serde(default)]
    pub trackers: TrackerGroups,
}
