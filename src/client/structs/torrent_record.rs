use serde::{Deserialize, Serialize};

/// A torrent as reported by `/api/v2/torrents/info`.
///
/// Only the fields the bridge reads are kept; everything else in the API
/// response is ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TorrentRecord {
    pub hash: String,
    #[serde(default)]
    pub name: String,
    /// Current tracker URL. Empty when no tracker is working.
    #[serde(default)]
    pub tracker: String,
    #[serde(default, deserialize_with = "TorrentRecord::deserialize_tags")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub progress: f64,
}
