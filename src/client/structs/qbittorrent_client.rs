use parking_lot::RwLock;
use url::Url;

#[derive(Debug)]
pub struct QbittorrentClient {
    pub(crate) base_url: Url,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) request_timeout: u64,
    pub(crate) http: reqwest::Client,
    /// Value of the `SID` cookie handed out at login.
    pub(crate) sid: RwLock<Option<String>>,
}
