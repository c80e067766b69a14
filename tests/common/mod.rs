#![allow(dead_code)]
use rand::RngExt;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use parking_lot::RwLock;
use tempfile::TempDir;
use qbtagarr::client::errors::{AuthError, ClientError};
use qbtagarr::client::structs::torrent_record::TorrentRecord;
use qbtagarr::client::traits::torrent_client::TorrentClient;
use qbtagarr::config::structs::configuration::Configuration;
use qbtagarr::webhook::structs::webhook_service_data::WebhookServiceData;

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.client.request_timeout = 2;
    config.webhook_server.bind_address = "127.0.0.1:0".to_string();
    config.trackers = BTreeMap::from([
        ("example".to_string(), vec!["tracker.example.com".to_string(), "announce.example.com".to_string()]),
        ("other".to_string(), vec!["tracker.other.org".to_string()]),
    ]);
    config
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

pub fn random_info_hash() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    hex::encode(bytes)
}

pub fn create_test_torrent(info_hash: &str, tracker: &str, tags: &[&str]) -> TorrentRecord {
    TorrentRecord {
        hash: info_hash.to_string(),
        name: format!("torrent-{}", &info_hash[..8.min(info_hash.len())]),
        tracker: tracker.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        state: "uploading".to_string(),
        progress: 1.0,
    }
}

/// In-memory torrent client keeping tags as a set, like qBittorrent.
#[derive(Default)]
pub struct FakeClient {
    pub torrents: RwLock<Vec<TorrentRecord>>,
    pub fail_login: RwLock<bool>,
    pub fail_fetch: RwLock<bool>,
    pub fail_add_tag: RwLock<bool>,
    pub logins: AtomicUsize,
    pub fetches: AtomicUsize,
    pub add_tags: AtomicUsize,
}

impl FakeClient {
    pub fn with_torrents(torrents: Vec<TorrentRecord>) -> Arc<FakeClient> {
        let client = FakeClient::default();
        *client.torrents.write() = torrents;
        Arc::new(client)
    }

    pub fn tags_of(&self, info_hash: &str) -> Vec<String> {
        self.torrents
            .read()
            .iter()
            .find(|torrent| torrent.matches_hash(info_hash))
            .map(|torrent| torrent.tags.clone())
            .unwrap_or_default()
    }

    pub fn calls(&self) -> usize {
        self.logins.load(Ordering::SeqCst) + self.fetches.load(Ordering::SeqCst) + self.add_tags.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TorrentClient for FakeClient {
    async fn establish_session(&self) -> Result<(), AuthError> {
        self.logins.fetch_add(1, Ordering::SeqCst);
        if *self.fail_login.read() {
            return Err(AuthError::Rejected);
        }
        Ok(())
    }

    async fn get_torrents_by_hash(&self, hashes: &[String]) -> Result<Vec<TorrentRecord>, ClientError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if *self.fail_fetch.read() {
            return Err(ClientError::Transport("connection refused".to_string()));
        }
        Ok(self.torrents
            .read()
            .iter()
            .filter(|torrent| hashes.iter().any(|hash| torrent.matches_hash(hash)))
            .cloned()
            .collect())
    }

    async fn add_tag(&self, hashes: &[String], tag: &str) -> Result<(), ClientError> {
        self.add_tags.fetch_add(1, Ordering::SeqCst);
        if *self.fail_add_tag.read() {
            return Err(ClientError::UnexpectedStatus { status: 500, body: String::new() });
        }
        let mut torrents = self.torrents.write();
        for torrent in torrents.iter_mut().filter(|torrent| hashes.iter().any(|hash| torrent.matches_hash(hash))) {
            if !torrent.has_tag(tag) {
                torrent.tags.push(tag.to_string());
            }
        }
        Ok(())
    }
}

pub fn create_test_service_data(config: Configuration, client: Arc<FakeClient>) -> Arc<WebhookServiceData> {
    Arc::new(WebhookServiceData::new(Arc::new(config), client))
}
