use std::time::Duration;
use async_trait::async_trait;
use log::{debug, info, warn};
use parking_lot::RwLock;
use reqwest::header::{CONTENT_TYPE, COOKIE, REFERER, SET_COOKIE};
use reqwest::{RequestBuilder, Response, StatusCode};
use url::Url;
use crate::client::errors::{AuthError, ClientError};
use crate::client::structs::qbittorrent_client::QbittorrentClient;
use crate::client::structs::torrent_record::TorrentRecord;
use crate::client::traits::torrent_client::TorrentClient;
use crate::config::structs::client_config::ClientConfig;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

impl QbittorrentClient {
    pub fn new(config: &ClientConfig) -> Result<QbittorrentClient, ClientError> {
        let mut base_url = Url::parse(config.server.trim())
            .map_err(|e| ClientError::Transport(format!("invalid server url \"{}\": {e}", config.server)))?;
        // endpoints are joined relative to the base, which needs a trailing slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(QbittorrentClient {
            base_url,
            username: config.username.clone().unwrap_or_default(),
            password: config.password.clone().unwrap_or_default(),
            request_timeout: config.request_timeout,
            http,
            sid: RwLock::new(None),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn has_session(&self) -> bool {
        self.sid.read().is_some()
    }

    pub fn clear_session(&self) {
        *self.sid.write() = None;
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Transport(format!("invalid endpoint \"{path}\": {e}")))
    }

    pub(crate) fn form_body(fields: &[(&str, &str)]) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in fields {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Extracts the `SID` value from a `Set-Cookie` header value.
    pub(crate) fn parse_sid_cookie(header: &str) -> Option<String> {
        let pair = header.split(';').next()?.trim();
        let (name, value) = pair.split_once('=')?;
        if name.trim() == "SID" && !value.trim().is_empty() {
            Some(value.trim().to_string())
        } else {
            None
        }
    }

    fn with_session(&self, builder: RequestBuilder) -> RequestBuilder {
        let sid = self.sid.read().clone();
        match sid {
            Some(sid) => builder.header(COOKIE, format!("SID={sid}")),
            None => builder,
        }
    }

    fn map_send_error(&self, error: reqwest::Error) -> ClientError {
        if error.is_timeout() {
            ClientError::Timeout(self.request_timeout)
        } else {
            ClientError::from(error)
        }
    }

    async fn check_status(&self, response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            if self.has_session() {
                warn!("[CLIENT] Session rejected by {}, it will be re-established", self.base_url);
            } else {
                warn!("[CLIENT] Request to {} was sent without a session", self.base_url);
            }
            self.clear_session();
            return Err(ClientError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::UnexpectedStatus { status: status.as_u16(), body });
        }
        Ok(response)
    }
}

#[async_trait]
impl TorrentClient for QbittorrentClient {
    async fn establish_session(&self) -> Result<(), AuthError> {
        let url = self.endpoint("api/v2/auth/login").map_err(|e| AuthError::Transport(e.to_string()))?;
        let body = Self::form_body(&[("username", self.username.as_str()), ("password", self.password.as_str())]);

        let response = self.http
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(REFERER, self.base_url.as_str())
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AuthError::Timeout(self.request_timeout)
                } else {
                    AuthError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            return Err(AuthError::Banned);
        }
        if !status.is_success() {
            return Err(AuthError::UnexpectedStatus(status.as_u16()));
        }

        let sid = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(Self::parse_sid_cookie);
        let text = response.text().await.map_err(|e| AuthError::Transport(e.to_string()))?;
        if text.trim() == "Fails." {
            return Err(AuthError::Rejected);
        }

        // without credentials the Web UI may bypass auth and hand out no cookie
        if sid.is_none() {
            if !self.username.is_empty() {
                self.clear_session();
                return Err(AuthError::MissingSid);
            }
            debug!("[CLIENT] Login to {} returned no SID cookie", self.base_url);
        }
        *self.sid.write() = sid;
        info!("[CLIENT] Session established with {}", self.base_url);
        Ok(())
    }

    async fn get_torrents_by_hash(&self, hashes: &[String]) -> Result<Vec<TorrentRecord>, ClientError> {
        let mut url = self.endpoint("api/v2/torrents/info")?;
        url.query_pairs_mut().append_pair("hashes", &hashes.join("|"));

        let response = self.with_session(self.http.get(url))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        let response = self.check_status(response).await?;
        let torrents = response
            .json::<Vec<TorrentRecord>>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        debug!("[CLIENT] Fetched {} torrents for {} hashes", torrents.len(), hashes.len());
        Ok(torrents)
    }

    async fn add_tag(&self, hashes: &[String], tag: &str) -> Result<(), ClientError> {
        let url = self.endpoint("api/v2/torrents/addTags")?;
        let joined = hashes.join("|");
        let body = Self::form_body(&[("hashes", joined.as_str()), ("tags", tag)]);

        let response = self.with_session(self.http.post(url))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        self.check_status(response).await?;

        debug!("[CLIENT] Added tag \"{tag}\" to {joined}");
        Ok(())
    }
}
