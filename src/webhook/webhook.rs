use std::fs::File;
use std::future::Future;
use std::io::BufReader;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, error, info, warn};
use serde_json::json;
use crate::client::errors::ClientError;
use crate::common::common::parse_form_body;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::webhook_server_config::WebhookServerConfig;
use crate::tagging::errors::ApplyError;
use crate::tagging::tagging::{apply_tag, tag_for_group};
use crate::tracker::tracker::{redact_tracker_url, resolve};
use crate::webhook::enums::webhook_outcome::WebhookOutcome;
use crate::webhook::structs::webhook_service_data::WebhookServiceData;

pub fn webhook_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["POST"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn webhook_service_routes(data: Arc<WebhookServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/api/webhook").route(web::post().to(webhook_service_post)));
        cfg.default_service(web::route().to(webhook_service_not_found));
    })
}

pub fn webhook_service_tls_config(key: &str, cert: &str) -> Result<rustls::ServerConfig, CustomError>
{
    if key.is_empty() || cert.is_empty() {
        return Err(CustomError::new("no SSL key or SSL certificate given"));
    }

    let key_file = &mut BufReader::new(File::open(key)
        .map_err(|e| CustomError::new(&format!("unable to open SSL key {key}: {e}")))?);
    let certs_file = &mut BufReader::new(File::open(cert)
        .map_err(|e| CustomError::new(&format!("unable to open SSL certificate {cert}: {e}")))?);

    let tls_certs = rustls_pemfile::certs(certs_file)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CustomError::new(&format!("unable to read SSL certificate {cert}: {e}")))?;
    let tls_key = match rustls_pemfile::private_key(key_file) {
        Ok(Some(tls_key)) => tls_key,
        Ok(None) => return Err(CustomError::new(&format!("no private key found in {key}"))),
        Err(e) => return Err(CustomError::new(&format!("unable to read SSL key {key}: {e}"))),
    };

    rustls::ServerConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()
        .map_err(|e| CustomError::new(&e.to_string()))?
        .with_no_client_auth()
        .with_single_cert(tls_certs, tls_key)
        .map_err(|e| CustomError::new(&e.to_string()))
}

pub async fn webhook_service(
    addr: SocketAddr,
    data: Arc<WebhookServiceData>,
    server_config: WebhookServerConfig
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>), CustomError>
{
    let server = HttpServer::new(move || {
        App::new()
            .wrap(webhook_service_cors())
            .configure(webhook_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(server_config.keep_alive))
        .client_request_timeout(Duration::from_secs(server_config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(server_config.disconnect_timeout))
        .workers(server_config.threads.max(1) as usize);

    let bound = if server_config.ssl {
        info!("[WEBHOOK] Starting server listener with SSL on {addr}");
        let tls_config = webhook_service_tls_config(&server_config.ssl_key, &server_config.ssl_cert)?;
        server.bind_rustls_0_23((addr.ip(), addr.port()), tls_config)
    } else {
        info!("[WEBHOOK] Starting server listener on {addr}");
        server.bind((addr.ip(), addr.port()))
    };

    let server = bound
        .map_err(|e| CustomError::new(&format!("unable to bind to {addr}: {e}")))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn webhook_service_post(body: web::Bytes, data: Data<Arc<WebhookServiceData>>) -> HttpResponse
{
    let fields = parse_form_body(&body);
    let info_hash = fields
        .get("infoHash")
        .and_then(|values| values.first())
        .map(|value| value.trim())
        .unwrap_or_default();

    webhook_process(data.get_ref(), info_hash).await.into_response()
}

pub async fn webhook_service_not_found(request: HttpRequest) -> HttpResponse
{
    debug!("[WEBHOOK] {} {}: 404 Not Found", request.method(), request.path());
    HttpResponse::NotFound().json(json!({"status": "not found"}))
}

/// Runs one webhook notification through validation, lookup, resolution and
/// tagging. Stops at the first failing step.
pub async fn webhook_process(data: &WebhookServiceData, info_hash: &str) -> WebhookOutcome
{
    if info_hash.is_empty() {
        warn!("[WEBHOOK] Missing infoHash");
        return WebhookOutcome::MissingInfoHash;
    }
    let info_hash = info_hash.to_string();
    let timeout = data.request_timeout();

    if let Err(error) = data.session.ensure_session(data.client.as_ref(), timeout).await {
        error!("[WEBHOOK] Unable to establish client session for {info_hash}: {error}");
        sentry::capture_error(&error);
        return WebhookOutcome::ClientFailure { info_hash, tag: None };
    }

    let hashes = [info_hash.clone()];
    let torrents = match with_timeout(timeout, data.client.get_torrents_by_hash(&hashes)).await {
        Ok(torrents) => torrents,
        Err(error) => {
            if matches!(error, ClientError::Unauthorized) {
                data.session.invalidate();
            }
            error!("[WEBHOOK] Unable to fetch torrent {info_hash}: {error}");
            sentry::capture_error(&error);
            return WebhookOutcome::ClientFailure { info_hash, tag: None };
        }
    };

    let torrent = match torrents.iter().find(|torrent| torrent.matches_hash(&info_hash)) {
        Some(torrent) => torrent,
        None => {
            warn!("[WEBHOOK] Torrent {info_hash} not found");
            return WebhookOutcome::NotFound { info_hash };
        }
    };

    let group_name = match resolve(&torrent.tracker, &data.directory) {
        Some(group_name) => group_name,
        None => {
            info!("[WEBHOOK] No tracker group for {info_hash} (tracker \"{}\"), skipping", redact_tracker_url(&torrent.tracker));
            return WebhookOutcome::Skipped { info_hash };
        }
    };

    let prefix = data.config.tagging.tag_prefix.as_str();
    let tag = tag_for_group(prefix, &group_name);
    if torrent.has_tag(&tag) {
        info!("[WEBHOOK] Torrent {info_hash} already tagged with \"{tag}\"");
        return WebhookOutcome::AlreadyTagged { info_hash, tag };
    }

    let applied = match tokio::time::timeout(timeout, apply_tag(data.client.as_ref(), &info_hash, &group_name, prefix)).await {
        Ok(result) => result,
        Err(_) => Err(ApplyError {
            info_hash: info_hash.clone(),
            tag: tag.clone(),
            source: ClientError::Timeout(timeout.as_secs()),
        }),
    };

    match applied {
        Ok(tag) => WebhookOutcome::Tagged { info_hash, tag },
        Err(error) => {
            if error.is_unauthorized() {
                data.session.invalidate();
            }
            error!("[WEBHOOK] Unable to tag {} with \"{}\": {}", error.info_hash, error.tag, error.source);
            sentry::capture_error(&error);
            WebhookOutcome::ClientFailure { info_hash, tag: Some(tag) }
        }
    }
}

async fn with_timeout<T, F>(timeout: Duration, future: F) -> Result<T, ClientError>
where
    F: Future<Output=Result<T, ClientError>>,
{
    tokio::time::timeout(timeout, future)
        .await
        .unwrap_or(Err(ClientError::Timeout(timeout.as_secs())))
}
