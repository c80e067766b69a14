use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info, warn};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use qbtagarr::client::structs::qbittorrent_client::QbittorrentClient;
use qbtagarr::common::common::setup_logging;
use qbtagarr::config::structs::configuration::Configuration;
use qbtagarr::structs::Cli;
use qbtagarr::webhook::structs::webhook_service_data::WebhookServiceData;
use qbtagarr::webhook::webhook::webhook_service;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    if let Some(session_mode) = args.session_mode {
        config.client.session_mode = session_mode;
    }
    let config = Arc::new(config);

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let client = match QbittorrentClient::new(&config.client) {
                Ok(client) => Arc::new(client),
                Err(error) => {
                    error!("[BOOT] Unable to create the qBittorrent client: {error}");
                    exit(1);
                }
            };
            let base_url = client.base_url().clone();
            let data = Arc::new(WebhookServiceData::new(config.clone(), client));
            info!("[BOOT] Using qBittorrent at {base_url} (session mode: {:?})", data.session.mode());
            if data.directory.is_empty() {
                warn!("[BOOT] No tracker hostnames configured, no torrent will be tagged");
            } else {
                info!("[BOOT] Loaded {} tracker hostnames in {} groups", data.directory.len(), data.directory.groups().count());
            }

            let addr: SocketAddr = match config.webhook_server.bind_address.parse() {
                Ok(addr) => addr,
                Err(error) => {
                    error!("[BOOT] Invalid bind address {}: {error}", config.webhook_server.bind_address);
                    exit(1);
                }
            };

            let (handle, server) = match webhook_service(addr, data.clone(), config.webhook_server.clone()).await {
                Ok(service) => service,
                Err(error) => {
                    error!("[BOOT] Unable to start the webhook server: {error}");
                    exit(1);
                }
            };
            let server = tokio::spawn(server);

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    handle.stop(true).await;
                }
                result = server => {
                    match result {
                        Ok(Ok(())) => {}
                        Ok(Err(error)) => {
                            sentry::capture_error(&error);
                            error!("[WEBHOOK] Server stopped with an error: {error}");
                        }
                        Err(error) => {
                            sentry::capture_error(&error);
                            error!("[WEBHOOK] Server task failed: {error}");
                        }
                    }
                }
            }

            info!("Server shutting down completed");
            Ok(())
        })
}
