mod common;

use std::fs;
use clap::Parser;
use qbtagarr::config::enums::session_mode::SessionMode;
use qbtagarr::config::structs::configuration::Configuration;
use qbtagarr::structs::Cli;

const FULL_CONFIG: &str = r#"
log_level = "debug"

[client]
server = "https://qbit.example.com/qbittorrent"
username = "admin"
password = "secret"
request_timeout = 5
session_mode = "cached"
session_ttl = 900

[webhook_server]
bind_address = "127.0.0.1:8181"
threads = 4

[tagging]
tag_prefix = "tracker:"
strip_www = true

[trackers]
example = ["tracker.example.com"]
other = ["tracker.other.org", "announce.other.org"]
"#;

#[test]
fn test_config_load_full_file() {
    let temp_dir = common::create_temp_dir();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, FULL_CONFIG).unwrap();

    let config = Configuration::load_from_file(path.to_str().unwrap(), false).unwrap();
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.client.server, "https://qbit.example.com/qbittorrent");
    assert_eq!(config.client.password.as_deref(), Some("secret"));
    assert_eq!(config.client.session_mode, SessionMode::cached);
    assert_eq!(config.client.session_ttl, 900);
    assert_eq!(config.webhook_server.bind_address, "127.0.0.1:8181");
    assert_eq!(config.webhook_server.threads, 4);
    assert_eq!(config.webhook_server.keep_alive, 60);
    assert!(!config.webhook_server.ssl);
    assert_eq!(config.tagging.tag_prefix, "tracker:");
    assert!(config.tagging.strip_www);
    assert_eq!(config.trackers["other"], vec!["tracker.other.org", "announce.other.org"]);
}

#[test]
fn test_config_missing_server_fails_startup() {
    let temp_dir = common::create_temp_dir();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[trackers]\nexample = [\"tracker.example.com\"]\n").unwrap();

    let result = Configuration::load_from_file(path.to_str().unwrap(), false);
    assert!(result.unwrap_err().message().contains("client.server"));
}

#[test]
fn test_config_malformed_server_fails_startup() {
    let temp_dir = common::create_temp_dir();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[client]\nserver = \"qbit.local:8080\"\n").unwrap();

    assert!(Configuration::load_from_file(path.to_str().unwrap(), false).is_err());
}

#[test]
fn test_config_create_writes_loadable_default() {
    let temp_dir = common::create_temp_dir();
    let path = temp_dir.path().join("config.toml");
    let path = path.to_str().unwrap();

    assert!(Configuration::load_from_file(path, true).is_err());
    let written = fs::read_to_string(path).unwrap();
    assert!(written.contains("[trackers]"));
    assert!(written.contains("[client]"));

    let config = Configuration::load_from_file(path, false).unwrap();
    assert_eq!(config.webhook_server.bind_address, "0.0.0.0:8181");
    assert_eq!(config.trackers["example"], vec!["tracker.example.com", "announce.example.com"]);
}

#[test]
fn test_cli_arguments() {
    let cli = Cli::try_parse_from(["qbtagarr", "--config", "/etc/qbtagarr.toml", "--session-mode", "cached"]).unwrap();
    assert_eq!(cli.config, "/etc/qbtagarr.toml");
    assert_eq!(cli.session_mode, Some(SessionMode::cached));
    assert!(!cli.create_config);

    let cli = Cli::try_parse_from(["qbtagarr", "-c", "local.toml", "--create-config"]).unwrap();
    assert_eq!(cli.config, "local.toml");
    assert!(cli.create_config);
    assert_eq!(cli.session_mode, None);

    let cli = Cli::try_parse_from(["qbtagarr", "--session-mode", "per_request"]).unwrap();
    assert_eq!(cli.session_mode, Some(SessionMode::per_request));
    assert_eq!(cli.config, "config.toml");

    assert!(Cli::try_parse_from(["qbtagarr", "--session-mode", "sometimes"]).is_err());
}
