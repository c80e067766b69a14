use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use regex::Regex;
use url::Url;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::client_config::ClientConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tagging_config::TaggingConfig;
use crate::config::structs::webhook_server_config::WebhookServerConfig;

impl Configuration {
    pub(crate) fn default_log_level() -> String {
        String::from("info")
    }

    pub fn init() -> Configuration {
        let mut trackers = BTreeMap::new();
        trackers.insert(
            String::from("example"),
            vec![String::from("tracker.example.com"), String::from("announce.example.com")]
        );
        Configuration {
            log_level: Self::default_log_level(),
            client: ClientConfig {
                server: String::from("http://localhost:8080"),
                username: Some(String::from("admin")),
                password: Some(String::from("adminadmin")),
                ..ClientConfig::default()
            },
            webhook_server: WebhookServerConfig {
                bind_address: String::from("0.0.0.0:8181"),
                ..WebhookServerConfig::default()
            },
            tagging: TaggingConfig::default(),
            sentry_config: SentryConfig::default(),
            trackers
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically the config file"));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and restart, exiting now...");
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE CONFIG] {error}");
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        Self::validate_server(&self.client.server)?;

        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!(
                "log_level \"{}\" must be one of off, trace, debug, info, warn, error",
                self.log_level
            )));
        }

        if self.client.request_timeout == 0 {
            return Err(ConfigurationError::ValidationError(String::from("client.request_timeout must be greater than 0")));
        }
        if self.client.session_mode.is_cached() && self.client.session_ttl == 0 {
            return Err(ConfigurationError::ValidationError(String::from("client.session_ttl must be greater than 0 when session_mode is cached")));
        }

        if self.webhook_server.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigurationError::ValidationError(format!(
                "webhook_server.bind_address \"{}\" is not a socket address",
                self.webhook_server.bind_address
            )));
        }

        // qBittorrent splits tag lists on commas
        Self::validate_value("[TAGGING] tag_prefix", &self.tagging.tag_prefix, r"^[^,]+$")?;
        for group_name in self.trackers.keys() {
            Self::validate_value("[TRACKERS] group name", group_name, r"^[^,]+$")?;
        }

        Ok(())
    }

    pub fn validate_server(server: &str) -> Result<(), ConfigurationError> {
        if server.trim().is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("client.server is required")));
        }
        let url = Url::parse(server).map_err(|e| {
            ConfigurationError::ValidationError(format!("client.server \"{server}\" is not a valid URL: {e}"))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigurationError::ValidationError(format!(
                "client.server \"{server}\" must use http or https"
            )));
        }
        if url.host_str().is_none_or(|host| host.is_empty()) {
            return Err(ConfigurationError::ValidationError(format!("client.server \"{server}\" has no host")));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex).map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "Error checking {name} [:] Name: \"{value}\" [:] Regex: \"{regex_check}\""
            )));
        }
        Ok(())
    }
}
