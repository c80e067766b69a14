use clap::Parser;
use crate::config::enums::session_mode::SessionMode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, env = "QBTAGARR_CONFIG_FILE", default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Overrides `client.session_mode` from the config file.
    #[arg(long, value_enum)]
    pub session_mode: Option<SessionMode>,
}
