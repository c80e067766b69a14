use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the torrent client session is established for webhook calls.
///
/// `per_request` logs in before every webhook call, which always survives
/// session expiry. `cached` reuses a session until `session_ttl` elapses or the
/// client reports it as no longer valid.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default)]
#[value(rename_all = "snake_case")]
pub enum SessionMode {
    #[default]
    per_request,
    cached,
}
