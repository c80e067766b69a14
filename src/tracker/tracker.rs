use log::{debug, warn};
use url::{Host, Url};
use crate::tracker::structs::tracker_directory::TrackerDirectory;

/// Returns the host component of a tracker URL.
///
/// `Ok(None)` means the input was blank or the URL carries no host. IPv6
/// hosts are returned without brackets.
pub fn extract_hostname(tracker_url: &str) -> Result<Option<String>, url::ParseError>
{
    let trimmed = tracker_url.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let url = Url::parse(trimmed)?;
    Ok(match url.host() {
        None => None,
        Some(Host::Domain(domain)) if domain.is_empty() => None,
        Some(Host::Domain(domain)) => Some(domain.to_string()),
        Some(Host::Ipv4(address)) => Some(address.to_string()),
        Some(Host::Ipv6(address)) => Some(address.to_string()),
    })
}

/// Reduces a tracker URL to `scheme://host[:port]` for logging.
///
/// Private trackers put the passkey in the path or query, so neither is kept.
/// Input that does not parse to a URL with a host is replaced entirely.
pub fn redact_tracker_url(tracker_url: &str) -> String
{
    let trimmed = tracker_url.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let url = match Url::parse(trimmed) {
        Ok(url) => url,
        Err(_) => return String::from("<unparseable tracker url>"),
    };
    match (url.host_str(), url.port()) {
        (Some(host), _) if host.is_empty() => format!("{}://<no host>", url.scheme()),
        (Some(host), Some(port)) => format!("{}://{host}:{port}", url.scheme()),
        (Some(host), None) => format!("{}://{host}", url.scheme()),
        (None, _) => format!("{}://<no host>", url.scheme()),
    }
}

/// Maps a tracker URL to the name of the group owning its host.
///
/// Blank, malformed and unknown URLs all yield `None`.
pub fn resolve(tracker_url: &str, directory: &TrackerDirectory) -> Option<String>
{
    let hostname = match extract_hostname(tracker_url) {
        Ok(Some(hostname)) => hostname,
        Ok(None) => {
            if tracker_url.trim().is_empty() {
                debug!("[TRACKER] No tracker URL to resolve");
            } else {
                warn!("[TRACKER] Tracker URL \"{}\" has no host", redact_tracker_url(tracker_url));
            }
            return None;
        }
        Err(error) => {
            warn!("[TRACKER] Unable to parse tracker URL: {error}");
            return None;
        }
    };

    match directory.lookup(&hostname) {
        Some(group) => {
            debug!("[TRACKER] Host \"{hostname}\" belongs to group \"{group}\"");
            Some(group.to_string())
        }
        None => {
            debug!("[TRACKER] Host \"{hostname}\" is not part of any tracker group");
            None
        }
    }
}
