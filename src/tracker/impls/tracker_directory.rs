use std::sync::Arc;
use log::{debug, warn};
use crate::tracker::structs::tracker_directory::TrackerDirectory;
use crate::tracker::types::host_index::HostIndex;
use crate::tracker::types::tracker_groups::TrackerGroups;

impl TrackerDirectory {
    /// Builds the reverse index from configured tracker groups.
    ///
    /// Groups are visited in the map's key order and hostnames in declaration
    /// order. A hostname declared under more than one group belongs to the
    /// group visited last. Blank hostnames are ignored.
    pub fn build(groups: &TrackerGroups, strip_www: bool) -> TrackerDirectory
    {
        let mut hosts = HostIndex::default();
        let mut group_names = Vec::with_capacity(groups.len());

        for (group_name, hostnames) in groups.iter() {
            let group: Arc<str> = Arc::from(group_name.as_str());
            group_names.push(group.clone());
            for hostname in hostnames {
                let normalized = Self::normalize_hostname(hostname, strip_www);
                if normalized.is_empty() {
                    warn!("[TRACKER] Ignoring empty hostname in group \"{group_name}\"");
                    continue;
                }
                if let Some(previous) = hosts.insert(normalized.clone(), group.clone()) {
                    if previous != group {
                        warn!("[TRACKER] Hostname \"{normalized}\" is declared in groups \"{previous}\" and \"{group_name}\", using \"{group_name}\"");
                    }
                }
            }
        }

        debug!("[TRACKER] Directory built with {} groups and {} hostnames", group_names.len(), hosts.len());
        TrackerDirectory {
            hosts,
            groups: group_names,
            strip_www,
        }
    }

    pub fn normalize_hostname(hostname: &str, strip_www: bool) -> String
    {
        let lowered = hostname.trim().to_ascii_lowercase();
        if strip_www {
            if let Some(stripped) = lowered.strip_prefix("www.") {
                return stripped.to_string();
            }
        }
        lowered
    }

    pub fn lookup(&self, hostname: &str) -> Option<&str>
    {
        self.hosts.get(&Self::normalize_hostname(hostname, self.strip_www)).map(|group| group.as_ref())
    }

    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.as_ref())
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}
