use std::sync::Arc;
use crate::tracker::types::host_index::HostIndex;

/// Immutable reverse index from normalized tracker hostname to group name.
///
/// Built once from configuration with [`TrackerDirectory::build`] and shared
/// read-only between all webhook requests.
#[derive(Debug, Clone, Default)]
pub struct TrackerDirectory {
    pub(crate) hosts: HostIndex,
    pub(crate) groups: Vec<Arc<str>>,
    pub(crate) strip_www: bool,
}
