use std::collections::BTreeMap;

/// Group name to hostnames. The `BTreeMap` fixes the iteration order used to
/// settle hostnames declared under several groups.
pub type TrackerGroups = BTreeMap<String, Vec<String>>;
