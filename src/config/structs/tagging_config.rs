use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TaggingConfig {
    #[serde(default = "TaggingConfig::default_tag_prefix")]
    pub tag_prefix: String,
    /// Drop a leading `www.` from hostnames before matching.
    #[serde(default)]
    pub strip_www: bool,
}
