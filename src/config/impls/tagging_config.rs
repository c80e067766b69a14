use crate::config::structs::tagging_config::TaggingConfig;

impl TaggingConfig {
    pub(crate) fn default_tag_prefix() -> String {
        String::from("site:")
    }
}

impl Default for TaggingConfig {
    fn default() -> Self {
        Self {
            tag_prefix: Self::default_tag_prefix(),
            strip_www: false,
        }
    }
}
