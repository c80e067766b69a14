use serde::{Deserialize, Deserializer};
use crate::client::structs::torrent_record::TorrentRecord;

#[derive(Deserialize)]
#[serde(untagged)]
enum TagsField {
    Joined(String),
    List(Vec<String>),
}

impl TorrentRecord {
    /// qBittorrent reports tags as one comma separated string (`"a, b"`).
    pub(crate) fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tags = match Option::<TagsField>::deserialize(deserializer)? {
            None => Vec::new(),
            Some(TagsField::Joined(joined)) => joined.split(',').map(str::to_string).collect(),
            Some(TagsField::List(list)) => list,
        };
        Ok(tags
            .into_iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|existing| existing == tag)
    }

    pub fn matches_hash(&self, info_hash: &str) -> bool {
        self.hash.eq_ignore_ascii_case(info_hash.trim())
    }
}
