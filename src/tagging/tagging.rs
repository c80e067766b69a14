use log::info;
use crate::client::traits::torrent_client::TorrentClient;
use crate::tagging::errors::ApplyError;

pub fn tag_for_group(prefix: &str, group_name: &str) -> String
{
    format!("{prefix}{group_name}")
}

/// Adds the tag for `group_name` to the torrent `info_hash` and returns it.
pub async fn apply_tag(client: &dyn TorrentClient, info_hash: &str, group_name: &str, prefix: &str) -> Result<String, ApplyError>
{
    let tag = tag_for_group(prefix, group_name);
    let hashes = [info_hash.to_string()];
    match client.add_tag(&hashes, &tag).await {
        Ok(()) => {
            info!("[TAGGING] Tagged {info_hash} with \"{tag}\"");
            Ok(tag)
        }
        Err(source) => Err(ApplyError {
            info_hash: info_hash.to_string(),
            tag,
            source,
        })
    }
}
