use thiserror::Error;
use crate::client::errors::ClientError;

#[derive(Error, Debug)]
#[error("Failed to add tag \"{tag}\" to {info_hash}: {source}")]
pub struct ApplyError {
    pub info_hash: String,
    pub tag: String,
    #[source]
    pub source: ClientError,
}

impl ApplyError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.source, ClientError::Unauthorized)
    }
}
