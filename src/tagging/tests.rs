#[cfg(test)]
mod tagging_tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use async_trait::async_trait;
    use mockall::mock;
    use parking_lot::Mutex;
    use crate::client::errors::{AuthError, ClientError};
    use crate::client::structs::torrent_record::TorrentRecord;
    use crate::client::traits::torrent_client::TorrentClient;
    use crate::tagging::tagging::{apply_tag, tag_for_group};

    mock! {
        pub Client {}

        #[async_trait]
        impl TorrentClient for Client {
            async fn establish_session(&self) -> Result<(), AuthError>;
            async fn get_torrents_by_hash(&self, hashes: &[String]) -> Result<Vec<TorrentRecord>, ClientError>;
            async fn add_tag(&self, hashes: &[String], tag: &str) -> Result<(), ClientError>;
        }
    }

    /// Keeps tags as a set per hash, like qBittorrent does.
    #[derive(Default)]
    struct SetClient {
        tags: Mutex<HashSet<(String, String)>>,
        calls: Mutex<usize>,
    }

    #[async_trait]
    impl TorrentClient for SetClient {
        async fn establish_session(&self) -> Result<(), AuthError> {
            Ok(())
        }

        async fn get_torrents_by_hash(&self, _hashes: &[String]) -> Result<Vec<TorrentRecord>, ClientError> {
            Ok(Vec::new())
        }

        async fn add_tag(&self, hashes: &[String], tag: &str) -> Result<(), ClientError> {
            *self.calls.lock() += 1;
            let mut tags = self.tags.lock();
            for hash in hashes {
                tags.insert((hash.clone(), tag.to_string()));
            }
            Ok(())
        }
    }

    #[test]
    fn test_tag_for_group() {
        assert_eq!(tag_for_group("site:", "example"), "site:example");
        assert_eq!(tag_for_group("tracker/", "Other Site"), "tracker/Other Site");
        assert_eq!(tag_for_group("", "example"), "example");
    }

    #[tokio::test]
    async fn test_apply_tag_issues_single_call() {
        let mut client = MockClient::new();
        client.expect_add_tag()
            .withf(|hashes, tag| hashes.len() == 1 && hashes[0] == "abc123" && tag == "site:example")
            .times(1)
            .returning(|_, _| Ok(()));
        client.expect_establish_session().never();
        client.expect_get_torrents_by_hash().never();

        let tag = apply_tag(&client, "abc123", "example", "site:").await.unwrap();
        assert_eq!(tag, "site:example");
    }

    #[tokio::test]
    async fn test_apply_tag_failure_carries_context() {
        let mut client = MockClient::new();
        client.expect_add_tag()
            .withf(|hashes, tag| hashes[0] == "abc123" && tag == "site:example")
            .times(1)
            .returning(|_, _| Err(ClientError::UnexpectedStatus { status: 500, body: String::from("boom") }));

        let error = apply_tag(&client, "abc123", "example", "site:").await.unwrap_err();
        assert_eq!(error.info_hash, "abc123");
        assert_eq!(error.tag, "site:example");
        assert!(matches!(error.source, ClientError::UnexpectedStatus { status: 500, .. }));
        assert!(!error.is_unauthorized());
        assert_eq!(error.to_string(), "Failed to add tag \"site:example\" to abc123: Unexpected status 500: boom");
    }

    #[tokio::test]
    async fn test_apply_tag_unauthorized() {
        let mut client = MockClient::new();
        client.expect_add_tag().times(1).returning(|_, _| Err(ClientError::Unauthorized));

        let error = apply_tag(&client, "abc123", "example", "site:").await.unwrap_err();
        assert!(error.is_unauthorized());
    }

    #[tokio::test]
    async fn test_apply_tag_twice_keeps_one_tag() {
        let client = Arc::new(SetClient::default());
        apply_tag(client.as_ref(), "abc123", "example", "site:").await.unwrap();
        apply_tag(client.as_ref(), "abc123", "example", "site:").await.unwrap();

        assert_eq!(*client.calls.lock(), 2);
        let tags = client.tags.lock();
        assert_eq!(tags.len(), 1);
        assert!(tags.contains(&(String::from("abc123"), String::from("site:example"))));
    }
}
