//! GitHub latest-release adapter
//!
//! Fetches the tag of the latest published release for a repository.
//! API endpoint: https://api.github.com/repos/{owner}/{repo}/releases/latest
//!
//! Release tags are conventionally `v`-prefixed; one leading `v` is stripped
//! before the tag is handed to the comparison engine.

use crate::error::RemoteError;
use crate::remote::{split_coordinate, HttpClient, RemoteSource};
use async_trait::async_trait;
use serde::Deserialize;

const SOURCE_NAME: &str = "GitHub releases";

const GITHUB_JSON_ACCEPT: &str = "application/vnd.github+json";

/// GitHub latest-release adapter
pub struct ReleasesAdapter {
    client: HttpClient,
    base_url: String,
}

/// Response from the latest-release endpoint
#[derive(Debug, Deserialize)]
struct LatestRelease {
    tag_name: String,
}

impl ReleasesAdapter {
    /// Create a new releases adapter against the given API base URL
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RemoteSource for ReleasesAdapter {
    fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch_latest_version(
        &self,
        coordinate: &str,
        token: Option<&str>,
    ) -> Result<String, RemoteError> {
        let (owner, repo) = split_coordinate(coordinate)?;
        let url = format!("{}/repos/{}/{}/releases/latest", self.base_url, owner, repo);

        let release: LatestRelease = self
            .client
            .get_json(
                &url,
                Some(GITHUB_JSON_ACCEPT),
                coordinate,
                self.source_name(),
                token,
            )
            .await?;

        let tag = release.tag_name.trim();
        let version = tag.strip_prefix('v').unwrap_or(tag);

        if version.is_empty() {
            Err(RemoteError::missing_version(coordinate, self.source_name()))
        } else {
            Ok(version.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(base_url: &str) -> ReleasesAdapter {
        ReleasesAdapter::new(HttpClient::new().unwrap(), base_url)
    }

    #[tokio::test]
    async fn test_fetch_latest_version_strips_v_prefix() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/owner/repo/releases/latest")
            .match_header("accept", GITHUB_JSON_ACCEPT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"tag_name": "v1.2.3", "name": "Release 1.2.3"}"#)
            .create_async()
            .await;

        let version = adapter(&server.url())
            .fetch_latest_version("owner/repo", None)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(version, "1.2.3");
    }

    #[tokio::test]
    async fn test_fetch_latest_version_bare_tag() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/repos/owner/repo/releases/latest")
            .with_status(200)
            .with_body(r#"{"tag_name": "2.0.0-rc.0"}"#)
            .create_async()
            .await;

        let version = adapter(&server.url())
            .fetch_latest_version("owner/repo", None)
            .await
            .unwrap();

        assert_eq!(version, "2.0.0-rc.0");
    }

    #[tokio::test]
    async fn test_empty_tag_is_missing_version() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/repos/owner/repo/releases/latest")
            .with_status(200)
            .with_body(r#"{"tag_name": "v"}"#)
            .create_async()
            .await;

        let err = adapter(&server.url())
            .fetch_latest_version("owner/repo", None)
            .await
            .unwrap_err();

        assert!(matches!(err, RemoteError::MissingVersion { .. }));
    }

    #[tokio::test]
    async fn test_repository_without_releases() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/repos/owner/repo/releases/latest")
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let err = adapter(&server.url())
            .fetch_latest_version("owner/repo", None)
            .await
            .unwrap_err();

        assert!(matches!(err, RemoteError::PackageNotFound { .. }));
    }

    #[tokio::test]
    async fn test_invalid_coordinate() {
        let err = adapter("http://localhost:9")
            .fetch_latest_version("just-a-name", None)
            .await
            .unwrap_err();

        assert!(matches!(err, RemoteError::InvalidCoordinate { .. }));
    }
}
