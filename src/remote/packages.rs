//! GitHub Packages GraphQL adapter
//!
//! Queries the packages published under a repository and returns the latest
//! version of the single package found there. Asking for two nodes is what
//! lets a monorepo be detected and refused instead of guessed at.
//! API endpoint: POST https://api.github.com/graphql

use crate::error::RemoteError;
use crate::remote::{split_coordinate, HttpClient, RemoteSource};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

const SOURCE_NAME: &str = "GitHub Packages";

const PACKAGES_QUERY: &str = "\
query ($owner: String!, $repo: String!) {
  repository(owner: $owner, name: $repo) {
    packages(first: 2) {
      nodes {
        latestVersion {
          version
        }
      }
    }
  }
}";

/// GitHub Packages GraphQL adapter
pub struct PackagesAdapter {
    client: HttpClient,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(default)]
    repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
struct RepositoryNode {
    packages: PackageConnection,
}

#[derive(Debug, Deserialize)]
struct PackageConnection {
    #[serde(default)]
    nodes: Vec<PackageNode>,
}

#[derive(Debug, Deserialize)]
struct PackageNode {
    #[serde(rename = "latestVersion")]
    latest_version: Option<PackageVersion>,
}

#[derive(Debug, Deserialize)]
struct PackageVersion {
    version: String,
}

impl PackagesAdapter {
    /// Create a new packages adapter against the given API base URL
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RemoteSource for PackagesAdapter {
    fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch_latest_version(
        &self,
        coordinate: &str,
        token: Option<&str>,
    ) -> Result<String, RemoteError> {
        let (owner, repo) = split_coordinate(coordinate)?;
        let url = format!("{}/graphql", self.base_url);
        let body = json!({
            "query": PACKAGES_QUERY,
            "variables": { "owner": owner, "repo": repo },
        });

        let response: GraphQlResponse = self
            .client
            .post_json(&url, &body, coordinate, self.source_name(), token)
            .await?;

        if !response.errors.is_empty() {
            let message = response
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(RemoteError::invalid_response(
                coordinate,
                self.source_name(),
                message,
            ));
        }

        let repository = response
            .data
            .and_then(|data| data.repository)
            .ok_or_else(|| RemoteError::package_not_found(coordinate, self.source_name()))?;

        let nodes = repository.packages.nodes;
        if nodes.len() > 1 {
            return Err(RemoteError::MultiplePackagesFound {
                coordinate: coordinate.to_string(),
                count: nodes.len(),
            });
        }

        nodes
            .into_iter()
            .next()
            .and_then(|node| node.latest_version)
            .map(|latest| latest.version.trim().to_string())
            .filter(|version| !version.is_empty())
            .ok_or_else(|| RemoteError::missing_version(coordinate, self.source_name()))
    }
}
