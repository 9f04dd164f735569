//! npm registry adapter
//!
//! Fetches the latest published version of a package from the npm registry.
//! API endpoint: https://registry.npmjs.org/{package}

use crate::error::RemoteError;
use crate::remote::{HttpClient, RemoteSource};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

const SOURCE_NAME: &str = "the npm registry";

/// npm registry adapter
pub struct RegistryAdapter {
    client: HttpClient,
    base_url: String,
}

/// npm packument response, reduced to the distribution tags
#[derive(Debug, Deserialize)]
struct Packument {
    #[serde(rename = "dist-tags", default)]
    dist_tags: HashMap<String, String>,
}

impl RegistryAdapter {
    /// Create a new registry adapter against the given base URL
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}", self.base_url, package)
    }
}

#[async_trait]
impl RemoteSource for RegistryAdapter {
    fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch_latest_version(
        &self,
        coordinate: &str,
        token: Option<&str>,
    ) -> Result<String, RemoteError> {
        let url = self.build_url(coordinate);
        let packument: Packument = self
            .client
            .get_json(&url, None, coordinate, self.source_name(), token)
            .await?;

        packument
            .dist_tags
            .get("latest")
            .map(|version| version.trim().to_string())
            .filter(|version| !version.is_empty())
            .ok_or_else(|| RemoteError::missing_version(coordinate, self.source_name()))
    }
}
