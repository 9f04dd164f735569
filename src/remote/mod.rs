//! Remote version-source adapters
//!
//! This module provides:
//! - A thin HTTP client shared by the adapters
//! - npm registry lookup by package name
//! - GitHub latest-release lookup by owner/repo
//! - GitHub Packages GraphQL lookup by owner/repo
//!
//! One adapter is active per run, behind the RemoteSource trait; the
//! comparison engine never sees which transport produced the version.

mod client;
mod packages;
mod registry;
mod releases;

pub use client::HttpClient;
pub use packages::PackagesAdapter;
pub use registry::RegistryAdapter;
pub use releases::ReleasesAdapter;

use crate::cli::Source;
use crate::error::RemoteError;
use async_trait::async_trait;

/// Environment override for the GitHub API base URL (set by the platform)
pub const GITHUB_API_URL_ENV: &str = "GITHUB_API_URL";
/// Environment override for the npm registry base URL
pub const NPM_REGISTRY_ENV: &str = "NPM_CONFIG_REGISTRY";

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Trait for remote version sources
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Human-readable name of the source, used in error messages
    fn source_name(&self) -> &'static str;

    /// Fetch the latest published version for a coordinate
    async fn fetch_latest_version(
        &self,
        coordinate: &str,
        token: Option<&str>,
    ) -> Result<String, RemoteError>;
}

/// Create the remote source for the given strategy
pub fn create_source(source: Source, client: HttpClient) -> Box<dyn RemoteSource> {
    match source {
        Source::Registry => Box::new(RegistryAdapter::new(client, npm_registry_url())),
        Source::Releases => Box::new(ReleasesAdapter::new(client, github_api_url())),
        Source::Packages => Box::new(PackagesAdapter::new(client, github_api_url())),
    }
}

fn github_api_url() -> String {
    env_or(GITHUB_API_URL_ENV, DEFAULT_GITHUB_API_URL)
}

fn npm_registry_url() -> String {
    env_or(NPM_REGISTRY_ENV, DEFAULT_NPM_REGISTRY_URL)
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Split an owner/repo coordinate into its two parts
pub(crate) fn split_coordinate(coordinate: &str) -> Result<(&str, &str), RemoteError> {
    match coordinate.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner, repo))
        }
        _ => Err(RemoteError::InvalidCoordinate {
            coordinate: coordinate.to_string(),
        }),
    }
}
