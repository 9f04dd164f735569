//! Run sequencing for a single comparison
//!
//! The order here is an observable contract: the remote version is fetched
//! and emitted first, then the local manifest is read and emitted, then the
//! comparison outputs follow. A manifest failure therefore still leaves
//! `latest_version` emitted, and a comparison failure leaves both version
//! outputs emitted. Each output is set exactly once; a successful run emits
//! exactly five.

use crate::compare::{compare, Comparison, Diff};
use crate::config::Config;
use crate::error::{AppError, RemoteError};
use crate::manifest;
use crate::outputs::Outputs;
use crate::remote::{self, HttpClient, RemoteSource};

/// Everything a successful run determined, for display by the caller
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Version read from the local manifest
    pub current_version: String,
    /// Latest version reported by the remote source
    pub latest_version: String,
    /// How the two relate
    pub comparison: Comparison,
}

/// Coordinates one configuration, one remote source, and one output sink
pub struct Runner {
    config: Config,
    source: Box<dyn RemoteSource>,
    outputs: Outputs,
}

impl Runner {
    /// Create a runner for the resolved configuration
    pub fn new(config: Config) -> Result<Self, RemoteError> {
        let client = HttpClient::new()?;
        let source = remote::create_source(config.source, client);
        Ok(Self {
            config,
            source,
            outputs: Outputs::from_env(),
        })
    }

    /// Create a runner with explicit collaborators (for testing)
    pub fn with_parts(config: Config, source: Box<dyn RemoteSource>, outputs: Outputs) -> Self {
        Self {
            config,
            source,
            outputs,
        }
    }

    /// Execute the run: fetch, read, compare, emit
    pub async fn run(&self) -> Result<RunReport, AppError> {
        let latest_version = self
            .source
            .fetch_latest_version(&self.config.source_id, self.config.token.as_deref())
            .await?;
        self.outputs.set("latest_version", &latest_version)?;

        let current_version = manifest::read_current_version(&self.config.directory)?;
        self.outputs.set("current_version", &current_version)?;

        let comparison = compare(&current_version, &latest_version)?;
        self.outputs.set("matches", comparison.matches)?;
        self.outputs.set("newer", comparison.newer)?;
        self.outputs
            .set("diff", comparison.diff.map(Diff::as_str).unwrap_or(""))?;

        Ok(RunReport {
            current_version,
            latest_version,
            comparison,
        })
    }
}
