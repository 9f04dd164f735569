//! CLI argument parsing module for vercheck

use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Remote source strategy for resolving the latest published version.
///
/// Exactly one strategy is active per run; a pipeline pins it in the
/// workflow definition.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    /// npm registry lookup by package name
    #[default]
    Registry,
    /// GitHub latest-release lookup by owner/repo coordinate
    Releases,
    /// GitHub Packages GraphQL lookup by owner/repo coordinate
    Packages,
}

impl Source {
    /// Name of the strategy as spelled on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Registry => "registry",
            Source::Releases => "releases",
            Source::Packages => "packages",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compare a local package version against the latest remote version
#[derive(Parser, Debug, Clone)]
#[command(
    name = "vercheck",
    version,
    about = "Compare a local package version against the latest remote version"
)]
pub struct CliArgs {
    /// Remote source to resolve the latest version from
    #[arg(long, value_enum, default_value_t = Source::Registry)]
    pub source: Source,

    /// Package name for registry lookups
    #[arg(long)]
    pub package: Option<String>,

    /// Repository coordinate (owner/repo) for GitHub lookups (default: $GITHUB_REPOSITORY)
    #[arg(long)]
    pub repository: Option<String>,

    /// Directory containing the local package.json (default: $GITHUB_WORKSPACE)
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,
}
