//! Run configuration resolved from CLI inputs and environment defaults
//!
//! Each field follows an explicit precedence chain: explicit input, then the
//! one documented environment default, then a MissingInput error naming the
//! field. Empty strings count as absent. No other defaulting occurs.

use std::path::PathBuf;

use crate::cli::{CliArgs, Source};
use crate::error::ConfigError;

/// Environment fallback for the repository coordinate
pub const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";
/// Environment fallback for the manifest directory
pub const DIRECTORY_ENV: &str = "GITHUB_WORKSPACE";
/// Optional bearer credential for remote requests
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Validated run configuration, constructed once per invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote source strategy
    pub source: Source,
    /// Package name or owner/repo coordinate, depending on the source
    pub source_id: String,
    /// Directory containing the local package.json
    pub directory: PathBuf,
    /// Optional bearer token for the remote source
    pub token: Option<String>,
}

impl Config {
    /// Resolve configuration from CLI arguments and the process environment
    pub fn resolve(args: &CliArgs) -> Result<Self, ConfigError> {
        Self::resolve_from(args, |name| std::env::var(name).ok())
    }

    /// Resolve configuration with an injected environment lookup
    fn resolve_from<F>(args: &CliArgs, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source_id = match args.source {
            Source::Registry => non_empty(args.package.clone())
                .ok_or(ConfigError::MissingInput { field: "package" })?,
            Source::Releases | Source::Packages => non_empty(args.repository.clone())
                .or_else(|| non_empty(env(REPOSITORY_ENV)))
                .ok_or(ConfigError::MissingInput {
                    field: "repository",
                })?,
        };

        let directory = args
            .directory
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| non_empty(env(DIRECTORY_ENV)).map(PathBuf::from))
            .ok_or(ConfigError::MissingInput { field: "directory" })?;

        let token = non_empty(env(TOKEN_ENV));

        Ok(Self {
            source: args.source,
            source_id,
            directory,
            token,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn env_with(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_registry_source_with_package() {
        let args = CliArgs::parse_from(["vercheck", "--package", "left-pad", "--directory", "/w"]);
        let config = Config::resolve_from(&args, no_env).unwrap();
        assert_eq!(config.source, Source::Registry);
        assert_eq!(config.source_id, "left-pad");
        assert_eq!(config.directory, PathBuf::from("/w"));
        assert!(config.token.is_none());
    }

    #[test]
    fn test_registry_source_missing_package() {
        let args = CliArgs::parse_from(["vercheck", "--directory", "/w"]);
        // A repository in the environment is no substitute for a package name.
        let env = env_with(&[(REPOSITORY_ENV, "owner/repo")]);
        let err = Config::resolve_from(&args, env).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingInput { field: "package" }
        ));
    }

    #[test]
    fn test_releases_source_with_explicit_repository() {
        let args = CliArgs::parse_from([
            "vercheck",
            "--source",
            "releases",
            "--repository",
            "owner/repo",
            "--directory",
            "/w",
        ]);
        let config = Config::resolve_from(&args, no_env).unwrap();
        assert_eq!(config.source_id, "owner/repo");
    }

    #[test]
    fn test_releases_source_repository_env_fallback() {
        let args = CliArgs::parse_from(["vercheck", "--source", "releases", "--directory", "/w"]);
        let env = env_with(&[(REPOSITORY_ENV, "owner/from-env")]);
        let config = Config::resolve_from(&args, env).unwrap();
        assert_eq!(config.source_id, "owner/from-env");
    }

    #[test]
    fn test_explicit_repository_beats_environment() {
        let args = CliArgs::parse_from([
            "vercheck",
            "--source",
            "packages",
            "--repository",
            "owner/explicit",
            "--directory",
            "/w",
        ]);
        let env = env_with(&[(REPOSITORY_ENV, "owner/from-env")]);
        let config = Config::resolve_from(&args, env).unwrap();
        assert_eq!(config.source_id, "owner/explicit");
    }

    #[test]
    fn test_missing_repository() {
        let args = CliArgs::parse_from(["vercheck", "--source", "packages", "--directory", "/w"]);
        let err = Config::resolve_from(&args, no_env).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingInput {
                field: "repository"
            }
        ));
    }

    #[test]
    fn test_directory_env_fallback() {
        let args = CliArgs::parse_from(["vercheck", "--package", "left-pad"]);
        let env = env_with(&[(DIRECTORY_ENV, "/workspace/from-env")]);
        let config = Config::resolve_from(&args, env).unwrap();
        assert_eq!(config.directory, PathBuf::from("/workspace/from-env"));
    }

    #[test]
    fn test_explicit_directory_beats_environment() {
        let args =
            CliArgs::parse_from(["vercheck", "--package", "left-pad", "--directory", "/explicit"]);
        let env = env_with(&[(DIRECTORY_ENV, "/from-env")]);
        let config = Config::resolve_from(&args, env).unwrap();
        assert_eq!(config.directory, PathBuf::from("/explicit"));
    }

    #[test]
    fn test_missing_directory() {
        let args = CliArgs::parse_from(["vercheck", "--package", "left-pad"]);
        let err = Config::resolve_from(&args, no_env).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingInput { field: "directory" }
        ));
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let args = CliArgs::parse_from(["vercheck", "--package", "", "--directory", "/w"]);
        let err = Config::resolve_from(&args, no_env).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingInput { field: "package" }
        ));

        let args = CliArgs::parse_from(["vercheck", "--source", "releases", "--directory", "/w"]);
        let env = env_with(&[(REPOSITORY_ENV, "   ")]);
        let err = Config::resolve_from(&args, env).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingInput {
                field: "repository"
            }
        ));
    }

    #[test]
    fn test_token_is_optional() {
        let args = CliArgs::parse_from(["vercheck", "--package", "left-pad", "--directory", "/w"]);
        let config = Config::resolve_from(&args, no_env).unwrap();
        assert!(config.token.is_none());

        let env = env_with(&[(TOKEN_ENV, "ghp_secret")]);
        let config = Config::resolve_from(&args, env).unwrap();
        assert_eq!(config.token.as_deref(), Some("ghp_secret"));
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let args = CliArgs::parse_from(["vercheck", "--package", "left-pad", "--directory", "/w"]);
        let env = env_with(&[(TOKEN_ENV, "")]);
        let config = Config::resolve_from(&args, env).unwrap();
        assert!(config.token.is_none());
    }
}
