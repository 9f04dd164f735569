//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ConfigError: Missing required run inputs
//! - ManifestError: Issues with the local package.json
//! - RemoteError: Issues with the remote version source
//! - CompareError: Version strings that fail semantic-version parsing
//!
//! Every error is fatal to the current run; nothing is retried. The binary
//! entry point is the only place an error becomes a failure report.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Local manifest related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Remote version source related errors
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Version comparison related errors
    #[error(transparent)]
    Compare(#[from] CompareError),

    /// Failure writing a pipeline output
    #[error("failed to write pipeline output: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors related to run configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required input was not supplied and had no environment default
    #[error("the required input '{field}' was not supplied")]
    MissingInput { field: &'static str },
}

/// Errors related to the local manifest file
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read the manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// The manifest has no usable version field
    #[error("found no version field in {path}")]
    MissingVersion { path: PathBuf },
}

/// Errors related to the remote version source
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The source answered but reported no usable latest version
    #[error("found no latest version for '{coordinate}' on {source_name}")]
    MissingVersion {
        coordinate: String,
        source_name: &'static str,
    },

    /// The source does not know the package or repository
    #[error("package '{coordinate}' not found on {source_name}")]
    PackageNotFound {
        coordinate: String,
        source_name: &'static str,
    },

    /// The coordinate resolved to more than one package (monorepo, unsupported)
    #[error("found {count} packages on '{coordinate}', expected exactly 1; repositories with multiple packages are not supported")]
    MultiplePackagesFound { coordinate: String, count: usize },

    /// The source rejected the request as unauthorized
    #[error("authentication failed for {source_name}: {}", auth_hint(.token_supplied))]
    AuthenticationFailed {
        source_name: &'static str,
        token_supplied: bool,
    },

    /// A repository coordinate that is not owner/repo shaped
    #[error("invalid repository coordinate '{coordinate}': expected owner/repo")]
    InvalidCoordinate { coordinate: String },

    /// The source answered with a body this tool cannot decode
    #[error("invalid response from {source_name} for '{coordinate}': {message}")]
    InvalidResponse {
        coordinate: String,
        source_name: &'static str,
        message: String,
    },

    /// Any other transport failure, passed through unmodified
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Errors related to semantic-version parsing during comparison
#[derive(Error, Debug)]
pub enum CompareError {
    /// The locally published version string is not a semantic version
    #[error("could not parse a version out of the local manifest: '{raw}'")]
    UnparseableCurrent { raw: String },

    /// The remotely reported version string is not a semantic version
    #[error("could not parse the latest version reported by the remote source: '{raw}'")]
    UnparseableLatest { raw: String },
}

fn auth_hint(token_supplied: &bool) -> &'static str {
    if *token_supplied {
        "the supplied GITHUB_TOKEN was rejected"
    } else {
        "no credential was supplied, set the GITHUB_TOKEN environment variable"
    }
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RemoteError {
    /// Creates a new MissingVersion error
    pub fn missing_version(coordinate: impl Into<String>, source: &'static str) -> Self {
        RemoteError::MissingVersion {
            coordinate: coordinate.into(),
            source_name: source,
        }
    }

    /// Creates a new PackageNotFound error
    pub fn package_not_found(coordinate: impl Into<String>, source: &'static str) -> Self {
        RemoteError::PackageNotFound {
            coordinate: coordinate.into(),
            source_name: source,
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        coordinate: impl Into<String>,
        source: &'static str,
        message: impl Into<String>,
    ) -> Self {
        RemoteError::InvalidResponse {
            coordinate: coordinate.into(),
            source_name: source,
            message: message.into(),
        }
    }
}
