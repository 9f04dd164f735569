//! vercheck - CI package-version comparison helper
//!
//! Determines whether a locally published package's version differs from
//! (or is behind) the latest version known to a remote source, and reports
//! the relationship as pipeline outputs:
//! - `latest_version` and `current_version` (the two raw version strings)
//! - `matches`, `newer`, and `diff` (how they relate)

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod manifest;
pub mod outputs;
pub mod remote;
pub mod runner;
pub mod version;
