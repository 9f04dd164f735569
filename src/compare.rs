//! Version comparison engine
//!
//! This module provides:
//! - Precedence equality and strict ordering of two version strings
//! - A categorical label for the kind of change between them
//!
//! Precedence follows semantic-versioning 2.0.0: the numeric triple first,
//! a prereleased version below its bare triple, prerelease identifiers
//! compared position-by-position (numeric before alphanumeric, prefix
//! sequences lower). Build metadata never participates.

use std::cmp::Ordering;
use std::fmt;

use semver::Version;

use crate::error::CompareError;
use crate::version::parse_version;

/// Categorical label for the change between two versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diff {
    Major,
    Minor,
    Patch,
    Premajor,
    Preminor,
    Prepatch,
    Prerelease,
}

impl Diff {
    /// The label as it appears in pipeline outputs
    pub fn as_str(self) -> &'static str {
        match self {
            Diff::Major => "major",
            Diff::Minor => "minor",
            Diff::Patch => "patch",
            Diff::Premajor => "premajor",
            Diff::Preminor => "preminor",
            Diff::Prepatch => "prepatch",
            Diff::Prerelease => "prerelease",
        }
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of comparing a current version against a latest version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// Precedence equality of the two versions, build metadata excluded
    pub matches: bool,
    /// Whether current sorts strictly after latest
    pub newer: bool,
    /// The highest-order component that changed, absent when equal
    pub diff: Option<Diff>,
}

/// Compare two version strings and classify the change between them.
///
/// The current side is validated first: when both strings are invalid, the
/// current-side error is the one reported. All three result values are
/// computed together; nothing is produced on a parse failure.
pub fn compare(current: &str, latest: &str) -> Result<Comparison, CompareError> {
    let current = parse_version(current).ok_or_else(|| CompareError::UnparseableCurrent {
        raw: current.to_string(),
    })?;
    let latest = parse_version(latest).ok_or_else(|| CompareError::UnparseableLatest {
        raw: latest.to_string(),
    })?;

    let ordering = current.cmp_precedence(&latest);

    Ok(Comparison {
        matches: ordering == Ordering::Equal,
        newer: ordering == Ordering::Greater,
        diff: classify(&current, &latest, ordering),
    })
}

/// Label the highest-order component that differs between the two versions.
///
/// The `pre` prefix applies whenever either side carries a prerelease tag;
/// identical release triples that differ only in prerelease identifiers are
/// a plain `prerelease` step.
fn classify(current: &Version, latest: &Version, ordering: Ordering) -> Option<Diff> {
    if ordering == Ordering::Equal {
        return None;
    }

    let prereleased = !current.pre.is_empty() || !latest.pre.is_empty();

    let diff = if current.major != latest.major {
        if prereleased {
            Diff::Premajor
        } else {
            Diff::Major
        }
    } else if current.minor != latest.minor {
        if prereleased {
            Diff::Preminor
        } else {
            Diff::Minor
        }
    } else if current.patch != latest.patch {
        if prereleased {
            Diff::Prepatch
        } else {
            Diff::Patch
        }
    } else {
        Diff::Prerelease
    };

    Some(diff)
}
