//! Version-string parsing

use semver::Version;

/// Parse a version string under the semantic-versioning 2.0.0 grammar.
///
/// Returns `None` for anything that does not conform: empty or missing
/// strings, partial versions like `1.2`, `v`-prefixed tags, leading zeros.
/// Absence is not an error by itself; callers decide whether it is fatal.
pub fn parse_version(raw: &str) -> Option<Version> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Version::parse(raw).ok()
}
