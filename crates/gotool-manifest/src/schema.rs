//! Manifest schema versions.
//!
//! Schema versions are written the way Go versions are, but may omit the
//! minor and patch components (`v1` is `1.0.0`). The original text is kept
//! so that a manifest is re-encoded exactly as it was read.

use std::str::FromStr;

/// The only schema version this crate reads and writes.
pub const CURRENT_SCHEMA_VERSION: &str = "v1";

/// Version tag identifying the shape of a manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaVersion {
    version: semver::Version,
    original: String,
}

impl SchemaVersion {
    /// The schema version written by [`Manifest::new`](crate::Manifest::new).
    pub fn current() -> Self {
        Self {
            version: semver::Version::new(1, 0, 0),
            original: CURRENT_SCHEMA_VERSION.to_string(),
        }
    }

    /// Parse `v1`, `v1.0` or `v1.0.0` (the `v` is optional).
    pub fn parse(raw: &str) -> Result<Self, String> {
        let digits = raw.strip_prefix('v').unwrap_or(raw);
        if digits.is_empty() {
            return Err(format!("'{raw}' is not a version"));
        }

        let mut parts = [0u64; 3];
        let mut count = 0;
        for part in digits.split('.') {
            if count == parts.len() {
                return Err(format!("'{raw}' has too many components"));
            }
            let non_numeric = || format!("'{raw}' has a non-numeric component '{part}'");
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(non_numeric());
            }
            parts[count] = part.parse().map_err(|_| non_numeric())?;
            count += 1;
        }

        Ok(Self {
            version: semver::Version::new(parts[0], parts[1], parts[2]),
            original: raw.to_string(),
        })
    }

    /// Whether documents of this schema can be read.
    pub fn is_supported(&self) -> bool {
        self.version.major == Self::current().version.major
    }

    pub fn version(&self) -> &semver::Version {
        &self.version
    }

    /// The text the version was parsed from, e.g. `v1`.
    pub fn original(&self) -> &str {
        &self.original
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::current()
    }
}

impl FromStr for SchemaVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_current() {
        let current = SchemaVersion::current();
        assert_eq!(current.original(), "v1");
        assert_eq!(current.version(), &semver::Version::new(1, 0, 0));
        assert!(current.is_supported());
    }

    #[rstest]
    #[case("v1", 1, 0, 0)]
    #[case("v1.2", 1, 2, 0)]
    #[case("v1.2.3", 1, 2, 3)]
    #[case("2", 2, 0, 0)]
    fn test_parse_lax(#[case] raw: &str, #[case] major: u64, #[case] minor: u64, #[case] patch: u64) {
        let v = SchemaVersion::parse(raw).unwrap();
        assert_eq!(v.version(), &semver::Version::new(major, minor, patch));
        assert_eq!(v.to_string(), raw);
    }

    #[rstest]
    #[case("")]
    #[case("v")]
    #[case("vone")]
    #[case("v1.2.3.4")]
    #[case("v1..2")]
    #[case("v+1")]
    #[case("v1.+2")]
    #[case("v-1")]
    #[case("v 1")]
    fn test_parse_rejects(#[case] raw: &str) {
        assert!(SchemaVersion::parse(raw).is_err());
    }

    #[test]
    fn test_only_major_one_is_supported() {
        assert!(SchemaVersion::parse("v1.4").unwrap().is_supported());
        assert!(!SchemaVersion::parse("v2").unwrap().is_supported());
    }

    #[test]
    fn test_equal_versions_with_different_text_differ() {
        // The original text is part of the value so re-encoding is lossless
        assert_ne!(SchemaVersion::parse("v1").unwrap(), SchemaVersion::parse("v1.0.0").unwrap());
    }
}
