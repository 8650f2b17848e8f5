//! Parsing of a single Go module version.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;

/// Prefix required at the start of every Go version string.
pub const VERSION_PREFIX: char = 'v';

/// Matches the prerelease label carried by a pseudo-version.
pub static PSEUDO_VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{14}-[0-9a-f]{12}$").unwrap());

/// A validated Go module version.
///
/// Ordering follows semantic version precedence (a release sorts after all
/// of its prereleases). Versions of equal precedence are ordered by their
/// original text, so only identical inputs compare equal.
#[derive(Debug, Clone)]
pub struct Version {
    inner: semver::Version,
    /// The input exactly as parsed, including the leading `v`.
    original: String,
}

impl Version {
    /// Parse a Go module version such as `v1.2.3` or
    /// `v0.0.0-20170915032832-14c0d48ead0c`.
    ///
    /// The remainder after the `v` must be a strict semantic version with
    /// no build metadata.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let Some(rest) = raw.strip_prefix(VERSION_PREFIX) else {
            return Err(ParseError::MissingPrefix {
                version: raw.to_string(),
            });
        };

        let inner =
            semver::Version::parse(rest).map_err(|source| ParseError::InvalidSemanticVersion {
                version: raw.to_string(),
                source,
            })?;

        if !inner.build.is_empty() {
            return Err(ParseError::ContainsBuildMetadata {
                version: raw.to_string(),
            });
        }

        Ok(Self {
            inner,
            original: raw.to_string(),
        })
    }

    pub fn major(&self) -> u64 {
        self.inner.major
    }

    pub fn minor(&self) -> u64 {
        self.inner.minor
    }

    pub fn patch(&self) -> u64 {
        self.inner.patch
    }

    /// The prerelease label without its leading `-`, empty for releases.
    pub fn prerelease(&self) -> &str {
        self.inner.pre.as_str()
    }

    /// The version text as originally given, e.g. `v1.2.3`.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The version without its `v` prefix, e.g. `1.2.3`.
    pub fn semver(&self) -> &semver::Version {
        &self.inner
    }

    pub fn is_prerelease(&self) -> bool {
        !self.inner.pre.is_empty()
    }

    /// Whether the prerelease label names an untagged source snapshot.
    pub fn is_pseudo_version(&self) -> bool {
        PSEUDO_VERSION_PATTERN.is_match(self.prerelease())
    }

    pub fn is_release(&self) -> bool {
        !self.is_prerelease()
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // Build metadata is rejected at parse time, so this is pure precedence
        self.inner
            .cmp(&other.inner)
            .then_with(|| self.original.cmp(&other.original))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
        self.original.hash(state);
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.original)
    }
}
