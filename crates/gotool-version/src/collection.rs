//! Sorted collections of Go module versions.

use crate::error::{Error, ParseError, Result};
use crate::version::Version;

/// Go module versions held in ascending precedence order.
///
/// Built once and never reordered. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionCollection {
    versions: Vec<Version>,
}

/// A candidate string that was rejected while building a collection.
#[derive(Debug)]
pub struct Rejected {
    pub candidate: String,
    pub error: ParseError,
}

/// Outcome of parsing a batch of untrusted candidate strings.
#[derive(Debug, Default)]
pub struct Collected {
    pub versions: VersionCollection,
    pub rejected: Vec<Rejected>,
}

impl VersionCollection {
    /// Sort and store the provided versions.
    pub fn new(versions: impl IntoIterator<Item = Version>) -> Self {
        let mut versions: Vec<Version> = versions.into_iter().collect();
        versions.sort();
        Self { versions }
    }

    /// Parse every candidate, skipping (and logging) the ones that are not
    /// valid Go versions.
    ///
    /// A malformed candidate never aborts the batch.
    pub fn collect<I, S>(package: &str, candidates: I) -> Collected
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        let mut rejected = Vec::new();

        for candidate in candidates {
            let candidate = candidate.as_ref();
            match Version::parse(candidate) {
                Ok(v) => parsed.push(v),
                Err(error) => {
                    tracing::warn!(
                        package,
                        candidate,
                        error = %error,
                        "Skipping invalid Go version"
                    );
                    rejected.push(Rejected {
                        candidate: candidate.to_string(),
                        error,
                    });
                }
            }
        }

        let versions = Self::new(parsed);
        tracing::debug!(
            package,
            accepted = versions.len(),
            rejected = rejected.len(),
            "Collected Go versions"
        );

        Collected { versions, rejected }
    }

    /// Versions from lowest to highest precedence.
    pub fn iter(&self) -> std::slice::Iter<'_, Version> {
        self.versions.iter()
    }

    pub fn as_slice(&self) -> &[Version] {
        &self.versions
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// The highest-precedence release.
    ///
    /// Prereleases and pseudo-versions are passed over. Fails with
    /// [`Error::NoStableVersion`] when nothing else remains.
    pub fn latest_stable(&self) -> Result<&Version> {
        self.versions
            .iter()
            .rev()
            .find(|v| v.is_release())
            .ok_or(Error::NoStableVersion)
    }

    /// The highest-precedence version of any kind.
    pub fn latest(&self) -> Option<&Version> {
        self.versions.last()
    }
}

impl FromIterator<Version> for VersionCollection {
    fn from_iter<T: IntoIterator<Item = Version>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a VersionCollection {
    type Item = &'a Version;
    type IntoIter = std::slice::Iter<'a, Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Space separated original version strings, lowest first.
impl std::fmt::Display for VersionCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, v) in self.versions.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(v.original())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;
    use pretty_assertions::assert_eq;

    const PSEUDO_0_0_0: &str = "v0.0.0-20170915032832-14c0d48ead0c";
    const PSEUDO_1_2_3: &str = "v1.2.3-20170915032832-14c0d48ead0c";
    const PSEUDO_5_6_7: &str = "v5.6.7-20170915032832-14c0d48ead0c";

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn mixed() -> VersionCollection {
        VersionCollection::new([
            v("v4.5.6"),
            v("v2.2.4"),
            v(PSEUDO_0_0_0),
            v("v1.2.3"),
            v(PSEUDO_1_2_3),
            v("v1.2.1-pre.3"),
            v("v1.2.1-pre.1"),
            v("v1.2.1"),
            v("v1.2.1-pre.2"),
            v(PSEUDO_5_6_7),
            v("v3.4.5"),
        ])
    }

    #[test]
    fn test_sorted_ascending() {
        let col = mixed();
        assert_eq!(col.len(), 11);

        let order: Vec<&str> = col.iter().map(Version::original).collect();
        assert_eq!(
            order,
            vec![
                PSEUDO_0_0_0,
                "v1.2.1-pre.1",
                "v1.2.1-pre.2",
                "v1.2.1-pre.3",
                "v1.2.1",
                PSEUDO_1_2_3,
                "v1.2.3",
                "v2.2.4",
                "v3.4.5",
                "v4.5.6",
                PSEUDO_5_6_7,
            ]
        );
    }

    #[test]
    fn test_latest_stable_skips_newer_pseudo_versions() {
        let col = mixed();
        assert_eq!(col.latest_stable().unwrap().original(), "v4.5.6");
        assert_eq!(col.latest().unwrap().original(), PSEUDO_5_6_7);
    }

    #[test]
    fn test_display() {
        let expected = format!(
            "{PSEUDO_0_0_0} v1.2.1-pre.1 v1.2.1-pre.2 v1.2.1-pre.3 v1.2.1 {PSEUDO_1_2_3} v1.2.3 v2.2.4 v3.4.5 v4.5.6 {PSEUDO_5_6_7}"
        );
        assert_eq!(mixed().to_string(), expected);
    }

    #[test]
    fn test_no_stable_version() {
        let col = VersionCollection::new([
            v(PSEUDO_0_0_0),
            v(PSEUDO_1_2_3),
            v("v1.2.1-pre.3"),
            v("v1.2.1-pre.1"),
        ]);
        assert!(matches!(col.latest_stable(), Err(Error::NoStableVersion)));
    }

    #[test]
    fn test_empty_collection() {
        let col = VersionCollection::default();
        assert!(col.is_empty());
        assert_eq!(col.to_string(), "");
        assert!(col.latest().is_none());
        assert!(matches!(col.latest_stable(), Err(Error::NoStableVersion)));
        assert!(Error::NoVersions.is_not_found());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let col = VersionCollection::new([v("v1.0.0"), v("v1.0.0"), v("v0.9.0")]);
        assert_eq!(col.len(), 3);
        assert_eq!(col.to_string(), "v0.9.0 v1.0.0 v1.0.0");
    }

    #[test]
    fn test_collect_skips_invalid_candidates() {
        let collected = VersionCollection::collect(
            "example",
            ["v1.0.0", "v1.1.0-pre.1", "vA.B.C", "v1.2.0+meta"],
        );

        assert_eq!(collected.versions.to_string(), "v1.0.0 v1.1.0-pre.1");
        assert_eq!(collected.versions.latest_stable().unwrap().original(), "v1.0.0");

        let kinds: Vec<(&str, ParseErrorKind)> = collected
            .rejected
            .iter()
            .map(|r| (r.candidate.as_str(), r.error.kind()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("vA.B.C", ParseErrorKind::InvalidSemanticVersion),
                ("v1.2.0+meta", ParseErrorKind::ContainsBuildMetadata),
            ]
        );
    }

    #[test]
    fn test_collect_accepts_owned_strings() {
        let raw = vec!["v0.2.0".to_string(), "0.3.0".to_string()];
        let collected = VersionCollection::collect("example", &raw);
        assert_eq!(collected.versions.len(), 1);
        assert_eq!(collected.rejected.len(), 1);
        assert_eq!(collected.rejected[0].error.kind(), ParseErrorKind::MissingPrefix);
    }
}
