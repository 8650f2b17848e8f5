use std::collections::HashMap;

use url::Url;

use super::{SourceListing, VersionSource};
use crate::error::{Error, Result};

/// Version source answering from a fixed in-memory table.
///
/// Packages that were never added fail the fetch, as an index would for an
/// unknown package.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    listings: HashMap<String, SourceListing>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the listing returned for `package`.
    pub fn with_package<I, S>(mut self, package: impl Into<String>, versions: I, repository: Option<Url>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.listings.insert(
            package.into(),
            SourceListing {
                versions: versions.into_iter().map(Into::into).collect(),
                repository,
            },
        );
        self
    }
}

impl VersionSource for StaticSource {
    fn fetch(&self, package: &str) -> Result<SourceListing> {
        self.listings.get(package).cloned().ok_or_else(|| Error::Http {
            url: package.to_string(),
            message: "package not found".to_string(),
        })
    }
}
