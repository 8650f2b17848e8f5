//! Version sources
//!
//! A version source answers one question for a Go package: which version
//! strings exist, and where does the source live. The answer is all or
//! nothing. A source never returns a partial batch alongside an error, and
//! it does not parse the strings it returns.

mod fixed;
mod http;
mod pkgsite;

pub use fixed::StaticSource;
pub use http::{DEFAULT_TIMEOUT, HttpClient, ReqwestClient};
pub use pkgsite::{DEFAULT_PKGSITE_URL, PkgSiteSource};

use url::Url;

use crate::error::Result;

/// Raw answer of a version source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceListing {
    /// Candidate version strings, unordered and unvalidated.
    pub versions: Vec<String>,
    /// Repository the package's source is fetched from, if known.
    pub repository: Option<Url>,
}

/// Supplier of candidate versions for Go packages.
pub trait VersionSource {
    /// Fetch every candidate version of `package`.
    ///
    /// This may block on network I/O.
    fn fetch(&self, package: &str) -> Result<SourceListing>;
}
