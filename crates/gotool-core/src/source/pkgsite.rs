//! pkg.go.dev version source
//!
//! Versions are read from the package's "versions" tab and the source
//! repository from the repository link in the package's sidebar.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::http::{HttpClient, ReqwestClient};
use super::{SourceListing, VersionSource};
use crate::error::{Error, Result};

/// Default package index.
pub const DEFAULT_PKGSITE_URL: &str = "https://pkg.go.dev";

/// Anchor text inside each `Version-tag` element of the versions tab.
static VERSION_TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"class="Version-tag"[^>]*>\s*<a\b[^>]*>\s*([^<]+?)\s*</a>"#).unwrap()
});

/// Link target of the `UnitMeta-repo` sidebar element.
static REPOSITORY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"class="UnitMeta-repo"[^>]*>\s*<a\b[^>]*\bhref="([^"]+)""#).unwrap()
});

/// Version source scraping pkg.go.dev (or a mirror with the same markup).
#[derive(Debug, Clone)]
pub struct PkgSiteSource<C = ReqwestClient> {
    base: Url,
    client: C,
}

impl PkgSiteSource<ReqwestClient> {
    /// Source against pkg.go.dev using a client with the default timeout.
    pub fn new() -> Result<Self> {
        let base = Url::parse(DEFAULT_PKGSITE_URL).map_err(|e| Error::InvalidSetting {
            var: "pkgsite URL".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::with_client(base, ReqwestClient::new()?))
    }
}

impl<C: HttpClient> PkgSiteSource<C> {
    pub fn with_client(base: Url, client: C) -> Self {
        Self { base, client }
    }

    /// `<base>/<package>`, optionally with a `tab` query.
    fn package_url(&self, package: &str, tab: Option<&str>) -> String {
        let mut url = self.base.clone();
        url.set_path(&format!("/{}", package.trim_matches('/')));
        url.set_query(tab.map(|t| format!("tab={t}")).as_deref());
        url.into()
    }

    fn fetch_page(&self, url: &str, goal: &str) -> Result<String> {
        tracing::debug!(url, goal, "Scraping package site");
        let body = self.client.get(url)?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

impl<C: HttpClient> VersionSource for PkgSiteSource<C> {
    fn fetch(&self, package: &str) -> Result<SourceListing> {
        let versions_page = self.fetch_page(&self.package_url(package, Some("versions")), "versions")?;
        let versions = extract_versions(&versions_page);

        let overview_page = self.fetch_page(&self.package_url(package, None), "repository")?;
        let repository = extract_repository(&overview_page).and_then(|href| match Url::parse(&href) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(package, href = %href, error = %e, "Ignoring unparseable repository link");
                None
            }
        });

        tracing::debug!(
            package,
            candidates = versions.len(),
            repository = repository.as_ref().map(Url::as_str),
            "Fetched package listing"
        );

        Ok(SourceListing {
            versions,
            repository,
        })
    }
}

/// Raw version strings listed on a versions tab, in page order.
pub(crate) fn extract_versions(html: &str) -> Vec<String> {
    VERSION_TAG_PATTERN
        .captures_iter(html)
        .map(|c| c[1].to_string())
        .collect()
}

/// The repository link of a package overview page.
pub(crate) fn extract_repository(html: &str) -> Option<String> {
    REPOSITORY_PATTERN
        .captures(html)
        .map(|c| c[1].replace("&amp;", "&"))
}
