//! Settings resolved from the environment
//!
//! asdf passes its state to plugins through environment variables. Only
//! the handful this crate needs are read here:
//!
//! | Variable           | Meaning                              | Default              |
//! |--------------------|--------------------------------------|----------------------|
//! | `ASDF_DATA_DIR`    | Root of plugin installation state    | `$HOME/.asdf`        |
//! | `AGI_PKGSITE_URL`  | Package index to scrape              | `https://pkg.go.dev` |
//! | `AGI_HTTP_TIMEOUT` | Request timeout in whole seconds     | `30`                 |

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use gotool_fs::DataDir;
use url::Url;

use crate::error::{Error, Result};
use crate::source::{DEFAULT_PKGSITE_URL, DEFAULT_TIMEOUT, PkgSiteSource, ReqwestClient};

pub const DATA_DIR_VAR: &str = "ASDF_DATA_DIR";
pub const PKGSITE_URL_VAR: &str = "AGI_PKGSITE_URL";
pub const HTTP_TIMEOUT_VAR: &str = "AGI_HTTP_TIMEOUT";

/// Fully resolved plugin settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root of plugin installation state
    pub data_dir: DataDir,
    /// Base URL of the package index
    pub pkgsite_url: Url,
    /// Timeout applied to each index request
    pub http_timeout: Duration,
}

impl Settings {
    /// Resolve settings from the process environment.
    ///
    /// Only the variables listed above are read; the rest of the
    /// environment may hold anything, including non-UTF-8 bytes.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            [DATA_DIR_VAR, PKGSITE_URL_VAR, HTTP_TIMEOUT_VAR]
                .into_iter()
                .filter_map(|var| std::env::var_os(var).map(|value| (var, value))),
        )
    }

    /// Resolve settings from explicit key/value pairs.
    ///
    /// Empty values are treated as unset. The data directory may be any
    /// path; the other values must be UTF-8.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OsString>,
    {
        let mut vars: HashMap<String, OsString> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v)| !is_blank(v))
            .collect();

        let data_dir = match vars.remove(DATA_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };

        let vars = vars
            .into_iter()
            .map(|(k, v)| match v.into_string() {
                Ok(text) => Ok((k, text)),
                Err(raw) => Err(Error::InvalidSetting {
                    message: format!("value is not valid UTF-8: {}", raw.to_string_lossy()),
                    var: k,
                }),
            })
            .collect::<Result<HashMap<String, String>>>()?;

        let pkgsite_url = vars
            .get(PKGSITE_URL_VAR)
            .map(String::as_str)
            .unwrap_or(DEFAULT_PKGSITE_URL);
        let pkgsite_url = Url::parse(pkgsite_url).map_err(|e| Error::InvalidSetting {
            var: PKGSITE_URL_VAR.to_string(),
            message: e.to_string(),
        })?;

        let http_timeout = match vars.get(HTTP_TIMEOUT_VAR) {
            Some(secs) => parse_timeout(secs)?,
            None => DEFAULT_TIMEOUT,
        };

        let settings = Self {
            data_dir: DataDir::new(data_dir),
            pkgsite_url,
            http_timeout,
        };
        tracing::debug!(
            data_dir = %settings.data_dir,
            pkgsite_url = %settings.pkgsite_url,
            http_timeout_secs = settings.http_timeout.as_secs(),
            "Resolved settings"
        );

        Ok(settings)
    }

    /// Replace the data directory, e.g. from a command-line flag.
    pub fn with_data_dir(mut self, data_dir: impl Into<DataDir>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// A pkg.go.dev source configured from these settings.
    pub fn pkgsite_source(&self) -> Result<PkgSiteSource<ReqwestClient>> {
        Ok(PkgSiteSource::with_client(
            self.pkgsite_url.clone(),
            ReqwestClient::with_timeout(self.http_timeout)?,
        ))
    }
}

fn default_data_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".asdf"))
        .ok_or_else(|| Error::InvalidSetting {
            var: DATA_DIR_VAR.to_string(),
            message: "not set and no home directory could be determined".to_string(),
        })
}

fn is_blank(value: &OsString) -> bool {
    value.to_str().is_some_and(|s| s.trim().is_empty())
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(Error::InvalidSetting {
            var: HTTP_TIMEOUT_VAR.to_string(),
            message: format!("expected a positive number of seconds, found '{raw}'"),
        }),
    }
}
