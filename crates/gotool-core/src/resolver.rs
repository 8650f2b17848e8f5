//! Install resolution pipeline
//!
//! Resolving an install walks four states:
//!
//! ```text
//! Unresolved --discover--> VersionsDiscovered --select--> VersionSelected --persist--> ManifestPersisted
//! ```
//!
//! A failed step leaves the resolver in the state it started from, so the
//! caller may inspect it or retry the step. `ManifestPersisted` is terminal.

use gotool_fs::{DataDir, Gateway};
use gotool_manifest::Manifest;
use gotool_version::{Rejected, Version, VersionCollection};
use url::Url;

use crate::error::{Error, Result};
use crate::source::VersionSource;

/// Where a resolver is in the install pipeline.
#[derive(Debug, Default)]
pub enum InstallState {
    #[default]
    Unresolved,
    VersionsDiscovered {
        versions: VersionCollection,
        rejected: Vec<Rejected>,
        repository: Option<Url>,
    },
    VersionSelected {
        version: Version,
        manifest: Manifest,
    },
    ManifestPersisted {
        version: Version,
        manifest: Manifest,
    },
}

impl InstallState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unresolved => "unresolved",
            Self::VersionsDiscovered { .. } => "versions discovered",
            Self::VersionSelected { .. } => "version selected",
            Self::ManifestPersisted { .. } => "manifest persisted",
        }
    }
}

/// Result of a complete resolution.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub version: Version,
    pub manifest: Manifest,
}

/// Drives one install attempt for one plugin.
pub struct Resolver<'a> {
    source: &'a dyn VersionSource,
    gateway: &'a dyn Gateway,
    data_dir: DataDir,
    plugin_name: String,
    package: String,
    state: InstallState,
}

impl<'a> Resolver<'a> {
    pub fn new(
        source: &'a dyn VersionSource,
        gateway: &'a dyn Gateway,
        data_dir: DataDir,
        plugin_name: impl Into<String>,
        package: impl Into<String>,
    ) -> Self {
        Self {
            source,
            gateway,
            data_dir,
            plugin_name: plugin_name.into(),
            package: package.into(),
            state: InstallState::Unresolved,
        }
    }

    pub fn state(&self) -> &InstallState {
        &self.state
    }

    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Fetch and parse the candidate versions of the package.
    ///
    /// Malformed candidates are skipped; a fetch failure is returned as is.
    pub fn discover(&mut self) -> Result<&InstallState> {
        match std::mem::take(&mut self.state) {
            InstallState::Unresolved => {
                let listing = self.source.fetch(&self.package)?;
                let collected = VersionCollection::collect(&self.package, &listing.versions);

                tracing::info!(
                    package = %self.package,
                    versions = collected.versions.len(),
                    skipped = collected.rejected.len(),
                    "Discovered versions"
                );

                self.state = InstallState::VersionsDiscovered {
                    versions: collected.versions,
                    rejected: collected.rejected,
                    repository: listing.repository,
                };
                Ok(&self.state)
            }
            other => Err(self.out_of_order(other, "discover versions")),
        }
    }

    /// Pick the latest stable version and build the manifest for it.
    pub fn select(&mut self) -> Result<&InstallState> {
        match std::mem::take(&mut self.state) {
            InstallState::VersionsDiscovered {
                versions,
                rejected,
                repository,
            } => {
                let picked = versions
                    .latest_stable()
                    .cloned()
                    .map_err(Error::from)
                    .and_then(|version| match &repository {
                        Some(url) => Ok((version, url.clone())),
                        None => Err(Error::MissingRepository {
                            package: self.package.clone(),
                        }),
                    });

                match picked {
                    Ok((version, url)) => {
                        tracing::info!(package = %self.package, version = %version, "Selected version");
                        let manifest = Manifest::new(&self.plugin_name, &self.package, url);
                        self.state = InstallState::VersionSelected { version, manifest };
                        Ok(&self.state)
                    }
                    Err(e) => {
                        self.state = InstallState::VersionsDiscovered {
                            versions,
                            rejected,
                            repository,
                        };
                        Err(e)
                    }
                }
            }
            other => Err(self.out_of_order(other, "select a version")),
        }
    }

    /// Write the manifest of the selected version.
    ///
    /// An existing manifest for the plugin is overwritten.
    pub fn persist(&mut self) -> Result<&InstallState> {
        match std::mem::take(&mut self.state) {
            InstallState::VersionSelected { version, manifest } => {
                let written = manifest.write_to(self.gateway, &self.data_dir, &self.plugin_name);
                match written {
                    Ok(()) => {
                        self.state = InstallState::ManifestPersisted { version, manifest };
                        Ok(&self.state)
                    }
                    Err(e) => {
                        self.state = InstallState::VersionSelected { version, manifest };
                        Err(e.into())
                    }
                }
            }
            other => Err(self.out_of_order(other, "persist the manifest")),
        }
    }

    /// Run every remaining step and return the outcome.
    pub fn run(mut self) -> Result<Resolution> {
        if matches!(self.state, InstallState::Unresolved) {
            self.discover()?;
        }
        if matches!(self.state, InstallState::VersionsDiscovered { .. }) {
            self.select()?;
        }
        if matches!(self.state, InstallState::VersionSelected { .. }) {
            self.persist()?;
        }

        match self.state {
            InstallState::ManifestPersisted { version, manifest } => Ok(Resolution { version, manifest }),
            other => Err(Error::OutOfOrder {
                step: "finish resolution",
                state: other.name(),
            }),
        }
    }

    /// Put `state` back and describe the refused step.
    fn out_of_order(&mut self, state: InstallState, step: &'static str) -> Error {
        let err = Error::OutOfOrder {
            step,
            state: state.name(),
        };
        self.state = state;
        err
    }
}

impl std::fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("data_dir", &self.data_dir)
            .field("plugin_name", &self.plugin_name)
            .field("package", &self.package)
            .field("state", &self.state.name())
            .finish()
    }
}
