//! Install resolution for Go tool plugins
//!
//! This crate ties the Layer 0 crates together:
//!
//! - **Version sources**: where raw candidate versions and the source
//!   repository of a Go package come from (pkg.go.dev, or a static list)
//! - **Settings**: data directory and source configuration from the
//!   environment
//! - **Resolver**: the install pipeline, from discovering versions to
//!   persisting the manifest
//!
//! # Architecture
//!
//! ```text
//!                  asdf-go-install
//!                        |
//!                   gotool-core
//!                        |
//!       +----------------+----------------+
//!       |                |                |
//!  gotool-fs      gotool-version   gotool-manifest
//! ```

pub mod error;
pub mod resolver;
pub mod settings;
pub mod source;

pub use error::{Error, Result};
pub use resolver::{InstallState, Resolution, Resolver};
pub use settings::Settings;
pub use source::{
    HttpClient, PkgSiteSource, ReqwestClient, SourceListing, StaticSource, VersionSource,
};
