//! Go module version numbers.
//!
//! A Go module version differs from a strict [semantic version] in three
//! ways:
//!
//! 1. The leading `v` is mandatory.
//! 2. Build metadata (`+...`) is not allowed.
//! 3. A pseudo-version is a prerelease whose label is a 14 digit UTC
//!    timestamp and a 12 character commit hash prefix, naming an untagged
//!    source snapshot.
//!
//! # Examples
//!
//! ```
//! use gotool_version::{Version, VersionCollection};
//!
//! let collection: VersionCollection = ["v1.2.1", "v1.2.1-pre.1", "v0.9.0"]
//!     .into_iter()
//!     .map(|raw| Version::parse(raw).unwrap())
//!     .collect();
//!
//! assert_eq!(collection.to_string(), "v0.9.0 v1.2.1-pre.1 v1.2.1");
//! assert_eq!(collection.latest_stable().unwrap().original(), "v1.2.1");
//! ```
//!
//! [semantic version]: https://semver.org/

pub mod collection;
pub mod error;
pub mod version;

pub use collection::{Collected, Rejected, VersionCollection};
pub use error::{Error, ParseError, ParseErrorKind, Result};
pub use version::{PSEUDO_VERSION_PATTERN, VERSION_PREFIX, Version};
