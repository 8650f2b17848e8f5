//! Installation manifest for Go tool plugins.
//!
//! A manifest records where a plugin's tool comes from: the plugin name,
//! the Go package path, the source repository and, once resolved, the git
//! reference that was installed. It is written once per installation to
//! `<data_dir>/plugins/<plugin_name>/manifest.json` and reloaded (and
//! re-validated) by every later command.
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "manifestVersion": "v1",
//!   "manifestPayload": {
//!     "pluginName": "go-enum",
//!     "packageName": "github.com/abice/go-enum",
//!     "gitRepository": "https://github.com/abice/go-enum.git",
//!     "gitReference": {
//!       "name": "v0.6.0",
//!       "hash": "919e61c0174b91303753ee3898569a01abb32c97"
//!     }
//!   }
//! }
//! ```

pub mod error;
pub mod manifest;
pub mod reference;
pub mod schema;
mod wire;

pub use error::{Error, FieldProblem, Result};
pub use manifest::Manifest;
pub use reference::GitReference;
pub use schema::{CURRENT_SCHEMA_VERSION, SchemaVersion};
