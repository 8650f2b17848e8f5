//! Filesystem access for the Go tool plugin
//!
//! Resolves the deterministic locations of plugin state beneath the asdf
//! data directory and provides the atomic read/write primitives used to
//! persist it.

pub mod error;
pub mod gateway;
pub mod io;
pub mod layout;

pub use error::{Error, Result};
pub use gateway::{FsGateway, Gateway, MemoryGateway};
pub use layout::{DataDir, MANIFEST_FILE, PLUGINS_DIR};
