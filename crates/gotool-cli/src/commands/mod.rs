//! Command implementations for gotool-cli

pub mod manifest;
pub mod versions;

pub use manifest::{run_pin, run_show};
pub use versions::{run_latest, run_list_all, run_resolve};
