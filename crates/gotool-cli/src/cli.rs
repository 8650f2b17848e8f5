//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// asdf-go-install - Install Go tools as asdf plugins
#[derive(Parser, Debug)]
#[command(name = "asdf-go-install")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// asdf data directory (defaults to $HOME/.asdf)
    #[arg(long, global = true, env = "ASDF_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List every valid version of a Go package, lowest first
    ///
    /// Examples:
    ///   asdf-go-install list-all github.com/abice/go-enum
    ListAll {
        /// Go package path
        package: String,
    },

    /// Print the latest stable version of a Go package
    Latest {
        /// Go package path
        package: String,

        /// Consider prereleases and pseudo-versions too
        #[arg(long)]
        include_prerelease: bool,
    },

    /// Resolve the latest stable version and write the plugin manifest
    ///
    /// Examples:
    ///   asdf-go-install resolve go-enum github.com/abice/go-enum
    Resolve {
        /// Plugin name
        plugin: String,

        /// Go package path
        package: String,
    },

    /// Show the manifest of an installed plugin
    Show {
        /// Plugin name
        plugin: String,

        /// Output the manifest document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record the git reference a plugin is installed from
    Pin {
        /// Plugin name
        plugin: String,

        /// Reference name, e.g. a tag
        name: String,

        /// Full commit hash
        hash: String,
    },
}
