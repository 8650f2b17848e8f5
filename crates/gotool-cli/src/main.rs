//! asdf-go-install CLI
//!
//! Backs an asdf plugin that installs a Go tool from its package path.

mod cli;
mod commands;
mod error;
mod logging;

use std::io::Write;

use clap::Parser;
use colored::Colorize;
use gotool_core::Settings;
use gotool_fs::FsGateway;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow().bold(), e);
    }

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = Settings::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        settings = settings.with_data_dir(data_dir);
    }
    tracing::debug!(command = ?cli.command, "Running command");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command(cli.command, &settings, &mut out)?;
    out.flush()?;
    Ok(())
}

fn execute_command(cmd: Commands, settings: &Settings, out: &mut dyn Write) -> Result<()> {
    match cmd {
        Commands::ListAll { package } => {
            commands::run_list_all(&settings.pkgsite_source()?, &package, out)
        }
        Commands::Latest {
            package,
            include_prerelease,
        } => commands::run_latest(&settings.pkgsite_source()?, &package, include_prerelease, out),
        Commands::Resolve { plugin, package } => commands::run_resolve(
            &settings.pkgsite_source()?,
            &FsGateway,
            &settings.data_dir,
            &plugin,
            &package,
            out,
        ),
        Commands::Show { plugin, json } => {
            commands::run_show(&FsGateway, &settings.data_dir, &plugin, json, out)
        }
        Commands::Pin { plugin, name, hash } => {
            commands::run_pin(&FsGateway, &settings.data_dir, &plugin, &name, &hash, out)
        }
    }
}
