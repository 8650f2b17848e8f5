//! Commands that read or update an installed plugin's manifest

use std::io::Write;

use colored::Colorize;
use gotool_fs::{DataDir, Gateway};
use gotool_manifest::{GitReference, Manifest};

use crate::error::{CliError, Result};

/// Print the manifest of `plugin`.
pub fn run_show(gateway: &dyn Gateway, data_dir: &DataDir, plugin: &str, json: bool, out: &mut dyn Write) -> Result<()> {
    let manifest = Manifest::read_from(gateway, data_dir, plugin)?;

    if json {
        writeln!(out, "{}", manifest.to_json()?)?;
        return Ok(());
    }

    writeln!(out, "{}", manifest.plugin_name().bold())?;
    writeln!(out, "  {:<16} {}", "Schema:".dimmed(), manifest.schema_version())?;
    writeln!(out, "  {:<16} {}", "Package:".dimmed(), manifest.package_name())?;
    writeln!(out, "  {:<16} {}", "Repository:".dimmed(), manifest.git_repository())?;
    match manifest.git_reference() {
        Some(reference) => writeln!(
            out,
            "  {:<16} {} ({})",
            "Reference:".dimmed(),
            reference.name().green(),
            reference.hash()
        )?,
        None => writeln!(out, "  {:<16} {}", "Reference:".dimmed(), "unresolved".yellow())?,
    }

    Ok(())
}

/// Attach a git reference to the manifest of `plugin` and write it back.
pub fn run_pin(
    gateway: &dyn Gateway,
    data_dir: &DataDir,
    plugin: &str,
    name: &str,
    hash: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let reference = GitReference::new(name, hash).map_err(|e| CliError::invalid_argument(e.to_string()))?;
    let manifest = Manifest::read_from(gateway, data_dir, plugin)?.with_git_reference(reference);
    manifest.write_to(gateway, data_dir, plugin)?;

    tracing::info!(plugin, name, hash, "Pinned git reference");
    writeln!(out, "{} {} to {} ({})", "Pinned".green().bold(), plugin.cyan(), name, hash)?;
    Ok(())
}
