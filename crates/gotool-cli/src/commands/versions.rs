//! Commands that query a version source

use std::io::Write;

use colored::Colorize;
use gotool_core::{Resolver, VersionSource};
use gotool_fs::{DataDir, Gateway};
use gotool_version::VersionCollection;

use crate::error::Result;

/// Print every valid version of `package`, lowest first, on one line.
pub fn run_list_all(source: &dyn VersionSource, package: &str, out: &mut dyn Write) -> Result<()> {
    let versions = collect(source, package)?;
    writeln!(out, "{versions}")?;
    Ok(())
}

/// Print the latest stable version of `package`, or the latest of any kind
/// with `include_prerelease`.
pub fn run_latest(
    source: &dyn VersionSource,
    package: &str,
    include_prerelease: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let versions = collect(source, package)?;
    let latest = if include_prerelease {
        versions.latest().ok_or(gotool_version::Error::NoVersions)?
    } else {
        versions.latest_stable()?
    };
    writeln!(out, "{latest}")?;
    Ok(())
}

/// Resolve `package` for `plugin` and write its manifest.
pub fn run_resolve(
    source: &dyn VersionSource,
    gateway: &dyn Gateway,
    data_dir: &DataDir,
    plugin: &str,
    package: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let resolution = Resolver::new(source, gateway, data_dir.clone(), plugin, package).run()?;

    writeln!(
        out,
        "{} {} {} from {}",
        "Resolved".green().bold(),
        plugin.cyan(),
        resolution.version,
        resolution.manifest.git_repository()
    )?;
    Ok(())
}

fn collect(source: &dyn VersionSource, package: &str) -> Result<VersionCollection> {
    let listing = source.fetch(package)?;
    Ok(VersionCollection::collect(package, &listing.versions).versions)
}
