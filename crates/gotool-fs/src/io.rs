//! Atomic file writes beneath the data directory

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result};

/// Permission bits for persisted plugin state: owner read/write, others read.
pub const STATE_FILE_MODE: u32 = 0o644;

/// Replace `path` with `content` in one step.
///
/// The content is staged in a locked sibling file carrying `mode` and then
/// renamed over `path`, so readers see either the old or the new file. The
/// staging file is removed again if any step fails.
pub fn write_atomic(path: &Path, content: &[u8], mode: u32) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let staging = staging_path(path);
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&staging)
        .map_err(|e| Error::io(&staging, e))?;

    let result = stage(file, &staging, content, mode)
        .and_then(|()| fs::rename(&staging, path).map_err(|e| Error::io(path, e)));

    if let Err(e) = &result {
        tracing::warn!(path = %path.display(), error = %e, "Discarding staged write");
        if let Err(cleanup) = fs::remove_file(&staging) {
            tracing::debug!(path = %staging.display(), error = %cleanup, "Staging file not removed");
        }
        return result;
    }

    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file");
    Ok(())
}

/// `.<name>.<pid>.tmp` next to `path`, keeping the rename on one filesystem.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}

fn stage(mut file: File, staging: &Path, content: &[u8], mode: u32) -> Result<()> {
    let locked = || Error::LockFailed {
        path: staging.to_path_buf(),
    };

    file.lock_exclusive().map_err(|_| locked())?;
    file.write_all(content).map_err(|e| Error::io(staging, e))?;
    file.sync_all().map_err(|e| Error::io(staging, e))?;
    set_mode(staging, mode)?;
    file.unlock().map_err(|_| locked())
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|e| Error::io(path, e))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}

/// Read the raw bytes of a file.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(path, e))
}
