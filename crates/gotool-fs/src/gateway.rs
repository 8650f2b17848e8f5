//! Persistence gateway
//!
//! The narrow read/write seam through which plugin state reaches durable
//! storage. No transactional guarantees are made beyond those of a single
//! write call.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::{Error, Result, io};

/// Primitive byte-level access to durable storage.
pub trait Gateway {
    /// Read the full contents stored at `path`.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replace the contents stored at `path`.
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;
}

/// Gateway backed by the local filesystem.
///
/// Writes are atomic and use [`io::STATE_FILE_MODE`] permissions.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsGateway;

impl FsGateway {
    pub fn new() -> Self {
        Self
    }
}

impl Gateway for FsGateway {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        io::read_bytes(path)
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        io::write_atomic(path, content, io::STATE_FILE_MODE)
    }
}

/// In-memory gateway, useful for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the gateway with existing content.
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        self.lock().insert(path.into(), content.into());
    }

    /// Snapshot of the content currently stored at `path`.
    pub fn get(&self, path: &Path) -> Option<Vec<u8>> {
        self.lock().get(path).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Vec<u8>>> {
        // A poisoned map still holds consistent byte buffers
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Gateway for MemoryGateway {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.get(path).ok_or_else(|| {
            Error::io(path, std::io::Error::from(std::io::ErrorKind::NotFound))
        })
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        self.insert(path, content.to_vec());
        Ok(())
    }
}
