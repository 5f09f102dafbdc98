//! Filesystem capability used by the manipulator

use routing_fs::{NormalizedPath, io};

use crate::error::Result;

/// Storage backend for routing files.
///
/// The manipulator only ever reads a whole file, creates the directory it
/// lives in, and replaces the file in one write.
pub trait RouteStore {
    /// Read the file, or `None` if it does not exist.
    fn read(&self, path: &NormalizedPath) -> Result<Option<String>>;

    /// Make sure the directory holding `path` exists.
    fn ensure_parent(&self, path: &NormalizedPath) -> Result<()>;

    /// Replace the file content.
    ///
    /// Failures are reported as values so the caller can decide whether a
    /// failed write is fatal.
    fn write(&self, path: &NormalizedPath, content: &str) -> routing_fs::Result<()>;
}

/// [`RouteStore`] backed by the local filesystem with atomic writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl RouteStore for FsStore {
    fn read(&self, path: &NormalizedPath) -> Result<Option<String>> {
        Ok(io::read_text_if_exists(path)?)
    }

    fn ensure_parent(&self, path: &NormalizedPath) -> Result<()> {
        match path.parent() {
            Some(parent) => Ok(io::ensure_dir(&parent)?),
            None => Ok(()),
        }
    }

    fn write(&self, path: &NormalizedPath, content: &str) -> routing_fs::Result<()> {
        io::write_text(path, content)
    }
}

impl<S: RouteStore + ?Sized> RouteStore for &S {
    fn read(&self, path: &NormalizedPath) -> Result<Option<String>> {
        (**self).read(path)
    }

    fn ensure_parent(&self, path: &NormalizedPath) -> Result<()> {
        (**self).ensure_parent(path)
    }

    fn write(&self, path: &NormalizedPath, content: &str) -> routing_fs::Result<()> {
        (**self).write(path, content)
    }
}
