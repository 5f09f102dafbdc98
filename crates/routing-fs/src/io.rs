//! Atomic I/O operations with file locking

use std::fs::{self, OpenOptions, Permissions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content, returning `None` when the file does not exist.
pub fn read_text_if_exists(path: &NormalizedPath) -> Result<Option<String>> {
    let native_path = path.to_native();
    match fs::read_to_string(&native_path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// Create a directory and all missing ancestors.
///
/// New directories get mode `0o777` on unix (subject to the umask).
pub fn ensure_dir(path: &NormalizedPath) -> Result<()> {
    if path.as_str().is_empty() || path.is_dir() {
        return Ok(());
    }
    let native_path = path.to_native();

    tracing::debug!(path = %path, "Creating directory");

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }
    builder
        .create(&native_path)
        .map_err(|e| Error::io(&native_path, e))
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers never observe a partial file,
/// and holds an advisory lock on the temp file while writing. A symlinked
/// target is resolved so the file behind the link is replaced. The target
/// must be writable by the caller: a read-only file, or one the caller
/// cannot open for writing, is refused before anything is written. The
/// replacement keeps the permissions of the file it replaces.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let target = resolve_target(path)?;
    let native_path = target.to_native();

    let permissions = match fs::metadata(&native_path) {
        Ok(meta) if meta.permissions().readonly() => {
            return Err(Error::ReadOnly { path: native_path });
        }
        Ok(meta) => {
            check_writable(&native_path)?;
            Some(meta.permissions())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(Error::io(&native_path, e)),
    };

    if let Some(parent) = target.parent() {
        ensure_dir(&parent)?;
    }

    // Same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.{}.tmp",
        target.file_name().unwrap_or("routing"),
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    );
    let temp_path = target.sibling(&temp_name).to_native();

    let result = write_locked(&temp_path, &native_path, content, permissions)
        .and_then(|()| fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e)));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Follow symlinks to the file that should be replaced.
fn resolve_target(path: &NormalizedPath) -> Result<NormalizedPath> {
    let native_path = path.to_native();
    match fs::symlink_metadata(&native_path) {
        Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(&native_path) {
            Ok(resolved) => Ok(NormalizedPath::new(resolved)),
            // Dangling link: write where it points
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let link = fs::read_link(&native_path).map_err(|e| Error::io(&native_path, e))?;
                if link.is_absolute() {
                    Ok(NormalizedPath::new(link))
                } else {
                    let dir = native_path.parent().unwrap_or_else(|| Path::new(""));
                    Ok(NormalizedPath::new(dir.join(link)))
                }
            }
            Err(e) => Err(Error::io(&native_path, e)),
        },
        Ok(_) => Ok(path.clone()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(path.clone()),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// Opening for write (without truncating) fails the way an in-place
/// write would, e.g. on a file owned by another user.
fn check_writable(native_path: &Path) -> Result<()> {
    match OpenOptions::new().write(true).open(native_path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(native_path, e)),
    }
}

fn write_locked(
    temp_path: &Path,
    target: &Path,
    content: &[u8],
    permissions: Option<Permissions>,
) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    if let Some(permissions) = permissions {
        temp_file
            .set_permissions(permissions)
            .map_err(|e| Error::io(temp_path, e))?;
    }

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    Ok(())
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
