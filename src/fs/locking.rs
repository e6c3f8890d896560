//! File locking utilities for safe concurrent access
//!
//! Readers and writers coordinate through `fs2` advisory locks held on a
//! sidecar `<file>.lock`. The data file itself is replaced by rename, so a
//! lock on it would not survive a write.
//!
//! Advisory locks are cooperative - all participants must use these functions
//! for the locking to be effective.

use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Path of the sidecar lock file guarding `path`.
pub fn lock_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".lock");
    path.with_file_name(name)
}

fn open_lock(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path(path))
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Read file contents under a shared lock.
///
/// Returns `Ok(None)` when the file (or its directory) does not exist.
pub fn locked_read(path: &Path) -> io::Result<Option<String>> {
    if !parent_dir(path).exists() {
        return Ok(None);
    }

    let lock = open_lock(path)?;
    lock.lock_shared()?;

    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
    // `lock` drops here, releasing the shared lock on every path
}

/// Exclusive hold on the sidecar lock of a file.
///
/// Lets a caller read, decide and write back without another process
/// interleaving. The lock is released when the guard drops.
pub struct ExclusiveLock {
    path: PathBuf,
    _lock: File,
}

/// Take the exclusive lock for `path`, creating its directory if needed.
pub fn lock_exclusive(path: &Path) -> io::Result<ExclusiveLock> {
    fs::create_dir_all(parent_dir(path))?;

    let lock = open_lock(path)?;
    lock.lock_exclusive()?;
    Ok(ExclusiveLock {
        path: path.to_path_buf(),
        _lock: lock,
    })
}

impl ExclusiveLock {
    /// Current contents, or `None` when the file does not exist.
    pub fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Replace the contents atomically.
    ///
    /// The sequence is: write temp file in the same directory → flush →
    /// fsync → rename over the target. Readers see either the old or the new
    /// contents, never a partial write. On error the temp file is removed.
    pub fn write(&self, content: &str) -> io::Result<()> {
        let temp = NamedTempFile::new_in(parent_dir(&self.path))?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            writer.write_all(content.as_bytes())?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Replace file contents atomically under an exclusive lock.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    lock_exclusive(path)?.write(content)
}

/// Remove a file under an exclusive lock.
///
/// Returns whether a file was removed.
pub fn locked_remove(path: &Path) -> io::Result<bool> {
    if !parent_dir(path).exists() {
        return Ok(false);
    }

    let lock = open_lock(path)?;
    lock.lock_exclusive()?;

    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
