//! Read-only filesystem helpers built on `cap-std` and `camino`.
//!
//! Dataset files are reached through a capability handle on their parent
//! directory so inspection and opening share the same authority.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// A directory capability paired with the name of one entry inside it.
#[derive(Debug)]
pub struct DirEntryHandle {
    dir: fs_utf8::Dir,
    name: String,
}

impl DirEntryHandle {
    /// Resolve the parent directory of `path` with ambient authority.
    ///
    /// A bare file name resolves against the current directory.
    ///
    /// # Errors
    /// Fails when `path` has no file name or the parent cannot be opened.
    pub fn resolve(path: &Utf8Path) -> io::Result<Self> {
        let name = path
            .file_name()
            .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
            .to_owned();
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
        Ok(Self { dir, name })
    }

    /// Name of the entry within its directory.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the entry exists and is a regular file.
    ///
    /// # Errors
    /// Propagates metadata failures, including `NotFound`.
    pub fn is_file(&self) -> io::Result<bool> {
        self.dir
            .metadata(self.name.as_str())
            .map(|meta| meta.is_file())
    }

    /// Open the entry for reading.
    ///
    /// # Errors
    /// Propagates open failures.
    pub fn open(&self) -> io::Result<fs_utf8::File> {
        self.dir.open(self.name.as_str())
    }
}

/// Open `path` for reading.
///
/// # Errors
/// Propagates resolution and open failures.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    DirEntryHandle::resolve(path)?.open()
}

/// Whether `path` exists and is a regular file.
///
/// # Errors
/// Propagates resolution and metadata failures, including `NotFound`.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    DirEntryHandle::resolve(path)?.is_file()
}
