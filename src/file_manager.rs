//! Typed file accessors shared by the pipeline commands.
//!
//! This module provides the core file access functionality for seqprep: a base
//! accessor that validates its path at construction time and offers archive
//! operations, plus format-specific accessors for FASTA, JSON and TSV files.
//!
//! The format accessors do not form a hierarchy; each one holds a
//! [`ResolvedPath`] and adds free-standing parsing on top of it.

pub mod archive;
pub mod fasta;
pub mod glob;
pub mod json;
pub mod table;
pub mod tsv;

pub use fasta::{FastaFile, FastaRecord};
pub use glob::get_files_paths;
pub use json::JsonFile;
pub use table::{ColumnType, FieldValue, Table};
pub use tsv::TsvFile;

use crate::error::{Result, SeqprepError};
use std::fmt;
use std::path::{Path, PathBuf};

/// An absolute filesystem path, validated to exist at construction time.
///
/// The validation is a point-in-time guarantee: no lock is held, so the file
/// may disappear between construction and use. Operations that read the path
/// later surface their own I/O errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    inner: PathBuf,
}

impl ResolvedPath {
    /// Resolve a path to its absolute form, requiring that it exists.
    ///
    /// # Errors
    /// * `InvalidPath` - the supplied path is empty
    /// * `NotFound` - the path does not exist on disk
    pub fn resolve(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(SeqprepError::invalid_path("please provide a valid path"));
        }

        let inner = std::fs::canonicalize(path).map_err(|_| SeqprepError::NotFound {
            path: path.to_path_buf(),
        })?;

        Ok(Self { inner })
    }

    /// The resolved absolute path.
    pub fn as_path(&self) -> &Path {
        &self.inner
    }

    /// The base filename component of the path.
    pub fn file_name(&self) -> String {
        self.inner
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.inner
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}

/// Base file accessor over a validated path.
///
/// Offers the operations every accessor shares: archiving the file into a
/// sibling `.tar.bz2` and extracting a `.tar.bz2` archive at the path.
/// Directory-level helpers ([`get_files_paths`],
/// [`archive::compress_dir_to_tar_bz2`]) are free functions since they do not
/// operate on a single validated file.
#[derive(Debug, Clone)]
pub struct FileManager {
    path: ResolvedPath,
}

impl FileManager {
    /// Construct an accessor over `path`.
    ///
    /// # Errors
    /// * `InvalidPath` - the supplied path is empty
    /// * `NotFound` - the path does not exist on disk
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            path: ResolvedPath::resolve(path)?,
        })
    }

    /// The resolved absolute path this accessor operates on.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Extract the bzip2-compressed tar archive at this path into `out_path`.
    pub fn decompress_tar_bz2(&self, out_path: impl AsRef<Path>) -> Result<()> {
        archive::decompress_tar_bz2(self.path(), out_path.as_ref())
    }

    /// Archive the file at this path into a sibling `<stem>.tar.bz2`.
    ///
    /// Returns the path of the new archive.
    pub fn compress_to_tar_bz2(&self) -> Result<PathBuf> {
        archive::compress_to_tar_bz2(self.path())
    }
}
