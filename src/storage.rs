//! Object-store collaborator seam.
//!
//! The pipeline consumes exactly two object-store operations: download an
//! object by key to a local path (a no-op when the local copy already
//! exists), and upload a local file to a key, optionally marked public. The
//! trait captures that contract; [`FsObjectStore`] is the only in-tree
//! backend and treats a local directory as the bucket (keys are relative
//! paths). Cloud backends live outside this crate.

use crate::error::{Result, SeqprepError};
use std::path::{Path, PathBuf};

/// The object-store operations the pipeline consumes.
pub trait ObjectStore {
    /// Download the object at `key` to `out_path`.
    ///
    /// When `out_path` already exists the download is skipped and the
    /// existing path returned.
    ///
    /// # Errors
    /// * `ObjectNotFound` - no object exists under `key`
    fn download(&self, key: &str, out_path: &Path) -> Result<PathBuf>;

    /// Upload the file at `path` under `key`, optionally marking it public.
    ///
    /// Returns the key the object was stored under.
    ///
    /// # Errors
    /// * `NotFound` - `path` does not exist locally
    fn upload(&self, path: &Path, key: &str, public: bool) -> Result<String>;
}

/// Filesystem-backed object store: a root directory acts as the bucket.
#[derive(Debug, Clone)]
pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    /// Open a store rooted at `root`.
    ///
    /// # Errors
    /// * `NotADirectory` - `root` is not a directory
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let resolved = std::fs::canonicalize(root).map_err(|_| SeqprepError::NotADirectory {
            path: root.to_path_buf(),
        })?;
        if !resolved.is_dir() {
            return Err(SeqprepError::NotADirectory {
                path: root.to_path_buf(),
            });
        }
        Ok(Self { root: resolved })
    }

    /// The bucket root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ObjectStore for FsObjectStore {
    fn download(&self, key: &str, out_path: &Path) -> Result<PathBuf> {
        if out_path.exists() {
            log::info!(
                "Object '{key}' is not going to be downloaded because '{}' already exists",
                out_path.display()
            );
            return Ok(out_path.to_path_buf());
        }

        let source = self.root.join(key);
        if !source.exists() {
            return Err(SeqprepError::ObjectNotFound {
                key: key.to_string(),
            });
        }

        std::fs::copy(&source, out_path).map_err(|e| {
            SeqprepError::file_error(
                format!("Failed to download '{key}' to '{}'", out_path.display()),
                e,
            )
        })?;
        log::debug!("Downloaded object '{key}' to '{}'", out_path.display());

        Ok(out_path.to_path_buf())
    }

    fn upload(&self, path: &Path, key: &str, public: bool) -> Result<String> {
        if !path.exists() {
            return Err(SeqprepError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let dest = self.root.join(key);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::copy(path, &dest).map_err(|e| {
            SeqprepError::file_error(format!("Failed to upload '{}' to '{key}'", path.display()), e)
        })?;

        if public {
            // Advisory only for the filesystem backend
            log::debug!("Marking uploaded object '{key}' public");
        }

        Ok(key.to_string())
    }
}
