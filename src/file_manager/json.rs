//! JSON accessor: load documents and write them back deterministically.
//!
//! Output is always pretty-printed with 4-space indentation and sorted keys
//! (serde_json's default object representation) so repeated runs produce
//! diff-stable files.

use crate::error::{Result, SeqprepError};
use crate::file_manager::ResolvedPath;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Accessor over a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: ResolvedPath,
}

impl JsonFile {
    /// Construct an accessor over an existing JSON file.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            path: ResolvedPath::resolve(path)?,
        })
    }

    /// The resolved absolute path of the file.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Parse and return the full document as a dynamic value tree.
    pub fn load(&self) -> Result<Value> {
        let content = std::fs::read_to_string(self.path())?;
        let value = serde_json::from_str(&content)?;
        Ok(value)
    }

    /// Serialize `value` to `out_path` with sorted keys and 4-space indents.
    ///
    /// Needs no existing source file. When `out_path` is an existing
    /// directory the document is written to `out_path/file.json`. Returns the
    /// path actually written.
    pub fn write_json(value: &Value, out_path: impl AsRef<Path>) -> Result<PathBuf> {
        let mut json_path = out_path.as_ref().to_path_buf();
        if json_path.is_dir() {
            json_path = json_path.join("file.json");
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut serializer)?;

        std::fs::write(&json_path, &buf).map_err(|e| {
            SeqprepError::file_error(
                format!("Failed to write JSON to '{}'", json_path.display()),
                e,
            )
        })?;

        Ok(json_path)
    }
}
