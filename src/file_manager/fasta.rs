//! FASTA accessor: parse a FASTA text file into (header, sequence) records.

use crate::error::Result;
use crate::file_manager::table::{FieldValue, Table};
use crate::file_manager::ResolvedPath;
use std::path::Path;

/// One FASTA record.
///
/// The header excludes the leading `>`; the sequence never contains newlines
/// (wrapped sequence lines are concatenated without separators).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: String,
    pub sequence: String,
}

/// Accessor over a FASTA-formatted text file.
#[derive(Debug, Clone)]
pub struct FastaFile {
    path: ResolvedPath,
}

impl FastaFile {
    /// Construct an accessor over an existing FASTA file.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            path: ResolvedPath::resolve(path)?,
        })
    }

    /// The resolved absolute path of the file.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Parse the file into records, in source order.
    ///
    /// The raw content is split on the `>` record marker; the fragment before
    /// the first marker is discarded. Within each fragment, everything up to
    /// the first newline is the header and the remainder (newlines stripped)
    /// is the sequence. Duplicate headers yield duplicate records, never a
    /// merge. A record with no sequence lines yields an empty sequence.
    ///
    /// The whole file is read into memory; fine for the small per-sample
    /// files this pipeline handles, a ceiling for anything larger.
    pub fn read(&self) -> Result<Vec<FastaRecord>> {
        let content = std::fs::read_to_string(self.path())?;

        let records = content
            .split('>')
            .skip(1)
            .map(|entry| {
                let (header, rest) = entry.split_once('\n').unwrap_or((entry, ""));
                FastaRecord {
                    header: header.to_string(),
                    sequence: rest.replace('\n', ""),
                }
            })
            .collect();

        Ok(records)
    }

    /// The parsed records as a two-column `(header, sequence)` text table.
    pub fn as_table(&self) -> Result<Table> {
        let rows = self
            .read()?
            .into_iter()
            .map(|record| {
                vec![
                    FieldValue::Text(record.header),
                    FieldValue::Text(record.sequence),
                ]
            })
            .collect();

        Ok(Table::new(
            vec!["header".to_string(), "sequence".to_string()],
            rows,
        ))
    }
}
