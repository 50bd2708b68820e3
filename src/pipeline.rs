//! Pipeline transformations over FASTQ/FASTA files.
//!
//! Each operation is a linear, single-pass transformation producing a new
//! file next to (or named after) its input, matching the upstream pipeline's
//! conventions: `trimmed_`, `std_` and `deblur_` output prefixes.
//!
//! The transforms share a line-based FASTA parser that **merges duplicate
//! headers** (last sequence wins, first-seen position kept). This differs
//! from [`crate::file_manager::FastaFile::read`], which keeps duplicates;
//! the divergence is inherited pipeline behavior and is kept as-is.

pub mod blobs;
pub mod deblur;
pub mod fastq;
pub mod standardize;
pub mod trim;

pub use blobs::create_blobs_file;
pub use deblur::create_deblur_input;
pub use fastq::fastq_to_fasta;
pub use standardize::standardize_size;
pub use trim::trim_primer;

use crate::error::{Result, SeqprepError};
use std::collections::HashMap;
use std::path::Path;

/// Parse a FASTA file line by line, merging records with duplicate headers.
///
/// Lines are whitespace-trimmed; lines before the first `>` are dropped.
pub(crate) fn read_merged_fasta(path: &Path) -> Result<Vec<(String, String)>> {
    let content = std::fs::read_to_string(path)?;

    let mut records: Vec<(String, String)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut current: Option<(String, String)> = None;

    let mut flush = |record: Option<(String, String)>| {
        if let Some((header, sequence)) = record {
            match index.get(&header) {
                Some(&i) => records[i].1 = sequence,
                None => {
                    index.insert(header.clone(), records.len());
                    records.push((header, sequence));
                }
            }
        }
    };

    for line in content.lines() {
        let line = line.trim();
        if let Some(header) = line.strip_prefix('>') {
            flush(current.take());
            current = Some((header.to_string(), String::new()));
        } else if let Some((_, sequence)) = current.as_mut() {
            sequence.push_str(line);
        }
    }
    flush(current.take());

    Ok(records)
}

/// The base filename of a pipeline input, for deriving prefixed output names.
pub(crate) fn input_file_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            SeqprepError::invalid_path(format!(
                "'{}' has no filename component",
                path.display()
            ))
        })
}
