//! Sequence-length standardization: truncate every sequence to the shortest.

use crate::error::{Result, SeqprepError};
use crate::pipeline::{input_file_name, read_merged_fasta};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Truncate every sequence in `fasta_path` to the length of the shortest
/// one, writing `std_<name>` into `out_dir`. Returns the output path.
///
/// # Errors
/// * `EmptyFasta` - the input contains no records (there is no minimum)
pub fn standardize_size(fasta_path: &Path, out_dir: &Path) -> Result<PathBuf> {
    let records = read_merged_fasta(fasta_path)?;

    let min_len = records
        .iter()
        .map(|(_, sequence)| sequence.chars().count())
        .min()
        .ok_or_else(|| SeqprepError::EmptyFasta {
            path: fasta_path.to_path_buf(),
        })?;

    let out_path = out_dir.join(format!("std_{}", input_file_name(fasta_path)?));
    let mut writer = BufWriter::new(File::create(&out_path)?);
    for (header, sequence) in records {
        let standardized: String = sequence.chars().take(min_len).collect();
        writeln!(writer, ">{header}")?;
        writeln!(writer, "{standardized}")?;
    }
    writer.flush()?;

    log::debug!(
        "Standardized sequences to {min_len} bases in '{}'",
        out_path.display()
    );
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_truncates_to_shortest_sequence() {
        let workdir = TempDir::new().unwrap();
        let fasta = workdir.path().join("sample.fasta");
        fs::write(&fasta, ">s1\nACGTACGT\n>s2\nTTTT\n>s3\nGGGGGG\n").unwrap();

        let out_path = standardize_size(&fasta, workdir.path()).unwrap();
        assert_eq!(out_path, workdir.path().join("std_sample.fasta"));

        let output = fs::read_to_string(out_path).unwrap();
        assert_eq!(output, ">s1\nACGT\n>s2\nTTTT\n>s3\nGGGG\n");
    }

    #[test]
    fn test_empty_fasta_is_a_named_error() {
        let workdir = TempDir::new().unwrap();
        let fasta = workdir.path().join("empty.fasta");
        fs::write(&fasta, "").unwrap();

        match standardize_size(&fasta, workdir.path()).unwrap_err() {
            SeqprepError::EmptyFasta { path } => assert_eq!(path, fasta),
            other => panic!("Expected EmptyFasta, got {other:?}"),
        }
    }

    #[test]
    fn test_record_with_empty_sequence_empties_all() {
        let workdir = TempDir::new().unwrap();
        let fasta = workdir.path().join("sample.fasta");
        fs::write(&fasta, ">s1\nACGT\n>bare\n").unwrap();

        let out_path = standardize_size(&fasta, workdir.path()).unwrap();
        let output = fs::read_to_string(out_path).unwrap();
        assert_eq!(output, ">s1\n\n>bare\n\n");
    }
}
