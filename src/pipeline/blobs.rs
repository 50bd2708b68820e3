//! Object-store key list generation from a sequencing-library mapping file.

use crate::error::{Result, SeqprepError};
use crate::file_manager::JsonFile;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Collect every non-empty `rd1_path`/`rd2_path` from the mapping file's
/// `libraries` object and write one object-store key per line to `out_path`,
/// as `fq/{year}/{seq_id}/{basename}`.
///
/// Libraries are visited in sorted name order (deterministic output); within
/// a library, `rd1_path` comes before `rd2_path`. Returns the basenames in
/// written order.
pub fn create_blobs_file(
    mapping_path: &Path,
    year: &str,
    seq_id: &str,
    out_path: &Path,
) -> Result<Vec<String>> {
    let document = JsonFile::new(mapping_path)?.load()?;
    let libraries = document
        .get("libraries")
        .and_then(Value::as_object)
        .ok_or_else(|| {
            SeqprepError::json(format!(
                "mapping file '{}' has no top-level 'libraries' object",
                mapping_path.display()
            ))
        })?;

    let mut blob_paths = Vec::new();
    for lib_data in libraries.values() {
        for read_key in ["rd1_path", "rd2_path"] {
            if let Some(path) = lib_data.get(read_key).and_then(Value::as_str) {
                if !path.is_empty() {
                    blob_paths.push(path.to_string());
                }
            }
        }
    }

    let mut writer = BufWriter::new(File::create(out_path).map_err(|e| {
        SeqprepError::file_error(format!("Failed to create '{}'", out_path.display()), e)
    })?);

    let mut basenames = Vec::with_capacity(blob_paths.len());
    for path in &blob_paths {
        let basename = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        writeln!(writer, "fq/{year}/{seq_id}/{basename}")?;
        basenames.push(basename);
    }
    writer.flush()?;

    log::debug!(
        "Wrote {} blob keys to '{}'",
        basenames.len(),
        out_path.display()
    );
    Ok(basenames)
}

/// Default output filename for the key list.
pub fn default_blobs_path() -> PathBuf {
    PathBuf::from("fastq_blobs.txt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_mapping(dir: &Path, content: &str) -> PathBuf {
        let mapping = dir.join("mapping.json");
        fs::write(&mapping, content).unwrap();
        mapping
    }

    #[test]
    fn test_collects_both_reads_per_library() {
        let workdir = TempDir::new().unwrap();
        let mapping = write_mapping(
            workdir.path(),
            r#"{"libraries": {
                "L1": {"rd1_path": "runs/a_R1.fastq", "rd2_path": "runs/a_R2.fastq"},
                "L2": {"rd1_path": "runs/b_R1.fastq", "rd2_path": ""}
            }}"#,
        );

        let out = workdir.path().join("fastq_blobs.txt");
        let basenames = create_blobs_file(&mapping, "2023", "SEQ01", &out).unwrap();

        assert_eq!(basenames, vec!["a_R1.fastq", "a_R2.fastq", "b_R1.fastq"]);
        assert_eq!(
            fs::read_to_string(out).unwrap(),
            "fq/2023/SEQ01/a_R1.fastq\nfq/2023/SEQ01/a_R2.fastq\nfq/2023/SEQ01/b_R1.fastq\n"
        );
    }

    #[test]
    fn test_null_and_missing_read_paths_are_skipped() {
        let workdir = TempDir::new().unwrap();
        let mapping = write_mapping(
            workdir.path(),
            r#"{"libraries": {"L1": {"rd1_path": null}, "L2": {"rd2_path": "x/y_R2.fastq"}}}"#,
        );

        let out = workdir.path().join("blobs.txt");
        let basenames = create_blobs_file(&mapping, "2023", "SEQ01", &out).unwrap();
        assert_eq!(basenames, vec!["y_R2.fastq"]);
    }

    #[test]
    fn test_missing_libraries_object_is_an_error() {
        let workdir = TempDir::new().unwrap();
        let mapping = write_mapping(workdir.path(), r#"{"samples": {}}"#);

        let out = workdir.path().join("blobs.txt");
        match create_blobs_file(&mapping, "2023", "SEQ01", &out).unwrap_err() {
            SeqprepError::Json { message } => assert!(message.contains("libraries")),
            other => panic!("Expected Json error, got {other:?}"),
        }
    }
}
