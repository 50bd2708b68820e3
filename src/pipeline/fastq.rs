//! FASTQ to FASTA conversion.

use crate::error::{Result, SeqprepError};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Convert a 4-line-per-record FASTQ file into FASTA.
///
/// For every record the header (minus its leading `@`) and the sequence line
/// are written as `>header\nsequence\n`; the separator and quality lines are
/// discarded. Reading stops at the first empty header line. Returns the
/// output path.
pub fn fastq_to_fasta(fastq_path: &Path, out_path: &Path) -> Result<PathBuf> {
    let reader = BufReader::new(File::open(fastq_path).map_err(|e| {
        SeqprepError::file_error(
            format!("Failed to open FASTQ '{}'", fastq_path.display()),
            e,
        )
    })?);
    let mut writer = BufWriter::new(File::create(out_path).map_err(|e| {
        SeqprepError::file_error(format!("Failed to create '{}'", out_path.display()), e)
    })?);

    let mut lines = reader.lines();
    loop {
        let header = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let sequence = lines.next().transpose()?.unwrap_or_default();
        let _separator = lines.next().transpose()?;
        let _quality = lines.next().transpose()?;

        let header = header.trim();
        if header.is_empty() {
            break;
        }

        // Drop the FASTQ '@' marker, whatever the first character is
        let mut chars = header.chars();
        chars.next();
        writeln!(writer, ">{}", chars.as_str())?;
        writeln!(writer, "{}", sequence.trim())?;
    }
    writer.flush()?;

    Ok(out_path.to_path_buf())
}

/// The default FASTA output path for a FASTQ input: same name, `.fasta`.
pub fn default_fasta_path(fastq_path: &Path) -> PathBuf {
    fastq_path.with_extension("fasta")
}
