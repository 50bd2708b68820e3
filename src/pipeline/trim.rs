//! Primer trimming: drop a fixed number of bases from each sequence end.

use crate::error::Result;
use crate::pipeline::{input_file_name, read_merged_fasta};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Bases removed from each end of every sequence.
pub const PRIMER_LEN: usize = 20;

/// Trim `PRIMER_LEN` bases off both ends of every sequence in `fasta_path`,
/// writing `trimmed_<name>` into `out_dir`. Returns the output path.
///
/// The trim is unconditional: sequences of 2x `PRIMER_LEN` bases or fewer
/// come out empty. Inherited pipeline behavior, deliberately not turned into
/// an error.
pub fn trim_primer(fasta_path: &Path, out_dir: &Path) -> Result<PathBuf> {
    let records = read_merged_fasta(fasta_path)?;
    let out_path = out_dir.join(format!("trimmed_{}", input_file_name(fasta_path)?));

    let mut writer = BufWriter::new(File::create(&out_path)?);
    for (header, sequence) in records {
        writeln!(writer, ">{header}")?;
        writeln!(writer, "{}", trim_ends(&sequence, PRIMER_LEN))?;
    }
    writer.flush()?;

    log::debug!("Trimmed primers into '{}'", out_path.display());
    Ok(out_path)
}

/// Remove `n` characters from each end, clamping to an empty result for
/// sequences shorter than `2n`.
fn trim_ends(sequence: &str, n: usize) -> String {
    let len = sequence.chars().count();
    let end = len.saturating_sub(n);
    if end <= n {
        return String::new();
    }
    sequence.chars().skip(n).take(end - n).collect()
}
