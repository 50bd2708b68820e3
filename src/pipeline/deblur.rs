//! Deblur input preparation: rewrite headers to the oligotype convention.

use crate::error::Result;
use crate::pipeline::{input_file_name, read_merged_fasta};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Rewrite every record of `fasta_path` under the header
/// `oligotype_{cutoff}`, writing `deblur_<name>` into `out_dir`.
/// Returns the output path.
///
/// Deblur derives its grouping from the header convention, so the original
/// per-read headers are intentionally discarded.
pub fn create_deblur_input(fasta_path: &Path, cutoff: &str, out_dir: &Path) -> Result<PathBuf> {
    let records = read_merged_fasta(fasta_path)?;
    let out_path = out_dir.join(format!("deblur_{}", input_file_name(fasta_path)?));

    let mut writer = BufWriter::new(File::create(&out_path)?);
    for (_, sequence) in records {
        writeln!(writer, ">oligotype_{cutoff}")?;
        writeln!(writer, "{sequence}")?;
    }
    writer.flush()?;

    log::debug!("Wrote Deblur input '{}'", out_path.display());
    Ok(out_path)
}
