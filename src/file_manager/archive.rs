//! Archive creation and extraction for `.tar.bz2` files.
//!
//! The pipeline ships results around as bzip2-compressed POSIX tar archives:
//! a single file archived under its bare filename, or a whole directory
//! archived under a caller-chosen top-level name.

use crate::error::{Result, SeqprepError};
use bzip2::read::BzDecoder;
use bzip2::write::BzEncoder;
use bzip2::Compression;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Extract the bzip2-compressed tar archive at `archive_path` into `out_path`.
///
/// Entry paths are sanitized by the tar crate during unpacking; beyond that,
/// archive contents are trusted.
pub fn decompress_tar_bz2(archive_path: &Path, out_path: &Path) -> Result<()> {
    let file = File::open(archive_path).map_err(|e| {
        SeqprepError::file_error(
            format!("Failed to open archive '{}'", archive_path.display()),
            e,
        )
    })?;

    let mut archive = tar::Archive::new(BzDecoder::new(file));
    archive
        .unpack(out_path)
        .map_err(|e| SeqprepError::file_error("Failed to extract archive", e))?;

    Ok(())
}

/// Archive the single file at `file_path` into a sibling `<stem>.tar.bz2`.
///
/// Non-recursive: the archive holds one entry, named after the file's base
/// filename. Returns the path of the new archive.
pub fn compress_to_tar_bz2(file_path: &Path) -> Result<PathBuf> {
    let entry_name = file_path
        .file_name()
        .ok_or_else(|| SeqprepError::archive("path has no filename component"))?
        .to_owned();
    let out_path = file_path.with_extension("tar.bz2");

    let out_file = File::create(&out_path).map_err(|e| {
        SeqprepError::file_error(
            format!("Failed to create archive '{}'", out_path.display()),
            e,
        )
    })?;

    let mut builder = tar::Builder::new(BzEncoder::new(out_file, Compression::best()));
    builder.append_path_with_name(file_path, entry_name)?;
    builder.into_inner()?.finish()?;

    Ok(out_path)
}

/// Archive an entire directory (recursively) into `<dir>/<out_name>.tar.bz2`.
///
/// The archive's top-level entry name is `out_name`, or the directory's own
/// name when omitted. The archive is written inside the directory it covers,
/// so the walk skips the archive file itself.
///
/// # Errors
/// * `NotADirectory` - `dir` is not a directory
pub fn compress_dir_to_tar_bz2(dir: &Path, out_name: Option<&str>) -> Result<PathBuf> {
    let dir_path = std::fs::canonicalize(dir).map_err(|_| SeqprepError::NotADirectory {
        path: dir.to_path_buf(),
    })?;
    if !dir_path.is_dir() {
        return Err(SeqprepError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let entry_name = match out_name {
        Some(name) => name.to_string(),
        None => dir_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    let out_path = dir_path.join(&entry_name).with_extension("tar.bz2");

    let out_file = File::create(&out_path).map_err(|e| {
        SeqprepError::file_error(
            format!("Failed to create archive '{}'", out_path.display()),
            e,
        )
    })?;

    let mut builder = tar::Builder::new(BzEncoder::new(out_file, Compression::best()));
    append_dir_recursive(&mut builder, &dir_path, Path::new(&entry_name), &out_path)?;
    builder.into_inner()?.finish()?;

    Ok(out_path)
}

/// Append a directory tree under `arc_prefix`, skipping the archive being
/// written. Entries are added in filename order for reproducible archives.
fn append_dir_recursive(
    builder: &mut tar::Builder<BzEncoder<File>>,
    dir: &Path,
    arc_prefix: &Path,
    skip: &Path,
) -> Result<()> {
    builder.append_dir(arc_prefix, dir)?;

    let mut entries = std::fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        if path == skip {
            continue;
        }
        let arc_path = arc_prefix.join(entry.file_name());
        if path.is_dir() {
            append_dir_recursive(builder, &path, &arc_path, skip)?;
        } else {
            builder.append_path_with_name(&path, &arc_path)?;
        }
    }

    Ok(())
}
