//! Wildcard resolution of per-sample files inside a working directory.
//!
//! Pipeline steps name their outputs `{prefix}{basename}{suffix}{extension}`
//! with `*` wildcards around the sample basename. Each basename must resolve
//! to exactly one file; zero or multiple hits are reported per basename so
//! the caller knows exactly which sample is missing or duplicated.

use crate::error::{Result, SeqprepError};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Wildcard defaults mirroring the common pipeline layout: any prefix, any
/// suffix, `.tsv` extension.
pub const DEFAULT_PREFIX: &str = "*";
pub const DEFAULT_SUFFIX: &str = "*";
pub const DEFAULT_EXTENSION: &str = ".tsv";

/// Resolve one file per basename under `workdir`.
///
/// For each basename the pattern `{prefix}{basename}{suffix}{extension}` is
/// matched against the directory's entries (`*` matches any run of
/// characters; dotfiles are ignored unless the pattern starts with a dot).
///
/// Returns the resolved absolute paths in the same order as `basenames`.
///
/// # Errors
/// * `NotADirectory` - `workdir` is not a directory
/// * `AmbiguousMatch` - a pattern matched more than one file
/// * `NoMatch` - a pattern matched no file
pub fn get_files_paths(
    workdir: impl AsRef<Path>,
    basenames: &[String],
    prefix: &str,
    suffix: &str,
    extension: &str,
) -> Result<Vec<PathBuf>> {
    let workdir = workdir.as_ref();
    let work_path = std::fs::canonicalize(workdir).map_err(|_| SeqprepError::NotADirectory {
        path: workdir.to_path_buf(),
    })?;
    if !work_path.is_dir() {
        return Err(SeqprepError::NotADirectory {
            path: workdir.to_path_buf(),
        });
    }

    let mut entries = std::fs::read_dir(&work_path)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());
    let file_names: Vec<String> = entries
        .iter()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();

    let mut formatted_paths = Vec::with_capacity(basenames.len());
    for basename in basenames {
        let file_pattern = format!("{prefix}{basename}{suffix}{extension}");
        let matcher = wildcard_to_regex(&file_pattern);

        let mut matches: Vec<PathBuf> = file_names
            .iter()
            .filter(|name| {
                if name.starts_with('.') && !file_pattern.starts_with('.') {
                    return false;
                }
                matcher.is_match(name)
            })
            .map(|name| work_path.join(name))
            .collect();

        let pattern_display = work_path.join(&file_pattern).display().to_string();
        if matches.len() > 1 {
            return Err(SeqprepError::AmbiguousMatch {
                pattern: pattern_display,
                matches,
            });
        }
        match matches.pop() {
            Some(path) => formatted_paths.push(path),
            None => {
                return Err(SeqprepError::NoMatch {
                    pattern: pattern_display,
                })
            }
        }
    }

    Ok(formatted_paths)
}

/// [`get_files_paths`] with the default `*` wildcards and `.tsv` extension.
pub fn get_tsv_paths(workdir: impl AsRef<Path>, basenames: &[String]) -> Result<Vec<PathBuf>> {
    get_files_paths(
        workdir,
        basenames,
        DEFAULT_PREFIX,
        DEFAULT_SUFFIX,
        DEFAULT_EXTENSION,
    )
}

/// Translate a `*`-wildcard pattern into an anchored regex over filenames.
fn wildcard_to_regex(pattern: &str) -> Regex {
    let mut regex_str = String::with_capacity(pattern.len() + 8);
    regex_str.push('^');
    for (i, part) in pattern.split('*').enumerate() {
        if i > 0 {
            regex_str.push_str(".*");
        }
        regex_str.push_str(&regex::escape(part));
    }
    regex_str.push('$');

    // Every literal piece went through regex::escape, so the assembled
    // pattern is always valid.
    Regex::new(&regex_str).expect("escaped wildcard pattern")
}
