//! seqprep - Amplicon Pipeline File Utilities
//!
//! One binary with a subcommand per pipeline step.

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::path::{Path, PathBuf};

use seqprep::pipeline;
use seqprep::storage::{FsObjectStore, ObjectStore};

fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    let matches = cli().get_matches();
    match matches.subcommand() {
        Some(("fastq-to-fasta", sub)) => {
            let fastq = required_path(sub, "fastq");
            let out = sub
                .get_one::<String>("out")
                .map(PathBuf::from)
                .unwrap_or_else(|| pipeline::fastq::default_fasta_path(&fastq));
            let written = pipeline::fastq_to_fasta(&fastq, &out)?;
            println!("{}", written.display());
        }
        Some(("trim-primer", sub)) => {
            let fasta = required_path(sub, "fasta");
            let written = pipeline::trim_primer(&fasta, &out_dir(sub))?;
            println!("{}", written.display());
        }
        Some(("standardize-size", sub)) => {
            let fasta = required_path(sub, "fasta");
            let written = pipeline::standardize_size(&fasta, &out_dir(sub))?;
            println!("{}", written.display());
        }
        Some(("deblur-input", sub)) => {
            let fasta = required_path(sub, "fasta");
            let cutoff = sub
                .get_one::<String>("cutoff")
                .expect("cutoff argument is required");
            let written = pipeline::create_deblur_input(&fasta, cutoff, &out_dir(sub))?;
            println!("{}", written.display());
        }
        Some(("blobs-file", sub)) => {
            let mapping = required_path(sub, "mapping");
            let year = sub
                .get_one::<String>("year")
                .expect("year argument is required");
            let seq_id = sub
                .get_one::<String>("seq-id")
                .expect("seq-id argument is required");
            let out = sub
                .get_one::<String>("out")
                .map(PathBuf::from)
                .unwrap_or_else(pipeline::blobs::default_blobs_path);
            let basenames = pipeline::create_blobs_file(&mapping, year, seq_id, &out)?;
            println!("{basenames:?}");
        }
        Some(("fetch", sub)) => {
            let key = sub.get_one::<String>("key").expect("key argument is required");
            let store = object_store(sub)?;
            let out = sub
                .get_one::<String>("out")
                .map(PathBuf::from)
                .unwrap_or_else(|| {
                    PathBuf::from(
                        Path::new(key)
                            .file_name()
                            .map(|name| name.to_os_string())
                            .unwrap_or_default(),
                    )
                });
            let downloaded = store.download(key, &out)?;
            println!("downloaded {}", downloaded.display());
        }
        Some(("upload", sub)) => {
            let file = required_path(sub, "file");
            let key = sub.get_one::<String>("key").expect("key argument is required");
            let store = object_store(sub)?;
            let stored = store.upload(&file, key, sub.get_flag("public"))?;
            println!("uploaded {stored}");
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

fn required_path(matches: &clap::ArgMatches, name: &str) -> PathBuf {
    PathBuf::from(
        matches
            .get_one::<String>(name)
            .expect("required argument is enforced by clap"),
    )
}

fn out_dir(matches: &clap::ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("out-dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn object_store(matches: &clap::ArgMatches) -> Result<FsObjectStore> {
    let root = matches
        .get_one::<String>("store")
        .expect("store argument is required");
    Ok(FsObjectStore::new(root)?)
}

fn cli() -> Command {
    let out_dir_arg = Arg::new("out-dir")
        .long("out-dir")
        .help("Directory for the output file (defaults to the current directory)");
    let store_arg = Arg::new("store")
        .long("store")
        .required(true)
        .help("Root directory of the filesystem object store");

    Command::new("seqprep")
        .version(seqprep::VERSION)
        .about("Amplicon pipeline file utilities")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("fastq-to-fasta")
                .about("Convert a 4-line-per-record FASTQ file to FASTA")
                .arg(Arg::new("fastq").required(true).index(1).help("FASTQ input"))
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .help("Output path (defaults to the input with a .fasta extension)"),
                ),
        )
        .subcommand(
            Command::new("trim-primer")
                .about("Remove 20 bases from each end of every sequence")
                .arg(Arg::new("fasta").required(true).index(1).help("FASTA input"))
                .arg(out_dir_arg.clone()),
        )
        .subcommand(
            Command::new("standardize-size")
                .about("Truncate every sequence to the length of the shortest")
                .arg(Arg::new("fasta").required(true).index(1).help("FASTA input"))
                .arg(out_dir_arg.clone()),
        )
        .subcommand(
            Command::new("deblur-input")
                .about("Rewrite every header to the oligotype_{cutoff} convention")
                .arg(Arg::new("fasta").required(true).index(1).help("FASTA input"))
                .arg(
                    Arg::new("cutoff")
                        .required(true)
                        .index(2)
                        .help("Cutoff label used in the rewritten headers"),
                )
                .arg(out_dir_arg),
        )
        .subcommand(
            Command::new("blobs-file")
                .about("Emit object-store keys for every read path in a library mapping")
                .arg(
                    Arg::new("mapping")
                        .required(true)
                        .index(1)
                        .help("JSON library-mapping file"),
                )
                .arg(Arg::new("year").required(true).index(2).help("Run year"))
                .arg(
                    Arg::new("seq-id")
                        .required(true)
                        .index(3)
                        .help("Sequencing run identifier"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .help("Output path (defaults to fastq_blobs.txt)"),
                ),
        )
        .subcommand(
            Command::new("fetch")
                .about("Download an object by key; no-op if the local copy exists")
                .arg(Arg::new("key").required(true).index(1).help("Object key"))
                .arg(store_arg.clone())
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .help("Local output path (defaults to the key's basename)"),
                ),
        )
        .subcommand(
            Command::new("upload")
                .about("Upload a local file to an object key")
                .arg(Arg::new("file").required(true).index(1).help("Local file"))
                .arg(Arg::new("key").required(true).index(2).help("Object key"))
                .arg(store_arg)
                .arg(
                    Arg::new("public")
                        .long("public")
                        .action(ArgAction::SetTrue)
                        .help("Mark the uploaded object public"),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::cli;

    #[test]
    fn test_cli_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn test_version_constant() {
        assert!(!seqprep::VERSION.is_empty());
    }
}
