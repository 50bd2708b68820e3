//! # seqprep - Amplicon Pipeline File Utilities
//!
//! Command-line utilities for an amplicon-sequencing pipeline, built around a
//! shared family of typed file accessors: FASTQ to FASTA conversion, primer
//! trimming, sequence-length standardization, Deblur input preparation and
//! object-store key handling.
//!
//! ## Architecture
//!
//! The library is organized into focused modules:
//!
//! - [`error`] - Centralized error types and handling
//! - [`file_manager`] - Typed file accessors (base/FASTA/JSON/TSV) and
//!   tar+bzip2 archive handling
//! - [`pipeline`] - The per-file transformations the CLI exposes
//! - [`storage`] - The object-store collaborator seam and its filesystem
//!   backend
//!
//! Everything is synchronous and single-threaded; files are read fully into
//! memory, which is fine for the small per-sample files this pipeline
//! handles.

// Core modules
pub mod error;
pub mod file_manager;
pub mod pipeline;
pub mod storage;

// Re-export commonly used types for convenience
pub use error::{Result, SeqprepError};

// Public API surface for external usage
pub use file_manager::{FastaFile, FileManager, JsonFile, TsvFile};
pub use storage::{FsObjectStore, ObjectStore};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
