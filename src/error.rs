//! Error types for mfeindex.
//!
//! This module provides exhaustive, strongly-typed errors for every step of
//! building an index bundle, so callers can decide whether a failure is
//! worth retrying, reporting, or terminating on.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or reading an index bundle.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The source FASTA file does not exist.
    #[error("source file '{path}' does not exist")]
    SourceNotFound { path: PathBuf },

    /// Failed to open or read the source FASTA file.
    #[error("failed to read sequence file '{path}': {source}")]
    SequenceRead {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to parse a FASTA record.
    #[error("failed to parse record {record} of '{path}': {details}")]
    SequenceParse {
        details: String,
        record: usize,
        path: PathBuf,
    },

    /// Failed to write the renumbered FASTA file.
    #[error("failed to write normalized FASTA '{path}': {source}")]
    NormalizedWrite {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to write the metadata sidecar.
    #[error("failed to write metadata file '{path}': {source}")]
    MetadataWrite {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to read the metadata sidecar.
    #[error("failed to read metadata file '{path}': {source}")]
    MetadataRead {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// The metadata sidecar is readable JSON but not a valid catalog.
    #[error("invalid metadata file '{path}': {details}")]
    InvalidMetadata { details: String, path: PathBuf },

    /// Failed to serialize or deserialize JSON.
    #[error("failed to process JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    /// K-mer length is not positive.
    #[error("invalid k-mer length {k}: must be at least 1")]
    InvalidKmerLength { k: usize },

    /// An external tool could not be started.
    #[error("failed to launch {tool} ('{program}'): {source}")]
    ToolSpawn {
        #[source]
        source: std::io::Error,
        tool: &'static str,
        program: PathBuf,
    },

    /// An external tool ran but reported failure.
    #[error("{tool} failed ({}): {stderr}", describe_code(*.code))]
    ToolFailed {
        tool: &'static str,
        code: Option<i32>,
        stderr: String,
    },
}

fn describe_code(code: Option<i32>) -> String {
    code.map_or_else(
        || "terminated by signal".to_string(),
        |c| format!("exit code {c}"),
    )
}

/// Error for invalid k-mer length.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("k-mer length {k} is invalid: must be at least 1")]
pub struct KmerLengthError {
    /// The invalid k value that was provided.
    pub k: usize,
}

/// Error raised when expanding a degenerate sequence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DegenerateExpansionError {
    /// The sequence contains a byte that is not an IUPAC nucleotide code.
    #[error("invalid IUPAC code '{}' at position {position}", char::from(*.code))]
    InvalidCode { code: u8, position: usize },

    /// The number of concrete sequences would exceed the caller's limit.
    #[error("degenerate sequence expands to more than {limit} sequences")]
    TooManyVariants { limit: usize },
}

impl From<serde_json::Error> for IndexError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}

impl From<KmerLengthError> for IndexError {
    fn from(err: KmerLengthError) -> Self {
        Self::InvalidKmerLength { k: err.k }
    }
}

impl IndexError {
    /// Returns `true` if the error means there was nothing to index.
    #[must_use]
    pub const fn is_source_missing(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. })
    }
}
