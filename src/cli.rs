//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

use crate::{
    kmer::{KmerLength, DEFAULT_K},
    tools::{DEFAULT_CONVERTER, DEFAULT_INDEXER},
};

/// Builds the primer-search index bundle (JSON metadata, 2-bit and k-mer
/// sqlite database) next to a FASTA file.
#[derive(Parser, Debug)]
#[command(name = "mfeindex")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// Path to a FASTA file
    pub path: PathBuf,

    /// K-mer length (positive)
    #[arg(short, long = "kmer", default_value_t = DEFAULT_K, value_parser = parse_k)]
    pub k: usize,

    /// Rebuild the index even if it already exists
    #[arg(short, long)]
    pub reindex: bool,

    /// FASTA to 2-bit converter executable
    #[arg(long, env = "MFEINDEX_CONVERTER", default_value = DEFAULT_CONVERTER)]
    pub converter: PathBuf,

    /// K-mer database indexer executable
    #[arg(long, env = "MFEINDEX_INDEXER", default_value = DEFAULT_INDEXER)]
    pub indexer: PathBuf,

    /// Only report whether the index exists (exit status 1 when it does not)
    #[arg(long)]
    pub status: bool,

    /// Suppress progress messages
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show debug output, including external tool diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_k(s: &str) -> Result<usize, String> {
    let k: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    KmerLength::new(k).map(KmerLength::get).map_err(|e| e.to_string())
}
