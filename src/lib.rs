//! # mfeindex
//!
//! Builds the index bundle that primer-search tools read next to a FASTA
//! file:
//!
//! | Sidecar | Content | Produced by |
//! |---|---|---|
//! | `<fasta>.json` | per-record metadata keyed by sequential id | [`catalog`] |
//! | `<fasta>.2bit` | 2-bit encoding of the renumbered sequences | external converter |
//! | `<fasta>.sqlite3.db` | k-mer index database | external indexer |
//!
//! Records are renumbered `0..n` into a temporary `<fasta>.unifasta` which is
//! fed to both external tools and removed afterwards.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mfeindex::orchestrator::ensure_index;
//!
//! // k = 9, do not rebuild an existing bundle
//! ensure_index("genome.fa", 9, false)?;
//! # Ok::<(), mfeindex::error::IndexError>(())
//! ```
//!
//! The encoding tables the indexer relies on are in [`tables`].

pub mod bundle;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod kmer;
pub mod normalize;
pub mod orchestrator;
pub mod progress;
pub mod runner;
pub mod tables;
pub mod tools;

pub use error::IndexError;
pub use orchestrator::{ensure_index, IndexOutcome, Indexer};
