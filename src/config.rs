//! Run configuration assembled from command-line arguments.

use std::path::PathBuf;

use tracing::Level;

use crate::{
    cli::Args,
    error::KmerLengthError,
    kmer::KmerLength,
    orchestrator::Indexer,
    tools::Toolchain,
};

/// Validated settings for one `mfeindex` invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub k: KmerLength,
    pub path: PathBuf,
    pub force: bool,
    pub toolchain: Toolchain,
    pub status_only: bool,
    pub log_level: Level,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, KmerLengthError> {
        let log_level = if args.quiet {
            Level::WARN
        } else if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        };

        Ok(Self {
            k: KmerLength::new(args.k)?,
            path: args.path,
            force: args.reindex,
            toolchain: Toolchain {
                converter: args.converter,
                indexer: args.indexer,
            },
            status_only: args.status,
            log_level,
        })
    }

    /// An [`Indexer`] carrying these settings.
    #[must_use]
    pub fn indexer(&self) -> Indexer {
        Indexer::new()
            .k_validated(self.k)
            .force(self.force)
            .toolchain(self.toolchain.clone())
    }
}
