//! Sidecar layout of an index bundle.
//!
//! A bundle lives next to its source FASTA file. Every artifact is named by
//! appending a fixed suffix to the full source path, so `genome.fa` yields
//! `genome.fa.json`, `genome.fa.2bit` and `genome.fa.sqlite3.db`.
//!
//! # Example
//!
//! ```rust
//! use mfeindex::bundle::IndexBundle;
//! use std::path::Path;
//!
//! let bundle = IndexBundle::new("db/genome.fa");
//! assert_eq!(bundle.json_path(), Path::new("db/genome.fa.json"));
//! assert_eq!(bundle.twobit_path(), Path::new("db/genome.fa.2bit"));
//! assert_eq!(bundle.sqlite_path(), Path::new("db/genome.fa.sqlite3.db"));
//! ```

use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

/// Per-record metadata (JSON).
pub const JSON_SUFFIX: &str = ".json";
/// K-mer index database built by the external indexer.
pub const SQLITE_SUFFIX: &str = ".sqlite3.db";
/// 2-bit encoding of the renumbered sequences.
pub const TWOBIT_SUFFIX: &str = ".2bit";
/// Reserved for an un-normalized plain FASTA copy; never written here.
pub const FASTA_SUFFIX: &str = ".fa";
/// Temporary renumbered FASTA, removed once the bundle is built.
pub const NORMALIZED_SUFFIX: &str = ".unifasta";
/// Directory suffix for databases large enough to be split.
pub const BIG_DB_SUFFIX: &str = "_BIG_MFE_DB";
/// Source size (bytes) from which a database is considered big.
pub const BIG_DB_SPLIT_CUTOFF: u64 = 1024 * 1024 * 1024;

/// Paths of every artifact belonging to one source FASTA file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexBundle {
    source: PathBuf,
}

impl IndexBundle {
    /// Creates the bundle layout for `source`. Nothing is touched on disk.
    pub fn new<P: AsRef<Path>>(source: P) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
        }
    }

    /// The source FASTA path.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn json_path(&self) -> PathBuf {
        self.with_suffix(JSON_SUFFIX)
    }

    #[must_use]
    pub fn sqlite_path(&self) -> PathBuf {
        self.with_suffix(SQLITE_SUFFIX)
    }

    #[must_use]
    pub fn twobit_path(&self) -> PathBuf {
        self.with_suffix(TWOBIT_SUFFIX)
    }

    #[must_use]
    pub fn fasta_path(&self) -> PathBuf {
        self.with_suffix(FASTA_SUFFIX)
    }

    /// Location of the temporary renumbered FASTA.
    #[must_use]
    pub fn normalized_path(&self) -> PathBuf {
        self.with_suffix(NORMALIZED_SUFFIX)
    }

    /// Directory that would hold the pieces of a split big database.
    #[must_use]
    pub fn big_db_dir(&self) -> PathBuf {
        self.with_suffix(BIG_DB_SUFFIX)
    }

    /// The three persistent sidecars: sqlite, JSON, 2-bit.
    #[must_use]
    pub fn sidecars(&self) -> [PathBuf; 3] {
        [self.sqlite_path(), self.json_path(), self.twobit_path()]
    }

    /// Returns `true` only when all three sidecars exist.
    ///
    /// A partial bundle counts as not indexed and will be rebuilt.
    #[must_use]
    pub fn is_indexed(&self) -> bool {
        self.sidecars().iter().all(|p| p.exists())
    }

    /// Returns `true` when the source file is at least [`BIG_DB_SPLIT_CUTOFF`] bytes.
    pub fn exceeds_split_cutoff(&self) -> io::Result<bool> {
        Ok(fs::metadata(&self.source)?.len() >= BIG_DB_SPLIT_CUTOFF)
    }

    /// Deletes whichever sidecars exist, returning the paths that could not be removed.
    pub fn remove_sidecars(&self) -> Vec<PathBuf> {
        self.sidecars()
            .into_iter()
            .filter(|p| p.exists() && fs::remove_file(p).is_err())
            .collect()
    }

    fn with_suffix(&self, suffix: &str) -> PathBuf {
        let mut s: OsString = self.source.clone().into_os_string();
        s.push(suffix);
        PathBuf::from(s)
    }
}
