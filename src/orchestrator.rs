//! Building index bundles.
//!
//! [`ensure_index`] makes sure a complete bundle (JSON metadata, 2-bit file
//! and k-mer sqlite database) exists next to a FASTA file, building it when
//! it is missing or when a rebuild is forced. [`Indexer`] exposes the same
//! operation as a builder with a configurable toolchain and runner.
//!
//! The pipeline is sequential and blocking. Two invocations for the same
//! source path must not run concurrently: they share the temporary file and
//! every sidecar path. Invocations for different sources are independent.
//!
//! # Example
//!
//! ```rust,no_run
//! use mfeindex::orchestrator::{ensure_index, IndexOutcome};
//!
//! match ensure_index("genome.fa", 9, false)? {
//!     IndexOutcome::AlreadyIndexed => println!("nothing to do"),
//!     IndexOutcome::Built(summary) => println!("indexed {} records", summary.records),
//! }
//! # Ok::<(), mfeindex::error::IndexError>(())
//! ```

use std::{fs, path::Path};

use tracing::{debug, info, info_span, warn};

use crate::{
    bundle::IndexBundle,
    catalog::SequenceCatalog,
    error::{IndexError, KmerLengthError},
    kmer::KmerLength,
    normalize::normalize_fasta_with_progress,
    progress::Progress,
    runner::{CommandRunner, SystemRunner},
    tools::Toolchain,
};

/// What an [`Indexer::ensure`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOutcome {
    /// A complete bundle was present; nothing was touched.
    AlreadyIndexed,
    /// The bundle was (re)built.
    Built(IndexSummary),
}

impl IndexOutcome {
    #[must_use]
    pub const fn was_built(&self) -> bool {
        matches!(self, Self::Built(_))
    }
}

/// Totals of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub records: usize,
    pub bases: u64,
    pub bundle: IndexBundle,
}

/// Ensures an index bundle exists for `source` using the default toolchain.
///
/// # Errors
///
/// Returns [`IndexError::InvalidKmerLength`] for `k == 0`,
/// [`IndexError::SourceNotFound`] when `source` does not exist, and the
/// first failing step's error otherwise.
pub fn ensure_index<P: AsRef<Path>>(
    source: P,
    k: usize,
    force_reindex: bool,
) -> Result<IndexOutcome, IndexError> {
    Indexer::new().k(k)?.force(force_reindex).ensure(source)
}

/// A builder for index bundle construction.
///
/// ```rust,no_run
/// use mfeindex::orchestrator::Indexer;
/// use mfeindex::tools::Toolchain;
///
/// let tools = Toolchain {
///     converter: "/opt/ucsc/faToTwoBit".into(),
///     ..Toolchain::default()
/// };
/// let outcome = Indexer::new()
///     .k(11)?
///     .force(true)
///     .toolchain(tools)
///     .ensure("genome.fa")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Indexer<R = SystemRunner> {
    k: KmerLength,
    force: bool,
    toolchain: Toolchain,
    runner: R,
}

impl Default for Indexer<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl Indexer<SystemRunner> {
    /// Creates an indexer with `k = 9`, no forced rebuild, the default
    /// toolchain and real child processes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_runner(SystemRunner)
    }
}

impl<R: CommandRunner> Indexer<R> {
    /// Creates an indexer with default settings that runs tools through `runner`.
    pub fn with_runner(runner: R) -> Self {
        Self {
            k: KmerLength::default(),
            force: false,
            toolchain: Toolchain::default(),
            runner,
        }
    }

    /// Sets the k-mer length passed to the indexer.
    pub fn k(mut self, k: usize) -> Result<Self, KmerLengthError> {
        self.k = KmerLength::new(k)?;
        Ok(self)
    }

    /// Sets a pre-validated k-mer length.
    #[must_use]
    pub const fn k_validated(mut self, k: KmerLength) -> Self {
        self.k = k;
        self
    }

    /// Rebuild even when a complete bundle already exists.
    #[must_use]
    pub const fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    #[must_use]
    pub fn toolchain(mut self, toolchain: Toolchain) -> Self {
        self.toolchain = toolchain;
        self
    }

    #[must_use]
    pub const fn get_k(&self) -> KmerLength {
        self.k
    }

    #[must_use]
    pub const fn get_force(&self) -> bool {
        self.force
    }

    #[must_use]
    pub const fn get_toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    /// Ensures the bundle for `source` exists.
    pub fn ensure<P: AsRef<Path>>(&self, source: P) -> Result<IndexOutcome, IndexError> {
        self.ensure_with_progress(source, |_| {})
    }

    /// Like [`ensure`](Self::ensure), invoking `callback` after each
    /// record is renumbered.
    pub fn ensure_with_progress<P, F>(
        &self,
        source: P,
        callback: F,
    ) -> Result<IndexOutcome, IndexError>
    where
        P: AsRef<Path>,
        F: FnMut(Progress),
    {
        let bundle = IndexBundle::new(source);

        if !self.force && bundle.is_indexed() {
            debug!(source = ?bundle.source(), "Bundle already complete");
            return Ok(IndexOutcome::AlreadyIndexed);
        }

        if !bundle.source().exists() {
            return Err(IndexError::SourceNotFound {
                path: bundle.source().to_path_buf(),
            });
        }

        let _span =
            info_span!("ensure_index", source = ?bundle.source(), k = self.k.get()).entered();
        info!("Begin index database: {}", bundle.source().display());

        match bundle.exceeds_split_cutoff() {
            Ok(true) => info!(
                big_db_dir = ?bundle.big_db_dir(),
                "Source exceeds the big database cutoff; building a single database"
            ),
            Ok(false) => {}
            Err(err) => debug!(error = %err, "Could not read source size"),
        }

        // A source that fails to parse leaves any existing sidecars untouched.
        let normalized = bundle.normalized_path();
        let catalog = match normalize_fasta_with_progress(bundle.source(), &normalized, callback) {
            Ok(catalog) => catalog,
            Err(err) => {
                remove_normalized(&bundle);
                return Err(err);
            }
        };

        let result = self.publish(&bundle, &catalog);
        remove_normalized(&bundle);

        match result {
            Ok(()) => {
                let summary = IndexSummary {
                    records: catalog.len(),
                    bases: catalog.total_bases(),
                    bundle,
                };
                info!(
                    records = summary.records,
                    bases = summary.bases,
                    "Done index database: {}",
                    summary.bundle.source().display()
                );
                Ok(IndexOutcome::Built(summary))
            }
            Err(err) => {
                for path in bundle.remove_sidecars() {
                    warn!("Could not remove partial output {}", path.display());
                }
                Err(err)
            }
        }
    }

    /// Writes the JSON sidecar and runs both tools on the renumbered FASTA.
    fn publish(&self, bundle: &IndexBundle, catalog: &SequenceCatalog) -> Result<(), IndexError> {
        let normalized = bundle.normalized_path();

        catalog.write_json(bundle.json_path())?;
        self.toolchain
            .convert_to_2bit(&self.runner, &normalized, &bundle.twobit_path())?;
        self.toolchain
            .build_kmer_index(&self.runner, &normalized, self.k, &bundle.sqlite_path())
    }
}

/// Best-effort removal of the temporary renumbered FASTA.
fn remove_normalized(bundle: &IndexBundle) {
    let path = bundle.normalized_path();
    if fs::remove_file(&path).is_err() && path.exists() {
        warn!("You can delete the file {} by hand.", path.display());
    }
}
