//! Progress tracking while the source FASTA is renumbered.
//!
//! # Example
//!
//! ```rust,no_run
//! use mfeindex::orchestrator::Indexer;
//!
//! Indexer::new().ensure_with_progress("genome.fa", |progress| {
//!     eprintln!(
//!         "Renumbered {} records ({} bases)",
//!         progress.records_processed,
//!         progress.bases_processed
//!     );
//! })?;
//! # Ok::<(), mfeindex::error::IndexError>(())
//! ```

/// Progress snapshot during normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Number of records written so far.
    pub records_processed: u64,
    /// Total number of bases written so far.
    pub bases_processed: u64,
}

/// Running totals for one normalization pass.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    current: Progress,
}

impl ProgressTracker {
    /// Create a new progress tracker with zero counts.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Progress {
                records_processed: 0,
                bases_processed: 0,
            },
        }
    }

    /// Record that a sequence of `bases` bases has been written.
    pub fn record_sequence(&mut self, bases: u64) -> Progress {
        self.current.records_processed += 1;
        self.current.bases_processed += bases;
        self.current
    }

    /// Get a snapshot of the current progress.
    #[must_use]
    pub const fn snapshot(&self) -> Progress {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_starts_at_zero() {
        let tracker = ProgressTracker::new();
        assert_eq!(tracker.snapshot(), Progress::default());
    }

    #[test]
    fn tracker_records_sequence() {
        let mut tracker = ProgressTracker::new();
        tracker.record_sequence(100);
        let progress = tracker.record_sequence(50);

        assert_eq!(progress.records_processed, 2);
        assert_eq!(progress.bases_processed, 150);
        assert_eq!(tracker.snapshot(), progress);
    }
}
