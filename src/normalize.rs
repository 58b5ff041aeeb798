//! Renumbering of a source FASTA into the sequential-id form fed to the
//! external tools.
//!
//! Record `i` of the source becomes `>i` followed by its sequence on a single
//! line. Its original identifier, description and length go into the
//! returned [`SequenceCatalog`] under the same index.

use std::{fs::File, path::Path};

use bio::io::fasta;
use tracing::{debug, info_span};

use crate::{
    catalog::{RecordInfo, SequenceCatalog},
    error::IndexError,
    progress::{Progress, ProgressTracker},
};

/// Renumbers `source` into `dest` and returns the per-record metadata.
///
/// `dest` is created or truncated.
///
/// # Example
///
/// ```rust,no_run
/// use mfeindex::normalize::normalize_fasta;
///
/// let catalog = normalize_fasta("genome.fa", "genome.fa.unifasta")?;
/// println!("{} records", catalog.len());
/// # Ok::<(), mfeindex::error::IndexError>(())
/// ```
pub fn normalize_fasta<P, Q>(source: P, dest: Q) -> Result<SequenceCatalog, IndexError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    normalize_fasta_with_progress(source, dest, |_| {})
}

/// Like [`normalize_fasta`], invoking `callback` after each record.
pub fn normalize_fasta_with_progress<P, Q, F>(
    source: P,
    dest: Q,
    mut callback: F,
) -> Result<SequenceCatalog, IndexError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: FnMut(Progress),
{
    let source = source.as_ref();
    let dest = dest.as_ref();
    let _span = info_span!("normalize_fasta", source = ?source).entered();

    let input = File::open(source).map_err(|source_err| IndexError::SequenceRead {
        source: source_err,
        path: source.to_path_buf(),
    })?;
    let write_err = |source| IndexError::NormalizedWrite {
        source,
        path: dest.to_path_buf(),
    };
    let output = File::create(dest).map_err(write_err)?;

    let reader = fasta::Reader::new(input);
    let mut writer = fasta::Writer::new(output);
    let mut catalog = SequenceCatalog::new();
    let mut tracker = ProgressTracker::new();

    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| IndexError::SequenceParse {
            details: e.to_string(),
            record: index,
            path: source.to_path_buf(),
        })?;

        let size = record.seq().len() as u64;
        catalog.push(RecordInfo::new(record.id(), record.desc(), size));
        writer
            .write(&index.to_string(), None, record.seq())
            .map_err(write_err)?;

        callback(tracker.record_sequence(size));
    }

    writer.flush().map_err(write_err)?;

    let totals = tracker.snapshot();
    debug!(
        records = totals.records_processed,
        bases = totals.bases_processed,
        "Renumbered source records"
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn normalize_str(content: &str) -> (SequenceCatalog, String) {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("in.fa");
        let dest = dir.path().join("in.fa.unifasta");
        fs::write(&source, content).unwrap();
        let catalog = normalize_fasta(&source, &dest).unwrap();
        (catalog, fs::read_to_string(&dest).unwrap())
    }

    #[test]
    fn renumbers_two_records() {
        let (catalog, fasta) = normalize_str(">seq1 desc one\nATCG\n>seq2 desc two\nGGTTA\n");
        assert_eq!(fasta, ">0\nATCG\n>1\nGGTTA\n");
        assert_eq!(catalog.get(0), Some(&RecordInfo::new("seq1", Some("desc one"), 4)));
        assert_eq!(catalog.get(1), Some(&RecordInfo::new("seq2", Some("desc two"), 5)));
    }

    #[test]
    fn joins_wrapped_sequence_lines() {
        let (catalog, fasta) = normalize_str(">chr1\nACGT\nACGT\nAC\n");
        assert_eq!(fasta, ">0\nACGTACGTAC\n");
        assert_eq!(catalog.get(0).unwrap().size, 10);
        assert_eq!(catalog.get(0).unwrap().desc, "");
    }

    #[test]
    fn empty_source_gives_empty_catalog() {
        let (catalog, fasta) = normalize_str("");
        assert!(catalog.is_empty());
        assert!(fasta.is_empty());
    }

    #[test]
    fn reports_progress_per_record() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("in.fa");
        fs::write(&source, ">a\nAC\n>b\nGTA\n>c\nT\n").unwrap();

        let mut seen = Vec::new();
        normalize_fasta_with_progress(&source, dir.path().join("out"), |p| seen.push(p)).unwrap();

        assert_eq!(seen.len(), 3);
        assert_eq!(seen[2].records_processed, 3);
        assert_eq!(seen[2].bases_processed, 6);
    }

    #[test]
    fn missing_source_is_read_error() {
        let dir = TempDir::new().unwrap();
        let result = normalize_fasta(dir.path().join("nope.fa"), dir.path().join("out"));
        assert!(matches!(result, Err(IndexError::SequenceRead { .. })));
    }

    #[test]
    fn malformed_source_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("bad.fa");
        fs::write(&source, "ACGT without header\n").unwrap();
        let result = normalize_fasta(&source, dir.path().join("out"));
        assert!(matches!(
            result,
            Err(IndexError::SequenceParse { record: 0, .. })
        ));
    }
}
