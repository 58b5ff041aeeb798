//! The two external collaborators: the 2-bit converter and the k-mer indexer.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use tracing::info_span;

use crate::{error::IndexError, kmer::KmerLength, runner::CommandRunner};

/// Default 2-bit converter, looked up on `PATH`.
pub const DEFAULT_CONVERTER: &str = "faToTwoBit";
/// Default k-mer indexer, looked up on `PATH`.
pub const DEFAULT_INDEXER: &str = "mfeindex-kmer";

const CONVERTER_ROLE: &str = "2-bit converter";
const INDEXER_ROLE: &str = "k-mer indexer";

/// Locations of the external programs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub converter: PathBuf,
    pub indexer: PathBuf,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            converter: PathBuf::from(DEFAULT_CONVERTER),
            indexer: PathBuf::from(DEFAULT_INDEXER),
        }
    }
}

impl Toolchain {
    /// Runs `<converter> <fasta> <output>`.
    pub fn convert_to_2bit<R: CommandRunner>(
        &self,
        runner: &R,
        fasta: &Path,
        output: &Path,
    ) -> Result<(), IndexError> {
        let _span = info_span!("convert_to_2bit", output = ?output).entered();
        let args = [fasta.as_os_str().to_owned(), output.as_os_str().to_owned()];
        checked(runner, CONVERTER_ROLE, &self.converter, &args)
    }

    /// Runs `<indexer> -f <fasta> -k <k> -o <output>`.
    pub fn build_kmer_index<R: CommandRunner>(
        &self,
        runner: &R,
        fasta: &Path,
        k: KmerLength,
        output: &Path,
    ) -> Result<(), IndexError> {
        let _span = info_span!("build_kmer_index", k = k.get(), output = ?output).entered();
        let args: [OsString; 6] = [
            "-f".into(),
            fasta.as_os_str().to_owned(),
            "-k".into(),
            k.to_string().into(),
            "-o".into(),
            output.as_os_str().to_owned(),
        ];
        checked(runner, INDEXER_ROLE, &self.indexer, &args)
    }
}

fn checked<R: CommandRunner>(
    runner: &R,
    tool: &'static str,
    program: &Path,
    args: &[OsString],
) -> Result<(), IndexError> {
    let status = runner.run(tool, program, args)?;
    if status.success() {
        Ok(())
    } else {
        Err(IndexError::ToolFailed {
            tool,
            code: status.code,
            stderr: status.stderr,
        })
    }
}
