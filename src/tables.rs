//! Nucleotide encoding tables shared with the external k-mer indexer.
//!
//! Three read-only tables live here:
//!
//! - the base ↔ code mapping used for compact storage, with an optional gap
//!   symbol for alignment bubbles ([`Alphabet`]);
//! - the IUPAC ambiguity table ([`iupac_bases`]);
//! - the mismatch-neighbor table of tolerated 2-base substitutions
//!   ([`mismatch_neighbors`]).
//!
//! # Example
//!
//! ```rust
//! use mfeindex::tables::{iupac_bases, Alphabet};
//!
//! assert_eq!(Alphabet::Nucleotide.encode(b'G'), Some(1));
//! assert_eq!(Alphabet::Gapped.decode(4), Some(b'-'));
//! assert_eq!(iupac_bases(b'R'), Some(&b"AG"[..]));
//! ```

use crate::error::DegenerateExpansionError;

/// Gap symbol marking a bubble in an alignment.
pub const GAP: u8 = b'-';

/// Symbol for each code, indexed by code.
pub const ANTISENSE_CHARS: [u8; 5] = [b'A', b'G', b'C', b'T', GAP];

/// Every code accepted by [`iupac_bases`], uppercase.
pub const IUPAC_CODES: &[u8] = b"ATCGRYSWKMBDHVN";

/// Which symbol set the code table covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// `A`, `G`, `C`, `T` mapped to `0..=3`.
    #[default]
    Nucleotide,
    /// The four bases plus [`GAP`] mapped to `4`.
    Gapped,
}

impl Alphabet {
    /// Number of symbols (and codes) in the alphabet.
    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            Self::Nucleotide => 4,
            Self::Gapped => 5,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Symbols in code order.
    #[must_use]
    pub const fn symbols(self) -> &'static [u8] {
        match self {
            Self::Nucleotide => b"AGCT",
            Self::Gapped => b"AGCT-",
        }
    }

    /// Maps an uppercase symbol to its code.
    #[must_use]
    pub const fn encode(self, symbol: u8) -> Option<u8> {
        match (symbol, self) {
            (b'A', _) => Some(0),
            (b'G', _) => Some(1),
            (b'C', _) => Some(2),
            (b'T', _) => Some(3),
            (GAP, Self::Gapped) => Some(4),
            _ => None,
        }
    }

    /// Maps a code back to its symbol.
    #[must_use]
    pub const fn decode(self, code: u8) -> Option<u8> {
        if (code as usize) < self.len() {
            Some(ANTISENSE_CHARS[code as usize])
        } else {
            None
        }
    }
}

/// Code of the Watson-Crick complement of a base code.
///
/// The code order `A G C T` places complements at mirrored positions.
#[must_use]
pub const fn complement_code(code: u8) -> Option<u8> {
    if code < 4 {
        Some(3 - code)
    } else {
        None
    }
}

/// Concrete bases an IUPAC code may stand for, in `A C G T` order.
///
/// Lowercase codes are accepted. Returns `None` for anything that is not a
/// nucleotide IUPAC code.
#[must_use]
pub fn iupac_bases(code: u8) -> Option<&'static [u8]> {
    let bases: &'static [u8] = match code.to_ascii_uppercase() {
        b'A' => b"A",
        b'C' => b"C",
        b'G' => b"G",
        b'T' => b"T",
        b'R' => b"AG",
        b'Y' => b"CT",
        b'S' => b"CG",
        b'W' => b"AT",
        b'K' => b"GT",
        b'M' => b"AC",
        b'B' => b"CGT",
        b'D' => b"AGT",
        b'H' => b"ACT",
        b'V' => b"ACG",
        b'N' => b"ACGT",
        _ => return None,
    };
    Some(bases)
}

/// Expands a degenerate sequence into every concrete sequence it denotes.
///
/// Fails without allocating the variants when their number exceeds `limit`.
///
/// # Example
///
/// ```rust
/// use mfeindex::tables::expand_degenerate;
///
/// let variants = expand_degenerate(b"AYG", 16)?;
/// assert_eq!(variants, vec![b"ACG".to_vec(), b"ATG".to_vec()]);
/// # Ok::<(), mfeindex::error::DegenerateExpansionError>(())
/// ```
pub fn expand_degenerate(
    seq: &[u8],
    limit: usize,
) -> Result<Vec<Vec<u8>>, DegenerateExpansionError> {
    let choices = seq
        .iter()
        .enumerate()
        .map(|(position, &code)| {
            iupac_bases(code).ok_or(DegenerateExpansionError::InvalidCode { code, position })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total = choices
        .iter()
        .try_fold(1usize, |acc, bases| acc.checked_mul(bases.len()))
        .filter(|&n| n <= limit)
        .ok_or(DegenerateExpansionError::TooManyVariants { limit })?;

    let mut variants: Vec<Vec<u8>> = Vec::with_capacity(total);
    variants.push(Vec::with_capacity(seq.len()));
    for bases in choices {
        variants = variants
            .into_iter()
            .flat_map(|prefix| {
                bases.iter().map(move |&b| {
                    let mut next = prefix.clone();
                    next.push(b);
                    next
                })
            })
            .collect();
    }
    Ok(variants)
}

/// Tolerated single-base substitutions per 2-base window.
///
/// Only windows whose 3' base is strong (G or C) are listed. A neighbor keeps
/// the 3' base and swaps the 5' base for its transition partner (A/G, C/T).
pub const MISMATCH_NEIGHBORS: &[([u8; 2], &[[u8; 2]])] = &[
    (*b"AG", &[*b"GG"]),
    (*b"GG", &[*b"AG"]),
    (*b"CG", &[*b"TG"]),
    (*b"TG", &[*b"CG"]),
    (*b"AC", &[*b"GC"]),
    (*b"GC", &[*b"AC"]),
    (*b"CC", &[*b"TC"]),
    (*b"TC", &[*b"CC"]),
];

/// Transition partner of a base: purine for purine, pyrimidine for pyrimidine.
#[must_use]
pub const fn transition(base: u8) -> Option<u8> {
    match base {
        b'A' => Some(b'G'),
        b'G' => Some(b'A'),
        b'C' => Some(b'T'),
        b'T' => Some(b'C'),
        _ => None,
    }
}

/// Windows accepted as near-miss matches for `window`, if it has an entry.
#[must_use]
pub fn mismatch_neighbors(window: &[u8]) -> Option<&'static [[u8; 2]]> {
    MISMATCH_NEIGHBORS
        .iter()
        .find(|(key, _)| key.as_slice() == window)
        .map(|(_, neighbors)| *neighbors)
}

/// Returns `true` when `observed` is a tolerated substitute for `expected`.
#[must_use]
pub fn is_tolerated_mismatch(expected: &[u8], observed: &[u8]) -> bool {
    mismatch_neighbors(expected)
        .is_some_and(|neighbors| neighbors.iter().any(|n| n.as_slice() == observed))
}
