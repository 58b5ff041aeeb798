//! Per-record metadata stored in the JSON sidecar.
//!
//! Records are renumbered `0..n` in source order. The sidecar is a single JSON
//! object keyed by the stringified number, with keys written in that order:
//!
//! ```text
//! {"0":{"id":"seq1","desc":"desc one","size":4},"1":{"id":"seq2","desc":"desc two","size":5}}
//! ```

use std::{
    collections::HashMap,
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::{
    de::Error as _,
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::error::IndexError;

/// Original identity of one renumbered record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordInfo {
    /// Identifier from the source header (first whitespace-delimited token).
    pub id: String,
    /// Rest of the header line; empty when absent.
    #[serde(default)]
    pub desc: String,
    /// Sequence length in bases.
    pub size: u64,
}

impl RecordInfo {
    pub fn new(id: impl Into<String>, desc: Option<&str>, size: u64) -> Self {
        Self {
            id: id.into(),
            desc: desc.unwrap_or_default().to_string(),
            size,
        }
    }
}

/// Ordered collection of [`RecordInfo`], indexed by sequential id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceCatalog {
    records: Vec<RecordInfo>,
}

impl SequenceCatalog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record and returns the sequential id assigned to it.
    pub fn push(&mut self, info: RecordInfo) -> usize {
        self.records.push(info);
        self.records.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RecordInfo> {
        self.records.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates `(sequential id, record)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &RecordInfo)> {
        self.records.iter().enumerate()
    }

    /// Sum of all record sizes.
    #[must_use]
    pub fn total_bases(&self) -> u64 {
        self.records.iter().map(|r| r.size).sum()
    }

    /// Writes the catalog as JSON to `path`, replacing any existing file.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<(), IndexError> {
        let path = path.as_ref();
        let write_err = |source| IndexError::MetadataWrite {
            source,
            path: path.to_path_buf(),
        };

        let file = File::create(path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush().map_err(write_err)
    }

    /// Reads a catalog previously written by [`write_json`](Self::write_json).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IndexError::MetadataRead {
            source,
            path: path.to_path_buf(),
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            if e.is_data() {
                IndexError::InvalidMetadata {
                    details: e.to_string(),
                    path: path.to_path_buf(),
                }
            } else {
                IndexError::from(e)
            }
        })
    }
}

impl FromIterator<RecordInfo> for SequenceCatalog {
    fn from_iter<I: IntoIterator<Item = RecordInfo>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Serialize for SequenceCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for (i, record) in self.iter() {
            map.serialize_entry(&i.to_string(), record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SequenceCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, RecordInfo>::deserialize(deserializer)?;
        let n = raw.len();

        let mut slots: Vec<Option<RecordInfo>> = vec![None; n];
        for (key, record) in raw {
            let index = key
                .parse::<usize>()
                .ok()
                .filter(|index| index.to_string() == key)
                .ok_or_else(|| D::Error::custom(format!("key '{key}' is not a record number")))?;
            let slot = slots.get_mut(index).ok_or_else(|| {
                D::Error::custom(format!("record number {index} out of range for {n} records"))
            })?;
            if slot.replace(record).is_some() {
                return Err(D::Error::custom(format!("record number {index} appears twice")));
            }
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.ok_or_else(|| D::Error::custom(format!("record number {index} is missing")))
            })
            .collect()
    }
}
