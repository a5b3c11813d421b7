use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::case::CaseError;

/// Number of shares handed out (`n`) and how many of them determine the secret (`k`).
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

/// The base of a share value. Records write it either as a JSON string or as a number.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Base {
    Number(u32),
    Text(String),
}

impl Base {
    pub fn radix(&self) -> Option<u32> {
        match self {
            Base::Number(base) => Some(*base),
            Base::Text(base) => base.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base::Number(base) => write!(f, "{}", base),
            Base::Text(base) => write!(f, "{:?}", base),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ShareEntry {
    pub base: Base,
    pub value: String,
}

/// A set of shares as it is handed to the recovery: the `keys` object next to one entry per share, keyed by the share
/// index written in decimal. Entries are only interpreted once the driver looks them up.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CaseRecord {
    pub keys: Keys,
    #[serde(flatten)]
    pub entries: BTreeMap<String, serde_json::Value>,
}

impl CaseRecord {
    pub fn from_json(json: &str) -> Result<Self, CaseError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CaseError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Indices of the share entries within `1..=n`, in increasing numeric order. Only keys written as plain decimals
    /// count, so `"01"` is not the entry of share one.
    pub fn share_indices(&self) -> Vec<usize> {
        let mut indices = self
            .entries
            .keys()
            .filter_map(|key| key.parse::<usize>().ok().filter(|x| x.to_string() == *key))
            .filter(|x| (1..=self.keys.n).contains(x))
            .collect::<Vec<_>>();
        indices.sort_unstable();
        indices
    }

    /// Looks up and parses the entry of share `x`, if the record has one.
    pub fn share(&self, x: usize) -> Option<Result<ShareEntry, CaseError>> {
        self.entries.get(&x.to_string()).map(|entry| {
            ShareEntry::deserialize(entry).map_err(|source| CaseError::MalformedShare { x, source })
        })
    }
}

impl FromStr for CaseRecord {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}
