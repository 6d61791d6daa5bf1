#![forbid(unsafe_code)]

//! Registry data partitions.
//!
//! Each partition is one static JSON document with a name and a sequence of
//! usage records. The host declares a fixed partition order; the index folds
//! them in that order before duplicate checking.

use serde::{Deserialize, Serialize};

use crate::RegistryError;
use crate::record::UsageRecord;

/// One ordered slice of the registry data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    /// Partition name, used in error reporting.
    pub name: String,
    pub records: Vec<UsageRecord>,
}

impl Partition {
    /// Create a partition from in-memory records.
    pub fn new(name: impl Into<String>, records: Vec<UsageRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// Parse a partition from its JSON document.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        serde_json::from_str(json).map_err(|source| RegistryError::Parse {
            partition: "<unnamed>".to_string(),
            source,
        })
    }

    /// Number of records in this partition.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the partition holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
