#![forbid(unsafe_code)]

//! Static usage-record catalog.
//!
//! Several data partitions are merged once at startup into a
//! [`RegistryIndex`]: an immutable id → [`UsageRecord`] catalog with a
//! read-only query facade (filters, free-text search, aggregate stats).
//! A duplicate id anywhere across partitions refuses the whole build; a
//! silent overwrite would leave the overlay pointing at the wrong metadata.
//!
//! # Usage
//!
//! ```
//! use devlens_registry::{Partition, RegistryIndex};
//!
//! let partition = Partition::from_json(r#"{
//!     "name": "auth",
//!     "records": [{
//!         "id": "login-submit",
//!         "definitionId": "button",
//!         "name": "Login submit",
//!         "description": "Submits the login form",
//!         "category": "form",
//!         "semanticTags": ["auth", "cta"],
//!         "filePath": "src/pages/login.rs"
//!     }]
//! }"#).unwrap();
//!
//! let index = RegistryIndex::build([partition]).unwrap();
//! assert!(index.get_str("login-submit").is_some());
//! ```

pub mod index;
pub mod partition;
pub mod record;

pub use index::{RegistryIndex, RegistryStats};
pub use partition::Partition;
pub use record::{Category, UsageRecord};

use std::fmt;

use devlens_core::ident::UsageId;

/// Errors from building or loading the registry.
#[derive(Debug)]
pub enum RegistryError {
    /// Two usage records across the merged partitions share an id.
    /// Fatal at load time; the build yields no index.
    DuplicateId {
        id: UsageId,
        /// Name of the partition containing the second occurrence.
        partition: String,
    },
    /// A partition document failed to parse.
    Parse {
        partition: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id, partition } => {
                write!(f, "duplicate usage id `{id}` in partition `{partition}`")
            }
            Self::Parse { partition, source } => {
                write!(f, "invalid partition `{partition}`: {source}")
            }
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DuplicateId { .. } => None,
            Self::Parse { source, .. } => Some(source),
        }
    }
}
