#![forbid(unsafe_code)]

//! Element identity.
//!
//! Every containerizable element is addressed by a [`UsageId`], the primary
//! key of the usage registry. Call sites supply an [`Identity`]: either an
//! assigned id or an explicit opt-out. The opt-out replaces the legacy
//! `"noID"` string sentinel; [`Identity::parse`] still accepts the sentinel
//! so existing registry data keeps working.
//!
//! # Usage
//!
//! ```
//! use devlens_core::ident::{Identity, UsageId};
//!
//! let id = Identity::parse("client-list-table");
//! assert_eq!(id.assigned(), Some(&UsageId::new("client-list-table")));
//!
//! let opt_out = Identity::parse("noID");
//! assert!(opt_out.is_anonymous());
//! ```

use std::borrow::Borrow;
use std::fmt;

/// Legacy string sentinel meaning "do not containerize this element".
pub const LEGACY_OPT_OUT: &str = "noID";

/// Stable identifier of one UI element usage.
///
/// Globally unique across the merged registry; stable across rebuilds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UsageId(String);

impl UsageId {
    /// Create a usage id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UsageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UsageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UsageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for UsageId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Identity supplied by a containerization call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identity {
    /// The element carries a registry id.
    Assigned(UsageId),
    /// Explicit opt-out: render bare, no boundary, no registry interaction.
    Anonymous,
}

impl Identity {
    /// Parse a raw identifier string, mapping the legacy `"noID"` sentinel
    /// to [`Identity::Anonymous`].
    pub fn parse(raw: &str) -> Self {
        if raw == LEGACY_OPT_OUT {
            Self::Anonymous
        } else {
            Self::Assigned(UsageId::from(raw))
        }
    }

    /// The assigned id, if any.
    pub fn assigned(&self) -> Option<&UsageId> {
        match self {
            Self::Assigned(id) => Some(id),
            Self::Anonymous => None,
        }
    }

    /// Whether this identity is the explicit opt-out.
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}

impl From<UsageId> for Identity {
    fn from(id: UsageId) -> Self {
        Self::Assigned(id)
    }
}
