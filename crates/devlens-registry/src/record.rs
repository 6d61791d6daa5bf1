#![forbid(unsafe_code)]

//! Usage records and categories.

use std::fmt;
use std::str::FromStr;

use devlens_core::ident::UsageId;
use serde::{Deserialize, Serialize};

/// Coarse role of a UI element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Layout,
    Navigation,
    Content,
    Form,
    Feedback,
    Interactive,
    Media,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 7] = [
        Category::Layout,
        Category::Navigation,
        Category::Content,
        Category::Form,
        Category::Feedback,
        Category::Interactive,
        Category::Media,
    ];

    /// Lowercase name, matching the partition data format.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Layout => "layout",
            Category::Navigation => "navigation",
            Category::Content => "content",
            Category::Form => "form",
            Category::Feedback => "feedback",
            Category::Interactive => "interactive",
            Category::Media => "media",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category `{}`", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Metadata for one UI element usage in the source tree.
///
/// Records are constructed once at startup from static partitions and are
/// immutable for the life of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    /// Primary key; unique across the whole merged catalog.
    pub id: UsageId,
    /// Definition (primitive/template) this usage instantiates. Many
    /// usages share one definition.
    pub definition_id: String,
    /// Human-readable name for the inspector.
    pub name: String,
    /// Human-readable description for the inspector.
    pub description: String,
    pub category: Category,
    /// Free-form tags for search and filtering.
    #[serde(default)]
    pub semantic_tags: Vec<String>,
    /// Originating source location. Informational only.
    #[serde(default)]
    pub file_path: String,
}

impl UsageRecord {
    /// Case-insensitive substring match over name, description, and tags.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_needle(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .semantic_tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}
