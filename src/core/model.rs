// LogLedger - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::error::StoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Category (closed classification set)
// =============================================================================

/// The fixed set of categories log entries are partitioned by.
///
/// The set is closed at compile time. Every variant maps to a stable slot
/// via [`Category::index`], which the store uses to keep one sequence per
/// category without a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    System,
    Orders,
    Users,
    Machinery,
    Product,
    Part,
    Material,
    Vendor,
}

impl Category {
    /// Number of variants. Sizes the store's backing array.
    pub const COUNT: usize = 8;

    /// Returns all variants in slot order (SYSTEM first).
    pub fn all() -> &'static [Category; Category::COUNT] {
        &[
            Category::System,
            Category::Orders,
            Category::Users,
            Category::Machinery,
            Category::Product,
            Category::Part,
            Category::Material,
            Category::Vendor,
        ]
    }

    /// Textual form used as the entry label and in CSV output.
    pub fn label(&self) -> &'static str {
        match self {
            Category::System => "SYSTEM",
            Category::Orders => "ORDERS",
            Category::Users => "USERS",
            Category::Machinery => "MACHINERY",
            Category::Product => "PRODUCT",
            Category::Part => "PART",
            Category::Material => "MATERIAL",
            Category::Vendor => "VENDOR",
        }
    }

    /// Slot in the store's backing array.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// True for the category every other write is mirrored into.
    pub fn is_system(&self) -> bool {
        matches!(self, Category::System)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = StoreError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StoreError::CategoryNotFound {
                label: wanted.to_string(),
            })
    }
}

// =============================================================================
// Log Entry
// =============================================================================

/// A single stored log record.
///
/// Immutable once built: fields are private and only exposed through
/// borrowing accessors. The serialised field names match the CSV header
/// (`type`, `time`, `message`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Label of the category this record was stored under. For a mirrored
    /// record this is "SYSTEM", not the category originally written to.
    #[serde(rename = "type")]
    category_label: String,

    /// UTC timestamp, ISO-8601, whole seconds (e.g. `2024-03-01T09:15:02Z`).
    #[serde(rename = "time")]
    timestamp: String,

    message: String,
}

impl LogEntry {
    pub fn new(
        category_label: impl Into<String>,
        timestamp: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category_label: category_label.into(),
            timestamp: timestamp.into(),
            message: message.into(),
        }
    }

    pub fn category_label(&self) -> &str {
        &self.category_label
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
