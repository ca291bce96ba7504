//! Hierarchy input records for BOM resolution.
//!
//! A bill of materials arrives as a flat, ordered list of rows encoding a
//! depth-first pre-order traversal of the parts tree: each row's children are
//! the immediately following rows with a strictly greater level, terminated
//! by the first row at the same or a shallower level.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single row of a linearized parts hierarchy.
///
/// Produced by the row-ingestion adapter (spreadsheet column detection lives
/// there, not here). The resolver assumes rows arrive in pre-order and that
/// every row carries a valid level; malformed rows must be dropped upstream.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct HierarchyRow {
    pub level: u32,
    #[validate(length(min = 1, max = 100, message = "Part number must be between 1 and 100 characters"))]
    pub part_number: String,
    #[validate(range(min = 0.000001, message = "Quantity must be positive"))]
    pub qty: f64,
    pub description: String,
}

impl HierarchyRow {
    /// Creates a row at the given hierarchy level.
    pub fn new(level: u32, part_number: impl Into<String>, qty: f64, description: impl Into<String>) -> Self {
        Self {
            level,
            part_number: part_number.into(),
            qty,
            description: description.into(),
        }
    }

    /// Checks whether this row opens a subtree relative to `next`.
    ///
    /// A row is a leaf when it is last in the sequence or the following row
    /// does not descend below it.
    pub fn is_leaf_before(&self, next: Option<&HierarchyRow>) -> bool {
        match next {
            Some(row) => row.level <= self.level,
            None => true,
        }
    }
}

/// Make/buy code carried through from the source table onto resolved leaves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PartType {
    Make,
    Buy,
    Other(String),
}

impl Default for PartType {
    fn default() -> Self {
        Self::Buy
    }
}

impl PartType {
    /// Maps common source-table codes onto a part type.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "m" | "make" | "mfg" => Self::Make,
            "b" | "buy" | "purchase" => Self::Buy,
            "" => Self::default(),
            other => Self::Other(other.to_string()),
        }
    }
}
