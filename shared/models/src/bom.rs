//! Resolved BOM records.
//!
//! Output side of the hierarchy resolver: leaf-only parts with effective
//! quantities multiplied through their ancestor chain, grouped per
//! tool/product variant, plus the catalog record used for template
//! deduplication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::hierarchy::PartType;

/// A leaf part emitted by the hierarchy resolver.
///
/// `effective_qty` is the quantity needed per one unit of the top-level
/// product after multiplying through every ancestor's own quantity, rounded
/// up with a floor of one. `assembly_group` is the `" > "`-joined path of
/// ancestor part numbers identifying the owning sub-assembly; for rows at
/// level 0 or 1 it degenerates to the part's own number.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ResolvedLeafPart {
    #[validate(length(min = 1, max = 100))]
    pub part_number: String,
    pub description: String,
    #[validate(range(min = 1))]
    pub effective_qty: u32,
    pub assembly_group: String,
}

/// A resolved leaf tagged with its make/buy code for downstream assembly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BomLine {
    pub part_number: String,
    pub description: String,
    pub effective_qty: u32,
    pub assembly_group: String,
    pub part_type: PartType,
}

impl BomLine {
    /// Tags a resolved leaf with a part type.
    pub fn from_leaf(leaf: ResolvedLeafPart, part_type: PartType) -> Self {
        Self {
            part_number: leaf.part_number,
            description: leaf.description,
            effective_qty: leaf.effective_qty,
            assembly_group: leaf.assembly_group,
            part_type,
        }
    }
}

/// One tool/product variant's fully resolved parts list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedBom {
    pub tool_model: String,
    pub leaf_parts: Vec<BomLine>,
    pub warnings: Vec<String>,
}

impl ParsedBom {
    pub fn new(tool_model: impl Into<String>) -> Self {
        Self {
            tool_model: tool_model.into(),
            leaf_parts: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Checks whether resolution produced any usable line items.
    pub fn is_empty(&self) -> bool {
        self.leaf_parts.is_empty()
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

/// Catalog record for fingerprint-based template deduplication.
///
/// Persistence of the catalog lives outside this core; merge and resolve
/// calls only ever see a read-only snapshot of these records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BomTemplate {
    pub id: Uuid,
    pub tool_model: String,
    pub fingerprint: String,
    pub created_at: DateTime<Utc>,
}

impl BomTemplate {
    pub fn new(tool_model: impl Into<String>, fingerprint: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tool_model: tool_model.into(),
            fingerprint: fingerprint.into(),
            created_at: Utc::now(),
        }
    }
}
