//! Merged line-item records.
//!
//! Output side of the multi-BOM merger: one consolidated parts list across
//! all tool/product variants, distinguishing parts every variant needs at the
//! same per-unit quantity from variant-specific requirements.

use serde::{Deserialize, Serialize};

/// A consolidated part requirement across one or more tool models.
///
/// `tool_models` preserves the input order of the contributing variants for
/// display. `is_shared` is true only when every merged BOM needs this part at
/// the identical per-unit quantity; any quantity disagreement splits the part
/// into variant-specific entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MergedLineItem {
    pub part_number: String,
    pub description: String,
    pub assembly_group: String,
    pub qty_per_unit: u32,
    pub tool_models: Vec<String>,
    pub is_shared: bool,
}

impl MergedLineItem {
    /// Checks whether this line item covers the given variant.
    pub fn covers(&self, tool_model: &str) -> bool {
        self.tool_models.iter().any(|m| m == tool_model)
    }
}

/// Summary counters for a merge result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MergeStats {
    pub total_parts: usize,
    pub shared_count: usize,
    pub tool_specific_count: usize,
}

/// Complete merge result: ordered line items, the variant identifiers in
/// input order, and summary stats.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MergeOutcome {
    pub line_items: Vec<MergedLineItem>,
    pub all_tool_models: Vec<String>,
    pub stats: MergeStats,
}

impl MergeOutcome {
    /// Creates an empty outcome, used when no BOMs were supplied.
    pub fn empty() -> Self {
        Self {
            line_items: Vec::new(),
            all_tool_models: Vec::new(),
            stats: MergeStats {
                total_parts: 0,
                shared_count: 0,
                tool_specific_count: 0,
            },
        }
    }

    /// Line items needed by every merged variant.
    pub fn shared_items(&self) -> impl Iterator<Item = &MergedLineItem> {
        self.line_items.iter().filter(|item| item.is_shared)
    }

    /// Line items needed only by specific variants.
    pub fn tool_specific_items(&self) -> impl Iterator<Item = &MergedLineItem> {
        self.line_items.iter().filter(|item| !item.is_shared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers() {
        let item = MergedLineItem {
            part_number: "PN-1".to_string(),
            description: String::new(),
            assembly_group: "PN-1".to_string(),
            qty_per_unit: 2,
            tool_models: vec!["T-100".to_string(), "T-200".to_string()],
            is_shared: true,
        };

        assert!(item.covers("T-100"));
        assert!(!item.covers("T-300"));
    }

    #[test]
    fn test_empty_outcome() {
        let outcome = MergeOutcome::empty();
        assert_eq!(outcome.stats.total_parts, 0);
        assert_eq!(outcome.shared_items().count(), 0);
        assert_eq!(outcome.tool_specific_items().count(), 0);
    }
}
