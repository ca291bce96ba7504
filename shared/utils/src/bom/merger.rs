//! Multi-BOM Merger
//!
//! Combines the resolved BOMs of several tool/product variants into one
//! consolidated parts list, classifying each part as shared across every
//! variant or specific to some, and splitting entries when variants disagree
//! on the per-unit quantity.

use std::collections::{HashMap, HashSet};

use picklist_models::{MergeOutcome, MergeStats, MergedLineItem, ParsedBom};

/// Per-BOM view of one part after summing duplicate lines.
#[derive(Debug, Clone)]
struct PartEntry {
    qty: u32,
    assembly_group: String,
    description: String,
}

/// Merges resolved BOMs into a single consolidated line-item list.
///
/// Pure function; all lookup maps are scoped to the call. Ordering of the
/// result is stable and reproducible: shared items first, then by assembly
/// group, then by part number.
pub fn merge(boms: &[ParsedBom]) -> MergeOutcome {
    if boms.is_empty() {
        return MergeOutcome::empty();
    }

    let all_tool_models: Vec<String> = boms.iter().map(|b| b.tool_model.clone()).collect();

    // Step 1: collapse each BOM to part number -> summed quantity, keeping
    // the first-seen assembly group and description.
    let per_bom: Vec<HashMap<String, PartEntry>> = boms.iter().map(collapse_bom).collect();

    // Step 2: union of part numbers, in first-appearance order across BOMs
    // so the pre-sort order is deterministic.
    let mut union: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for bom in boms {
        for line in &bom.leaf_parts {
            if seen.insert(line.part_number.clone()) {
                union.push(line.part_number.clone());
            }
        }
    }

    // Step 3: classify each part by quantity agreement across the BOMs that
    // contain it.
    let mut line_items: Vec<MergedLineItem> = Vec::new();
    for part_number in &union {
        let contributions: Vec<(&str, &PartEntry)> = boms
            .iter()
            .zip(&per_bom)
            .filter_map(|(bom, map)| {
                map.get(part_number).map(|e| (bom.tool_model.as_str(), e))
            })
            .collect();

        // Distinct quantities in first-occurrence order.
        let mut distinct_qtys: Vec<u32> = Vec::new();
        for (_, entry) in &contributions {
            if !distinct_qtys.contains(&entry.qty) {
                distinct_qtys.push(entry.qty);
            }
        }

        let quantity_agreed = distinct_qtys.len() == 1;
        for qty in distinct_qtys {
            let group: Vec<&(&str, &PartEntry)> = contributions
                .iter()
                .filter(|(_, entry)| entry.qty == qty)
                .collect();
            let first = group[0].1;

            line_items.push(MergedLineItem {
                part_number: part_number.clone(),
                description: first.description.clone(),
                assembly_group: first.assembly_group.clone(),
                qty_per_unit: qty,
                tool_models: group.iter().map(|(model, _)| model.to_string()).collect(),
                // Quantity disagreement disqualifies shared status even when
                // every variant needs some amount of the part.
                is_shared: quantity_agreed && group.len() == boms.len(),
            });
        }
    }

    // Step 4: display ordering. Stable sort keeps the first-appearance order
    // for ties.
    line_items.sort_by(|a, b| {
        b.is_shared
            .cmp(&a.is_shared)
            .then_with(|| a.assembly_group.cmp(&b.assembly_group))
            .then_with(|| a.part_number.cmp(&b.part_number))
    });

    // Step 5: stats.
    let total_parts = line_items.len();
    let shared_count = line_items.iter().filter(|item| item.is_shared).count();
    let stats = MergeStats {
        total_parts,
        shared_count,
        tool_specific_count: total_parts - shared_count,
    };

    MergeOutcome {
        line_items,
        all_tool_models,
        stats,
    }
}

/// Collapses one BOM's lines into a per-part lookup, summing quantities for
/// repeated part numbers and keeping the first-seen group and description.
fn collapse_bom(bom: &ParsedBom) -> HashMap<String, PartEntry> {
    let mut map: HashMap<String, PartEntry> = HashMap::new();

    for line in &bom.leaf_parts {
        match map.get_mut(&line.part_number) {
            Some(entry) => entry.qty = entry.qty.saturating_add(line.effective_qty),
            None => {
                map.insert(
                    line.part_number.clone(),
                    PartEntry {
                        qty: line.effective_qty,
                        assembly_group: line.assembly_group.clone(),
                        description: line.description.clone(),
                    },
                );
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use picklist_models::{BomLine, PartType};

    fn line(part: &str, qty: u32, group: &str) -> BomLine {
        BomLine {
            part_number: part.to_string(),
            description: format!("{} description", part),
            effective_qty: qty,
            assembly_group: group.to_string(),
            part_type: PartType::Buy,
        }
    }

    fn bom(model: &str, lines: Vec<BomLine>) -> ParsedBom {
        ParsedBom {
            tool_model: model.to_string(),
            leaf_parts: lines,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_shared_part_identical_quantities() {
        let boms = vec![
            bom("T-100", vec![line("BOLT", 4, "ASM")]),
            bom("T-200", vec![line("BOLT", 4, "ASM")]),
            bom("T-300", vec![line("BOLT", 4, "ASM")]),
        ];

        let outcome = merge(&boms);

        assert_eq!(outcome.line_items.len(), 1);
        let item = &outcome.line_items[0];
        assert!(item.is_shared);
        assert_eq!(item.tool_models, vec!["T-100", "T-200", "T-300"]);
        assert_eq!(item.qty_per_unit, 4);
        assert_eq!(outcome.stats.shared_count, 1);
        assert_eq!(outcome.stats.tool_specific_count, 0);
    }

    #[test]
    fn test_quantity_disagreement_splits_part() {
        // Present in 2 of 3 BOMs with differing quantities: two line items,
        // neither shared, partitioning the contributors.
        let boms = vec![
            bom("T-100", vec![line("SEAL", 2, "ASM")]),
            bom("T-200", vec![line("SEAL", 5, "ASM")]),
            bom("T-300", vec![line("OTHER", 1, "ASM")]),
        ];

        let outcome = merge(&boms);

        let seal_items: Vec<&MergedLineItem> = outcome
            .line_items
            .iter()
            .filter(|item| item.part_number == "SEAL")
            .collect();
        assert_eq!(seal_items.len(), 2);
        assert!(seal_items.iter().all(|item| !item.is_shared));

        let mut covered: Vec<&String> =
            seal_items.iter().flat_map(|item| &item.tool_models).collect();
        covered.sort();
        assert_eq!(covered, vec!["T-100", "T-200"]);
    }

    #[test]
    fn test_agreement_without_full_coverage_is_not_shared() {
        let boms = vec![
            bom("T-100", vec![line("PIN", 1, "ASM")]),
            bom("T-200", vec![line("PIN", 1, "ASM")]),
            bom("T-300", vec![line("OTHER", 1, "ASM")]),
        ];

        let outcome = merge(&boms);

        let pin = outcome
            .line_items
            .iter()
            .find(|item| item.part_number == "PIN")
            .unwrap();
        assert!(!pin.is_shared);
        assert_eq!(pin.tool_models, vec!["T-100", "T-200"]);
    }

    #[test]
    fn test_duplicate_lines_within_one_bom_are_summed() {
        let boms = vec![
            bom("T-100", vec![line("BOLT", 4, "A1"), line("BOLT", 6, "A2")]),
            bom("T-200", vec![line("BOLT", 10, "A1")]),
        ];

        let outcome = merge(&boms);

        assert_eq!(outcome.line_items.len(), 1);
        let item = &outcome.line_items[0];
        assert!(item.is_shared);
        assert_eq!(item.qty_per_unit, 10);
        // First-seen group from the first contributing BOM.
        assert_eq!(item.assembly_group, "A1");
    }

    #[test]
    fn test_per_bom_summation_saturates_instead_of_overflowing() {
        let boms = vec![bom(
            "T-100",
            vec![line("BOLT", u32::MAX, "ASM"), line("BOLT", 10, "ASM")],
        )];

        let outcome = merge(&boms);

        assert_eq!(outcome.line_items.len(), 1);
        assert_eq!(outcome.line_items[0].qty_per_unit, u32::MAX);
    }

    #[test]
    fn test_merge_completeness_invariant() {
        let boms = vec![
            bom("T-100", vec![line("A", 1, "G1"), line("B", 2, "G1")]),
            bom("T-200", vec![line("A", 1, "G1"), line("C", 3, "G2")]),
            bom("T-300", vec![line("B", 4, "G1"), line("C", 3, "G2")]),
        ];

        let outcome = merge(&boms);

        for part in ["A", "B", "C"] {
            let containing = boms
                .iter()
                .filter(|b| b.leaf_parts.iter().any(|l| l.part_number == part))
                .count();
            let memberships: usize = outcome
                .line_items
                .iter()
                .filter(|item| item.part_number == part)
                .map(|item| item.tool_models.len())
                .sum();
            assert_eq!(memberships, containing, "coverage for {}", part);
        }
    }

    #[test]
    fn test_ordering_shared_first_then_group_then_part() {
        let boms = vec![
            bom(
                "T-100",
                vec![
                    line("Z-PART", 1, "B-GROUP"),
                    line("A-PART", 1, "B-GROUP"),
                    line("ONLY-1", 1, "A-GROUP"),
                ],
            ),
            bom(
                "T-200",
                vec![line("Z-PART", 1, "B-GROUP"), line("A-PART", 1, "B-GROUP")],
            ),
        ];

        let outcome = merge(&boms);

        let order: Vec<(&str, bool)> = outcome
            .line_items
            .iter()
            .map(|item| (item.part_number.as_str(), item.is_shared))
            .collect();
        assert_eq!(
            order,
            vec![("A-PART", true), ("Z-PART", true), ("ONLY-1", false)]
        );
    }

    #[test]
    fn test_empty_input() {
        let outcome = merge(&[]);
        assert!(outcome.line_items.is_empty());
        assert!(outcome.all_tool_models.is_empty());
        assert_eq!(outcome.stats.total_parts, 0);
    }

    #[test]
    fn test_merge_is_deterministic() {
        let boms = vec![
            bom("T-100", vec![line("A", 2, "G"), line("B", 1, "G")]),
            bom("T-200", vec![line("B", 3, "G"), line("C", 1, "H")]),
        ];

        assert_eq!(merge(&boms), merge(&boms));
    }
}
