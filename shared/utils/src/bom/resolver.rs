//! Hierarchy Resolver
//!
//! Reduces a pre-order-linearized parts hierarchy to its leaf parts,
//! multiplying quantities through each leaf's ancestor chain and recording
//! the owning sub-assembly path.

use std::collections::HashMap;

use picklist_models::{HierarchyRow, ResolvedLeafPart};

/// One open ancestor on the resolution stack.
#[derive(Debug, Clone)]
struct OpenAncestor {
    part_number: String,
    effective_qty: f64,
}

/// Resolves an ordered pre-order row sequence to leaf-only parts.
///
/// Single forward pass, O(n) in row count. The function assumes rows arrive
/// in depth-first pre-order as produced by the source table; it does not
/// verify this, and out-of-order input yields deterministic but meaningless
/// output rather than an error. Validating row order and dropping rows with
/// unusable levels or quantities is the ingestion side's job.
///
/// Duplicate leaf part numbers across different subtrees are emitted as
/// separate entries, each with its own assembly group; see [`collapse`] for
/// per-BOM summation.
pub fn resolve(rows: &[HierarchyRow]) -> Vec<ResolvedLeafPart> {
    // Sparse stack of open ancestors indexed by level. Observed hierarchies
    // stay within five levels, so this vector never grows past a handful of
    // slots.
    let mut stack: Vec<Option<OpenAncestor>> = Vec::new();
    let mut leaves = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        let level = row.level as usize;
        let is_leaf = row.is_leaf_before(rows.get(i + 1));

        // Nearest open ancestor below this row; a row with none is a root
        // and multiplies against 1.
        let parent_qty = stack[..level.min(stack.len())]
            .iter()
            .rev()
            .find_map(|slot| slot.as_ref().map(|a| a.effective_qty))
            .unwrap_or(1.0);

        let raw_qty = row.qty * parent_qty;

        if stack.len() <= level {
            stack.resize_with(level + 1, || None);
        }
        stack[level] = Some(OpenAncestor {
            part_number: row.part_number.clone(),
            effective_qty: raw_qty,
        });
        // Anything deeper belonged to a subtree that has now closed.
        stack.truncate(level + 1);

        if is_leaf {
            leaves.push(ResolvedLeafPart {
                part_number: row.part_number.clone(),
                description: row.description.clone(),
                effective_qty: emitted_qty(raw_qty),
                assembly_group: assembly_group(&stack, row),
            });
        }
    }

    leaves
}

/// Flat per-BOM entry after summing duplicate leaf part numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct CollapsedPart {
    pub part_number: String,
    pub description: String,
    pub qty: u32,
    pub assembly_group: String,
}

/// Sums duplicate leaf part numbers within one resolved BOM.
///
/// The first occurrence's assembly group and description win; later
/// occurrences only contribute quantity. Output preserves first-appearance
/// order.
pub fn collapse(leaves: &[ResolvedLeafPart]) -> Vec<CollapsedPart> {
    let mut parts: Vec<CollapsedPart> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for leaf in leaves {
        match index.get(&leaf.part_number) {
            Some(&i) => parts[i].qty = parts[i].qty.saturating_add(leaf.effective_qty),
            None => {
                index.insert(leaf.part_number.clone(), parts.len());
                parts.push(CollapsedPart {
                    part_number: leaf.part_number.clone(),
                    description: leaf.description.clone(),
                    qty: leaf.effective_qty,
                    assembly_group: leaf.assembly_group.clone(),
                });
            }
        }
    }

    parts
}

/// Rounds a propagated quantity up to a whole count with a floor of one.
///
/// A non-finite or non-positive value collapses to 1; a BOM can never
/// require zero of a leaf part.
fn emitted_qty(raw: f64) -> u32 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1;
    }
    raw.ceil().max(1.0) as u32
}

/// Builds the ancestor path for an emitted leaf.
///
/// Rows at level 0 or 1 group under their own part number. Deeper rows join
/// the recorded ancestors at levels 1 through `level - 1`; level 0 is a
/// top-sheet marker and never appears in descendant paths, and unrecorded
/// levels are skipped rather than substituted. A deep row with no recorded
/// ancestors at all gets an empty path; downstream grouping depends on this
/// exact format, so no placeholder is invented.
fn assembly_group(stack: &[Option<OpenAncestor>], row: &HierarchyRow) -> String {
    if row.level <= 1 {
        return row.part_number.clone();
    }

    let path: Vec<&str> = stack[1..row.level as usize]
        .iter()
        .filter_map(|slot| slot.as_ref().map(|a| a.part_number.as_str()))
        .collect();

    path.join(" > ")
}
