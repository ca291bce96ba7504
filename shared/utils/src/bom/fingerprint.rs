//! BOM Fingerprint
//!
//! Canonical, order-independent signatures over a BOM's (part number,
//! per-unit quantity) pairs, used to detect that a newly imported BOM is
//! structurally identical to an already-cataloged template. Catalog storage
//! stays outside this core; matching only ever reads a snapshot.

use sha2::{Digest, Sha256};

use picklist_models::{BomTemplate, ParsedBom};

/// Builds the canonical fingerprint of a set of (part number, quantity)
/// pairs.
///
/// Each pair maps to `"{part}:{qty}"`; keys are sorted lexicographically and
/// joined with `"|"`. Two item sets produce equal fingerprints iff they
/// carry the same multiset of keys, regardless of order, descriptions, or
/// assembly grouping. Part numbers compare case-sensitively as given. The
/// exact format is an equality key within one deployment, not a long-term
/// persisted identifier.
pub fn fingerprint<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    let mut keys: Vec<String> = items
        .into_iter()
        .map(|(part, qty)| format!("{}:{}", part, qty))
        .collect();
    keys.sort_unstable();
    keys.join("|")
}

/// Fingerprints a resolved BOM's line items.
pub fn fingerprint_bom(bom: &ParsedBom) -> String {
    fingerprint(
        bom.leaf_parts
            .iter()
            .map(|line| (line.part_number.as_str(), line.effective_qty)),
    )
}

/// Fixed-width digest form of the canonical fingerprint.
///
/// Lowercase hex SHA-256 of [`fingerprint`]'s output, convenient for catalog
/// rows where a bounded column is wanted. Same equality semantics.
pub fn fingerprint_digest<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    let canonical = fingerprint(items);
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}

/// Finds the first cataloged template whose fingerprint matches.
///
/// The catalog is a read-only snapshot supplied by the host; a stale
/// snapshot can miss a match (and create a duplicate template upstream) but
/// never affects the computation itself.
pub fn find_matching_template<'a>(
    fingerprint: &str,
    catalog: &'a [BomTemplate],
) -> Option<&'a BomTemplate> {
    catalog.iter().find(|t| t.fingerprint == fingerprint)
}
