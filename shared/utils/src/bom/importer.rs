//! BOM Importer
//!
//! Per-variant import glue around the resolver: pre-filters rows, resolves
//! the hierarchy, collapses duplicate leaves into the flat per-BOM parts
//! list, tags lines with their make/buy code, and surfaces the "no valid
//! line items found" condition the resolver itself deliberately never
//! raises.

use std::collections::HashMap;

use picklist_models::{BomLine, HierarchyRow, ParsedBom, PartType};

use super::resolver;
use crate::config::ImportConfig;
use crate::error::{PicklistError, PicklistResult};
use crate::validation::validate_rows;

/// Turns one tool model's row set into a resolved [`ParsedBom`].
pub struct BomImporter {
    config: ImportConfig,
}

impl BomImporter {
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    /// Importer with the stock configuration.
    pub fn with_defaults() -> Self {
        Self::new(crate::config::AppConfig::default().import)
    }

    /// Imports one variant's ordered row sequence.
    ///
    /// `part_type_codes` maps part numbers to the make/buy code column of
    /// the source table; untagged leaves fall back to the configured
    /// default. Returns [`PicklistError::EmptyBom`] when resolution yields
    /// no leaf parts, so callers never silently build an empty order.
    pub fn import(
        &self,
        tool_model: &str,
        rows: &[HierarchyRow],
        part_type_codes: &HashMap<String, String>,
    ) -> PicklistResult<ParsedBom> {
        let mut bom = ParsedBom::new(tool_model);

        let (rows, row_warnings) = validate_rows(rows);
        for warning in row_warnings {
            tracing::warn!(tool_model, %warning, "row dropped or flagged during import");
            bom.add_warning(warning);
        }

        let deepest = rows.iter().map(|r| r.level).max().unwrap_or(0);
        if deepest > self.config.max_hierarchy_depth {
            bom.add_warning(format!(
                "Hierarchy depth {} exceeds expected maximum {}; check the level column",
                deepest, self.config.max_hierarchy_depth
            ));
        }

        let leaves = resolver::resolve(&rows);
        if leaves.is_empty() {
            tracing::warn!(tool_model, "import produced no leaf parts");
            return Err(PicklistError::empty_bom(tool_model));
        }

        let default_type = PartType::from_code(&self.config.default_part_type);
        for part in resolver::collapse(&leaves) {
            let part_type = part_type_codes
                .get(&part.part_number)
                .map(|code| PartType::from_code(code))
                .unwrap_or_else(|| default_type.clone());

            bom.leaf_parts.push(BomLine {
                part_number: part.part_number,
                description: part.description,
                effective_qty: part.qty,
                assembly_group: part.assembly_group,
                part_type,
            });
        }

        tracing::info!(
            tool_model,
            parts = bom.leaf_parts.len(),
            warnings = bom.warnings.len(),
            "BOM imported"
        );

        Ok(bom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(level: u32, part: &str, qty: f64) -> HierarchyRow {
        HierarchyRow::new(level, part, qty, "")
    }

    #[test]
    fn test_import_collapses_and_tags() {
        let rows = vec![
            row(0, "DOC", 1.0),
            row(1, "ASM", 2.0),
            row(2, "BOLT", 3.0),
            row(1, "PLATE", 1.0),
        ];
        let codes = HashMap::from([("PLATE".to_string(), "M".to_string())]);

        let importer = BomImporter::with_defaults();
        let bom = importer.import("T-100", &rows, &codes).unwrap();

        assert_eq!(bom.tool_model, "T-100");
        assert_eq!(bom.leaf_parts.len(), 2);

        let bolt = bom.leaf_parts.iter().find(|l| l.part_number == "BOLT").unwrap();
        assert_eq!(bolt.effective_qty, 6);
        assert_eq!(bolt.part_type, PartType::Buy); // configured default

        let plate = bom.leaf_parts.iter().find(|l| l.part_number == "PLATE").unwrap();
        assert_eq!(plate.part_type, PartType::Make);
    }

    #[test]
    fn test_empty_resolution_is_an_error() {
        let importer = BomImporter::with_defaults();
        let result = importer.import("T-100", &[], &HashMap::new());

        assert!(matches!(result, Err(PicklistError::EmptyBom { .. })));
    }

    #[test]
    fn test_invalid_rows_become_warnings() {
        let rows = vec![
            row(0, "DOC", 1.0),
            row(1, "", 1.0), // dropped
            row(1, "PART", 2.0),
        ];

        let importer = BomImporter::with_defaults();
        let bom = importer.import("T-100", &rows, &HashMap::new()).unwrap();

        assert_eq!(bom.leaf_parts.len(), 1);
        assert_eq!(bom.leaf_parts[0].part_number, "PART");
        assert!(!bom.warnings.is_empty());
    }

    #[test]
    fn test_depth_advisory_warning() {
        let rows = vec![
            row(0, "A", 1.0),
            row(1, "B", 1.0),
            row(2, "C", 1.0),
            row(3, "D", 1.0),
            row(4, "E", 1.0),
            row(5, "F", 1.0),
            row(6, "G", 1.0),
        ];

        let importer = BomImporter::with_defaults();
        let bom = importer.import("T-100", &rows, &HashMap::new()).unwrap();

        assert!(bom
            .warnings
            .iter()
            .any(|w| w.contains("exceeds expected maximum")));
        // Deep input still resolves; the warning is advisory only.
        assert_eq!(bom.leaf_parts.len(), 1);
        assert_eq!(bom.leaf_parts[0].part_number, "G");
    }
}
