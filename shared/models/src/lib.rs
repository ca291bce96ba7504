//! # Picklist BOM Domain Models
//!
//! This module contains the domain models for the pick-list BOM resolution
//! and merge engine. All models implement serialization/deserialization with
//! serde and field validation with the validator crate.
//!
//! ## Key Models
//!
//! - **HierarchyRow**: one row of a pre-order-linearized parts hierarchy
//! - **ResolvedLeafPart**: a leaf part with its multiplied-through quantity
//!   and assembly-group path
//! - **ParsedBom**: one tool/product variant's fully resolved parts list
//! - **MergedLineItem**: a consolidated part requirement across variants
//! - **BomTemplate**: fingerprint catalog record for template deduplication
//!
//! ## Validation
//!
//! Input rows validate part-number length and positive quantities; resolved
//! records validate that emitted quantities never drop below one.

pub mod bom;
pub mod hierarchy;
pub mod merge;


pub use bom::*;
pub use hierarchy::*;
pub use merge::*;
