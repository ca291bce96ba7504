//! BOM (Bill of Materials) Engine
//!
//! Hierarchy resolution, cross-BOM merge, fingerprinting, and quantity
//! normalization for multi-level bills of materials. All functions here are
//! pure, synchronous transformations over in-memory sequences; ingestion of
//! source tables and persistence of the results live outside this crate.

pub mod fingerprint;
pub mod importer;
pub mod merger;
pub mod numeric;
pub mod resolver;

pub use fingerprint::{find_matching_template, fingerprint, fingerprint_bom, fingerprint_digest};
pub use importer::BomImporter;
pub use merger::merge;
pub use numeric::parse_quantity;
pub use resolver::{collapse, resolve, CollapsedPart};
