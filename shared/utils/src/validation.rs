use regex::Regex;
use validator::{Validate, ValidationErrors};

use crate::error::{PicklistError, PicklistResult};
use picklist_models::HierarchyRow;

pub fn validate_model<T: Validate>(model: &T) -> PicklistResult<()> {
    match model.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_messages = format_validation_errors(&errors);
            Err(PicklistError::validation("model", error_messages))
        }
    }
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match &error.code {
                std::borrow::Cow::Borrowed("length") => {
                    format!("Length validation failed for field '{}'", field)
                }
                std::borrow::Cow::Borrowed("range") => {
                    format!("Value out of range for field '{}'", field)
                }
                _ => format!("Validation failed for field '{}': {}", field, error.code),
            };
            messages.push(message);
        }
    }

    messages.join(", ")
}

/// Pre-filters hierarchy rows before resolution.
///
/// Rows that fail field validation are dropped with a warning rather than
/// passed through; the resolver itself treats every row it receives as
/// well-formed. Odd-looking part numbers are warned about but kept.
pub fn validate_rows(rows: &[HierarchyRow]) -> (Vec<HierarchyRow>, Vec<String>) {
    let part_number_re = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ._/-]*$").unwrap();

    let mut valid = Vec::with_capacity(rows.len());
    let mut warnings = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        if let Err(errors) = row.validate() {
            warnings.push(format!(
                "Row {}: dropped - {}",
                idx + 1,
                format_validation_errors(&errors)
            ));
            continue;
        }

        if !part_number_re.is_match(&row.part_number) {
            warnings.push(format!(
                "Row {}: unusual part number '{}'",
                idx + 1,
                row.part_number
            ));
        }

        valid.push(row.clone());
    }

    (valid, warnings)
}
