use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum PicklistError {
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Import error: {message}")]
    Import { message: String },

    #[error("No valid line items found for tool model '{tool_model}'")]
    EmptyBom { tool_model: String },
}

impl PicklistError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn import(message: impl Into<String>) -> Self {
        Self::Import {
            message: message.into(),
        }
    }

    pub fn empty_bom(tool_model: impl Into<String>) -> Self {
        Self::EmptyBom {
            tool_model: tool_model.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::Import { .. } => "IMPORT_ERROR",
            Self::EmptyBom { .. } => "EMPTY_BOM",
        }
    }
}

pub type PicklistResult<T> = Result<T, PicklistError>;

impl From<serde_json::Error> for PicklistError {
    fn from(error: serde_json::Error) -> Self {
        Self::validation("JSON", error.to_string())
    }
}
