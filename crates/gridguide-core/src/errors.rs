//! Error types for grid guide placement.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum GuideError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Invalid or unrecognized grid parameters.
///
/// Raised before any computation happens; no partial guide sequence is ever
/// produced alongside one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("Cell count {count} exceeds the limit of {max}")]
    TooManyCells { count: u32, max: u32 },

    #[error("Unit scale must be positive, got {value}")]
    NonPositiveUnitScale { value: f64 },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("Canvas {dimension} must be positive and finite, got {value}")]
    InvalidCanvas { dimension: &'static str, value: f64 },

    #[error("Unknown {axis} alignment: {value:?}")]
    UnknownAlignment { axis: &'static str, value: String },

    #[error("Unknown axis tab: {value:?} (expected \"columns\" or \"rows\")")]
    UnknownAxis { value: String },

    #[error("Unknown unit: {value:?}")]
    UnknownUnit { value: String },

    #[error("Invalid number for {option}: {value:?}")]
    InvalidNumber { option: String, value: String },

    #[error("Invalid boolean for {option}: {value:?}")]
    InvalidBool { option: String, value: String },

    #[error("Invalid length for {option}: {value:?}")]
    InvalidLength { option: String, value: String },

    #[error("Unknown option: {name}")]
    UnknownOption { name: String },

    #[error("Option {option} needs a value")]
    MissingValue { option: String },

    #[error("Missing required option: {name}")]
    MissingOption { name: &'static str },
}

/// Errors while handing guides to a sink or serializing them.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {reason}")]
    Json { reason: String },
}
