//! Error handling for FeederKit
//!
//! Provides error types for the layers of the core crate:
//! - Input errors (values rejected by the input policy or unknown ids)
//! - Catalog definition errors (malformed dimension/field definitions)
//!
//! Incomplete records are not errors. Export and advance report them as a
//! rejected action outcome instead.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Input error type
///
/// Raised when a user-entered value does not satisfy the input policy of the
/// field or dimension it targets.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Value is not a finite decimal number
    #[error("Value for {field} must be a number (got {value})")]
    NotANumber {
        /// The field or dimension id.
        field: String,
        /// The rejected input.
        value: String,
    },

    /// Negative values are not accepted
    #[error("Value for {field} must not be negative (got {value})")]
    Negative {
        /// The field or dimension id.
        field: String,
        /// The rejected input.
        value: String,
    },

    /// Value exceeds the configured maximum
    #[error("Value for {field} must not exceed {max} (got {value})")]
    AboveMaximum {
        /// The field or dimension id.
        field: String,
        /// The rejected input.
        value: String,
        /// The configured upper bound.
        max: f64,
    },

    /// Select field received a value outside its option list
    #[error("'{value}' is not a valid option for {field}")]
    NotAnOption {
        /// The field id.
        field: String,
        /// The rejected input.
        value: String,
    },

    /// Dimension id is not part of the catalog
    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    /// Machine info field id is not part of the catalog
    #[error("Unknown machine info field: {0}")]
    UnknownField(String),
}

/// Catalog definition error type
///
/// Represents structural problems in a feeder catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogDefinitionError {
    /// Feeder type id is empty or unusable as a file name
    #[error("Invalid feeder type id '{0}'")]
    InvalidFeederType(String),

    /// An id is empty or whitespace
    #[error("Empty {kind} id in catalog {feeder_type}")]
    EmptyId {
        /// The feeder type of the catalog.
        feeder_type: String,
        /// "dimension" or "field".
        kind: &'static str,
    },

    /// Two dimensions share an id
    #[error("Duplicate dimension {id} in catalog {feeder_type}")]
    DuplicateDimension {
        /// The feeder type of the catalog.
        feeder_type: String,
        /// The duplicated id.
        id: String,
    },

    /// Two machine info fields share an id
    #[error("Duplicate field {id} in catalog {feeder_type}")]
    DuplicateField {
        /// The feeder type of the catalog.
        feeder_type: String,
        /// The duplicated id.
        id: String,
    },

    /// Overlay coordinate outside 0..=100
    #[error("Coordinate {axis}={value} of dimension {id} is outside 0-100")]
    CoordinateOutOfRange {
        /// The dimension id.
        id: String,
        /// "x" or "y".
        axis: &'static str,
        /// The offending coordinate.
        value: f64,
    },

    /// Select field without options
    #[error("Select field {0} has no options")]
    SelectWithoutOptions(String),
}
