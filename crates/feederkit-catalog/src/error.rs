//! Error types for the catalog crate.
//!
//! This module provides structured error types for catalog lookup, catalog
//! file loading and catalog validation.

use feederkit_core::CatalogDefinitionError;
use std::io;
use thiserror::Error;

/// Errors that can occur while resolving or loading catalogs.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No catalog is registered for the feeder type.
    #[error("Unknown feeder type: {0}")]
    UnknownFeederType(String),

    /// No feeder set is registered under this id.
    #[error("Unknown feeder set: {0}")]
    UnknownSet(String),

    /// A feeder set refers to a feeder type without a catalog.
    #[error("Feeder set {set} refers to unknown feeder type {feeder_type}")]
    UnknownSetMember { set: String, feeder_type: String },

    /// A feeder set has no members.
    #[error("Feeder set {0} is empty")]
    EmptySet(String),

    /// The catalog file extension is not supported.
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// A catalog failed validation.
    #[error("Invalid catalog: {0}")]
    Invalid(#[from] CatalogDefinitionError),
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::UnknownFeederType("vibratory-plate".to_string());
        assert_eq!(err.to_string(), "Unknown feeder type: vibratory-plate");

        let err = CatalogError::UnknownSetMember {
            set: "set-d".to_string(),
            feeder_type: "conveyor".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Feeder set set-d refers to unknown feeder type conveyor"
        );
    }

    #[test]
    fn test_error_conversion() {
        let def_err = CatalogDefinitionError::SelectWithoutOptions("rotation".to_string());
        let err: CatalogError = def_err.into();
        assert!(matches!(err, CatalogError::Invalid(_)));

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: CatalogError = io_err.into();
        assert!(matches!(err, CatalogError::IoError(_)));
    }
}
