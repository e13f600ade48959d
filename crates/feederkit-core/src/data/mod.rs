//! Feeder data model
//!
//! This module provides:
//! - Feeder type identifiers
//! - Catalog definitions (machine info fields and hotspot dimensions)
//! - Feeder records and the record store with its wizard cursor
//! - Completeness predicates and numeric input validation

pub mod catalog;
pub mod completeness;
pub mod input;
pub mod record;
pub mod store;

use serde::{Deserialize, Serialize};

pub use catalog::{DimensionDefinition, FeederCatalog, FieldKind, MachineInfoFieldDefinition};
pub use completeness::{
    all_dimensions_filled, is_set, machine_info_complete, missing_dimensions,
    missing_machine_info,
};
pub use input::InputPolicy;
pub use record::{FeederRecord, FieldPath};
pub use store::{FeederRecordStore, WizardCursor, DEFAULT_FEEDER_TYPE};

/// Identifier of a feeder type, e.g. `bowl-feeder`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeederTypeId(pub String);

impl FeederTypeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FeederTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FeederTypeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FeederTypeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feeder_type_id_display() {
        let id = FeederTypeId::from("linear-feeder");
        assert_eq!(id.to_string(), "linear-feeder");
        assert_eq!(id.as_str(), "linear-feeder");
    }

    #[test]
    fn test_feeder_type_id_serializes_as_string() {
        let id = FeederTypeId::from("hopper");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"hopper\"");
    }
}
