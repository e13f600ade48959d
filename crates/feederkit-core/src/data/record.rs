//! Feeder records
//!
//! A record holds the user's answers for one feeder type. Values are kept as
//! the text the user entered; a value counts as set only when it is
//! non-blank after trimming.

use crate::types::ValueMap;
use serde::{Deserialize, Serialize};

/// Machine information and dimension values of one feeder type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeederRecord {
    #[serde(default)]
    pub machine_info: ValueMap,
    #[serde(default)]
    pub dimensions: ValueMap,
}

impl FeederRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_machine_info(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.machine_info.insert(id.into(), value.into());
        self
    }

    pub fn with_dimension(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.dimensions.insert(id.into(), value.into());
        self
    }

    /// True when both mappings are empty
    pub fn is_empty(&self) -> bool {
        self.machine_info.is_empty() && self.dimensions.is_empty()
    }

    /// Value stored at `path`, if any
    pub fn value(&self, path: &FieldPath) -> Option<&str> {
        match path {
            FieldPath::MachineInfo(id) => self.machine_info.get(id),
            FieldPath::Dimension(id) => self.dimensions.get(id),
        }
        .map(String::as_str)
    }

    pub fn machine_info_value(&self, id: &str) -> Option<&str> {
        self.machine_info.get(id).map(String::as_str)
    }

    pub fn dimension_value(&self, id: &str) -> Option<&str> {
        self.dimensions.get(id).map(String::as_str)
    }

    pub(crate) fn set(&mut self, path: FieldPath, value: String) {
        match path {
            FieldPath::MachineInfo(id) => self.machine_info.insert(id, value),
            FieldPath::Dimension(id) => self.dimensions.insert(id, value),
        };
    }

    pub(crate) fn remove(&mut self, path: &FieldPath) -> Option<String> {
        match path {
            FieldPath::MachineInfo(id) => self.machine_info.remove(id),
            FieldPath::Dimension(id) => self.dimensions.remove(id),
        }
    }
}

/// Address of a single value inside a [`FeederRecord`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldPath {
    MachineInfo(String),
    Dimension(String),
}

impl FieldPath {
    pub fn machine_info(id: impl Into<String>) -> Self {
        Self::MachineInfo(id.into())
    }

    pub fn dimension(id: impl Into<String>) -> Self {
        Self::Dimension(id.into())
    }

    pub fn id(&self) -> &str {
        match self {
            Self::MachineInfo(id) | Self::Dimension(id) => id,
        }
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MachineInfo(id) => write!(f, "machineInfo.{}", id),
            Self::Dimension(id) => write!(f, "dimensions.{}", id),
        }
    }
}
