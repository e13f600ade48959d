//! Completeness predicates
//!
//! Export and advance are both gated on these two checks. A value is set
//! when it is present and non-blank after trimming; `"0"` is a valid answer
//! ("not applicable") and counts as set.

use super::catalog::{DimensionDefinition, MachineInfoFieldDefinition};
use super::record::FeederRecord;

/// Present and non-blank after trimming
pub fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Every required machine info field has a set value
pub fn machine_info_complete(record: &FeederRecord, fields: &[MachineInfoFieldDefinition]) -> bool {
    fields
        .iter()
        .filter(|f| f.required)
        .all(|f| is_set(record.machine_info_value(&f.id)))
}

/// Every catalog dimension has a set value
pub fn all_dimensions_filled(record: &FeederRecord, dimensions: &[DimensionDefinition]) -> bool {
    dimensions
        .iter()
        .all(|d| is_set(record.dimension_value(&d.id)))
}

/// Ids of required fields that are not set, in catalog order
pub fn missing_machine_info<'a>(
    record: &FeederRecord,
    fields: &'a [MachineInfoFieldDefinition],
) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|f| f.required && !is_set(record.machine_info_value(&f.id)))
        .map(|f| f.id.as_str())
        .collect()
}

/// Ids of dimensions that are not set, in catalog order
pub fn missing_dimensions<'a>(
    record: &FeederRecord,
    dimensions: &'a [DimensionDefinition],
) -> Vec<&'a str> {
    dimensions
        .iter()
        .filter(|d| !is_set(record.dimension_value(&d.id)))
        .map(|d| d.id.as_str())
        .collect()
}
