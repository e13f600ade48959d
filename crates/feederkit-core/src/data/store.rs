//! Feeder record store
//!
//! The only shared mutable state of a configuration session: one
//! [`FeederRecord`] per feeder type plus the wizard cursor. All operations
//! are synchronous and complete before they return.
//!
//! Writes replace whole records. Single-value edits go through
//! [`FeederRecordStore::update_field`], which does the read-modify-write
//! inside the store so callers never rebuild a record by hand.

use super::record::{FeederRecord, FieldPath};
use super::FeederTypeId;
use std::collections::BTreeMap;

/// Feeder type the wizard starts on
pub const DEFAULT_FEEDER_TYPE: &str = "bowl-feeder";

/// Wizard navigation bookkeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardCursor {
    pub current: FeederTypeId,
    pub next: Option<FeederTypeId>,
    pub previous: Vec<FeederTypeId>,
}

impl Default for WizardCursor {
    fn default() -> Self {
        Self {
            current: FeederTypeId::from(DEFAULT_FEEDER_TYPE),
            next: None,
            previous: Vec::new(),
        }
    }
}

/// Keyed feeder records and the wizard cursor
#[derive(Debug, Clone, Default)]
pub struct FeederRecordStore {
    records: BTreeMap<FeederTypeId, FeederRecord>,
    cursor: WizardCursor,
}

impl FeederRecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with blank machine info for the bowl and
    /// linear feeders
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.records.insert(
            FeederTypeId::from("bowl-feeder"),
            FeederRecord::new()
                .with_machine_info("machineNo", "")
                .with_machine_info("rotation", "")
                .with_machine_info("uph", ""),
        );
        store.records.insert(
            FeederTypeId::from("linear-feeder"),
            FeederRecord::new().with_machine_info("linearNo", ""),
        );
        store
    }

    /// Current record for `feeder_type`, or an empty record if none exists
    ///
    /// Never inserts anything.
    pub fn get(&self, feeder_type: &FeederTypeId) -> FeederRecord {
        self.records.get(feeder_type).cloned().unwrap_or_default()
    }

    /// Borrow the stored record without cloning
    pub fn record(&self, feeder_type: &FeederTypeId) -> Option<&FeederRecord> {
        self.records.get(feeder_type)
    }

    /// Replace the record for `feeder_type` wholesale
    pub fn upsert(&mut self, feeder_type: &FeederTypeId, record: FeederRecord) {
        tracing::debug!(
            feeder_type = %feeder_type,
            machine_info = record.machine_info.len(),
            dimensions = record.dimensions.len(),
            "Upserting feeder record"
        );
        self.records.insert(feeder_type.clone(), record);
    }

    /// Reset the record for `feeder_type` to empty mappings
    pub fn clear(&mut self, feeder_type: &FeederTypeId) {
        tracing::debug!(feeder_type = %feeder_type, "Clearing feeder record");
        self.upsert(feeder_type, FeederRecord::default());
    }

    /// Write one value, keeping every other value of the record
    pub fn update_field(
        &mut self,
        feeder_type: &FeederTypeId,
        path: FieldPath,
        value: impl Into<String>,
    ) {
        let value = value.into();
        tracing::trace!(feeder_type = %feeder_type, path = %path, value = %value, "Updating field");
        self.records
            .entry(feeder_type.clone())
            .or_default()
            .set(path, value);
    }

    /// Drop one value; returns the removed value
    pub fn remove_field(&mut self, feeder_type: &FeederTypeId, path: &FieldPath) -> Option<String> {
        let removed = self.records.get_mut(feeder_type)?.remove(path);
        if removed.is_some() {
            tracing::trace!(feeder_type = %feeder_type, path = %path, "Removed field");
        }
        removed
    }

    /// Feeder types that have a stored record
    pub fn feeder_types(&self) -> impl Iterator<Item = &FeederTypeId> {
        self.records.keys()
    }

    pub fn cursor(&self) -> &WizardCursor {
        &self.cursor
    }

    pub fn set_cursor(&mut self, current: FeederTypeId) {
        self.cursor.current = current;
    }

    pub fn set_next(&mut self, next: Option<FeederTypeId>) {
        self.cursor.next = next;
    }

    pub fn push_previous(&mut self, feeder_type: FeederTypeId) {
        self.cursor.previous.push(feeder_type);
    }

    /// Remove and return the most recently visited feeder type
    pub fn pop_previous(&mut self) -> Option<FeederTypeId> {
        self.cursor.previous.pop()
    }

    /// Forget every visited feeder type
    pub fn clear_previous(&mut self) {
        self.cursor.previous.clear();
    }
}
