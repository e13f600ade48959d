//! # FeederKit Core
//!
//! Core types and rules for FeederKit.
//! Provides the feeder data model, the shared record store with its wizard
//! cursor, the completeness predicates that gate export and navigation,
//! dimension input validation and transient notifications.

pub mod data;
pub mod error;
pub mod notice;
pub mod types;

pub use data::{
    all_dimensions_filled, is_set, machine_info_complete, missing_dimensions,
    missing_machine_info, DimensionDefinition, FeederCatalog, FeederRecord, FeederRecordStore,
    FeederTypeId, FieldKind, FieldPath, InputPolicy, MachineInfoFieldDefinition, WizardCursor,
    DEFAULT_FEEDER_TYPE,
};

pub use error::{CatalogDefinitionError, InputError};

pub use notice::{Notice, NoticeDelays, NoticeLevel, Notifier};

pub use types::{shared, Shared, ValueMap};
