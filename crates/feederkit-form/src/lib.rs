//! # FeederKit Form
//!
//! The configuration form for one feeder type: machine information inputs,
//! dimension hotspots with their editor, and the export/advance actions
//! gated on completeness. Also hosts the report renderer, the feeder set
//! wizard, the best-effort bulk import and the collaborator traits for
//! report export and 3D preview.

pub mod collaborators;
pub mod editor;
pub mod error;
pub mod hotspot;
pub mod import;
pub mod report;
pub mod view;
pub mod wizard;

pub use collaborators::{
    LoggingModelPreview, ModelPreview, ModelRef, ReportExporter, TextReportExporter,
};
pub use editor::DimensionEditor;
pub use error::{FormError, FormResult};
pub use hotspot::{Hotspot, HotspotStatus, SummaryRow};
pub use import::{parse_pasted, ImportResult};
pub use report::{ConfigurationReport, ReportField};
pub use view::{ActionOutcome, FormView, Incomplete};
pub use wizard::Wizard;
