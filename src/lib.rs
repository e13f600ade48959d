//! # FeederKit
//!
//! Configuration tool for part feeders. For each feeder type (bowl feeder,
//! linear feeder, hopper) the user fills in machine information and the
//! named dimensions marked on a reference drawing, then exports a report or
//! moves on to the next feeder of a set.
//!
//! ## Architecture
//!
//! FeederKit is organized as a workspace with multiple crates:
//!
//! 1. **feederkit-core** - Record store, wizard cursor, completeness checks, input policy, notices
//! 2. **feederkit-catalog** - Built-in feeder catalogs and sets, catalog files
//! 3. **feederkit-settings** - Configuration file handling
//! 4. **feederkit-form** - Form view, dimension editor, reports, wizard, bulk import
//! 5. **feederkit** - Console front end that integrates all crates

pub mod shell;

pub use feederkit_catalog::{CatalogError, CatalogRegistry, FeederSet};
pub use feederkit_core::{
    all_dimensions_filled, machine_info_complete, shared, DimensionDefinition, FeederCatalog,
    FeederRecord, FeederRecordStore, FeederTypeId, FieldKind, FieldPath, InputError,
    InputPolicy, MachineInfoFieldDefinition, Notice, NoticeLevel, Notifier, Shared,
    WizardCursor,
};
pub use feederkit_form::{
    ActionOutcome, ConfigurationReport, FormError, FormView, Hotspot, HotspotStatus,
    LoggingModelPreview, ModelPreview, ModelRef, ReportExporter, TextReportExporter, Wizard,
};
pub use feederkit_settings::{Config, SettingsManager};
pub use shell::Shell;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Log lines go to stderr so they do not interleave with console output on
/// stdout. `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
