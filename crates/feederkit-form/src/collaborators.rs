//! External collaborators
//!
//! The form view hands finished data to two outside consumers: a report
//! exporter (print/PDF/file) and a 3D preview. Neither is interpreted by
//! the core; both sit behind traits so hosts can plug their own.

use crate::report::ConfigurationReport;
use anyhow::Context;
use feederkit_core::{FeederTypeId, ValueMap};
use std::path::{Path, PathBuf};

/// Receives a report once both completeness checks pass
pub trait ReportExporter {
    fn export(&self, report: &ConfigurationReport) -> anyhow::Result<()>;
}

/// Renders the 3D reference model of a feeder type
pub trait ModelPreview {
    fn preview(&self, model: &ModelRef, dimensions: &ValueMap) -> anyhow::Result<()>;
}

/// Reference model asset of a feeder type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRef {
    pub feeder_type: FeederTypeId,
    pub path: PathBuf,
}

impl ModelRef {
    /// `<model_dir>/<feeder-type>.glb`
    pub fn for_feeder(model_dir: &Path, feeder_type: &FeederTypeId) -> Self {
        Self {
            feeder_type: feeder_type.clone(),
            path: model_dir.join(format!("{}.glb", feeder_type)),
        }
    }
}

/// Writes reports as plain text files into a directory
#[derive(Debug, Clone)]
pub struct TextReportExporter {
    dir: PathBuf,
}

impl TextReportExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn report_path(&self, report: &ConfigurationReport) -> PathBuf {
        self.dir.join(report.file_name())
    }
}

impl ReportExporter for TextReportExporter {
    fn export(&self, report: &ConfigurationReport) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create report directory {}", self.dir.display()))?;
        let path = self.report_path(report);
        std::fs::write(&path, format!("{}\n", report))
            .with_context(|| format!("Cannot write report {}", path.display()))?;
        tracing::info!(path = %path.display(), "Report written");
        Ok(())
    }
}

/// Preview that only logs what would be rendered
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingModelPreview;

impl ModelPreview for LoggingModelPreview {
    fn preview(&self, model: &ModelRef, dimensions: &ValueMap) -> anyhow::Result<()> {
        if !model.path.exists() {
            tracing::warn!(path = %model.path.display(), "Model asset not found");
        }
        tracing::info!(
            feeder_type = %model.feeder_type,
            path = %model.path.display(),
            dimensions = dimensions.len(),
            "3D preview requested"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use feederkit_core::{FeederCatalog, FeederRecord};

    #[test]
    fn test_model_ref_path() {
        let model = ModelRef::for_feeder(Path::new("assets/models"), &"hopper".into());
        assert_eq!(model.path, PathBuf::from("assets/models/hopper.glb"));
    }

    #[test]
    fn test_text_exporter_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = TextReportExporter::new(dir.path().join("reports"));
        let catalog = FeederCatalog::new("hopper", "Hopper Configuration Report");
        let at = Local.with_ymd_and_hms(2026, 10, 17, 14, 30, 0).unwrap();
        let report = ConfigurationReport::build(&catalog, &FeederRecord::new(), at);

        exporter.export(&report).unwrap();

        let written = std::fs::read_to_string(exporter.report_path(&report)).unwrap();
        assert!(written.starts_with("Hopper Configuration Report"));
        assert!(written.contains("Generated on 17/10/2026 at 14:30"));
    }
}
