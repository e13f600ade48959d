//! Configuration report
//!
//! The printable summary of a completed feeder record: title, machine
//! information, every dimension with its value, and a generation timestamp.

use crate::hotspot::SummaryRow;
use chrono::{DateTime, Local};
use feederkit_core::{FeederCatalog, FeederRecord, FeederTypeId};
use std::fmt;

/// Labelled machine information value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportField {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationReport {
    pub title: String,
    pub feeder_type: FeederTypeId,
    pub machine_info: Vec<ReportField>,
    pub dimensions: Vec<SummaryRow>,
    pub generated_at: DateTime<Local>,
}

impl ConfigurationReport {
    pub fn build(
        catalog: &FeederCatalog,
        record: &FeederRecord,
        generated_at: DateTime<Local>,
    ) -> Self {
        let machine_info = catalog
            .machine_info_fields
            .iter()
            .map(|field| ReportField {
                label: field.label.clone(),
                value: record
                    .machine_info_value(&field.id)
                    .unwrap_or_default()
                    .trim()
                    .to_string(),
            })
            .collect();

        let dimensions = catalog
            .dimensions
            .iter()
            .map(|dim| SummaryRow::new(dim, record.dimension_value(&dim.id)))
            .collect();

        Self {
            title: catalog.title.clone(),
            feeder_type: catalog.feeder_type.clone(),
            machine_info,
            dimensions,
            generated_at,
        }
    }

    /// Footer line, e.g. "Generated on 17/10/2026 at 09:05"
    pub fn footer(&self) -> String {
        format!(
            "Generated on {}",
            self.generated_at.format("%d/%m/%Y at %H:%M")
        )
    }

    pub fn file_name(&self) -> String {
        format!("{}-report.txt", self.feeder_type)
    }
}

impl fmt::Display for ConfigurationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.len()))?;
        writeln!(f)?;

        writeln!(f, "Machine Information")?;
        for field in &self.machine_info {
            writeln!(f, "  {:<16} {}", field.label, field.value)?;
        }
        writeln!(f)?;

        writeln!(f, "Dimensions Summary")?;
        for row in &self.dimensions {
            writeln!(
                f,
                "  {:<3} {:<28} {}",
                row.id,
                row.description,
                row.display_value()
            )?;
        }
        writeln!(f)?;

        write!(f, "{}", self.footer())
    }
}
