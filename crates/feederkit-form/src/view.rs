//! Configuration form view
//!
//! Binds one feeder catalog to its record in the shared store. Every edit is
//! written straight to the store; export and advance re-check completeness
//! immediately before acting and leave the record untouched when rejected.

use crate::collaborators::{ModelPreview, ModelRef, ReportExporter};
use crate::editor::DimensionEditor;
use crate::error::{FormError, FormResult};
use crate::hotspot::{Hotspot, HotspotStatus, SummaryRow};
use crate::import::{parse_pasted, ImportResult};
use crate::report::ConfigurationReport;
use feederkit_core::{
    all_dimensions_filled, is_set, machine_info_complete, missing_dimensions, missing_machine_info,
    FeederCatalog, FeederRecord, FeederRecordStore, FeederTypeId, FieldPath, InputError,
    InputPolicy, Notifier, Shared,
};
use std::path::Path;

/// Which completeness check blocked an action, with the offending ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incomplete {
    MachineInfo(Vec<String>),
    Dimensions(Vec<String>),
}

/// Result of a gated action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action ran
    Performed,
    /// Completeness check failed; nothing changed
    Rejected(Incomplete),
    /// The action passed the gate but a collaborator failed
    Failed(String),
}

impl ActionOutcome {
    pub fn is_performed(&self) -> bool {
        matches!(self, Self::Performed)
    }
}

#[derive(Debug, Clone, Copy)]
enum GatedAction {
    Export,
    Advance,
}

impl GatedAction {
    fn verb(self) -> &'static str {
        match self {
            Self::Export => "printing",
            Self::Advance => "proceeding",
        }
    }
}

/// Form for one feeder type
pub struct FormView {
    store: Shared<FeederRecordStore>,
    notifier: Shared<Notifier>,
    catalog: FeederCatalog,
    policy: InputPolicy,
    editor: Option<DimensionEditor>,
}

impl FormView {
    pub fn new(
        store: Shared<FeederRecordStore>,
        notifier: Shared<Notifier>,
        catalog: FeederCatalog,
    ) -> Self {
        Self {
            store,
            notifier,
            catalog,
            policy: InputPolicy::default(),
            editor: None,
        }
    }

    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn feeder_type(&self) -> &FeederTypeId {
        &self.catalog.feeder_type
    }

    pub fn catalog(&self) -> &FeederCatalog {
        &self.catalog
    }

    /// Current record of this feeder type
    pub fn record(&self) -> FeederRecord {
        self.store.borrow().get(self.feeder_type())
    }

    /// Validate and store one machine information value
    pub fn set_machine_info(&mut self, field_id: &str, value: &str) -> FormResult<()> {
        let field = self
            .catalog
            .field(field_id)
            .ok_or_else(|| InputError::UnknownField(field_id.to_string()))?;
        let value = self.policy.normalize_field(field, value)?;
        self.store.borrow_mut().update_field(
            &self.catalog.feeder_type,
            FieldPath::machine_info(field_id),
            value,
        );
        Ok(())
    }

    /// Open the editor for a dimension, pre-filled with its current value
    pub fn open_dimension(&mut self, dimension_id: &str) -> FormResult<&DimensionEditor> {
        let definition = self
            .catalog
            .dimension(dimension_id)
            .ok_or_else(|| InputError::UnknownDimension(dimension_id.to_string()))?;
        let existing = self.record().dimensions.get(dimension_id).cloned();
        let editor = DimensionEditor::new(
            &definition.id,
            &definition.description,
            existing.as_deref(),
        );
        tracing::debug!(feeder_type = %self.catalog.feeder_type, dimension = dimension_id, "Editing dimension");
        Ok(self.editor.insert(editor))
    }

    pub fn editor(&self) -> Option<&DimensionEditor> {
        self.editor.as_ref()
    }

    /// Replace the editor's input buffer
    pub fn set_input(&mut self, text: &str) -> FormResult<()> {
        let editor = self.editor.as_mut().ok_or(FormError::EditorNotOpen)?;
        editor.input = text.to_string();
        Ok(())
    }

    /// Write the editor's value to the record and close the editor
    ///
    /// Blank input unsets the dimension. Rejected input keeps the editor
    /// open and shows a failure notice.
    pub fn confirm(&mut self) -> FormResult<HotspotStatus> {
        let editor = self.editor.as_ref().ok_or(FormError::EditorNotOpen)?;
        let id = editor.dimension_id.clone();
        let path = FieldPath::dimension(&id);

        let accepted = match self.policy.normalize_dimension(&id, &editor.input) {
            Ok(accepted) => accepted,
            Err(e) => {
                self.notifier.borrow_mut().failure(e.to_string());
                return Err(e.into());
            }
        };

        let mut store = self.store.borrow_mut();
        let status = match accepted {
            Some(value) => {
                store.update_field(&self.catalog.feeder_type, path, value);
                HotspotStatus::Set
            }
            None => {
                store.remove_field(&self.catalog.feeder_type, &path);
                HotspotStatus::Unset
            }
        };
        drop(store);

        self.editor = None;
        Ok(status)
    }

    /// Close the editor without writing
    pub fn cancel(&mut self) -> HotspotStatus {
        let Some(editor) = self.editor.take() else {
            return HotspotStatus::Unset;
        };
        if is_set(self.record().dimension_value(&editor.dimension_id)) {
            HotspotStatus::Set
        } else {
            HotspotStatus::Unset
        }
    }

    pub fn hotspots(&self) -> Vec<Hotspot> {
        let record = self.record();
        let editing = self.editor.as_ref().map(|e| e.dimension_id.as_str());
        self.catalog
            .dimensions
            .iter()
            .map(|d| Hotspot::new(d, record.dimension_value(&d.id), editing == Some(d.id.as_str())))
            .collect()
    }

    pub fn summary(&self) -> Vec<SummaryRow> {
        let record = self.record();
        self.catalog
            .dimensions
            .iter()
            .map(|d| SummaryRow::new(d, record.dimension_value(&d.id)))
            .collect()
    }

    pub fn machine_info_complete(&self) -> bool {
        machine_info_complete(&self.record(), &self.catalog.machine_info_fields)
    }

    pub fn all_dimensions_filled(&self) -> bool {
        all_dimensions_filled(&self.record(), &self.catalog.dimensions)
    }

    /// Run both completeness checks; on failure show the notice and report
    /// what is missing
    fn check_complete(&self, action: GatedAction) -> Result<(), Incomplete> {
        let record = self.record();

        if !machine_info_complete(&record, &self.catalog.machine_info_fields) {
            let missing = missing_machine_info(&record, &self.catalog.machine_info_fields);
            tracing::warn!(feeder_type = %self.catalog.feeder_type, ?missing, ?action, "Machine information incomplete");
            self.notifier.borrow_mut().failure(format!(
                "Please fill in all required machine information before {}.",
                action.verb()
            ));
            return Err(Incomplete::MachineInfo(
                missing.into_iter().map(str::to_string).collect(),
            ));
        }

        if !all_dimensions_filled(&record, &self.catalog.dimensions) {
            let missing = missing_dimensions(&record, &self.catalog.dimensions);
            tracing::warn!(feeder_type = %self.catalog.feeder_type, ?missing, ?action, "Dimensions incomplete");
            self.notifier.borrow_mut().failure(format!(
                "Please fill in all dimensions before {}.",
                action.verb()
            ));
            return Err(Incomplete::Dimensions(
                missing.into_iter().map(str::to_string).collect(),
            ));
        }

        Ok(())
    }

    /// Build the report for the current record
    pub fn report(&self) -> ConfigurationReport {
        ConfigurationReport::build(&self.catalog, &self.record(), chrono::Local::now())
    }

    /// Hand the report to the exporter if the record is complete
    pub fn export(&self, exporter: &dyn ReportExporter) -> ActionOutcome {
        if let Err(incomplete) = self.check_complete(GatedAction::Export) {
            return ActionOutcome::Rejected(incomplete);
        }

        let report = self.report();
        match exporter.export(&report) {
            Ok(()) => {
                self.notifier
                    .borrow_mut()
                    .success(format!("{} exported.", report.title));
                ActionOutcome::Performed
            }
            Err(e) => {
                tracing::error!(feeder_type = %self.catalog.feeder_type, error = %e, "Report export failed");
                self.notifier
                    .borrow_mut()
                    .failure(format!("Failed to export report: {}", e));
                ActionOutcome::Failed(e.to_string())
            }
        }
    }

    /// Move the wizard on to `next` if the record is complete
    ///
    /// The cursor records this feeder type as current, `next` as next, and
    /// this feeder type on the back stack. Without a `next` the wizard is
    /// finished and the cursor is left alone.
    pub fn advance(&self, next: Option<&FeederTypeId>) -> ActionOutcome {
        if let Err(incomplete) = self.check_complete(GatedAction::Advance) {
            return ActionOutcome::Rejected(incomplete);
        }

        let Some(next) = next else {
            self.notifier
                .borrow_mut()
                .success("All feeders are configured.");
            return ActionOutcome::Performed;
        };

        let this = self.catalog.feeder_type.clone();
        {
            let mut store = self.store.borrow_mut();
            store.set_cursor(this.clone());
            store.set_next(Some(next.clone()));
            store.push_previous(this.clone());
        }
        tracing::info!(from = %this, to = %next, "Advancing wizard");
        ActionOutcome::Performed
    }

    /// Feeder type to go back to, if any; performs no validation
    pub fn back(&self) -> Option<FeederTypeId> {
        let previous = self.store.borrow_mut().pop_previous();
        if let Some(previous) = &previous {
            tracing::info!(from = %self.catalog.feeder_type, to = %previous, "Going back");
        }
        previous
    }

    /// Reset machine information and dimensions of this feeder type
    pub fn clear(&mut self) {
        self.editor = None;
        self.store.borrow_mut().clear(&self.catalog.feeder_type);
        self.notifier
            .borrow_mut()
            .info(format!("Cleared all values for {}.", self.catalog.title));
    }

    /// Show the reference model with the current dimensions
    pub fn preview(&self, preview: &dyn ModelPreview, model_dir: &Path) -> anyhow::Result<()> {
        let model = ModelRef::for_feeder(model_dir, &self.catalog.feeder_type);
        preview.preview(&model, &self.record().dimensions)
    }

    /// Merge values recognised in pasted text into the record
    ///
    /// Unrecognised lines are skipped; existing values not mentioned in the
    /// text are kept.
    pub fn import_text(&mut self, text: &str) -> ImportResult {
        let result = parse_pasted(text, &self.catalog, &self.policy);
        {
            let mut store = self.store.borrow_mut();
            for (id, value) in &result.machine_info {
                store.update_field(
                    &self.catalog.feeder_type,
                    FieldPath::machine_info(id),
                    value.clone(),
                );
            }
            for (id, value) in &result.dimensions {
                store.update_field(
                    &self.catalog.feeder_type,
                    FieldPath::dimension(id),
                    value.clone(),
                );
            }
        }

        tracing::info!(
            feeder_type = %self.catalog.feeder_type,
            imported = result.imported(),
            skipped = result.skipped,
            "Bulk import"
        );
        let mut notifier = self.notifier.borrow_mut();
        if result.imported() > 0 {
            notifier.success(format!("Imported {} value(s).", result.imported()));
        } else {
            notifier.failure("No recognizable values found in pasted text.");
        }
        result
    }
}
