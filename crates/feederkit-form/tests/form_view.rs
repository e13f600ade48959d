use feederkit_catalog::{bowl_feeder, linear_feeder};
use feederkit_core::{
    shared, DimensionDefinition, FeederCatalog, FeederRecord, FeederRecordStore, FeederTypeId,
    MachineInfoFieldDefinition, NoticeLevel, Notifier, Shared,
};
use feederkit_form::{
    ActionOutcome, ConfigurationReport, FormError, FormView, HotspotStatus, Incomplete,
    ReportExporter, TextReportExporter,
};
use std::cell::RefCell;

#[derive(Default)]
struct RecordingExporter {
    reports: RefCell<Vec<ConfigurationReport>>,
}

impl ReportExporter for RecordingExporter {
    fn export(&self, report: &ConfigurationReport) -> anyhow::Result<()> {
        self.reports.borrow_mut().push(report.clone());
        Ok(())
    }
}

struct FailingExporter;

impl ReportExporter for FailingExporter {
    fn export(&self, _report: &ConfigurationReport) -> anyhow::Result<()> {
        anyhow::bail!("printer offline")
    }
}

fn small_catalog() -> FeederCatalog {
    FeederCatalog::new("bowl", "Bowl Feeder Configuration Report")
        .with_field(MachineInfoFieldDefinition::text("machineNo", "Machine no."))
        .with_field(MachineInfoFieldDefinition::text("remark", "Remark").optional())
        .with_dimension(DimensionDefinition::new("A", "Height", 10.0, 10.0))
        .with_dimension(DimensionDefinition::new("B", "Length", 20.0, 20.0))
}

fn setup(catalog: FeederCatalog) -> (Shared<FeederRecordStore>, Shared<Notifier>, FormView) {
    let store = shared(FeederRecordStore::new());
    let notifier = shared(Notifier::default());
    let view = FormView::new(store.clone(), notifier.clone(), catalog);
    (store, notifier, view)
}

fn last_notice(notifier: &Shared<Notifier>) -> (NoticeLevel, String) {
    let notifier = notifier.borrow();
    let notice = notifier.last().expect("a notice");
    (notice.level, notice.message.clone())
}

fn enter_dimension(view: &mut FormView, id: &str, value: &str) -> HotspotStatus {
    view.open_dimension(id).unwrap();
    view.set_input(value).unwrap();
    view.confirm().unwrap()
}

#[test]
fn test_zero_fills_last_dimension() {
    let (store, _notifier, mut view) = setup(small_catalog());
    let bowl = FeederTypeId::from("bowl");

    store
        .borrow_mut()
        .upsert(&bowl, FeederRecord::new().with_dimension("A", "10"));
    assert!(!view.all_dimensions_filled());

    assert_eq!(enter_dimension(&mut view, "B", "0"), HotspotStatus::Set);
    assert!(view.all_dimensions_filled());
}

#[test]
fn test_editing_one_type_leaves_other_untouched() {
    let store = shared(FeederRecordStore::seeded());
    let notifier = shared(Notifier::default());
    let linear = FeederTypeId::from("linear-feeder");

    let mut linear_view = FormView::new(store.clone(), notifier.clone(), linear_feeder());
    linear_view.set_machine_info("linearNo", "L-4").unwrap();
    enter_dimension(&mut linear_view, "C", "55");
    let before = store.borrow().get(&linear);

    let mut bowl_view = FormView::new(store.clone(), notifier, bowl_feeder());
    bowl_view.set_machine_info("machineNo", "B-9").unwrap();
    enter_dimension(&mut bowl_view, "A", "120");
    bowl_view.clear();

    assert_eq!(store.borrow().get(&linear), before);
    assert_eq!(before.machine_info_value("linearNo"), Some("L-4"));
}

#[test]
fn test_advance_gate_blocks_until_complete() {
    let (store, notifier, mut view) = setup(small_catalog());
    let linear = FeederTypeId::from("linear");
    enter_dimension(&mut view, "A", "10");
    enter_dimension(&mut view, "B", "20");
    view.set_machine_info("machineNo", "   ").unwrap();

    let bowl = FeederTypeId::from("bowl");
    let cursor_before = store.borrow().cursor().clone();
    let record_before = store.borrow().get(&bowl);
    let outcome = view.advance(Some(&linear));
    assert_eq!(
        outcome,
        ActionOutcome::Rejected(Incomplete::MachineInfo(vec!["machineNo".to_string()]))
    );
    assert_eq!(store.borrow().cursor(), &cursor_before);
    assert_eq!(store.borrow().get(&bowl), record_before);
    assert_eq!(
        last_notice(&notifier),
        (
            NoticeLevel::Failure,
            "Please fill in all required machine information before proceeding.".to_string()
        )
    );

    view.set_machine_info("machineNo", "M-100").unwrap();
    assert!(view.advance(Some(&linear)).is_performed());

    let cursor = store.borrow().cursor().clone();
    assert_eq!(cursor.current, FeederTypeId::from("bowl"));
    assert_eq!(cursor.next, Some(linear));
    assert_eq!(cursor.previous, vec![FeederTypeId::from("bowl")]);
}

#[test]
fn test_export_gate_checks_dimensions_after_machine_info() {
    let (store, notifier, mut view) = setup(small_catalog());
    let exporter = RecordingExporter::default();
    view.set_machine_info("machineNo", "M-1").unwrap();
    enter_dimension(&mut view, "A", "10");

    let bowl = FeederTypeId::from("bowl");
    let record_before = store.borrow().get(&bowl);
    let cursor_before = store.borrow().cursor().clone();
    assert_eq!(
        view.export(&exporter),
        ActionOutcome::Rejected(Incomplete::Dimensions(vec!["B".to_string()]))
    );
    assert_eq!(store.borrow().get(&bowl), record_before);
    assert_eq!(store.borrow().cursor(), &cursor_before);
    assert_eq!(
        last_notice(&notifier).1,
        "Please fill in all dimensions before printing."
    );
    assert!(exporter.reports.borrow().is_empty());

    enter_dimension(&mut view, "B", "12.5");
    assert!(view.export(&exporter).is_performed());

    let reports = exporter.reports.borrow();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].dimensions[1].display_value(), "12.5 mm");
    assert_eq!(last_notice(&notifier).0, NoticeLevel::Success);
}

#[test]
fn test_export_failure_is_reported() {
    let (_store, notifier, mut view) = setup(small_catalog());
    view.set_machine_info("machineNo", "M-1").unwrap();
    enter_dimension(&mut view, "A", "1");
    enter_dimension(&mut view, "B", "2");

    assert!(matches!(view.export(&FailingExporter), ActionOutcome::Failed(msg) if msg.contains("printer offline")));
    assert_eq!(last_notice(&notifier).0, NoticeLevel::Failure);
}

#[test]
fn test_text_exporter_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let (_store, _notifier, mut view) = setup(small_catalog());
    view.set_machine_info("machineNo", "M-1").unwrap();
    enter_dimension(&mut view, "A", "1");
    enter_dimension(&mut view, "B", "2");

    let exporter = TextReportExporter::new(dir.path());
    assert!(view.export(&exporter).is_performed());

    let content = std::fs::read_to_string(dir.path().join("bowl-report.txt")).unwrap();
    assert!(content.contains("M-1"));
    assert!(content.contains("Generated on"));
}

#[test]
fn test_editor_state_machine() {
    let (store, notifier, mut view) = setup(small_catalog());
    let bowl = FeederTypeId::from("bowl");

    let editor = view.open_dimension("A").unwrap();
    assert_eq!(editor.input, "");
    assert_eq!(view.hotspots()[0].status, HotspotStatus::Editing);

    view.set_input("abc").unwrap();
    assert!(matches!(view.confirm(), Err(FormError::Input(_))));
    assert!(view.editor().is_some());
    assert_eq!(last_notice(&notifier).0, NoticeLevel::Failure);

    view.set_input(" 42 ").unwrap();
    assert_eq!(view.confirm().unwrap(), HotspotStatus::Set);
    assert_eq!(store.borrow().get(&bowl).dimension_value("A"), Some("42"));
    assert_eq!(view.hotspots()[0].label(), "42");

    view.open_dimension("A").unwrap();
    assert_eq!(view.editor().unwrap().input, "42");
    view.set_input("99").unwrap();
    assert_eq!(view.cancel(), HotspotStatus::Set);
    assert_eq!(store.borrow().get(&bowl).dimension_value("A"), Some("42"));

    assert_eq!(enter_dimension(&mut view, "A", ""), HotspotStatus::Unset);
    assert_eq!(store.borrow().get(&bowl).dimension_value("A"), None);
}

#[test]
fn test_editor_rejects_unknown_and_unopened() {
    let (_store, _notifier, mut view) = setup(small_catalog());
    assert!(view.open_dimension("Z").is_err());
    assert!(matches!(view.set_input("1"), Err(FormError::EditorNotOpen)));
    assert!(matches!(view.confirm(), Err(FormError::EditorNotOpen)));
    assert!(view.set_machine_info("colour", "red").is_err());
}

#[test]
fn test_clear_is_idempotent() {
    let (store, notifier, mut view) = setup(small_catalog());
    let bowl = FeederTypeId::from("bowl");
    view.set_machine_info("machineNo", "M-1").unwrap();
    enter_dimension(&mut view, "A", "3");

    view.clear();
    let once = store.borrow().get(&bowl);
    view.clear();
    assert_eq!(store.borrow().get(&bowl), once);
    assert!(once.is_empty());
    assert_eq!(last_notice(&notifier).0, NoticeLevel::Info);
}

#[test]
fn test_summary_placeholder() {
    let (_store, _notifier, mut view) = setup(small_catalog());
    enter_dimension(&mut view, "A", "7");
    let summary = view.summary();
    assert_eq!(summary[0].display_value(), "7 mm");
    assert_eq!(summary[1].display_value(), "--------");
}

#[test]
fn test_import_merges_without_clearing() {
    let (store, notifier, mut view) = setup(bowl_feeder());
    let bowl = FeederTypeId::from("bowl-feeder");
    view.set_machine_info("machineNo", "KEEP").unwrap();
    enter_dimension(&mut view, "P", "8");

    let result = view.import_text("Rotation: clockwise\nA = 15 mm\nnonsense line\nB: -4");
    assert_eq!(result.imported(), 2);
    assert_eq!(result.skipped, 2);

    let record = store.borrow().get(&bowl);
    assert_eq!(record.machine_info_value("machineNo"), Some("KEEP"));
    assert_eq!(record.machine_info_value("rotation"), Some("Clockwise"));
    assert_eq!(record.dimension_value("A"), Some("15"));
    assert_eq!(record.dimension_value("P"), Some("8"));
    assert_eq!(record.dimension_value("B"), None);
    assert_eq!(last_notice(&notifier).0, NoticeLevel::Success);

    let result = view.import_text("nothing to see");
    assert!(result.is_empty());
    assert_eq!(
        last_notice(&notifier),
        (
            NoticeLevel::Failure,
            "No recognizable values found in pasted text.".to_string()
        )
    );
}
