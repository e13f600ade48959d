//! Console Shell - line-oriented front end
//!
//! Reads one command per line, routes it to the form view of the feeder
//! type being configured and prints the result plus any new notice. A
//! feeder set wizard can be started to walk several feeder types in order.

use anyhow::Context;
use feederkit_catalog::CatalogRegistry;
use feederkit_core::{
    shared, FeederRecordStore, FeederTypeId, FieldKind, NoticeLevel, Notifier, Shared,
};
use feederkit_form::{
    ActionOutcome, FormView, HotspotStatus, Incomplete, LoggingModelPreview, TextReportExporter,
    Wizard,
};
use feederkit_settings::{Config, SettingsManager};
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::time::Instant;
use uuid::Uuid;

const PASTE_END: &str = "end";

const HELP: &str = "\
Commands:
  open <feeder-type>       configure a single feeder type
  set-wizard <set-id>      walk a feeder set (set-a, set-b, set-c)
  set <field> <value>      set a machine information field
  dim <id>                 open the editor for a dimension
  input <text>             replace the editor input
  ok                       confirm the editor
  cancel                   close the editor without saving
  status                   show the current record
  export                   write the configuration report
  next                     advance to the next feeder of the set
  back                     return to the previous feeder
  clear                    reset all values of this feeder
  paste                    import pasted text, finish with a line 'end'
  preview                  show the 3D reference model
  help                     show this help
  quit                     leave";

/// Whether the read loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive configuration session
pub struct Shell {
    config: Config,
    registry: CatalogRegistry,
    store: Shared<FeederRecordStore>,
    notifier: Shared<Notifier>,
    exporter: TextReportExporter,
    preview: LoggingModelPreview,
    view: FormView,
    wizard: Option<Wizard>,
    /// Id of the last notice already printed
    shown_notice: Option<Uuid>,
}

impl Shell {
    /// Build a session from a configuration and a catalog registry
    pub fn new(config: Config, registry: CatalogRegistry) -> anyhow::Result<Self> {
        let store = if config.wizard.seed_store {
            FeederRecordStore::seeded()
        } else {
            FeederRecordStore::new()
        };
        let store = shared(store);
        let notifier = shared(Notifier::new(config.notifications));

        let start = FeederTypeId::from(config.wizard.start_feeder_type.as_str());
        let catalog = registry
            .get(&start)
            .with_context(|| format!("Start feeder type {} is not in the catalog", start))?
            .clone();
        store.borrow_mut().set_cursor(start);

        let view = FormView::new(Rc::clone(&store), Rc::clone(&notifier), catalog)
            .with_policy(config.input.clone());
        let exporter = TextReportExporter::new(config.paths.report_dir.clone());

        Ok(Self {
            config,
            registry,
            store,
            notifier,
            exporter,
            preview: LoggingModelPreview,
            view,
            wizard: None,
            shown_notice: None,
        })
    }

    /// Build a session from the platform configuration file
    pub fn from_settings() -> anyhow::Result<Self> {
        let config = SettingsManager::load().context("Failed to load configuration")?;
        let mut registry = CatalogRegistry::with_builtin();
        if let Some(path) = &config.paths.catalog_file {
            registry
                .load_file(path)
                .with_context(|| format!("Failed to load catalog file {}", path.display()))?;
        }
        Self::new(config, registry)
    }

    pub fn view(&self) -> &FormView {
        &self.view
    }

    pub fn store(&self) -> &Shared<FeederRecordStore> {
        &self.store
    }

    pub fn notifier(&self) -> &Shared<Notifier> {
        &self.notifier
    }

    /// Run commands from `input` until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "FeederKit {} - type 'help' for commands", crate::VERSION)?;
        self.print_header(out)?;

        let mut lines = input.lines();
        while let Some(line) = lines.next() {
            let line = line?;
            let line = line.trim();

            let flow = if line == "paste" {
                let mut text = String::new();
                for pasted in lines.by_ref() {
                    let pasted = pasted?;
                    if pasted.trim() == PASTE_END {
                        break;
                    }
                    text.push_str(&pasted);
                    text.push('\n');
                }
                self.paste(&text, out)?;
                Flow::Continue
            } else {
                self.execute(line, out)?
            };

            self.print_notice(out)?;
            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Execute a single command line
    ///
    /// Command failures are printed; only I/O errors on `out` are returned.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<Flow> {
        let (command, args) = match line.split_once(char::is_whitespace) {
            Some((command, args)) => (command, args.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => writeln!(out, "{}", HELP)?,
            "quit" | "exit" => return Ok(Flow::Quit),
            "open" => self.open(args, out)?,
            "set-wizard" => self.start_wizard(args, out)?,
            "set" => self.set_field(args, out)?,
            "dim" => self.open_dimension(args, out)?,
            "input" => {
                if let Err(e) = self.view.set_input(args) {
                    writeln!(out, "error: {}", e)?;
                }
            }
            "ok" => match self.view.confirm() {
                Ok(status) => self.print_status_change(status, out)?,
                Err(e) => writeln!(out, "error: {}", e)?,
            },
            "cancel" => {
                let status = self.view.cancel();
                self.print_status_change(status, out)?;
            }
            "status" => self.print_status(out)?,
            "export" => {
                let outcome = self.view.export(&self.exporter);
                self.print_outcome(&outcome, out)?;
            }
            "next" => self.next(out)?,
            "back" => self.back(out)?,
            "clear" => self.view.clear(),
            "paste" => self.paste(args, out)?,
            "preview" => {
                if let Err(e) = self.view.preview(&self.preview, &self.config.paths.model_dir) {
                    writeln!(out, "error: {:#}", e)?;
                } else {
                    writeln!(out, "Preview requested for {}", self.view.feeder_type())?;
                }
            }
            other => writeln!(out, "Unknown command '{}', type 'help'", other)?,
        }
        Ok(Flow::Continue)
    }

    fn switch_to(&mut self, feeder_type: &FeederTypeId) -> anyhow::Result<()> {
        let catalog = self.registry.get(feeder_type)?.clone();
        self.view = FormView::new(Rc::clone(&self.store), Rc::clone(&self.notifier), catalog)
            .with_policy(self.config.input.clone());
        Ok(())
    }

    fn open<W: Write>(&mut self, args: &str, out: &mut W) -> anyhow::Result<()> {
        if args.is_empty() {
            let types: Vec<String> = self.registry.feeder_types().map(|t| t.to_string()).collect();
            writeln!(out, "Feeder types: {}", types.join(", "))?;
            return Ok(());
        }
        let feeder_type = FeederTypeId::from(args);
        if let Err(e) = self.switch_to(&feeder_type) {
            writeln!(out, "error: {}", e)?;
            return Ok(());
        }
        self.wizard = None;
        {
            let mut store = self.store.borrow_mut();
            store.set_cursor(feeder_type);
            store.set_next(None);
            store.clear_previous();
        }
        self.print_header(out)
    }

    fn start_wizard<W: Write>(&mut self, args: &str, out: &mut W) -> anyhow::Result<()> {
        if args.is_empty() {
            for set in self.registry.sets() {
                writeln!(out, "  {:<8} {}", set.id, set.name)?;
            }
            return Ok(());
        }
        let wizard = match Wizard::from_registry(&self.registry, args, Rc::clone(&self.store)) {
            Ok(wizard) => wizard,
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                return Ok(());
            }
        };
        let view = wizard.form(&self.registry, &self.notifier)?;
        self.view = view.with_policy(self.config.input.clone());
        writeln!(out, "{}", wizard.set().name)?;
        self.wizard = Some(wizard);
        self.print_header(out)
    }

    fn set_field<W: Write>(&mut self, args: &str, out: &mut W) -> anyhow::Result<()> {
        let (field, value) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
        if field.is_empty() {
            writeln!(out, "usage: set <field> <value>")?;
            return Ok(());
        }
        match self.view.set_machine_info(field, value.trim()) {
            Ok(()) => writeln!(out, "{} = {}", field, value.trim())?,
            Err(e) => writeln!(out, "error: {}", e)?,
        }
        Ok(())
    }

    fn open_dimension<W: Write>(&mut self, args: &str, out: &mut W) -> anyhow::Result<()> {
        match self.view.open_dimension(args) {
            Ok(editor) => {
                writeln!(out, "{}", editor.prompt())?;
                if !editor.input.is_empty() {
                    writeln!(out, "  current: {}", editor.input)?;
                }
                writeln!(out, "  use 'input <value>' then 'ok' or 'cancel'")?;
            }
            Err(e) => writeln!(out, "error: {}", e)?,
        }
        Ok(())
    }

    fn next<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        let outcome = match &self.wizard {
            Some(wizard) => wizard.advance(&self.view)?,
            None => self.view.advance(None),
        };
        self.print_outcome(&outcome, out)?;

        if outcome.is_performed() {
            if let Some(wizard) = &self.wizard {
                let current = wizard.current();
                if &current != self.view.feeder_type() {
                    self.switch_to(&current)?;
                    self.print_header(out)?;
                }
            }
        }
        Ok(())
    }

    fn back<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        let previous = match &self.wizard {
            Some(wizard) => wizard.back(&self.view)?,
            None => {
                let previous = self.view.back();
                if let Some(previous) = &previous {
                    let mut store = self.store.borrow_mut();
                    store.set_cursor(previous.clone());
                    store.set_next(None);
                }
                previous
            }
        };
        match previous {
            Some(previous) => {
                self.switch_to(&previous)?;
                self.print_header(out)
            }
            None => {
                writeln!(out, "Nothing to go back to")?;
                Ok(())
            }
        }
    }

    fn paste<W: Write>(&mut self, text: &str, out: &mut W) -> anyhow::Result<()> {
        let result = self.view.import_text(text);
        writeln!(
            out,
            "Imported {} value(s), skipped {} line(s)",
            result.imported(),
            result.skipped
        )?;
        Ok(())
    }

    fn print_header<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let catalog = self.view.catalog();
        writeln!(out, "== {} ({}) ==", catalog.title, catalog.feeder_type)?;
        if let Some(wizard) = &self.wizard {
            match wizard.next_type() {
                Some(next) => writeln!(out, "   next: {}", next)?,
                None => writeln!(out, "   last feeder of {}", wizard.set().id)?,
            }
        }
        Ok(())
    }

    fn print_status<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let catalog = self.view.catalog();
        let record = self.view.record();
        self.print_header(out)?;

        writeln!(out, "Machine information:")?;
        for field in &catalog.machine_info_fields {
            let value = record.machine_info_value(&field.id).unwrap_or_default();
            let marker = if field.required { "*" } else { " " };
            let hint = match field.kind {
                FieldKind::Select => format!(" [{}]", field.options.join("|")),
                FieldKind::Number => " [number]".to_string(),
                FieldKind::Text => String::new(),
            };
            writeln!(out, " {}{:<10} {:<20}{}", marker, field.id, value, hint)?;
        }

        writeln!(out, "Dimensions:")?;
        for (hotspot, row) in self.view.hotspots().iter().zip(self.view.summary()) {
            let mark = match hotspot.status {
                HotspotStatus::Set => "x",
                HotspotStatus::Editing => ">",
                HotspotStatus::Unset => " ",
            };
            writeln!(
                out,
                "  [{}] {:<3} {:<28} {}",
                mark,
                row.id,
                row.description,
                row.display_value()
            )?;
        }

        writeln!(
            out,
            "Machine information complete: {}, all dimensions filled: {}",
            yes_no(self.view.machine_info_complete()),
            yes_no(self.view.all_dimensions_filled())
        )?;
        Ok(())
    }

    fn print_status_change<W: Write>(&self, status: HotspotStatus, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "Dimension {}", status)?;
        Ok(())
    }

    fn print_outcome<W: Write>(&self, outcome: &ActionOutcome, out: &mut W) -> anyhow::Result<()> {
        match outcome {
            ActionOutcome::Performed => {}
            ActionOutcome::Rejected(Incomplete::MachineInfo(missing)) => {
                writeln!(out, "  missing machine information: {}", missing.join(", "))?
            }
            ActionOutcome::Rejected(Incomplete::Dimensions(missing)) => {
                writeln!(out, "  missing dimensions: {}", missing.join(", "))?
            }
            ActionOutcome::Failed(reason) => writeln!(out, "  failed: {}", reason)?,
        }
        Ok(())
    }

    /// Print the visible notice once
    fn print_notice<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        let mut notifier = self.notifier.borrow_mut();
        let now = Instant::now();
        notifier.tick(now);
        if let Some(notice) = notifier.visible(now) {
            if self.shown_notice != Some(notice.id) {
                let prefix = match notice.level {
                    NoticeLevel::Success => "ok",
                    NoticeLevel::Failure => "!!",
                    NoticeLevel::Info => "--",
                };
                writeln!(out, "{} {}", prefix, notice.message)?;
                self.shown_notice = Some(notice.id);
            }
        }
        Ok(())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
