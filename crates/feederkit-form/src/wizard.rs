//! Feeder set wizard
//!
//! Walks the members of a [`FeederSet`] one form at a time. The page being
//! shown is the store's cursor; moving forward goes through the form view's
//! completeness gate, moving back does not.

use crate::error::FormResult;
use crate::view::{ActionOutcome, FormView};
use feederkit_catalog::{CatalogError, CatalogRegistry, FeederSet};
use feederkit_core::{FeederRecordStore, FeederTypeId, Notifier, Shared};
use std::rc::Rc;

pub struct Wizard {
    set: FeederSet,
    store: Shared<FeederRecordStore>,
}

impl Wizard {
    /// Start at the first member of `set`
    pub fn start(set: FeederSet, store: Shared<FeederRecordStore>) -> FormResult<Self> {
        let first = set
            .first()
            .cloned()
            .ok_or_else(|| CatalogError::EmptySet(set.id.clone()))?;
        store.borrow_mut().clear_previous();
        let wizard = Self { set, store };
        wizard.enter(&first)?;
        tracing::info!(set = %wizard.set.id, start = %first, "Started feeder set wizard");
        Ok(wizard)
    }

    /// Start the registered set `set_id`
    pub fn from_registry(
        registry: &CatalogRegistry,
        set_id: &str,
        store: Shared<FeederRecordStore>,
    ) -> FormResult<Self> {
        Self::start(registry.set(set_id)?.clone(), store)
    }

    pub fn set(&self) -> &FeederSet {
        &self.set
    }

    /// Feeder type currently shown
    pub fn current(&self) -> FeederTypeId {
        self.store.borrow().cursor().current.clone()
    }

    /// Member after the current one, `None` on the last page
    pub fn next_type(&self) -> Option<FeederTypeId> {
        self.set.next_after(&self.current()).cloned()
    }

    pub fn is_last(&self) -> bool {
        self.next_type().is_none()
    }

    /// Show `feeder_type`, which must belong to the set
    pub fn enter(&self, feeder_type: &FeederTypeId) -> FormResult<()> {
        if !self.set.contains(feeder_type) {
            return Err(CatalogError::UnknownSetMember {
                set: self.set.id.clone(),
                feeder_type: feeder_type.to_string(),
            }
            .into());
        }
        let mut store = self.store.borrow_mut();
        store.set_cursor(feeder_type.clone());
        store.set_next(self.set.next_after(feeder_type).cloned());
        Ok(())
    }

    /// Form view for the current page
    pub fn form(
        &self,
        registry: &CatalogRegistry,
        notifier: &Shared<Notifier>,
    ) -> FormResult<FormView> {
        let catalog = registry.get(&self.current())?.clone();
        Ok(FormView::new(
            Rc::clone(&self.store),
            Rc::clone(notifier),
            catalog,
        ))
    }

    /// Advance past `view` if its record is complete
    ///
    /// On the last page a performed outcome means the wizard is finished and
    /// the current page does not change.
    pub fn advance(&self, view: &FormView) -> FormResult<ActionOutcome> {
        let next = self.set.next_after(view.feeder_type()).cloned();
        let outcome = view.advance(next.as_ref());
        if let (ActionOutcome::Performed, Some(next)) = (&outcome, &next) {
            self.enter(next)?;
        }
        Ok(outcome)
    }

    /// Return to the previous page without validation
    pub fn back(&self, view: &FormView) -> FormResult<Option<FeederTypeId>> {
        let previous = view.back();
        if let Some(previous) = &previous {
            self.enter(previous)?;
        }
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feederkit_core::{shared, FeederRecord};

    fn complete_bowl() -> FeederRecord {
        let catalog = feederkit_catalog::bowl_feeder();
        let mut record = FeederRecord::new()
            .with_machine_info("machineNo", "M-1")
            .with_machine_info("rotation", "Clockwise")
            .with_machine_info("uph", "1200");
        for d in &catalog.dimensions {
            record = record.with_dimension(&d.id, "10");
        }
        record
    }

    #[test]
    fn test_start_sets_cursor() {
        let registry = CatalogRegistry::with_builtin();
        let store = shared(FeederRecordStore::new());
        let wizard = Wizard::from_registry(&registry, "set-c", store.clone()).unwrap();

        assert_eq!(wizard.current(), FeederTypeId::from("bowl-feeder"));
        assert_eq!(store.borrow().cursor().next, Some(FeederTypeId::from("linear-feeder")));
        assert!(!wizard.is_last());
    }

    #[test]
    fn test_start_forgets_earlier_history() {
        let registry = CatalogRegistry::with_builtin();
        let store = shared(FeederRecordStore::new());
        store.borrow_mut().push_previous(FeederTypeId::from("hopper"));

        let wizard = Wizard::from_registry(&registry, "set-a", store.clone()).unwrap();
        assert!(store.borrow().cursor().previous.is_empty());
        assert_eq!(wizard.current(), FeederTypeId::from("bowl-feeder"));
    }

    #[test]
    fn test_unknown_set() {
        let registry = CatalogRegistry::with_builtin();
        let store = shared(FeederRecordStore::new());
        assert!(Wizard::from_registry(&registry, "set-z", store).is_err());
    }

    #[test]
    fn test_enter_rejects_non_member() {
        let registry = CatalogRegistry::with_builtin();
        let store = shared(FeederRecordStore::new());
        let wizard = Wizard::from_registry(&registry, "set-a", store).unwrap();
        assert!(wizard.enter(&FeederTypeId::from("hopper")).is_err());
    }

    #[test]
    fn test_advance_and_back() {
        let registry = CatalogRegistry::with_builtin();
        let store = shared(FeederRecordStore::new());
        let notifier = shared(Notifier::default());
        let wizard = Wizard::from_registry(&registry, "set-b", store.clone()).unwrap();

        let bowl = FeederTypeId::from("bowl-feeder");
        store.borrow_mut().upsert(&bowl, complete_bowl());

        let view = wizard.form(&registry, &notifier).unwrap();
        assert!(wizard.advance(&view).unwrap().is_performed());
        assert_eq!(wizard.current(), FeederTypeId::from("hopper"));
        assert!(wizard.is_last());

        let view = wizard.form(&registry, &notifier).unwrap();
        assert_eq!(wizard.back(&view).unwrap(), Some(bowl.clone()));
        assert_eq!(wizard.current(), bowl);
    }
}
