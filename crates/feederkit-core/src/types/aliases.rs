//! Type aliases for single-threaded shared state.
//!
//! FeederKit runs every store operation synchronously on one thread, inside
//! the handler of the event that triggered it. State that more than one view
//! reads and writes is therefore shared with `Rc<RefCell<T>>`, never with a
//! lock.
//!
//! ```rust,ignore
//! use feederkit_core::types::*;
//!
//! let store: Shared<FeederRecordStore> = shared(FeederRecordStore::seeded());
//! store.borrow_mut().clear(&"bowl-feeder".into());
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// Ordered string map used for machine info values and dimension values.
pub type ValueMap = BTreeMap<String, String>;

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
