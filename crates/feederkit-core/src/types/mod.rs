//! Type aliases for shared state.
//!
//! - [`aliases`]: `Rc<RefCell<T>>` aliases used to inject the record store
//!   into form views.

pub mod aliases;

pub use aliases::*;
