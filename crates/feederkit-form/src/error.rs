//! Error types for the form crate.

use feederkit_catalog::CatalogError;
use feederkit_core::InputError;
use thiserror::Error;

/// Errors raised by form view operations.
///
/// Missing values are not errors; gated actions report them through
/// [`crate::ActionOutcome::Rejected`].
#[derive(Error, Debug)]
pub enum FormError {
    /// The entered value was rejected.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A catalog or feeder set could not be resolved.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// An editor operation was requested while no dimension is being edited.
    #[error("No dimension editor is open")]
    EditorNotOpen,
}

/// Result type alias for form operations.
pub type FormResult<T> = Result<T, FormError>;
