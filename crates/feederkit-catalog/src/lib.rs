pub mod builtin;
pub mod error;
pub mod registry;
pub mod sets;

pub use builtin::{bowl_feeder, builtin_catalogs, builtin_sets, hopper, linear_feeder};
pub use error::{CatalogError, CatalogResult};
pub use registry::{CatalogFile, CatalogRegistry};
pub use sets::FeederSet;
