use crate::builtin::{builtin_catalogs, builtin_sets};
use crate::error::{CatalogError, CatalogResult};
use crate::sets::FeederSet;
use feederkit_core::{FeederCatalog, FeederTypeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// On-disk catalog file (`.json` or `.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    pub catalogs: Vec<FeederCatalog>,
    pub sets: Vec<FeederSet>,
}

impl CatalogFile {
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some("toml") => Ok(toml::from_str(&content)?),
            other => Err(CatalogError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }
}

/// Catalogs and feeder sets known to the application
#[derive(Debug, Clone, Default)]
pub struct CatalogRegistry {
    catalogs: BTreeMap<FeederTypeId, FeederCatalog>,
    sets: BTreeMap<String, FeederSet>,
}

impl CatalogRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the bowl feeder, linear feeder, hopper and sets A-C
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for catalog in builtin_catalogs() {
            registry.catalogs.insert(catalog.feeder_type.clone(), catalog);
        }
        for set in builtin_sets() {
            registry.sets.insert(set.id.clone(), set);
        }
        registry
    }

    /// Add or replace a catalog after validating it
    pub fn register(&mut self, catalog: FeederCatalog) -> CatalogResult<()> {
        catalog.validate()?;
        let feeder_type = catalog.feeder_type.clone();
        if self.catalogs.insert(feeder_type.clone(), catalog).is_some() {
            tracing::info!(feeder_type = %feeder_type, "Replaced feeder catalog");
        } else {
            tracing::info!(feeder_type = %feeder_type, "Registered feeder catalog");
        }
        Ok(())
    }

    /// Add or replace a feeder set; every member must have a catalog
    pub fn register_set(&mut self, set: FeederSet) -> CatalogResult<()> {
        self.check_set(&set, &[])?;
        tracing::info!(set = %set.id, members = set.members.len(), "Registered feeder set");
        self.sets.insert(set.id.clone(), set);
        Ok(())
    }

    /// Members must be registered already or be among `pending`
    fn check_set(&self, set: &FeederSet, pending: &[FeederCatalog]) -> CatalogResult<()> {
        if set.members.is_empty() {
            return Err(CatalogError::EmptySet(set.id.clone()));
        }
        let known = |m: &FeederTypeId| {
            self.catalogs.contains_key(m) || pending.iter().any(|c| &c.feeder_type == m)
        };
        if let Some(missing) = set.members.iter().find(|m| !known(m)) {
            return Err(CatalogError::UnknownSetMember {
                set: set.id.clone(),
                feeder_type: missing.to_string(),
            });
        }
        Ok(())
    }

    /// Merge the catalogs and sets of a catalog file; returns how many
    /// entries were registered
    ///
    /// Every entry is checked before anything is registered, so a file with
    /// one bad entry leaves the registry unchanged. Sets may use feeder
    /// types defined in the same file.
    pub fn load_file(&mut self, path: &Path) -> CatalogResult<usize> {
        let file = CatalogFile::load(path)?;
        for catalog in &file.catalogs {
            catalog.validate()?;
        }
        for set in &file.sets {
            self.check_set(set, &file.catalogs)?;
        }

        let count = file.catalogs.len() + file.sets.len();
        for catalog in file.catalogs {
            self.register(catalog)?;
        }
        for set in file.sets {
            self.register_set(set)?;
        }
        tracing::info!(path = %path.display(), count, "Loaded catalog file");
        Ok(count)
    }

    pub fn get(&self, feeder_type: &FeederTypeId) -> CatalogResult<&FeederCatalog> {
        self.catalogs
            .get(feeder_type)
            .ok_or_else(|| CatalogError::UnknownFeederType(feeder_type.to_string()))
    }

    pub fn set(&self, id: &str) -> CatalogResult<&FeederSet> {
        self.sets
            .get(id)
            .ok_or_else(|| CatalogError::UnknownSet(id.to_string()))
    }

    pub fn feeder_types(&self) -> impl Iterator<Item = &FeederTypeId> {
        self.catalogs.keys()
    }

    pub fn sets(&self) -> impl Iterator<Item = &FeederSet> {
        self.sets.values()
    }

    pub fn contains(&self, feeder_type: &FeederTypeId) -> bool {
        self.catalogs.contains_key(feeder_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feederkit_core::DimensionDefinition;

    #[test]
    fn test_builtin_lookup() {
        let registry = CatalogRegistry::with_builtin();
        let linear = registry.get(&FeederTypeId::from("linear-feeder")).unwrap();
        assert_eq!(linear.dimensions.len(), 6);
        assert_eq!(registry.feeder_types().count(), 3);
        assert_eq!(registry.sets().count(), 3);
    }

    #[test]
    fn test_unknown_lookups() {
        let registry = CatalogRegistry::with_builtin();
        assert!(matches!(
            registry.get(&FeederTypeId::from("conveyor")),
            Err(CatalogError::UnknownFeederType(t)) if t == "conveyor"
        ));
        assert!(matches!(
            registry.set("set-z"),
            Err(CatalogError::UnknownSet(_))
        ));
    }

    #[test]
    fn test_register_rejects_invalid_catalog() {
        let mut registry = CatalogRegistry::new();
        let catalog = FeederCatalog::new("bad", "Bad")
            .with_dimension(DimensionDefinition::new("A", "x", 0.0, 0.0))
            .with_dimension(DimensionDefinition::new("A", "y", 1.0, 1.0));
        assert!(matches!(
            registry.register(catalog),
            Err(CatalogError::Invalid(_))
        ));
        assert!(!registry.contains(&FeederTypeId::from("bad")));
    }

    #[test]
    fn test_register_set_requires_known_members() {
        let mut registry = CatalogRegistry::with_builtin();
        let set = FeederSet::new("set-d", "Set D", ["bowl-feeder", "conveyor"]);
        assert!(matches!(
            registry.register_set(set),
            Err(CatalogError::UnknownSetMember { feeder_type, .. }) if feeder_type == "conveyor"
        ));

        let empty = FeederSet::new("set-e", "Set E", Vec::<&str>::new());
        assert!(matches!(
            registry.register_set(empty),
            Err(CatalogError::EmptySet(_))
        ));
    }
}
