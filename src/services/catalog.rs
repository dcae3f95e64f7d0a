use crate::domain::constants::NATIVE_TARGETS;
use crate::domain::coordinate::TargetId;
use crate::domain::models::{CatalogEntry, NativeConfig};
use crate::services::targets::native_target_id;
use std::collections::{BTreeMap, BTreeSet};

/// Kotlin/Native targets keyed by konan name, with their deprecation flag.
#[derive(Debug, Clone)]
pub struct NativeCatalog {
    entries: BTreeMap<String, bool>,
    include_deprecated: bool,
}

impl NativeCatalog {
    pub fn builtin() -> Self {
        Self {
            entries: NATIVE_TARGETS
                .iter()
                .map(|(name, deprecated)| (name.to_string(), *deprecated))
                .collect(),
            include_deprecated: false,
        }
    }

    pub fn from_config(native: &NativeConfig) -> Self {
        let mut catalog = Self::builtin();
        for (name, deprecated) in &native.targets {
            catalog.entries.insert(name.clone(), *deprecated);
        }
        catalog.include_deprecated = native.include_deprecated;
        catalog
    }

    pub fn with_deprecated(mut self, include: bool) -> Self {
        self.include_deprecated = include;
        self
    }

    /// Target ids substituted for the standard library's native variants.
    pub fn substitute_targets(&self) -> BTreeSet<TargetId> {
        self.entries
            .iter()
            .filter(|(_, deprecated)| self.include_deprecated || !**deprecated)
            .map(|(name, _)| native_target_id(name))
            .collect()
    }

    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.entries
            .iter()
            .filter(|(_, deprecated)| self.include_deprecated || !**deprecated)
            .map(|(name, deprecated)| CatalogEntry {
                konan_name: name.clone(),
                target: native_target_id(name),
                deprecated: *deprecated,
            })
            .collect()
    }
}
