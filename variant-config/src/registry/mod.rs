//! Global configuration registry.
//!
//! The embedding application seeds the registry once at startup with a
//! partial options object per component type, then shares it (behind an
//! `Arc`) with every resolver. Once shared, the registry can no longer be
//! mutated; entries themselves are handed out as `Arc`s so that all
//! instances of a type read the same object.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use variant_config::{ConfigRegistry, OptionsObject};
//!
//! let mut registry = ConfigRegistry::new();
//! registry.register("TDropdown", OptionsObject::new().with("teleport", true));
//! let registry = Arc::new(registry);
//!
//! assert_eq!(registry.lookup("TDropdown").len(), 1);
//! assert!(registry.lookup("TCard").is_empty());
//! ```

pub mod loader;
pub mod validator;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::options::OptionsObject;

pub use loader::RegistryLoader;
pub use validator::{Diagnostic, RegistryValidator};

/// Process-wide mapping from component type name to its global entry.
#[derive(Debug, Clone, Default)]
pub struct ConfigRegistry {
    entries: BTreeMap<String, Arc<OptionsObject>>,
    known_types: Option<BTreeSet<String>>,
    empty: Arc<OptionsObject>,
    version: u64,
}

impl ConfigRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry that warns when an entry is registered for
    /// a type outside `known_types`.
    ///
    /// Unknown entries are still stored; the warning only points at a likely
    /// misspelling.
    #[must_use]
    pub fn with_known_types<I, S>(known_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_types: Some(known_types.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Stores the global entry for a component type.
    ///
    /// Top-level keys are normalized to canonical form. Registering the same
    /// type again replaces the previous entry entirely (no merge).
    pub fn register(&mut self, type_name: impl Into<String>, partial: OptionsObject) {
        let type_name = type_name.into();

        if let Some(known) = &self.known_types {
            if !known.contains(&type_name) {
                log::warn!("Registering configuration for unknown component type '{type_name}'");
            }
        }

        if self.entries.contains_key(&type_name) {
            log::debug!("Replacing configuration for '{type_name}'");
        }

        self.entries
            .insert(type_name, Arc::new(partial.canonicalized()));
        self.version += 1;
    }

    /// Returns the entry for a type, or an empty object if none was
    /// registered.
    #[must_use]
    pub fn lookup(&self, type_name: &str) -> Arc<OptionsObject> {
        self.entries
            .get(type_name)
            .map_or_else(|| Arc::clone(&self.empty), Arc::clone)
    }

    /// Returns the entry for a type if one was registered.
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<&OptionsObject> {
        self.entries.get(type_name).map(|entry| &**entry)
    }

    /// Returns `true` if an entry was registered for the type.
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// Iterates the registered type names in order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates the registered entries in type-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionsObject)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.as_ref()))
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of `register` calls so far.
    ///
    /// Resolvers record it alongside their result to tell whether a
    /// registry snapshot is newer than what they computed from.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionValue;

    #[test]
    fn test_lookup_registered_type() {
        let mut registry = ConfigRegistry::new();
        registry.register("A", OptionsObject::new().with("x", 1));

        assert_eq!(*registry.lookup("A"), OptionsObject::new().with("x", 1));
    }

    #[test]
    fn test_lookup_isolated_between_types() {
        let mut registry = ConfigRegistry::new();
        registry.register("A", OptionsObject::new().with("x", 1));

        assert!(registry.lookup("B").is_empty());
        assert!(!registry.contains("B"));
    }

    #[test]
    fn test_reregistration_replaces_without_merge() {
        let mut registry = ConfigRegistry::new();
        registry.register("A", OptionsObject::new().with("x", 1).with("y", 2));
        registry.register("A", OptionsObject::new().with("z", 3));

        let entry = registry.lookup("A");
        assert_eq!(entry.len(), 1);
        assert_eq!(entry.get("z"), Some(&OptionValue::Int(3)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_canonicalizes_top_level_keys() {
        let mut registry = ConfigRegistry::new();
        registry.register(
            "TDropdown",
            OptionsObject::new()
                .with("teleport-to", "#modals")
                .with("classes", OptionsObject::new().with("opacity-50", "disabled")),
        );

        let entry = registry.lookup("TDropdown");
        assert!(entry.contains_key("teleportTo"));
        assert!(entry.get_path("classes.opacity-50").is_some());
    }

    #[test]
    fn test_lookup_shares_the_stored_entry() {
        let mut registry = ConfigRegistry::new();
        registry.register("A", OptionsObject::new().with("x", 1));

        let first = registry.lookup("A");
        let second = registry.lookup("A");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_version_counts_registrations() {
        let mut registry = ConfigRegistry::new();
        assert_eq!(registry.version(), 0);
        registry.register("A", OptionsObject::new());
        registry.register("A", OptionsObject::new());
        assert_eq!(registry.version(), 2);
    }

    #[test]
    fn test_unknown_type_is_still_stored() {
        let mut registry = ConfigRegistry::with_known_types(["TCard", "TDropdown"]);
        registry.register("TDropdwn", OptionsObject::new().with("teleport", true));

        assert!(registry.contains("TDropdwn"));
        assert_eq!(registry.type_names().collect::<Vec<_>>(), vec!["TDropdwn"]);
    }

    #[test]
    fn test_concurrent_reads() {
        let mut registry = ConfigRegistry::new();
        registry.register("A", OptionsObject::new().with("x", 1));
        let registry = Arc::new(registry);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.lookup("A").len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
    }
}
