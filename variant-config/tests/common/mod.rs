//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for schemas, registries and props
//! snapshots used across the integration suites.

use std::sync::Arc;

use variant_config::{ComponentSchema, ConfigRegistry, OptionsObject};

/// Builds a classes mapping from `(region, classes)` pairs.
#[allow(dead_code)]
pub fn regions(pairs: &[(&str, &str)]) -> OptionsObject {
    pairs.iter().map(|(region, classes)| (*region, *classes)).collect()
}

/// The `Widget` schema used by the end-to-end scenarios: `disabled`
/// defaulting to false and a base trigger class.
#[allow(dead_code)]
pub fn widget_schema() -> Arc<ComponentSchema> {
    Arc::new(
        ComponentSchema::builder("Widget")
            .prop_default("disabled", false)
            .prop("teleport")
            .classes(regions(&[("trigger", "t-base")]))
            .build(),
    )
}

/// Builder for registries seeded with a handful of entries.
#[allow(dead_code)]
#[derive(Default)]
pub struct RegistryFixture {
    registry: ConfigRegistry,
}

#[allow(dead_code)]
impl RegistryFixture {
    /// Creates an empty fixture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    pub fn with_entry(mut self, type_name: &str, entry: OptionsObject) -> Self {
        self.registry.register(type_name, entry);
        self
    }

    /// Freezes the registry for sharing.
    pub fn build(self) -> Arc<ConfigRegistry> {
        Arc::new(self.registry)
    }
}
