//! Per-instance configuration resolution.
//!
//! A [`ConfigurationResolver`] lives as long as one component instance. The
//! host framework hands it a [`PropsSnapshot`] whenever the instance's props
//! change; the resolver extracts the explicitly passed, declared props,
//! looks up the type's global entry and runs the three-layer merge. The
//! result is cached together with the inputs it was computed from, so an
//! update with unchanged inputs does no work.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::attributes::filter_declared;
use crate::attributes::DeclaredKeys;
use crate::catalog::SchemaCatalog;
use crate::error::{Error, Result};
use crate::options::{OptionKey, OptionValue, OptionsObject};
use crate::parser::{ResolvedOptions, VariantParser};
use crate::registry::ConfigRegistry;
use crate::schema::ComponentSchema;

/// The props of one component instance at one point in time.
///
/// Bound values alone cannot tell an explicitly passed prop from one the
/// framework filled in with its default, so the snapshot also records which
/// attribute names the caller actually passed.
///
/// # Examples
///
/// ```
/// use variant_config::PropsSnapshot;
///
/// let snapshot = PropsSnapshot::new()
///     .with_passed("disabled", true)   // caller wrote `disabled`
///     .with_bound("teleport", false)   // framework default, not an override
///     .with_attribute("id");           // plain DOM attribute
///
/// assert!(snapshot.was_passed("disabled"));
/// assert!(!snapshot.was_passed("teleport"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropsSnapshot {
    values: OptionsObject,
    passed: BTreeSet<String>,
}

impl PropsSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a prop the caller passed explicitly, under the attribute name
    /// the caller used.
    #[must_use]
    pub fn with_passed(mut self, raw_name: &str, value: impl Into<OptionValue>) -> Self {
        self.values.insert(OptionKey::canonical(raw_name), value);
        self.passed.insert(raw_name.to_string());
        self
    }

    /// Records a bound prop value without marking it as passed.
    #[must_use]
    pub fn with_bound(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.values.insert(OptionKey::canonical(name), value);
        self
    }

    /// Records an attribute name the caller passed that carries no prop
    /// value (typically a plain DOM attribute).
    #[must_use]
    pub fn with_attribute(mut self, raw_name: &str) -> Self {
        self.passed.insert(raw_name.to_string());
        self
    }

    /// Returns `true` if the caller passed the attribute under this raw name.
    #[must_use]
    pub fn was_passed(&self, raw_name: &str) -> bool {
        self.passed.contains(raw_name)
    }

    /// The bound prop values, keyed canonically.
    #[must_use]
    pub const fn values(&self) -> &OptionsObject {
        &self.values
    }

    /// The explicitly passed, declared props with their bound values.
    ///
    /// A passed name with no bound value is skipped. Region names inside
    /// `classes` and `fixedClasses` come back in canonical form.
    #[must_use]
    pub fn explicit_overrides(&self, declared: &DeclaredKeys) -> OptionsObject {
        let mut overrides = OptionsObject::new();

        for key in filter_declared(&self.passed, declared) {
            match self.values.get(key.as_str()) {
                Some(value) => {
                    overrides.insert(key, value.clone());
                }
                None => log::debug!("Prop '{key}' was passed without a bound value; skipping"),
            }
        }

        overrides.canonicalized()
    }
}

/// What a cached result was computed from.
#[derive(Debug, Clone, PartialEq)]
struct Dependencies {
    overrides: OptionsObject,
    registry_version: u64,
}

/// Resolves the options of one component instance.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use variant_config::{
///     ComponentSchema, ConfigRegistry, ConfigurationResolver, OptionsObject, PropsSnapshot,
/// };
///
/// let schema = ComponentSchema::builder("Widget")
///     .prop_default("disabled", false)
///     .classes(OptionsObject::new().with("trigger", "t-base"))
///     .build();
///
/// let mut registry = ConfigRegistry::new();
/// registry.register(
///     "Widget",
///     OptionsObject::new().with("classes", OptionsObject::new().with("trigger", "t-global")),
/// );
///
/// let mut resolver = ConfigurationResolver::new(Arc::new(schema), Arc::new(registry));
/// resolver.update(&PropsSnapshot::new().with_passed("disabled", true));
///
/// let resolved = resolver.current();
/// assert_eq!(resolved.get("disabled").and_then(|v| v.as_bool()), Some(true));
/// assert_eq!(
///     resolved.get_path("classes.trigger").and_then(|v| v.as_str()),
///     Some("t-global"),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ConfigurationResolver {
    schema: Arc<ComponentSchema>,
    registry: Arc<ConfigRegistry>,
    current: ResolvedOptions,
    stamp: Option<Dependencies>,
}

impl ConfigurationResolver {
    /// Creates a resolver and computes the options of an instance with no
    /// explicit props.
    #[must_use]
    pub fn new(schema: Arc<ComponentSchema>, registry: Arc<ConfigRegistry>) -> Self {
        let mut resolver = Self {
            schema,
            registry,
            current: ResolvedOptions::default(),
            stamp: None,
        };
        resolver.update(&PropsSnapshot::new());
        resolver
    }

    /// Creates a resolver for a type the catalog knows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownComponentType`] if the catalog has no schema
    /// for `type_name`.
    pub fn for_type(
        catalog: &SchemaCatalog,
        type_name: &str,
        registry: Arc<ConfigRegistry>,
    ) -> Result<Self> {
        let schema = catalog.get(type_name).ok_or_else(|| Error::UnknownComponentType {
            type_name: type_name.to_string(),
        })?;

        Ok(Self::new(schema, registry))
    }

    /// Resolve once, without caching.
    #[must_use]
    pub fn resolve(
        schema: &ComponentSchema,
        registry: &ConfigRegistry,
        snapshot: &PropsSnapshot,
    ) -> ResolvedOptions {
        let overrides = snapshot.explicit_overrides(schema.declared());
        let global = registry.lookup(schema.type_name());
        VariantParser::parse(&overrides, &global, schema.defaults())
    }

    /// Recompute from a new props snapshot if anything it depends on changed.
    ///
    /// Returns `true` if the options were recomputed.
    pub fn update(&mut self, snapshot: &PropsSnapshot) -> bool {
        let stamp = Dependencies {
            overrides: snapshot.explicit_overrides(self.schema.declared()),
            registry_version: self.registry.version(),
        };

        if self.stamp.as_ref() == Some(&stamp) {
            return false;
        }

        let global = self.registry.lookup(self.schema.type_name());
        self.current = VariantParser::parse(&stamp.overrides, &global, self.schema.defaults());

        log::debug!(
            "Recomputed options for {} ({} explicit, registry v{})",
            self.schema.type_name(),
            stamp.overrides.len(),
            stamp.registry_version
        );

        self.stamp = Some(stamp);
        true
    }

    /// Switch to another registry snapshot.
    ///
    /// The next [`update`](Self::update) recomputes regardless of its input.
    pub fn rebind(&mut self, registry: Arc<ConfigRegistry>) {
        self.registry = registry;
        self.stamp = None;
    }

    /// The most recently computed options.
    #[must_use]
    pub const fn current(&self) -> &ResolvedOptions {
        &self.current
    }

    /// The explicit overrides the current options were computed from.
    #[must_use]
    pub fn overrides(&self) -> Option<&OptionsObject> {
        self.stamp.as_ref().map(|stamp| &stamp.overrides)
    }

    /// The component schema.
    #[must_use]
    pub fn schema(&self) -> &ComponentSchema {
        &self.schema
    }

    /// Keys of the type's global entry that the component does not declare.
    ///
    /// They are merged into the result all the same; this only exposes them
    /// so the host can flag a likely configuration mistake.
    #[must_use]
    pub fn undeclared_global_keys(&self) -> Vec<OptionKey> {
        self.registry
            .lookup(self.schema.type_name())
            .keys()
            .filter(|key| !key.is_reserved() && !self.schema.declared().contains_key(key))
            .cloned()
            .collect()
    }
}
