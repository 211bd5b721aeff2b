//! Component schemas.
//!
//! A schema is what a component type contributes to configuration
//! resolution: its type name (the registry lookup key), the option names it
//! declares as props, and its library-shipped defaults.

use crate::attributes::DeclaredKeys;
use crate::options::{OptionKey, OptionValue, OptionsObject};

/// Declared props and defaults of one component type.
///
/// Immutable once built; share it behind an `Arc`.
///
/// # Examples
///
/// ```
/// use variant_config::{ComponentSchema, OptionsObject};
///
/// let schema = ComponentSchema::builder("Widget")
///     .prop_default("disabled", false)
///     .prop("text")
///     .classes(OptionsObject::new().with("trigger", "t-base"))
///     .build();
///
/// assert_eq!(schema.type_name(), "Widget");
/// assert!(schema.declared().contains("text"));
/// assert!(schema.declared().contains("classes"));
/// assert!(!schema.defaults().contains_key("text"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSchema {
    type_name: String,
    declared: DeclaredKeys,
    defaults: OptionsObject,
}

impl ComponentSchema {
    /// Creates a schema from its parts.
    ///
    /// Top-level default keys are normalized to canonical form.
    #[must_use]
    pub fn new(type_name: impl Into<String>, declared: DeclaredKeys, defaults: &OptionsObject) -> Self {
        Self {
            type_name: type_name.into(),
            declared,
            defaults: defaults.canonicalized(),
        }
    }

    /// Starts building a schema for a variant component.
    #[must_use]
    pub fn builder(type_name: impl Into<String>) -> ComponentSchemaBuilder {
        ComponentSchemaBuilder {
            type_name: type_name.into(),
            props: Vec::new(),
            defaults: OptionsObject::new(),
        }
    }

    /// The registry lookup key.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The option names the component accepts as props.
    #[must_use]
    pub const fn declared(&self) -> &DeclaredKeys {
        &self.declared
    }

    /// The library-shipped defaults.
    #[must_use]
    pub const fn defaults(&self) -> &OptionsObject {
        &self.defaults
    }
}

/// Builder for [`ComponentSchema`].
///
/// Every schema it builds declares the variant props (`classes`,
/// `fixedClasses`, `variants`, `variant`) in addition to the ones added
/// explicitly.
#[derive(Debug, Clone)]
pub struct ComponentSchemaBuilder {
    type_name: String,
    props: Vec<String>,
    defaults: OptionsObject,
}

impl ComponentSchemaBuilder {
    /// Declares a prop with no library default.
    #[must_use]
    pub fn prop(mut self, name: &str) -> Self {
        self.props.push(name.to_string());
        self
    }

    /// Declares a prop with a library default.
    #[must_use]
    pub fn prop_default(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.props.push(name.to_string());
        self.defaults.insert(OptionKey::canonical(name), value);
        self
    }

    /// Sets the default `classes` regions.
    #[must_use]
    pub fn classes(mut self, regions: OptionsObject) -> Self {
        self.defaults.insert(OptionKey::CLASSES, regions);
        self
    }

    /// Sets the default `fixedClasses` regions.
    #[must_use]
    pub fn fixed_classes(mut self, regions: OptionsObject) -> Self {
        self.defaults.insert(OptionKey::FIXED_CLASSES, regions);
        self
    }

    /// Sets the default named variants.
    #[must_use]
    pub fn variants(mut self, variants: OptionsObject) -> Self {
        self.defaults.insert(OptionKey::VARIANTS, variants);
        self
    }

    /// Finishes the schema.
    #[must_use]
    pub fn build(self) -> ComponentSchema {
        let variant_props = [
            OptionKey::CLASSES,
            OptionKey::FIXED_CLASSES,
            OptionKey::VARIANTS,
            OptionKey::VARIANT,
        ];
        let declared = self
            .props
            .iter()
            .map(String::as_str)
            .chain(variant_props)
            .collect();

        ComponentSchema::new(self.type_name, declared, &self.defaults)
    }
}
