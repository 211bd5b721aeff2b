//! Attribute name normalization and filtering.
//!
//! A component receives a flat set of attributes from its caller. Only those
//! whose canonical name is a declared prop count as options; everything else
//! (`id`, `data-*`, `aria-*`, ...) is passed through to the rendered element
//! untouched.

use std::collections::{BTreeMap, BTreeSet};

use crate::options::{OptionKey, OptionValue, OptionsObject};

/// Converts an external attribute name into its canonical option key.
///
/// # Examples
///
/// ```
/// use variant_config::attributes::normalize;
///
/// assert_eq!(normalize("tool-tip").as_str(), "toolTip");
/// assert_eq!(normalize("disabled").as_str(), "disabled");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> OptionKey {
    OptionKey::canonical(raw)
}

/// The set of option keys a component declares.
///
/// Names are normalized on the way in, so a schema may list `teleport-to` or
/// `teleportTo` interchangeably.
///
/// # Examples
///
/// ```
/// use variant_config::DeclaredKeys;
///
/// let declared = DeclaredKeys::new(["disabled", "teleport-to"]);
/// assert!(declared.contains("teleportTo"));
/// assert!(!declared.contains("id"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeclaredKeys(BTreeSet<OptionKey>);

impl DeclaredKeys {
    /// Builds the declared set from raw names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(names.into_iter().map(|name| normalize(name.as_ref())).collect())
    }

    /// Returns `true` if the canonical form of `name` is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(normalize(name).as_str())
    }

    /// Returns `true` if the key is declared.
    #[must_use]
    pub fn contains_key(&self, key: &OptionKey) -> bool {
        self.0.contains(key)
    }

    /// Iterates the declared keys in order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionKey> {
        self.0.iter()
    }

    /// Number of declared keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for DeclaredKeys {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Normalizes raw attribute names and keeps only the declared ones.
///
/// Empty input, or an empty declared set, yields an empty result.
///
/// # Examples
///
/// ```
/// use variant_config::attributes::filter_declared;
/// use variant_config::{DeclaredKeys, OptionKey};
///
/// let declared = DeclaredKeys::new(["disabled", "teleport"]);
/// let kept = filter_declared(["disabled", "id", "data-foo"], &declared);
///
/// assert_eq!(kept.into_iter().collect::<Vec<_>>(), vec![OptionKey::new("disabled")]);
/// ```
pub fn filter_declared<I, S>(raw_names: I, declared: &DeclaredKeys) -> BTreeSet<OptionKey>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw_names
        .into_iter()
        .map(|name| normalize(name.as_ref()))
        .filter(|key| declared.contains_key(key))
        .collect()
}

/// A raw attribute set split into options and pass-through attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeSplit {
    /// Declared options, keyed canonically.
    pub options: OptionsObject,
    /// Everything else, keyed by the name the caller used.
    pub passthrough: BTreeMap<String, OptionValue>,
}

/// Splits raw attributes into declared options and pass-through attributes.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use variant_config::attributes::partition_attributes;
/// use variant_config::{DeclaredKeys, OptionValue};
///
/// let mut attrs = BTreeMap::new();
/// attrs.insert("teleport-to".to_string(), OptionValue::from("body"));
/// attrs.insert("data-test".to_string(), OptionValue::from("menu"));
///
/// let split = partition_attributes(&attrs, &DeclaredKeys::new(["teleportTo"]));
/// assert!(split.options.contains_key("teleportTo"));
/// assert!(split.passthrough.contains_key("data-test"));
/// ```
#[must_use]
pub fn partition_attributes(
    attributes: &BTreeMap<String, OptionValue>,
    declared: &DeclaredKeys,
) -> AttributeSplit {
    let mut split = AttributeSplit::default();

    for (name, value) in attributes {
        let key = normalize(name);
        if declared.contains_key(&key) {
            split.options.insert(key, value.clone());
        } else {
            split.passthrough.insert(name.clone(), value.clone());
        }
    }

    split.options = split.options.canonicalized();
    split
}
