//! Options objects: ordered mappings from canonical keys to values.

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

use crate::options::{OptionKey, OptionValue};

/// A mapping from [`OptionKey`] to [`OptionValue`].
///
/// Backed by a `BTreeMap`, so iteration order is deterministic. Keys are
/// stored and compared verbatim; see [`OptionsObject::canonicalized`] for
/// normalizing externally authored keys.
///
/// # Examples
///
/// ```
/// use variant_config::OptionsObject;
///
/// let options = OptionsObject::new()
///     .with("disabled", false)
///     .with("teleportTo", "body");
///
/// assert_eq!(options.len(), 2);
/// assert!(options.contains_key("teleportTo"));
/// assert_eq!(options.get("teleportTo").and_then(|v| v.as_str()), Some("body"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionsObject(BTreeMap<OptionKey, OptionValue>);

impl OptionsObject {
    /// Creates an empty options object.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<OptionKey>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a value, returning the one it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<OptionKey>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Looks up a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    /// Looks up a value mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut OptionValue> {
        self.0.get_mut(key)
    }

    /// Looks up a nested value by dotted path, e.g. `classes.trigger`.
    ///
    /// Every segment but the last must resolve to a mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use variant_config::OptionsObject;
    ///
    /// let options = OptionsObject::new().with(
    ///     "classes",
    ///     OptionsObject::new().with("trigger", "btn"),
    /// );
    /// assert_eq!(
    ///     options.get_path("classes.trigger").and_then(|v| v.as_str()),
    ///     Some("btn"),
    /// );
    /// assert!(options.get_path("classes.dropdown").is_none());
    /// assert!(options.get_path("classes.trigger.deeper").is_none());
    /// ```
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&OptionValue> {
        let mut segments = path.split('.');
        let mut current = self.get(segments.next()?)?;
        for segment in segments {
            current = current.as_map()?.get(segment)?;
        }
        Some(current)
    }

    /// Removes a value.
    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.0.remove(key)
    }

    /// Returns `true` if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns a copy whose keys are in canonical form.
    ///
    /// Top-level keys are normalized, and so are the region names one level
    /// below `classes` and `fixedClasses`, including those of every variant
    /// under `variants`. Deeper mappings, such as class toggles like
    /// `opacity-50`, keep their keys verbatim. When two spellings collapse to
    /// the same canonical key, the one that sorts last wins; for a hyphenated
    /// and a camel-cased spelling that is the camel-cased one.
    ///
    /// # Examples
    ///
    /// ```
    /// use variant_config::OptionsObject;
    ///
    /// let authored = OptionsObject::new()
    ///     .with("teleport-to", "body")
    ///     .with(
    ///         "classes",
    ///         OptionsObject::new()
    ///             .with("search-box", OptionsObject::new().with("opacity-50", "disabled")),
    ///     );
    /// let options = authored.canonicalized();
    ///
    /// assert!(options.contains_key("teleportTo"));
    /// assert!(options.get_path("classes.searchBox.opacity-50").is_some());
    /// ```
    #[must_use]
    pub fn canonicalized(&self) -> Self {
        let mut canonical = self.with_canonical_keys();

        for (key, value) in &mut canonical.0 {
            let Some(inner) = value.as_map_mut() else {
                continue;
            };

            if key.is_region_merged() {
                *inner = inner.with_canonical_keys();
            } else if key.as_str() == OptionKey::VARIANTS {
                for variant in inner.0.values_mut().filter_map(OptionValue::as_map_mut) {
                    *variant = variant.canonicalized();
                }
            }
        }

        canonical
    }

    fn with_canonical_keys(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|(key, value)| (OptionKey::canonical(key.as_str()), value.clone()))
                .collect(),
        )
    }

    /// Iterates the keys in order.
    pub fn keys(&self) -> btree_map::Keys<'_, OptionKey, OptionValue> {
        self.0.keys()
    }

    /// Iterates the entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, OptionKey, OptionValue> {
        self.0.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

}

impl<K, V> FromIterator<(K, V)> for OptionsObject
where
    K: Into<OptionKey>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for OptionsObject {
    type Item = (OptionKey, OptionValue);
    type IntoIter = btree_map::IntoIter<OptionKey, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a OptionsObject {
    type Item = (&'a OptionKey, &'a OptionValue);
    type IntoIter = btree_map::Iter<'a, OptionKey, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
