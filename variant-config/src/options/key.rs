//! Canonical option keys.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Converts an externally supplied attribute name to its canonical form.
///
/// A hyphen followed by a word character (`[A-Za-z0-9_]`) is removed and the
/// character upper-cased; every other character is kept as-is. Names that are
/// already canonical come back unchanged, so the conversion is idempotent.
///
/// # Examples
///
/// ```
/// use variant_config::options::camelize;
///
/// assert_eq!(camelize("tool-tip"), "toolTip");
/// assert_eq!(camelize("teleport-to"), "teleportTo");
/// assert_eq!(camelize("data-foo"), "dataFoo");
/// assert_eq!(camelize("disabled"), "disabled");
/// assert_eq!(camelize("toolTip"), "toolTip");
/// ```
#[must_use]
pub fn camelize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_alphanumeric() || next == '_' {
                    chars.next();
                    out.extend(next.to_uppercase());
                    continue;
                }
            }
        }
        out.push(c);
    }

    out
}

/// An identifier for a configurable setting.
///
/// [`OptionKey::new`] keeps the text verbatim; [`OptionKey::canonical`]
/// converts an external attribute name to canonical form first. Keys are
/// compared exactly, so anything arriving from outside (attribute names,
/// declared prop lists, registry documents) goes through `canonical` before
/// it is compared against anything else. Nested mappings, such as class
/// toggles like `opacity-50`, keep their keys verbatim.
///
/// # Examples
///
/// ```
/// use variant_config::OptionKey;
///
/// let a = OptionKey::canonical("teleport-to");
/// let b = OptionKey::new("teleportTo");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "teleportTo");
/// assert_ne!(OptionKey::new("teleport-to"), b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionKey(String);

impl OptionKey {
    /// Reserved key holding per-region class descriptors.
    pub const CLASSES: &'static str = "classes";

    /// Reserved key holding per-region classes that are always applied.
    pub const FIXED_CLASSES: &'static str = "fixedClasses";

    /// Reserved key holding the named variants.
    pub const VARIANTS: &'static str = "variants";

    /// Reserved key selecting one of the named variants.
    pub const VARIANT: &'static str = "variant";

    /// Creates a key from text that is used as-is.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Creates a key from an external attribute name, normalizing it.
    #[must_use]
    pub fn canonical(raw: &str) -> Self {
        Self(camelize(raw))
    }

    /// Returns the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the keys whose mapping values merge region by region.
    #[must_use]
    pub fn is_region_merged(&self) -> bool {
        self.0 == Self::CLASSES || self.0 == Self::FIXED_CLASSES
    }

    /// Returns `true` for every key the class machinery reserves.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.is_region_merged() || self.0 == Self::VARIANTS || self.0 == Self::VARIANT
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OptionKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for OptionKey {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for OptionKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OptionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
