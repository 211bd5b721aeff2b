//! Option values.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::classes::ClassDescriptor;
use crate::options::OptionsObject;

/// Opaque identifier for a function-valued option.
///
/// The merge core never calls functions; it only carries the identifier
/// through to whoever renders the component.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallbackId(String);

impl CallbackId {
    /// Creates a callback identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<callback {}>", self.0)
    }
}

/// A single option value.
///
/// Values read from YAML or JSON documents only ever produce the plain data
/// variants; [`OptionValue::Callback`] and [`OptionValue::Class`] are built
/// programmatically.
///
/// Serialization is one-way for those two variants. A callback is written as
/// its identifier string and a class descriptor in its tagged form, and both
/// read back as plain data (`Text` and `Map`). Serialize resolved options to
/// hand them to a renderer, not to persist and reload them.
///
/// # Examples
///
/// ```
/// use variant_config::OptionValue;
///
/// let v = OptionValue::from("bottom-start");
/// assert_eq!(v.as_str(), Some("bottom-start"));
/// assert!(v.is_truthy());
/// assert!(!OptionValue::from(false).is_truthy());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum OptionValue {
    /// Absence of a value.
    #[default]
    Null,
    /// A boolean flag.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Text(String),
    /// An ordered list of values.
    List(Vec<OptionValue>),
    /// A nested mapping.
    Map(OptionsObject),
    /// A function-valued option.
    Callback(CallbackId),
    /// An explicit class descriptor.
    Class(ClassDescriptor),
}

impl OptionValue {
    /// Returns `true` if this is [`OptionValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Scripting-style truthiness.
    ///
    /// `Null`, `false`, `0`, `NaN` and the empty string are falsy; every
    /// other value, empty lists and maps included, is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0 && !f.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::List(_) | Self::Map(_) | Self::Callback(_) | Self::Class(_) => true,
        }
    }

    /// Returns the boolean if this is a `Bool`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Int`.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the string if this is a `Text`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the mapping if this is a `Map`.
    #[must_use]
    pub const fn as_map(&self) -> Option<&OptionsObject> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the mapping mutably if this is a `Map`.
    pub fn as_map_mut(&mut self) -> Option<&mut OptionsObject> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Short name of the value's shape, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Callback(_) => "callback",
            Self::Class(_) => "class",
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for OptionValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for OptionValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<OptionValue>> for OptionValue {
    fn from(items: Vec<OptionValue>) -> Self {
        Self::List(items)
    }
}

impl From<OptionsObject> for OptionValue {
    fn from(map: OptionsObject) -> Self {
        Self::Map(map)
    }
}

impl From<CallbackId> for OptionValue {
    fn from(id: CallbackId) -> Self {
        Self::Callback(id)
    }
}

impl From<ClassDescriptor> for OptionValue {
    fn from(descriptor: ClassDescriptor) -> Self {
        Self::Class(descriptor)
    }
}

impl From<serde_yaml::Value> for OptionValue {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::Text(s),
            Value::Sequence(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Mapping(mapping) => {
                let mut map = OptionsObject::new();
                for (key, value) in mapping {
                    let key = match key {
                        Value::String(s) => s,
                        Value::Bool(b) => b.to_string(),
                        Value::Number(n) => n.to_string(),
                        other => {
                            log::debug!("Skipping non-scalar mapping key: {other:?}");
                            continue;
                        }
                    };
                    map.insert(key.as_str(), Self::from(value));
                }
                Self::Map(map)
            }
            Value::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}

impl From<serde_json::Value> for OptionValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(object) => Self::Map(
                object
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for OptionValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_yaml::Value::deserialize(deserializer).map(Self::from)
    }
}
