//! Class descriptors and the per-region classes list.
//!
//! The parser never evaluates a descriptor. It only decides which
//! descriptor belongs to which region; the rendering layer calls
//! [`ClassesList::render`] with the instance's current state when it
//! actually needs class strings.

use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;

use serde::Serialize;

use crate::options::{OptionKey, OptionValue, OptionsObject};

/// A styling descriptor for one UI region.
///
/// # Examples
///
/// ```
/// use variant_config::{ClassDescriptor, OptionsObject};
///
/// let descriptor = ClassDescriptor::List(vec![
///     ClassDescriptor::from("px-4 py-2"),
///     ClassDescriptor::conditional("disabled", "opacity-50", ""),
/// ]);
///
/// let enabled = OptionsObject::new().with("disabled", false);
/// let disabled = OptionsObject::new().with("disabled", true);
///
/// assert_eq!(descriptor.render(&enabled), "px-4 py-2");
/// assert_eq!(descriptor.render(&disabled), "px-4 py-2 opacity-50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ClassDescriptor {
    /// A fixed class string.
    Static(String),
    /// A choice between two descriptors, decided by a named predicate at
    /// render time.
    Conditional {
        /// Name of the state flag the choice depends on.
        predicate: String,
        /// Used when the predicate holds.
        when_true: Box<ClassDescriptor>,
        /// Used when it does not.
        when_false: Box<ClassDescriptor>,
    },
    /// Several descriptors applied in order.
    List(Vec<ClassDescriptor>),
}

impl ClassDescriptor {
    /// Builds a [`ClassDescriptor::Conditional`].
    #[must_use]
    pub fn conditional(
        predicate: impl Into<String>,
        when_true: impl Into<ClassDescriptor>,
        when_false: impl Into<ClassDescriptor>,
    ) -> Self {
        Self::Conditional {
            predicate: predicate.into(),
            when_true: Box::new(when_true.into()),
            when_false: Box::new(when_false.into()),
        }
    }

    /// Interprets an option value as a class descriptor.
    ///
    /// - strings are static classes
    /// - lists are lists of descriptors (unusable items are dropped)
    /// - mappings of `class -> condition` become conditionals: a string
    ///   condition names the predicate, `true` means always, anything falsy
    ///   means never, any other truthy value means always
    /// - explicit [`OptionValue::Class`] values are taken as they are
    ///
    /// Returns `None` for values that carry no classes (null, numbers,
    /// booleans, callbacks).
    #[must_use]
    pub fn from_value(value: &OptionValue) -> Option<Self> {
        match value {
            OptionValue::Text(s) => Some(Self::Static(s.clone())),
            OptionValue::List(items) => {
                Some(Self::List(items.iter().filter_map(Self::from_value).collect()))
            }
            OptionValue::Map(toggles) => Some(Self::List(
                toggles
                    .iter()
                    .filter_map(|(class, condition)| match condition {
                        OptionValue::Text(predicate) => {
                            Some(Self::conditional(predicate.as_str(), class.as_str(), ""))
                        }
                        other if other.is_truthy() => Some(Self::from(class.as_str())),
                        _ => None,
                    })
                    .collect(),
            )),
            OptionValue::Class(descriptor) => Some(descriptor.clone()),
            OptionValue::Callback(id) => {
                log::debug!("Ignoring callback {id} used as a class descriptor");
                None
            }
            OptionValue::Null | OptionValue::Bool(_) | OptionValue::Int(_) | OptionValue::Float(_) => {
                None
            }
        }
    }

    /// Returns `true` if rendering does not depend on any state.
    #[must_use]
    pub fn is_static(&self) -> bool {
        match self {
            Self::Static(_) => true,
            Self::Conditional { .. } => false,
            Self::List(items) => items.iter().all(Self::is_static),
        }
    }

    /// Names of every predicate this descriptor consults.
    #[must_use]
    pub fn predicates(&self) -> BTreeSet<&str> {
        let mut out = BTreeSet::new();
        self.collect_predicates(&mut out);
        out
    }

    fn collect_predicates<'a>(&'a self, out: &mut BTreeSet<&'a str>) {
        match self {
            Self::Static(_) => {}
            Self::Conditional {
                predicate,
                when_true,
                when_false,
            } => {
                out.insert(predicate.as_str());
                when_true.collect_predicates(out);
                when_false.collect_predicates(out);
            }
            Self::List(items) => {
                for item in items {
                    item.collect_predicates(out);
                }
            }
        }
    }

    /// Evaluates the descriptor against the given state.
    ///
    /// Class tokens are joined with single spaces; empty pieces are dropped.
    #[must_use]
    pub fn render<S: PredicateState + ?Sized>(&self, state: &S) -> String {
        let mut tokens = Vec::new();
        self.collect_tokens(state, &mut tokens);
        tokens.join(" ")
    }

    fn collect_tokens<'a, S: PredicateState + ?Sized>(&'a self, state: &S, out: &mut Vec<&'a str>) {
        match self {
            Self::Static(classes) => out.extend(classes.split_whitespace()),
            Self::Conditional {
                predicate,
                when_true,
                when_false,
            } => {
                if state.is_active(predicate) {
                    when_true.collect_tokens(state, out);
                } else {
                    when_false.collect_tokens(state, out);
                }
            }
            Self::List(items) => {
                for item in items {
                    item.collect_tokens(state, out);
                }
            }
        }
    }
}

impl From<&str> for ClassDescriptor {
    fn from(classes: &str) -> Self {
        Self::Static(classes.to_string())
    }
}

impl From<String> for ClassDescriptor {
    fn from(classes: String) -> Self {
        Self::Static(classes)
    }
}

/// Instance state that conditional descriptors are evaluated against.
pub trait PredicateState {
    /// Returns `true` if the named predicate currently holds.
    fn is_active(&self, predicate: &str) -> bool;
}

/// A predicate holds when the option of the same name is truthy.
impl PredicateState for OptionsObject {
    fn is_active(&self, predicate: &str) -> bool {
        self.get(predicate).is_some_and(OptionValue::is_truthy)
    }
}

/// A predicate holds when its name is in the set.
impl PredicateState for BTreeSet<String> {
    fn is_active(&self, predicate: &str) -> bool {
        self.contains(predicate)
    }
}

/// The resolved class descriptor of every region of a component.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ClassesList(BTreeMap<OptionKey, ClassDescriptor>);

impl ClassesList {
    /// Creates an empty classes list.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builds the list from the effective fixed and variable class maps.
    ///
    /// A region present in both gets `List[fixed, classes]`; a region present
    /// in only one gets that descriptor. Values that carry no classes are
    /// skipped.
    #[must_use]
    pub fn compose(fixed: Option<&OptionsObject>, classes: Option<&OptionsObject>) -> Self {
        let mut regions: BTreeMap<OptionKey, Vec<ClassDescriptor>> = BTreeMap::new();

        for layer in [fixed, classes].into_iter().flatten() {
            for (region, value) in layer {
                if let Some(descriptor) = ClassDescriptor::from_value(value) {
                    regions.entry(region.clone()).or_default().push(descriptor);
                }
            }
        }

        Self(
            regions
                .into_iter()
                .map(|(region, mut parts)| {
                    let descriptor = if parts.len() == 1 {
                        parts.remove(0)
                    } else {
                        ClassDescriptor::List(parts)
                    };
                    (region, descriptor)
                })
                .collect(),
        )
    }

    /// Inserts or replaces the descriptor of a region.
    pub fn insert(&mut self, region: impl Into<OptionKey>, descriptor: impl Into<ClassDescriptor>) {
        self.0.insert(region.into(), descriptor.into());
    }

    /// Returns the descriptor of a region.
    #[must_use]
    pub fn get(&self, region: &str) -> Option<&ClassDescriptor> {
        self.0.get(region)
    }

    /// Renders one region against the given state.
    #[must_use]
    pub fn render<S: PredicateState + ?Sized>(&self, region: &str, state: &S) -> Option<String> {
        self.get(region).map(|descriptor| descriptor.render(state))
    }

    /// Renders every region against the given state.
    #[must_use]
    pub fn render_all<S: PredicateState + ?Sized>(&self, state: &S) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(region, descriptor)| (region.to_string(), descriptor.render(state)))
            .collect()
    }

    /// Iterates the regions in order.
    pub fn iter(&self) -> btree_map::Iter<'_, OptionKey, ClassDescriptor> {
        self.0.iter()
    }

    /// Number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no region has classes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
