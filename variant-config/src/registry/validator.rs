//! Registry validation.
//!
//! Registering configuration never fails: an entry for a misspelled type is
//! stored and simply never read, and an entry key no component declares is
//! merged into the result like any other. This module lets the embedding
//! application surface both situations, either as a list of findings or as
//! a hard error.

use std::fmt;

use crate::catalog::SchemaCatalog;
use crate::error::{Error, Result};
use crate::registry::ConfigRegistry;

/// A finding about registered configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// An entry was registered for a type the catalog does not know.
    UnknownType {
        /// The registered type name.
        type_name: String,
    },
    /// An entry sets a key the component does not declare.
    ///
    /// The key still reaches the resolved options.
    UndeclaredKey {
        /// The component type.
        type_name: String,
        /// The offending key.
        key: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownType { type_name } => {
                write!(f, "configuration registered for unknown component type '{type_name}'")
            }
            Self::UndeclaredKey { type_name, key } => {
                write!(f, "'{type_name}' does not declare option '{key}'")
            }
        }
    }
}

impl From<Diagnostic> for Error {
    fn from(diagnostic: Diagnostic) -> Self {
        match diagnostic {
            Diagnostic::UnknownType { type_name } => Self::UnknownComponentType { type_name },
            Diagnostic::UndeclaredKey { type_name, key } => Self::Validation {
                field: format!("{type_name}.{key}"),
                message: "not a declared option of the component".into(),
            },
        }
    }
}

/// Checks registered configuration against the component catalog.
///
/// # Examples
///
/// ```
/// use variant_config::{ConfigRegistry, OptionsObject, RegistryValidator, SchemaCatalog};
///
/// let mut registry = ConfigRegistry::new();
/// registry.register("TDropdown", OptionsObject::new().with("teleport", true));
///
/// RegistryValidator::validate(&registry, &SchemaCatalog::builtin()).unwrap();
/// ```
pub struct RegistryValidator;

impl RegistryValidator {
    /// Collect every finding, in type-name then key order.
    #[must_use]
    pub fn diagnose(registry: &ConfigRegistry, catalog: &SchemaCatalog) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (type_name, entry) in registry.iter() {
            let Some(schema) = catalog.get(type_name) else {
                diagnostics.push(Diagnostic::UnknownType {
                    type_name: type_name.to_string(),
                });
                continue;
            };

            for key in entry.keys() {
                if !key.is_reserved() && !schema.declared().contains_key(key) {
                    diagnostics.push(Diagnostic::UndeclaredKey {
                        type_name: type_name.to_string(),
                        key: key.to_string(),
                    });
                }
            }
        }

        diagnostics
    }

    /// Fail on the first finding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownComponentType`] for an entry whose type the
    /// catalog does not know, or [`Error::Validation`] for an entry key the
    /// component does not declare.
    pub fn validate(registry: &ConfigRegistry, catalog: &SchemaCatalog) -> Result<()> {
        match Self::diagnose(registry, catalog).into_iter().next() {
            Some(diagnostic) => Err(diagnostic.into()),
            None => Ok(()),
        }
    }
}
