//! Registry document loading.
//!
//! A registry document maps component type names to partial options:
//!
//! ```yaml
//! TDropdown:
//!   teleport: true
//!   classes:
//!     trigger: px-3 py-1 bg-gray-800 text-white
//! TCard:
//!   tag-name: section
//! ```
//!
//! YAML and JSON are both accepted. Option keys at the top of each entry are
//! normalized like attribute names; nested keys are kept verbatim.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::options::OptionValue;
use crate::registry::ConfigRegistry;

/// Loads registry documents.
///
/// # Examples
///
/// ```
/// use variant_config::RegistryLoader;
///
/// let registry = RegistryLoader::from_yaml_str("TDropdown:\n  teleport: true\n").unwrap();
/// assert_eq!(
///     registry.lookup("TDropdown").get("teleport").and_then(|v| v.as_bool()),
///     Some(true),
/// );
/// ```
pub struct RegistryLoader;

impl RegistryLoader {
    /// Parse a YAML document into a new registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid YAML or does not map type
    /// names to mappings.
    pub fn from_yaml_str(text: &str) -> Result<ConfigRegistry> {
        let mut registry = ConfigRegistry::new();
        Self::load_yaml_into(&mut registry, text)?;
        Ok(registry)
    }

    /// Parse a JSON document into a new registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or does not map type
    /// names to objects.
    pub fn from_json_str(text: &str) -> Result<ConfigRegistry> {
        let mut registry = ConfigRegistry::new();
        Self::load_json_into(&mut registry, text)?;
        Ok(registry)
    }

    /// Load a document file into a new registry.
    ///
    /// Files ending in `.json` are parsed as JSON, anything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<ConfigRegistry> {
        let mut registry = ConfigRegistry::new();
        Self::load_file_into(&mut registry, path)?;
        Ok(registry)
    }

    /// Load a document file into an existing registry.
    ///
    /// Types the document names replace whatever the registry held for them.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file_into(registry: &mut ConfigRegistry, path: &Path) -> Result<()> {
        let contents = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        log::debug!("Loading component configuration from {}", path.display());

        if is_json {
            Self::load_json_into(registry, &contents)
        } else {
            Self::load_yaml_into(registry, &contents)
        }
    }

    /// Parse a YAML document into an existing registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid YAML or has the wrong shape.
    pub fn load_yaml_into(registry: &mut ConfigRegistry, text: &str) -> Result<()> {
        let document: serde_yaml::Value = serde_yaml::from_str(text)?;
        Self::register_document(registry, OptionValue::from(document))
    }

    /// Parse a JSON document into an existing registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or has the wrong shape.
    pub fn load_json_into(registry: &mut ConfigRegistry, text: &str) -> Result<()> {
        let document: serde_json::Value = serde_json::from_str(text)?;
        Self::register_document(registry, OptionValue::from(document))
    }

    /// Validate the document shape, then register each entry.
    ///
    /// Nothing is registered if any entry is malformed.
    fn register_document(registry: &mut ConfigRegistry, document: OptionValue) -> Result<()> {
        let entries = match document {
            // An empty document configures nothing
            OptionValue::Null => return Ok(()),
            OptionValue::Map(entries) => entries,
            other => {
                return Err(Error::InvalidDocument {
                    reason: format!(
                        "top level must map component types to options, found a {}",
                        other.kind()
                    ),
                })
            }
        };

        let mut parsed = Vec::with_capacity(entries.len());
        for (type_name, entry) in entries {
            match entry {
                OptionValue::Map(options) => parsed.push((type_name, options)),
                OptionValue::Null => parsed.push((type_name, Default::default())),
                other => {
                    return Err(Error::InvalidDocument {
                        reason: format!(
                            "entry for '{type_name}' must be a mapping, found a {}",
                            other.kind()
                        ),
                    })
                }
            }
        }

        for (type_name, options) in parsed {
            registry.register(type_name.as_str(), options);
        }

        Ok(())
    }
}
