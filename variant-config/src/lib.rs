#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # variant-config
//!
//! Layered configuration resolution for configurable form widgets.
//!
//! Every component instance ends up with one options object built from three
//! layers, highest precedence first:
//!
//! 1. Explicit instance overrides (props the caller actually passed)
//! 2. The application's global entry for the component type
//! 3. The library's defaults for the component type
//!
//! Layers merge key by key. The `classes` and `fixedClasses` mappings merge
//! region by region, so overriding one region keeps the others.
//!
//! ## Core Types
//!
//! - [`OptionKey`], [`OptionValue`] and [`OptionsObject`]: the options data model
//! - [`VariantParser`] and [`ResolvedOptions`]: the three-layer merge
//! - [`ConfigRegistry`]: the application's per-type global configuration
//! - [`ConfigurationResolver`] and [`PropsSnapshot`]: per-instance resolution
//! - [`ClassDescriptor`] and [`ClassesList`]: lazily evaluated styling
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use variant_config::{
//!     ConfigRegistry, ConfigurationResolver, OptionsObject, PropsSnapshot, SchemaCatalog,
//! };
//!
//! // Application bootstrap
//! let mut registry = ConfigRegistry::new();
//! registry.register("TDropdown", OptionsObject::new().with("teleport", true));
//! let registry = Arc::new(registry);
//!
//! // One component instance
//! let catalog = SchemaCatalog::builtin();
//! let mut resolver = ConfigurationResolver::for_type(&catalog, "TDropdown", registry).unwrap();
//! resolver.update(&PropsSnapshot::new().with_passed("disabled", true).with_attribute("id"));
//!
//! let options = resolver.current();
//! assert_eq!(options.get("disabled").and_then(|v| v.as_bool()), Some(true));
//! assert_eq!(options.get("teleport").and_then(|v| v.as_bool()), Some(true));
//! assert!(options.get("id").is_none());
//! ```

pub mod attributes;
pub mod catalog;
pub mod classes;
pub mod error;
pub mod options;
pub mod parser;
pub mod registry;
pub mod resolver;
pub mod schema;

// Re-export key types at crate root for convenience
pub use attributes::{filter_declared, normalize, partition_attributes, AttributeSplit, DeclaredKeys};
pub use catalog::SchemaCatalog;
pub use classes::{ClassDescriptor, ClassesList, PredicateState};
pub use error::{Error, Result};
pub use options::{CallbackId, OptionKey, OptionValue, OptionsObject};
pub use parser::{ResolvedOptions, VariantParser};
pub use registry::{ConfigRegistry, Diagnostic, RegistryLoader, RegistryValidator};
pub use resolver::{ConfigurationResolver, PropsSnapshot};
pub use schema::{ComponentSchema, ComponentSchemaBuilder};
