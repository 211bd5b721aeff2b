//! Schemas of the library's components.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::options::OptionsObject;
use crate::schema::ComponentSchema;

/// Type name of the card component.
pub const T_CARD: &str = "TCard";

/// Type name of the dropdown component.
pub const T_DROPDOWN: &str = "TDropdown";

/// Type name of the rich select component.
pub const T_RICH_SELECT: &str = "TRichSelect";

/// Component schemas by type name.
///
/// # Examples
///
/// ```
/// use variant_config::SchemaCatalog;
///
/// let catalog = SchemaCatalog::builtin();
/// let dropdown = catalog.get("TDropdown").unwrap();
/// assert!(dropdown.declared().contains("teleport"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    schemas: BTreeMap<String, Arc<ComponentSchema>>,
}

impl SchemaCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The library's own components.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert(card());
        catalog.insert(dropdown());
        catalog.insert(rich_select());
        catalog
    }

    /// Adds a schema, replacing any schema with the same type name.
    pub fn insert(&mut self, schema: ComponentSchema) {
        self.schemas
            .insert(schema.type_name().to_string(), Arc::new(schema));
    }

    /// Returns the schema of a type.
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<Arc<ComponentSchema>> {
        self.schemas.get(type_name).cloned()
    }

    /// Returns `true` if the type is known.
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.schemas.contains_key(type_name)
    }

    /// Iterates the known type names in order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }
}

fn card() -> ComponentSchema {
    ComponentSchema::builder(T_CARD)
        .prop_default("tagName", "div")
        .prop("body")
        .prop("header")
        .prop("footer")
        .classes(
            OptionsObject::new()
                .with("wrapper", "border rounded shadow-sm bg-white border-gray-100")
                .with("header", "border-b border-gray-100 rounded-t p-3")
                .with("body", "p-3")
                .with("footer", "border-gray-100 border-t rounded-b p-3"),
        )
        .build()
}

fn dropdown() -> ComponentSchema {
    ComponentSchema::builder(T_DROPDOWN)
        .prop("text")
        .prop_default("disabled", false)
        .prop_default("tagName", "button")
        .prop_default("dropdownTagName", "div")
        .prop_default("dropdownPlacement", "bottom")
        .prop_default("toggleOnFocus", false)
        .prop_default("toggleOnClick", true)
        .prop_default("toggleOnHover", false)
        .prop_default("hideOnLeaveTimeout", 250)
        .prop_default("show", false)
        .prop_default("teleport", false)
        .prop_default("teleportTo", "body")
        .classes(
            OptionsObject::new()
                .with(
                    "trigger",
                    "block px-4 py-2 text-white transition duration-100 ease-in-out bg-blue-500 \
                     border border-transparent rounded shadow-sm hover:bg-blue-600 \
                     focus:border-blue-500 focus:ring-2 focus:ring-blue-500 focus:outline-none \
                     focus:ring-opacity-50 disabled:opacity-50 disabled:cursor-not-allowed",
                )
                .with("dropdown", "w-56 bg-white rounded shadow"),
        )
        .build()
}

fn rich_select() -> ComponentSchema {
    ComponentSchema::builder(T_RICH_SELECT)
        .prop("name")
        .prop("options")
        .prop("placeholder")
        .prop_default("multiple", false)
        .prop_default("disabled", false)
        .prop_default("searchBoxPlaceholder", "Search...")
        .prop_default("noResultsText", "No results found")
        .prop_default("closeOnSelect", true)
        .prop_default("teleport", false)
        .classes(
            OptionsObject::new()
                .with(
                    "trigger",
                    "flex items-center justify-between w-full px-3 py-2 text-left bg-white \
                     border border-gray-300 rounded shadow-sm",
                )
                .with("dropdown", "absolute z-10 w-full bg-white rounded shadow-sm")
                .with("searchBox", "w-full px-3 py-2 border border-gray-300 rounded")
                .with("option", "px-3 py-2")
                .with("selectedOption", "px-3 py-2 font-semibold bg-blue-100"),
        )
        .build()
}
