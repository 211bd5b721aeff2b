//! The options data model.
//!
//! Every layer of configuration (library defaults, the application's global
//! entry for a component type, and a component instance's explicit props) is
//! an [`OptionsObject`]: a mapping from canonical [`OptionKey`]s to
//! [`OptionValue`]s. Two keys are reserved for region-level merging:
//! `classes` and `fixedClasses`.

mod key;
mod object;
mod value;

pub use key::{camelize, OptionKey};
pub use object::OptionsObject;
pub use value::{CallbackId, OptionValue};
