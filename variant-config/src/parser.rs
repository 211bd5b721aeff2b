//! Three-layer options merging.
//!
//! This module implements the merge of library defaults, the application's
//! global entry for a component type, and an instance's explicit overrides
//! into one options object, plus the derived per-region classes list.

use serde::Serialize;

use crate::classes::ClassesList;
use crate::options::{OptionKey, OptionValue, OptionsObject};

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

/// The final options of one component instance.
///
/// `options` holds every key present in any layer; `classes_list` is derived
/// from its `classes`, `fixedClasses`, `variants` and `variant` keys. Class
/// descriptors are still unevaluated. Serializing is meant for handing the
/// result to a renderer; there is no way back.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOptions {
    /// The merged options.
    pub options: OptionsObject,
    /// The class descriptor of every region.
    pub classes_list: ClassesList,
}

impl ResolvedOptions {
    /// Looks up a merged option.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// Looks up a merged option by dotted path, e.g. `classes.trigger`.
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&OptionValue> {
        self.options.get_path(path)
    }
}

/// Merges option layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use variant_config::{OptionsObject, VariantParser};
///
/// let defaults = OptionsObject::new()
///     .with("disabled", false)
///     .with("classes", OptionsObject::new().with("trigger", "t-base"));
/// let global = OptionsObject::new()
///     .with("classes", OptionsObject::new().with("trigger", "t-global"));
/// let overrides = OptionsObject::new().with("disabled", true);
///
/// let resolved = VariantParser::parse(&overrides, &global, &defaults);
/// assert_eq!(resolved.get("disabled").and_then(|v| v.as_bool()), Some(true));
/// assert_eq!(
///     resolved.get_path("classes.trigger").and_then(|v| v.as_str()),
///     Some("t-global"),
/// );
/// ```
pub struct VariantParser;

impl VariantParser {
    /// Resolve `overrides` over `global` over `defaults`.
    ///
    /// Pure: identical inputs always give structurally equal output, and none
    /// of the inputs is modified.
    #[must_use]
    pub fn parse(
        overrides: &OptionsObject,
        global: &OptionsObject,
        defaults: &OptionsObject,
    ) -> ResolvedOptions {
        let options = Self::merge([defaults, global, overrides]);
        let classes_list = Self::classes_list(&options);

        ResolvedOptions {
            options,
            classes_list,
        }
    }

    /// Merge layers given from lowest to highest precedence.
    #[must_use]
    pub fn merge<'a, I>(layers: I) -> OptionsObject
    where
        I: IntoIterator<Item = &'a OptionsObject>,
    {
        let mut result = OptionsObject::new();

        for layer in layers {
            Self::merge_into(&mut result, layer);
        }

        result
    }

    /// Merge source into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Ordinary keys: source value replaces target value
    /// - `classes` / `fixedClasses`: merged region by region when both sides
    ///   are mappings; otherwise the source value replaces the target value
    /// - Keys absent from source: left as they are
    pub fn merge_into(target: &mut OptionsObject, source: &OptionsObject) {
        for (key, value) in source {
            if key.is_region_merged() {
                if let (OptionValue::Map(source_regions), Some(OptionValue::Map(target_regions))) =
                    (value, target.get_mut(key.as_str()))
                {
                    Self::merge_regions(target_regions, source_regions);
                    continue;
                }
            }

            target.insert(key.clone(), value.clone());
        }
    }

    fn merge_regions(target: &mut OptionsObject, source: &OptionsObject) {
        for (region, descriptor) in source {
            target.insert(region.clone(), descriptor.clone());
        }
    }

    /// Derive the per-region classes list from merged options.
    ///
    /// A selected variant's `classes`/`fixedClasses` are laid over the base
    /// ones region by region before fixed and variable classes are combined.
    #[must_use]
    pub fn classes_list(options: &OptionsObject) -> ClassesList {
        let mut classes = Self::regions(options, OptionKey::CLASSES);
        let mut fixed = Self::regions(options, OptionKey::FIXED_CLASSES);

        if let Some(variant) = Self::selected_variant(options) {
            if let Some(layer) = variant.get(OptionKey::CLASSES) {
                Self::apply_variant_layer(&mut classes, layer);
            }
            if let Some(layer) = variant.get(OptionKey::FIXED_CLASSES) {
                Self::apply_variant_layer(&mut fixed, layer);
            }
        }

        ClassesList::compose(fixed.as_ref(), classes.as_ref())
    }

    fn regions(options: &OptionsObject, key: &str) -> Option<OptionsObject> {
        match options.get(key)? {
            OptionValue::Map(regions) => Some(regions.clone()),
            other => {
                log::debug!("'{key}' is a {}, no class regions derived from it", other.kind());
                None
            }
        }
    }

    fn selected_variant(options: &OptionsObject) -> Option<&OptionsObject> {
        let name = options.get(OptionKey::VARIANT)?.as_str()?;
        let found = options
            .get(OptionKey::VARIANTS)
            .and_then(OptionValue::as_map)
            .and_then(|variants| variants.get(name))
            .and_then(OptionValue::as_map);

        if found.is_none() {
            log::warn!("Variant '{name}' is not defined; using base classes");
        }

        found
    }

    fn apply_variant_layer(base: &mut Option<OptionsObject>, layer: &OptionValue) {
        match (base.as_mut(), layer) {
            (Some(regions), OptionValue::Map(variant_regions)) => {
                Self::merge_regions(regions, variant_regions);
            }
            (None, OptionValue::Map(variant_regions)) => {
                *base = Some(variant_regions.clone());
            }
            (_, other) => {
                log::debug!("Variant class layer is a {}, replacing regions", other.kind());
                *base = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::ClassDescriptor;

    fn regions(pairs: &[(&str, &str)]) -> OptionsObject {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn test_precedence_per_key() {
        let defaults = OptionsObject::new()
            .with("disabled", false)
            .with("teleport", false)
            .with("tagName", "div");
        let global = OptionsObject::new()
            .with("teleport", true)
            .with("tagName", "section");
        let overrides = OptionsObject::new().with("tagName", "article");

        let resolved = VariantParser::parse(&overrides, &global, &defaults);

        assert_eq!(resolved.get("disabled"), Some(&OptionValue::Bool(false)));
        assert_eq!(resolved.get("teleport"), Some(&OptionValue::Bool(true)));
        assert_eq!(resolved.get("tagName"), Some(&OptionValue::from("article")));
    }

    #[test]
    fn test_override_does_not_erase_global_sibling() {
        let defaults = OptionsObject::new().with("disabled", false).with("teleport", false);
        let global = OptionsObject::new().with("teleport", true);
        let overrides = OptionsObject::new().with("disabled", true);

        let resolved = VariantParser::parse(&overrides, &global, &defaults);

        assert_eq!(resolved.get("disabled"), Some(&OptionValue::Bool(true)));
        assert_eq!(resolved.get("teleport"), Some(&OptionValue::Bool(true)));
    }

    #[test]
    fn test_key_coverage() {
        let defaults = OptionsObject::new().with("a", 1);
        let global = OptionsObject::new().with("b", 2);
        let overrides = OptionsObject::new().with("c", 3);

        let resolved = VariantParser::parse(&overrides, &global, &defaults);
        let keys: Vec<&str> = resolved.options.keys().map(OptionKey::as_str).collect();

        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_layers() {
        let empty = OptionsObject::new();
        let resolved = VariantParser::parse(&empty, &empty, &empty);
        assert!(resolved.options.is_empty());
        assert!(resolved.classes_list.is_empty());
    }

    #[test]
    fn test_classes_merge_per_region() {
        let defaults = OptionsObject::new().with("classes", regions(&[("trigger", "a"), ("dropdown", "b")]));
        let global = OptionsObject::new().with("classes", regions(&[("trigger", "c")]));

        let resolved = VariantParser::parse(&OptionsObject::new(), &global, &defaults);

        assert_eq!(
            resolved.get("classes"),
            Some(&OptionValue::Map(regions(&[("trigger", "c"), ("dropdown", "b")])))
        );
    }

    #[test]
    fn test_classes_merge_through_all_layers() {
        let defaults = OptionsObject::new().with(
            "classes",
            regions(&[("trigger", "a"), ("dropdown", "b"), ("wrapper", "w")]),
        );
        let global = OptionsObject::new().with("classes", regions(&[("trigger", "c")]));
        let overrides = OptionsObject::new().with("classes", regions(&[("dropdown", "d")]));

        let resolved = VariantParser::parse(&overrides, &global, &defaults);

        assert_eq!(
            resolved.get("classes"),
            Some(&OptionValue::Map(regions(&[
                ("trigger", "c"),
                ("dropdown", "d"),
                ("wrapper", "w"),
            ])))
        );
    }

    #[test]
    fn test_fixed_classes_merge_per_region() {
        let defaults = OptionsObject::new().with("fixedClasses", regions(&[("trigger", "block"), ("dropdown", "z-10")]));
        let overrides = OptionsObject::new().with("fixedClasses", regions(&[("dropdown", "z-50")]));

        let resolved = VariantParser::parse(&overrides, &OptionsObject::new(), &defaults);

        assert_eq!(
            resolved.get("fixedClasses"),
            Some(&OptionValue::Map(regions(&[("trigger", "block"), ("dropdown", "z-50")])))
        );
    }

    #[test]
    fn test_scalar_classes_overwrite_instead_of_merging() {
        let defaults = OptionsObject::new().with("classes", regions(&[("trigger", "a")]));
        let global = OptionsObject::new().with("classes", "not-a-map");

        let resolved = VariantParser::parse(&OptionsObject::new(), &global, &defaults);

        assert_eq!(resolved.get("classes"), Some(&OptionValue::from("not-a-map")));
        assert!(resolved.classes_list.is_empty());
    }

    #[test]
    fn test_map_classes_replace_scalar_from_lower_layer() {
        let defaults = OptionsObject::new().with("classes", "not-a-map");
        let overrides = OptionsObject::new().with("classes", regions(&[("trigger", "t")]));

        let resolved = VariantParser::parse(&overrides, &OptionsObject::new(), &defaults);

        assert_eq!(
            resolved.get("classes"),
            Some(&OptionValue::Map(regions(&[("trigger", "t")])))
        );
        assert_eq!(resolved.classes_list.get("trigger"), Some(&ClassDescriptor::from("t")));
    }

    #[test]
    fn test_conditional_descriptors_are_kept_unevaluated() {
        let conditional = ClassDescriptor::conditional("disabled", "opacity-50", "");
        let defaults = OptionsObject::new()
            .with("disabled", true)
            .with("classes", OptionsObject::new().with("trigger", conditional.clone()));

        let resolved = VariantParser::parse(&OptionsObject::new(), &OptionsObject::new(), &defaults);

        assert_eq!(resolved.classes_list.get("trigger"), Some(&conditional));
    }

    #[test]
    fn test_classes_list_combines_fixed_and_variable() {
        let defaults = OptionsObject::new()
            .with("fixedClasses", regions(&[("trigger", "block")]))
            .with("classes", regions(&[("trigger", "bg-blue-500"), ("dropdown", "w-56")]));

        let resolved = VariantParser::parse(&OptionsObject::new(), &OptionsObject::new(), &defaults);

        assert_eq!(
            resolved.classes_list.get("trigger"),
            Some(&ClassDescriptor::List(vec!["block".into(), "bg-blue-500".into()]))
        );
        assert_eq!(resolved.classes_list.get("dropdown"), Some(&ClassDescriptor::from("w-56")));
    }

    #[test]
    fn test_selected_variant_overlays_classes() {
        let variants = OptionsObject::new().with(
            "danger",
            OptionsObject::new().with("classes", regions(&[("trigger", "bg-red-500")])),
        );
        let defaults = OptionsObject::new()
            .with("classes", regions(&[("trigger", "bg-blue-500"), ("dropdown", "w-56")]))
            .with("variants", variants);
        let overrides = OptionsObject::new().with("variant", "danger");

        let resolved = VariantParser::parse(&overrides, &OptionsObject::new(), &defaults);

        assert_eq!(resolved.classes_list.get("trigger"), Some(&ClassDescriptor::from("bg-red-500")));
        assert_eq!(resolved.classes_list.get("dropdown"), Some(&ClassDescriptor::from("w-56")));
        // the options object itself keeps the base classes
        assert_eq!(
            resolved.get_path("classes.trigger"),
            Some(&OptionValue::from("bg-blue-500"))
        );
    }

    #[test]
    fn test_variant_fixed_classes() {
        let variants = OptionsObject::new().with(
            "compact",
            OptionsObject::new().with("fixedClasses", regions(&[("dropdown", "text-sm")])),
        );
        let defaults = OptionsObject::new()
            .with("fixedClasses", regions(&[("trigger", "block")]))
            .with("variants", variants)
            .with("variant", "compact");

        let resolved = VariantParser::parse(&OptionsObject::new(), &OptionsObject::new(), &defaults);

        assert_eq!(resolved.classes_list.get("trigger"), Some(&ClassDescriptor::from("block")));
        assert_eq!(resolved.classes_list.get("dropdown"), Some(&ClassDescriptor::from("text-sm")));
    }

    #[test]
    fn test_unknown_variant_uses_base_classes() {
        let defaults = OptionsObject::new()
            .with("classes", regions(&[("trigger", "bg-blue-500")]))
            .with("variant", "missing");

        let resolved = VariantParser::parse(&OptionsObject::new(), &OptionsObject::new(), &defaults);

        assert_eq!(resolved.classes_list.get("trigger"), Some(&ClassDescriptor::from("bg-blue-500")));
    }

    #[test]
    fn test_variants_replace_as_a_whole() {
        let defaults = OptionsObject::new().with(
            "variants",
            OptionsObject::new().with("a", OptionsObject::new()).with("b", OptionsObject::new()),
        );
        let global = OptionsObject::new().with("variants", OptionsObject::new().with("c", OptionsObject::new()));

        let resolved = VariantParser::parse(&OptionsObject::new(), &global, &defaults);
        let variants = resolved.get("variants").and_then(OptionValue::as_map).unwrap();

        assert_eq!(variants.len(), 1);
        assert!(variants.contains_key("c"));
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let defaults = OptionsObject::new().with("classes", regions(&[("trigger", "a")]));
        let global = OptionsObject::new().with("classes", regions(&[("dropdown", "b")]));
        let before = (defaults.clone(), global.clone());

        let _ = VariantParser::parse(&OptionsObject::new(), &global, &defaults);

        assert_eq!((defaults, global), before);
    }

    #[test]
    fn test_end_to_end_widget_scenario() {
        let defaults = OptionsObject::new()
            .with("disabled", false)
            .with("classes", regions(&[("trigger", "t-base")]));
        let global = OptionsObject::new().with("classes", regions(&[("trigger", "t-global")]));
        let overrides = OptionsObject::new().with("disabled", true);

        let resolved = VariantParser::parse(&overrides, &global, &defaults);

        let expected = OptionsObject::new()
            .with("disabled", true)
            .with("classes", regions(&[("trigger", "t-global")]));
        assert_eq!(resolved.options, expected);
    }
}
