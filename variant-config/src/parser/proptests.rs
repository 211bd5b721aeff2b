//! Property-based tests for the variant parser.

use std::collections::BTreeSet;

use super::VariantParser;
use crate::options::{OptionKey, OptionValue, OptionsObject};
use proptest::prelude::*;

fn value_strategy() -> impl Strategy<Value = OptionValue> {
    prop_oneof![
        Just(OptionValue::Null),
        any::<bool>().prop_map(OptionValue::Bool),
        any::<i64>().prop_map(OptionValue::Int),
        "[a-z]{0,8}".prop_map(OptionValue::Text),
    ]
}

fn regions_strategy() -> impl Strategy<Value = OptionsObject> {
    prop::collection::btree_map("(trigger|dropdown|wrapper)", "[a-z]{1,6}", 0..3)
        .prop_map(|regions| regions.into_iter().collect::<OptionsObject>())
}

// A layer with a few ordinary keys and, sometimes, a classes mapping
fn layer_strategy() -> impl Strategy<Value = OptionsObject> {
    (
        prop::collection::btree_map("(disabled|teleport|tagName|text)", value_strategy(), 0..4),
        prop::option::of(regions_strategy()),
    )
        .prop_map(|(entries, classes)| {
            let mut layer: OptionsObject = entries.into_iter().collect();
            if let Some(classes) = classes {
                layer.insert("classes", classes);
            }
            layer
        })
}

fn class_regions(layer: &OptionsObject) -> Option<&OptionsObject> {
    layer.get(OptionKey::CLASSES).and_then(OptionValue::as_map)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every key from any layer appears in the result, and nothing else does
    #[test]
    fn parse_covers_exactly_the_union_of_keys(
        defaults in layer_strategy(),
        global in layer_strategy(),
        overrides in layer_strategy(),
    ) {
        let resolved = VariantParser::parse(&overrides, &global, &defaults);

        let expected: BTreeSet<&OptionKey> = defaults
            .keys()
            .chain(global.keys())
            .chain(overrides.keys())
            .collect();
        let actual: BTreeSet<&OptionKey> = resolved.options.keys().collect();

        prop_assert_eq!(actual, expected);
    }

    // Overrides beat global beats defaults, key by key
    #[test]
    fn parse_highest_layer_wins(
        defaults in layer_strategy(),
        global in layer_strategy(),
        overrides in layer_strategy(),
    ) {
        let resolved = VariantParser::parse(&overrides, &global, &defaults);

        for (key, value) in &resolved.options {
            if key.is_region_merged() {
                continue;
            }
            let expected = overrides
                .get(key.as_str())
                .or_else(|| global.get(key.as_str()))
                .or_else(|| defaults.get(key.as_str()));
            prop_assert_eq!(Some(value), expected);
        }
    }

    // Each class region comes from the highest layer that sets it
    #[test]
    fn parse_merges_class_regions_independently(
        defaults in layer_strategy(),
        global in layer_strategy(),
        overrides in layer_strategy(),
    ) {
        let resolved = VariantParser::parse(&overrides, &global, &defaults);
        let layers = [&overrides, &global, &defaults];

        if let Some(merged) = class_regions(&resolved.options) {
            for (region, value) in merged {
                let expected = layers
                    .iter()
                    .find_map(|layer| class_regions(layer).and_then(|r| r.get(region.as_str())));
                prop_assert_eq!(Some(value), expected);
            }
        } else {
            prop_assert!(layers.iter().all(|layer| class_regions(layer).is_none()));
        }
    }

    // Identical inputs give structurally equal output
    #[test]
    fn parse_is_deterministic(
        defaults in layer_strategy(),
        global in layer_strategy(),
        overrides in layer_strategy(),
    ) {
        let first = VariantParser::parse(&overrides, &global, &defaults);
        let second = VariantParser::parse(&overrides, &global, &defaults);
        prop_assert_eq!(first, second);
    }

    // Empty global and overrides reproduce the defaults
    #[test]
    fn parse_with_empty_layers_is_identity(defaults in layer_strategy()) {
        let empty = OptionsObject::new();
        let resolved = VariantParser::parse(&empty, &empty, &defaults);
        prop_assert_eq!(resolved.options, defaults);
    }
}
