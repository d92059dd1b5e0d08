//! Property-based tests for Lens laws.
//!
//! - **GetPut Law**: `lens.set(source, args, lens.get(&source, args)) == source`
//! - **PutGet Law**: `lens.get(&lens.set(source, args, value), args) == value`
//! - **PutPut Law**: `lens.set(lens.set(source, args, v1), args, v2) == lens.set(source, args, v2)`
//!
//! Path lenses satisfy GetPut only where the focused location exists, so that
//! law is checked on locations drawn from the generated model. `over` and
//! two-lens composition are checked against their defining equations.

use pathlens::optics::{Lens, from_path, from_path_fn};
use pathlens::path::{Key, Path};
use pathlens::value::Value;
use pathlens::{args, compose, lens};
use proptest::prelude::*;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Point {
    x: i32,
    y: i32,
}

// =============================================================================
// Strategies
// =============================================================================

fn arbitrary_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,4}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |element| {
        prop_oneof![
            prop::collection::vec(element.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-c]", element, 0..4)
                .prop_map(|entries| entries.into_iter().collect::<Value>()),
        ]
    })
}

fn arbitrary_path() -> impl Strategy<Value = Path> {
    let key = prop_oneof!["[a-c]".prop_map(Key::from), (0_usize..3).prop_map(Key::Index)];
    prop::collection::vec(key, 0..4).prop_map(Path::from_keys)
}

/// Every location present in `value`, the whole value included.
fn existing_paths(value: &Value) -> Vec<Path> {
    let mut found = vec![Path::identity()];
    match value {
        Value::Sequence(elements) => {
            for (index, element) in elements.iter().enumerate() {
                found.extend(existing_paths(element).into_iter().map(|rest| {
                    Path::from(Key::Index(index)).join(&rest)
                }));
            }
        }
        Value::Mapping(entries) => {
            for (name, entry) in entries.iter() {
                found.extend(existing_paths(entry).into_iter().map(|rest| {
                    Path::from(Key::Field(name.clone())).join(&rest)
                }));
            }
        }
        _ => {}
    }
    found
}

// =============================================================================
// Lens Laws for a typed field
// =============================================================================

proptest! {
    #[test]
    fn prop_point_x_get_put_law(x in any::<i32>(), y in any::<i32>()) {
        let x_lens = lens!(Point, x);
        let point = Point { x, y };
        let result = x_lens.put(point.clone(), x_lens.view(&point));
        prop_assert_eq!(result, point);
    }

    #[test]
    fn prop_point_x_put_get_law(x in any::<i32>(), y in any::<i32>(), new_value in any::<i32>()) {
        let x_lens = lens!(Point, x);
        let updated = x_lens.put(Point { x, y }, new_value);
        prop_assert_eq!(x_lens.view(&updated), new_value);
    }

    #[test]
    fn prop_point_x_put_put_law(
        x in any::<i32>(),
        y in any::<i32>(),
        value1 in any::<i32>(),
        value2 in any::<i32>()
    ) {
        let x_lens = lens!(Point, x);
        let point = Point { x, y };
        let left = x_lens.put(x_lens.put(point.clone(), value1), value2);
        let right = x_lens.put(point, value2);
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Lens Laws for path lenses
// =============================================================================

proptest! {
    #[test]
    fn prop_path_lens_get_put_law(
        model in arbitrary_value(),
        selector in any::<prop::sample::Index>(),
    ) {
        let locations = existing_paths(&model);
        let location = selector.get(&locations);
        let lens = from_path(location).unwrap();

        let result = lens.put(model.clone(), lens.view(&model));
        prop_assert_eq!(result, model);
    }

    #[test]
    fn prop_path_lens_put_get_law(
        model in arbitrary_value(),
        target in arbitrary_path(),
        value in arbitrary_value(),
    ) {
        prop_assume!(!target.is_identity());
        let lens = from_path(&target).unwrap();
        prop_assert_eq!(lens.view(&lens.put(model, value.clone())), value);
    }

    #[test]
    fn prop_path_lens_put_put_law(
        model in arbitrary_value(),
        target in arbitrary_path(),
        value1 in arbitrary_value(),
        value2 in arbitrary_value(),
    ) {
        let lens = from_path(&target).unwrap();
        let left = lens.put(lens.put(model.clone(), value1), value2.clone());
        let right = lens.put(model, value2);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_parameterized_lens_put_get_law(
        model in arbitrary_value(),
        name in "[a-c]",
        value in arbitrary_value(),
    ) {
        let entry = from_path_fn(|name: String| Path::from_keys(["entries", name.as_str()]));
        let updated = entry.set(model, &name, value.clone());
        prop_assert_eq!(entry.get(&updated, &name), value);
    }
}

// =============================================================================
// over and composition
// =============================================================================

proptest! {
    /// `over` is `set` of the function applied to `get`.
    #[test]
    fn prop_over_equivalence(model in arbitrary_value(), target in arbitrary_path()) {
        let lens = from_path(&target).unwrap();
        let tag = |value: Value| Value::sequence([Value::from("tagged"), value]);

        let via_over = lens.modify(model.clone(), tag);
        let via_set = lens.put(model.clone(), tag(lens.view(&model)));
        prop_assert_eq!(via_over, via_set);
    }

    /// Composition reads through the outer lens, then the inner one.
    #[test]
    fn prop_two_lens_composition_law(
        model in arbitrary_value(),
        outer_path in arbitrary_path(),
        inner_path in arbitrary_path(),
        value in arbitrary_value(),
    ) {
        let outer = from_path(&outer_path).unwrap();
        let inner = from_path(&inner_path).unwrap();
        let composed = compose!(outer.clone(), inner.clone());

        prop_assert_eq!(composed.view(&model), inner.view(&outer.view(&model)));

        let expected = outer.put(model.clone(), inner.put(outer.view(&model), value.clone()));
        prop_assert_eq!(composed.put(model, value), expected);
    }

    /// Each step of a composed lens receives its own argument group.
    #[test]
    fn prop_variadic_composition_routes_arguments(
        section in "[a-c]",
        entry in "[a-c]",
        index in 0_usize..3,
        value in arbitrary_value(),
    ) {
        let by_section = from_path_fn(|name: String| Path::from_keys([name]));
        let by_entry = from_path_fn(|name: String| Path::from_keys([name]));
        let by_index = from_path_fn(|index: usize| Path::from(index));
        let composed = compose!(by_section, by_entry, by_index);

        let group = args!(section.clone(), entry.clone(), index);
        let updated = composed.set(Value::Null, &group, value.clone());

        let direct = from_path(vec![Key::from(section), Key::from(entry), Key::Index(index)]).unwrap();
        prop_assert_eq!(direct.view(&updated), value.clone());
        prop_assert_eq!(composed.get(&updated, &group), value);
    }
}
