use cayoplan_game::Catalog;
use serde_json::Value;

#[test]
fn builtin_catalog_shape_is_stable() {
    let catalog = Catalog::builtin().unwrap();
    let value = serde_json::to_value(&catalog).unwrap();

    assert_eq!(value.pointer("/bag_capacity").and_then(Value::as_u64), Some(1800));
    assert_eq!(
        value.pointer("/priority_order").and_then(Value::as_array).map(Vec::len),
        Some(5)
    );
    assert_eq!(
        value.pointer("/priority_order/0").and_then(Value::as_str),
        Some("gold")
    );
    assert_eq!(
        value.pointer("/targets/office_safe/min").and_then(Value::as_f64),
        Some(50_000.0)
    );
    assert_eq!(
        value.pointer("/targets/office_safe/max").and_then(Value::as_f64),
        Some(99_000.0)
    );
}

#[test]
fn every_priority_entry_names_a_real_item() {
    let catalog = Catalog::builtin().unwrap();
    for id in &catalog.priority_order {
        assert!(
            catalog.secondary_item(id).is_some(),
            "priority entry '{id}' has no matching secondary item"
        );
    }
}

#[test]
fn pickup_schedules_are_well_formed() {
    let catalog = Catalog::builtin().unwrap();
    for item in &catalog.targets.secondary {
        assert!(!item.pickup_units.is_empty(), "{} has no schedule", item.id);
        assert!(
            item.pickup_units.windows(2).all(|pair| pair[0] <= pair[1]),
            "{} schedule is not non-decreasing",
            item.id
        );
        assert_eq!(
            *item.pickup_units.last().unwrap(),
            item.full_table_units,
            "{} schedule does not end at a full stack",
            item.id
        );
        assert!(
            item.value.min <= item.value.max,
            "{} value range inverted",
            item.id
        );
    }
}

#[test]
fn primary_targets_cover_both_modes_with_hard_premium() {
    let catalog = Catalog::builtin().unwrap();
    for target in &catalog.targets.primary {
        assert!(
            target.value.hard > target.value.standard,
            "{} hard payout should exceed standard",
            target.id
        );
    }
}
