use super::*;
use shared::domain::{Orientation, PlacedComponentId};

#[test]
fn add_appends_in_issue_order() {
    let mut store = SequenceStore::new();
    store.add("LC-OM5-LC").unwrap();
    store.add("MPO8-MPO8").unwrap();
    store.add("MPO12-MPO12").unwrap();

    let asset_ids: Vec<&str> = store
        .components()
        .iter()
        .map(|c| c.asset_id.as_str())
        .collect();
    assert_eq!(asset_ids, ["LC-OM5-LC", "MPO8-MPO8", "MPO12-MPO12"]);
}

#[test]
fn add_stamps_the_current_orientation_mode() {
    let mut store = SequenceStore::new();
    store.add("LC-OM5-LC").unwrap();

    assert_eq!(store.components()[0].orientation, Orientation::Normal);
    assert_eq!(store.len(), 1);
}

#[test]
fn length_never_exceeds_the_cap() {
    let mut store = SequenceStore::new();
    for _ in 0..50 {
        let _ = store.add("MPO16-MPO16");
    }
    assert_eq!(store.len(), MAX_COMPONENTS);
    assert!(store.is_full());
}

#[test]
fn thirteenth_add_is_rejected_and_changes_nothing() {
    let mut store = SequenceStore::new();
    for _ in 0..MAX_COMPONENTS {
        store.add("MPO8-MPO8").unwrap();
    }

    let err = store.add("LC-OM5-LC").unwrap_err();
    assert_eq!(err.limit, MAX_COMPONENTS);
    assert_eq!(store.len(), MAX_COMPONENTS);
    assert!(store
        .components()
        .iter()
        .all(|c| c.asset_id == "MPO8-MPO8"));
}

#[test]
fn minted_ids_are_unique_across_entries() {
    let mut store = SequenceStore::new();
    let a = store.add("a").unwrap();
    let b = store.add("a").unwrap();
    assert_ne!(a, b);
}

#[test]
fn remove_targets_exactly_one_entry_and_keeps_order() {
    let mut store = SequenceStore::new();
    store.add("first").unwrap();
    let middle = store.add("middle").unwrap();
    store.add("last").unwrap();

    store.remove(middle);

    let asset_ids: Vec<&str> = store
        .components()
        .iter()
        .map(|c| c.asset_id.as_str())
        .collect();
    assert_eq!(asset_ids, ["first", "last"]);
    assert!(store
        .components()
        .iter()
        .all(|c| c.orientation == Orientation::Normal));
}

#[test]
fn remove_of_unknown_id_is_a_no_op() {
    let mut store = SequenceStore::new();
    store.add("LC-OM5-LC").unwrap();
    let before = store.components().to_vec();

    store.remove(PlacedComponentId::generate());

    assert_eq!(store.components(), before.as_slice());
}

#[test]
fn clear_empties_unconditionally_and_is_idempotent() {
    let mut store = SequenceStore::new();
    for _ in 0..5 {
        store.add("MPO24-MPO24").unwrap();
    }

    store.clear();
    assert!(store.is_empty());
    store.clear();
    assert!(store.is_empty());
}

#[test]
fn double_toggle_restores_the_mode() {
    let mut store = SequenceStore::new();
    assert_eq!(store.orientation_mode(), Orientation::Normal);
    store.toggle_orientation();
    assert_eq!(store.orientation_mode(), Orientation::Flipped);
    store.toggle_orientation();
    assert_eq!(store.orientation_mode(), Orientation::Normal);
}

#[test]
fn toggle_never_rewrites_placed_entries() {
    let mut store = SequenceStore::new();
    store.add("LC-OM5-LC").unwrap();
    store.toggle_orientation();
    store.add("MPO8-MPO8").unwrap();

    assert_eq!(store.components()[0].orientation, Orientation::Normal);
    assert_eq!(store.components()[1].orientation, Orientation::Flipped);
}

#[test]
fn single_add_renders_start_component_end_and_trailing_slots() {
    // Scenario: one component placed from an empty sequence.
    let mut store = SequenceStore::new();
    store.add("LC-OM5-LC").unwrap();

    let plan = derive_layout(store.components(), MAX_COMPONENTS);

    assert_eq!(plan[0], LayoutItem::StartReceiver);
    assert!(matches!(&plan[1], LayoutItem::Component(c) if c.asset_id == "LC-OM5-LC"));
    assert_eq!(plan[2], LayoutItem::EndReceiver);
    let slots: Vec<usize> = plan
        .iter()
        .filter_map(|item| match item {
            LayoutItem::Placeholder { slot } => Some(*slot),
            _ => None,
        })
        .collect();
    assert_eq!(slots, (2..=12).collect::<Vec<_>>());
}

#[test]
fn rejection_at_capacity_raises_the_limit_notice() {
    use std::time::Instant;

    let mut store = SequenceStore::new();
    let mut notice = LimitNotice::new();
    for _ in 0..MAX_COMPONENTS {
        store.add("MPO12-OM5-LC").unwrap();
    }

    let now = Instant::now();
    if store.add("MPO12-OM5-LC").is_err() {
        notice.trigger(now);
    }

    assert_eq!(store.len(), MAX_COMPONENTS);
    assert!(notice.is_visible(now));
}
