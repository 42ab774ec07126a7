//! Persistence scenarios across slot lifetimes

use crate::common::*;
use soliton::{LoadOutcome, PersistentSingleton};
use std::sync::Arc;

// ============================================================================
// Counter scenario: obtain -> mutate -> save -> reload -> destroy -> fresh
// ============================================================================

#[test]
fn counter_scenario_full_lifecycle() {
    let root = TestRoot::new();

    // obtain() -> count = 0
    let slot: PersistentSingleton<Counter> =
        PersistentSingleton::new(Arc::clone(&root.resolver));
    let counter = slot.obtain().unwrap();
    assert_eq!(counter.read().count, 0);

    // Set count = 5, save().
    counter.write().count = 5;
    assert!(slot.save().unwrap());

    // New slot instance against the same key -> count = 5.
    let reloaded_slot: PersistentSingleton<Counter> =
        PersistentSingleton::new(Arc::clone(&root.resolver));
    let (reloaded, outcome) = reloaded_slot.obtain_with_outcome().unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded);
    assert_eq!(reloaded.read().count, 5);

    // Mutate without saving, destroy, obtain -> saved state, not the
    // unsaved mutation.
    reloaded.write().count = 99;
    reloaded_slot.destroy();
    assert!(!reloaded_slot.has_instance());

    let fresh = reloaded_slot.obtain().unwrap();
    assert_eq!(fresh.read().count, 5);
}

#[test]
fn unsaved_state_never_reaches_disk() {
    let root = TestRoot::new();
    let slot: PersistentSingleton<Counter> =
        PersistentSingleton::new(Arc::clone(&root.resolver));

    let counter = slot.obtain().unwrap();
    counter.write().count = 41;
    slot.destroy();

    // Nothing was saved, so a reload is fresh.
    let (counter, outcome) = slot.obtain_with_outcome().unwrap();
    assert_eq!(outcome, LoadOutcome::CreatedFresh);
    assert_eq!(counter.read().count, 0);
}

#[test]
fn override_and_default_keys_are_independent() {
    use soliton::TypeKey;

    let root = TestRoot::new();

    // Save under the synthesized default key first.
    let slot: PersistentSingleton<Counter> =
        PersistentSingleton::new(Arc::clone(&root.resolver));
    slot.obtain().unwrap().write().count = 1;
    slot.save().unwrap();
    let default_key = slot.storage_key();

    // Redirect the type to an override; the old payload is invisible there.
    root.resolver
        .register_override(TypeKey::of::<Counter>(), "redirected/counter")
        .unwrap();

    let redirected_slot: PersistentSingleton<Counter> =
        PersistentSingleton::new(Arc::clone(&root.resolver));
    let (counter, outcome) = redirected_slot.obtain_with_outcome().unwrap();

    assert_ne!(redirected_slot.storage_key(), default_key);
    assert_eq!(outcome, LoadOutcome::CreatedFresh);
    assert_eq!(counter.read().count, 0);
}

#[test]
fn corrupt_payload_is_survivable_and_overwritable() {
    let root = TestRoot::new();
    let slot: PersistentSingleton<Counter> =
        PersistentSingleton::new(Arc::clone(&root.resolver));

    soliton::write_payload(&slot.storage_key(), b"garbage bytes").unwrap();

    let (counter, outcome) = slot.obtain_with_outcome().unwrap();
    assert_eq!(outcome, LoadOutcome::FreshAfterError);
    assert!(slot.take_last_load_error().is_some());

    // A save replaces the corrupt payload; the next load succeeds.
    counter.write().count = 3;
    slot.save().unwrap();
    slot.destroy();

    let (counter, outcome) = slot.obtain_with_outcome().unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded);
    assert_eq!(counter.read().count, 3);
}
