//! Build-time preload feeding runtime-mode host-managed singletons

use soliton::{
    HostManagedSingleton, HostMode, MemoryResourceStore, PreloadManifest, ResourceStore,
    TypeKey,
};
use std::sync::Arc;

#[derive(Debug, Default, PartialEq)]
struct GameBalance {
    starting_gold: u64,
}

#[derive(Debug, Default)]
struct InputBindings {
    bindings: Vec<(String, String)>,
}

fn build_manifest() -> PreloadManifest {
    let mut manifest = PreloadManifest::new();
    manifest
        .add::<GameBalance>(|| Ok(GameBalance { starting_gold: 250 }))
        .unwrap();
    manifest
        .add::<InputBindings>(|| {
            Ok(InputBindings {
                bindings: vec![("jump".to_string(), "space".to_string())],
            })
        })
        .unwrap();
    manifest
}

#[test]
fn preload_then_runtime_lookup() {
    let store = Arc::new(MemoryResourceStore::new());

    // Build step: materialize every known host-managed type.
    let report = build_manifest().preload_into(store.as_ref()).unwrap();
    assert_eq!(report.registered, 2);

    // Runtime: lookups resolve without synthesis.
    let balance =
        HostManagedSingleton::<GameBalance>::new(HostMode::Runtime, Arc::clone(&store) as Arc<dyn ResourceStore>);
    assert_eq!(balance.obtain().unwrap().starting_gold, 250);

    let bindings =
        HostManagedSingleton::<InputBindings>::new(HostMode::Runtime, Arc::clone(&store) as Arc<dyn ResourceStore>);
    assert_eq!(bindings.obtain().unwrap().bindings.len(), 1);
}

#[test]
fn runtime_without_preload_fails_fast() {
    let store = Arc::new(MemoryResourceStore::new());
    let slot = HostManagedSingleton::<GameBalance>::new(HostMode::Runtime, store);

    assert!(matches!(
        slot.obtain(),
        Err(soliton::Error::NotProvisioned { .. })
    ));
}

#[test]
fn authoring_session_populates_store_for_later_runtime() {
    let store = Arc::new(MemoryResourceStore::new());

    // Authoring: first obtain synthesizes and registers.
    let authoring =
        HostManagedSingleton::<GameBalance>::new(HostMode::Authoring, Arc::clone(&store) as Arc<dyn ResourceStore>);
    let created = authoring.obtain().unwrap();
    assert_eq!(*created, GameBalance::default());
    assert!(store.contains(&TypeKey::of::<GameBalance>()));

    // A later runtime-mode slot over the same store finds the object.
    let runtime =
        HostManagedSingleton::<GameBalance>::new(HostMode::Runtime, Arc::clone(&store) as Arc<dyn ResourceStore>);
    assert!(Arc::ptr_eq(&created, &runtime.obtain().unwrap()));
}

#[test]
fn shutdown_suppresses_resolution_until_reset() {
    let store = Arc::new(MemoryResourceStore::new());
    build_manifest().preload_into(store.as_ref()).unwrap();

    let slot = HostManagedSingleton::<GameBalance>::new(HostMode::Runtime, store);
    slot.notify_shutdown();

    assert!(matches!(
        slot.obtain(),
        Err(soliton::Error::ShuttingDown { .. })
    ));

    slot.reset_shutdown();
    assert_eq!(slot.obtain().unwrap().starting_gold, 250);
}
