//! In-memory strategy behavior through the facade

use crate::common::Counter;
use soliton::{LazySingleton, SyncLazySingleton, ThreadLocalSingleton};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn lazy_destroy_and_recreate() {
    let slot: LazySingleton<Counter> = LazySingleton::new();
    let first = slot.obtain().unwrap();

    slot.destroy();
    let second = slot.obtain().unwrap();

    assert!(!Rc::ptr_eq(&first, &second));
    // The destroyed instance stays usable through its own handle.
    assert_eq!(first.count, 0);
}

#[test]
fn sync_lazy_single_construction_under_contention() {
    const THREADS: usize = 32;

    let constructions = Arc::new(AtomicUsize::new(0));
    let counting = Arc::clone(&constructions);
    let slot = Arc::new(SyncLazySingleton::with_factory(move || {
        counting.fetch_add(1, Ordering::SeqCst);
        // Widen the race window a little.
        thread::yield_now();
        Ok(Counter { count: 1 })
    }));

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let slot = Arc::clone(&slot);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                slot.obtain().unwrap()
            })
        })
        .collect();

    let instances: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(constructions.load(Ordering::SeqCst), 1);
    for instance in &instances[1..] {
        assert!(Arc::ptr_eq(&instances[0], instance));
    }
}

#[test]
fn thread_local_slots_are_isolated() {
    let slots = Arc::new(ThreadLocalSingleton::<Counter>::new());

    let main_instance = slots.obtain().unwrap();

    thread::scope(|scope| {
        let handle = scope.spawn(|| {
            // This thread never obtained, so its slot is empty.
            assert!(!slots.has_instance());
            let mine = slots.obtain().unwrap();
            assert!(!Arc::ptr_eq(&main_instance, &mine));
        });
        handle.join().unwrap();
    });

    assert!(Arc::ptr_eq(&main_instance, &slots.obtain().unwrap()));
}

#[test]
fn destroy_all_forces_reconstruction_everywhere() {
    let slots = Arc::new(ThreadLocalSingleton::<Counter>::new());
    let workers = 4;

    let populated = Arc::new(Barrier::new(workers + 1));
    let cleared = Arc::new(Barrier::new(workers + 1));

    thread::scope(|scope| {
        for _ in 0..workers {
            let slots = Arc::clone(&slots);
            let populated = Arc::clone(&populated);
            let cleared = Arc::clone(&cleared);
            scope.spawn(move || {
                let before = slots.obtain().unwrap();
                populated.wait();
                cleared.wait();
                let after = slots.obtain().unwrap();
                assert!(!Arc::ptr_eq(&before, &after));
            });
        }

        populated.wait();
        slots.destroy_all();
        cleared.wait();
    });

    assert_eq!(slots.obtain().unwrap().count, 0);
}
