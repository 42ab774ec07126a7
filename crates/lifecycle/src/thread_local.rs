//! Thread-local strategy: one instance per execution thread
//!
//! Each thread gets its own independently creatable and destroyable slot,
//! keyed by `std::thread::ThreadId` in a shared map. `obtain`, `has_instance`
//! and `destroy` only ever touch the calling thread's slot; `destroy_all` is
//! the one cross-thread coordination point and swaps the whole map under the
//! write lock, so no caller can observe a torn mapping.

use parking_lot::RwLock;
use soliton_core::Result;
use std::collections::HashMap;
use std::sync::Arc;
use std::thread::{self, ThreadId};
use tracing::debug;

/// Per-thread singleton slots
///
/// The slot map outlives individual threads: a slot created by a thread that
/// has since exited stays in the map until `destroy_all` (thread IDs are not
/// reused while any handle tied to the thread is alive, so a stale slot is
/// unreachable rather than wrong).
///
/// ## Example
///
/// ```rust,ignore
/// let slots = Arc::new(ThreadLocalSingleton::<RngState>::new());
/// // every worker thread sees its own RngState
/// let rng = slots.obtain()?;
/// ```
pub struct ThreadLocalSingleton<T> {
    slots: RwLock<HashMap<ThreadId, Arc<T>>>,
    factory: Box<dyn Fn() -> Result<T> + Send + Sync>,
}

impl<T: Default + 'static> ThreadLocalSingleton<T> {
    /// Create a slot map that default-constructs per-thread instances
    pub fn new() -> Self {
        Self::with_factory(|| Ok(T::default()))
    }
}

impl<T: Default + 'static> Default for ThreadLocalSingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ThreadLocalSingleton<T> {
    /// Create a slot map with an explicit per-thread factory
    pub fn with_factory(factory: impl Fn() -> Result<T> + Send + Sync + 'static) -> Self {
        ThreadLocalSingleton {
            slots: RwLock::new(HashMap::new()),
            factory: Box::new(factory),
        }
    }

    /// Get the calling thread's instance, constructing it if absent
    ///
    /// Never observes or affects other threads' slots. A factory error
    /// leaves the calling thread's slot empty; the next `obtain` on that
    /// thread retries.
    pub fn obtain(&self) -> Result<Arc<T>> {
        let thread_id = thread::current().id();

        if let Some(existing) = self.slots.read().get(&thread_id) {
            return Ok(Arc::clone(existing));
        }

        // Only the calling thread inserts under its own id, so the gap
        // between the read and write locks cannot produce a duplicate
        // construction for this slot.
        let value = (self.factory)()?;
        let mut slots = self.slots.write();
        let instance = slots.entry(thread_id).or_insert_with(|| Arc::new(value));
        Ok(Arc::clone(instance))
    }

    /// Whether the *calling* thread's slot is occupied
    pub fn has_instance(&self) -> bool {
        self.slots.read().contains_key(&thread::current().id())
    }

    /// Empty the calling thread's slot only
    ///
    /// A subsequent `obtain` on the same thread re-constructs.
    pub fn destroy(&self) {
        self.slots.write().remove(&thread::current().id());
    }

    /// Invalidate every thread's slot at once
    ///
    /// Swaps the entire mapping for a fresh empty one under the write lock;
    /// the exchange is linearizable with respect to concurrent `obtain` and
    /// `destroy` calls. Any thread's next `obtain` re-constructs fresh. Old
    /// instances drop once the last external `Arc` handle does.
    pub fn destroy_all(&self) {
        let mut slots = self.slots.write();
        let replaced = slots.len();
        *slots = HashMap::new();
        if replaced > 0 {
            debug!(slots = replaced, "invalidated all thread-local slots");
        }
    }

    /// Number of threads currently holding a slot
    pub fn thread_count(&self) -> usize {
        self.slots.read().len()
    }
}

impl<T> std::fmt::Debug for ThreadLocalSingleton<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThreadLocalSingleton")
            .field("thread_count", &self.thread_count())
            .finish()
    }
}
