//! Thread-safe lazy strategy: concurrent deferred construction
//!
//! Same contract as [`LazySingleton`](crate::LazySingleton) but safe under
//! concurrent `obtain` calls: exactly one construction occurs even under
//! contention, and every caller observes the same fully constructed
//! instance (the cell establishes a happens-before edge between
//! construction completion and every later observation).
//!
//! ## No destroy
//!
//! Construction is permanent for the process lifetime. This is deliberate:
//! a destroyable thread-safe slot would force every `obtain` through a lock
//! even on the hot path. Callers that need destructible thread-safe
//! singletons wrap this strategy with their own protected slot.

use once_cell::sync::OnceCell;
use soliton_core::Result;
use std::sync::Arc;

/// Thread-safe lazy singleton slot with a single-construction guarantee
///
/// `obtain` may block a calling thread while another thread's construction
/// is in progress, but never blocks once the slot is occupied.
///
/// ## Example
///
/// ```rust,ignore
/// let slot = Arc::new(SyncLazySingleton::<Registry>::new());
/// // N threads race; the factory runs exactly once.
/// let registry = slot.obtain()?;
/// ```
pub struct SyncLazySingleton<T> {
    cell: OnceCell<Arc<T>>,
    factory: Box<dyn Fn() -> Result<T> + Send + Sync>,
}

impl<T: Default + 'static> SyncLazySingleton<T> {
    /// Create a slot that default-constructs its instance
    pub fn new() -> Self {
        Self::with_factory(|| Ok(T::default()))
    }
}

impl<T: Default + 'static> Default for SyncLazySingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SyncLazySingleton<T> {
    /// Create a slot with an explicit factory
    ///
    /// A factory error propagates to the caller that triggered
    /// construction and leaves the cell empty; a later `obtain` retries.
    pub fn with_factory(factory: impl Fn() -> Result<T> + Send + Sync + 'static) -> Self {
        SyncLazySingleton {
            cell: OnceCell::new(),
            factory: Box::new(factory),
        }
    }

    /// Get the instance, constructing it exactly once across all threads
    pub fn obtain(&self) -> Result<Arc<T>> {
        self.cell
            .get_or_try_init(|| (self.factory)().map(Arc::new))
            .map(Arc::clone)
    }

    /// Whether construction has completed successfully
    pub fn has_instance(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> std::fmt::Debug for SyncLazySingleton<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncLazySingleton")
            .field("occupied", &self.has_instance())
            .finish()
    }
}
