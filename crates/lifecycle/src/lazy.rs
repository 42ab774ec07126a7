//! Plain lazy strategy: single-threaded deferred construction
//!
//! One slot, constructed on first `obtain`, destroyable and re-creatable.
//! The slot is `RefCell<Option<Rc<T>>>`, so the strategy is `!Send + !Sync`
//! by construction: the compiler rejects sharing it across threads instead
//! of leaving the race as a documented hazard. Callers needing concurrent
//! access use [`SyncLazySingleton`](crate::SyncLazySingleton) instead.

use soliton_core::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// Single-threaded lazy singleton slot
///
/// ## Example
///
/// ```rust,ignore
/// let slot: LazySingleton<EventLoopState> = LazySingleton::new();
/// let state = slot.obtain()?;     // constructs on first call
/// let again = slot.obtain()?;     // same instance
/// assert!(Rc::ptr_eq(&state, &again));
/// ```
pub struct LazySingleton<T> {
    slot: RefCell<Option<Rc<T>>>,
    factory: Box<dyn Fn() -> Result<T>>,
}

impl<T: Default + 'static> LazySingleton<T> {
    /// Create a slot that default-constructs its instance
    pub fn new() -> Self {
        Self::with_factory(|| Ok(T::default()))
    }
}

impl<T: Default + 'static> Default for LazySingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LazySingleton<T> {
    /// Create a slot with an explicit factory
    ///
    /// A factory error propagates out of `obtain` and leaves the slot
    /// empty; the next `obtain` retries.
    pub fn with_factory(factory: impl Fn() -> Result<T> + 'static) -> Self {
        LazySingleton {
            slot: RefCell::new(None),
            factory: Box::new(factory),
        }
    }

    /// Get the instance, constructing it if the slot is empty
    pub fn obtain(&self) -> Result<Rc<T>> {
        if let Some(existing) = self.slot.borrow().as_ref() {
            return Ok(Rc::clone(existing));
        }

        let value = (self.factory)()?;
        let instance = Rc::new(value);
        *self.slot.borrow_mut() = Some(Rc::clone(&instance));
        Ok(instance)
    }

    /// Whether the slot currently holds an instance
    pub fn has_instance(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Empty the slot unconditionally
    ///
    /// No cleanup hooks run; outstanding `Rc` handles keep the old value
    /// alive until they drop. A later `obtain` constructs a new instance.
    pub fn destroy(&self) {
        *self.slot.borrow_mut() = None;
    }
}

impl<T> std::fmt::Debug for LazySingleton<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazySingleton")
            .field("occupied", &self.has_instance())
            .finish()
    }
}
