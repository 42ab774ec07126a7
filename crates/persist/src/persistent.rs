//! Persistent strategy: lazy construction plus explicit save/load
//!
//! Extends the single-slot lazy model with durable state. On first
//! `obtain` a fresh instance is constructed, the type's storage key is
//! resolved through the [`KeyResolver`], and any persisted payload found
//! there is overlaid onto the fresh instance. `save` is the durability
//! boundary: `destroy` never writes, so unsaved mutations are lost by
//! design.
//!
//! Load and save failures are never fatal. A failed load degrades to
//! "instance exists with default state" and surfaces a diagnostic; a
//! failed save leaves the prior durable state untouched and reports the
//! error to its caller.

use crate::resolver::KeyResolver;
use crate::store::{read_payload, write_payload};
use parking_lot::{Mutex, RwLock};
use soliton_core::{Error, Persist, Result, TypeKey};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// How `obtain` arrived at the returned instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The slot was already occupied; no load was attempted
    AlreadyLive,
    /// No payload existed at the storage key; the instance is fresh
    CreatedFresh,
    /// A persisted payload was overlaid onto the fresh instance
    Loaded,
    /// A payload existed but could not be read or parsed; the instance
    /// is fresh and a diagnostic was recorded
    FreshAfterError,
}

/// Disk-backed lazy singleton slot
///
/// `obtain` returns `Arc<RwLock<T>>` so callers can mutate state between
/// loads and saves:
///
/// ```rust,ignore
/// let slot: PersistentSingleton<Counter> = PersistentSingleton::new(resolver);
/// let counter = slot.obtain()?;
/// counter.write().count = 5;
/// slot.save()?;
/// ```
///
/// Saves and loads on the same storage key are not synchronized across
/// processes; concurrent writers may interleave.
pub struct PersistentSingleton<T> {
    slot: Mutex<Option<Arc<RwLock<T>>>>,
    resolver: Arc<KeyResolver>,
    key: TypeKey,
    factory: Box<dyn Fn() -> Result<T> + Send + Sync>,
    last_load_error: Mutex<Option<Error>>,
}

impl<T: Persist + Default + Send + Sync + 'static> PersistentSingleton<T> {
    /// Create a slot that default-constructs its instance before loading
    pub fn new(resolver: Arc<KeyResolver>) -> Self {
        Self::with_factory(resolver, || Ok(T::default()))
    }
}

impl<T: Persist + Send + Sync + 'static> PersistentSingleton<T> {
    /// Create a slot with an explicit factory
    pub fn with_factory(
        resolver: Arc<KeyResolver>,
        factory: impl Fn() -> Result<T> + Send + Sync + 'static,
    ) -> Self {
        PersistentSingleton {
            slot: Mutex::new(None),
            resolver,
            key: TypeKey::of::<T>(),
            factory: Box::new(factory),
            last_load_error: Mutex::new(None),
        }
    }

    /// Get the instance, constructing and loading it if the slot is empty
    pub fn obtain(&self) -> Result<Arc<RwLock<T>>> {
        self.obtain_with_outcome().map(|(instance, _)| instance)
    }

    /// Like [`obtain`](Self::obtain), but also reports whether the
    /// instance was loaded from disk, created fresh, or kept fresh after
    /// a load failure
    pub fn obtain_with_outcome(&self) -> Result<(Arc<RwLock<T>>, LoadOutcome)> {
        let mut slot = self.slot.lock();
        if let Some(existing) = slot.as_ref() {
            return Ok((Arc::clone(existing), LoadOutcome::AlreadyLive));
        }

        let mut value = (self.factory)()?;
        let path = self.storage_key();

        let outcome = match read_payload(&path) {
            Ok(Some(payload)) => match value.overlay_from(&payload) {
                Ok(()) => {
                    debug!(key = %path.display(), "loaded persisted singleton state");
                    LoadOutcome::Loaded
                }
                Err(e) => self.record_load_failure(&path, e),
            },
            Ok(None) => LoadOutcome::CreatedFresh,
            Err(e) => self.record_load_failure(&path, e),
        };

        let instance = Arc::new(RwLock::new(value));
        *slot = Some(Arc::clone(&instance));
        Ok((instance, outcome))
    }

    /// Serialize the current state and write it to the storage key
    ///
    /// Returns `Ok(false)` without touching disk when the slot is empty;
    /// `Ok(true)` after a successful write. Missing parent directories
    /// are created, and an existing payload is overwritten.
    pub fn save(&self) -> Result<bool> {
        let slot = self.slot.lock();
        let Some(instance) = slot.as_ref() else {
            return Ok(false);
        };

        let path = self.storage_key();
        let payload = instance.read().to_payload()?;
        write_payload(&path, &payload).map_err(|e| {
            warn!(key = %path.display(), error = %e, "failed to save singleton state");
            Error::SaveFailed {
                key: path.clone(),
                reason: e.to_string(),
            }
        })?;

        debug!(key = %path.display(), bytes = payload.len(), "saved singleton state");
        Ok(true)
    }

    /// Empty the slot without saving
    ///
    /// Unsaved mutations are lost; the durable payload is untouched.
    pub fn destroy(&self) {
        *self.slot.lock() = None;
    }

    /// Whether the slot currently holds an instance
    pub fn has_instance(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// The storage key this slot loads from and saves to
    pub fn storage_key(&self) -> PathBuf {
        self.resolver.resolve(self.key)
    }

    /// Take the diagnostic recorded by the most recent failed load, if any
    pub fn take_last_load_error(&self) -> Option<Error> {
        self.last_load_error.lock().take()
    }

    fn record_load_failure(&self, path: &std::path::Path, cause: Error) -> LoadOutcome {
        warn!(
            key = %path.display(),
            error = %cause,
            "failed to load persisted singleton state; keeping fresh instance"
        );
        *self.last_load_error.lock() = Some(Error::LoadFailed {
            key: path.to_path_buf(),
            reason: cause.to_string(),
        });
        LoadOutcome::FreshAfterError
    }
}

impl<T> std::fmt::Debug for PersistentSingleton<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistentSingleton")
            .field("type", &self.key.name())
            .field("occupied", &self.slot.lock().is_some())
            .finish()
    }
}
