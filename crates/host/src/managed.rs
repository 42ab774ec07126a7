//! Host-managed strategy: instance sourced from the host resource store
//!
//! The instance is *discovered*, not constructed: `obtain` queries the
//! host's [`ResourceStore`](crate::ResourceStore) and caches what it
//! finds. What happens on a miss depends on the mode passed in
//! explicitly:
//! - [`HostMode::Runtime`]: the instance must have been provisioned ahead
//!   of time (see [`PreloadManifest`](crate::PreloadManifest)); a miss is
//!   [`Error::NotProvisioned`].
//! - [`HostMode::Authoring`]: a miss synthesizes a new instance and
//!   registers it into the store for subsequent sessions.
//!
//! The strategy also consumes the host's teardown notification: after
//! `notify_shutdown`, `obtain` refuses to construct a doomed instance and
//! returns [`Error::ShuttingDown`] instead.

use crate::store::{Resource, ResourceStore};
use parking_lot::Mutex;
use soliton_core::{Error, Result, TypeKey};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Whether a miss in the host store fails or synthesizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMode {
    /// Production: the resource must be provisioned ahead of time
    Runtime,
    /// Authoring/editor: a missing resource is created and registered
    Authoring,
}

/// Singleton whose lifecycle is driven by an external resource store
///
/// ## Example
///
/// ```rust,ignore
/// let store = Arc::new(MemoryResourceStore::new());
/// manifest.preload_into(store.as_ref())?;   // build step
///
/// let slot = HostManagedSingleton::<GameBalance>::new(HostMode::Runtime, store);
/// let balance = slot.obtain()?;             // found in the store
/// ```
pub struct HostManagedSingleton<T> {
    mode: HostMode,
    store: Arc<dyn ResourceStore>,
    cache: Mutex<Option<Arc<T>>>,
    factory: Box<dyn Fn() -> Result<T> + Send + Sync>,
    shutting_down: AtomicBool,
    key: TypeKey,
}

impl<T: Default + Send + Sync + 'static> HostManagedSingleton<T> {
    /// Create a slot whose authoring-mode synthesis default-constructs
    pub fn new(mode: HostMode, store: Arc<dyn ResourceStore>) -> Self {
        Self::with_factory(mode, store, || Ok(T::default()))
    }
}

impl<T: Send + Sync + 'static> HostManagedSingleton<T> {
    /// Create a slot with an explicit authoring-mode factory
    ///
    /// The factory only runs in [`HostMode::Authoring`]; runtime mode
    /// never synthesizes.
    pub fn with_factory(
        mode: HostMode,
        store: Arc<dyn ResourceStore>,
        factory: impl Fn() -> Result<T> + Send + Sync + 'static,
    ) -> Self {
        HostManagedSingleton {
            mode,
            store,
            cache: Mutex::new(None),
            factory: Box::new(factory),
            shutting_down: AtomicBool::new(false),
            key: TypeKey::of::<T>(),
        }
    }

    /// Get the instance, resolving it through the host store if needed
    pub fn obtain(&self) -> Result<Arc<T>> {
        if self.shutting_down.load(Ordering::Acquire) {
            warn!(
                type_name = self.key.name(),
                "singleton will not be resolved while shutting down"
            );
            return Err(Error::ShuttingDown {
                type_name: self.key.name(),
            });
        }

        let mut cache = self.cache.lock();
        if let Some(cached) = cache.as_ref() {
            return Ok(Arc::clone(cached));
        }

        if let Some(resource) = self.store.find(&self.key) {
            let instance = downcast::<T>(resource, self.key)?;
            *cache = Some(Arc::clone(&instance));
            return Ok(instance);
        }

        match self.mode {
            HostMode::Runtime => Err(Error::NotProvisioned {
                type_name: self.key.name(),
            }),
            HostMode::Authoring => {
                let instance = Arc::new((self.factory)()?);
                self.store
                    .register(self.key, Arc::clone(&instance) as Resource)?;
                debug!(
                    type_name = self.key.name(),
                    "synthesized and registered host-managed singleton"
                );
                *cache = Some(Arc::clone(&instance));
                Ok(instance)
            }
        }
    }

    /// Pre-seed the cache with an instance, exactly once
    ///
    /// Fails with [`Error::AlreadyRegistered`] if the cache is occupied.
    /// The store is not consulted or modified.
    pub fn register_manually(&self, instance: Arc<T>) -> Result<()> {
        let mut cache = self.cache.lock();
        if cache.is_some() {
            return Err(Error::AlreadyRegistered {
                type_name: self.key.name(),
            });
        }
        *cache = Some(instance);
        Ok(())
    }

    /// Whether the local cache holds an instance
    pub fn has_instance(&self) -> bool {
        self.cache.lock().is_some()
    }

    /// Empty the local cache
    ///
    /// The store keeps its object; a later `obtain` re-discovers it.
    pub fn destroy(&self) {
        *self.cache.lock() = None;
    }

    /// Consume the host's teardown signal
    ///
    /// Subsequent `obtain` calls fail with [`Error::ShuttingDown`]
    /// instead of resolving an instance that would not outlive teardown.
    pub fn notify_shutdown(&self) {
        self.shutting_down.store(true, Ordering::Release);
    }

    /// Clear the teardown signal (e.g. the host re-entered its active phase)
    pub fn reset_shutdown(&self) {
        self.shutting_down.store(false, Ordering::Release);
    }

    /// Whether the teardown signal is set
    pub fn is_shutting_down(&self) -> bool {
        self.shutting_down.load(Ordering::Acquire)
    }

    /// The mode this slot was configured with
    pub fn mode(&self) -> HostMode {
        self.mode
    }
}

fn downcast<T: Send + Sync + 'static>(resource: Resource, key: TypeKey) -> Result<Arc<T>> {
    resource.downcast::<T>().map_err(|_| {
        warn!(
            type_name = key.name(),
            "host store holds a resource of the wrong concrete type"
        );
        Error::TypeMismatch {
            type_name: key.name(),
        }
    })
}

impl<T> std::fmt::Debug for HostManagedSingleton<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostManagedSingleton")
            .field("type", &self.key.name())
            .field("mode", &self.mode)
            .field("cached", &self.cache.lock().is_some())
            .field("shutting_down", &self.shutting_down.load(Ordering::Acquire))
            .finish()
    }
}
