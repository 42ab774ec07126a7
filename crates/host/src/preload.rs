//! Build-time registration protocol
//!
//! Runtime-mode [`HostManagedSingleton`](crate::HostManagedSingleton)
//! lookups only succeed for types that were provisioned ahead of time.
//! [`PreloadManifest`] is the explicit list call sites populate
//! deliberately (no runtime type scanning): the build step materializes
//! every entry into the host store before packaging, so the runtime-mode
//! lookup never misses.

use crate::store::{Resource, ResourceStore};
use soliton_core::{Error, Result, TypeKey};
use tracing::{debug, info};

type ResourceBuilder = Box<dyn Fn() -> Result<Resource> + Send + Sync>;

/// What a preload pass did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreloadReport {
    /// Entries materialized and registered into the store
    pub registered: usize,
    /// Entries skipped because the store already held an object for them
    pub skipped: usize,
}

/// Explicit manifest of host-managed types to provision at build time
///
/// ## Example
///
/// ```rust,ignore
/// let mut manifest = PreloadManifest::new();
/// manifest.add::<GameBalance>(|| Ok(GameBalance::default()))?;
/// manifest.add::<InputBindings>(load_bindings)?;
///
/// let report = manifest.preload_into(store.as_ref())?;
/// info!("preloaded {} singletons", report.registered);
/// ```
#[derive(Default)]
pub struct PreloadManifest {
    entries: Vec<(TypeKey, ResourceBuilder)>,
}

impl PreloadManifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type and its resource builder to the manifest
    ///
    /// Listing the same type twice is a programmer error and returns
    /// [`Error::AlreadyRegistered`].
    pub fn add<T: Send + Sync + 'static>(
        &mut self,
        builder: impl Fn() -> Result<T> + Send + Sync + 'static,
    ) -> Result<()> {
        let key = TypeKey::of::<T>();
        if self.entries.iter().any(|(existing, _)| *existing == key) {
            return Err(Error::AlreadyRegistered {
                type_name: key.name(),
            });
        }

        self.entries.push((
            key,
            Box::new(move || {
                let value = builder()?;
                Ok(std::sync::Arc::new(value) as Resource)
            }),
        ));
        Ok(())
    }

    /// Number of manifest entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest lists no types
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Types listed in the manifest, in registration order
    pub fn type_keys(&self) -> Vec<TypeKey> {
        self.entries.iter().map(|(key, _)| *key).collect()
    }

    /// Materialize every entry into the store
    ///
    /// Entries already present in the store are skipped and counted, so
    /// the pass is idempotent. A builder failure aborts the pass; entries
    /// registered before the failure stay in the store.
    pub fn preload_into(&self, store: &dyn ResourceStore) -> Result<PreloadReport> {
        let mut report = PreloadReport::default();

        for (key, builder) in &self.entries {
            if store.contains(key) {
                debug!(type_name = key.name(), "preload skipped, already provisioned");
                report.skipped += 1;
                continue;
            }

            let resource = builder()?;
            store.register(*key, resource)?;
            debug!(type_name = key.name(), "preloaded singleton resource");
            report.registered += 1;
        }

        info!(
            registered = report.registered,
            skipped = report.skipped,
            "preload pass complete"
        );
        Ok(report)
    }
}

impl std::fmt::Debug for PreloadManifest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreloadManifest")
            .field("entry_count", &self.entries.len())
            .finish()
    }
}
