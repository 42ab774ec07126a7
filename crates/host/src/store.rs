//! Host resource store boundary
//!
//! The host-managed strategy does not construct its instances; it
//! discovers them in a store the host owns. [`ResourceStore`] is the
//! object-safe contract the host implements; [`MemoryResourceStore`] is
//! the in-crate implementation used by tests, the preload step, and
//! authoring sessions that have no real host store.

use dashmap::DashMap;
use soliton_core::{Error, Result, TypeKey};
use std::any::Any;
use std::sync::Arc;

/// A type-erased object held by the host store
pub type Resource = Arc<dyn Any + Send + Sync>;

/// Host-owned mapping from type identity to a pre-existing object
pub trait ResourceStore: Send + Sync {
    /// Find the object registered for a type, if any
    fn find(&self, key: &TypeKey) -> Option<Resource>;

    /// Register an object for a type
    ///
    /// Registering a type that already has an object is a programmer
    /// error and returns [`Error::AlreadyRegistered`].
    fn register(&self, key: TypeKey, resource: Resource) -> Result<()>;

    /// Whether an object is registered for a type
    fn contains(&self, key: &TypeKey) -> bool {
        self.find(key).is_some()
    }
}

/// In-memory resource store backed by a concurrent map
#[derive(Default)]
pub struct MemoryResourceStore {
    entries: DashMap<TypeKey, Resource>,
}

impl MemoryResourceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered resources
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no resources
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceStore for MemoryResourceStore {
    fn find(&self, key: &TypeKey) -> Option<Resource> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    fn register(&self, key: TypeKey, resource: Resource) -> Result<()> {
        match self.entries.entry(key) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(Error::AlreadyRegistered {
                type_name: key.name(),
            }),
            dashmap::mapref::entry::Entry::Vacant(vacant) => {
                vacant.insert(resource);
                Ok(())
            }
        }
    }

    fn contains(&self, key: &TypeKey) -> bool {
        self.entries.contains_key(key)
    }
}

impl std::fmt::Debug for MemoryResourceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryResourceStore")
            .field("resource_count", &self.entries.len())
            .finish()
    }
}
