//! Soliton - singleton lifecycle management
//!
//! Soliton provides a family of strategies for lazily constructing,
//! accessing, persisting, and destroying exactly one logical instance of a
//! given type, under different concurrency and durability requirements:
//!
//! - [`LazySingleton`]: single-threaded deferred construction
//! - [`SyncLazySingleton`]: thread-safe deferred construction with a
//!   single-construction guarantee
//! - [`ThreadLocalSingleton`]: one instance per execution thread
//! - [`PersistentSingleton`]: lazy construction plus explicit save/load
//!   through a [`KeyResolver`]
//! - [`HostManagedSingleton`]: instance discovered in a host-owned
//!   [`ResourceStore`], provisioned at build time via a [`PreloadManifest`]
//!
//! # Quick Start
//!
//! ```ignore
//! use soliton::{KeyResolver, PersistentSingleton};
//! use serde::{Deserialize, Serialize};
//! use std::sync::Arc;
//!
//! #[derive(Default, Serialize, Deserialize)]
//! struct Counter { count: i64 }
//!
//! let resolver = Arc::new(KeyResolver::new("/var/lib/app"));
//! let slot: PersistentSingleton<Counter> = PersistentSingleton::new(resolver);
//!
//! let counter = slot.obtain()?;    // loads persisted state if any
//! counter.write().count += 1;
//! slot.save()?;                    // explicit durability boundary
//! ```
//!
//! # Architecture
//!
//! Each strategy is an explicit coordinating object owning its slot; no
//! strategy touches global static state, and strategies never call each
//! other (the persistent strategy composes the key resolver as a library).

pub use soliton_core::{Error, Persist, Result, TypeKey};
pub use soliton_host::{
    HostManagedSingleton, HostMode, MemoryResourceStore, PreloadManifest, PreloadReport,
    Resource, ResourceStore,
};
pub use soliton_lifecycle::{LazySingleton, SyncLazySingleton, ThreadLocalSingleton};
pub use soliton_persist::{
    read_payload, write_payload, KeyResolver, LoadOutcome, PersistentSingleton,
};
