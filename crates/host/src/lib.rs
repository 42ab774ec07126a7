//! Host-managed singleton strategy
//!
//! This crate implements the strategy whose instances live in an external
//! resource store owned by the host:
//! - [`ResourceStore`]: the object-safe boundary the host implements
//!   (plus [`MemoryResourceStore`] for tests and authoring sessions)
//! - [`HostManagedSingleton`]: discovery-based obtain with explicit
//!   runtime/authoring modes and teardown suppression
//! - [`PreloadManifest`]: the deliberate build-time registration list
//!   that makes runtime-mode lookups resolvable

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod managed;
pub mod preload;
pub mod store;

pub use managed::{HostManagedSingleton, HostMode};
pub use preload::{PreloadManifest, PreloadReport};
pub use store::{MemoryResourceStore, Resource, ResourceStore};
