//! In-memory singleton strategies
//!
//! This crate implements the three strategies whose state lives purely in
//! memory:
//! - [`LazySingleton`]: single-threaded deferred construction (`!Sync` by
//!   construction)
//! - [`SyncLazySingleton`]: concurrent deferred construction with a
//!   single-construction guarantee and no destroy
//! - [`ThreadLocalSingleton`]: one independently destroyable instance per
//!   execution thread, with an atomic `destroy_all`
//!
//! All strategies are explicit coordinating objects parameterized over a
//! fallible factory; none of them touches global static state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lazy;
pub mod sync_lazy;
pub mod thread_local;

pub use lazy::LazySingleton;
pub use sync_lazy::SyncLazySingleton;
pub use thread_local::ThreadLocalSingleton;
