//! Persistent singleton strategy and storage-key resolution
//!
//! This crate implements the disk-backed strategy:
//! - [`KeyResolver`]: maps a type identity to a durable storage key, with
//!   explicit per-type overrides
//! - [`PersistentSingleton`]: lazy single-slot strategy with explicit
//!   `save` and overlay-on-load semantics
//! - [`read_payload`] / [`write_payload`]: the local-filesystem byte store
//!   the strategy reads and writes through
//!
//! Payloads are produced and consumed by the instance's own
//! [`Persist`](soliton_core::Persist) hook; this crate treats them as
//! opaque bytes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod persistent;
pub mod resolver;
pub mod store;

pub use persistent::{LoadOutcome, PersistentSingleton};
pub use resolver::{KeyResolver, DEFAULT_SUBDIR};
pub use store::{read_payload, write_payload};
