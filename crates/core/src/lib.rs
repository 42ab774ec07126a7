//! Core types for singleton lifecycle management
//!
//! This crate defines the foundational pieces shared by every strategy:
//! - TypeKey: stable identity of a singleton kind (one slot per kind)
//! - Error: error type hierarchy for construction, load/save and misuse
//! - Persist: serialization hook with overlay semantics for persisted payloads

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod persist;
pub mod types;

pub use error::{Error, Result};
pub use persist::Persist;
pub use types::TypeKey;
