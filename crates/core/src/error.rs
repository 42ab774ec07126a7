//! Error types for singleton lifecycle management
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! The taxonomy separates recoverable storage failures (load/save) from
//! programmer errors (double registration, missing provisioning). Strategies
//! recover from the former locally and surface the latter so callers can fix
//! registration order.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for singleton operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for singleton lifecycle management
#[derive(Debug, Error)]
pub enum Error {
    /// Factory or constructor failed; the slot remains empty and the next
    /// obtain retries construction
    #[error("Construction failed for {type_name}: {reason}")]
    Construction {
        /// Type whose construction failed
        type_name: &'static str,
        /// Why the factory failed
        reason: String,
    },

    /// Persisted payload could not be read or parsed
    ///
    /// Never fatal to `obtain`: the fresh instance is kept and this error is
    /// surfaced as a diagnostic.
    #[error("Failed to load persisted payload at {key}: {reason}")]
    LoadFailed {
        /// Storage key the load targeted
        key: PathBuf,
        /// Underlying I/O or parse failure
        reason: String,
    },

    /// Persisted payload could not be written
    ///
    /// Prior durable state at the key is left untouched.
    #[error("Failed to save persisted payload at {key}: {reason}")]
    SaveFailed {
        /// Storage key the save targeted
        key: PathBuf,
        /// Underlying I/O failure
        reason: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An instance or override is already registered for this type
    #[error("Already registered: {type_name}")]
    AlreadyRegistered {
        /// Type that was registered twice
        type_name: &'static str,
    },

    /// Runtime-mode lookup found no provisioned resource for this type
    ///
    /// The type must be registered ahead of time via the preload manifest.
    #[error("No provisioned resource for {type_name}")]
    NotProvisioned {
        /// Type that was never provisioned
        type_name: &'static str,
    },

    /// The host store holds a resource under this type's key whose concrete
    /// type does not match
    #[error("Resource registered for {type_name} has a different concrete type")]
    TypeMismatch {
        /// Type the caller requested
        type_name: &'static str,
    },

    /// Obtain was called during or after the host's teardown notification
    #[error("Cannot obtain {type_name} while shutting down")]
    ShuttingDown {
        /// Type whose construction was suppressed
        type_name: &'static str,
    },
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
