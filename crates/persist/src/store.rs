//! Durable byte store on the local filesystem
//!
//! The persistent strategy's storage seam: read-by-key returning
//! `None` for a key that was never saved, and write-by-key creating
//! missing parent directories and overwriting any existing file. Both are
//! synchronous with local-filesystem semantics; no file locking is
//! provided, so concurrent writers on the same key need external
//! synchronization.

use soliton_core::Result;
use std::fs;
use std::io;
use std::path::Path;

/// Read the payload at `path`
///
/// Returns `Ok(None)` if nothing was ever saved at this key. Any other
/// I/O failure propagates.
pub fn read_payload(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Write `bytes` to `path`, replacing any previous payload
///
/// Missing parent directories are created. The write truncates: an
/// existing file is overwritten, never appended to.
pub fn write_payload(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}
