//! Key resolver: type identity to storage key
//!
//! Maps a [`TypeKey`] to the path where that type's persisted payload
//! lives. Types without an explicit override get a synthesized default of
//! `<root>/<DEFAULT_SUBDIR>/<flat type name>`; an override registered ahead
//! of first use wins over the default. Overrides form the explicit manifest
//! that replaces attribute/reflection-driven path discovery.

use dashmap::DashMap;
use parking_lot::RwLock;
use soliton_core::{Error, Result, TypeKey};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Subdirectory under the root where synthesized default keys live
pub const DEFAULT_SUBDIR: &str = "singletons";

/// Resolves type identities to durable storage keys
///
/// Safe to call from multiple threads; synthesized defaults are cached
/// per type, and cache population is atomic per key.
///
/// ## Example
///
/// ```rust,ignore
/// let resolver = KeyResolver::new("/var/lib/app");
/// resolver.register_override(TypeKey::of::<AudioSettings>(), "audio.json")?;
///
/// resolver.resolve(TypeKey::of::<AudioSettings>());
/// // -> /var/lib/app/audio.json
/// resolver.resolve(TypeKey::of::<VideoSettings>());
/// // -> /var/lib/app/singletons/my_app.VideoSettings
/// ```
pub struct KeyResolver {
    root: PathBuf,
    overrides: RwLock<HashMap<TypeKey, PathBuf>>,
    /// Synthesized defaults, computed once per type
    cache: DashMap<TypeKey, PathBuf>,
}

impl KeyResolver {
    /// Create a resolver rooted at the given durable-data directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        KeyResolver {
            root: root.as_ref().to_path_buf(),
            overrides: RwLock::new(HashMap::new()),
            cache: DashMap::new(),
        }
    }

    /// Create a resolver pre-populated with per-type overrides
    pub fn with_overrides<I, P>(root: impl AsRef<Path>, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (TypeKey, P)>,
        P: AsRef<Path>,
    {
        let resolver = Self::new(root);
        for (key, path) in overrides {
            resolver.register_override(key, path)?;
        }
        Ok(resolver)
    }

    /// The root directory all relative keys resolve under
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Register an explicit storage key for a type
    ///
    /// Relative paths are joined under the root; absolute paths are taken
    /// as-is. Registering the same type twice is a programmer error and
    /// returns [`Error::AlreadyRegistered`].
    pub fn register_override(&self, key: TypeKey, path: impl AsRef<Path>) -> Result<()> {
        let mut overrides = self.overrides.write();
        if overrides.contains_key(&key) {
            return Err(Error::AlreadyRegistered {
                type_name: key.name(),
            });
        }

        let path = path.as_ref();
        let full = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };
        overrides.insert(key, full);
        Ok(())
    }

    /// Whether a type has an explicit override
    pub fn has_override(&self, key: TypeKey) -> bool {
        self.overrides.read().contains_key(&key)
    }

    /// Resolve a type identity to its storage key
    ///
    /// The override wins if one is registered; otherwise the synthesized
    /// default `<root>/singletons/<flat name>` is returned (and cached).
    pub fn resolve(&self, key: TypeKey) -> PathBuf {
        if let Some(overridden) = self.overrides.read().get(&key) {
            return overridden.clone();
        }

        self.cache
            .entry(key)
            .or_insert_with(|| self.root.join(DEFAULT_SUBDIR).join(key.flat_name()))
            .clone()
    }
}

impl std::fmt::Debug for KeyResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyResolver")
            .field("root", &self.root)
            .field("override_count", &self.overrides.read().len())
            .finish()
    }
}
