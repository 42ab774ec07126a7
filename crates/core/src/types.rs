//! Type identity for singleton slots
//!
//! Every strategy keys its slot (or slot map) by [`TypeKey`]: one slot per
//! singleton kind, process-wide. A `TypeKey` pairs the comparable identity
//! (`std::any::TypeId`) with the stable type path (`std::any::type_name`),
//! which the persistent strategy uses to synthesize storage keys.

use std::any::TypeId;
use std::fmt;

/// Stable identity of a singleton kind
///
/// Cheap to copy and usable as a map key. Equality and hashing go through
/// `TypeId`; the name is carried for diagnostics and storage-key synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Get the key for a type
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeKey {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying `TypeId`
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Full type path, e.g. `my_app::settings::AudioSettings`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type path with `::` flattened to `.` so it is usable as a single
    /// file or directory name, e.g. `my_app.settings.AudioSettings`
    pub fn flat_name(&self) -> String {
        self.name.replace("::", ".")
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
