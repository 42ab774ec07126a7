//! Serialization hook for persistent singletons
//!
//! The strategy treats payloads as opaque bytes; the singleton's own state
//! type produces and consumes them through [`Persist`]. Payloads are JSON,
//! and loading uses **overlay** semantics: persisted fields overwrite their
//! counterparts on the live instance, absent fields keep whatever value the
//! instance already has. A payload saved by an older version of a type
//! therefore still loads cleanly after fields are added.
//!
//! A blanket implementation covers every `Serialize + DeserializeOwned`
//! type, so state types only derive serde traits and never implement
//! `Persist` by hand.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Serialization hook implemented by singleton state types
pub trait Persist {
    /// Serialize the current state into a payload
    fn to_payload(&self) -> Result<Vec<u8>>;

    /// Overlay a persisted payload onto the current state
    ///
    /// Fields present in the payload overwrite the instance field-by-field;
    /// fields absent from the payload are left untouched.
    fn overlay_from(&mut self, payload: &[u8]) -> Result<()>;
}

impl<T> Persist for T
where
    T: Serialize + DeserializeOwned,
{
    fn to_payload(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    fn overlay_from(&mut self, payload: &[u8]) -> Result<()> {
        let incoming: Value = serde_json::from_slice(payload)?;
        let mut current = serde_json::to_value(&*self)?;
        merge_into(&mut current, incoming);
        *self = serde_json::from_value(current)?;
        Ok(())
    }
}

/// Recursively merge `incoming` into `base`
///
/// Object fields merge key-by-key; any other value (including arrays)
/// replaces the base value wholesale.
fn merge_into(base: &mut Value, incoming: Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(incoming_map)) => {
            for (field, value) in incoming_map {
                match base_map.get_mut(&field) {
                    Some(slot) => merge_into(slot, value),
                    None => {
                        base_map.insert(field, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
