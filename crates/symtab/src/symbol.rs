//! Interned symbol identifiers
//!
//! A `SymbolId` replaces a `String` name everywhere downstream of the
//! table. Benefits:
//! - O(1) comparison and hashing (u32 vs String)
//! - Copy semantics (no heap allocation on clone)
//!
//! Identifiers are assigned by [`SymbolTable::intern`](crate::SymbolTable::intern)
//! in strictly increasing order of first insertion, starting at 0, and are
//! never reused within one table.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// ID for an interned name
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub(crate) u32);

impl SymbolId {
    /// Get the raw ID value (for debugging/serialization)
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Create a SymbolId from a raw u32
    ///
    /// Only meaningful for ids previously handed out by the same table.
    pub fn from_raw(id: u32) -> Self {
        SymbolId(id)
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

// === Serde implementations ===
// Ids serialize as bare u32 for compact storage; name resolution is the
// owning table's job.

impl Serialize for SymbolId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SymbolId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(SymbolId)
    }
}
