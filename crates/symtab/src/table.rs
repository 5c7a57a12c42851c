//! The interning table: fixed hash buckets with chained collisions
//!
//! Names hash into a fixed-size bucket array; each bucket owns an ordered
//! chain of entries. Chains grow without bound and the bucket array is
//! never resized, which is adequate for compiler-scale symbol counts.
//! The table owns every entry; dropping the table releases everything.

use crate::symbol::SymbolId;
use std::io::{self, Write};

/// Number of hash buckets; fixed at construction, never resized.
const BUCKET_COUNT: usize = 4096;

/// One interned name in a bucket chain
#[derive(Debug, Clone)]
struct Entry {
    name: String,
    id: SymbolId,
}

/// String interning table
///
/// Assigns each distinct name a [`SymbolId`], starting at 0 and increasing
/// by one per first-time insertion. Interning the same name again returns
/// the original id without mutating the table.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    /// Entry chains, one per bucket
    buckets: Box<[Vec<Entry>]>,
    /// id -> (bucket, chain position), in insertion order
    locations: Vec<(u32, u32)>,
}

impl SymbolTable {
    /// Create a new empty table
    pub fn new() -> Self {
        SymbolTable {
            buckets: (0..BUCKET_COUNT).map(|_| Vec::new()).collect(),
            locations: Vec::new(),
        }
    }

    /// Intern a name, returning its ID (get-or-create)
    ///
    /// The table stores its own copy of `name`; caller storage is never
    /// aliased. New entries go to the tail of their bucket's chain.
    pub fn intern(&mut self, name: &str) -> SymbolId {
        let bucket = bucket_index(name);
        if let Some(entry) = self.buckets[bucket].iter().find(|e| e.name == name) {
            return entry.id;
        }

        let id = SymbolId(self.locations.len() as u32);
        let chain = &mut self.buckets[bucket];
        self.locations.push((bucket as u32, chain.len() as u32));
        chain.push(Entry {
            name: name.to_string(),
            id,
        });
        id
    }

    /// Get the ID for an already-interned name (returns None if not found)
    ///
    /// A miss is a defined negative result, not an error: the front end
    /// probes for names before their declaration as a matter of course.
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        let bucket = bucket_index(name);
        self.buckets[bucket]
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.id)
    }

    /// Check if a name is already interned
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Resolve an ID to its name (returns None for ids this table never assigned)
    pub fn resolve(&self, id: SymbolId) -> Option<&str> {
        let (bucket, pos) = *self.locations.get(id.0 as usize)?;
        Some(self.buckets[bucket as usize][pos as usize].name.as_str())
    }

    /// Number of distinct names interned
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterate over all (id, name) pairs in bucket order, then chain order
    ///
    /// The order is deterministic for a fixed sequence of insertions but is
    /// not the insertion order and is not stable across different insertion
    /// sequences.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &str)> + '_ {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|e| (e.id, e.name.as_str())))
    }

    /// Write a human-readable listing of every (id, name) pair
    ///
    /// Diagnostic aid; the exact formatting is not part of the contract,
    /// only that each interned name appears exactly once with its id.
    pub fn dump(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "symtab: {} names", self.len())?;
        for (id, name) in self.iter() {
            writeln!(out, "{}\t{}", id.as_u32(), name)?;
        }
        Ok(())
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}

/// FNV-1a over the name's bytes, masked to the bucket range
///
/// Deterministic for equal inputs; nothing else about the hash is
/// load-bearing, and tests must not depend on bucket placement.
fn bucket_index(name: &str) -> usize {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET;
    for &byte in name.as_bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    (hash as usize) & (BUCKET_COUNT - 1)
}
