//! String interning for a compiler front end
//!
//! This library provides a symbol table that assigns each distinct name a
//! stable integer identifier. Repeated insertion of the same name is
//! idempotent, lookup of an unseen name is a defined negative result, and
//! a bulk dump enumerates every stored (id, name) pair for diagnostics.
//!
//! One table instance covers one flat namespace; construct a table per
//! compilation unit and drop it when that unit's analysis completes.

pub mod symbol;
pub mod table;

pub use symbol::SymbolId;
pub use table::SymbolTable;
