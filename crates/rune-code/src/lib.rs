#![deny(missing_docs)]
#![doc = "Necklace code generation: lexicographic enumeration, rotation-class reduction, and the resulting code tables."]

/// Lexicographic enumeration of fixed-width binary patterns.
pub mod enumerate;
/// Canonical hashing helpers for code tables.
pub mod hash;
/// Brute-force reduction of an enumeration to necklace representatives.
pub mod necklace;
/// Serialization routines for JSON and binary round-trips.
pub mod serde;
/// The ordered code table and its construction.
pub mod table;

pub use enumerate::{check_bit_length, enumerate_patterns};
pub use hash::canonical_table_hash;
pub use necklace::reduce_to_necklaces;
pub use serde::{from_bytes, from_json, to_bytes, to_json};
pub use table::{build_code_table, CodeTable, TABLE_SCHEMA_VERSION};
