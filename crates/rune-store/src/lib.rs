#![deny(missing_docs)]
#![doc = "File-backed cache of necklace code tables, keyed by bit length."]

/// The cache handle and its fetch outcome reporting.
pub mod cache;

pub use cache::{CodeCache, FetchOutcome, TableSource};
