#![deny(missing_docs)]
#![doc = "Core error types and bit-pattern values shared across the rune workspace."]

pub mod errors;
pub mod pattern;
pub mod provenance;

pub use errors::{ErrorInfo, RuneError};
pub use pattern::Pattern;
pub use provenance::{SchemaVersion, TableProvenance};
