use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use serde::{Deserialize, Serialize};

use rune_code::{build_code_table, check_bit_length, from_bytes, to_bytes, CodeTable};
use rune_core::{ErrorInfo, RuneError};

/// Where a fetched table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableSource {
    /// Decoded from a persisted cache entry.
    Cache,
    /// Computed by the generator during this call.
    Computed,
}

/// Structured report accompanying a fetched table.
///
/// A failed persist does not fail the fetch; it is surfaced here so the
/// caller can report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchOutcome {
    /// Whether the table was loaded or computed.
    pub source: TableSource,
    /// Error payload from a failed persist attempt, if any.
    pub persist_error: Option<ErrorInfo>,
}

/// File-backed cache of code tables, one entry per bit length.
///
/// The cache owns its persisted entries; callers receive owned tables.
/// Entries are written once and never mutated; there is no invalidation
/// path. The root directory is injected, never ambient.
#[derive(Debug, Clone)]
pub struct CodeCache {
    root: PathBuf,
}

impl CodeCache {
    /// Creates a cache handle rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the storage root this cache reads and writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the entry path used for the given bit length.
    pub fn entry_path(&self, bit_length: usize) -> PathBuf {
        self.root.join(format!("codes_{bit_length:03}.bin"))
    }

    /// Returns whether a persisted entry exists for the given bit length.
    pub fn contains(&self, bit_length: usize) -> bool {
        self.entry_path(bit_length).is_file()
    }

    /// Fetches the code table for `bit_length`, computing and persisting it
    /// on a cache miss.
    pub fn fetch(&self, bit_length: usize) -> Result<CodeTable, RuneError> {
        self.fetch_with_outcome(bit_length).map(|(table, _)| table)
    }

    /// Fetches the code table together with a [`FetchOutcome`] report.
    ///
    /// A persisted entry is decoded and returned verbatim; a corrupt or
    /// unreadable entry is a fatal error, never a silent recompute. On a
    /// miss the table is computed, persisted, and returned; persist failure
    /// is reported in the outcome while the call still succeeds.
    pub fn fetch_with_outcome(
        &self,
        bit_length: usize,
    ) -> Result<(CodeTable, FetchOutcome), RuneError> {
        check_bit_length(bit_length)?;
        let path = self.entry_path(bit_length);
        if path.is_file() {
            let bytes = fs::read(&path).map_err(|err| {
                RuneError::Store(
                    ErrorInfo::new("entry-read", err.to_string())
                        .with_context("path", path.display().to_string())
                        .with_context("bit_length", bit_length.to_string()),
                )
            })?;
            let table = from_bytes(&bytes).map_err(|err| {
                RuneError::Store(
                    ErrorInfo::new("entry-corrupt", "persisted cache entry failed to decode")
                        .with_context("path", path.display().to_string())
                        .with_context("cause", err.info().message.clone())
                        .with_hint("remove the entry to allow recomputation"),
                )
            })?;
            let outcome = FetchOutcome {
                source: TableSource::Cache,
                persist_error: None,
            };
            return Ok((table, outcome));
        }

        let table = build_code_table(bit_length)?;
        let persist_error = self
            .persist(bit_length, &table)
            .err()
            .map(|err| err.info().clone());
        let outcome = FetchOutcome {
            source: TableSource::Computed,
            persist_error,
        };
        Ok((table, outcome))
    }

    fn persist(&self, bit_length: usize, table: &CodeTable) -> Result<(), RuneError> {
        fs::create_dir_all(&self.root).map_err(|err| {
            RuneError::Store(
                ErrorInfo::new("store-mkdir", err.to_string())
                    .with_context("path", self.root.display().to_string()),
            )
        })?;
        let bytes = to_bytes(table)?;
        // Publish through a process-unique temp name plus rename so two
        // processes racing on the same uncached bit length cannot tear or
        // interleave an entry.
        let staging = self
            .root
            .join(format!("codes_{bit_length:03}.bin.tmp-{}", process::id()));
        fs::write(&staging, &bytes).map_err(|err| {
            RuneError::Store(
                ErrorInfo::new("entry-write", err.to_string())
                    .with_context("path", staging.display().to_string()),
            )
        })?;
        let path = self.entry_path(bit_length);
        fs::rename(&staging, &path).map_err(|err| {
            let _ = fs::remove_file(&staging);
            RuneError::Store(
                ErrorInfo::new("entry-publish", err.to_string())
                    .with_context("from", staging.display().to_string())
                    .with_context("to", path.display().to_string()),
            )
        })
    }
}
