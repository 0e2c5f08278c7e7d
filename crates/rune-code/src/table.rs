use std::fmt;

use rune_core::{Pattern, RuneError, SchemaVersion, TableProvenance};

use crate::enumerate::enumerate_patterns;
use crate::hash;
use crate::necklace::reduce_to_necklaces;

/// Schema version written into every persisted code table.
pub const TABLE_SCHEMA_VERSION: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Ordered set of necklace representatives for a fixed bit length.
///
/// The positional index of a row is the stable code id consumers rely on;
/// rows are stored in first-seen reduction order and never resorted.
#[derive(Clone, PartialEq, Eq)]
pub struct CodeTable {
    bit_length: usize,
    rows: Vec<Pattern>,
    schema_version: SchemaVersion,
    provenance: TableProvenance,
}

impl fmt::Debug for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeTable")
            .field("bit_length", &self.bit_length)
            .field("rows", &self.rows.len())
            .field("schema_version", &self.schema_version)
            .field("hash", &self.provenance.table_hash)
            .finish()
    }
}

impl CodeTable {
    /// Returns the bit width shared by every row.
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Returns the number of necklace representatives in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the representative stored under the given code id.
    pub fn get(&self, code_id: usize) -> Option<&Pattern> {
        self.rows.get(code_id)
    }

    /// Returns the rows in code-id order.
    pub fn rows(&self) -> &[Pattern] {
        &self.rows
    }

    /// Returns the schema version the table was built under.
    pub fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    /// Returns the provenance block attached to the table.
    pub fn provenance(&self) -> &TableProvenance {
        &self.provenance
    }

    /// Returns the canonical structural hash of the table.
    pub fn canonical_hash(&self) -> String {
        hash::canonical_table_hash(self)
    }
}

/// Builds the code table for `bit_length` by enumerating and reducing.
pub fn build_code_table(bit_length: usize) -> Result<CodeTable, RuneError> {
    let enumerated = enumerate_patterns(bit_length)?;
    let rows = reduce_to_necklaces(&enumerated);
    Ok(from_parts(
        bit_length,
        rows,
        TABLE_SCHEMA_VERSION,
        TableProvenance {
            table_hash: String::new(),
            tool_versions: [(
                "rune-code".to_string(),
                env!("CARGO_PKG_VERSION").to_string(),
            )]
            .into_iter()
            .collect(),
        },
    ))
}

/// Assembles a table from already-reduced parts, stamping the hash.
pub(crate) fn from_parts(
    bit_length: usize,
    rows: Vec<Pattern>,
    schema_version: SchemaVersion,
    provenance: TableProvenance,
) -> CodeTable {
    let mut table = CodeTable {
        bit_length,
        rows,
        schema_version,
        provenance,
    };
    if table.provenance.table_hash.is_empty() {
        table.provenance.table_hash = hash::canonical_table_hash(&table);
    }
    table
}

/// Decomposes a table into its serialized components.
pub(crate) fn into_parts(
    table: &CodeTable,
) -> (usize, &[Pattern], SchemaVersion, &TableProvenance) {
    (
        table.bit_length,
        &table.rows,
        table.schema_version,
        &table.provenance,
    )
}
