use sha2::{Digest, Sha256};

use rune_core::Pattern;

use crate::table::CodeTable;

fn update_row(hasher: &mut Sha256, row: &Pattern) {
    let bits = row.bits();
    hasher.update((bits.len() as u64).to_le_bytes());
    for &bit in bits {
        hasher.update(u64::from(bit).to_le_bytes());
    }
}

/// Computes the canonical structural hash for a code table.
///
/// Covers the schema version, the bit length, and every row in code-id
/// order; provenance is excluded so rebuilding a table yields the same hash.
pub fn canonical_table_hash(table: &CodeTable) -> String {
    let mut hasher = Sha256::new();
    let version = table.schema_version();
    hasher.update(u64::from(version.major).to_le_bytes());
    hasher.update(u64::from(version.minor).to_le_bytes());
    hasher.update(u64::from(version.patch).to_le_bytes());
    hasher.update((table.bit_length() as u64).to_le_bytes());
    hasher.update((table.len() as u64).to_le_bytes());

    for row in table.rows() {
        update_row(&mut hasher, row);
    }

    let digest = hasher.finalize();
    digest
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<String>()
}
