use rune_core::{ErrorInfo, Pattern, RuneError, SchemaVersion, TableProvenance};
use serde::{Deserialize, Serialize};

use crate::table::{self, CodeTable, TABLE_SCHEMA_VERSION};

#[derive(Debug, Serialize, Deserialize)]
struct SerializableCodeTable {
    schema_version: SchemaVersion,
    provenance: TableProvenance,
    bit_length: usize,
    rows: Vec<Vec<u8>>,
}

fn serialize_rows(rows: &[Pattern]) -> Vec<Vec<u8>> {
    rows.iter().map(|row| row.bits().to_vec()).collect()
}

fn deserialize_rows(bit_length: usize, data: Vec<Vec<u8>>) -> Result<Vec<Pattern>, RuneError> {
    let mut rows = Vec::with_capacity(data.len());
    for (code_id, bits) in data.into_iter().enumerate() {
        if bits.len() != bit_length {
            let info = ErrorInfo::new("row-width-mismatch", "stored row width differs from table")
                .with_context("code_id", code_id.to_string())
                .with_context("row_width", bits.len().to_string())
                .with_context("bit_length", bit_length.to_string());
            return Err(RuneError::Serde(info));
        }
        rows.push(Pattern::from_bits(bits)?);
    }
    Ok(rows)
}

fn check_schema(version: SchemaVersion) -> Result<(), RuneError> {
    if version.major != TABLE_SCHEMA_VERSION.major {
        let info = ErrorInfo::new(
            "schema-major-mismatch",
            "persisted table was written under an incompatible schema",
        )
        .with_context(
            "stored",
            format!("{}.{}.{}", version.major, version.minor, version.patch),
        )
        .with_context(
            "supported",
            format!(
                "{}.{}.{}",
                TABLE_SCHEMA_VERSION.major, TABLE_SCHEMA_VERSION.minor, TABLE_SCHEMA_VERSION.patch
            ),
        )
        .with_hint("wipe or migrate the cache entry before retrying");
        return Err(RuneError::Serde(info));
    }
    Ok(())
}

fn to_payload(table: &CodeTable) -> SerializableCodeTable {
    let (bit_length, rows, schema_version, provenance) = table::into_parts(table);
    SerializableCodeTable {
        schema_version,
        provenance: provenance.clone(),
        bit_length,
        rows: serialize_rows(rows),
    }
}

fn from_payload(payload: SerializableCodeTable) -> Result<CodeTable, RuneError> {
    check_schema(payload.schema_version)?;
    let rows = deserialize_rows(payload.bit_length, payload.rows)?;
    Ok(table::from_parts(
        payload.bit_length,
        rows,
        payload.schema_version,
        payload.provenance,
    ))
}

/// Serializes a code table to a JSON string.
pub fn to_json(table: &CodeTable) -> Result<String, RuneError> {
    serde_json::to_string_pretty(&to_payload(table))
        .map_err(|err| RuneError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Restores a code table from a JSON string.
pub fn from_json(data: &str) -> Result<CodeTable, RuneError> {
    let payload: SerializableCodeTable = serde_json::from_str(data)
        .map_err(|err| RuneError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))?;
    from_payload(payload)
}

/// Serializes a code table into a binary blob.
pub fn to_bytes(table: &CodeTable) -> Result<Vec<u8>, RuneError> {
    bincode::serialize(&to_payload(table))
        .map_err(|err| RuneError::Serde(ErrorInfo::new("bincode-serialize", err.to_string())))
}

/// Rehydrates a code table from a binary blob.
pub fn from_bytes(bytes: &[u8]) -> Result<CodeTable, RuneError> {
    let payload: SerializableCodeTable = bincode::deserialize(bytes)
        .map_err(|err| RuneError::Serde(ErrorInfo::new("bincode-deserialize", err.to_string())))?;
    from_payload(payload)
}
