use rune_code::{build_code_table, from_bytes, from_json, to_bytes, to_json};

#[test]
fn json_round_trip() {
    let table = build_code_table(5).unwrap();
    let json = to_json(&table).unwrap();
    let restored = from_json(&json).unwrap();
    assert_eq!(restored.rows(), table.rows());
    assert_eq!(restored.canonical_hash(), table.canonical_hash());
}

#[test]
fn binary_round_trip() {
    let table = build_code_table(5).unwrap();
    let bytes = to_bytes(&table).unwrap();
    let restored = from_bytes(&bytes).unwrap();
    assert_eq!(restored.rows(), table.rows());
    assert_eq!(restored.canonical_hash(), table.canonical_hash());
}

#[test]
fn round_trip_preserves_code_id_order() {
    let table = build_code_table(4).unwrap();
    let restored = from_json(&to_json(&table).unwrap()).unwrap();
    for (code_id, row) in table.rows().iter().enumerate() {
        assert_eq!(restored.get(code_id).unwrap(), row);
    }
}

#[test]
fn incompatible_schema_major_is_rejected() {
    let table = build_code_table(3).unwrap();
    let json = to_json(&table).unwrap();
    let mut payload: serde_json::Value = serde_json::from_str(&json).unwrap();
    payload["schema_version"]["major"] = serde_json::json!(9);
    let err = from_json(&payload.to_string()).unwrap_err();
    assert_eq!(err.info().code, "schema-major-mismatch");
}

#[test]
fn malformed_row_bits_are_rejected() {
    let table = build_code_table(3).unwrap();
    let json = to_json(&table).unwrap();
    let mut payload: serde_json::Value = serde_json::from_str(&json).unwrap();
    payload["rows"][0][0] = serde_json::json!(7);
    let err = from_json(&payload.to_string()).unwrap_err();
    assert_eq!(err.info().code, "invalid-pattern-bit");
}

#[test]
fn truncated_row_is_rejected() {
    let table = build_code_table(3).unwrap();
    let json = to_json(&table).unwrap();
    let mut payload: serde_json::Value = serde_json::from_str(&json).unwrap();
    payload["rows"][1] = serde_json::json!([0, 1]);
    let err = from_json(&payload.to_string()).unwrap_err();
    assert_eq!(err.info().code, "row-width-mismatch");
}

#[test]
fn garbage_bytes_are_rejected() {
    let err = from_bytes(&[0xff, 0x00, 0xab, 0x17]).unwrap_err();
    assert_eq!(err.info().code, "bincode-deserialize");
}
