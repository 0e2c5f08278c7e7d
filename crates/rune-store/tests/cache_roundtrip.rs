use std::fs;

use rune_store::{CodeCache, TableSource};
use tempfile::tempdir;

#[test]
fn cold_fetch_computes_then_persists() {
    let dir = tempdir().unwrap();
    let cache = CodeCache::new(dir.path().join("uniques"));
    assert!(!cache.contains(5));

    let (table, outcome) = cache.fetch_with_outcome(5).unwrap();
    assert_eq!(outcome.source, TableSource::Computed);
    assert!(outcome.persist_error.is_none());
    assert_eq!(table.len(), 8);
    assert!(cache.contains(5));
}

#[test]
fn warm_fetch_is_served_from_disk() {
    let dir = tempdir().unwrap();
    let cache = CodeCache::new(dir.path());

    let (cold, first) = cache.fetch_with_outcome(5).unwrap();
    let (warm, second) = cache.fetch_with_outcome(5).unwrap();
    assert_eq!(first.source, TableSource::Computed);
    assert_eq!(second.source, TableSource::Cache);
    assert_eq!(cold.rows(), warm.rows());
    assert_eq!(cold.canonical_hash(), warm.canonical_hash());
}

#[test]
fn entries_are_keyed_by_bit_length() {
    let dir = tempdir().unwrap();
    let cache = CodeCache::new(dir.path());
    cache.fetch(3).unwrap();
    cache.fetch(5).unwrap();
    assert!(cache.entry_path(3).ends_with("codes_003.bin"));
    assert!(cache.contains(3));
    assert!(cache.contains(5));
    assert!(!cache.contains(4));
}

#[test]
fn no_staging_files_survive_a_successful_publish() {
    let dir = tempdir().unwrap();
    let cache = CodeCache::new(dir.path());
    cache.fetch(4).unwrap();
    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .filter(|name| name.contains(".tmp-"))
        .collect();
    assert!(leftovers.is_empty(), "staging files left behind: {leftovers:?}");
}

#[test]
fn fetch_without_outcome_matches_reported_table() {
    let dir = tempdir().unwrap();
    let cache = CodeCache::new(dir.path());
    let plain = cache.fetch(3).unwrap();
    let (reported, _) = cache.fetch_with_outcome(3).unwrap();
    assert_eq!(plain.rows(), reported.rows());
}
