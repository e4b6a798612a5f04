//! Catalog loading from files: JSON, gzip, snapshots and failure modes.
#![cfg(feature = "json")]

use dealermap_core::prelude::*;
use std::fs;
use std::path::Path;

const SMALL: &str = r#"{
    "cities": [{ "name": "ADANA", "latitude": 37.0, "longitude": 35.32 }],
    "districts": [{ "city": "ADANA", "district": null, "latitude": 37.0, "longitude": 35.32 }],
    "dealers": [
        { "city": "ADANA", "district": "Seyhan", "name": "Çukurova Yapı", "latitude": 36.99, "longitude": 35.33 },
        { "city": "MERSİN", "name": "Liman Hırdavat", "latitude": 36.8, "longitude": 34.63 }
    ]
}"#;

fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn loads_plain_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "dealers.json", SMALL);
    let catalog = Catalog::load_from_path(&path).unwrap();
    assert_eq!(catalog.dealer_count(), 2);
    assert_eq!(catalog.dealers[0].district(), Some("Seyhan"));
    assert_eq!(catalog.dealers[1].district(), None);
}

#[test]
fn unknown_city_is_reported_not_rejected() {
    let catalog = Catalog::from_json_str(SMALL).unwrap();
    let orphans = catalog.unknown_dealer_cities();
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].city(), "MERSİN");
    // Search still finds it.
    assert_eq!(catalog.filter("mersin").len(), 1);
}

#[cfg(feature = "compact")]
#[test]
fn loads_gzipped_json() {
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dealers.json.gz");
    let mut enc = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    enc.write_all(SMALL.as_bytes()).unwrap();
    enc.finish().unwrap();

    let catalog = Catalog::load_from_path(&path).unwrap();
    assert_eq!(catalog.dealer_count(), 2);
}

#[test]
fn snapshot_written_by_save_as_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::from_json_str(SMALL).unwrap();
    let out = dir.path().join("dealers.bin");
    catalog.save_as(&out).unwrap();
    assert_eq!(Catalog::load_from_path(&out).unwrap(), catalog);
}

#[test]
fn load_cached_creates_and_reuses_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "dealers.json", SMALL);

    let first = Catalog::load_cached(&path).unwrap();
    let snapshots: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".bin"))
        .collect();
    assert_eq!(snapshots.len(), 1);

    let second = Catalog::load_cached(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn corrupt_snapshot_falls_back_to_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "dealers.json", SMALL);
    Catalog::load_cached(&path).unwrap();

    let snapshot = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .find(|p| p.extension().is_some_and(|e| e == "bin"))
        .unwrap();
    fs::write(&snapshot, b"garbage").unwrap();

    let catalog = Catalog::load_cached(&path).unwrap();
    assert_eq!(catalog.dealer_count(), 2);
}

#[test]
fn malformed_entry_fails_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "bad.json",
        r#"{ "cities": [], "districts": [], "dealers": [
            { "city": "ADANA", "name": "ok", "latitude": 37.0, "longitude": 35.3 },
            { "city": "ADANA", "name": "bad", "latitude": 37.0, "longitude": 200.0 }
        ] }"#,
    );
    match Catalog::load_from_path(&path) {
        Err(CatalogError::Invalid { section, index, .. }) => {
            assert_eq!(section, "dealers");
            assert_eq!(index, 1);
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn missing_section_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "bad.json", r#"{ "dealers": [] }"#);
    assert!(matches!(
        Catalog::load_from_path(&path),
        Err(CatalogError::Json(_))
    ));
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Catalog::load_from_path(dir.path().join("nope.json")),
        Err(CatalogError::NotFound(_))
    ));
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "map.json", r#"{ "fallback_zoom": 7, "max_zoom": 12 }"#);
    let config = MapConfig::load_from_path(&path).unwrap();
    assert_eq!(config.fallback_zoom, 7);
    assert_eq!(config.max_zoom, 12);
    assert_eq!(config.fallback_center, LatLng::new(39.0, 35.0));
}
