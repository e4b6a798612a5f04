// crates/dealermap-core/src/loader/snapshot.rs

use super::common_io;
use crate::error::Result;
use crate::model::Catalog;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompressionMode {
    #[cfg(feature = "compact")]
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip when built with `compact`, plain otherwise.
    pub(crate) const fn default_for_build() -> Self {
        #[cfg(feature = "compact")]
        {
            CompressionMode::Gzip
        }
        #[cfg(not(feature = "compact"))]
        {
            CompressionMode::None
        }
    }
}

// -----------------------------------------------------------------------------
// RUNTIME HELPERS
// -----------------------------------------------------------------------------

impl Catalog {
    /// Decode a snapshot file written by [`Catalog::save_as`].
    ///
    /// The decoded catalog is validated like a JSON source.
    pub fn load_binary_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = common_io::read_all(path.as_ref())?;
        let catalog = Self::from_bytes(&bytes)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Write the catalog as a binary snapshot. Invalid catalogs are refused.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        self.validate()?;
        write_snapshot(path.as_ref(), self, CompressionMode::default_for_build())
    }

    /// **Smart Load:** use the snapshot next to `path` when it is fresh,
    /// otherwise parse the JSON source and refresh the snapshot.
    ///
    /// A stale or undecodable snapshot is ignored. Failing to write the
    /// snapshot is logged and does not fail the load.
    #[cfg(feature = "json")]
    pub fn load_cached(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let cache_path = common_io::get_cache_path(path, crate::model::CACHE_SUFFIX);

        if is_cache_fresh(path, &cache_path) {
            match Self::load_binary_file(&cache_path) {
                Ok(catalog) => return Ok(catalog),
                Err(e) => tracing::warn!(
                    cache = %cache_path.display(),
                    error = %e,
                    "ignoring unreadable catalog snapshot"
                ),
            }
        }

        let catalog = Self::load_from_path(path)?;

        match catalog.save_as(&cache_path) {
            Ok(()) => tracing::info!(cache = %cache_path.display(), "catalog snapshot rebuilt"),
            Err(e) => tracing::warn!(
                cache = %cache_path.display(),
                error = %e,
                "could not write catalog snapshot"
            ),
        }

        Ok(catalog)
    }
}

/// A snapshot is fresh when it exists and is strictly newer than its source.
/// Equal timestamps count as stale: the source may have been rewritten within
/// the filesystem's mtime resolution.
#[cfg(feature = "json")]
fn is_cache_fresh(json_path: &Path, cache_path: &Path) -> bool {
    let cache_time = match std::fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match std::fs::metadata(json_path).and_then(|m| m.modified()) {
        Ok(json_time) => json_time < cache_time,
        // Source gone: the snapshot is all there is.
        Err(_) => true,
    }
}

// -----------------------------------------------------------------------------
// WRITER
// -----------------------------------------------------------------------------

fn write_snapshot(path: &Path, catalog: &Catalog, compression: CompressionMode) -> Result<()> {
    let bytes = catalog.to_bytes()?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match compression {
        #[cfg(feature = "compact")]
        CompressionMode::Gzip => {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            encoder.write_all(&bytes)?;
            encoder.finish()?.flush()?;
        }
        CompressionMode::None => {
            writer.write_all(&bytes)?;
            writer.flush()?;
        }
    }

    tracing::debug!(
        path = %path.display(),
        dealers = catalog.dealers.len(),
        ?compression,
        "wrote catalog snapshot"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::model::Dealer;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![],
            vec![],
            vec![Dealer {
                city: "SAMSUN".into(),
                district: Some("Atakum".into()),
                name: "Karadeniz Yapı".into(),
                latitude: 41.33,
                longitude: 36.27,
            }],
        )
    }

    #[test]
    fn plain_snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.bin");
        write_snapshot(&path, &catalog(), CompressionMode::None).unwrap();
        assert_eq!(Catalog::load_binary_file(&path).unwrap(), catalog());
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzip_snapshot_is_detected_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.bin");
        write_snapshot(&path, &catalog(), CompressionMode::Gzip).unwrap();
        let raw = std::fs::read(&path).unwrap();
        assert_eq!(raw[..2], [0x1f_u8, 0x8b]);
        assert_eq!(Catalog::load_binary_file(&path).unwrap(), catalog());
    }

    #[cfg(feature = "json")]
    #[test]
    fn missing_cache_is_not_fresh() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_cache_fresh(
            &dir.path().join("a.json"),
            &dir.path().join("a.json.snapshot.bin")
        ));
    }

    #[test]
    fn invalid_snapshot_is_rejected_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.bin");
        let bad = Catalog::new(
            vec![],
            vec![],
            vec![Dealer {
                city: String::new(),
                district: None,
                name: "   ".into(),
                latitude: 95.0,
                longitude: f64::NAN,
            }],
        );
        write_snapshot(&path, &bad, CompressionMode::None).unwrap();
        match Catalog::load_from_path(&path) {
            Err(CatalogError::Invalid { section, index, .. }) => {
                assert_eq!(section, "dealers");
                assert_eq!(index, 0);
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn save_as_refuses_invalid_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.bin");
        let mut bad = catalog();
        bad.dealers[0].latitude = -91.0;
        assert!(matches!(bad.save_as(&path), Err(CatalogError::Invalid { .. })));
        assert!(!path.exists());
    }

    #[cfg(feature = "json")]
    #[test]
    fn equal_mtime_is_not_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("a.json");
        let cache = dir.path().join("a.json.snapshot.bin");
        std::fs::write(&json, "{}").unwrap();
        std::fs::write(&cache, "").unwrap();
        let stamp = std::fs::metadata(&cache).unwrap().modified().unwrap();
        File::options().write(true).open(&json).unwrap().set_modified(stamp).unwrap();
        assert!(!is_cache_fresh(&json, &cache));
    }

    #[cfg(feature = "json")]
    #[test]
    fn source_rewritten_with_same_mtime_is_reparsed() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("d.json");
        let dealer = |name: &str| {
            format!(
                r#"{{"city":"BURSA","district":null,"name":"{name}","latitude":40.19,"longitude":29.06}}"#
            )
        };
        let write_source = |dealers: &[String]| {
            let body = format!(
                r#"{{"cities":[],"districts":[],"dealers":[{}]}}"#,
                dealers.join(",")
            );
            std::fs::write(&json, body).unwrap();
        };

        write_source(&[dealer("A")]);
        assert_eq!(Catalog::load_cached(&json).unwrap().dealer_count(), 1);

        let cache = common_io::get_cache_path(&json, crate::model::CACHE_SUFFIX);
        let stamp = std::fs::metadata(&cache).unwrap().modified().unwrap();
        write_source(&[dealer("A"), dealer("B")]);
        File::options().write(true).open(&json).unwrap().set_modified(stamp).unwrap();

        assert_eq!(Catalog::load_cached(&json).unwrap().dealer_count(), 2);
    }
}
