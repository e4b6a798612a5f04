// crates/dealermap-core/src/loader/mod.rs

//! # Catalog Loader
//!
//! Handles the physical layer (I/O, decompression) and delegates to the
//! payload parsers: source JSON (`json.rs`) or binary snapshot
//! (`snapshot.rs`).
//!
//! Every loader validates fully before returning; a malformed entry fails
//! the whole load.

use crate::error::Result;
use crate::model::Catalog;
use std::path::{Path, PathBuf};

pub(crate) mod common_io;
#[cfg(feature = "json")]
mod json;
mod snapshot;

#[cfg(feature = "json")]
static CATALOG_CACHE: once_cell::sync::OnceCell<Catalog> = once_cell::sync::OnceCell::new();

impl Catalog {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "dealers.json"
    }

    /// Load the bundled catalog (`data/dealers.json`).
    ///
    /// Parsed and validated once per process; later calls clone the cached
    /// value.
    #[cfg(feature = "json")]
    pub fn load() -> Result<Self> {
        Self::shared().cloned()
    }

    /// Process-wide bundled catalog, borrowed.
    #[cfg(feature = "json")]
    pub fn shared() -> Result<&'static Catalog> {
        CATALOG_CACHE.get_or_try_init(|| {
            let path = Self::default_data_dir().join(Self::default_dataset_filename());
            Self::load_from_path(path)
        })
    }

    /// Load a catalog file, choosing the parser by extension:
    /// `.bin` is a binary snapshot, anything else is (optionally gzipped) JSON.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if common_io::has_extension(path, "bin") {
            tracing::debug!(path = %path.display(), "loading catalog snapshot");
            return Self::load_binary_file(path);
        }
        Self::load_source(path)
    }

    #[cfg(feature = "json")]
    fn load_source(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading catalog JSON");
        let reader = common_io::open_stream(path)?;
        Self::from_reader(reader)
    }

    #[cfg(not(feature = "json"))]
    fn load_source(path: &Path) -> Result<Self> {
        Err(crate::error::CatalogError::NotFound(format!(
            "cannot read {}: JSON catalogs require the `json` feature",
            path.display()
        )))
    }
}
