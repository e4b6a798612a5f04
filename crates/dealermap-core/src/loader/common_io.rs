// crates/dealermap-core/src/loader/common_io.rs
use crate::error::{CatalogError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the path
/// ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CatalogError::NotFound(format!("Catalog not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if has_extension(path, "gz") {
        return gunzip(reader);
    }
    Ok(Box::new(reader))
}

/// Reads a whole file, transparently decompressing gzip content.
pub fn read_all(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path).map_err(|e| {
        CatalogError::NotFound(format!("Snapshot not found at {}: {}", path.display(), e))
    })?;
    if !bytes.starts_with(&GZIP_MAGIC) {
        return Ok(bytes);
    }
    let mut out = Vec::new();
    gunzip(bytes.as_slice())?.read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(feature = "compact")]
fn gunzip<'r, R: Read + 'r>(reader: R) -> Result<Box<dyn Read + 'r>> {
    use flate2::read::GzDecoder;
    Ok(Box::new(GzDecoder::new(reader)))
}

#[cfg(not(feature = "compact"))]
fn gunzip<'r, R: Read + 'r>(_reader: R) -> Result<Box<dyn Read + 'r>> {
    Err(CatalogError::Io(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "gzip input requires the `compact` feature",
    )))
}

/// Snapshot path next to a source catalog: `dealers.json` -> `dealers.json.<suffix>`.
pub fn get_cache_path(json_path: &Path, suffix: &str) -> PathBuf {
    let filename = json_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    json_path.with_file_name(format!("{filename}.{suffix}"))
}

pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}
