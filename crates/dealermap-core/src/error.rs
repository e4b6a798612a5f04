// crates/dealermap-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading a catalog or a map configuration.
///
/// Every variant is a load-time failure. Once a [`crate::Catalog`] exists,
/// search and viewport computation cannot fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    /// A catalog entry failed validation. `index` is the position inside
    /// `section` (`"cities"`, `"districts"` or `"dealers"`).
    #[error("invalid {section}[{index}]: {reason}")]
    Invalid {
        section: &'static str,
        index: usize,
        reason: String,
    },

    #[error("invalid map config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub(crate) fn invalid(section: &'static str, index: usize, reason: impl Into<String>) -> Self {
        CatalogError::Invalid {
            section,
            index,
            reason: reason.into(),
        }
    }
}
