use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a catalog.
///
/// Returned by [`crate::DealerSearch::stats`]; the counts reflect the
/// validated in-memory catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub cities: usize,
    pub districts: usize,
    pub dealers: usize,
}
