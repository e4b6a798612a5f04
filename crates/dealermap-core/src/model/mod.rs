// crates/dealermap-core/src/model/mod.rs
pub mod convert;
pub mod domain;
pub mod load;
pub mod search;

pub use domain::{Catalog, City, Dealer, District};

/// Suffix appended to a source catalog path to name its binary snapshot.
#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "snapshot.bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "snapshot.comp.bin";
