// crates/dealermap-core/src/lib.rs

//! # dealermap-core
//!
//! Dealer catalog, Turkish-aware text normalization, a two-tier search
//! filter and the map viewport policy that follows its results.
//!
//! ```rust
//! use dealermap_core::prelude::*;
//!
//! let catalog = Catalog::from_json_str(r#"{
//!     "cities": [],
//!     "districts": [],
//!     "dealers": [
//!         { "city": "İSTANBUL", "district": "Beyoğlu", "name": "A", "latitude": 41.03, "longitude": 28.97 },
//!         { "city": "ANKARA", "district": null, "name": "İstanbul Ek", "latitude": 39.93, "longitude": 32.86 }
//!     ]
//! }"#)?;
//!
//! let frame = recompute(&catalog, "istanbul", &MapConfig::default());
//! assert_eq!(frame.tier(), MatchTier::City);
//! assert_eq!(frame.shown_dealers(), 1);
//! assert!(matches!(frame.viewport, ViewportCommand::FitBounds { .. }));
//! # Ok::<(), CatalogError>(())
//! ```

pub mod api; // Serializable views
pub mod common;
pub mod config;
pub mod error;
pub mod loader;
pub mod locator;
pub mod model;
pub mod prelude;
#[doc(hidden)]
pub mod raw;
pub mod search;
pub mod text;
pub mod traits;
pub mod viewport;

// Re-exports
pub use crate::common::CatalogStats;
pub use crate::config::{MapConfig, MarkerIcon};
pub use crate::error::{CatalogError, Result};
pub use crate::locator::{recompute, Frame, Locator};
pub use crate::model::{Catalog, City, Dealer, District};
pub use crate::search::{filter, MatchTier, ResultSet};
pub use crate::text::normalize;
pub use crate::traits::{DealerSearch, NameMatch};
pub use crate::viewport::{compute_viewport, Bounds, LatLng, Padding, ViewportCommand};
