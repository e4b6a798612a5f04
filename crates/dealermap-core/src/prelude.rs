//! dealermap prelude: bring common types and traits into scope for demos and front-ends.

pub use crate::api::{DealerView, FrameView};
pub use crate::common::CatalogStats;
pub use crate::config::{MapConfig, MarkerIcon};
pub use crate::error::{CatalogError, Result};
pub use crate::locator::{recompute, Frame, Locator};
pub use crate::model::{Catalog, City, Dealer, District};
pub use crate::search::{filter, MatchTier, ResultSet};
pub use crate::text::{contains_normalized, equals_normalized, normalize};
pub use crate::traits::{DealerSearch, NameMatch};
pub use crate::viewport::{compute_viewport, Bounds, LatLng, Padding, ViewportCommand};
