// crates/dealermap-core/src/locator.rs

//! # Locator
//!
//! The per-keystroke update as a pure reducer:
//! `(catalog, query, config) -> Frame`. A [`Frame`] holds everything the
//! renderer needs for one state of the page: the matching dealers, the
//! viewport command and the counters shown above the map.
//!
//! [`Locator`] wraps the reducer for callers that want to keep the current
//! query around. Each call recomputes from scratch and replaces the previous
//! frame.

use crate::config::MapConfig;
use crate::model::Catalog;
use crate::search::{filter, MatchTier, ResultSet};
use crate::viewport::{compute_viewport, ViewportCommand};

/// Result of one recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    pub results: ResultSet<'a>,
    pub viewport: ViewportCommand,
    /// Size of the full catalog.
    pub total_dealers: usize,
    /// Number of reference cities in the catalog.
    pub city_count: usize,
}

impl<'a> Frame<'a> {
    /// Number of dealers currently shown.
    pub fn shown_dealers(&self) -> usize {
        self.results.len()
    }

    pub fn tier(&self) -> MatchTier {
        self.results.tier()
    }
}

/// Filter the catalog and derive the viewport for `query`.
///
/// ```rust
/// use dealermap_core::{recompute, Catalog, MapConfig, ViewportCommand};
///
/// let catalog = Catalog::default();
/// let frame = recompute(&catalog, "anything", &MapConfig::default());
/// assert_eq!(frame.shown_dealers(), 0);
/// assert!(matches!(frame.viewport, ViewportCommand::SetView { .. }));
/// ```
pub fn recompute<'a>(catalog: &'a Catalog, query: &str, config: &MapConfig) -> Frame<'a> {
    let results = filter(catalog, query);
    let viewport = compute_viewport(&results, config);
    Frame {
        results,
        viewport,
        total_dealers: catalog.dealer_count(),
        city_count: catalog.city_count(),
    }
}

/// Stateful wrapper around [`recompute`] holding the current query.
#[derive(Debug, Clone)]
pub struct Locator<'a> {
    catalog: &'a Catalog,
    config: MapConfig,
    query: String,
}

impl<'a> Locator<'a> {
    pub fn new(catalog: &'a Catalog, config: MapConfig) -> Self {
        Self {
            catalog,
            config,
            query: String::new(),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// The raw query as last entered.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Frame for the current query.
    pub fn frame(&self) -> Frame<'a> {
        recompute(self.catalog, &self.query, &self.config)
    }

    /// Replace the query and return the new frame.
    pub fn set_query(&mut self, query: impl Into<String>) -> Frame<'a> {
        self.query = query.into();
        self.frame()
    }
}
