// crates/dealermap-core/src/search.rs

//! # Tiered Dealer Search
//!
//! A query is trimmed and normalized into a *term*, then matched in two
//! tiers:
//!
//! 1. **City tier**: dealers whose city contains the term.
//! 2. **Name/district tier**: only consulted when the city tier is empty;
//!    dealers whose district or name contains the term.
//!
//! The tiers are never merged. A term that hits any city returns every dealer
//! of the matching cities and nothing else.

use crate::model::{Catalog, Dealer};
use crate::text::{contains_normalized, normalize};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Which rule produced a [`ResultSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// The term was empty: the whole catalog.
    All,
    /// At least one dealer's city contained the term.
    City,
    /// No city matched; dealers matched by district or name (possibly none).
    NameOrDistrict,
}

/// Filter output: dealers borrowed from the catalog, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet<'a> {
    term: String,
    tier: MatchTier,
    dealers: Vec<&'a Dealer>,
}

impl<'a> ResultSet<'a> {
    /// The trimmed, normalized query this result was computed for.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn tier(&self) -> MatchTier {
        self.tier
    }

    pub fn dealers(&self) -> &[&'a Dealer] {
        &self.dealers
    }

    pub fn into_dealers(self) -> Vec<&'a Dealer> {
        self.dealers
    }
}

impl<'a> Deref for ResultSet<'a> {
    type Target = [&'a Dealer];

    fn deref(&self) -> &Self::Target {
        &self.dealers
    }
}

impl<'a> IntoIterator for ResultSet<'a> {
    type Item = &'a Dealer;
    type IntoIter = std::vec::IntoIter<&'a Dealer>;

    fn into_iter(self) -> Self::IntoIter {
        self.dealers.into_iter()
    }
}

/// Turns raw input into a search term: trim, then [`normalize`].
pub fn search_term(raw_query: &str) -> String {
    normalize(raw_query.trim())
}

/// Dealers whose normalized city contains `term` (already normalized).
pub fn city_matches<'a>(dealers: &'a [Dealer], term: &str) -> Vec<&'a Dealer> {
    dealers
        .iter()
        .filter(|d| contains_normalized(d.city(), term))
        .collect()
}

/// Dealers whose normalized district or name contains `term` (already normalized).
///
/// A dealer without a district is matched on its name only.
pub fn name_or_district_matches<'a>(dealers: &'a [Dealer], term: &str) -> Vec<&'a Dealer> {
    dealers
        .iter()
        .filter(|d| {
            contains_normalized(d.district_or_empty(), term) || contains_normalized(d.name(), term)
        })
        .collect()
}

/// Filter the catalog for a raw query.
///
/// Runs the full two-tier rule over every dealer; nothing is cached between
/// calls.
///
/// # Examples
///
/// ```rust
/// use dealermap_core::{filter, Catalog, Dealer, MatchTier};
///
/// let dealer = |city: &str, name: &str| Dealer {
///     city: city.into(),
///     district: None,
///     name: name.into(),
///     latitude: 41.0,
///     longitude: 29.0,
/// };
/// let catalog = Catalog::new(
///     vec![],
///     vec![],
///     vec![dealer("ISTANBUL", "A"), dealer("ANKARA", "ISTANBUL EK")],
/// );
///
/// let result = filter(&catalog, "istanbul");
/// assert_eq!(result.tier(), MatchTier::City);
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].name(), "A");
/// ```
pub fn filter<'a>(catalog: &'a Catalog, raw_query: &str) -> ResultSet<'a> {
    let term = search_term(raw_query);

    if term.is_empty() {
        return ResultSet {
            term,
            tier: MatchTier::All,
            dealers: catalog.dealers.iter().collect(),
        };
    }

    let by_city = city_matches(&catalog.dealers, &term);
    let (tier, dealers) = if by_city.is_empty() {
        (
            MatchTier::NameOrDistrict,
            name_or_district_matches(&catalog.dealers, &term),
        )
    } else {
        (MatchTier::City, by_city)
    };

    tracing::trace!(term = %term, ?tier, hits = dealers.len(), "filtered dealers");
    ResultSet {
        term,
        tier,
        dealers,
    }
}
