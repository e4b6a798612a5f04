// crates/dealermap-core/src/traits.rs
use crate::common::CatalogStats;
use crate::model::{City, Dealer, District};
use crate::search::ResultSet;
use crate::text::normalize;

/// Name-based matching helpers for types that expose a display name.
///
/// Comparisons go through [`normalize`], so they ignore case and the
/// Turkish letters it folds. Implementors provide a `&str` view of their
/// name via [`NameMatch::name_str`] and get:
/// - [`NameMatch::is_named`]: equality on normalized form
/// - [`NameMatch::name_contains`]: substring match on normalized form
///
/// # Examples
/// ```rust
/// use dealermap_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Çorum").is_named("corum"));
/// assert!(Place("Şanlıurfa").name_contains("urfa"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        normalize(self.name_str()) == normalize(q)
    }

    /// Returns `true` if the normalized name contains the normalized `q`.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        normalize(self.name_str()).contains(&normalize(q))
    }
}

/// Read-only query surface of a dealer catalog.
pub trait DealerSearch {
    fn stats(&self) -> CatalogStats;

    /// All dealers in catalog order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dealermap_core::{Catalog, DealerSearch};
    ///
    /// let catalog = Catalog::load().unwrap();
    /// for dealer in catalog.dealers().iter().take(5) {
    ///     println!("- {} ({})", dealer.name(), dealer.city());
    /// }
    /// ```
    fn dealers(&self) -> &[Dealer];

    /// Run the two-tier filter for a raw query. See [`crate::search::filter`].
    fn filter(&self, raw_query: &str) -> ResultSet<'_>;

    /// City tier only: dealers whose city contains the query.
    fn find_dealers_by_city(&self, query: &str) -> Vec<&Dealer>;

    /// Fallback tier only: dealers whose district or name contains the query.
    fn find_dealers_by_name_or_district(&self, query: &str) -> Vec<&Dealer>;

    /// First city entry with the given name, compared in normalized form.
    fn find_city(&self, name: &str) -> Option<&City>;

    /// District entries belonging to `city`, compared in normalized form.
    fn districts_for_city(&self, city: &str) -> Vec<&District>;
}

impl NameMatch for City {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl NameMatch for Dealer {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}
