// crates/dealermap-core/src/model/search.rs
use super::domain::{Catalog, City, Dealer, District};
use crate::common::CatalogStats;
use crate::search::{self, search_term, ResultSet};
use crate::text::normalize;
use crate::traits::{DealerSearch, NameMatch};

impl DealerSearch for Catalog {
    fn stats(&self) -> CatalogStats {
        CatalogStats {
            cities: self.cities.len(),
            districts: self.districts.len(),
            dealers: self.dealers.len(),
        }
    }

    fn dealers(&self) -> &[Dealer] {
        &self.dealers
    }

    fn filter(&self, raw_query: &str) -> ResultSet<'_> {
        search::filter(self, raw_query)
    }

    fn find_dealers_by_city(&self, query: &str) -> Vec<&Dealer> {
        let term = search_term(query);
        if term.is_empty() {
            return Vec::new();
        }
        search::city_matches(&self.dealers, &term)
    }

    fn find_dealers_by_name_or_district(&self, query: &str) -> Vec<&Dealer> {
        let term = search_term(query);
        if term.is_empty() {
            return Vec::new();
        }
        search::name_or_district_matches(&self.dealers, &term)
    }

    fn find_city(&self, name: &str) -> Option<&City> {
        let name = name.trim();
        self.cities.iter().find(|c| c.is_named(name))
    }

    fn districts_for_city(&self, city: &str) -> Vec<&District> {
        let q = normalize(city.trim());
        self.districts
            .iter()
            .filter(|d| normalize(d.city()) == q)
            .collect()
    }
}
