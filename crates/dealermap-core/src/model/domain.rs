// crates/dealermap-core/src/model/domain.rs
use crate::viewport::LatLng;
use serde::{Deserialize, Serialize};

/// The dealer catalog.
///
/// Loaded once, validated, and read-only afterward. The three sequences keep
/// the order of the source document; search results rely on `dealers` order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub cities: Vec<City>,
    pub districts: Vec<District>,
    pub dealers: Vec<Dealer>,
}

/// A city reference entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A district reference entry. `district` is `None` for city-level rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub city: String,
    pub district: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// A dealer: the searchable unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dealer {
    pub city: String,
    pub district: Option<String>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Catalog {
    pub fn new(cities: Vec<City>, districts: Vec<District>, dealers: Vec<Dealer>) -> Self {
        Self {
            cities,
            districts,
            dealers,
        }
    }

    /// All cities, in catalog order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// All districts, in catalog order.
    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn dealer_count(&self) -> usize {
        self.dealers.len()
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Dealers whose `city` has no entry in `cities`.
    ///
    /// The comparison is exact. This is a diagnostic only; search never
    /// consults the city list.
    pub fn unknown_dealer_cities(&self) -> Vec<&Dealer> {
        self.dealers
            .iter()
            .filter(|d| !self.cities.iter().any(|c| c.name == d.city))
            .collect()
    }
}

impl City {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

impl District {
    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

impl Dealer {
    /// Dealer display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// District, if the catalog provides one.
    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    /// District as searched: absent districts compare as the empty string.
    pub fn district_or_empty(&self) -> &str {
        self.district.as_deref().unwrap_or("")
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}
