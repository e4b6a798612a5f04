// crates/dealermap-core/src/raw.rs
use serde::Deserialize;

/// Raw city entry as it comes from the catalog JSON.
#[derive(Debug, Deserialize)]
pub struct CityRaw {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Raw district entry. `district` may be `null` or missing.
#[derive(Debug, Deserialize)]
pub struct DistrictRaw {
    pub city: String,
    #[serde(default)]
    pub district: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Raw dealer entry.
///
/// Catalog exports that always write `district` as a string deserialize
/// into the same shape.
#[derive(Debug, Deserialize)]
pub struct DealerRaw {
    pub city: String,
    #[serde(default)]
    pub district: Option<String>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Top-level catalog document: `{ "cities": [...], "districts": [...], "dealers": [...] }`.
#[derive(Debug, Deserialize)]
pub struct CatalogRaw {
    pub cities: Vec<CityRaw>,
    pub districts: Vec<DistrictRaw>,
    pub dealers: Vec<DealerRaw>,
}
