// crates/dealermap-core/src/model/convert.rs
use crate::error::{CatalogError, Result};
use crate::model::domain::{Catalog, City, Dealer, District};
use crate::raw::CatalogRaw;

/// **Standard Converter:** Raw -> Catalog.
///
/// Fails fast: the first malformed entry rejects the whole catalog. A dealer
/// that silently disappears from the map is worse than a start-up error.
pub fn from_raw(raw: CatalogRaw) -> Result<Catalog> {
    let catalog = Catalog {
        cities: raw
            .cities
            .into_iter()
            .map(|c| City {
                name: c.name,
                latitude: c.latitude,
                longitude: c.longitude,
            })
            .collect(),
        districts: raw
            .districts
            .into_iter()
            .map(|d| District {
                city: d.city,
                district: d.district,
                latitude: d.latitude,
                longitude: d.longitude,
            })
            .collect(),
        dealers: raw
            .dealers
            .into_iter()
            .map(|d| Dealer {
                city: d.city,
                district: d.district,
                name: d.name,
                latitude: d.latitude,
                longitude: d.longitude,
            })
            .collect(),
    };

    catalog.validate()?;
    tracing::debug!(
        cities = catalog.cities.len(),
        districts = catalog.districts.len(),
        dealers = catalog.dealers.len(),
        "catalog validated"
    );
    Ok(catalog)
}

impl Catalog {
    /// Check every entry: required text present, coordinates finite and in
    /// range. Returns the first violation.
    ///
    /// Every load path runs this, snapshots included.
    pub fn validate(&self) -> Result<()> {
        for (i, c) in self.cities.iter().enumerate() {
            require_text("cities", i, "name", &c.name)?;
            check_coordinates("cities", i, c.latitude, c.longitude)?;
        }
        for (i, d) in self.districts.iter().enumerate() {
            require_text("districts", i, "city", &d.city)?;
            check_coordinates("districts", i, d.latitude, d.longitude)?;
        }
        for (i, d) in self.dealers.iter().enumerate() {
            require_text("dealers", i, "name", &d.name)?;
            require_text("dealers", i, "city", &d.city)?;
            check_coordinates("dealers", i, d.latitude, d.longitude)?;
        }
        Ok(())
    }
}

fn require_text(section: &'static str, index: usize, field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::invalid(
            section,
            index,
            format!("`{field}` is empty"),
        ));
    }
    Ok(())
}

fn check_coordinates(section: &'static str, index: usize, lat: f64, lng: f64) -> Result<()> {
    if !lat.is_finite() || !lng.is_finite() {
        return Err(CatalogError::invalid(
            section,
            index,
            format!("non-finite coordinate ({lat}, {lng})"),
        ));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(CatalogError::invalid(
            section,
            index,
            format!("latitude {lat} out of range"),
        ));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(CatalogError::invalid(
            section,
            index,
            format!("longitude {lng} out of range"),
        ));
    }
    Ok(())
}
