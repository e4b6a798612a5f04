// crates/dealermap-core/src/loader/json.rs
#![cfg(feature = "json")]

use crate::error::Result;
use crate::model::{convert, Catalog};
use crate::raw::CatalogRaw;
use std::io::Read;

impl Catalog {
    /// Parse and validate a catalog JSON document.
    ///
    /// Missing sections or fields and non-numeric coordinates are rejected
    /// by the parser; range and emptiness checks follow in
    /// [`convert::from_raw`].
    ///
    /// ```rust
    /// use dealermap_core::Catalog;
    ///
    /// let catalog = Catalog::from_json_str(r#"{
    ///     "cities": [{ "name": "ANKARA", "latitude": 39.93, "longitude": 32.86 }],
    ///     "districts": [],
    ///     "dealers": [{
    ///         "city": "ANKARA", "district": null, "name": "Ulus Hırdavat",
    ///         "latitude": 39.94, "longitude": 32.85
    ///     }]
    /// }"#).unwrap();
    /// assert_eq!(catalog.dealer_count(), 1);
    ///
    /// assert!(Catalog::from_json_str(r#"{ "cities": [], "districts": [] }"#).is_err());
    /// ```
    pub fn from_json_str(s: &str) -> Result<Self> {
        let raw: CatalogRaw = serde_json::from_str(s)?;
        convert::from_raw(raw)
    }

    /// Same as [`Catalog::from_json_str`] for any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: CatalogRaw = serde_json::from_reader(reader)?;
        convert::from_raw(raw)
    }
}
