// crates/dealermap-core/src/config.rs

//! # Map Configuration
//!
//! Static constants handed to the rendering layer. Presentation variants of
//! the locator differ only here; the search and viewport logic is shared.

use crate::error::{CatalogError, Result};
use crate::viewport::{Bounds, LatLng, Padding};
use serde::{Deserialize, Serialize};

/// Marker icon description for the renderer (a CSS-styled `div` icon).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerIcon {
    pub class_name: String,
    pub html: String,
    /// Width and height in pixels.
    pub icon_size: [u32; 2],
    pub icon_anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            class_name: "custom-div-icon".to_string(),
            html: r#"<div class="pulsing-marker"></div>"#.to_string(),
            icon_size: [12, 12],
            icon_anchor: [6, 6],
            popup_anchor: [0, -6],
        }
    }
}

/// Rendering constants. Missing keys in a config file take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Lowest zoom level the user may reach interactively.
    pub min_zoom: u8,
    /// Highest zoom level the user may reach interactively.
    pub max_zoom: u8,
    /// Initial framing of the map before any search.
    pub outer_bounds: Bounds,
    /// Center used when a search returns no dealers.
    pub fallback_center: LatLng,
    pub fallback_zoom: u8,
    /// Pixel inset used with [`crate::ViewportCommand::FitBounds`].
    pub fit_padding: Padding,
    pub marker: MarkerIcon,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            min_zoom: 5,
            max_zoom: 15,
            outer_bounds: Bounds::new(LatLng::new(35.5, 25.5), LatLng::new(42.5, 45.0)),
            fallback_center: LatLng::new(39.0, 35.0),
            fallback_zoom: 6,
            fit_padding: Padding::uniform(50),
            marker: MarkerIcon::default(),
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a>"#
                .to_string(),
        }
    }
}

impl MapConfig {
    /// Check the constants are consistent with each other.
    pub fn validate(&self) -> Result<()> {
        if self.min_zoom > self.max_zoom {
            return Err(CatalogError::Config(format!(
                "min_zoom {} exceeds max_zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        if !(self.min_zoom..=self.max_zoom).contains(&self.fallback_zoom) {
            return Err(CatalogError::Config(format!(
                "fallback_zoom {} outside [{}, {}]",
                self.fallback_zoom, self.min_zoom, self.max_zoom
            )));
        }
        if !self.outer_bounds.is_ordered() {
            return Err(CatalogError::Config(
                "outer_bounds south_west lies north or east of north_east".to_string(),
            ));
        }
        Ok(())
    }

    /// Clamp a requested zoom level into `[min_zoom, max_zoom]`.
    pub fn clamp_zoom(&self, zoom: u8) -> u8 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    /// Parse and validate a JSON config document.
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: MapConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::NotFound(format!("Config not found at {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "loading map config");
        Self::from_json_str(&text)
    }
}
