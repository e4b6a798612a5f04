// crates/dealermap-core/src/viewport.rs

//! # Viewport Policy
//!
//! After every search the map is reframed: a non-empty result is fitted into
//! view, an empty one snaps back to the country overview. The rendering
//! layer applies the command unconditionally, overriding any manual pan.

use crate::config::MapConfig;
use crate::model::Dealer;
use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Axis-aligned latitude/longitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    pub const fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Zero-area bounds at `point`.
    pub const fn point(point: LatLng) -> Self {
        Self::new(point, point)
    }

    /// Smallest bounds containing every point, or `None` for no points.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::point(first), |b, p| b.extend(p)))
    }

    /// Grow to include `p`.
    pub fn extend(self, p: LatLng) -> Self {
        Self {
            south_west: LatLng::new(self.south_west.lat.min(p.lat), self.south_west.lng.min(p.lng)),
            north_east: LatLng::new(self.north_east.lat.max(p.lat), self.north_east.lng.max(p.lng)),
        }
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    pub fn contains(&self, p: LatLng) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&p.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&p.lng)
    }

    pub fn is_point(&self) -> bool {
        self.south_west == self.north_east
    }

    /// `true` unless a south-west corner lies north or east of the north-east one.
    pub fn is_ordered(&self) -> bool {
        self.south_west.lat <= self.north_east.lat && self.south_west.lng <= self.north_east.lng
    }
}

/// Pixel inset applied by the renderer when fitting bounds (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    pub x: u32,
    pub y: u32,
}

impl Padding {
    pub const fn uniform(px: u32) -> Self {
        Self { x: px, y: px }
    }
}

/// Instruction for the map renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewportCommand {
    /// Fit `bounds` into view, inset by `padding` pixels.
    FitBounds { bounds: Bounds, padding: Padding },
    /// Center on `center` at a fixed zoom level.
    SetView { center: LatLng, zoom: u8 },
}

/// Compute the viewport command for a search result.
///
/// Depends only on `results` and the static `config`; previous results have
/// no influence.
///
/// ```rust
/// use dealermap_core::{compute_viewport, Dealer, MapConfig, ViewportCommand};
///
/// let config = MapConfig::default();
/// let empty: Vec<&Dealer> = Vec::new();
/// assert_eq!(
///     compute_viewport(&empty, &config),
///     ViewportCommand::SetView { center: config.fallback_center, zoom: config.fallback_zoom },
/// );
/// ```
pub fn compute_viewport(results: &[&Dealer], config: &MapConfig) -> ViewportCommand {
    match Bounds::enclosing(results.iter().map(|d| d.position())) {
        Some(bounds) => ViewportCommand::FitBounds {
            bounds,
            padding: config.fit_padding,
        },
        None => ViewportCommand::SetView {
            center: config.fallback_center,
            zoom: config.fallback_zoom,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dealer(lat: f64, lng: f64) -> Dealer {
        Dealer {
            city: "X".into(),
            district: None,
            name: "x".into(),
            latitude: lat,
            longitude: lng,
        }
    }

    #[test]
    fn empty_results_use_fallback_view() {
        let config = MapConfig::default();
        assert_eq!(
            compute_viewport(&[], &config),
            ViewportCommand::SetView {
                center: LatLng::new(39.0, 35.0),
                zoom: 6,
            }
        );
    }

    #[test]
    fn single_result_is_zero_area_box() {
        let config = MapConfig::default();
        let d = dealer(41.02, 28.97);
        match compute_viewport(&[&d], &config) {
            ViewportCommand::FitBounds { bounds, padding } => {
                assert!(bounds.is_point());
                assert_eq!(bounds.center(), LatLng::new(41.02, 28.97));
                assert_eq!(padding, Padding::uniform(50));
            }
            other => panic!("expected FitBounds, got {other:?}"),
        }
    }

    #[test]
    fn bounds_enclose_every_result() {
        let config = MapConfig::default();
        let a = dealer(41.0, 29.0);
        let b = dealer(38.4, 27.1);
        let c = dealer(39.9, 32.8);
        let cmd = compute_viewport(&[&a, &b, &c], &config);
        let ViewportCommand::FitBounds { bounds, .. } = cmd else {
            panic!("expected FitBounds");
        };
        assert_eq!(bounds.south_west, LatLng::new(38.4, 27.1));
        assert_eq!(bounds.north_east, LatLng::new(41.0, 32.8));
        for d in [&a, &b, &c] {
            assert!(bounds.contains(d.position()));
        }
    }

    #[test]
    fn fallback_ignores_previous_results() {
        let config = MapConfig::default();
        let a = dealer(41.0, 29.0);
        let _ = compute_viewport(&[&a], &config);
        assert!(matches!(
            compute_viewport(&[], &config),
            ViewportCommand::SetView { zoom: 6, .. }
        ));
    }

    #[cfg(feature = "json")]
    #[test]
    fn command_serializes_with_kind_tag() {
        let cmd = ViewportCommand::SetView {
            center: LatLng::new(39.0, 35.0),
            zoom: 6,
        };
        let v = serde_json::to_value(cmd).unwrap();
        assert_eq!(v["kind"], "set_view");
        assert_eq!(v["zoom"], 6);
    }
}
