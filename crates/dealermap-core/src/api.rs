// crates/dealermap-core/src/api.rs
//! Serializable views for renderers (JSON, WASM, CLI output).

use crate::locator::Frame;
use crate::model::Dealer;
use crate::search::MatchTier;
use crate::viewport::ViewportCommand;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Popup label prefix for the city line.
pub const CITY_LABEL: &str = "Şehir";
/// Popup label prefix for the district line.
pub const DISTRICT_LABEL: &str = "İlçe";

/// A dealer as a map marker: coordinates plus popup content.
pub struct DealerView<'a>(pub &'a Dealer);

impl<'a> DealerView<'a> {
    /// Popup body lines below the dealer name. The district line is present
    /// only when the dealer has a district.
    pub fn popup_lines(&self) -> Vec<String> {
        let d = self.0;
        let mut lines = vec![format!("{CITY_LABEL}: {}", d.city())];
        if let Some(district) = d.district() {
            lines.push(format!("{DISTRICT_LABEL}: {district}"));
        }
        lines
    }
}

impl<'a> Serialize for DealerView<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let d = self.0;
        let mut s = serializer.serialize_struct("Dealer", 7)?;
        s.serialize_field("name", d.name())?;
        s.serialize_field("city", d.city())?;
        s.serialize_field("district", &d.district())?;
        s.serialize_field("latitude", &d.latitude)?;
        s.serialize_field("longitude", &d.longitude)?;
        s.serialize_field("title", d.name())?;
        s.serialize_field("popup", &self.popup_lines())?;
        s.end()
    }
}

/// One frame of the page: dealers, viewport and counters.
#[derive(Serialize)]
pub struct FrameView<'a> {
    pub term: &'a str,
    pub tier: MatchTier,
    pub dealers: Vec<DealerView<'a>>,
    pub viewport: ViewportCommand,
    pub total_dealers: usize,
    pub city_count: usize,
    pub shown_dealers: usize,
}

impl<'a> FrameView<'a> {
    pub fn new(frame: &'a Frame<'a>) -> Self {
        Self {
            term: frame.results.term(),
            tier: frame.tier(),
            dealers: frame.results.iter().map(|d| DealerView(*d)).collect(),
            viewport: frame.viewport,
            total_dealers: frame.total_dealers,
            city_count: frame.city_count,
            shown_dealers: frame.shown_dealers(),
        }
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::config::MapConfig;
    use crate::locator::recompute;
    use crate::model::Catalog;

    fn dealer(district: Option<&str>) -> Dealer {
        Dealer {
            city: "KONYA".into(),
            district: district.map(Into::into),
            name: "Mevlana Nalbur".into(),
            latitude: 37.87,
            longitude: 32.48,
        }
    }

    #[test]
    fn popup_omits_missing_district() {
        let d = dealer(None);
        assert_eq!(DealerView(&d).popup_lines(), ["Şehir: KONYA"]);
        let d = dealer(Some("Selçuklu"));
        assert_eq!(
            DealerView(&d).popup_lines(),
            ["Şehir: KONYA", "İlçe: Selçuklu"]
        );
    }

    #[test]
    fn frame_view_json_shape() {
        let catalog = Catalog::new(vec![], vec![], vec![dealer(None)]);
        let frame = recompute(&catalog, " konya", &MapConfig::default());
        let v = serde_json::to_value(FrameView::new(&frame)).unwrap();
        assert_eq!(v["term"], "KONYA");
        assert_eq!(v["tier"], "city");
        assert_eq!(v["shown_dealers"], 1);
        assert_eq!(v["dealers"][0]["district"], serde_json::Value::Null);
        assert_eq!(v["viewport"]["kind"], "fit_bounds");
        assert_eq!(v["viewport"]["padding"]["x"], 50);
    }
}
