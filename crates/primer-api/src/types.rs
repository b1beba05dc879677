// Wire types for the listings, dynamic-content and location feeds.
//
// Every field is optional on the wire. Collections are decoded leniently:
// a field that is missing or not an array becomes empty, and malformed
// entries inside an array are skipped instead of failing the document.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

// ── Listings ────────────────────────────────────────────────────────

/// `{ properties: Property[], schools: string[] }`
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ListingsDocument {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub properties: Vec<PropertyRecord>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub schools: Vec<String>,
}

/// A single listing as published by the feed.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub price: Option<u64>,
    #[serde(default)]
    pub price_display: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub bedrooms: Option<u64>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub features: Vec<FeatureRecord>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub landlord: Option<LandlordRecord>,
    #[serde(default)]
    pub coordinates: Option<CoordinatesRecord>,
    #[serde(default)]
    pub distance: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub added_date: Option<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct FeatureRecord {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct LandlordRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Coordinates are published either as `[lat, lng]` or `{lat, lng}`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum CoordinatesRecord {
    Pair([f64; 2]),
    Object { lat: f64, lng: f64 },
}

impl CoordinatesRecord {
    pub fn lat_lng(self) -> (f64, f64) {
        match self {
            Self::Pair([lat, lng]) | Self::Object { lat, lng } => (lat, lng),
        }
    }
}

// ── Dynamic content ─────────────────────────────────────────────────

/// `{ banners: Banner[], hero: {title, subtitle} }`
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct DynamicDocument {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub banners: Vec<BannerRecord>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub hero: Option<HeroRecord>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct BannerRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct HeroRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
}

// ── Location ────────────────────────────────────────────────────────

/// IP geolocation answer. Accepts the common `latitude/longitude` and
/// `lat/lon` spellings.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct GeoPosition {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lon", alias = "lng")]
    pub longitude: f64,
}

// ── Lenient decoders ────────────────────────────────────────────────

fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!(error = %e, "skipping malformed feed entry");
                None
            }
        })
        .collect())
}

fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// Whole non-negative amounts; floats are rounded and numeric strings
/// (`"120000"`) are accepted. Anything else decodes as absent.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| format!("{:.0}", f.round()))
                .and_then(|s| s.parse().ok())
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn missing_collections_decode_empty() {
        let doc: ListingsDocument = serde_json::from_value(json!({})).unwrap();
        assert_eq!(doc, ListingsDocument::default());
    }

    #[test]
    fn non_array_collections_decode_empty() {
        let doc: ListingsDocument =
            serde_json::from_value(json!({ "properties": "nope", "schools": 3 })).unwrap();
        assert!(doc.properties.is_empty());
        assert!(doc.schools.is_empty());
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let doc: ListingsDocument = serde_json::from_value(json!({
            "properties": [
                { "id": "a", "price": 100000 },
                { "title": "no id" },
                { "id": 7, "price": "250000" }
            ]
        }))
        .unwrap();
        let ids: Vec<_> = doc.properties.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "7"]);
        assert_eq!(doc.properties[1].price, Some(250_000));
    }

    #[test]
    fn coordinates_accept_pair_and_object() {
        let pair: CoordinatesRecord = serde_json::from_value(json!([6.5, 3.3])).unwrap();
        let obj: CoordinatesRecord =
            serde_json::from_value(json!({ "lat": 6.5, "lng": 3.3 })).unwrap();
        assert_eq!(pair.lat_lng(), obj.lat_lng());
    }

    #[test]
    fn float_price_is_rounded() {
        let record: PropertyRecord =
            serde_json::from_value(json!({ "id": "x", "price": 1999.6 })).unwrap();
        assert_eq!(record.price, Some(2000));
    }

    #[test]
    fn hero_of_wrong_shape_is_absent() {
        let doc: DynamicDocument =
            serde_json::from_value(json!({ "banners": [], "hero": "big" })).unwrap();
        assert_eq!(doc.hero, None);
    }

    #[test]
    fn geo_position_accepts_short_names() {
        let pos: GeoPosition = serde_json::from_value(json!({ "lat": 1.5, "lon": 2.5 })).unwrap();
        assert_eq!(pos.latitude, 1.5);
        assert_eq!(pos.longitude, 2.5);
    }
}
