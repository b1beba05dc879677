// ── Feed-to-domain conversions ──
//
// Bridges raw `primer_api` wire records into `crate::model` types: absent
// fields become neutral defaults, dates are parsed, and duplicate listing
// ids are dropped (first occurrence wins).

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate};
use tracing::warn;

use primer_api::{
    BannerRecord, DynamicDocument, FeatureRecord, LandlordRecord, ListingsDocument, PropertyRecord,
};

use crate::defaults;
use crate::model::{Banner, Coordinates, DynamicContent, Feature, Hero, Landlord, Property};

// ── Helpers ────────────────────────────────────────────────────────

/// Accepts `2025-05-15` as well as a full RFC 3339 timestamp.
fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

// ── Listings ─────────────────────────────────────────────────────────

impl From<FeatureRecord> for Feature {
    fn from(r: FeatureRecord) -> Self {
        Self {
            icon: r.icon,
            label: r.label,
        }
    }
}

impl From<LandlordRecord> for Landlord {
    fn from(r: LandlordRecord) -> Self {
        Self {
            name: non_empty(r.name),
            phone: non_empty(r.phone),
            rating: r.rating,
        }
    }
}

impl From<PropertyRecord> for Property {
    fn from(r: PropertyRecord) -> Self {
        let added = parse_date(r.added_date.as_deref());
        Self {
            id: r.id,
            title: r.title.unwrap_or_default(),
            location: non_empty(r.location),
            school: non_empty(r.school),
            kind: r.kind,
            price: r.price.unwrap_or(0),
            price_display: r.price_display,
            bedrooms: r.bedrooms.filter(|n| *n > 0),
            images: r.images,
            features: r.features.into_iter().map(Feature::from).collect(),
            amenities: r.amenities,
            landlord: r.landlord.map(Landlord::from),
            coordinates: r.coordinates.map(|c| {
                let (lat, lng) = c.lat_lng();
                Coordinates { lat, lng }
            }),
            distance: non_empty(r.distance),
            description: non_empty(r.description),
            added,
            is_new: r.is_new,
            is_popular: r.is_popular,
            region: r.region,
        }
    }
}

/// Normalize a listings document. Entries with an empty id or an id seen
/// earlier in the same document are dropped with a warning.
pub fn listings(doc: ListingsDocument) -> (Vec<Property>, Vec<String>) {
    let mut seen = HashSet::with_capacity(doc.properties.len());
    let properties = doc
        .properties
        .into_iter()
        .filter_map(|record| {
            if record.id.is_empty() {
                warn!("dropping listing without an id");
                return None;
            }
            if !seen.insert(record.id.clone()) {
                warn!(id = %record.id, "dropping duplicate listing id");
                return None;
            }
            Some(Property::from(record))
        })
        .collect();
    (properties, doc.schools)
}

// ── Dynamic content ─────────────────────────────────────────────────

impl From<BannerRecord> for Banner {
    fn from(r: BannerRecord) -> Self {
        Self {
            id: r.id,
            icon: r
                .icon
                .filter(|i| !i.is_empty())
                .unwrap_or_else(|| defaults::BANNER_ICON.to_owned()),
            title: r.title,
            description: r.description,
        }
    }
}

/// An absent document yields the built-in banners and hero. A present
/// document keeps its (possibly empty) banner list; hero fields that are
/// missing fall back one by one.
pub fn dynamic_content(doc: Option<DynamicDocument>) -> DynamicContent {
    let Some(doc) = doc else {
        return defaults::dynamic_content();
    };
    let hero = doc.hero.unwrap_or_default();
    DynamicContent {
        banners: doc.banners.into_iter().map(Banner::from).collect(),
        hero: Hero {
            title: non_empty(hero.title).unwrap_or_else(|| defaults::HERO_TITLE.to_owned()),
            subtitle: non_empty(hero.subtitle)
                .unwrap_or_else(|| defaults::HERO_SUBTITLE.to_owned()),
        },
    }
}
