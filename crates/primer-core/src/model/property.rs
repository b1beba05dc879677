use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A listing as the app sees it. Only `id` is guaranteed by the feed;
/// everything else carries a neutral default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub location: Option<String>,
    pub school: Option<String>,
    pub kind: Option<String>,
    /// Monthly rent in whole naira.
    pub price: u64,
    pub price_display: Option<String>,
    /// Explicit bedroom count. Zero on the wire is treated as absent.
    pub bedrooms: Option<u64>,
    pub images: Vec<String>,
    pub features: Vec<Feature>,
    pub amenities: Vec<String>,
    pub landlord: Option<Landlord>,
    pub coordinates: Option<Coordinates>,
    pub distance: Option<String>,
    pub description: Option<String>,
    pub added: Option<NaiveDate>,
    pub is_new: bool,
    pub is_popular: bool,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Landlord {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub rating: Option<f64>,
}

/// A WGS84 point, used both for listings and for the user's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Property {
    /// The first feature tagged with the `bed` icon, if any.
    pub fn bed_feature(&self) -> Option<&Feature> {
        self.features.iter().find(|f| f.icon == "bed")
    }

    /// Case-insensitive haystack match over title, location and school.
    pub(crate) fn matches_text(&self, needle_lower: &str) -> bool {
        std::iter::once(self.title.as_str())
            .chain(self.location.as_deref())
            .chain(self.school.as_deref())
            .any(|field| field.to_lowercase().contains(needle_lower))
    }
}
