use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::format;
use crate::model::Property;
use crate::store::FavoritesStore;

/// A listing tile as shown on the home, browse and favorites pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyCard {
    pub id: String,
    pub title: String,
    pub price: String,
    pub location: String,
    pub school: String,
    /// Leading feature labels, or a bedroom count when the listing has none.
    pub tags: Vec<String>,
    pub is_new: bool,
    pub is_popular: bool,
    pub favorite: bool,
}

pub(crate) fn build(property: &Property, favorites: &FavoritesStore, tag_limit: usize) -> PropertyCard {
    let mut tags: Vec<String> = property
        .features
        .iter()
        .take(tag_limit)
        .map(|f| f.label.clone())
        .collect();
    if tags.is_empty() {
        tags.push(format!("{} bed", property.bedrooms.unwrap_or(1)));
    }

    PropertyCard {
        id: property.id.clone(),
        title: property.title.clone(),
        price: format!("₦{}", format::naira(property.price)),
        location: property
            .location
            .clone()
            .unwrap_or_else(|| defaults::LOCATION_TEXT.to_owned()),
        school: property
            .school
            .clone()
            .unwrap_or_else(|| defaults::SCHOOL_TEXT.to_owned()),
        tags,
        is_new: property.is_new,
        is_popular: property.is_popular,
        favorite: favorites.contains(&property.id),
    }
}
