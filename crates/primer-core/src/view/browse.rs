use serde::{Deserialize, Serialize};

use super::card::{self, PropertyCard};
use super::ViewContext;
use crate::filter;
use crate::format;

const UNIVERSITY_CHIPS: usize = 8;
const CARD_TAGS: usize = 3;

pub const MAP_NOTICE: &str = "Map View Coming Soon";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseView {
    pub count_label: String,
    pub query: String,
    pub bedrooms: Chip,
    pub price: Chip,
    pub all_universities: Chip,
    pub universities: Vec<Chip>,
    pub campus_count: usize,
    pub cards: Vec<PropertyCard>,
    /// No listing passes the filters; the page offers to clear them.
    pub empty: bool,
    pub map_notice: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chip {
    pub label: String,
    pub active: bool,
}

pub(super) fn build(ctx: &ViewContext<'_>) -> BrowseView {
    let state = ctx.filter;
    let results = filter::filter(ctx.data.properties(), state);
    let universities = ctx.data.unique_universities();

    BrowseView {
        count_label: format!(
            "{} found",
            format::count_noun(results.len(), "property", "properties")
        ),
        query: state.query.clone(),
        bedrooms: Chip {
            label: state.bedrooms.chip_label().to_owned(),
            active: state.bedrooms != filter::Bedrooms::Any,
        },
        price: Chip {
            label: state.price_label(),
            active: state.has_price_cap(),
        },
        all_universities: Chip {
            label: "All Universities".to_owned(),
            active: state.university.is_none(),
        },
        universities: universities
            .iter()
            .take(UNIVERSITY_CHIPS)
            .map(|name| Chip {
                label: (*name).to_owned(),
                active: state.university.as_deref() == Some(*name),
            })
            .collect(),
        campus_count: universities.len(),
        empty: results.is_empty(),
        cards: results
            .into_iter()
            .map(|p| card::build(p, ctx.favorites, CARD_TAGS))
            .collect(),
        map_notice: MAP_NOTICE.to_owned(),
    }
}
