use serde::{Deserialize, Serialize};

use super::card::{self, PropertyCard};
use super::ViewContext;
use crate::format;

const CARD_TAGS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesView {
    pub count_label: String,
    /// Saved listings present in the dataset, in dataset order.
    pub cards: Vec<PropertyCard>,
}

impl FavoritesView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

pub(super) fn build(ctx: &ViewContext<'_>) -> FavoritesView {
    let cards: Vec<_> = ctx
        .data
        .properties()
        .iter()
        .filter(|p| ctx.favorites.contains(&p.id))
        .map(|p| card::build(p, ctx.favorites, CARD_TAGS))
        .collect();
    FavoritesView {
        count_label: format!(
            "{} saved",
            format::count_noun(cards.len(), "property", "properties")
        ),
        cards,
    }
}
