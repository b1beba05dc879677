// Bottom-sheet descriptions: listing detail, price picker, filter panel
// and the profile field editor.

use serde::{Deserialize, Serialize};

use super::ViewContext;
use crate::defaults;
use crate::error::CoreError;
use crate::filter::{self, Bedrooms, NO_PRICE_CAP, PRICE_PRESETS};
use crate::format;
use crate::modal::ModalState;
use crate::model::ProfileField;

const DETAIL_FEATURES: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModalView {
    Detail(Box<DetailView>),
    PriceFilter(PriceFilterView),
    FilterPanel(FilterPanelView),
    EditField(EditFieldView),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub price: String,
    pub image: Option<String>,
    /// `2 / 5`; only present with more than one image.
    pub gallery_position: Option<String>,
    pub location: String,
    pub school: String,
    pub distance: String,
    pub features: Vec<String>,
    pub amenities: Vec<String>,
    pub description: String,
    pub landlord: LandlordView,
    pub favorite: bool,
    pub added: Option<String>,
    pub is_new: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandlordView {
    pub name: String,
    pub initial: String,
    pub phone: String,
    pub rating: Option<f64>,
}

/// One selectable option in a picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFilterView {
    pub options: Vec<Choice<u64>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPanelView {
    pub prices: Vec<Choice<u64>>,
    pub bedrooms: Vec<Choice<Bedrooms>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditFieldView {
    pub field: ProfileField,
    pub title: String,
    pub draft: String,
}

pub(super) fn build(ctx: &ViewContext<'_>, state: &ModalState) -> Result<Option<ModalView>, CoreError> {
    let view = match state {
        ModalState::Closed => return Ok(None),
        ModalState::Detail { property_id } => ModalView::Detail(Box::new(detail(ctx, property_id)?)),
        ModalState::PriceFilter => ModalView::PriceFilter(price_filter(ctx)),
        ModalState::FilterPanel => ModalView::FilterPanel(filter_panel(ctx)),
        ModalState::EditField { field, draft } => ModalView::EditField(EditFieldView {
            field: *field,
            title: field.editor_title().to_owned(),
            draft: draft.clone(),
        }),
    };
    Ok(Some(view))
}

fn detail(ctx: &ViewContext<'_>, id: &str) -> Result<DetailView, CoreError> {
    let property = ctx.data.property(id).ok_or_else(|| CoreError::Render {
        message: format!("listing {id} is not in the dataset"),
    })?;

    let mut features: Vec<String> = property
        .features
        .iter()
        .take(DETAIL_FEATURES)
        .map(|f| f.label.clone())
        .collect();
    if features.is_empty() {
        features = vec![
            format!("{} Bedroom", property.bedrooms.unwrap_or(1)),
            "1 Bathroom".to_owned(),
        ];
    }
    let amenities = if property.amenities.is_empty() {
        vec!["24/7 Electricity".to_owned(), "Security".to_owned()]
    } else {
        property.amenities.clone()
    };

    let landlord = property.landlord.clone().unwrap_or_default();
    let landlord_initial = landlord
        .name
        .as_deref()
        .and_then(|n| n.chars().next())
        .unwrap_or('L');

    Ok(DetailView {
        id: property.id.clone(),
        title: property.title.clone(),
        price: format!("₦{}", format::naira(property.price)),
        image: ctx.gallery.current().map(str::to_owned),
        gallery_position: ctx
            .gallery
            .position()
            .filter(|(_, total)| *total > 1)
            .map(|(pos, total)| format!("{pos} / {total}")),
        location: property
            .location
            .clone()
            .unwrap_or_else(|| defaults::LOCATION_TEXT.to_owned()),
        school: property
            .school
            .clone()
            .unwrap_or_else(|| defaults::SCHOOL_DETAIL_TEXT.to_owned()),
        distance: property
            .distance
            .clone()
            .unwrap_or_else(|| defaults::DISTANCE_TEXT.to_owned()),
        features,
        amenities,
        description: property
            .description
            .clone()
            .unwrap_or_else(|| defaults::DESCRIPTION.to_owned()),
        landlord: LandlordView {
            initial: landlord_initial.to_string(),
            name: landlord
                .name
                .unwrap_or_else(|| defaults::LANDLORD_NAME.to_owned()),
            phone: landlord
                .phone
                .unwrap_or_else(|| defaults::LANDLORD_PHONE.to_owned()),
            rating: landlord.rating,
        },
        favorite: ctx.favorites.contains(&property.id),
        added: property.added.map(format::added_on),
        is_new: property.is_new,
    })
}

fn price_filter(ctx: &ViewContext<'_>) -> PriceFilterView {
    let current = ctx.filter.price_max;
    let any = Choice {
        label: filter::price_label(NO_PRICE_CAP),
        value: NO_PRICE_CAP,
        selected: !ctx.filter.has_price_cap(),
    };
    let presets = PRICE_PRESETS.into_iter().map(|cap| Choice {
        label: format!("Under ₦{}", format::naira(cap)),
        value: cap,
        selected: current == cap,
    });
    PriceFilterView {
        options: std::iter::once(any).chain(presets).collect(),
    }
}

fn filter_panel(ctx: &ViewContext<'_>) -> FilterPanelView {
    FilterPanelView {
        prices: PRICE_PRESETS
            .into_iter()
            .map(|cap| Choice {
                label: filter::price_label(cap),
                value: cap,
                selected: ctx.filter.price_max == cap,
            })
            .collect(),
        bedrooms: Bedrooms::ALL
            .into_iter()
            .map(|b| Choice {
                label: b.short_label().to_owned(),
                value: b,
                selected: ctx.filter.bedrooms == b,
            })
            .collect(),
    }
}
