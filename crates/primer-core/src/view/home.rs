use serde::{Deserialize, Serialize};

use super::card::{self, PropertyCard};
use super::ViewContext;
use crate::defaults;
use crate::error::CoreError;
use crate::format;
use crate::model::Hero;

const TOP_UNIVERSITIES: usize = 4;
const FEATURED: usize = 6;
const CARD_TAGS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeView {
    pub hero: Hero,
    pub banner: BannerView,
    pub universities: Vec<UniversityCard>,
    pub featured: Vec<PropertyCard>,
    pub dark_mode: bool,
}

/// The banner slot. `total` is zero when the static placeholder is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerView {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub position: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityCard {
    pub name: String,
    pub count_label: String,
}

pub(super) fn build(ctx: &ViewContext<'_>) -> Result<HomeView, CoreError> {
    let content = ctx.data.content();
    Ok(HomeView {
        hero: content.hero.clone(),
        banner: banner(ctx)?,
        universities: universities(ctx),
        featured: ctx
            .data
            .featured(FEATURED)
            .iter()
            .map(|p| card::build(p, ctx.favorites, CARD_TAGS))
            .collect(),
        dark_mode: ctx.profile.profile().preferences.dark_mode,
    })
}

pub(super) fn banner(ctx: &ViewContext<'_>) -> Result<BannerView, CoreError> {
    let banners = &ctx.data.content().banners;
    if banners.is_empty() {
        let placeholder = defaults::banners().swap_remove(0);
        return Ok(BannerView {
            icon: placeholder.icon,
            title: placeholder.title,
            description: placeholder.description,
            position: 0,
            total: 0,
        });
    }
    let current = banners.get(ctx.banner_index).ok_or_else(|| CoreError::Render {
        message: format!(
            "banner index {} out of range for {} banners",
            ctx.banner_index,
            banners.len()
        ),
    })?;
    Ok(BannerView {
        icon: current.icon.clone(),
        title: current.title.clone(),
        description: current.description.clone(),
        position: ctx.banner_index + 1,
        total: banners.len(),
    })
}

fn universities(ctx: &ViewContext<'_>) -> Vec<UniversityCard> {
    let top = ctx.data.top_universities(TOP_UNIVERSITIES);
    if top.is_empty() {
        return defaults::UNIVERSITY_CARDS
            .iter()
            .map(|(name, count)| UniversityCard {
                name: (*name).to_owned(),
                count_label: format::count_noun(*count, "property", "properties"),
            })
            .collect();
    }
    top.into_iter()
        .map(|u| UniversityCard {
            count_label: format::count_noun(u.count, "property", "properties"),
            name: u.name,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::Property;
    use crate::testing::Fixture;
    use pretty_assertions::assert_eq;

    #[test]
    fn home_shows_hero_banner_and_featured() {
        let fx = Fixture::builtin();
        let view = build(&fx.ctx()).unwrap();

        assert_eq!(view.hero.title, defaults::HERO_TITLE);
        assert_eq!(view.banner.title, "Find Your Perfect Home");
        assert_eq!((view.banner.position, view.banner.total), (1, 2));
        assert_eq!(view.featured.len(), 3);
        assert_eq!(view.featured[0].tags, ["1 Bed", "1 Bath"]);
        assert_eq!(view.featured[0].price, "₦120,000");
    }

    #[test]
    fn universities_fall_back_without_schools() {
        let fx = Fixture::with_properties(vec![Property {
            id: "x".into(),
            ..Property::default()
        }]);
        let view = build(&fx.ctx()).unwrap();
        let names: Vec<_> = view.universities.iter().map(|u| u.count_label.as_str()).collect();
        assert_eq!(names, ["2 properties", "1 property"]);
    }

    #[test]
    fn out_of_range_banner_is_a_render_fault() {
        let fx = Fixture::builtin();
        let mut ctx = fx.ctx();
        ctx.banner_index = 9;
        assert!(matches!(build(&ctx), Err(CoreError::Render { .. })));
    }

    #[test]
    fn empty_banner_list_shows_placeholder() {
        let mut fx = Fixture::builtin();
        fx.clear_banners();
        let view = banner(&fx.ctx()).unwrap();
        assert_eq!(view.total, 0);
        assert_eq!(view.title, "Find Your Perfect Home");
    }
}
