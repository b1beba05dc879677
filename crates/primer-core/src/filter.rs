// ── Property filter pipeline ──
//
// A single stable pass over the dataset. Every active predicate must hold
// (AND); an inactive predicate always passes.

use serde::{Deserialize, Serialize};

use crate::format;
use crate::model::Property;

/// `price_max` at or above this value means "any price".
pub const NO_PRICE_CAP: u64 = 500_000;

/// Caps offered by the price picker, cheapest first.
pub const PRICE_PRESETS: [u64; 4] = [50_000, 100_000, 150_000, 200_000];

/// Bedroom predicate. `ThreePlus` admits three or more; the others are
/// exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bedrooms {
    #[default]
    Any,
    One,
    Two,
    ThreePlus,
}

impl Bedrooms {
    pub const ALL: [Bedrooms; 4] = [Self::Any, Self::One, Self::Two, Self::ThreePlus];

    /// Chip cycling order: any → 1 → 2 → 3+ → any.
    pub fn next(self) -> Self {
        match self {
            Self::Any => Self::One,
            Self::One => Self::Two,
            Self::Two => Self::ThreePlus,
            Self::ThreePlus => Self::Any,
        }
    }

    pub fn admits(self, count: u64) -> bool {
        match self {
            Self::Any => true,
            Self::One => count == 1,
            Self::Two => count == 2,
            Self::ThreePlus => count >= 3,
        }
    }

    /// Button text in the filter panel.
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::One => "1",
            Self::Two => "2",
            Self::ThreePlus => "3+",
        }
    }

    /// Chip text on the browse page.
    pub fn chip_label(self) -> &'static str {
        match self {
            Self::Any => "Any beds",
            Self::One => "1 bed",
            Self::Two => "2 beds",
            Self::ThreePlus => "3+ beds",
        }
    }
}

/// Everything the browse list is filtered by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub price_max: u64,
    pub bedrooms: Bedrooms,
    /// Exact, case-sensitive school match.
    pub university: Option<String>,
    pub query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            price_max: NO_PRICE_CAP,
            bedrooms: Bedrooms::Any,
            university: None,
            query: String::new(),
        }
    }
}

impl FilterState {
    pub fn has_price_cap(&self) -> bool {
        self.price_max < NO_PRICE_CAP
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Selecting the active school clears it.
    pub fn toggle_university(&mut self, name: &str) {
        if self.university.as_deref() == Some(name) {
            self.university = None;
        } else {
            self.university = Some(name.to_owned());
        }
    }

    pub fn price_label(&self) -> String {
        price_label(self.price_max)
    }
}

/// `Any price`, `Under ₦150k`, or `Under ₦<amount>` for non-preset caps.
pub fn price_label(price_max: u64) -> String {
    if price_max >= NO_PRICE_CAP {
        return "Any price".to_owned();
    }
    if PRICE_PRESETS.contains(&price_max) {
        return format!("Under ₦{}k", price_max / 1_000);
    }
    format!("Under ₦{}", format::naira(price_max))
}

/// Explicit `bedrooms`, else the first number in the `bed` feature label,
/// else 1.
pub fn bedroom_count(property: &Property) -> u64 {
    if let Some(n) = property.bedrooms {
        return n;
    }
    property
        .bed_feature()
        .and_then(|f| leading_number(&f.label))
        .unwrap_or(1)
}

/// First run of ASCII digits in `label`, saturating at `u64::MAX`.
fn leading_number(label: &str) -> Option<u64> {
    let mut digits = label
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .map_while(|c| c.to_digit(10))
        .peekable();
    digits.peek()?;
    Some(digits.fold(0u64, |n, d| {
        n.saturating_mul(10).saturating_add(u64::from(d))
    }))
}

/// Whether a single listing passes every active predicate. `query_lower`
/// must already be lowercased.
fn admits(state: &FilterState, query_lower: &str, property: &Property) -> bool {
    if state.has_price_cap() && property.price > state.price_max {
        return false;
    }
    if !state.bedrooms.admits(bedroom_count(property)) {
        return false;
    }
    if let Some(university) = state.university.as_deref() {
        if property.school.as_deref() != Some(university) {
            return false;
        }
    }
    query_lower.is_empty() || property.matches_text(query_lower)
}

/// Apply `state` to `properties`, preserving input order.
pub fn filter<'a>(properties: &'a [Property], state: &FilterState) -> Vec<&'a Property> {
    let query_lower = state.query.to_lowercase();
    properties
        .iter()
        .filter(|p| admits(state, &query_lower, p))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::Feature;
    use pretty_assertions::assert_eq;

    fn listing(id: &str, price: u64, school: &str, beds: &str) -> Property {
        Property {
            id: id.into(),
            title: format!("Listing {id}"),
            location: Some("Lagos".into()),
            school: Some(school.into()),
            price,
            features: vec![Feature {
                icon: "bed".into(),
                label: beds.into(),
            }],
            ..Property::default()
        }
    }

    fn ids(list: &[&Property]) -> Vec<String> {
        list.iter().map(|p| p.id.clone()).collect()
    }

    fn sample() -> Vec<Property> {
        vec![
            listing("a", 100_000, "X", "1 Bed"),
            listing("b", 400_000, "Y", "3 Beds"),
            listing("c", 150_000, "X", "2 Beds"),
            listing("d", 50_000, "Z", "Self-contained"),
            listing("e", 500_000, "Y", "4 Beds"),
            Property {
                bedrooms: Some(2),
                ..listing("f", 80_000, "x", "5 Beds")
            },
        ]
    }

    #[test]
    fn price_cap_scenario() {
        let props = vec![listing("a", 100_000, "X", "1 Bed"), listing("b", 400_000, "Y", "1 Bed")];
        let state = FilterState {
            price_max: 150_000,
            ..FilterState::default()
        };
        assert_eq!(ids(&filter(&props, &state)), ["a"]);
    }

    #[test]
    fn default_state_passes_everything() {
        let props = sample();
        assert_eq!(filter(&props, &FilterState::default()).len(), props.len());
    }

    #[test]
    fn sentinel_means_no_cap() {
        let props = sample();
        let state = FilterState {
            price_max: NO_PRICE_CAP,
            ..FilterState::default()
        };
        assert!(ids(&filter(&props, &state)).contains(&"e".to_owned()));
    }

    #[test]
    fn bedroom_count_resolution() {
        let props = sample();
        assert_eq!(bedroom_count(&props[0]), 1);
        assert_eq!(bedroom_count(&props[1]), 3);
        // no digits in the label
        assert_eq!(bedroom_count(&props[3]), 1);
        // explicit field wins over the feature label
        assert_eq!(bedroom_count(&props[5]), 2);
        assert_eq!(bedroom_count(&Property::default()), 1);
    }

    #[test]
    fn three_plus_is_inclusive() {
        let props = sample();
        let state = FilterState {
            bedrooms: Bedrooms::ThreePlus,
            ..FilterState::default()
        };
        assert_eq!(ids(&filter(&props, &state)), ["b", "e"]);
    }

    #[test]
    fn oversized_bed_label_saturates() {
        let huge = listing("h", 100_000, "UNILAG", "99999999999999999999 Beds");
        assert_eq!(bedroom_count(&huge), u64::MAX);

        let state = FilterState {
            bedrooms: Bedrooms::ThreePlus,
            ..FilterState::default()
        };
        let props = vec![huge];
        assert_eq!(ids(&filter(&props, &state)), ["h"]);
    }

    #[test]
    fn university_is_exact_and_case_sensitive() {
        let props = sample();
        let state = FilterState {
            university: Some("X".into()),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter(&props, &state)), ["a", "c"]);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let props = sample();
        let mut state = FilterState {
            query: "LISTING C".into(),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter(&props, &state)), ["c"]);

        state.query = "lag".into();
        assert_eq!(filter(&props, &state).len(), props.len());

        state.query = "y".into();
        assert_eq!(ids(&filter(&props, &state)), ["b", "e"]);
    }

    #[test]
    fn output_is_subset_satisfying_every_predicate() {
        let props = sample();
        for price_max in PRICE_PRESETS.into_iter().chain([NO_PRICE_CAP]) {
            for bedrooms in Bedrooms::ALL {
                for university in [None, Some("X"), Some("Y")] {
                    for query in ["", "listing", "b"] {
                        let state = FilterState {
                            price_max,
                            bedrooms,
                            university: university.map(Into::into),
                            query: query.into(),
                        };
                        let out = filter(&props, &state);
                        for p in &out {
                            assert!(props.iter().any(|q| q.id == p.id));
                            assert!(!state.has_price_cap() || p.price <= price_max);
                            assert!(bedrooms.admits(bedroom_count(p)));
                            assert!(university.is_none() || p.school.as_deref() == university);
                            assert!(p.matches_text(&query.to_lowercase()));
                        }

                        // idempotent
                        let once: Vec<Property> = out.iter().map(|p| (*p).clone()).collect();
                        assert_eq!(ids(&filter(&once, &state)), ids(&out));
                    }
                }
            }
        }
    }

    #[test]
    fn bedrooms_cycle() {
        let mut b = Bedrooms::Any;
        let mut seen = Vec::new();
        for _ in 0..4 {
            b = b.next();
            seen.push(b.short_label());
        }
        assert_eq!(seen, ["1", "2", "3+", "Any"]);
    }

    #[test]
    fn toggling_active_university_clears_it() {
        let mut state = FilterState::default();
        state.toggle_university("X");
        assert_eq!(state.university.as_deref(), Some("X"));
        state.toggle_university("Y");
        assert_eq!(state.university.as_deref(), Some("Y"));
        state.toggle_university("Y");
        assert_eq!(state.university, None);
    }

    #[test]
    fn price_labels() {
        insta::assert_snapshot!(price_label(NO_PRICE_CAP), @"Any price");
        insta::assert_snapshot!(price_label(150_000), @"Under ₦150k");
        insta::assert_snapshot!(price_label(75_000), @"Under ₦75,000");
    }
}
