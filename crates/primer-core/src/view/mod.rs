// ── View descriptions ──
//
// Pure functions from application state to a serializable description of
// what should be on screen. Nothing here knows about terminals; the TUI
// renders a `Screen`, and `crate::reconcile` diffs two of them.
//
// Page builders may fail (e.g. a banner index that no longer fits). The
// failure is caught at dispatch and replaced with an inline error view so
// the rest of the state is untouched.

mod browse;
mod card;
mod detail;
mod favorites;
mod home;
mod profile;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CoreError;
use crate::filter::FilterState;
use crate::gallery::Gallery;
use crate::model::{Coordinates, Theme};
use crate::modal::ModalState;
use crate::nav::Page;
use crate::notification::Notification;
use crate::store::{DataStore, FavoritesStore, ProfileStore};

pub use browse::{BrowseView, Chip};
pub use card::PropertyCard;
pub use detail::{
    Choice, DetailView, EditFieldView, FilterPanelView, LandlordView, ModalView, PriceFilterView,
};
pub use favorites::FavoritesView;
pub use home::{BannerView, HomeView, UniversityCard};
pub use profile::{BookingRow, ContactRow, ProfileView};

/// Shown in place of a page whose builder failed.
pub const RENDER_FAULT_MESSAGE: &str = "Error loading page. Please refresh.";

/// Everything on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub chrome: Chrome,
    pub body: PageView,
    pub modal: Option<ModalView>,
    pub notifications: Vec<Notification>,
}

/// Frame around the page: tab bar, address, theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chrome {
    pub page: Page,
    pub fragment: String,
    pub theme: Theme,
    pub scroll_locked: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageView {
    Home(HomeView),
    Browse(BrowseView),
    Favorites(FavoritesView),
    Profile(ProfileView),
    Error { message: String },
}

impl PageView {
    /// Every listing card on the page.
    pub fn cards_mut(&mut self) -> Box<dyn Iterator<Item = &mut PropertyCard> + '_> {
        match self {
            Self::Home(v) => Box::new(v.featured.iter_mut()),
            Self::Browse(v) => Box::new(v.cards.iter_mut()),
            Self::Favorites(v) => Box::new(v.cards.iter_mut()),
            Self::Profile(_) | Self::Error { .. } => Box::new(std::iter::empty()),
        }
    }

    pub fn cards(&self) -> &[PropertyCard] {
        match self {
            Self::Home(v) => &v.featured,
            Self::Browse(v) => &v.cards,
            Self::Favorites(v) => &v.cards,
            Self::Profile(_) | Self::Error { .. } => &[],
        }
    }
}

/// Read-only view of the state the builders need.
pub struct ViewContext<'a> {
    pub data: &'a DataStore,
    pub favorites: &'a FavoritesStore,
    pub profile: &'a ProfileStore,
    pub filter: &'a FilterState,
    pub gallery: &'a Gallery,
    pub banner_index: usize,
    pub location: Coordinates,
}

// ── Dispatch ─────────────────────────────────────────────────────────

/// Build `page`, falling back to the inline error view on failure.
pub fn page(ctx: &ViewContext<'_>, page: Page) -> PageView {
    guarded(
        || match page {
            Page::Home => home::build(ctx).map(PageView::Home),
            Page::Browse => Ok(PageView::Browse(browse::build(ctx))),
            Page::Favorites => Ok(PageView::Favorites(favorites::build(ctx))),
            Page::Profile => Ok(PageView::Profile(profile::build(ctx))),
        },
        |message| PageView::Error { message },
    )
}

/// Build the sheet for `state`. A sheet that cannot be built is not shown.
pub fn modal(ctx: &ViewContext<'_>, state: &ModalState) -> Option<ModalView> {
    if !state.is_open() {
        return None;
    }
    match detail::build(ctx, state) {
        Ok(view) => view,
        Err(e) => {
            warn!(error = %e, "modal could not be built");
            None
        }
    }
}

/// Banner slot only, for partial re-renders.
pub fn banner(ctx: &ViewContext<'_>) -> Result<BannerView, CoreError> {
    home::banner(ctx)
}

/// Run a builder and turn an error into a fallback value.
pub fn guarded<T>(
    build: impl FnOnce() -> Result<T, CoreError>,
    fallback: impl FnOnce(String) -> T,
) -> T {
    build().unwrap_or_else(|e| {
        warn!(error = %e, "view build failed");
        fallback(RENDER_FAULT_MESSAGE.to_owned())
    })
}
