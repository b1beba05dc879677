// ── Application controller ──
//
// Owns the whole client state and is the only thing that mutates it. Each
// `Command` runs to completion: mutate, rebuild the screen description,
// diff it against the previous one and hand the patches to the host.

use tracing::debug;

use crate::banner::{BannerScheduler, TimerDriver};
use crate::defaults;
use crate::filter::{Bedrooms, FilterState};
use crate::gallery::{Gallery, GalleryStep};
use crate::loader::BootOutcome;
use crate::modal::{ModalController, ModalState};
use crate::model::{Coordinates, ProfileField, Theme};
use crate::nav::{Navigator, Page};
use crate::notification::NotificationCenter;
use crate::reconcile::{self, Patch};
use crate::store::{DataStore, FavoritesStore, ProfileStore, SharedKv};
use crate::view::{self, Chrome, PageView, Screen, ViewContext};

/// Shown once when boot fell back to the built-in dataset.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load listings. Showing offline data.";
pub const MAP_COMING_SOON: &str = "Map view is coming soon!";

/// Everything a user (or a timer) can ask the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // ── Navigation ───────────────────────────────────────────────────
    Navigate(Page),
    /// Navigate by page name or `#fragment`; unknown names land on home.
    NavigateTo(String),
    Back,
    Forward,

    // ── Filters ──────────────────────────────────────────────────────
    SetQuery(String),
    ClearQuery,
    CycleBedrooms,
    /// Pick a bedroom filter from the filter panel (closes it).
    SetBedrooms(Bedrooms),
    /// Pick a price cap from a picker (closes it).
    SetMaxPrice(u64),
    ToggleUniversity(String),
    ClearUniversity,
    ClearFilters,
    /// Filter browse by one school and go there.
    SearchByUniversity(String),

    // ── Sheets ───────────────────────────────────────────────────────
    OpenDetail(String),
    OpenPriceFilter,
    OpenFilterPanel,
    EditField(ProfileField),
    SetDraft(String),
    SaveDraft,
    CloseModal,
    Gallery(GalleryStep),

    // ── Saved state ──────────────────────────────────────────────────
    ToggleFavorite(String),
    ToggleTheme,
    SetNotifications(bool),
    Logout,

    // ── Contact / map ────────────────────────────────────────────────
    CallLandlord(String),
    CallCompany,
    ShowMap,
    ViewOnMap(String),

    // ── Timers ───────────────────────────────────────────────────────
    BannerTick(u64),
    ExpireNotifications,
    DismissNotification(u64),
}

pub struct Controller<D> {
    data: DataStore,
    favorites: FavoritesStore,
    profile: ProfileStore,
    nav: Navigator,
    filter: FilterState,
    modal: ModalController,
    gallery: Gallery,
    banner: BannerScheduler<D>,
    notifications: NotificationCenter,
    location: Coordinates,
    screen: Screen,
}

impl<D: TimerDriver> Controller<D> {
    /// Assemble the session from the boot result and durable storage, and
    /// build the first screen for `fragment`.
    pub fn new(boot: BootOutcome, storage: SharedKv, driver: D, fragment: &str) -> Self {
        let banner = BannerScheduler::new(boot.data.content().banners.len(), driver);
        let mut notifications = NotificationCenter::default();
        if boot.load_error.is_some() {
            notifications.error(LOAD_FAILED_MESSAGE);
        }

        let mut ctrl = Self {
            data: boot.data,
            favorites: FavoritesStore::load(storage.clone()),
            profile: ProfileStore::load(storage),
            nav: Navigator::new(fragment),
            filter: FilterState::default(),
            modal: ModalController::default(),
            gallery: Gallery::default(),
            banner,
            notifications,
            location: boot.location,
            screen: blank_screen(),
        };
        ctrl.on_page_shown();
        ctrl.screen = ctrl.build_screen();
        ctrl
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The current screen description.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn page(&self) -> Page {
        self.nav.page()
    }

    pub fn data(&self) -> &DataStore {
        &self.data
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn profile(&self) -> &ProfileStore {
        &self.profile
    }

    pub fn modal(&self) -> &ModalState {
        self.modal.state()
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn banner(&self) -> &BannerScheduler<D> {
        &self.banner
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Run one command and return the patches that bring the previous
    /// screen up to date. An empty list means nothing visible changed.
    pub fn dispatch(&mut self, command: Command) -> Vec<Patch> {
        debug!(?command, "dispatch");
        if !self.apply(command) {
            return Vec::new();
        }
        let next = self.build_screen();
        let patches = reconcile::diff(&self.screen, &next);
        self.screen = next;
        patches
    }

    /// Mutate state for `command`. Returns `false` when the command is known
    /// to have changed nothing.
    #[allow(clippy::too_many_lines)]
    fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Navigate(page) => self.navigate(page),
            Command::NavigateTo(name) => self.navigate(Page::from_fragment(&name)),
            Command::Back => match self.nav.back() {
                Some(_) => self.on_page_shown(),
                None => return false,
            },
            Command::Forward => match self.nav.forward() {
                Some(_) => self.on_page_shown(),
                None => return false,
            },

            Command::SetQuery(query) => self.filter.query = query,
            Command::ClearQuery => self.filter.query.clear(),
            Command::CycleBedrooms => self.filter.bedrooms = self.filter.bedrooms.next(),
            Command::SetBedrooms(bedrooms) => {
                self.filter.bedrooms = bedrooms;
                self.close_modal();
            }
            Command::SetMaxPrice(price) => {
                self.filter.price_max = price;
                self.close_modal();
            }
            Command::ToggleUniversity(name) => self.filter.toggle_university(&name),
            Command::ClearUniversity => self.filter.university = None,
            Command::ClearFilters => {
                self.filter = FilterState::default();
                self.close_modal();
            }
            Command::SearchByUniversity(name) => {
                self.filter.university = Some(name);
                self.navigate(Page::Browse);
            }

            Command::OpenDetail(id) => {
                let Some(property) = self.data.property(&id) else {
                    debug!(id, "ignoring detail request for unknown listing");
                    return false;
                };
                self.gallery.set_images(property.images.clone());
                self.modal.open(ModalState::Detail { property_id: id });
            }
            Command::OpenPriceFilter => self.modal.open(ModalState::PriceFilter),
            Command::OpenFilterPanel => self.modal.open(ModalState::FilterPanel),
            Command::EditField(field) => {
                let draft = self.profile.profile().field(field).to_owned();
                self.modal.open(ModalState::EditField { field, draft });
            }
            Command::SetDraft(value) => self.modal.set_draft(&value),
            Command::SaveDraft => return self.save_draft(),
            Command::CloseModal => self.close_modal(),
            Command::Gallery(step) => {
                if self.modal.state().detail_id().is_none() {
                    return false;
                }
                self.gallery.step(step);
            }

            Command::ToggleFavorite(id) => {
                if self.favorites.toggle(&id) {
                    self.notifications.success("Added to favorites");
                } else {
                    self.notifications.info("Removed from favorites");
                }
            }
            Command::ToggleTheme => {
                self.profile.toggle_theme();
            }
            Command::SetNotifications(enabled) => {
                self.profile.set_notifications(enabled);
                let state = if enabled { "enabled" } else { "disabled" };
                self.notifications.info(format!("Notifications {state}"));
            }
            Command::Logout => {
                self.profile.logout();
                self.navigate(Page::Home);
                self.notifications.info("Logged out successfully");
            }

            Command::CallLandlord(id) => {
                let landlord = self.data.property(&id).and_then(|p| p.landlord.as_ref());
                let name = landlord
                    .and_then(|l| l.name.as_deref())
                    .unwrap_or(defaults::LANDLORD_CALL_NAME);
                let phone = landlord
                    .and_then(|l| l.phone.as_deref())
                    .unwrap_or(defaults::LANDLORD_PHONE);
                let message = format!("Calling {name} at {phone}...");
                self.notifications.info(message);
            }
            Command::CallCompany => {
                self.notifications
                    .info(format!("Calling Primer Support: {}", defaults::SUPPORT_LINE));
            }
            Command::ShowMap => {
                self.notifications.info(MAP_COMING_SOON);
            }
            Command::ViewOnMap(_) => {
                self.close_modal();
                self.notifications.info(MAP_COMING_SOON);
                self.navigate(Page::Browse);
            }

            Command::BannerTick(generation) => {
                return self.banner.tick(generation, self.nav.page() == Page::Home);
            }
            Command::ExpireNotifications => {
                return self.notifications.expire(tokio::time::Instant::now());
            }
            Command::DismissNotification(id) => return self.notifications.dismiss(id),
        }
        true
    }

    // ── Side effects ─────────────────────────────────────────────────

    fn navigate(&mut self, page: Page) {
        self.nav.navigate(page);
        self.on_page_shown();
    }

    /// Every page change closes the sheet and starts or stops the banner
    /// timer.
    fn on_page_shown(&mut self) {
        self.close_modal();
        if self.nav.page() == Page::Home {
            self.banner.enter_home();
        } else {
            self.banner.leave_home();
        }
    }

    fn close_modal(&mut self) {
        self.modal.close();
        self.gallery.clear();
    }

    fn save_draft(&mut self) -> bool {
        let ModalState::EditField { field, draft } = self.modal.state().clone() else {
            return false;
        };
        match self.profile.save_field(field, &draft) {
            Ok(()) => {
                self.close_modal();
                self.notifications.success("Profile updated");
                true
            }
            Err(e) => {
                debug!(error = %e, "profile edit rejected");
                false
            }
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn view_context(&self) -> ViewContext<'_> {
        ViewContext {
            data: &self.data,
            favorites: &self.favorites,
            profile: &self.profile,
            filter: &self.filter,
            gallery: &self.gallery,
            banner_index: self.banner.index(),
            location: self.location,
        }
    }

    fn build_screen(&self) -> Screen {
        let ctx = self.view_context();
        let page = self.nav.page();
        Screen {
            chrome: Chrome {
                page,
                fragment: self.nav.address().current().to_owned(),
                theme: self.profile.theme(),
                scroll_locked: self.modal.scroll_locked(),
                can_go_back: self.nav.address().can_go_back(),
                can_go_forward: self.nav.address().can_go_forward(),
            },
            body: view::page(&ctx, page),
            modal: view::modal(&ctx, self.modal.state()),
            notifications: self.notifications.active().cloned().collect(),
        }
    }
}

/// Placeholder until the first real build in `Controller::new`.
fn blank_screen() -> Screen {
    Screen {
        chrome: Chrome {
            page: Page::Home,
            fragment: Page::Home.fragment(),
            theme: Theme::Light,
            scroll_locked: false,
            can_go_back: false,
            can_go_forward: false,
        },
        body: PageView::Error {
            message: String::new(),
        },
        modal: None,
        notifications: Vec::new(),
    }
}
