// ── Page navigation ──
//
// The current page is mirrored into an address fragment (`#browse`). The
// `AddressBar` keeps the fragment history so back/forward can re-derive
// the page; any fragment that does not name a page resolves to home.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use tracing::debug;

/// Top-level pages, navigable by number keys 1-4.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Page {
    #[default]
    Home, // 1
    Browse,    // 2
    Favorites, // 3
    Profile,   // 4
}

impl Page {
    /// All pages in tab-bar order.
    pub const ALL: [Page; 4] = [Self::Home, Self::Browse, Self::Favorites, Self::Profile];

    /// Resolve a page name or fragment (`browse`, `#browse`). Unknown or
    /// empty names resolve to `Home`.
    pub fn from_fragment(fragment: &str) -> Self {
        let name = fragment.trim().trim_start_matches('#');
        name.parse().unwrap_or_else(|_| {
            if !name.is_empty() {
                debug!(name, "unknown page, falling back to home");
            }
            Self::Home
        })
    }

    /// `#home`, `#browse`, ...
    pub fn fragment(self) -> String {
        format!("#{self}")
    }

    /// Page from a numeric key (1-4).
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Home),
            2 => Some(Self::Browse),
            3 => Some(Self::Favorites),
            4 => Some(Self::Profile),
            _ => None,
        }
    }

    /// Next page in tab order (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous page in tab order (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Tab-bar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Browse => "Browse",
            Self::Favorites => "Favorites",
            Self::Profile => "Profile",
        }
    }
}

// ── AddressBar ───────────────────────────────────────────────────────

/// Fragment history with a cursor, like a browser's session history.
#[derive(Debug, Clone)]
pub struct AddressBar {
    entries: Vec<String>,
    cursor: usize,
}

impl AddressBar {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![initial.to_owned()],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &str {
        self.entries.get(self.cursor).map_or("", String::as_str)
    }

    /// Push a fragment, discarding any forward entries. Pushing the current
    /// fragment again is a no-op.
    pub fn push(&mut self, fragment: &str) {
        if self.current() == fragment {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(fragment.to_owned());
        self.cursor = self.entries.len() - 1;
    }

    pub fn back(&mut self) -> Option<&str> {
        self.cursor = self.cursor.checked_sub(1)?;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}

// ── Navigator ────────────────────────────────────────────────────────

/// Owns the current page and keeps it in sync with the address bar.
#[derive(Debug, Clone)]
pub struct Navigator {
    page: Page,
    address: AddressBar,
}

impl Navigator {
    /// Start at whatever `fragment` names. A fragment that does not name a
    /// page is rewritten to `#home`.
    pub fn new(fragment: &str) -> Self {
        let page = Page::from_fragment(fragment);
        Self {
            page,
            address: AddressBar::new(&page.fragment()),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn address(&self) -> &AddressBar {
        &self.address
    }

    pub fn navigate(&mut self, page: Page) -> Page {
        self.page = page;
        self.address.push(&page.fragment());
        debug!(%page, "navigated");
        page
    }

    /// Step back through the fragment history, re-deriving the page.
    pub fn back(&mut self) -> Option<Page> {
        let page = Page::from_fragment(self.address.back()?);
        self.page = page;
        Some(page)
    }

    pub fn forward(&mut self) -> Option<Page> {
        let page = Page::from_fragment(self.address.forward()?);
        self.page = page;
        Some(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_fragment_is_home() {
        assert_eq!(Page::from_fragment("#services"), Page::Home);
        assert_eq!(Page::from_fragment(""), Page::Home);
        assert_eq!(Page::from_fragment("#"), Page::Home);
        assert_eq!(Page::from_fragment("Browse"), Page::Home);
        assert_eq!(Page::from_fragment("#browse"), Page::Browse);
        assert_eq!(Page::from_fragment("profile"), Page::Profile);
    }

    #[test]
    fn navigate_unknown_syncs_home_fragment() {
        let mut nav = Navigator::new("#browse");
        assert_eq!(nav.navigate(Page::from_fragment("nowhere")), Page::Home);
        assert_eq!(nav.address().current(), "#home");
    }

    #[test]
    fn initial_bogus_fragment_is_rewritten() {
        let nav = Navigator::new("#/weird?x=1");
        assert_eq!(nav.page(), Page::Home);
        assert_eq!(nav.address().current(), "#home");
    }

    #[test]
    fn back_and_forward_rederive_page() {
        let mut nav = Navigator::new("#home");
        nav.navigate(Page::Browse);
        nav.navigate(Page::Profile);

        assert_eq!(nav.back(), Some(Page::Browse));
        assert_eq!(nav.back(), Some(Page::Home));
        assert_eq!(nav.back(), None);
        assert_eq!(nav.page(), Page::Home);
        assert_eq!(nav.forward(), Some(Page::Browse));

        // a new navigation drops the forward entries
        nav.navigate(Page::Favorites);
        assert!(!nav.address().can_go_forward());
        assert_eq!(nav.back(), Some(Page::Browse));
    }

    #[test]
    fn same_page_does_not_grow_history() {
        let mut nav = Navigator::new("#browse");
        nav.navigate(Page::Browse);
        assert!(!nav.address().can_go_back());
    }

    #[test]
    fn tab_order_wraps() {
        assert_eq!(Page::Profile.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::Profile);
        assert_eq!(Page::from_number(3), Some(Page::Favorites));
    }
}
