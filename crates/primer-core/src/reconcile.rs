// ── View reconciliation ──
//
// Diffs two `Screen` descriptions into the smallest patch list the host
// needs to apply: a favorite toggle on the browse page becomes a flag flip
// on one card, a banner tick replaces only the banner slot, and anything
// else structural replaces the page.
//
// Invariant: `apply(old, diff(old, new)) == new`.

use serde::{Deserialize, Serialize};

use crate::notification::Notification;
use crate::view::{BannerView, Chrome, ModalView, PageView, Screen};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Patch {
    SetChrome(Chrome),
    /// Flip the favorite indicator on every card and open detail sheet
    /// showing `id`.
    SetFavorite { id: String, favorite: bool },
    /// Replace the home-page banner slot. Ignored unless home is showing.
    ReplaceBanner(BannerView),
    ReplacePage(PageView),
    ReplaceModal(Option<ModalView>),
    SetNotifications(Vec<Notification>),
}

/// Compute the patches that turn `old` into `new`.
pub fn diff(old: &Screen, new: &Screen) -> Vec<Patch> {
    let mut patches = Vec::new();
    let mut scratch = old.clone();

    if old.chrome != new.chrome {
        patches.push(Patch::SetChrome(new.chrome.clone()));
    }

    for (id, favorite) in favorite_changes(old, new) {
        let patch = Patch::SetFavorite { id, favorite };
        apply_one(&mut scratch, &patch);
        patches.push(patch);
    }

    if scratch.body != new.body {
        patches.push(body_patch(&scratch.body, &new.body));
    }

    if scratch.modal != new.modal {
        patches.push(Patch::ReplaceModal(new.modal.clone()));
    }

    if old.notifications != new.notifications {
        patches.push(Patch::SetNotifications(new.notifications.clone()));
    }

    patches
}

/// Apply `patches` in order.
pub fn apply(screen: &mut Screen, patches: &[Patch]) {
    for patch in patches {
        apply_one(screen, patch);
    }
}

fn apply_one(screen: &mut Screen, patch: &Patch) {
    match patch {
        Patch::SetChrome(chrome) => screen.chrome = chrome.clone(),
        Patch::SetFavorite { id, favorite } => {
            for card in screen.body.cards_mut().filter(|c| &c.id == id) {
                card.favorite = *favorite;
            }
            if let Some(ModalView::Detail(detail)) = &mut screen.modal {
                if &detail.id == id {
                    detail.favorite = *favorite;
                }
            }
        }
        Patch::ReplaceBanner(banner) => {
            if let PageView::Home(home) = &mut screen.body {
                home.banner = banner.clone();
            }
        }
        Patch::ReplacePage(page) => screen.body = page.clone(),
        Patch::ReplaceModal(modal) => screen.modal = modal.clone(),
        Patch::SetNotifications(notes) => screen.notifications = notes.clone(),
    }
}

/// Cards (and the open detail sheet) whose favorite flag differs between
/// the two screens, matched by listing id.
fn favorite_changes(old: &Screen, new: &Screen) -> Vec<(String, bool)> {
    let mut changes: Vec<(String, bool)> = Vec::new();
    let mut record = |id: &str, was: bool, now: bool| {
        if was != now && !changes.iter().any(|(seen, _)| seen == id) {
            changes.push((id.to_owned(), now));
        }
    };

    for card in new.body.cards() {
        if let Some(before) = old.body.cards().iter().find(|c| c.id == card.id) {
            record(&card.id, before.favorite, card.favorite);
        }
    }
    if let (Some(ModalView::Detail(before)), Some(ModalView::Detail(after))) = (&old.modal, &new.modal) {
        if before.id == after.id {
            record(&after.id, before.favorite, after.favorite);
        }
    }
    changes
}

/// A home page whose only difference is the banner gets a banner patch;
/// everything else is replaced wholesale.
fn body_patch(old: &PageView, new: &PageView) -> Patch {
    if let (PageView::Home(before), PageView::Home(after)) = (old, new) {
        let mut candidate = before.clone();
        candidate.banner = after.banner.clone();
        if candidate == *after {
            return Patch::ReplaceBanner(after.banner.clone());
        }
    }
    Patch::ReplacePage(new.clone())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::Theme;
    use crate::nav::Page;
    use crate::notification::NotificationLevel;
    use crate::testing::Fixture;
    use crate::view;
    use pretty_assertions::assert_eq;

    fn screen(fx: &Fixture, page: Page) -> Screen {
        Screen {
            chrome: Chrome {
                page,
                fragment: page.fragment(),
                theme: Theme::Light,
                scroll_locked: false,
                can_go_back: false,
                can_go_forward: false,
            },
            body: view::page(&fx.ctx(), page),
            modal: None,
            notifications: Vec::new(),
        }
    }

    fn roundtrip(old: &Screen, new: &Screen) -> Vec<Patch> {
        let patches = diff(old, new);
        let mut patched = old.clone();
        apply(&mut patched, &patches);
        assert_eq!(&patched, new);
        patches
    }

    #[test]
    fn identical_screens_need_no_patches() {
        let fx = Fixture::builtin();
        let s = screen(&fx, Page::Browse);
        assert!(diff(&s, &s).is_empty());
    }

    #[test]
    fn favorite_toggle_on_browse_flips_one_card() {
        let mut fx = Fixture::builtin();
        let before = screen(&fx, Page::Browse);
        fx.favorites.toggle("prop2");
        let after = screen(&fx, Page::Browse);

        let patches = roundtrip(&before, &after);
        assert_eq!(
            patches,
            [Patch::SetFavorite {
                id: "prop2".into(),
                favorite: true
            }]
        );
    }

    #[test]
    fn favorite_toggle_on_favorites_page_replaces_list() {
        let mut fx = Fixture::builtin();
        fx.favorites.toggle("prop1");
        let before = screen(&fx, Page::Favorites);
        fx.favorites.toggle("prop1");
        let after = screen(&fx, Page::Favorites);

        let patches = roundtrip(&before, &after);
        assert!(patches.iter().any(|p| matches!(p, Patch::ReplacePage(_))));
    }

    #[test]
    fn banner_tick_patches_only_the_banner() {
        let mut fx = Fixture::builtin();
        let before = screen(&fx, Page::Home);
        fx.banner_index = 1;
        let after = screen(&fx, Page::Home);

        let patches = roundtrip(&before, &after);
        assert_eq!(patches.len(), 1);
        assert!(matches!(&patches[0], Patch::ReplaceBanner(b) if b.title == "24/7 Electricity"));
    }

    #[test]
    fn banner_patch_is_ignored_off_home() {
        let fx = Fixture::builtin();
        let mut browse = screen(&fx, Page::Browse);
        let untouched = browse.clone();
        let home = screen(&fx, Page::Home);
        let PageView::Home(home) = home.body else {
            panic!("expected home");
        };
        apply(&mut browse, &[Patch::ReplaceBanner(home.banner)]);
        assert_eq!(browse, untouched);
    }

    #[test]
    fn navigation_replaces_chrome_and_page() {
        let fx = Fixture::builtin();
        let patches = roundtrip(&screen(&fx, Page::Home), &screen(&fx, Page::Profile));
        assert!(matches!(patches[0], Patch::SetChrome(_)));
        assert!(matches!(patches[1], Patch::ReplacePage(PageView::Profile(_))));
    }

    #[test]
    fn notifications_and_modal_patch_independently() {
        let fx = Fixture::builtin();
        let before = screen(&fx, Page::Browse);
        let mut after = before.clone();
        after.notifications.push(Notification {
            id: 1,
            message: "Added to favorites".into(),
            level: NotificationLevel::Success,
        });
        after.modal = view::modal(&fx.ctx(), &crate::modal::ModalState::PriceFilter);

        let patches = roundtrip(&before, &after);
        assert_eq!(patches.len(), 2);
    }
}
