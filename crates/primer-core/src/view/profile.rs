use serde::{Deserialize, Serialize};

use super::ViewContext;
use crate::defaults;
use crate::format;
use crate::model::ProfileField;

const RECENT_BOOKINGS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    pub name: String,
    pub initial: String,
    pub avatar: Option<String>,
    pub member_since: String,
    pub favorites: usize,
    pub bookings: usize,
    pub listings_label: String,
    pub contacts: Vec<ContactRow>,
    pub recent_bookings: Vec<BookingRow>,
    pub dark_mode: bool,
    pub notifications: bool,
    pub location: String,
    pub support_phone: String,
    pub support_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRow {
    pub field: ProfileField,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRow {
    pub id: String,
    pub service: String,
    pub package: String,
    pub status: String,
    pub total: String,
}

pub(super) fn build(ctx: &ViewContext<'_>) -> ProfileView {
    let profile = ctx.profile.profile();
    let bookings = ctx.profile.bookings();

    let contacts = ProfileField::ALL
        .into_iter()
        .map(|field| {
            let value = profile.field(field);
            ContactRow {
                field,
                label: field.label().to_owned(),
                value: if value.is_empty() {
                    "Not set".to_owned()
                } else {
                    value.to_owned()
                },
            }
        })
        .collect();

    ProfileView {
        name: profile.name.clone(),
        initial: profile.initial(),
        avatar: profile.avatar.clone(),
        member_since: format!("Member since {}", profile.member_since),
        favorites: ctx.favorites.len(),
        bookings: bookings.len(),
        listings_label: format!("{}+", ctx.data.properties().len()),
        contacts,
        recent_bookings: bookings
            .iter()
            .take(RECENT_BOOKINGS)
            .map(|b| BookingRow {
                id: b.id.clone(),
                service: b.service.clone(),
                package: b.package.clone(),
                status: b.status.clone(),
                total: format!("₦{}", format::naira(b.total)),
            })
            .collect(),
        dark_mode: profile.preferences.dark_mode,
        notifications: profile.preferences.notifications,
        location: format!("{:.4}, {:.4}", ctx.location.lat, ctx.location.lng),
        support_phone: defaults::SUPPORT_LINE.to_owned(),
        support_email: defaults::SUPPORT_EMAIL.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::keys;
    use crate::store::MemoryStore;
    use crate::testing::Fixture;
    use pretty_assertions::assert_eq;

    #[test]
    fn profile_page_summarizes_user() {
        let bookings = r#"[
            {"id":"b1","service":"Cleaning","package":"Basic","status":"done","total":2500},
            {"id":"b2"},{"id":"b3"},{"id":"b4"}
        ]"#;
        let storage = MemoryStore::new()
            .with(keys::BOOKINGS, bookings)
            .with(keys::FAVORITES, r#"["prop1"]"#);
        let fx = Fixture::with_storage(crate::defaults::properties(), storage);

        let view = build(&fx.ctx());
        assert_eq!(view.initial, "M");
        assert_eq!(view.member_since, "Member since 2026");
        assert_eq!((view.favorites, view.bookings), (1, 4));
        assert_eq!(view.listings_label, "3+");
        assert_eq!(view.recent_bookings.len(), 3);
        assert_eq!(view.recent_bookings[0].total, "₦2,500");
        assert_eq!(view.recent_bookings[1].total, "₦1,500");
        assert_eq!(view.location, "9.0820, 8.6753");
    }

    #[test]
    fn empty_address_shows_not_set() {
        let mut fx = Fixture::builtin();
        fx.profile.logout();
        let view = build(&fx.ctx());
        let address = view
            .contacts
            .iter()
            .find(|c| c.field == ProfileField::Address)
            .map(|c| c.value.as_str());
        assert_eq!(address, Some("Not set"));
    }
}
