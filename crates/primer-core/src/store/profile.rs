use tracing::debug;

use super::kv::{self, SharedKv, keys};
use crate::error::CoreError;
use crate::model::{Booking, ProfileField, Theme, UserProfile};

/// User profile, theme and bookings, each mirrored to storage with
/// read-mutate-persist on every change.
pub struct ProfileStore {
    profile: UserProfile,
    theme: Theme,
    bookings: Vec<Booking>,
    storage: SharedKv,
}

impl ProfileStore {
    /// Rehydrate from storage. A missing profile is seeded from the stored
    /// theme so dark mode survives a first run.
    pub fn load(storage: SharedKv) -> Self {
        let theme = match storage.get(keys::THEME) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!(error = %e, "storage read failed");
                Theme::default()
            }
        };
        let profile = kv::read_json(storage.as_ref(), keys::USER_PROFILE)
            .unwrap_or_else(|| UserProfile::seeded(theme));
        let bookings = kv::read_json(storage.as_ref(), keys::BOOKINGS).unwrap_or_default();
        Self {
            profile,
            theme,
            bookings,
            storage,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Replace one contact field. An empty value is rejected and nothing is
    /// written.
    pub fn save_field(&mut self, field: ProfileField, value: &str) -> Result<(), CoreError> {
        if value.is_empty() {
            return Err(CoreError::ValidationFailed {
                message: format!("{} cannot be empty", field.label()),
            });
        }
        value.clone_into(self.profile.field_mut(field));
        debug!(%field, "profile field saved");
        self.persist_profile();
        Ok(())
    }

    pub fn set_notifications(&mut self, enabled: bool) {
        self.profile.preferences.notifications = enabled;
        self.persist_profile();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.profile.preferences.dark_mode = theme.is_dark();
        kv::write_raw(self.storage.as_ref(), keys::THEME, theme.as_ref());
        self.persist_profile();
    }

    /// Flip light/dark and return the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }

    /// Swap in the guest profile, keeping the current dark-mode choice.
    pub fn logout(&mut self) {
        self.profile = UserProfile::guest(self.profile.preferences.dark_mode);
        self.persist_profile();
    }

    fn persist_profile(&self) {
        kv::write_json(self.storage.as_ref(), keys::USER_PROFILE, &self.profile);
    }
}
