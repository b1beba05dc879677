// ── Persisted user records ──
//
// These are stored verbatim under the `userProfile` and `bookings` keys,
// so field names follow the stored camelCase layout. Every field has a
// default: a partially written record still loads.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::defaults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: Option<String>,
    pub address: String,
    pub member_since: String,
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub notifications: bool,
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: true,
            dark_mode: false,
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::seeded(Theme::Light)
    }
}

impl UserProfile {
    /// First-run profile; dark mode follows the stored theme.
    pub fn seeded(theme: Theme) -> Self {
        Self {
            name: defaults::PROFILE_NAME.into(),
            email: defaults::PROFILE_EMAIL.into(),
            phone: defaults::PROFILE_PHONE.into(),
            avatar: None,
            address: defaults::PROFILE_ADDRESS.into(),
            member_since: defaults::PROFILE_MEMBER_SINCE.into(),
            preferences: Preferences {
                notifications: true,
                dark_mode: theme.is_dark(),
            },
        }
    }

    /// The profile left behind after logout. Dark mode is carried over.
    pub fn guest(dark_mode: bool) -> Self {
        Self {
            name: "Guest User".into(),
            email: "guest@email.com".into(),
            phone: "+234 800 000 0000".into(),
            avatar: None,
            address: String::new(),
            member_since: "2025".into(),
            preferences: Preferences {
                notifications: true,
                dark_mode,
            },
        }
    }

    /// Avatar fallback: the first character of the name.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }

    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Phone => &self.phone,
            ProfileField::Email => &self.email,
            ProfileField::Address => &self.address,
        }
    }

    pub(crate) fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Phone => &mut self.phone,
            ProfileField::Email => &mut self.email,
            ProfileField::Address => &mut self.address,
        }
    }
}

/// Contact fields the profile page lets the user edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProfileField {
    Phone,
    Email,
    Address,
}

impl ProfileField {
    pub const ALL: [ProfileField; 3] = [Self::Phone, Self::Email, Self::Address];

    pub fn label(self) -> &'static str {
        match self {
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Address => "Address",
        }
    }

    pub fn editor_title(self) -> &'static str {
        match self {
            Self::Phone => "Edit Phone Number",
            Self::Email => "Edit Email",
            Self::Address => "Edit Address",
        }
    }
}

/// Stored under the `theme` key as a bare `light` / `dark` string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn from_dark_mode(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}

/// A read-only booking record. Bookings are created elsewhere; the app only
/// lists them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Booking {
    pub id: String,
    pub service: String,
    pub package: String,
    pub status: String,
    pub total: u64,
}

impl Default for Booking {
    fn default() -> Self {
        Self {
            id: String::new(),
            service: String::new(),
            package: String::new(),
            status: String::new(),
            total: defaults::BOOKING_TOTAL,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn partial_profile_fills_defaults() {
        let profile: UserProfile = serde_json::from_value(json!({
            "name": "Ada",
            "preferences": { "darkMode": true }
        }))
        .unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.email, "Me@email.com");
        assert!(profile.preferences.dark_mode);
        assert!(profile.preferences.notifications);
    }

    #[test]
    fn profile_uses_stored_field_names() {
        let value = serde_json::to_value(UserProfile::guest(true)).unwrap();
        assert_eq!(value["memberSince"], "2025");
        assert_eq!(value["preferences"]["darkMode"], true);
        assert_eq!(value["avatar"], serde_json::Value::Null);
    }

    #[test]
    fn theme_round_trips_as_bare_word() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(Theme::Light.to_string(), "light");
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn booking_total_defaults() {
        let booking: Booking =
            serde_json::from_value(json!({ "id": "b1", "service": "Cleaning" })).unwrap();
        assert_eq!(booking.total, 1500);
    }
}
