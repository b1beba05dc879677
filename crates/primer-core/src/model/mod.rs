// ── Domain model ──
//
// Canonical types the rest of the crate works with. Wire records from
// `primer_api` are normalized into these by `crate::convert`; persisted
// records (profile, bookings) round-trip through storage as-is.

pub mod content;
pub mod profile;
pub mod property;

pub use content::{Banner, DynamicContent, Hero};
pub use profile::{Booking, Preferences, ProfileField, Theme, UserProfile};
pub use property::{Coordinates, Feature, Landlord, Property};
