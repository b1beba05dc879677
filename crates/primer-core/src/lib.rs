//! Client state machine and view pipeline for Primer housing listings.
//!
//! This crate owns everything between the remote feeds (`primer-api`) and a
//! rendering host (`primer-tui`):
//!
//! - **[`Controller`]**: Single owner of the session state. Hosts feed it
//!   [`Command`]s; each one runs to completion and yields reconciliation
//!   [`Patch`]es against the previous [`view::Screen`].
//!
//! - **[`loader::boot`]**: Dataset fetch with built-in fallback, then a
//!   time-bounded location lookup. Never fails.
//!
//! - **Stores** ([`store`]): the read-only [`DataStore`] plus the
//!   write-through [`FavoritesStore`] and [`ProfileStore`] backed by a
//!   [`KvStore`].
//!
//! - **State machines**: [`filter`], [`nav`], [`modal`], [`gallery`] and
//!   the timer-driven [`banner`] scheduler.
//!
//! - **Views** ([`view`], [`reconcile`]): pure, serializable screen
//!   descriptions and a diff over them.

pub mod banner;
pub mod config;
pub mod controller;
pub mod convert;
pub mod defaults;
pub mod error;
pub mod filter;
pub mod format;
pub mod gallery;
pub mod loader;
pub mod location;
pub mod modal;
pub mod model;
pub mod nav;
pub mod notification;
pub mod reconcile;
pub mod store;
pub mod view;

#[cfg(test)]
mod testing;

// ── Primary re-exports ──────────────────────────────────────────────
pub use banner::{BANNER_PERIOD, BannerScheduler, IntervalDriver, ManualDriver, TimerDriver, TimerHandle};
pub use config::{BootConfig, LocationConfig};
pub use controller::{Command, Controller};
pub use error::CoreError;
pub use filter::{Bedrooms, FilterState, NO_PRICE_CAP, PRICE_PRESETS};
pub use gallery::{Gallery, GalleryStep};
pub use loader::{BootOutcome, boot};
pub use modal::ModalState;
pub use model::{Banner, Booking, Coordinates, Property, ProfileField, Theme, UserProfile};
pub use nav::Page;
pub use notification::{Notification, NotificationLevel};
pub use reconcile::Patch;
pub use store::{DataStore, FavoritesStore, FileStore, KvStore, MemoryStore, ProfileStore, SharedKv};
