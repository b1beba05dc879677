// ── Stores ──
//
// `DataStore` holds the read-only session dataset; `FavoritesStore` and
// `ProfileStore` are write-through mirrors of durable storage (`kv`).

mod data_store;
mod favorites;
pub mod kv;
mod profile;

pub use data_store::{DataStore, UniversityCount};
pub use favorites::FavoritesStore;
pub use kv::{FileStore, KvStore, MemoryStore, SharedKv};
pub use profile::ProfileStore;
