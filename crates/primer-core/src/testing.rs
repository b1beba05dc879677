// Shared fixtures for unit tests.

use std::sync::Arc;

use crate::defaults;
use crate::error::CoreError;
use crate::filter::FilterState;
use crate::gallery::Gallery;
use crate::model::{DynamicContent, Property};
use crate::store::{DataStore, FavoritesStore, KvStore, MemoryStore, ProfileStore};
use crate::view::ViewContext;

/// Storage that refuses every read and write, like a revoked or full
/// quota.
pub(crate) struct FailingStore;

impl KvStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Err(CoreError::storage(key, "storage unavailable"))
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), CoreError> {
        Err(CoreError::storage(key, "quota exceeded"))
    }
}

pub(crate) struct Fixture {
    pub data: DataStore,
    pub favorites: FavoritesStore,
    pub profile: ProfileStore,
    pub filter: FilterState,
    pub gallery: Gallery,
    pub banner_index: usize,
    pub storage: Arc<MemoryStore>,
}

impl Fixture {
    pub fn builtin() -> Self {
        Self::with_properties(defaults::properties())
    }

    pub fn with_properties(properties: Vec<Property>) -> Self {
        Self::with_storage(properties, MemoryStore::new())
    }

    pub fn with_storage(properties: Vec<Property>, storage: MemoryStore) -> Self {
        let storage = Arc::new(storage);
        Self {
            data: DataStore::new(properties, Vec::new(), defaults::dynamic_content()),
            favorites: FavoritesStore::load(storage.clone()),
            profile: ProfileStore::load(storage.clone()),
            filter: FilterState::default(),
            gallery: Gallery::default(),
            banner_index: 0,
            storage,
        }
    }

    pub fn clear_banners(&mut self) {
        let content = DynamicContent {
            banners: Vec::new(),
            hero: defaults::hero(),
        };
        self.data = DataStore::new(
            self.data.properties().to_vec(),
            self.data.schools().to_vec(),
            content,
        );
    }

    pub fn ctx(&self) -> ViewContext<'_> {
        ViewContext {
            data: &self.data,
            favorites: &self.favorites,
            profile: &self.profile,
            filter: &self.filter,
            gallery: &self.gallery,
            banner_index: self.banner_index,
            location: defaults::LOCATION,
        }
    }
}
