use indexmap::IndexSet;
use tracing::debug;

use super::kv::{self, SharedKv, keys};

/// Ordered set of saved property ids, persisted after every mutation.
///
/// Ids are not checked against the dataset: a favorite whose listing has
/// disappeared from the feed stays saved and is simply not shown.
pub struct FavoritesStore {
    ids: IndexSet<String>,
    storage: SharedKv,
}

impl FavoritesStore {
    /// Rehydrate from storage; anything unreadable starts empty.
    pub fn load(storage: SharedKv) -> Self {
        let ids: Vec<String> = kv::read_json(storage.as_ref(), keys::FAVORITES).unwrap_or_default();
        Self {
            ids: ids.into_iter().collect(),
            storage,
        }
    }

    /// Flip membership of `id`, persist, and return the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_saved = if self.ids.shift_remove(id) {
            false
        } else {
            self.ids.insert(id.to_owned());
            true
        };
        debug!(id, saved = now_saved, "favorite toggled");
        self.persist();
        now_saved
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in the order they were saved.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    fn persist(&self) {
        let ids: Vec<&str> = self.ids().collect();
        kv::write_json(self.storage.as_ref(), keys::FAVORITES, &ids);
    }
}
