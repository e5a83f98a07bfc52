use crate::catalog::RecipeId;
use crate::storage::error::StorageError;
use crate::storage::kv::KeyValueStore;
use crate::view::FavoriteSet;

/// Key under which the favorites record is stored.
pub const FAVORITES_KEY: &str = "recipeFavorites";

/// Reads and writes the favorites record through an injected store.
pub struct FavoritesRepository {
    store: Box<dyn KeyValueStore>,
}

impl FavoritesRepository {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load persisted favorites. Absent or corrupt data yields an empty set.
    pub fn load(&self) -> FavoriteSet {
        let Some(raw) = self.store.get(FAVORITES_KEY) else {
            tracing::debug!("No persisted favorites");
            return FavoriteSet::new();
        };
        match serde_json::from_str::<Option<Vec<RecipeId>>>(&raw) {
            Ok(ids) => {
                let favorites: FavoriteSet = ids.unwrap_or_default().into_iter().collect();
                tracing::debug!(count = favorites.len(), "Loaded favorites");
                favorites
            }
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring corrupt favorites record");
                FavoriteSet::new()
            }
        }
    }

    pub fn save(&mut self, favorites: &FavoriteSet) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(favorites)?;
        self.store.set(FAVORITES_KEY, &encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::MemoryStore;

    fn repo_with(raw: &str) -> FavoritesRepository {
        FavoritesRepository::new(Box::new(MemoryStore::with_entry(FAVORITES_KEY, raw)))
    }

    #[test]
    fn absent_record_is_empty() {
        let repo = FavoritesRepository::new(Box::new(MemoryStore::new()));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn corrupt_record_is_empty() {
        for raw in ["not json", "{\"a\":1}", "[1, \"two\"]", "[-1]", ""] {
            assert!(repo_with(raw).load().is_empty(), "raw = {raw:?}");
        }
    }

    #[test]
    fn null_record_is_empty() {
        assert!(repo_with("null").load().is_empty());
    }

    #[test]
    fn save_writes_json_array() {
        let store = MemoryStore::new();
        let mut repo = FavoritesRepository::new(Box::new(store.clone()));
        let favorites: FavoriteSet = [4, 2].into_iter().collect();
        repo.save(&favorites).unwrap();
        assert_eq!(store.get(FAVORITES_KEY).as_deref(), Some("[2,4]"));
        assert_eq!(repo.load(), favorites);
    }
}
