//! Persisted UI state behind an injectable key-value capability.

mod error;
mod favorites;
mod file;
mod kv;

pub use error::StorageError;
pub use favorites::{FavoritesRepository, FAVORITES_KEY};
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
