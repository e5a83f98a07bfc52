mod loader;
mod types;

pub use loader::{ConfigError, MAX_DEBOUNCE_MS};
pub use types::{CatalogConfig, Config, StorageConfig, UiConfig};
