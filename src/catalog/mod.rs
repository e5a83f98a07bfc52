//! Recipe records and the read-only store that holds them.

mod loader;
mod seed;
mod store;
mod types;

pub use loader::CatalogError;
pub use seed::builtin_recipes;
pub use store::RecipeStore;
pub use types::{Difficulty, Recipe, RecipeId, Step};
