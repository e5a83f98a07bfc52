//! Read-only recipe collection.
//!
//! The store is built once at startup and never mutated afterwards.
//! Every call to [`RecipeStore::all`] sees the same snapshot.

use std::sync::Arc;

use crate::catalog::loader::{validate_ids, CatalogError};
use crate::catalog::seed::builtin_recipes;
use crate::catalog::types::{Recipe, RecipeId};

#[derive(Debug, Clone)]
pub struct RecipeStore {
    recipes: Arc<[Recipe]>,
}

impl RecipeStore {
    /// Create a store from recipes in catalog order.
    ///
    /// Fails if an id is zero or appears twice.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        validate_ids(&recipes)?;
        Ok(Self {
            recipes: recipes.into(),
        })
    }

    /// Store seeded with the builtin catalog.
    pub fn builtin() -> Self {
        Self {
            recipes: builtin_recipes().into(),
        }
    }

    /// All recipes in catalog order.
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Shared handle to the same snapshot returned by [`all`](Self::all).
    pub fn snapshot(&self) -> Arc<[Recipe]> {
        Arc::clone(&self.recipes)
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::Difficulty;

    #[test]
    fn snapshot_is_reference_stable() {
        let store = RecipeStore::builtin();
        let first = store.snapshot();
        let second = store.snapshot();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.all().as_ptr(), first.as_ptr());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let recipes = vec![
            Recipe::new(1, "A", 10, Difficulty::Easy),
            Recipe::new(1, "B", 20, Difficulty::Hard),
        ];
        let err = RecipeStore::new(recipes).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { id: 1 }));
    }

    #[test]
    fn rejects_zero_id() {
        let err = RecipeStore::new(vec![Recipe::new(0, "Zero", 1, Difficulty::Easy)]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidId { .. }));
    }

    #[test]
    fn get_finds_by_id() {
        let store = RecipeStore::builtin();
        let first_id = store.all()[0].id;
        assert_eq!(store.get(first_id).map(|r| r.id), Some(first_id));
        assert!(store.get(9999).is_none());
    }

    #[test]
    fn empty_store_is_valid() {
        let store = RecipeStore::new(Vec::new()).unwrap();
        assert!(store.is_empty());
    }
}
