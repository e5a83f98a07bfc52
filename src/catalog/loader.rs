use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::store::RecipeStore;
use crate::catalog::types::{Recipe, RecipeId};

/// Errors that can occur when loading a recipe catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate recipe id {id}")]
    DuplicateId { id: RecipeId },

    #[error("Recipe '{title}' has id 0; ids must be positive")]
    InvalidId { title: String },
}

impl RecipeStore {
    /// Loads a catalog from a JSON array of recipes.
    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let recipes: Vec<Recipe> =
            serde_json::from_str(&content).map_err(|e| CatalogError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let store = Self::new(recipes)?;
        tracing::info!(path = %path.display(), recipes = store.len(), "Loaded recipe catalog");
        Ok(store)
    }
}

/// Checks that every id is positive and unique.
pub fn validate_ids(recipes: &[Recipe]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(recipes.len());
    for recipe in recipes {
        if recipe.id == 0 {
            return Err(CatalogError::InvalidId {
                title: recipe.title.clone(),
            });
        }
        if !seen.insert(recipe.id) {
            return Err(CatalogError::DuplicateId { id: recipe.id });
        }
    }
    Ok(())
}
