use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::RecipeId;

/// Set of favorite recipe ids.
///
/// Serializes as an ascending JSON array of ids.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet(BTreeSet<RecipeId>);

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.0.contains(&id)
    }

    /// Returns a new set with `id` removed if present, added otherwise.
    #[must_use]
    pub fn toggle(&self, id: RecipeId) -> Self {
        let mut next = self.0.clone();
        if !next.remove(&id) {
            next.insert(id);
        }
        Self(next)
    }

    pub fn iter(&self) -> impl Iterator<Item = RecipeId> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<RecipeId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = RecipeId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Free-function form of [`FavoriteSet::toggle`].
pub fn toggle_favorite(favorites: &FavoriteSet, id: RecipeId) -> FavoriteSet {
    favorites.toggle(id)
}
