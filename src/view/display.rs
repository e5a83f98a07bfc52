use crate::catalog::{Recipe, RecipeId};
use crate::view::favorites::FavoriteSet;
use crate::view::filter::Filter;
use crate::view::search::SearchQuery;
use crate::view::sort::SortOrder;

/// Ordered subset of the catalog selected for display.
///
/// Holds references into the catalog, so every entry is a catalog recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList<'a> {
    recipes: Vec<&'a Recipe>,
    total: usize,
}

impl<'a> DisplayList<'a> {
    pub fn recipes(&self) -> &[&'a Recipe] {
        &self.recipes
    }

    pub fn get(&self, index: usize) -> Option<&'a Recipe> {
        self.recipes.get(index).copied()
    }

    pub fn ids(&self) -> Vec<RecipeId> {
        self.recipes.iter().map(|recipe| recipe.id).collect()
    }

    /// Number of recipes shown.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Size of the catalog the list was derived from.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn counter_text(&self) -> String {
        format!("Showing {} of {} recipes", self.len(), self.total)
    }
}

/// Derive the display list: search, then filter, then a stable sort.
///
/// Pure: the same inputs always produce the same ordered output.
pub fn compute_display_list<'a>(
    recipes: &'a [Recipe],
    filter: Filter,
    sort: SortOrder,
    query: &SearchQuery,
    favorites: &FavoriteSet,
) -> DisplayList<'a> {
    let mut shown: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| query.matches(recipe))
        .filter(|recipe| filter.matches(recipe, favorites))
        .collect();
    sort.apply(&mut shown);

    DisplayList {
        recipes: shown,
        total: recipes.len(),
    }
}
